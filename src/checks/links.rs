use crate::anchors;
use crate::error::AuditError;
use crate::reachability::Checker;
use crate::report::{AuditReport, ConnectionResult, Diagnostic, Link};
use crate::scope::ScopeFilter;
use crate::session::Session;

/// Runs the link audit against the currently loaded page
pub async fn run(
    session: &Session,
    scope: &ScopeFilter,
    checker: &Checker,
) -> Result<AuditReport, AuditError> {
    let html = session.source().await?;
    let links = anchors::extract(&html);
    Ok(audit(links, scope, checker).await)
}

/// Audits a set of extracted links
///
/// Anchors with a missing or empty href get a malformed diagnostic and no
/// request. Out-of-scope links are skipped silently. Everything else is
/// checked for reachability with bounded concurrency; diagnostics come back
/// in discovery order regardless of which request finished first.
///
/// Pure over its inputs, so the whole pipeline is testable without a
/// browser session.
pub async fn audit(links: Vec<Link>, scope: &ScopeFilter, checker: &Checker) -> AuditReport {
    let total_links = links.len();
    ::log::info!("Found {} links", total_links);

    let mut malformed: Vec<usize> = Vec::new();
    let mut candidates: Vec<(usize, String)> = Vec::new();

    for (index, link) in links.iter().enumerate() {
        match link.href.as_deref() {
            None | Some("") => {
                ::log::warn!(
                    "Anchor `{}` has a missing or empty href",
                    link.display_text
                );
                malformed.push(index);
            }
            Some(href) => {
                let resolved = scope.resolve(href);
                if !scope.in_scope(&resolved) {
                    ::log::debug!("Skipping out-of-scope link: {}", resolved);
                    continue;
                }
                candidates.push((index, scope.normalize(&resolved)));
            }
        }
    }

    let outcomes = checker.check_all(candidates).await;

    let mut findings: Vec<(usize, Diagnostic)> = malformed
        .into_iter()
        .map(|index| {
            (
                index,
                Diagnostic::MalformedLink {
                    display_text: links[index].display_text.clone(),
                },
            )
        })
        .collect();

    for (index, result, status) in outcomes {
        let link = &links[index];
        match result {
            ConnectionResult::Reachable => {}
            ConnectionResult::Unreachable => {
                ::log::warn!(
                    "Cannot establish valid connection for anchor `{}`",
                    link.display_text
                );
                findings.push((
                    index,
                    Diagnostic::UnreachableLink {
                        display_text: link.display_text.clone(),
                        href: link.href.clone().unwrap_or_default(),
                        status,
                    },
                ));
            }
            // The href was present but not a usable URL
            ConnectionResult::Malformed => {
                findings.push((
                    index,
                    Diagnostic::MalformedLink {
                        display_text: link.display_text.clone(),
                    },
                ));
            }
        }
    }

    findings.sort_by_key(|(index, _)| *index);
    AuditReport::new(
        total_links,
        findings.into_iter().map(|(_, diag)| diag).collect(),
    )
}
