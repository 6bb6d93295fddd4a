use crate::error::AuditError;
use crate::report::Diagnostic;
use crate::session::Session;

/// Checks the title of the currently loaded page against the expected title
pub async fn run(session: &Session, expected: &str) -> Result<Option<Diagnostic>, AuditError> {
    let actual = session.title().await?;
    Ok(compare(expected, &actual))
}

/// Compares two titles for exact equality
///
/// On mismatch the diagnostic carries the first character position at which
/// the titles differ; if one title is a prefix of the other, that is the
/// length of the shorter one.
pub fn compare(expected: &str, actual: &str) -> Option<Diagnostic> {
    if expected == actual {
        ::log::debug!("Page title matches expected title");
        return None;
    }

    let position = mismatch_position(expected, actual);
    ::log::warn!(
        "Title different than expected at character position {}",
        position
    );
    Some(Diagnostic::TitleMismatch {
        expected: expected.to_string(),
        actual: actual.to_string(),
        position,
    })
}

fn mismatch_position(expected: &str, actual: &str) -> usize {
    expected
        .chars()
        .zip(actual.chars())
        .position(|(e, a)| e != a)
        .unwrap_or_else(|| expected.chars().count().min(actual.chars().count()))
}
