use crate::config::LoginConfig;
use crate::error::AuditError;
use crate::session::Session;

/// Exercises the login form if the current page is a login page
///
/// Fills the username and password fields and submits the form. One
/// attempt, no retry, no verification beyond the submission itself.
/// Returns whether a form was actually submitted.
pub async fn run(session: &Session, config: &LoginConfig) -> Result<bool, AuditError> {
    let title = session.title().await?;
    if !is_login_page(&title, &config.title_marker) {
        ::log::debug!("Not a login page (title: `{}`), skipping login", title);
        return Ok(false);
    }

    ::log::info!("Submitting login form");
    session
        .type_into(&config.username_selector, &config.username)
        .await?;
    session
        .type_into(&config.password_selector, &config.password)
        .await?;
    session.click(&config.submit_selector).await?;

    Ok(true)
}

/// Whether a page title marks a login page (case-insensitive substring)
pub fn is_login_page(title: &str, marker: &str) -> bool {
    title.to_lowercase().contains(&marker.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_page_detection_is_case_insensitive() {
        assert!(is_login_page("Member Login - Taste of Home", "login"));
        assert!(is_login_page("LOGIN", "login"));
        assert!(!is_login_page("Taste of Home: Recipes", "login"));
    }

    #[test]
    fn test_custom_marker() {
        assert!(is_login_page("Sign in to your account", "sign in"));
        assert!(!is_login_page("Sign up today", "sign in"));
    }
}
