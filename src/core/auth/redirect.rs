//! Redirect targets for the auth flow

/// Path the auth backend sends confirmation links to
pub const CALLBACK_PATH: &str = "/auth/callback";

/// Where a successful sign-in lands when no `next` was requested
pub const DEFAULT_LANDING_PATH: &str = "/dashboard";

/// The parts of the current page URL the auth flow reads
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PageLocation {
    pub origin: String,
    /// `next` query parameter; empty values are treated as absent
    pub next: Option<String>,
}

impl PageLocation {
    pub fn new(origin: impl Into<String>, next: Option<String>) -> Self {
        Self {
            origin: origin.into(),
            next: next.filter(|n| !n.is_empty()),
        }
    }

    /// `<origin>/auth/callback`, with `?next=<encoded>` when a destination was requested.
    pub fn callback_url(&self) -> String {
        match &self.next {
            Some(next) => format!(
                "{}{}?next={}",
                self.origin,
                CALLBACK_PATH,
                urlencoding::encode(next)
            ),
            None => format!("{}{}", self.origin, CALLBACK_PATH),
        }
    }

    /// Destination after a successful sign-in
    pub fn sign_in_target(&self) -> &str {
        self.next.as_deref().unwrap_or(DEFAULT_LANDING_PATH)
    }
}

/// Origin of the page the app is running in.
///
/// On the server there is no page, so this is empty; submissions only run in the browser.
pub fn current_origin() -> String {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(origin) = window.location().origin() {
                return origin;
            }
        }
    }
    String::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_callback_url_without_next() {
        let location = PageLocation::new("https://app.example.com", None);
        assert_eq!(
            location.callback_url(),
            "https://app.example.com/auth/callback"
        );
    }

    #[test]
    fn test_callback_url_encodes_next() {
        let location = PageLocation::new("https://app.example.com", Some("/billing".to_string()));
        assert_eq!(
            location.callback_url(),
            "https://app.example.com/auth/callback?next=%2Fbilling"
        );
    }

    #[test]
    fn test_callback_url_encodes_query_in_next() {
        let location = PageLocation::new(
            "http://localhost:3000",
            Some("/reports?id=7&tab=a b".to_string()),
        );
        assert_eq!(
            location.callback_url(),
            "http://localhost:3000/auth/callback?next=%2Freports%3Fid%3D7%26tab%3Da%20b"
        );
    }

    #[test]
    fn test_empty_next_is_absent() {
        let location = PageLocation::new("https://app.example.com", Some(String::new()));

        assert!(location.next.is_none());
        assert_eq!(location.sign_in_target(), DEFAULT_LANDING_PATH);
        assert!(!location.callback_url().contains("next="));
    }

    #[test]
    fn test_sign_in_target() {
        let with_next = PageLocation::new("", Some("/billing".to_string()));
        let without = PageLocation::new("", None);

        assert_eq!(with_next.sign_in_target(), "/billing");
        assert_eq!(without.sign_in_target(), "/dashboard");
    }

    #[cfg(not(feature = "hydrate"))]
    #[test]
    fn test_current_origin_on_server_is_empty() {
        assert_eq!(current_origin(), "");
    }
}
