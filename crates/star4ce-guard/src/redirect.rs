//! Login redirect emitted on denial.

use std::fmt;

/// Query parameter telling the login page the prior session expired.
const EXPIRED_PARAM: &str = "expired=1";

/// Client-side navigation target for a denied visitor.
///
/// Always points at the login entry point; the expiry indicator lets the
/// destination page explain why the visitor landed there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginRedirect {
    login_path: String,
}

impl LoginRedirect {
    /// Redirect to the default login route.
    pub fn expired() -> Self {
        Self {
            login_path: "/login".to_string(),
        }
    }

    /// The full navigation target, e.g. `/login?expired=1`.
    pub fn location(&self) -> String {
        format!("{}?{}", self.login_path, EXPIRED_PARAM)
    }
}

impl fmt::Display for LoginRedirect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.location())
    }
}
