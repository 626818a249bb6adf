//! Route-level session gating. Decides whether a request may proceed or must
//! bounce to sign-in; how the session itself is established and stored is a
//! collaborator's concern.

use serde::Serialize;
use url::Url;

/// Routes that require a signed-in session. A route guards itself and
/// everything nested under it, but not sibling paths that merely share the
/// prefix (`/companionship` is public).
pub const PROTECTED_ROUTES: &[&str] = &["/companion", "/quick-relief", "/analytics"];

const SIGNIN_PATH: &str = "/api/auth/signin";

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum RouteDecision {
    Allow,
    /// Redirect to the sign-in page, carrying the original URL so the user
    /// lands back where they were headed.
    RedirectToSignIn { location: String },
}

pub fn is_protected(path: &str) -> bool {
    PROTECTED_ROUTES
        .iter()
        .any(|route| path == *route || path.starts_with(&format!("{route}/")))
}

/// Gate a request: protected routes without a session redirect to sign-in
/// with the request URL as the callback.
pub fn evaluate(request_url: &Url, has_session: bool) -> RouteDecision {
    if !is_protected(request_url.path()) || has_session {
        return RouteDecision::Allow;
    }

    let mut signin = request_url.clone();
    signin.set_path(SIGNIN_PATH);
    signin.set_query(None);
    signin.set_fragment(None);
    signin
        .query_pairs_mut()
        .append_pair("callbackUrl", request_url.as_str());

    RouteDecision::RedirectToSignIn {
        location: signin.into(),
    }
}
