//! Deployment-dependent URL prefixes.
//!
//! `PUBLIC_URL` (e.g. `/tycoon` when the dashboard is hosted under a
//! subdirectory) prefixes router paths. `TYCOON_API_BASE` points the client
//! at a backend on another origin; by default requests stay same-origin.

/// Base path for the router, `None` when hosted at the root.
#[must_use]
pub fn router_base() -> Option<String> {
    non_empty_base(option_env!("PUBLIC_URL").unwrap_or(""))
}

/// Origin or prefix prepended to every `/api/...` path.
#[must_use]
pub fn api_base() -> String {
    non_empty_base(option_env!("TYCOON_API_BASE").unwrap_or("")).unwrap_or_default()
}

fn non_empty_base(base: &str) -> Option<String> {
    let base = base.trim().trim_end_matches('/');
    if base.is_empty() {
        None
    } else {
        Some(base.to_string())
    }
}
