//! Compile-time configuration for the frontend.

/// Base URL the app is served from.
/// - Local development: "/"
/// - Static hosting under a sub-path (`mock`): "/curated/"
#[cfg(not(feature = "mock"))]
pub const BASE_URL: &str = "/";

/// Base URL for static hosting builds.
#[cfg(feature = "mock")]
pub const BASE_URL: &str = "/curated/";

/// API base URL, read at compile time from `CURATED_API_BASE`.
pub const API_BASE: &str = match option_env!("CURATED_API_BASE") {
    Some(url) => url,
    None => "http://localhost:3000/api",
};

/// Endpoint receiving analytics events.
pub fn analytics_endpoint() -> String {
    format!("{}/analytics/events", API_BASE.trim_end_matches('/'))
}

/// Prefix a site-relative asset path with [`BASE_URL`].
pub fn asset_path(path: &str) -> String {
    let path = path.strip_prefix('/').unwrap_or(path);
    format!("{}{}", BASE_URL, path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn asset_path_joins_without_double_slash() {
        assert_eq!(asset_path("/images/docker.png"), format!("{BASE_URL}images/docker.png"));
        assert_eq!(asset_path("images/docker.png"), format!("{BASE_URL}images/docker.png"));
    }

    #[test]
    fn analytics_endpoint_is_under_api_base() {
        let endpoint = analytics_endpoint();
        assert!(endpoint.ends_with("/analytics/events"));
        assert!(!endpoint.contains("//analytics"));
    }
}
