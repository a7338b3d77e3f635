//! Build-time Configuration
//!
//! Trunk exports `INVENTARIO_*` environment variables at compile time;
//! each has a documented fallback for local development.

const DEFAULT_API_URL: &str = "http://localhost:5010/api";
const DEFAULT_APP_NAME: &str = "Inventário Robótica";

/// Base URL of the remote inventory service, without trailing slash.
pub fn api_url() -> &'static str {
    option_env!("INVENTARIO_API_URL").unwrap_or(DEFAULT_API_URL)
}

/// Display name shown in the page header.
pub fn app_name() -> &'static str {
    option_env!("INVENTARIO_APP_NAME").unwrap_or(DEFAULT_APP_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallbacks_are_usable() {
        assert!(api_url().starts_with("http"));
        assert!(!api_url().ends_with('/'));
        assert!(!app_name().is_empty());
    }
}
