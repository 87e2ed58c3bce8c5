//! Helpers for talking to the estimation service.
//!
//! Provides helper functions for constructing the service URLs.

/// Port the estimation service listens on.
const SERVICE_PORT: u16 = 5000;

/// Get the base URL of the estimation service
///
/// Constructs the base URL from the current window location, using
/// [`SERVICE_PORT`] for the estimation service.
///
/// # Returns
/// - Base URL like "http://localhost:5000" or "https://example.com:5000"
/// - Empty string if window is not available
pub fn service_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}", protocol, hostname, SERVICE_PORT)
}

/// Build a full service URL from a path
///
/// # Example
/// ```rust,ignore
/// let url = service_url("/estimate");
/// ```
pub fn service_url(path: &str) -> String {
    format!("{}{}", service_base(), path)
}
