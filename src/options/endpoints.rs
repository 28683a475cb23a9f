use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
/// Where the login and chat requests go.
pub struct EndpointOptions {
    /// Scheme and authority prepended to both paths. Empty means
    /// same-origin (relative URLs), which is what the browser widget uses.
    pub base_url: String,
    /// Path of the login endpoint.
    pub login_path: String,
    /// Path of the chat endpoint.
    pub chat_path: String,
}

impl Default for EndpointOptions {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            login_path: "/auth/login".into(),
            chat_path: "/chat".into(),
        }
    }
}

impl EndpointOptions {
    /// Full login URL.
    #[must_use]
    pub fn login_url(&self) -> String {
        join(&self.base_url, &self.login_path)
    }

    /// Full chat URL.
    #[must_use]
    pub fn chat_url(&self) -> String {
        join(&self.base_url, &self.chat_path)
    }
}

fn join(base: &str, path: &str) -> String {
    if base.is_empty() {
        return path.to_owned();
    }
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_origin_by_default() {
        let endpoints = EndpointOptions::default();
        assert_eq!(endpoints.login_url(), "/auth/login");
        assert_eq!(endpoints.chat_url(), "/chat");
    }

    #[test]
    fn base_url_slashes_are_normalized() {
        let endpoints = EndpointOptions {
            base_url: "http://localhost:3000/".into(),
            ..EndpointOptions::default()
        };
        assert_eq!(endpoints.login_url(), "http://localhost:3000/auth/login");
        assert_eq!(endpoints.chat_url(), "http://localhost:3000/chat");
    }
}
