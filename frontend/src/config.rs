//! Client configuration.

/// Backend address used when nothing else is configured.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000";

/// Connection settings for the backend API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    api_base_url: String,
}

impl ClientConfig {
    /// Build a configuration for `api_base_url`.
    ///
    /// A trailing `/` is dropped so endpoint paths can be appended verbatim.
    ///
    /// # Examples
    /// ```
    /// use signup_frontend::ClientConfig;
    ///
    /// let config = ClientConfig::new("http://api.local/");
    /// assert_eq!(config.endpoint("/users"), "http://api.local/users");
    /// ```
    pub fn new(api_base_url: impl Into<String>) -> Self {
        let raw: String = api_base_url.into();
        Self {
            api_base_url: raw.trim_end_matches('/').to_owned(),
        }
    }

    /// Base URL of the backend API.
    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    /// Absolute URL for an API path starting with `/`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.api_base_url)
    }
}

impl Default for ClientConfig {
    /// Uses `SIGNUP_API_URL` captured at build time, falling back to
    /// [`DEFAULT_API_BASE_URL`].
    fn default() -> Self {
        Self::new(option_env!("SIGNUP_API_URL").unwrap_or(DEFAULT_API_BASE_URL))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("http://localhost:3000", "http://localhost:3000/users/register")]
    #[case("http://localhost:3000/", "http://localhost:3000/users/register")]
    #[case("https://api.example.com//", "https://api.example.com/users/register")]
    fn endpoint_joins_without_double_slash(#[case] base: &str, #[case] expected: &str) {
        let config = ClientConfig::new(base);
        assert_eq!(config.endpoint("/users/register"), expected);
    }

    #[rstest]
    fn default_points_at_a_base_url() {
        let config = ClientConfig::default();
        let expected = option_env!("SIGNUP_API_URL")
            .unwrap_or(DEFAULT_API_BASE_URL)
            .trim_end_matches('/');
        assert_eq!(config.api_base_url(), expected);
    }
}
