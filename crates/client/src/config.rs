/// Client configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL of the API (default: `http://localhost:3000`).
    pub api_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: "http://localhost:3000".to_string(),
        }
    }
}

impl ClientConfig {
    /// Load configuration from `GAMESTORE_API_URL`, falling back to the default.
    pub fn from_env() -> Self {
        match std::env::var("GAMESTORE_API_URL") {
            Ok(url) if !url.trim().is_empty() => Self {
                api_url: url.trim().to_string(),
            },
            _ => Self::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_local_server() {
        assert_eq!(ClientConfig::default().api_url, "http://localhost:3000");
    }
}
