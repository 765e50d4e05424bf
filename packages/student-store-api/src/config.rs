//! API configuration.

/// Body returned by a successful create.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CreateResponse {
    /// The created record
    #[default]
    Record,
    /// The whole collection with its count
    Collection,
}

/// API configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Path prefix of the student resource
    pub base_path: String,
    /// Request body read timeout in milliseconds
    pub request_timeout_ms: u64,
    /// What a successful create returns
    pub create_response: CreateResponse,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_path: "/api/students".to_string(),
            request_timeout_ms: 5000,
            create_response: CreateResponse::Record,
        }
    }
}

impl ApiConfig {
    /// Base path with a leading slash and no trailing slash (`""` for root).
    pub fn normalized_base_path(&self) -> String {
        let trimmed = self.base_path.trim_matches('/');
        if trimmed.is_empty() {
            String::new()
        } else {
            format!("/{}", trimmed)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalized_base_path() {
        let mut config = ApiConfig::default();
        assert_eq!(config.normalized_base_path(), "/api/students");

        config.base_path = "students/".to_string();
        assert_eq!(config.normalized_base_path(), "/students");

        config.base_path = "/".to_string();
        assert_eq!(config.normalized_base_path(), "");
    }
}
