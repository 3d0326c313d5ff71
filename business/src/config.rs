use std::any::Any;

use fincontrol_states::State;

/// Remote service configuration.
#[derive(Debug, Clone)]
pub struct BusinessConfig {
    pub api_base_url: String,
}

impl BusinessConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: base_url.into(),
        }
    }

    /// Base URL for API calls, always with the `/api` prefix attached.
    pub fn api_url(&self) -> String {
        format!("{}/api", self.api_base_url)
    }
}

impl Default for BusinessConfig {
    fn default() -> Self {
        let base_url = std::env::var("FINCONTROL_API_URL")
            .unwrap_or_else(|_| "http://localhost:3333".to_string());
        Self::new(base_url)
    }
}

impl State for BusinessConfig {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn snapshot(&self) -> Box<dyn Any + Send> {
        Box::new(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_url_appends_prefix() {
        let config = BusinessConfig::new("http://localhost:9999");
        assert_eq!(config.api_url(), "http://localhost:9999/api");
    }
}
