use std::env;

#[derive(Clone, Debug)]
pub struct CorsConfig {
    /// Empty means any origin is accepted.
    pub allowed_origins: Vec<String>,
}

impl CorsConfig {
    pub fn from_env() -> Self {
        Self::parse(&env::var("ALLOWED_ORIGINS").unwrap_or_else(|_| "*".to_string()))
    }

    pub fn parse(raw: &str) -> Self {
        let allowed_origins = raw
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty() && s != "*")
            .collect();

        Self { allowed_origins }
    }

    pub fn allows_any_origin(&self) -> bool {
        self.allowed_origins.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wildcard_allows_any_origin() {
        assert!(CorsConfig::parse("*").allows_any_origin());
        assert!(CorsConfig::parse("").allows_any_origin());
    }

    #[test]
    fn origins_are_trimmed() {
        let config = CorsConfig::parse("http://localhost:5173, https://happyhomes.app ,");
        assert_eq!(
            config.allowed_origins,
            vec!["http://localhost:5173", "https://happyhomes.app"]
        );
        assert!(!config.allows_any_origin());
    }
}
