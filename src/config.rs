// src/config.rs
use std::env;
use thiserror::Error;

#[derive(Clone, Debug)]
pub struct AppConfig {
    database_url: String,
    listen_addr: String,
    media_root: String,
    lead_webhook_url: Option<String>,
    allowed_origins: Vec<String>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_database_url() -> String {
    "sqlite://folio.db?mode=rwc".into()
}

fn default_listen_addr() -> String {
    "127.0.0.1:8080".into()
}

fn default_media_root() -> String {
    "media".into()
}

fn default_allowed_origins() -> Vec<String> {
    vec!["*".into()]
}

impl AppConfig {
    /// Build configuration from environment variables. Uses sensible defaults
    /// for optional values and validates the ones that are present.
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url = env::var("DATABASE_URL").unwrap_or_else(|_| default_database_url());
        let listen_addr = env::var("LISTEN_ADDR").unwrap_or_else(|_| default_listen_addr());
        let media_root = env::var("MEDIA_ROOT").unwrap_or_else(|_| default_media_root());

        let lead_webhook_url = env::var("LEAD_WEBHOOK_URL")
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty());

        if let Some(url) = &lead_webhook_url {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(ConfigError::Invalid(
                    "LEAD_WEBHOOK_URL must be an http(s) URL".into(),
                ));
            }
        }

        let allowed_origins = env::var("ALLOWED_ORIGINS")
            .ok()
            .map(parse_origin_list)
            .filter(|origins| !origins.is_empty())
            .unwrap_or_else(default_allowed_origins);

        Ok(Self {
            database_url,
            listen_addr,
            media_root,
            lead_webhook_url,
            allowed_origins,
        })
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    pub fn listen_addr(&self) -> &str {
        &self.listen_addr
    }

    pub fn media_root(&self) -> &str {
        &self.media_root
    }

    pub fn lead_webhook_url(&self) -> Option<&str> {
        self.lead_webhook_url.as_deref()
    }

    /// CORS origins as configured; `"*"` means any origin.
    pub fn allowed_origins(&self) -> &[String] {
        &self.allowed_origins
    }
}

fn parse_origin_list(raw: String) -> Vec<String> {
    raw.split(',')
        .map(|part| part.trim().to_string())
        .filter(|part| !part.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origin_list_is_split_and_trimmed() {
        let origins =
            parse_origin_list("http://localhost:3000, https://admin.example.com ,".into());
        assert_eq!(
            origins,
            vec![
                "http://localhost:3000".to_string(),
                "https://admin.example.com".to_string()
            ]
        );
    }

    #[test]
    fn blank_origin_list_falls_back_to_the_wildcard() {
        let origins = Some(parse_origin_list("  ".into()))
            .filter(|origins| !origins.is_empty())
            .unwrap_or_else(default_allowed_origins);
        assert_eq!(origins, vec!["*".to_string()]);
    }
}
