// SPDX-License-Identifier: MPL-2.0
//! Client for the generative AI service behind the two workflow operations.
//!
//! The workflow only knows two calls:
//!
//! - [`validate`] — is this photo a usable portrait?
//! - [`transform`] — generate the cultural-makeover image.
//!
//! Both go to the Gemini `generateContent` REST endpoint and every failure
//! (network, HTTP status, malformed body, missing payload, timeout) is
//! surfaced as a single [`ServiceError`]; the session treats them all as one
//! failure class. The deadline comes from the config so a stalled call can
//! never leave the UI loading forever.

mod wire;

pub use wire::Validation;

use crate::config::{
    Config, DEFAULT_ENDPOINT, DEFAULT_IMAGE_MODEL, DEFAULT_REQUEST_TIMEOUT_SECS,
    DEFAULT_VALIDATION_MODEL,
};
use crate::error::ServiceError;
use crate::media::{GeneratedImage, SourceImage};
use std::time::Duration;

/// Environment variable consulted before the config file for the API key.
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Connection settings for a single call, resolved once at dispatch time so
/// a config edit mid-flight cannot change an outstanding request.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub endpoint: String,
    pub api_key: String,
    pub validation_model: String,
    pub image_model: String,
    pub timeout: Duration,
}

impl ServiceConfig {
    /// Builds the call settings from the user config, with the
    /// `GEMINI_API_KEY` environment variable taking precedence for the key.
    pub fn from_config(config: &Config) -> Result<Self, ServiceError> {
        let env_key = std::env::var(API_KEY_ENV).ok();
        Self::resolve(config, env_key)
    }

    fn resolve(config: &Config, env_key: Option<String>) -> Result<Self, ServiceError> {
        let api_key = env_key
            .filter(|key| !key.trim().is_empty())
            .or_else(|| config.api_key.clone())
            .filter(|key| !key.trim().is_empty())
            .ok_or(ServiceError::MissingApiKey)?;

        Ok(Self {
            endpoint: config
                .endpoint
                .clone()
                .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
            api_key,
            validation_model: config
                .validation_model
                .clone()
                .unwrap_or_else(|| DEFAULT_VALIDATION_MODEL.to_string()),
            image_model: config
                .image_model
                .clone()
                .unwrap_or_else(|| DEFAULT_IMAGE_MODEL.to_string()),
            timeout: Duration::from_secs(
                config
                    .request_timeout_secs
                    .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS),
            ),
        })
    }

    fn generate_url(&self, model: &str) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.endpoint.trim_end_matches('/'),
            model
        )
    }
}

fn build_client(config: &ServiceConfig) -> Result<reqwest::Client, ServiceError> {
    reqwest::Client::builder()
        .timeout(config.timeout)
        .user_agent("CultureLens/0.1.0")
        .build()
        .map_err(|e| ServiceError::Network(e.to_string()))
}

async fn post_generate(
    config: &ServiceConfig,
    model: &str,
    body: &wire::GenerateContentRequest,
) -> Result<String, ServiceError> {
    let client = build_client(config)?;
    let response = client
        .post(config.generate_url(model))
        .header("x-goog-api-key", &config.api_key)
        .json(body)
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        return Err(ServiceError::Http(status.as_u16()));
    }
    Ok(response.text().await?)
}

/// Asks the service whether the uploaded photo is a usable portrait.
///
/// Resolves to the verdict on success; any transport or parse problem maps
/// to a `ServiceError`. Exactly one request per call, no retries.
pub async fn validate(
    config: &ServiceConfig,
    image: &SourceImage,
) -> Result<Validation, ServiceError> {
    let body = wire::validation_request(image);
    let reply = post_generate(config, &config.validation_model, &body).await?;
    wire::parse_validation_reply(&reply)
}

/// Asks the service to generate the cultural-makeover image for the given
/// destination country.
///
/// Resolves to the generated image (carrying its `data:` URI); a reply
/// without any image payload is `ServiceError::NoImage`.
pub async fn transform(
    config: &ServiceConfig,
    image: &SourceImage,
    destination: &str,
) -> Result<GeneratedImage, ServiceError> {
    let body = wire::transform_request(image, destination);
    let reply = post_generate(config, &config.image_model, &body).await?;
    wire::parse_transform_reply(&reply)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_prefers_env_key_over_config() {
        let config = Config {
            api_key: Some("from-config".into()),
            ..Config::default()
        };
        let resolved = ServiceConfig::resolve(&config, Some("from-env".into())).unwrap();
        assert_eq!(resolved.api_key, "from-env");
    }

    #[test]
    fn resolve_falls_back_to_config_key() {
        let config = Config {
            api_key: Some("from-config".into()),
            ..Config::default()
        };
        let resolved = ServiceConfig::resolve(&config, None).unwrap();
        assert_eq!(resolved.api_key, "from-config");
        assert_eq!(resolved.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(
            resolved.timeout,
            Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS)
        );
    }

    #[test]
    fn resolve_without_any_key_fails() {
        let config = Config::default();
        let err = ServiceConfig::resolve(&config, Some("   ".into())).unwrap_err();
        assert_eq!(err, ServiceError::MissingApiKey);
    }

    #[test]
    fn generate_url_joins_endpoint_and_model() {
        let config = Config {
            api_key: Some("k".into()),
            endpoint: Some("http://localhost:9000/v1beta/".into()),
            ..Config::default()
        };
        let resolved = ServiceConfig::resolve(&config, None).unwrap();
        assert_eq!(
            resolved.generate_url("gemini-2.5-flash"),
            "http://localhost:9000/v1beta/models/gemini-2.5-flash:generateContent"
        );
    }
}
