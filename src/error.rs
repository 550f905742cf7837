// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Image(ImageError),
    Service(ServiceError),
}

/// Errors raised while ingesting or exporting a photo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageError {
    /// File extension/content is not JPEG, PNG, or WEBP.
    UnsupportedFormat,

    /// File could not be decoded at all (truncated, not an image).
    Unreadable,

    /// The generated result did not contain a well-formed data URI.
    MalformedDataUri,
}

/// Specific error types for the remote AI service.
/// Used to provide user-friendly, localized error messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// No API key was found in the environment or config.
    MissingApiKey,

    /// The request could not be sent or the connection dropped.
    Network(String),

    /// The service did not answer within the configured deadline.
    Timeout,

    /// The service answered with a non-success HTTP status.
    Http(u16),

    /// The response body could not be parsed into the expected shape.
    MalformedReply(String),

    /// A transform reply arrived without any image payload.
    NoImage,
}

impl ImageError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            ImageError::UnsupportedFormat => "error-photo-unsupported-format",
            ImageError::Unreadable => "error-photo-unreadable",
            ImageError::MalformedDataUri => "error-result-malformed",
        }
    }
}

impl ServiceError {
    /// Returns the i18n message key for this error type.
    ///
    /// The workflow treats every kind as one failure class; the distinction
    /// only feeds the technical-details line of the error banner.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            ServiceError::MissingApiKey => "error-service-missing-key",
            ServiceError::Timeout => "error-service-timeout",
            ServiceError::Network(_)
            | ServiceError::Http(_)
            | ServiceError::MalformedReply(_)
            | ServiceError::NoImage => "error-service-generic",
        }
    }
}

impl From<reqwest::Error> for ServiceError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ServiceError::Timeout
        } else if let Some(status) = err.status() {
            ServiceError::Http(status.as_u16())
        } else if err.is_decode() {
            ServiceError::MalformedReply(err.to_string())
        } else {
            ServiceError::Network(err.to_string())
        }
    }
}

impl fmt::Display for ImageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageError::UnsupportedFormat => write!(f, "Unsupported image format"),
            ImageError::Unreadable => write!(f, "Image file could not be read"),
            ImageError::MalformedDataUri => write!(f, "Malformed data URI in service reply"),
        }
    }
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServiceError::MissingApiKey => write!(f, "No API key configured"),
            ServiceError::Network(msg) => write!(f, "Network error: {}", msg),
            ServiceError::Timeout => write!(f, "Service did not answer in time"),
            ServiceError::Http(status) => write!(f, "Service returned HTTP {}", status),
            ServiceError::MalformedReply(msg) => write!(f, "Malformed reply: {}", msg),
            ServiceError::NoImage => write!(f, "Service reply contained no image"),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Image(e) => write!(f, "Image Error: {}", e),
            Error::Service(e) => write!(f, "Service Error: {}", e),
        }
    }
}

impl From<ImageError> for Error {
    fn from(err: ImageError) -> Self {
        Error::Image(err)
    }
}

impl From<ServiceError> for Error {
    fn from(err: ServiceError) -> Self {
        Error::Service(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
