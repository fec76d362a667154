use super::models::Config;
use crate::humanize::ByteSize;
use axum::http::HeaderValue;
use thiserror::Error;

const MAX_UPLOAD_LIMIT: ByteSize = ByteSize::mib(100);

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("max_upload_bytes ({actual}) must be between 1B and {limit}")]
    UploadLimitOutOfRange { actual: ByteSize, limit: ByteSize },

    #[error("extract.max_depth must be at least 1")]
    InvalidMaxDepth,

    #[error("Invalid CORS origin '{origin}', expected an http:// or https:// origin")]
    InvalidCorsOrigin { origin: String },

    #[error("temp_dir '{path}' is not an existing directory")]
    InvalidTempDir { path: String },
}

/// Validate the entire configuration
pub fn validate(config: &Config) -> Result<(), ValidationError> {
    validate_upload_limit(config)?;
    validate_extract(config)?;
    validate_cors_origins(config)?;
    validate_temp_dir(config)?;
    Ok(())
}

fn validate_upload_limit(config: &Config) -> Result<(), ValidationError> {
    let actual = config.server.api.max_upload_bytes;
    if actual.as_u64() == 0 || actual > MAX_UPLOAD_LIMIT {
        return Err(ValidationError::UploadLimitOutOfRange {
            actual,
            limit: MAX_UPLOAD_LIMIT,
        });
    }
    Ok(())
}

fn validate_extract(config: &Config) -> Result<(), ValidationError> {
    if config.extract.max_depth == 0 {
        return Err(ValidationError::InvalidMaxDepth);
    }
    Ok(())
}

fn validate_cors_origins(config: &Config) -> Result<(), ValidationError> {
    for origin in &config.server.cors_origins {
        let has_scheme = origin.starts_with("http://") || origin.starts_with("https://");
        if !has_scheme || HeaderValue::from_str(origin).is_err() {
            return Err(ValidationError::InvalidCorsOrigin {
                origin: origin.clone(),
            });
        }
    }
    Ok(())
}

fn validate_temp_dir(config: &Config) -> Result<(), ValidationError> {
    if let Some(ref path) = config.server.temp_dir {
        if !path.is_dir() {
            return Err(ValidationError::InvalidTempDir {
                path: path.display().to_string(),
            });
        }
    }
    Ok(())
}
