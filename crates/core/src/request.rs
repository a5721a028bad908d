//! Validation for generation requests coming from outer surfaces.

use crate::device::Device;
use serde::Deserialize;
use thiserror::Error;

/// Shortest description worth generating from, in characters.
pub const MIN_DESCRIPTION_CHARS: usize = 10;

/// A request to generate a wireframe.
///
/// Fields only LLM generators use (`pageType`, `complexity`) are accepted
/// and ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    pub description: Option<String>,
    pub device: Option<Device>,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RequestError {
    #[error("Description is required and must be a string")]
    MissingDescription,

    #[error("Description must be at least 10 characters long")]
    DescriptionTooShort,

    #[error("Unknown device: {0} (expected desktop, tablet or mobile)")]
    UnknownDevice(String),
}

impl GenerationRequest {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: Some(description.into()),
            device: None,
        }
    }

    pub fn with_device(mut self, device: Device) -> Self {
        self.device = Some(device);
        self
    }

    /// Return the description if it is present and long enough.
    pub fn validate(&self) -> Result<&str, RequestError> {
        let description = match self.description.as_deref() {
            Some(d) if !d.is_empty() => d,
            _ => return Err(RequestError::MissingDescription),
        };
        if description.chars().count() < MIN_DESCRIPTION_CHARS {
            return Err(RequestError::DescriptionTooShort);
        }
        Ok(description)
    }
}
