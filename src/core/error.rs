// SPDX-License-Identifier: MIT OR Apache-2.0

//! Windowflow Core Error Types
//!
//! Construction-time configuration problems are the only errors callers are
//! expected to recover from. Once a window is running, the only failure it
//! reports is a downstream that went away.

use thiserror::Error;

/// Result type for windowflow operations
pub type FlowResult<T> = Result<T, FlowError>;

#[derive(Error, Debug)]
pub enum FlowError {
    #[error("Configuration error: {message}")]
    Configuration {
        message: String,
        config_key: Option<String>,
    },

    #[error("Invalid parameter '{parameter:?}': {message}")]
    InvalidParameter {
        message: String,
        parameter: Option<String>,
        expected: Option<String>,
    },

    #[error("Sink closed: {message}")]
    SinkClosed { message: String },

    #[error("Runtime error: {message}")]
    Runtime {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl FlowError {
    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
            config_key: None,
        }
    }

    /// Create a configuration error with a specific key
    pub fn configuration_with_key(message: impl Into<String>, config_key: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
            config_key: Some(config_key.into()),
        }
    }

    /// Create an invalid parameter error with details
    pub fn invalid_parameter_with_details(
        message: impl Into<String>,
        parameter: impl Into<String>,
        expected: impl Into<String>,
    ) -> Self {
        Self::InvalidParameter {
            message: message.into(),
            parameter: Some(parameter.into()),
            expected: Some(expected.into()),
        }
    }

    pub fn sink_closed(message: impl Into<String>) -> Self {
        Self::SinkClosed {
            message: message.into(),
        }
    }

    /// Create a runtime error with source
    pub fn runtime_with_source(
        message: impl Into<String>,
        source: Box<dyn std::error::Error + Send + Sync>,
    ) -> Self {
        Self::Runtime {
            message: message.into(),
            source: Some(source),
        }
    }

    /// True for errors raised while validating window parameters
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            FlowError::Configuration { .. } | FlowError::InvalidParameter { .. }
        )
    }
}
