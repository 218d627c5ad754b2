/*
This code is part of the GpTools geoprocessing catalog.
Authors: GpTools developers
Created: 02/09/2026
Last Modified: 11/10/2026
License: MIT
*/

use std::io::{Error, ErrorKind};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GpError {
    #[error("Unrecognized tool name {0}.")]
    UnrecognizedTool(String),

    #[error("Unrecognized parameter {parameter} for tool {tool}.")]
    UnrecognizedParameter { tool: String, parameter: String },

    #[error("Invalid value '{value}' for parameter {parameter}: {reason}")]
    InvalidValue {
        parameter: String,
        value: String,
        reason: String,
    },

    #[error("Missing value for required parameter {0}.")]
    MissingParameter(String),

    #[error("Value {value} for parameter {parameter} is outside the valid range {range}.")]
    OutOfRange {
        parameter: String,
        value: f64,
        range: String,
    },

    #[error("Unrecognized environment setting {0}.")]
    UnrecognizedEnvironment(String),

    #[error("{tool} failed.\n{messages}")]
    ExecutionFailed { tool: String, messages: String },

    #[error(transparent)]
    Io(#[from] Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, GpError>;

impl GpError {
    pub fn invalid_value(parameter: &str, value: &str, reason: impl ToString) -> GpError {
        GpError::InvalidValue {
            parameter: parameter.to_string(),
            value: value.to_string(),
            reason: reason.to_string(),
        }
    }
}

impl From<GpError> for Error {
    fn from(err: GpError) -> Error {
        match err {
            GpError::Io(e) => e,
            GpError::UnrecognizedTool(_) => Error::new(ErrorKind::NotFound, err.to_string()),
            GpError::ExecutionFailed { .. } => Error::new(ErrorKind::Other, err.to_string()),
            _ => Error::new(ErrorKind::InvalidInput, err.to_string()),
        }
    }
}

#[cfg(test)]
mod test {
    use super::GpError;
    use std::io::{Error, ErrorKind};

    #[test]
    fn test_io_error_kinds() {
        let e: Error = GpError::UnrecognizedTool("Bogus".to_string()).into();
        assert_eq!(e.kind(), ErrorKind::NotFound);
        assert_eq!(e.to_string(), "Unrecognized tool name Bogus.");

        let e: Error = GpError::MissingParameter("in_features".to_string()).into();
        assert_eq!(e.kind(), ErrorKind::InvalidInput);
    }

    #[test]
    fn test_io_error_passes_through() {
        let inner = Error::new(ErrorKind::PermissionDenied, "nope");
        let e: Error = GpError::from(inner).into();
        assert_eq!(e.kind(), ErrorKind::PermissionDenied);
    }
}
