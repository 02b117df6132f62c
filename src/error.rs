use std::fmt::Display;

use thiserror::Error;


#[derive(Error, Debug)]
pub enum TidyError {
    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Couldn't serialize output: {0}")]
    Output(#[source] serde_json::Error),

    #[error("Malformed GeoJSON: {0}")]
    MalformedInput(String),

    #[error("Invalid argument: {name} = {value} ({reason})")]
    InvalidArgument {
        name: &'static str,
        value: String,
        reason: String,
    },
}

impl TidyError {
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        TidyError::Io { context: context.into(), source }
    }

    pub fn invalid_argument(name: &'static str, value: impl Display, reason: impl Into<String>) -> Self {
        TidyError::InvalidArgument {
            name,
            value: value.to_string(),
            reason: reason.into(),
        }
    }
}

impl From<geojson::Error> for TidyError {
    fn from(err: geojson::Error) -> Self {
        TidyError::MalformedInput(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, TidyError>;
