use std::convert::Infallible;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum UriError {
    // scheme filter accepts only empty, http and https
    #[error("scheme| expected empty, http or https")]
    InvalidScheme,
    #[error("port| expected a value in 1-65535")]
    InvalidPort,
    #[error("uri| {0}")]
    InvalidUri(#[from] url::ParseError),
}

impl From<Infallible> for UriError {
    fn from(value: Infallible) -> Self {
        match value {}
    }
}
