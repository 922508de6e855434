use reqwest::StatusCode;

use crate::transport::TransportError;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Invalid argument: {0}")]
	InvalidArgument(String),
	#[error("Invalid configuration: {0}")]
	InvalidConfig(String),
	#[error("Failed to parse API response body: {0}")]
	ParseError(#[from] serde_path_to_error::Error<serde_json::Error>),
	#[error("API responded with HTTP {status}: {body}")]
	UnexpectedStatus { status: StatusCode, body: String },
	#[error("None of the configured credentials are accepted by this endpoint")]
	NoAcceptableAuth,
	#[error("Transport error: {0}")]
	Transport(#[from] TransportError),
	#[error("Unknown error: {0}")]
	Unknown(#[from] anyhow::Error),
}
