pub mod webapi;

pub use webapi::WebApiTransport;

use crate::{ApiRequest, HttpResponse};

/// Sends requests built by endpoints. Implementations own connection handling, TLS and
/// retries; endpoints never see any of it.
pub trait Transport {
	fn send_request(&self, req: ApiRequest) -> Result<HttpResponse, TransportError>;
}

impl<T: Transport + ?Sized> Transport for &T {
	fn send_request(&self, req: ApiRequest) -> Result<HttpResponse, TransportError> {
		(**self).send_request(req)
	}
}

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
	#[error("Network failure: {0}")]
	NetworkFailure(#[from] reqwest::Error),
	#[error("Unknown error: {0}")]
	Unknown(#[from] anyhow::Error),
}
