use log::{debug, trace};
use reqwest::Method;

use super::{Transport, TransportError};
use crate::{ApiRequest, HttpConfig, HttpResponse};

/// Blocking HTTP transport backed by `reqwest`.
#[derive(Debug, Clone)]
pub struct WebApiTransport {
	client: reqwest::blocking::Client,
}

impl WebApiTransport {
	pub fn new(config: &HttpConfig) -> Result<WebApiTransport, TransportError> {
		let client = reqwest::blocking::Client::builder()
			.user_agent(config.user_agent())
			.build()?;
		Ok(WebApiTransport { client })
	}
}

impl Transport for WebApiTransport {
	fn send_request(&self, apireq: ApiRequest) -> Result<HttpResponse, TransportError> {
		debug!("HTTP Request: {} {}", apireq.method(), apireq.url());
		// params carry credentials, only their names are safe to log
		trace!(
			"HTTP Request params: {:?}",
			apireq.params().keys().collect::<Vec<_>>()
		);
		let mut req = self
			.client
			.request(apireq.method().clone(), apireq.url().clone());
		req = if *apireq.method() == Method::GET {
			req.query(apireq.params())
		} else {
			req.form(apireq.params())
		};

		let resp = req.send()?;
		let status = resp.status();
		debug!("Response HTTP status: {}", status);

		let body = resp.text()?;
		trace!("Response body: {}", body);
		Ok(HttpResponse::new(status, body))
	}
}
