use std::collections::BTreeMap;

use log::trace;
use reqwest::{Method, StatusCode, Url};
use serde::de::DeserializeOwned;

use crate::{AuthMethod, Error};

/// Request parameters, kept sorted by name so that signing is stable.
pub type Params = BTreeMap<String, String>;

/// A transport-neutral description of an HTTP request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
	method: Method,
	url: Url,
	params: Params,
}

impl ApiRequest {
	pub fn new(method: Method, url: Url, params: Params) -> Self {
		Self {
			method,
			url,
			params,
		}
	}

	pub fn post(url: Url, params: Params) -> Self {
		Self::new(Method::POST, url, params)
	}

	pub fn method(&self) -> &Method {
		&self.method
	}

	pub fn url(&self) -> &Url {
		&self.url
	}

	pub fn params(&self) -> &Params {
		&self.params
	}

	pub fn param(&self, name: &str) -> Option<&str> {
		self.params.get(name).map(String::as_str)
	}

	pub fn set_param(&mut self, name: impl Into<String>, value: impl Into<String>) {
		self.params.insert(name.into(), value.into());
	}
}

/// The parts of an HTTP response that endpoints care about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
	status: StatusCode,
	body: String,
}

impl HttpResponse {
	pub fn new(status: StatusCode, body: impl Into<String>) -> Self {
		Self {
			status,
			body: body.into(),
		}
	}

	pub fn status(&self) -> StatusCode {
		self.status
	}

	pub fn body(&self) -> &str {
		&self.body
	}
}

/// A single API call. Endpoints are stateless apart from their read-only configuration,
/// so one instance can be shared across threads and reused for any number of calls.
pub trait Endpoint {
	type Request;
	type Response;

	/// Authentication methods this endpoint accepts, most preferred first.
	fn acceptable_auth_methods(&self) -> &'static [AuthMethod];

	fn make_request(&self, request: &Self::Request) -> Result<ApiRequest, Error>;

	fn parse_response(&self, response: HttpResponse) -> Result<Self::Response, Error>;
}

/// Deserializes a JSON response body, rejecting non-2xx responses up front.
pub(crate) fn parse_json_response<T: DeserializeOwned>(response: HttpResponse) -> Result<T, Error> {
	if !response.status.is_success() {
		return Err(Error::UnexpectedStatus {
			status: response.status,
			body: response.body,
		});
	}
	trace!("raw response body: {}", response.body);
	let mut deser = serde_json::Deserializer::from_str(response.body.as_str());
	let body: T = serde_path_to_error::deserialize(&mut deser)?;
	Ok(body)
}
