use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::{require_country, require_number, InsightStatus, INSIGHT_AUTH_METHODS};
use crate::{
	endpoint::parse_json_response, ApiRequest, AuthMethod, Endpoint, Error, HttpConfig,
	HttpResponse,
};

const PATH: &str = "/ni/basic/json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasicInsightRequest {
	number: String,
	country: Option<String>,
}

impl BasicInsightRequest {
	pub fn new(number: impl Into<String>) -> Result<Self, Error> {
		let number = number.into();
		require_number(&number)?;
		Ok(Self {
			number,
			country: None,
		})
	}

	/// Country of the number, used when `number` is in national format.
	pub fn with_country(mut self, country: impl Into<String>) -> Result<Self, Error> {
		let country = country.into();
		require_country(&country)?;
		self.country = Some(country);
		Ok(self)
	}

	pub fn number(&self) -> &str {
		&self.number
	}

	pub fn country(&self) -> Option<&str> {
		self.country.as_deref()
	}
}

/// Builds the params shared by every insight level.
pub(crate) fn make_insight_request(
	config: &HttpConfig,
	path: &str,
	number: &str,
	country: Option<&str>,
) -> Result<ApiRequest, Error> {
	require_number(number)?;
	let url = config.endpoint_url(path)?;
	let mut req = ApiRequest::post(url, btreemap! { "number".into() => number.into() });
	if let Some(country) = country {
		req.set_param("country", country);
	}
	Ok(req)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BasicInsightResponse {
	pub status: InsightStatus,
	#[serde(default)]
	pub status_message: String,
	pub request_id: String,
	pub international_format_number: Option<String>,
	pub national_format_number: Option<String>,
	pub country_code: Option<String>,
	pub country_code_iso3: Option<String>,
	pub country_name: Option<String>,
	pub country_prefix: Option<String>,
}

impl BasicInsightResponse {
	pub fn request_id(&self) -> &str {
		&self.request_id
	}
}

#[derive(Debug, Clone, Default)]
pub struct BasicInsightEndpoint {
	config: Arc<HttpConfig>,
}

impl BasicInsightEndpoint {
	pub fn new(config: Arc<HttpConfig>) -> Self {
		Self { config }
	}
}

impl Endpoint for BasicInsightEndpoint {
	type Request = BasicInsightRequest;
	type Response = BasicInsightResponse;

	fn acceptable_auth_methods(&self) -> &'static [AuthMethod] {
		INSIGHT_AUTH_METHODS
	}

	fn make_request(&self, request: &BasicInsightRequest) -> Result<ApiRequest, Error> {
		make_insight_request(&self.config, PATH, request.number(), request.country())
	}

	fn parse_response(&self, response: HttpResponse) -> Result<BasicInsightResponse, Error> {
		parse_json_response(response)
	}
}
