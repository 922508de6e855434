use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::{
	basic::make_insight_request, require_country, require_number, CarrierDetails, InsightStatus,
	PortedStatus, INSIGHT_AUTH_METHODS,
};
use crate::{
	endpoint::parse_json_response, ApiRequest, AuthMethod, Endpoint, Error, HttpConfig,
	HttpResponse,
};

const PATH: &str = "/ni/standard/json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StandardInsightRequest {
	number: String,
	country: Option<String>,
	cnam: Option<bool>,
}

impl StandardInsightRequest {
	pub fn new(number: impl Into<String>) -> Result<Self, Error> {
		let number = number.into();
		require_number(&number)?;
		Ok(Self {
			number,
			country: None,
			cnam: None,
		})
	}

	pub fn with_country(mut self, country: impl Into<String>) -> Result<Self, Error> {
		let country = country.into();
		require_country(&country)?;
		self.country = Some(country);
		Ok(self)
	}

	/// Request a caller name (CNAM) lookup. Only available for US numbers.
	pub fn with_cnam(mut self, cnam: bool) -> Self {
		self.cnam = Some(cnam);
		self
	}

	pub fn number(&self) -> &str {
		&self.number
	}

	pub fn country(&self) -> Option<&str> {
		self.country.as_deref()
	}

	pub fn cnam(&self) -> Option<bool> {
		self.cnam
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CallerType {
	Business,
	Consumer,
	#[serde(other)]
	Unknown,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandardInsightResponse {
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
	/// Decimal amount in EUR, exactly as sent by the API.
	pub request_price: Option<String>,
	/// Decimal amount in EUR, exactly as sent by the API.
	pub remaining_balance: Option<String>,
	pub current_carrier: Option<CarrierDetails>,
	pub original_carrier: Option<CarrierDetails>,
	pub ported: Option<PortedStatus>,
	// only present when a cnam lookup was requested
	pub caller_name: Option<String>,
	pub first_name: Option<String>,
	pub last_name: Option<String>,
	pub caller_type: Option<CallerType>,
}

impl StandardInsightResponse {
	pub fn request_id(&self) -> &str {
		&self.request_id
	}
}

#[derive(Debug, Clone, Default)]
pub struct StandardInsightEndpoint {
	config: Arc<HttpConfig>,
}

impl StandardInsightEndpoint {
	pub fn new(config: Arc<HttpConfig>) -> Self {
		Self { config }
	}
}

/// Shared by the standard and advanced levels.
pub(crate) fn make_cnam_request(
	config: &HttpConfig,
	path: &str,
	number: &str,
	country: Option<&str>,
	cnam: Option<bool>,
) -> Result<ApiRequest, Error> {
	let mut req = make_insight_request(config, path, number, country)?;
	if let Some(cnam) = cnam.and_then(|cnam| config.encode_flag(cnam)) {
		req.set_param("cnam", cnam);
	}
	Ok(req)
}

impl Endpoint for StandardInsightEndpoint {
	type Request = StandardInsightRequest;
	type Response = StandardInsightResponse;

	fn acceptable_auth_methods(&self) -> &'static [AuthMethod] {
		INSIGHT_AUTH_METHODS
	}

	fn make_request(&self, request: &StandardInsightRequest) -> Result<ApiRequest, Error> {
		make_cnam_request(
			&self.config,
			PATH,
			request.number(),
			request.country(),
			request.cnam(),
		)
	}

	fn parse_response(&self, response: HttpResponse) -> Result<StandardInsightResponse, Error> {
		parse_json_response(response)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{insight::NetworkType, FalseFlags};
	use proptest::prelude::*;
	use reqwest::{Method, StatusCode};

	fn endpoint() -> StandardInsightEndpoint {
		StandardInsightEndpoint::new(Arc::new(HttpConfig::default()))
	}

	#[test]
	fn test_acceptable_auth_methods() {
		let expected = [AuthMethod::Signature, AuthMethod::Token];
		assert_eq!(endpoint().acceptable_auth_methods(), &expected);

		let custom = StandardInsightEndpoint::new(Arc::new(
			HttpConfig::default()
				.with_base_uri("https://example.com")
				.unwrap(),
		));
		assert_eq!(custom.acceptable_auth_methods(), &expected);
	}

	#[test]
	fn test_make_request() {
		let req = endpoint()
			.make_request(&StandardInsightRequest::new("1234").unwrap())
			.unwrap();
		assert_eq!(req.method(), &Method::POST);
		assert_eq!(
			req.url().as_str(),
			"https://api.nexmo.com/ni/standard/json"
		);
		assert_eq!(req.param("number"), Some("1234"));
		assert_eq!(req.param("country"), None);
		assert_eq!(req.param("cnam"), None);
	}

	#[test]
	fn test_make_request_with_country() {
		let req = endpoint()
			.make_request(
				&StandardInsightRequest::new("1234")
					.unwrap()
					.with_country("GB")
					.unwrap(),
			)
			.unwrap();
		assert_eq!(req.method(), &Method::POST);
		assert_eq!(
			req.url().as_str(),
			"https://api.nexmo.com/ni/standard/json"
		);
		assert_eq!(
			req.params(),
			&btreemap! {
				"number".to_owned() => "1234".to_owned(),
				"country".to_owned() => "GB".to_owned(),
			}
		);
	}

	#[test]
	fn test_make_request_with_cnam() {
		let req = endpoint()
			.make_request(&StandardInsightRequest::new("1234").unwrap().with_cnam(true))
			.unwrap();
		assert_eq!(req.method(), &Method::POST);
		assert_eq!(
			req.url().as_str(),
			"https://api.nexmo.com/ni/standard/json"
		);
		assert_eq!(
			req.params(),
			&btreemap! {
				"number".to_owned() => "1234".to_owned(),
				"cnam".to_owned() => "true".to_owned(),
			}
		);
	}

	#[test]
	fn test_make_request_with_cnam_false() {
		let req = StandardInsightRequest::new("1234").unwrap().with_cnam(false);

		let sent = endpoint().make_request(&req).unwrap();
		assert_eq!(sent.param("cnam"), Some("false"));

		let omitting = StandardInsightEndpoint::new(Arc::new(
			HttpConfig::default().with_false_flags(FalseFlags::Omit),
		));
		let sent = omitting.make_request(&req).unwrap();
		assert_eq!(sent.param("cnam"), None);
		assert_eq!(sent.params().len(), 1);
	}

	#[test]
	fn test_new_rejects_missing_number() {
		for number in ["", " "] {
			assert!(
				matches!(
					StandardInsightRequest::new(number),
					Err(Error::InvalidArgument(_))
				),
				"number: {:?}",
				number
			);
		}
	}

	#[test]
	fn test_with_country_rejects_bad_codes() {
		let result = StandardInsightRequest::new("1234")
			.unwrap()
			.with_country("GBR");
		assert!(matches!(result, Err(Error::InvalidArgument(_))));
	}

	#[test]
	fn test_default_uri() {
		let req = endpoint()
			.make_request(&StandardInsightRequest::new("1234").unwrap())
			.unwrap();
		assert_eq!(req.method(), &Method::POST);
		assert_eq!(
			req.url().as_str(),
			"https://api.nexmo.com/ni/standard/json"
		);
	}

	#[test]
	fn test_custom_uri() {
		let config = HttpConfig::default()
			.with_base_uri("https://example.com")
			.unwrap();
		let endpoint = StandardInsightEndpoint::new(Arc::new(config));

		let req = endpoint
			.make_request(&StandardInsightRequest::new("1234").unwrap())
			.unwrap();
		assert_eq!(req.method(), &Method::POST);
		assert_eq!(req.url().as_str(), "https://example.com/ni/standard/json");
	}

	#[test]
	fn test_parse_response() {
		let resp = endpoint()
			.parse_response(HttpResponse::new(
				StatusCode::OK,
				include_str!("../fixtures/insight/standard-insight.json"),
			))
			.unwrap();

		assert_eq!(resp.request_id(), "34564b7d-df8b-47fd-aa07-b722602dd974");
		assert_eq!(resp.status, InsightStatus::Success);
		assert_eq!(resp.status_message, "Success");
		assert_eq!(
			resp.international_format_number.as_deref(),
			Some("441632960960")
		);
		assert_eq!(
			resp.national_format_number.as_deref(),
			Some("01632 960960")
		);
		assert_eq!(resp.country_code_iso3.as_deref(), Some("GBR"));
		assert_eq!(resp.request_price.as_deref(), Some("0.00500000"));
		assert_eq!(resp.remaining_balance.as_deref(), Some("18.34408949"));
		assert_eq!(resp.ported, Some(PortedStatus::AssumedNotPorted));

		let current = resp.current_carrier.unwrap();
		assert_eq!(current.network_code.as_deref(), Some("GB-FIXED-RESERVED"));
		assert_eq!(
			current.name.as_deref(),
			Some("United Kingdom Landline Reserved")
		);
		assert_eq!(current.country.as_deref(), Some("GB"));
		assert_eq!(current.network_type, Some(NetworkType::Landline));

		let original = resp.original_carrier.unwrap();
		assert_eq!(original.network_code.as_deref(), Some("GB-HAPPY-RESERVED"));
		assert_eq!(original.network_type, Some(NetworkType::Mobile));

		assert_eq!(resp.caller_name, None);
	}

	#[test]
	fn test_parse_response_with_cnam() {
		let resp = endpoint()
			.parse_response(HttpResponse::new(
				StatusCode::OK,
				include_str!("../fixtures/insight/standard-insight-cnam.json"),
			))
			.unwrap();

		assert_eq!(resp.caller_name.as_deref(), Some("John Smith"));
		assert_eq!(resp.first_name.as_deref(), Some("John"));
		assert_eq!(resp.last_name.as_deref(), Some("Smith"));
		assert_eq!(resp.caller_type, Some(CallerType::Consumer));
	}

	#[test]
	fn test_parse_response_missing_request_id() {
		let result = endpoint().parse_response(HttpResponse::new(
			StatusCode::OK,
			r#"{"status": 0, "status_message": "Success"}"#,
		));
		assert!(matches!(result, Err(Error::ParseError(_))), "got: {:?}", result);
	}

	#[test]
	fn test_parse_response_missing_status() {
		let result = endpoint().parse_response(HttpResponse::new(
			StatusCode::OK,
			r#"{"request_id": "34564b7d-df8b-47fd-aa07-b722602dd974"}"#,
		));
		assert!(matches!(result, Err(Error::ParseError(_))), "got: {:?}", result);
	}

	#[test]
	fn test_parse_error_names_field() {
		let cases = [
			(r#"{"status": "zero", "request_id": "x"}"#, "status"),
			(r#"{"status": 0, "request_id": 7}"#, "request_id"),
			(
				r#"{"status": 0, "request_id": "x", "current_carrier": {"network_type": ["mobile"]}}"#,
				"current_carrier.network_type",
			),
		];
		for (body, path) in cases {
			match endpoint().parse_response(HttpResponse::new(StatusCode::OK, body)) {
				Err(Error::ParseError(err)) => assert_eq!(err.path().to_string(), path),
				other => panic!("body: {:?} got: {:?}", body, other),
			}
		}
	}

	#[test]
	fn test_parse_response_malformed() {
		let cases = ["", "not json", "{\"status\": 0,", "[]"];
		for case in cases {
			let result = endpoint().parse_response(HttpResponse::new(StatusCode::OK, case));
			assert!(
				matches!(result, Err(Error::ParseError(_))),
				"body: {:?} got: {:?}",
				case,
				result
			);
		}
	}

	proptest! {
		#[test]
		fn number_only_requests_send_only_number(number in "[0-9]{1,15}") {
			let req = endpoint()
				.make_request(&StandardInsightRequest::new(number.clone()).unwrap())
				.unwrap();
			prop_assert_eq!(req.method(), &Method::POST);
			prop_assert_eq!(req.url().as_str(), "https://api.nexmo.com/ni/standard/json");
			prop_assert_eq!(req.params(), &btreemap! { "number".to_owned() => number });
		}

		#[test]
		fn base_uri_only_changes_authority(host in "[a-z]{1,12}\\.(com|net|org)") {
			let config = HttpConfig::default()
				.with_base_uri(format!("https://{}", host))
				.unwrap();
			let endpoint = StandardInsightEndpoint::new(Arc::new(config));
			let req = endpoint
				.make_request(&StandardInsightRequest::new("1234").unwrap())
				.unwrap();
			prop_assert_eq!(req.method(), &Method::POST);
			prop_assert_eq!(req.url().host_str(), Some(host.as_str()));
			prop_assert_eq!(req.url().path(), "/ni/standard/json");
			prop_assert_eq!(req.param("number"), Some("1234"));
		}
	}
}
