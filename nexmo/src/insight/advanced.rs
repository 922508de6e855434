use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::{
	require_country, require_number, standard::make_cnam_request, CallerType, CarrierDetails,
	InsightStatus, PortedStatus, INSIGHT_AUTH_METHODS,
};
use crate::{
	endpoint::parse_json_response, ApiRequest, AuthMethod, Endpoint, Error, HttpConfig,
	HttpResponse,
};

const PATH: &str = "/ni/advanced/json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdvancedInsightRequest {
	number: String,
	country: Option<String>,
	cnam: Option<bool>,
	ip: Option<String>,
}

impl AdvancedInsightRequest {
	pub fn new(number: impl Into<String>) -> Result<Self, Error> {
		let number = number.into();
		require_number(&number)?;
		Ok(Self {
			number,
			country: None,
			cnam: None,
			ip: None,
		})
	}

	pub fn with_country(mut self, country: impl Into<String>) -> Result<Self, Error> {
		let country = country.into();
		require_country(&country)?;
		self.country = Some(country);
		Ok(self)
	}

	pub fn with_cnam(mut self, cnam: bool) -> Self {
		self.cnam = Some(cnam);
		self
	}

	/// IP address of the end user, checked against the number's location.
	pub fn with_ip(mut self, ip: impl Into<String>) -> Result<Self, Error> {
		let ip = ip.into();
		if ip.trim().is_empty() {
			return Err(Error::InvalidArgument("ip must not be empty".into()));
		}
		self.ip = Some(ip);
		Ok(self)
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

	pub fn ip(&self) -> Option<&str> {
		self.ip.as_deref()
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Validity {
	Valid,
	NotValid,
	Inferred,
	#[serde(other)]
	Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Reachability {
	Reachable,
	Undeliverable,
	Absent,
	BadNumber,
	Blacklisted,
	#[serde(other)]
	Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoamingStatus {
	Roaming,
	NotRoaming,
	#[serde(other)]
	Unknown,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoamingDetails {
	pub status: RoamingStatus,
	pub roaming_country_code: Option<String>,
	pub roaming_network_code: Option<String>,
	pub roaming_network_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IpDetails {
	pub address: Option<String>,
	pub ip_match_level: Option<String>,
	pub ip_country: Option<String>,
	pub ip_city: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdvancedInsightResponse {
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
	pub request_price: Option<String>,
	pub remaining_balance: Option<String>,
	pub current_carrier: Option<CarrierDetails>,
	pub original_carrier: Option<CarrierDetails>,
	pub ported: Option<PortedStatus>,
	pub caller_name: Option<String>,
	pub first_name: Option<String>,
	pub last_name: Option<String>,
	pub caller_type: Option<CallerType>,
	pub valid_number: Option<Validity>,
	pub reachable: Option<Reachability>,
	pub roaming: Option<RoamingDetails>,
	pub ip: Option<IpDetails>,
	pub ip_warnings: Option<String>,
	/// 0 when the lookup fully succeeded, 1 when only some fields could be filled in.
	pub lookup_outcome: Option<i32>,
	pub lookup_outcome_message: Option<String>,
}

impl AdvancedInsightResponse {
	pub fn request_id(&self) -> &str {
		&self.request_id
	}
}

#[derive(Debug, Clone, Default)]
pub struct AdvancedInsightEndpoint {
	config: Arc<HttpConfig>,
}

impl AdvancedInsightEndpoint {
	pub fn new(config: Arc<HttpConfig>) -> Self {
		Self { config }
	}
}

impl Endpoint for AdvancedInsightEndpoint {
	type Request = AdvancedInsightRequest;
	type Response = AdvancedInsightResponse;

	fn acceptable_auth_methods(&self) -> &'static [AuthMethod] {
		INSIGHT_AUTH_METHODS
	}

	fn make_request(&self, request: &AdvancedInsightRequest) -> Result<ApiRequest, Error> {
		let mut req = make_cnam_request(
			&self.config,
			PATH,
			request.number(),
			request.country(),
			request.cnam(),
		)?;
		if let Some(ip) = request.ip() {
			req.set_param("ip", ip);
		}
		Ok(req)
	}

	fn parse_response(&self, response: HttpResponse) -> Result<AdvancedInsightResponse, Error> {
		parse_json_response(response)
	}
}
