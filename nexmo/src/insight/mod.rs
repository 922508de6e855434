//! Number Insight: carrier, formatting and porting details for a phone number.
//!
//! The API comes in three levels. Each level returns everything the previous one does,
//! plus more:
//!
//! - [basic](BasicInsightEndpoint): number formatting and country
//! - [standard](StandardInsightEndpoint): carriers, porting, optional caller name lookup
//! - [advanced](AdvancedInsightEndpoint): validity, reachability and roaming

mod advanced;
mod basic;
mod standard;

pub use advanced::*;
pub use basic::*;
pub use standard::*;

use num_enum::FromPrimitive;
use serde::{Deserialize, Serialize};

use crate::{transport::Transport, AuthMethod, Error, NexmoClient};

/// Every insight endpoint accepts the same credentials, in this order.
pub(crate) const INSIGHT_AUTH_METHODS: &[AuthMethod] = &[AuthMethod::Signature, AuthMethod::Token];

/// The `status` field of every insight response.
///
/// Codes 43 to 45 (live mobile lookup not returned) come through as `Unknown`; check
/// `lookup_outcome` on the advanced response for details.
#[derive(Debug, Clone, Copy, PartialEq, Eq, FromPrimitive, Serialize, Deserialize)]
#[repr(i32)]
#[serde(from = "i32", into = "i32")]
pub enum InsightStatus {
	Success = 0,
	Throttled = 1,
	InvalidParams = 3,
	InvalidCredentials = 4,
	InternalError = 5,
	PartnerQuotaExceeded = 9,
	FacilityNotAllowed = 19,
	#[num_enum(catch_all)]
	Unknown(i32),
}

impl InsightStatus {
	pub fn code(&self) -> i32 {
		match *self {
			InsightStatus::Success => 0,
			InsightStatus::Throttled => 1,
			InsightStatus::InvalidParams => 3,
			InsightStatus::InvalidCredentials => 4,
			InsightStatus::InternalError => 5,
			InsightStatus::PartnerQuotaExceeded => 9,
			InsightStatus::FacilityNotAllowed => 19,
			InsightStatus::Unknown(code) => code,
		}
	}

	pub fn is_success(&self) -> bool {
		*self == InsightStatus::Success
	}
}

impl From<InsightStatus> for i32 {
	fn from(status: InsightStatus) -> Self {
		status.code()
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NetworkType {
	Mobile,
	Landline,
	LandlinePremium,
	LandlineTollfree,
	Virtual,
	Pager,
	#[serde(other)]
	Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PortedStatus {
	Ported,
	NotPorted,
	AssumedPorted,
	AssumedNotPorted,
	#[serde(other)]
	Unknown,
}

/// A network operator, as reported in `current_carrier` and `original_carrier`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarrierDetails {
	pub network_code: Option<String>,
	pub name: Option<String>,
	/// Two letter country code.
	pub country: Option<String>,
	pub network_type: Option<NetworkType>,
}

pub(crate) fn require_number(number: &str) -> Result<(), Error> {
	if number.trim().is_empty() {
		return Err(Error::InvalidArgument("number is required".into()));
	}
	Ok(())
}

pub(crate) fn require_country(country: &str) -> Result<(), Error> {
	if country.len() != 2 || !country.chars().all(|c| c.is_ascii_alphabetic()) {
		return Err(Error::InvalidArgument(format!(
			"country must be a two letter ISO 3166-1 code, got {:?}",
			country
		)));
	}
	Ok(())
}

/// Number Insight calls made through a [`NexmoClient`].
pub struct InsightClient<'a, T>
where
	T: Transport,
{
	client: &'a NexmoClient<T>,
	basic: BasicInsightEndpoint,
	standard: StandardInsightEndpoint,
	advanced: AdvancedInsightEndpoint,
}

impl<'a, T> InsightClient<'a, T>
where
	T: Transport,
{
	pub fn new(client: &'a NexmoClient<T>) -> Self {
		let config = client.config();
		Self {
			client,
			basic: BasicInsightEndpoint::new(config.clone()),
			standard: StandardInsightEndpoint::new(config.clone()),
			advanced: AdvancedInsightEndpoint::new(config.clone()),
		}
	}

	pub fn basic(&self, req: &BasicInsightRequest) -> Result<BasicInsightResponse, Error> {
		self.client.execute(&self.basic, req)
	}

	pub fn standard(&self, req: &StandardInsightRequest) -> Result<StandardInsightResponse, Error> {
		self.client.execute(&self.standard, req)
	}

	pub fn advanced(&self, req: &AdvancedInsightRequest) -> Result<AdvancedInsightResponse, Error> {
		self.client.execute(&self.advanced, req)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_insight_status_codes() {
		let cases = [
			(0, InsightStatus::Success),
			(1, InsightStatus::Throttled),
			(3, InsightStatus::InvalidParams),
			(4, InsightStatus::InvalidCredentials),
			(5, InsightStatus::InternalError),
			(9, InsightStatus::PartnerQuotaExceeded),
			(19, InsightStatus::FacilityNotAllowed),
			(43, InsightStatus::Unknown(43)),
		];
		for (code, status) in cases {
			assert_eq!(InsightStatus::from(code), status);
			assert_eq!(status.code(), code);
			assert_eq!(serde_json::to_string(&status).unwrap(), code.to_string());
		}
	}

	#[test]
	fn test_unrecognized_enum_values() {
		let ported: PortedStatus = serde_json::from_str("\"something_new\"").unwrap();
		assert_eq!(ported, PortedStatus::Unknown);
		let network: NetworkType = serde_json::from_str("\"satellite\"").unwrap();
		assert_eq!(network, NetworkType::Unknown);
		let network: NetworkType = serde_json::from_str("\"landline_tollfree\"").unwrap();
		assert_eq!(network, NetworkType::LandlineTollfree);
	}

	#[test]
	fn test_require_country() {
		assert!(require_country("GB").is_ok());
		assert!(require_country("us").is_ok());
		for bad in ["", "G", "GBR", "G1", "É"] {
			assert!(
				matches!(require_country(bad), Err(Error::InvalidArgument(_))),
				"country: {:?}",
				bad
			);
		}
	}

	#[test]
	fn test_require_number() {
		assert!(require_number("1234").is_ok());
		assert!(matches!(require_number(""), Err(Error::InvalidArgument(_))));
		assert!(matches!(require_number("   "), Err(Error::InvalidArgument(_))));
	}
}
