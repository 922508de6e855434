use log::*;
use nexmo::insight::{
	AdvancedInsightRequest, BasicInsightRequest, InsightStatus, StandardInsightRequest,
};
use serde::Serialize;

use super::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum InsightLevel {
	Basic,
	Standard,
	Advanced,
}

impl std::fmt::Display for InsightLevel {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(match self {
			InsightLevel::Basic => "basic",
			InsightLevel::Standard => "standard",
			InsightLevel::Advanced => "advanced",
		})
	}
}

#[derive(Debug, Clone, Parser)]
#[clap(about = "Look up carrier, formatting and porting details for a phone number")]
pub struct InsightCommand {
	#[clap(
		help = "The phone number to look up.",
		long_help = "The phone number to look up. Either in international format (eg. +44 1632 960960), or in national format together with --country."
	)]
	pub number: String,
	#[clap(short, long, value_enum, default_value_t = InsightLevel::Standard, help = "How much detail to ask for. Higher levels cost more.")]
	pub level: InsightLevel,
	#[clap(
		short,
		long,
		help = "Two letter country code of the number, eg. GB. Needed for numbers in national format."
	)]
	pub country: Option<String>,
	#[clap(
		long,
		conflicts_with = "no-cnam",
		help = "Also look up the caller name. US numbers only, standard and advanced levels."
	)]
	pub cnam: bool,
	#[clap(long, help = "Explicitly turn off the caller name lookup.")]
	pub no_cnam: bool,
	#[clap(
		long,
		help = "IP address of the end user, checked against the number's location. Advanced level only."
	)]
	pub ip: Option<String>,
}

impl InsightCommand {
	pub fn cnam_flag(&self) -> Option<bool> {
		match (self.cnam, self.no_cnam) {
			(true, _) => Some(true),
			(false, true) => Some(false),
			(false, false) => None,
		}
	}
}

impl<T> ClientCommand<T> for InsightCommand
where
	T: Transport,
{
	fn execute(&self, client: &NexmoClient<T>) -> anyhow::Result<()> {
		let number = normalize_number(&self.number);
		info!("Looking up {} ({} insight)", number, self.level);
		let insight = client.insight();

		match self.level {
			InsightLevel::Basic => {
				if self.cnam_flag().is_some() || self.ip.is_some() {
					warn!("--cnam, --no-cnam and --ip are ignored for basic insight");
				}
				let mut req = BasicInsightRequest::new(number)?;
				if let Some(country) = &self.country {
					req = req.with_country(country)?;
				}
				let resp = insight.basic(&req)?;
				report_status(resp.status, &resp.status_message);
				print_json(&resp)
			}
			InsightLevel::Standard => {
				if self.ip.is_some() {
					warn!("--ip is ignored for standard insight");
				}
				let mut req = StandardInsightRequest::new(number)?;
				if let Some(country) = &self.country {
					req = req.with_country(country)?;
				}
				if let Some(cnam) = self.cnam_flag() {
					req = req.with_cnam(cnam);
				}
				let resp = insight.standard(&req)?;
				report_status(resp.status, &resp.status_message);
				print_json(&resp)
			}
			InsightLevel::Advanced => {
				let mut req = AdvancedInsightRequest::new(number)?;
				if let Some(country) = &self.country {
					req = req.with_country(country)?;
				}
				if let Some(cnam) = self.cnam_flag() {
					req = req.with_cnam(cnam);
				}
				if let Some(ip) = &self.ip {
					req = req.with_ip(ip)?;
				}
				let resp = insight.advanced(&req)?;
				report_status(resp.status, &resp.status_message);
				print_json(&resp)
			}
		}
	}
}

/// Turns `+44 1632 960960` into `441632960960`. Numbers that can't be parsed without a
/// region, like national format numbers, are sent as typed.
fn normalize_number(raw: &str) -> String {
	match phonenumber::parse(None, raw) {
		Ok(number) => number
			.format()
			.mode(phonenumber::Mode::E164)
			.to_string()
			.trim_start_matches('+')
			.to_owned(),
		Err(err) => {
			debug!("Sending number as typed, could not parse it: {}", err);
			raw.trim().to_owned()
		}
	}
}

fn report_status(status: InsightStatus, message: &str) {
	if status.is_success() {
		debug!("API status: {:?}", status);
	} else {
		warn!("API returned status {} ({:?}): {}", status.code(), status, message);
	}
}

fn print_json<R: Serialize>(resp: &R) -> anyhow::Result<()> {
	println!("{}", serde_json::to_string_pretty(resp)?);
	Ok(())
}
