use reqwest::Url;

use crate::Error;

pub const DEFAULT_BASE_URI: &str = "https://api.nexmo.com";

const DEFAULT_USER_AGENT: &str = concat!("nexmo-rust/", env!("CARGO_PKG_VERSION"));

/// How boolean request flags that are explicitly set to `false` go on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FalseFlags {
	/// Send the flag as `"false"`.
	Send,
	/// Leave the flag out of the request, as if it was never set.
	Omit,
}

impl Default for FalseFlags {
	fn default() -> Self {
		FalseFlags::Send
	}
}

/// Settings shared by every endpoint of a client. Built once, then only read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpConfig {
	/// Always stored without a trailing slash.
	base_uri: String,
	false_flags: FalseFlags,
	user_agent: String,
}

impl Default for HttpConfig {
	fn default() -> Self {
		Self {
			base_uri: DEFAULT_BASE_URI.into(),
			false_flags: FalseFlags::default(),
			user_agent: DEFAULT_USER_AGENT.into(),
		}
	}
}

impl HttpConfig {
	/// Point all endpoints at a different host, eg. a proxy or a mock server.
	pub fn with_base_uri(mut self, base_uri: impl AsRef<str>) -> Result<Self, Error> {
		let base_uri = base_uri.as_ref().trim_end_matches('/');
		let parsed = Url::parse(base_uri)
			.map_err(|e| Error::InvalidConfig(format!("invalid base uri {:?}: {}", base_uri, e)))?;
		if !matches!(parsed.scheme(), "http" | "https") {
			return Err(Error::InvalidConfig(format!(
				"base uri must use http or https, got {:?}",
				parsed.scheme()
			)));
		}
		if parsed.query().is_some() || parsed.fragment().is_some() {
			return Err(Error::InvalidConfig(format!(
				"base uri must not carry a query or fragment: {:?}",
				base_uri
			)));
		}
		self.base_uri = base_uri.to_owned();
		Ok(self)
	}

	pub fn with_false_flags(mut self, false_flags: FalseFlags) -> Self {
		self.false_flags = false_flags;
		self
	}

	pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
		self.user_agent = user_agent.into();
		self
	}

	pub fn base_uri(&self) -> &str {
		&self.base_uri
	}

	pub fn false_flags(&self) -> FalseFlags {
		self.false_flags
	}

	pub fn user_agent(&self) -> &str {
		&self.user_agent
	}

	/// Builds the absolute URL for an API path such as `/ni/standard/json`.
	pub fn endpoint_url(&self, path: &str) -> Result<Url, Error> {
		let url = format!("{}/{}", self.base_uri, path.trim_start_matches('/'));
		Url::parse(&url).map_err(|e| Error::InvalidConfig(format!("invalid url {:?}: {}", url, e)))
	}

	/// Wire value for an optional boolean flag, or `None` if it should not be sent at all.
	pub fn encode_flag(&self, value: bool) -> Option<String> {
		match (value, self.false_flags) {
			(true, _) => Some("true".into()),
			(false, FalseFlags::Send) => Some("false".into()),
			(false, FalseFlags::Omit) => None,
		}
	}
}
