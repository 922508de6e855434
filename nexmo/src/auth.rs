use hmac::{Hmac, Mac};
use log::debug;
use secrecy::{ExposeSecret, SecretString};
use sha1::Sha1;
use sha2::Sha256;

use crate::{ApiRequest, Error, Params};

/// The ways a request can prove who sent it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AuthMethod {
	/// Request params are signed with a shared signature secret.
	Signature,
	/// The api key and secret are sent along with the request params.
	Token,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignatureAlgorithm {
	HmacSha1,
	HmacSha256,
}

impl Default for SignatureAlgorithm {
	fn default() -> Self {
		SignatureAlgorithm::HmacSha256
	}
}

#[derive(Debug, Clone)]
pub struct TokenAuth {
	api_key: String,
	api_secret: SecretString,
}

impl TokenAuth {
	pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
		Self {
			api_key: api_key.into(),
			api_secret: SecretString::new(api_secret.into()),
		}
	}

	pub fn api_key(&self) -> &str {
		&self.api_key
	}

	fn apply(&self, request: &mut ApiRequest) {
		request.set_param("api_key", self.api_key.as_str());
		request.set_param("api_secret", self.api_secret.expose_secret().as_str());
	}
}

#[derive(Debug, Clone)]
pub struct SignatureAuth {
	api_key: String,
	signature_secret: SecretString,
	algorithm: SignatureAlgorithm,
}

impl SignatureAuth {
	pub fn new(
		api_key: impl Into<String>,
		signature_secret: impl Into<String>,
		algorithm: SignatureAlgorithm,
	) -> Self {
		Self {
			api_key: api_key.into(),
			signature_secret: SecretString::new(signature_secret.into()),
			algorithm,
		}
	}

	pub fn api_key(&self) -> &str {
		&self.api_key
	}

	pub fn algorithm(&self) -> SignatureAlgorithm {
		self.algorithm
	}

	/// Hex encoded signature over every param except `sig`.
	pub fn signature(&self, params: &Params) -> Result<String, Error> {
		let input = signing_input(params);
		let key = self.signature_secret.expose_secret().as_bytes();
		let sig = match self.algorithm {
			SignatureAlgorithm::HmacSha1 => {
				let mut mac = Hmac::<Sha1>::new_from_slice(key)
					.map_err(|e| Error::InvalidConfig(format!("bad signature secret: {}", e)))?;
				mac.update(input.as_bytes());
				hex::encode(mac.finalize().into_bytes())
			}
			SignatureAlgorithm::HmacSha256 => {
				let mut mac = Hmac::<Sha256>::new_from_slice(key)
					.map_err(|e| Error::InvalidConfig(format!("bad signature secret: {}", e)))?;
				mac.update(input.as_bytes());
				hex::encode(mac.finalize().into_bytes())
			}
		};
		Ok(sig)
	}

	fn apply(&self, request: &mut ApiRequest, timestamp: u64) -> Result<(), Error> {
		request.set_param("api_key", self.api_key.as_str());
		request.set_param("timestamp", timestamp.to_string());
		let sig = self.signature(request.params())?;
		request.set_param("sig", sig);
		Ok(())
	}
}

/// `&name=value` pairs in name order. `&` and `=` inside values become `_`.
fn signing_input(params: &Params) -> String {
	let mut input = String::new();
	for (name, value) in params.iter().filter(|(name, _)| name.as_str() != "sig") {
		input.push('&');
		input.push_str(name);
		input.push('=');
		input.push_str(&value.replace(|c: char| c == '&' || c == '=', "_"));
	}
	input
}

#[derive(Debug, Clone)]
pub enum Credentials {
	Token(TokenAuth),
	Signature(SignatureAuth),
}

impl Credentials {
	pub fn method(&self) -> AuthMethod {
		match self {
			Credentials::Token(_) => AuthMethod::Token,
			Credentials::Signature(_) => AuthMethod::Signature,
		}
	}

	/// Attaches these credentials to the request params.
	pub fn apply(&self, request: &mut ApiRequest, timestamp: u64) -> Result<(), Error> {
		match self {
			Credentials::Token(auth) => {
				auth.apply(request);
				Ok(())
			}
			Credentials::Signature(auth) => auth.apply(request, timestamp),
		}
	}
}

impl From<TokenAuth> for Credentials {
	fn from(auth: TokenAuth) -> Self {
		Credentials::Token(auth)
	}
}

impl From<SignatureAuth> for Credentials {
	fn from(auth: SignatureAuth) -> Self {
		Credentials::Signature(auth)
	}
}

/// The credentials a client has available. Holds at most one set per [`AuthMethod`].
#[derive(Debug, Clone, Default)]
pub struct AuthCollection {
	credentials: Vec<Credentials>,
}

impl AuthCollection {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with(mut self, credentials: impl Into<Credentials>) -> Self {
		self.add(credentials);
		self
	}

	/// Adds credentials, replacing any previously added ones of the same method.
	pub fn add(&mut self, credentials: impl Into<Credentials>) {
		let credentials = credentials.into();
		let method = credentials.method();
		self.credentials.retain(|c| c.method() != method);
		self.credentials.push(credentials);
	}

	pub fn is_empty(&self) -> bool {
		self.credentials.is_empty()
	}

	/// Picks the credentials for the first method in `acceptable` that we have.
	pub fn select(&self, acceptable: &[AuthMethod]) -> Result<&Credentials, Error> {
		for method in acceptable {
			if let Some(credentials) = self.credentials.iter().find(|c| c.method() == *method) {
				debug!("selected {:?} auth", method);
				return Ok(credentials);
			}
		}
		Err(Error::NoAcceptableAuth)
	}
}
