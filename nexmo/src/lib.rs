//! Client library for the Nexmo Number Insight API.
//!
//! Every API call is modelled as an [`Endpoint`]: it turns a typed request into a
//! transport-neutral [`ApiRequest`], and turns the raw [`HttpResponse`] back into a typed
//! response. [`NexmoClient`] ties an endpoint to a [`transport::Transport`] and a set of
//! credentials.
//!
//! ```no_run
//! use nexmo::{
//! 	insight::StandardInsightRequest, transport::WebApiTransport, AuthCollection, HttpConfig,
//! 	NexmoClient, TokenAuth,
//! };
//!
//! # fn main() -> Result<(), nexmo::Error> {
//! let config = HttpConfig::default();
//! let transport = WebApiTransport::new(&config)?;
//! let auth = AuthCollection::new().with(TokenAuth::new("api-key", "api-secret"));
//! let client = NexmoClient::new(transport, config, auth);
//!
//! let request = StandardInsightRequest::new("441632960960")?.with_country("GB")?;
//! let response = client.insight().standard(&request)?;
//! println!("{}", response.request_id());
//! # Ok(())
//! # }
//! ```

#[macro_use]
extern crate maplit;

mod auth;
mod client;
pub mod config;
pub mod endpoint;
mod error;
pub mod insight;
pub mod transport;

pub use auth::{AuthCollection, AuthMethod, Credentials, SignatureAlgorithm, SignatureAuth, TokenAuth};
pub use client::NexmoClient;
pub use config::{FalseFlags, HttpConfig};
pub use endpoint::{ApiRequest, Endpoint, HttpResponse, Params};
pub use error::Error;
