use std::{
	sync::Arc,
	time::{SystemTime, UNIX_EPOCH},
};

use log::debug;

use crate::{
	insight::InsightClient, transport::Transport, AuthCollection, Endpoint, Error, HttpConfig,
};

/// Runs endpoints against a transport, attaching whichever configured credentials the
/// endpoint accepts.
#[derive(Debug)]
pub struct NexmoClient<T>
where
	T: Transport,
{
	config: Arc<HttpConfig>,
	auth: AuthCollection,
	transport: T,
}

impl<T> NexmoClient<T>
where
	T: Transport,
{
	#[must_use]
	pub fn new(transport: T, config: HttpConfig, auth: AuthCollection) -> Self {
		Self {
			config: Arc::new(config),
			auth,
			transport,
		}
	}

	pub fn config(&self) -> &Arc<HttpConfig> {
		&self.config
	}

	pub fn transport(&self) -> &T {
		&self.transport
	}

	pub fn execute<E: Endpoint>(&self, endpoint: &E, request: &E::Request) -> Result<E::Response, Error> {
		let mut req = endpoint.make_request(request)?;
		let credentials = self.auth.select(endpoint.acceptable_auth_methods())?;
		let timestamp = SystemTime::now()
			.duration_since(UNIX_EPOCH)
			.map_err(anyhow::Error::from)?
			.as_secs();
		credentials.apply(&mut req, timestamp)?;

		debug!("sending {} {}", req.method(), req.url());
		let resp = self.transport.send_request(req)?;
		endpoint.parse_response(resp)
	}

	/// Number Insight calls sharing this client's configuration.
	pub fn insight(&self) -> InsightClient<'_, T> {
		InsightClient::new(self)
	}
}
