use clap::{Parser, ValueEnum};
use clap_complete::Shell;
use nexmo::{transport::Transport, NexmoClient, SignatureAlgorithm};

pub mod completions;
pub mod insight;

pub use completions::CompletionsCommand;
pub use insight::InsightCommand;

/// A command that does not talk to the API.
pub(crate) trait ConstCommand {
	fn execute(&self) -> anyhow::Result<()>;
}

/// A command that makes API calls through a configured client.
pub(crate) trait ClientCommand<T>
where
	T: Transport,
{
	fn execute(&self, client: &NexmoClient<T>) -> anyhow::Result<()>;
}

pub(crate) enum CommandType<T>
where
	T: Transport,
{
	Const(Box<dyn ConstCommand>),
	Client(Box<dyn ClientCommand<T>>),
}

#[derive(Debug, Clone, Parser)]
#[clap(name="nexmo-cli", bin_name="nexmo", author, version, about = "Look up phone number details with the Nexmo Number Insight API.", long_about = None)]
pub(crate) struct Args {
	#[clap(flatten)]
	pub global: GlobalArgs,

	#[clap(subcommand)]
	pub sub: Subcommands,
}

#[derive(Debug, Clone, Parser)]
pub(crate) struct GlobalArgs {
	#[clap(long, env = "NEXMO_API_KEY", help = "Your Nexmo API key.")]
	pub api_key: Option<String>,
	#[clap(
		long,
		env = "NEXMO_API_SECRET",
		hide_env_values = true,
		help = "Your Nexmo API secret. Sent with every request."
	)]
	pub api_secret: Option<String>,
	#[clap(
		long,
		env = "NEXMO_SIGNATURE_SECRET",
		hide_env_values = true,
		help = "Your signature secret. When set, requests are signed instead of carrying the API secret."
	)]
	pub signature_secret: Option<String>,
	#[clap(long, value_enum, default_value_t = SignatureMethod::Sha256, help = "The signature method configured for your account.")]
	pub signature_method: SignatureMethod,
	#[clap(
		long,
		env = "NEXMO_BASE_URI",
		help = "Send requests to a different host. Default: https://api.nexmo.com"
	)]
	pub base_uri: Option<String>,
	#[clap(
		long,
		help = "Leave flags that are turned off (eg. --no-cnam) out of the request instead of sending them as false."
	)]
	pub omit_false_flags: bool,
	#[clap(short, long, value_enum, default_value_t=Verbosity::Info, help = "Set the log level. Be warned, trace is capable of printing sensitive data.")]
	pub verbosity: Verbosity,
}

#[derive(Debug, Clone, Parser)]
pub(crate) enum Subcommands {
	Completion(CompletionsCommand),
	Insight(InsightCommand),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum SignatureMethod {
	Sha1,
	Sha256,
}

impl std::fmt::Display for SignatureMethod {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(match self {
			SignatureMethod::Sha1 => "sha1",
			SignatureMethod::Sha256 => "sha256",
		})
	}
}

impl From<SignatureMethod> for SignatureAlgorithm {
	fn from(method: SignatureMethod) -> Self {
		match method {
			SignatureMethod::Sha1 => SignatureAlgorithm::HmacSha1,
			SignatureMethod::Sha256 => SignatureAlgorithm::HmacSha256,
		}
	}
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub(crate) enum Verbosity {
	Error = 0,
	Warn = 1,
	Info = 2,
	Debug = 3,
	Trace = 4,
}

impl std::fmt::Display for Verbosity {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_fmt(format_args!(
			"{}",
			match self {
				Verbosity::Error => "error",
				Verbosity::Warn => "warn",
				Verbosity::Info => "info",
				Verbosity::Debug => "debug",
				Verbosity::Trace => "trace",
			}
		))
	}
}
