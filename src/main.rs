use clap::Parser;
use log::*;
use nexmo::{
	transport::WebApiTransport, AuthCollection, FalseFlags, HttpConfig, NexmoClient,
	SignatureAuth, TokenAuth,
};

#[macro_use]
extern crate anyhow;

mod commands;

use commands::{CommandType, GlobalArgs, Subcommands};

fn main() {
	std::process::exit(match run() {
		Ok(_) => 0,
		Err(e) => {
			error!("{:?}", e);
			255
		}
	});
}

fn run() -> anyhow::Result<()> {
	let args = commands::Args::parse();
	stderrlog::new()
		.verbosity(args.global.verbosity as usize)
		.module(module_path!())
		.init()?;

	let cmd: CommandType<WebApiTransport> = match args.sub {
		Subcommands::Completion(args) => CommandType::Const(Box::new(args)),
		Subcommands::Insight(args) => CommandType::Client(Box::new(args)),
	};

	match cmd {
		CommandType::Const(cmd) => cmd.execute(),
		CommandType::Client(cmd) => {
			let config = build_config(&args.global)?;
			let auth = build_auth(&args.global)?;
			let transport = WebApiTransport::new(&config)?;
			let client = NexmoClient::new(transport, config, auth);
			cmd.execute(&client)
		}
	}
}

fn build_config(global: &GlobalArgs) -> anyhow::Result<HttpConfig> {
	let mut config = HttpConfig::default();
	if let Some(base_uri) = &global.base_uri {
		debug!("using base uri {}", base_uri);
		config = config.with_base_uri(base_uri)?;
	}
	if global.omit_false_flags {
		config = config.with_false_flags(FalseFlags::Omit);
	}
	Ok(config)
}

fn build_auth(global: &GlobalArgs) -> anyhow::Result<AuthCollection> {
	let api_key = match &global.api_key {
		Some(api_key) => api_key,
		None => bail!("No API key given. Pass --api-key or set NEXMO_API_KEY."),
	};

	let mut auth = AuthCollection::new();
	if let Some(secret) = &global.api_secret {
		auth.add(TokenAuth::new(api_key, secret));
	}
	if let Some(secret) = &global.signature_secret {
		auth.add(SignatureAuth::new(
			api_key,
			secret,
			global.signature_method.into(),
		));
	}
	if auth.is_empty() {
		bail!("No credentials given. Pass --api-secret or --signature-secret (or set NEXMO_API_SECRET / NEXMO_SIGNATURE_SECRET).");
	}
	Ok(auth)
}
