#![allow(missing_docs)]

use clap::{Parser, Subcommand};

mod cmd;

#[derive(Parser)]
#[command(name = "mapbridge", about = "Inspect object to generic map conversions")]
struct Cli {
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Parse a JSON document into a generic map and print it back.
	Json(cmd::json::Args),
	/// List the builtin entity schemas or show one.
	Schema(cmd::schema::Args),
	/// Populate a schema instance from a JSON document.
	Populate(cmd::populate::Args),
	/// Read a message, convert it to a typed message, and write it back.
	Message(cmd::message::Args),
}

fn main() {
	tracing_subscriber::fmt()
		.with_writer(std::io::stderr)
		.with_env_filter(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
		.init();

	if let Err(err) = run() {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn run() -> mapbridge::bridge::Result<()> {
	let cli = Cli::parse();

	match cli.command {
		Commands::Json(args) => cmd::json::run(args),
		Commands::Schema(args) => cmd::schema::run(args),
		Commands::Populate(args) => cmd::populate::run(args),
		Commands::Message(args) => cmd::message::run(args),
	}
}
