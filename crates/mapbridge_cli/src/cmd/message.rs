use std::path::PathBuf;

use mapbridge::bridge::{ContentRegistry, EntityCodec, JsonOptions, Message, Result, generic_map_to_json_text};
use tracing::debug;

use crate::cmd::util::read_generic_map;

#[derive(clap::Args)]
pub struct Args {
	/// JSON message, or `-` for stdin.
	pub file: PathBuf,
	/// Custom content type to register; repeatable.
	#[arg(long = "custom")]
	pub custom: Vec<String>,
	#[arg(long)]
	pub pretty: bool,
}

/// Read a message map into a typed message and print its normalized map form.
pub fn run(args: Args) -> Result<()> {
	let mut builder = ContentRegistry::builder();
	for name in &args.custom {
		builder.register(name)?;
	}
	let codec = EntityCodec::new(builder.build());

	let input = read_generic_map(&args.file)?;
	let message: Message = codec.read(&input)?;
	debug!(content_type = message.content.content_type(), "message read");

	let options = if args.pretty { JsonOptions::pretty() } else { JsonOptions::default() };
	println!("{}", generic_map_to_json_text(&codec.write(&message), &options)?);
	Ok(())
}
