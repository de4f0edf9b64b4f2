use std::path::PathBuf;

use mapbridge::bridge::{GenericValue, JsonOptions, Result, generic_map_to_json_text};

use crate::cmd::print::{PrintOptions, print_generic};
use crate::cmd::util::read_generic_map;

#[derive(clap::Args)]
pub struct Args {
	/// JSON document, or `-` for stdin.
	pub file: PathBuf,
	#[arg(long)]
	pub pretty: bool,
	/// Keep integral numbers in floating point form.
	#[arg(long = "raw-numbers")]
	pub raw_numbers: bool,
	/// Print the generic map as an indented tree instead of JSON.
	#[arg(long)]
	pub tree: bool,
}

/// Bridge a JSON document into a generic map and serialize it again.
pub fn run(args: Args) -> Result<()> {
	let map = read_generic_map(&args.file)?;
	if args.tree {
		print_generic(&GenericValue::Mapping(map), PrintOptions::default());
		return Ok(());
	}

	let options = JsonOptions {
		integral_numbers: !args.raw_numbers,
		pretty: args.pretty,
	};
	println!("{}", generic_map_to_json_text(&map, &options)?);
	Ok(())
}
