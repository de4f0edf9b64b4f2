use std::path::PathBuf;

use mapbridge::bridge::{FieldMismatch, Instance, PopulateOptions, Result, SchemaSet, from_generic_map};

use crate::cmd::print::{PrintOptions, print_instance};
use crate::cmd::util::{emit_json, read_generic_map};

#[derive(clap::Args)]
pub struct Args {
	/// JSON document, or `-` for stdin.
	pub file: PathBuf,
	#[arg(long)]
	pub schema: String,
	/// Fail on the first mismatched field.
	#[arg(long)]
	pub strict: bool,
	#[arg(long)]
	pub depth: Option<u32>,
	#[arg(long)]
	pub json: bool,
}

/// Populate a builtin schema from a JSON document and report skipped fields.
pub fn run(args: Args) -> Result<()> {
	let Args {
		file,
		schema,
		strict,
		depth,
		json,
	} = args;

	let map = read_generic_map(&file)?;
	let schemas = SchemaSet::builtin();
	let mut options = if strict { PopulateOptions::strict() } else { PopulateOptions::default() };
	if let Some(depth) = depth {
		options.max_depth = depth;
	}

	let populated = from_generic_map(&map, &schema, &schemas, &options)?;

	if json {
		return emit_json(&PopulateJson {
			schema: &schema,
			instance: &populated.instance,
			mismatches: populated.mismatches.iter().map(MismatchJson::from).collect(),
		});
	}

	print_instance(&populated.instance, PrintOptions::default());
	println!("mismatches: {}", populated.mismatches.len());
	for item in &populated.mismatches {
		println!("  {}\texpected={}\tgot={}", item.path, item.expected, item.got);
	}
	Ok(())
}

#[derive(serde::Serialize)]
struct MismatchJson<'a> {
	path: &'a str,
	expected: &'static str,
	got: &'static str,
}

impl<'a> From<&'a FieldMismatch> for MismatchJson<'a> {
	fn from(item: &'a FieldMismatch) -> Self {
		Self {
			path: &item.path,
			expected: item.expected,
			got: item.got,
		}
	}
}

#[derive(serde::Serialize)]
struct PopulateJson<'a> {
	schema: &'a str,
	instance: &'a Instance,
	mismatches: Vec<MismatchJson<'a>>,
}
