use mapbridge::bridge::{Result, SchemaSet, StructSchema};

use crate::cmd::util::emit_json;

#[derive(clap::Args)]
pub struct Args {
	/// Show a single schema.
	#[arg(long)]
	pub name: Option<String>,
	#[arg(long)]
	pub json: bool,
}

pub fn run(args: Args) -> Result<()> {
	let schemas = SchemaSet::builtin();
	let selected: Vec<&StructSchema> = match &args.name {
		Some(name) => vec![schemas.require(name)?],
		None => schemas.iter().collect(),
	};

	if args.json {
		let payload: Vec<SchemaJson> = selected.iter().map(|schema| SchemaJson::from_schema(schema)).collect();
		return emit_json(&payload);
	}

	if args.name.is_none() {
		println!("schemas: {}", selected.len());
		for schema in &selected {
			println!("{}\t{}", schema.name, schema.fields.len());
		}
		return Ok(());
	}

	for schema in selected {
		println!("schema: {}", schema.name);
		println!("field_count: {}", schema.fields.len());
		for field in &schema.fields {
			println!("  {}: {}", field.name, field.kind);
		}
	}
	Ok(())
}

#[derive(serde::Serialize)]
struct FieldJson {
	name: String,
	kind: String,
}

#[derive(serde::Serialize)]
struct SchemaJson {
	name: String,
	fields: Vec<FieldJson>,
}

impl SchemaJson {
	fn from_schema(schema: &StructSchema) -> Self {
		Self {
			name: schema.name.to_string(),
			fields: schema
				.fields
				.iter()
				.map(|field| FieldJson {
					name: field.name.to_string(),
					kind: field.kind.to_string(),
				})
				.collect(),
		}
	}
}
