use std::fmt::Write;

use mapbridge::bridge::{GenericValue, Instance, TypedValue};

/// Output truncation limits for printed trees.
#[derive(Debug, Clone, Copy)]
pub struct PrintOptions {
	/// Maximum number of entries printed for one mapping or instance.
	pub max_fields: usize,
	/// Maximum number of Unicode scalar values printed for strings.
	pub max_string_len: usize,
	/// Maximum number of elements printed for sequences.
	pub max_items: usize,
	/// Maximum nesting depth.
	pub max_print_depth: u32,
}

impl Default for PrintOptions {
	fn default() -> Self {
		Self {
			max_fields: 80,
			max_string_len: 200,
			max_items: 16,
			max_print_depth: 8,
		}
	}
}

/// Print a generic value tree on stdout.
pub fn print_generic(value: &GenericValue, options: PrintOptions) {
	let mut out = String::new();
	render_generic(&mut out, value, 0, 0, options);
	print!("{out}");
}

/// Print a populated instance tree on stdout.
pub fn print_instance(instance: &Instance, options: PrintOptions) {
	let mut out = String::new();
	render_instance(&mut out, instance, 0, 0, options);
	print!("{out}");
}

pub(crate) fn render_generic(out: &mut String, value: &GenericValue, indent: usize, depth: u32, options: PrintOptions) {
	let pad = " ".repeat(indent);
	match value {
		GenericValue::Null => line(out, &pad, "null"),
		GenericValue::Bool(flag) => line(out, &pad, flag),
		GenericValue::Number(number) => line(out, &pad, number),
		GenericValue::String(text) => line(out, &pad, format_args!("\"{}\"", truncate(text, options.max_string_len))),
		GenericValue::Sequence(items) => {
			if depth >= options.max_print_depth {
				line(out, &pad, format_args!("[... {} items]", items.len()));
				return;
			}
			line(out, &pad, "[");
			for item in items.iter().take(options.max_items) {
				render_generic(out, item, indent + 2, depth + 1, options);
			}
			if items.len() > options.max_items {
				line(out, &pad, format_args!("  ... {} more", items.len() - options.max_items));
			}
			line(out, &pad, "]");
		}
		GenericValue::Mapping(map) => {
			if depth >= options.max_print_depth {
				line(out, &pad, format_args!("{{ ... {} entries }}", map.len()));
				return;
			}
			line(out, &pad, "{");
			for (key, item) in map.iter().take(options.max_fields) {
				if matches!(item, GenericValue::Sequence(_) | GenericValue::Mapping(_)) {
					line(out, &pad, format_args!("  {key} ="));
					render_generic(out, item, indent + 4, depth + 1, options);
				} else {
					let _ = write!(out, "{pad}  {key} = ");
					render_generic(out, item, 0, depth + 1, options);
				}
			}
			if map.len() > options.max_fields {
				line(out, &pad, format_args!("  ... {} more entries", map.len() - options.max_fields));
			}
			line(out, &pad, "}");
		}
	}
}

pub(crate) fn render_instance(out: &mut String, instance: &Instance, indent: usize, depth: u32, options: PrintOptions) {
	let pad = " ".repeat(indent);
	if depth >= options.max_print_depth {
		line(out, &pad, format_args!("{} {{ ... }}", instance.type_name));
		return;
	}

	line(out, &pad, format_args!("{} {{", instance.type_name));
	for field in instance.fields.iter().take(options.max_fields) {
		if is_nested(&field.value) {
			line(out, &pad, format_args!("  {} =", field.name));
			render_typed(out, &field.value, indent + 4, depth + 1, options);
		} else {
			let _ = write!(out, "{pad}  {} = ", field.name);
			render_typed(out, &field.value, 0, depth + 1, options);
		}
	}
	if instance.fields.len() > options.max_fields {
		line(out, &pad, format_args!("  ... {} more fields", instance.fields.len() - options.max_fields));
	}
	line(out, &pad, "}");
}

fn render_typed(out: &mut String, value: &TypedValue, indent: usize, depth: u32, options: PrintOptions) {
	let pad = " ".repeat(indent);
	match value {
		TypedValue::Null => line(out, &pad, "null"),
		TypedValue::String(text) => line(out, &pad, format_args!("\"{}\"", truncate(text, options.max_string_len))),
		TypedValue::I32(number) => line(out, &pad, number),
		TypedValue::I64(number) => line(out, &pad, number),
		TypedValue::F32(number) => line(out, &pad, number),
		TypedValue::F64(number) => line(out, &pad, number),
		TypedValue::Bool(flag) => line(out, &pad, flag),
		TypedValue::Object(nested) => render_instance(out, nested, indent, depth, options),
		TypedValue::Sequence(items) => {
			if depth >= options.max_print_depth {
				line(out, &pad, format_args!("[... {} items]", items.len()));
				return;
			}
			line(out, &pad, "[");
			for item in items.iter().take(options.max_items) {
				render_typed(out, item, indent + 2, depth + 1, options);
			}
			if items.len() > options.max_items {
				line(out, &pad, format_args!("  ... {} more", items.len() - options.max_items));
			}
			line(out, &pad, "]");
		}
		TypedValue::Map(entries) => {
			line(out, &pad, "{");
			for (key, item) in entries.iter().take(options.max_fields) {
				let _ = write!(out, "{pad}  {key} = ");
				render_typed(out, item, 0, depth + 1, options);
			}
			line(out, &pad, "}");
		}
		TypedValue::Generic(value) => render_generic(out, value, indent, depth, options),
	}
}

fn is_nested(value: &TypedValue) -> bool {
	match value {
		TypedValue::Object(_) | TypedValue::Sequence(_) | TypedValue::Map(_) => true,
		TypedValue::Generic(inner) => matches!(inner, GenericValue::Sequence(_) | GenericValue::Mapping(_)),
		_ => false,
	}
}

fn line(out: &mut String, pad: &str, text: impl std::fmt::Display) {
	let _ = writeln!(out, "{pad}{text}");
}

fn truncate(input: &str, max_len: usize) -> String {
	if input.chars().count() <= max_len {
		return input.to_owned();
	}
	let out: String = input.chars().take(max_len).collect();
	format!("{out}...")
}

#[cfg(test)]
mod tests;
