use std::io::Read;
use std::path::Path;

use mapbridge::bridge::{GenericMap, Result, json_text_to_generic_map};

/// Read a document from `path`, or from stdin when `path` is `-`.
pub(crate) fn read_input(path: &Path) -> Result<String> {
	if path.as_os_str() == "-" {
		let mut text = String::new();
		std::io::stdin().read_to_string(&mut text)?;
		return Ok(text);
	}
	Ok(std::fs::read_to_string(path)?)
}

/// Read a document and bridge it into a generic map.
pub(crate) fn read_generic_map(path: &Path) -> Result<GenericMap> {
	let text = read_input(path)?;
	Ok(json_text_to_generic_map(Some(&text)))
}

/// Print a serializable payload as pretty JSON on stdout.
pub(crate) fn emit_json<T: serde::Serialize>(payload: &T) -> Result<()> {
	println!("{}", serde_json::to_string_pretty(payload)?);
	Ok(())
}
