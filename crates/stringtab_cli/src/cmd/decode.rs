use stringtab::table::{Result, StringtabError, generate_type};

use crate::cmd::util::{SourceArgs, emit, parse_value, render_json};

#[derive(clap::Args)]
pub struct Args {
	#[command(flatten)]
	pub source: SourceArgs,
	/// Declared type whose values are decoded.
	#[arg(long = "type")]
	pub type_name: String,
	/// Values to decode (decimal, negative, or `0x` hex).
	#[arg(required = true, allow_negative_numbers = true)]
	pub values: Vec<String>,
	#[arg(long)]
	pub json: bool,
}

/// Decode each value the way generated code would print it.
pub fn run(args: Args) -> Result<bool> {
	let Args {
		source,
		type_name,
		values,
		json,
	} = args;

	let (document, options) = source.load()?;
	let declared = document.find(&type_name).ok_or_else(|| StringtabError::TypeNotFound { type_name: type_name.clone() })?;
	let output = generate_type(&declared.request(), &options)?;
	let decoder = output.decoder();

	let rows = values
		.iter()
		.map(|text| {
			let value = parse_value(text)?;
			Ok(DecodedJson {
				value: text.clone(),
				names: decoder.active_flags(value),
				rendered: decoder.render(value),
			})
		})
		.collect::<Result<Vec<_>>>()?;

	if json {
		emit(&render_json(&rows)?, None)?;
		return Ok(true);
	}

	for row in &rows {
		println!("{}\t{}", row.value, row.rendered);
	}
	Ok(true)
}

#[derive(serde::Serialize)]
struct DecodedJson {
	value: String,
	names: Vec<String>,
	rendered: String,
}
