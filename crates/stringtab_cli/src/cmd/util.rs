use std::path::PathBuf;

use stringtab::table::{GenOptions, InputDocument, RawValue, Result, StringtabError, parse_int_literal, split_option};

/// Input file plus option overrides shared by every command.
#[derive(clap::Args)]
pub struct SourceArgs {
	/// JSON document with option keys and declared types.
	pub input: PathBuf,
	/// Strip this prefix from constant names.
	#[arg(long = "trim-prefix")]
	pub trim_prefix: Option<String>,
	/// Use annotation text as the printed name when present.
	#[arg(long = "line-comment")]
	pub line_comment: bool,
	/// Extra `key=value` option, applied after the document's options.
	#[arg(long = "opt", value_name = "KEY=VALUE")]
	pub opts: Vec<String>,
}

impl SourceArgs {
	/// Read the document and resolve options: document, then `--opt`, then dedicated flags.
	pub(crate) fn load(&self) -> Result<(InputDocument, GenOptions)> {
		let document = InputDocument::open(&self.input)?;
		let mut options = document.gen_options()?;

		let pairs = self.opts.iter().map(|arg| split_option(arg)).collect::<Result<Vec<_>>>()?;
		options.extend_pairs(pairs)?;

		if let Some(prefix) = &self.trim_prefix {
			options.trim_prefix = prefix.clone();
		}
		if self.line_comment {
			options.use_annotation_name = true;
		}
		Ok((document, options))
	}
}

/// Parse a decimal, negative, or `0x` literal into a 64-bit pattern.
pub(crate) fn parse_value(text: &str) -> Result<u64> {
	parse_int_literal(text)
		.and_then(|value| RawValue::Int(value).to_bits())
		.ok_or_else(|| StringtabError::InvalidValueLiteral { value: text.to_owned() })
}

/// Pretty-print a JSON payload.
pub(crate) fn render_json<T: serde::Serialize>(payload: &T) -> Result<String> {
	let mut text = serde_json::to_string_pretty(payload)?;
	text.push('\n');
	Ok(text)
}

/// Write to `output` when given, otherwise stdout.
pub(crate) fn emit(text: &str, output: Option<&std::path::Path>) -> Result<()> {
	match output {
		Some(path) => std::fs::write(path, text)?,
		None => print!("{text}"),
	}
	Ok(())
}
