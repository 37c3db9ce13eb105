use std::path::PathBuf;

use stringtab::table::{GenOptions, Layout, Result, Tables, TypeOutput, TypeRequest, generate_all, generate_all_parallel};

use crate::cmd::util::{SourceArgs, emit, render_json};

#[derive(clap::Args)]
pub struct Args {
	#[command(flatten)]
	pub source: SourceArgs,
	/// Only process these types, in this order.
	#[arg(long = "type")]
	pub types: Vec<String>,
	#[arg(long)]
	pub json: bool,
	/// Write output here instead of stdout.
	#[arg(long, short = 'o')]
	pub output: Option<PathBuf>,
	/// Process types on separate threads.
	#[arg(long)]
	pub parallel: bool,
}

/// Generate layouts for every requested type. Returns `false` when any type failed.
pub fn run(args: Args) -> Result<bool> {
	let Args {
		source,
		types,
		json,
		output,
		parallel,
	} = args;

	let (document, options) = source.load()?;
	let requests = if types.is_empty() { document.requests() } else { document.requests_for(&types)? };

	let results = run_requests(&requests, &options, parallel);
	let all_ok = results.iter().all(|result| result.is_ok());

	let text = if json {
		render_json(&GenerateJson {
			types: requests.iter().zip(&results).map(|(request, result)| TypeJson::new(request, result)).collect(),
		})?
	} else {
		render_text(&requests, &results)
	};
	emit(&text, output.as_deref())?;

	for (request, result) in requests.iter().zip(&results) {
		if let Err(err) = result {
			tracing::error!(type_name = %request.type_name, "{err}");
		}
	}

	Ok(all_ok)
}

fn run_requests(requests: &[TypeRequest], options: &GenOptions, parallel: bool) -> Vec<Result<TypeOutput>> {
	if parallel {
		generate_all_parallel(requests, options)
	} else {
		generate_all(requests, options)
	}
}

fn render_text(requests: &[TypeRequest], results: &[Result<TypeOutput>]) -> String {
	let mut lines = Vec::new();
	for (request, result) in requests.iter().zip(results) {
		lines.push(format!("type: {}", request.type_name));
		match result {
			Ok(output) => render_layout(&mut lines, &output.layout),
			Err(err) => lines.push(format!("error: {err}")),
		}
		lines.push(String::new());
	}

	let mut out = lines.join("\n");
	out.push('\n');
	out
}

fn render_layout(lines: &mut Vec<String>, layout: &Layout) {
	lines.push(format!("kind: {}", layout.kind.as_str()));
	lines.push(format!("signed: {}", layout.signed));
	lines.push(format!("strategy: {}", layout.strategy.as_str()));
	lines.push(format!("index_bits: {}", layout.index_width.bits()));
	lines.push(format!("values: {}", layout.values().len()));

	match &layout.tables {
		Tables::Runs { runs } => {
			lines.push(format!("runs: {}", runs.len()));
			lines.push("idx\tfirst\tlast\tlen\tnames".to_owned());
			for (index, table) in runs.iter().enumerate() {
				lines.push(format!(
					"{}\t{}\t{}\t{}\t{:?}",
					index,
					table.run.first().literal_text,
					table.run.last().literal_text,
					table.run.len(),
					table.names
				));
			}
		}
		Tables::Sparse { table } => {
			lines.push(format!("entries: {}", table.entries.len()));
			lines.push(format!("names: {:?}", table.names));
			lines.push("value\tstart\tend".to_owned());
			for entry in &table.entries {
				lines.push(format!("{}\t{}\t{}", entry.value.literal_text, entry.start, entry.end));
			}
		}
	}
}

#[derive(serde::Serialize)]
struct GenerateJson<'a> {
	types: Vec<TypeJson<'a>>,
}

#[derive(serde::Serialize)]
#[serde(untagged)]
enum TypeJson<'a> {
	Ok {
		#[serde(rename = "type")]
		type_name: &'a str,
		#[serde(flatten)]
		output: &'a TypeOutput,
	},
	Err {
		#[serde(rename = "type")]
		type_name: &'a str,
		error: String,
	},
}

impl<'a> TypeJson<'a> {
	fn new(request: &'a TypeRequest, result: &'a Result<TypeOutput>) -> Self {
		match result {
			Ok(output) => Self::Ok {
				type_name: &request.type_name,
				output,
			},
			Err(err) => Self::Err {
				type_name: &request.type_name,
				error: err.to_string(),
			},
		}
	}
}
