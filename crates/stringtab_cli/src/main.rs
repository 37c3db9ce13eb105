#![allow(missing_docs)]

use clap::{Parser, Subcommand};

mod cmd;
mod logging;

#[derive(Parser)]
#[command(name = "stringtab", about = "Name tables for integer constant sets")]
struct Cli {
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Build layouts and decode descriptors for declared types.
	#[command(visible_alias = "gen")]
	Generate(cmd::generate::Args),
	/// Decode runtime values of one declared type.
	Decode(cmd::decode::Args),
}

fn main() {
	logging::setup_logging();

	let cli = Cli::parse();
	let outcome = match cli.command {
		Commands::Generate(args) => cmd::generate::run(args),
		Commands::Decode(args) => cmd::decode::run(args),
	};

	match outcome {
		Ok(true) => {}
		Ok(false) => std::process::exit(1),
		Err(err) => {
			eprintln!("error: {err}");
			std::process::exit(1);
		}
	}
}
