#![allow(missing_docs)]

use std::process::{Command, Output};

use serde_json::Value;
use stringtab::table::{GenOptions, generate_all};
use stringtab_testkit::{fixture_path, load_fixture, scratch_path};

fn run(args: &[&str]) -> Output {
	Command::new(env!("CARGO_BIN_EXE_stringtab")).args(args).output().expect("command executes")
}

fn run_json(args: &[&str]) -> (bool, Value) {
	let output = run(args);
	let json = serde_json::from_slice(&output.stdout).expect("stdout should be valid json");
	(output.status.success(), json)
}

#[test]
fn pill_enum_single_run_json() {
	let path = fixture_path("pill.json");
	let (ok, json) = run_json(&["generate", path.to_str().expect("utf-8 path"), "--json"]);
	assert!(ok, "generation succeeds");

	let pill = &json["types"][0];
	assert_eq!(pill["type"], "Pill");
	assert_eq!(pill["layout"]["strategy"], "single_run");
	assert_eq!(pill["layout"]["index_width"], "u8");
	assert_eq!(pill["layout"]["tables"]["shape"], "runs");
	assert_eq!(pill["layout"]["tables"]["runs"][0]["names"], "PlaceboAspirinIbuprofenParacetamol");
	assert_eq!(pill["descriptor"]["program"]["op"], "cases");
	assert_eq!(pill["descriptor"]["checks"].as_array().map(Vec::len), Some(5));
}

#[test]
fn line_comment_flag_switches_display_names() {
	let path = fixture_path("pill.json");
	let (ok, json) = run_json(&["gen", path.to_str().expect("utf-8 path"), "--line-comment", "--json"]);
	assert!(ok);
	assert_eq!(json["types"][0]["layout"]["tables"]["runs"][0]["names"], "PlaceboAspirinIbuprofenParacetamol (APAP)");
}

#[test]
fn day_flags_decompose_json() {
	let path = fixture_path("day.json");
	let (ok, json) = run_json(&["generate", path.to_str().expect("utf-8 path"), "--json"]);
	assert!(ok);

	let day = &json["types"][0];
	assert_eq!(day["layout"]["strategy"], "multi_run_flag_decompose");
	assert_eq!(day["descriptor"]["program"]["op"], "flags");
	assert_eq!(day["descriptor"]["program"]["bits"].as_array().map(Vec::len), Some(7));
	assert!(day["descriptor"]["program"]["zero"].is_object(), "None is the zero case");
	// Weekend (3 bits) is not a single-bit flag, so it gets no table entry and no guard.
	assert_eq!(day["descriptor"]["checks"].as_array().map(Vec::len), Some(8));
}

#[test]
fn per_type_errors_do_not_abort_other_types() {
	let path = fixture_path("mixed.json");
	let (ok, json) = run_json(&["generate", path.to_str().expect("utf-8 path"), "--json"]);
	assert!(!ok, "exit status reports the failed types");

	let types = json["types"].as_array().expect("types array");
	let names: Vec<_> = types.iter().map(|item| item["type"].as_str().expect("type name")).collect();
	assert_eq!(names, ["Num", "Gappy", "Prime", "Mask", "Ratio", "Wide"]);
	assert_eq!(types[0]["layout"]["strategy"], "single_run");
	assert_eq!(types[1]["layout"]["strategy"], "multi_run_switch");
	assert_eq!(types[2]["layout"]["strategy"], "sparse_map");
	assert!(types[3]["error"].as_str().is_some_and(|err| err.contains("Mask")));
	assert!(types[4]["error"].as_str().is_some_and(|err| err.contains("Half")));
	assert!(types[5]["error"].as_str().is_some_and(|err| err.contains("High") && err.contains("signedness")));
}

#[test]
fn json_output_matches_library_and_parallel_mode() {
	let path = fixture_path("mixed.json");
	let path = path.to_str().expect("utf-8 path");
	let (_, sequential) = run_json(&["generate", path, "--json"]);
	let (_, parallel) = run_json(&["generate", path, "--json", "--parallel"]);
	assert_eq!(sequential, parallel);

	let document = load_fixture("mixed.json");
	let results = generate_all(&document.requests(), &GenOptions::default());
	let library = serde_json::to_value(results[2].as_ref().expect("Prime generates")).expect("serializes");
	assert_eq!(sequential["types"][2]["layout"], library["layout"]);
	assert_eq!(sequential["types"][2]["descriptor"], library["descriptor"]);
}

#[test]
fn type_filter_selects_and_orders() {
	let path = fixture_path("mixed.json");
	let (ok, json) = run_json(&["generate", path.to_str().expect("utf-8 path"), "--type", "Prime", "--type", "Num", "--json"]);
	assert!(ok);
	let names: Vec<_> = json["types"].as_array().expect("types").iter().map(|item| item["type"].clone()).collect();
	assert_eq!(names, ["Prime", "Num"]);
}

#[test]
fn unknown_option_fails_before_processing() {
	let path = fixture_path("pill.json");
	let output = run(&["generate", path.to_str().expect("utf-8 path"), "--opt", "bogus=1"]);
	assert!(!output.status.success());
	assert!(output.stdout.is_empty(), "nothing is generated");
	assert!(String::from_utf8_lossy(&output.stderr).contains("unknown configuration option: bogus"));
}

#[test]
fn text_summary_written_to_output_file() {
	let path = fixture_path("pill.json");
	let out = scratch_path("pill.txt");
	let output = run(&["generate", path.to_str().expect("utf-8 path"), "-o", out.to_str().expect("utf-8 path")]);
	assert!(output.status.success());

	let text = std::fs::read_to_string(&out).expect("output written");
	assert!(text.contains("type: Pill"));
	assert!(text.contains("strategy: single_run"));
	assert!(text.contains("\"PlaceboAspirinIbuprofenParacetamol\""));
}

#[test]
fn text_summary_lists_sparse_entries_and_errors() {
	let path = fixture_path("mixed.json");
	let output = run(&["generate", path.to_str().expect("utf-8 path"), "--type", "Prime", "--type", "Wide"]);
	assert!(!output.status.success());

	let text = String::from_utf8(output.stdout).expect("utf-8 stdout");
	let lines: Vec<&str> = text.lines().collect();
	assert_eq!(lines[0], "type: Prime");
	assert!(lines.contains(&"strategy: sparse_map"));
	assert!(lines.contains(&"entries: 10"));
	assert!(lines.contains(&"value\tstart\tend"));
	assert!(lines.contains(&"2\t0\t2"));
	assert!(lines.contains(&"type: Wide"));
	assert!(lines.iter().any(|line| line.starts_with("error: ") && line.contains("High")));
	assert!(text.ends_with("\n\n"));
}
