use serde::Serialize;

use crate::table::Kind;

/// Largest run count still handled with per-run tables.
pub const MAX_RUN_TABLES: usize = 8;

/// Output layout chosen for one declared type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
	/// One contiguous enum run, decoded by direct indexing.
	SingleRun,
	/// A bounded number of enum runs, decoded by a range switch.
	MultiRunSwitch,
	/// A bounded number of flag runs, decoded by per-bit tests.
	MultiRunFlagDecompose,
	/// Too many runs; decoded through a direct value-to-name table.
	SparseMap,
}

impl Strategy {
	/// Stable snake_case label.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::SingleRun => "single_run",
			Self::MultiRunSwitch => "multi_run_switch",
			Self::MultiRunFlagDecompose => "multi_run_flag_decompose",
			Self::SparseMap => "sparse_map",
		}
	}
}

/// Choose a strategy from the kind and the number of runs.
pub fn select_strategy(kind: Kind, run_count: usize) -> Strategy {
	match (kind, run_count) {
		(_, count) if count > MAX_RUN_TABLES => Strategy::SparseMap,
		(Kind::Enum, 0 | 1) => Strategy::SingleRun,
		(Kind::Enum, _) => Strategy::MultiRunSwitch,
		(Kind::Flag, _) => Strategy::MultiRunFlagDecompose,
	}
}
