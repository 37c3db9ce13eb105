use std::collections::HashMap;

use serde::Serialize;

use crate::table::{ConstantValue, Kind, Run, Strategy, TypeContext};

/// Smallest unsigned element type able to hold name-blob offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IndexWidth {
	/// 8-bit offsets.
	U8,
	/// 16-bit offsets.
	U16,
	/// 32-bit offsets.
	U32,
}

impl IndexWidth {
	/// Width whose unsigned range exceeds a blob of `len` bytes.
	pub fn for_len(len: usize) -> Self {
		if len < 1 << 8 {
			Self::U8
		} else if len < 1 << 16 {
			Self::U16
		} else {
			Self::U32
		}
	}

	/// Element width in bits.
	pub fn bits(self) -> u32 {
		match self {
			Self::U8 => 8,
			Self::U16 => 16,
			Self::U32 => 32,
		}
	}
}

/// Byte slice `[start, end)` of a name blob. `table` selects the run table; sparse layouts use `0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NameRef {
	/// Run table holding the blob.
	pub table: usize,
	/// Inclusive start byte.
	pub start: usize,
	/// Exclusive end byte.
	pub end: usize,
}

/// Concatenated names and offsets for one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunTable {
	/// Run members in ascending order.
	pub run: Run,
	/// Member display names with no separators.
	pub names: String,
	/// Cumulative byte offsets, `len(run) + 1` entries starting at 0.
	pub offsets: Vec<usize>,
}

impl RunTable {
	/// Concatenate the run's display names and record offsets.
	pub fn build(run: Run) -> Self {
		let mut names = String::new();
		let mut offsets = Vec::with_capacity(run.len() + 1);
		offsets.push(0);
		for value in run.values() {
			names.push_str(&value.display_name);
			offsets.push(names.len());
		}
		Self { run, names, offsets }
	}

	/// Single-member runs use the whole blob and need no offset array.
	pub fn needs_index(&self) -> bool {
		self.run.len() > 1
	}

	/// Offset width for this run's blob.
	pub fn index_width(&self) -> IndexWidth {
		IndexWidth::for_len(self.names.len())
	}

	/// Name slice for the member at `position` within the run.
	pub fn slice(&self, table: usize, position: usize) -> Option<NameRef> {
		let start = *self.offsets.get(position)?;
		let end = *self.offsets.get(position + 1)?;
		Some(NameRef { table, start, end })
	}

	/// Display name for the member at `position` within the run.
	pub fn name_at(&self, position: usize) -> Option<&str> {
		let start = *self.offsets.get(position)?;
		let end = *self.offsets.get(position + 1)?;
		self.names.get(start..end)
	}
}

/// One value-to-name mapping in a sparse table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SparseEntry {
	/// Mapped constant.
	pub value: ConstantValue,
	/// Inclusive start byte in the shared blob.
	pub start: usize,
	/// Exclusive end byte in the shared blob.
	pub end: usize,
}

/// Direct value-to-name table over one shared blob.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SparseTable {
	/// All display names, in run order, with no separators.
	pub names: String,
	/// Entries in run order.
	pub entries: Vec<SparseEntry>,
	#[serde(skip)]
	by_value: HashMap<u64, usize>,
}

impl SparseTable {
	/// Flatten runs into one blob plus a value index.
	pub fn build(runs: Vec<Run>) -> Self {
		let mut names = String::new();
		let mut entries = Vec::new();
		let mut by_value = HashMap::new();
		for run in runs {
			for value in run.values() {
				let start = names.len();
				names.push_str(&value.display_name);
				by_value.insert(value.raw_value, entries.len());
				entries.push(SparseEntry {
					value: value.clone(),
					start,
					end: names.len(),
				});
			}
		}
		Self { names, entries, by_value }
	}

	/// Entry mapped to `raw_value`, if any.
	pub fn entry(&self, raw_value: u64) -> Option<&SparseEntry> {
		self.by_value.get(&raw_value).map(|index| &self.entries[*index])
	}

	/// Display name mapped to `raw_value`, if any.
	pub fn lookup(&self, raw_value: u64) -> Option<&str> {
		self.entry(raw_value).and_then(|entry| self.names.get(entry.start..entry.end))
	}
}

/// Per-strategy table payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum Tables {
	/// Independent blob and offsets per run.
	Runs {
		/// Run tables in ascending value order.
		runs: Vec<RunTable>,
	},
	/// One blob with a direct value index.
	Sparse {
		/// Shared table.
		table: SparseTable,
	},
}

/// Compact name-table representation chosen for one declared type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Layout {
	/// Declared type name.
	pub type_name: String,
	/// Classification kind.
	pub kind: Kind,
	/// Whether values order and print as signed.
	pub signed: bool,
	/// Chosen strategy.
	pub strategy: Strategy,
	/// Name tables.
	pub tables: Tables,
	/// Offset width covering the largest blob that needs an index.
	pub index_width: IndexWidth,
}

impl Layout {
	/// Build tables for `runs` under `strategy`. Runs must be non-empty.
	pub fn build(cx: &TypeContext<'_>, strategy: Strategy, runs: Vec<Run>) -> Self {
		let signed = runs.first().is_some_and(|run| run.first().signed);

		let (tables, index_width) = match strategy {
			Strategy::SparseMap => (Tables::Sparse { table: SparseTable::build(runs) }, IndexWidth::U8),
			Strategy::SingleRun | Strategy::MultiRunSwitch | Strategy::MultiRunFlagDecompose => {
				let runs: Vec<RunTable> = runs.into_iter().map(RunTable::build).collect();
				let width = runs
					.iter()
					.filter(|table| table.needs_index())
					.map(RunTable::index_width)
					.max()
					.unwrap_or(IndexWidth::U8);
				(Tables::Runs { runs }, width)
			}
		};

		Self {
			type_name: cx.type_name.to_owned(),
			kind: cx.kind,
			signed,
			strategy,
			tables,
			index_width,
		}
	}

	/// Run tables; empty for sparse layouts.
	pub fn run_tables(&self) -> &[RunTable] {
		match &self.tables {
			Tables::Runs { runs } => runs,
			Tables::Sparse { .. } => &[],
		}
	}

	/// Sparse table, if this layout uses one.
	pub fn sparse(&self) -> Option<&SparseTable> {
		match &self.tables {
			Tables::Runs { .. } => None,
			Tables::Sparse { table } => Some(table),
		}
	}

	/// Resolve a name slice against this layout's blobs.
	pub fn name(&self, name: NameRef) -> Option<&str> {
		let blob = match &self.tables {
			Tables::Runs { runs } => &runs.get(name.table)?.names,
			Tables::Sparse { table } => &table.names,
		};
		blob.get(name.start..name.end)
	}

	/// Every retained constant in ascending order.
	pub fn values(&self) -> Vec<&ConstantValue> {
		match &self.tables {
			Tables::Runs { runs } => runs.iter().flat_map(|table| table.run.values()).collect(),
			Tables::Sparse { table } => table.entries.iter().map(|entry| &entry.value).collect(),
		}
	}
}
