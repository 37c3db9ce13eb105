use serde::Serialize;

use crate::table::{ConstantValue, Kind, Layout, NameRef, Tables, format_decimal};

/// One branch of an enum decode switch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "case", rename_all = "snake_case")]
pub enum EnumCase {
	/// `value == v` selects a whole single-name blob.
	Exact {
		/// Matched bit pattern.
		value: u64,
		/// Name slice.
		name: NameRef,
	},
	/// `first <= value <= last` indexes a run's offset table.
	Range {
		/// Run table index.
		table: usize,
		/// Lowest value in the run.
		first: u64,
		/// Highest value in the run.
		last: u64,
		/// Subtract `first` before indexing. Runs starting at zero index directly.
		rebase: bool,
		/// Compare against `first`. Unsigned runs starting at zero skip it.
		check_lower: bool,
	},
}

/// Test one known bit and emit its name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BitTest {
	/// Single-bit mask.
	pub mask: u64,
	/// Name slice.
	pub name: NameRef,
}

/// Abstract decode routine a renderer reproduces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DecodeProgram {
	/// Enum switch over exact and range cases, then the numeric fallback.
	Cases {
		/// Cases in ascending value order.
		cases: Vec<EnumCase>,
	},
	/// Enum lookup in the sparse table, then the numeric fallback.
	Lookup,
	/// Flag decomposition.
	///
	/// Zero yields `zero` alone (or nothing). Otherwise each bit test that matches emits its name
	/// and clears the bit; leftover bits become one numeric fallback term.
	Flags {
		/// Name of the declared zero constant.
		zero: Option<NameRef>,
		/// Known bits in ascending bit position.
		bits: Vec<BitTest>,
	},
}

/// Guard pairing a constant name with the value it had at generation time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConstantCheck {
	/// Declared identifier.
	pub name: String,
	/// Literal value text.
	pub literal: String,
}

impl From<&ConstantValue> for ConstantCheck {
	fn from(value: &ConstantValue) -> Self {
		Self {
			name: value.original_name.clone(),
			literal: value.literal_text.clone(),
		}
	}
}

/// Decode semantics implied by a layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Descriptor {
	/// Declared type name, used by the numeric fallback.
	pub type_name: String,
	/// Classification kind.
	pub kind: Kind,
	/// Fallback prints signed decimal when set.
	pub signed: bool,
	/// Decode routine.
	pub program: DecodeProgram,
	/// Consistency guards in declaration order.
	pub checks: Vec<ConstantCheck>,
}

impl Descriptor {
	/// Derive the decode program for `layout`.
	pub fn build(layout: &Layout, checks: Vec<ConstantCheck>) -> Self {
		let program = match layout.kind {
			Kind::Enum => enum_program(layout),
			Kind::Flag => flag_program(layout),
		};
		Self {
			type_name: layout.type_name.clone(),
			kind: layout.kind,
			signed: layout.signed,
			program,
			checks,
		}
	}

	/// Render an unknown value as `Type(n)`.
	pub fn fallback(&self, value: u64) -> String {
		format!("{}({})", self.type_name, format_decimal(value, self.signed))
	}
}

fn enum_program(layout: &Layout) -> DecodeProgram {
	let Tables::Runs { runs } = &layout.tables else {
		return DecodeProgram::Lookup;
	};

	let cases = runs
		.iter()
		.enumerate()
		.map(|(index, table)| {
			let first = table.run.first();
			if table.needs_index() {
				EnumCase::Range {
					table: index,
					first: first.raw_value,
					last: table.run.last().raw_value,
					rebase: first.raw_value != 0,
					check_lower: first.raw_value != 0 || first.signed,
				}
			} else {
				EnumCase::Exact {
					value: first.raw_value,
					name: NameRef {
						table: index,
						start: 0,
						end: table.names.len(),
					},
				}
			}
		})
		.collect();

	DecodeProgram::Cases { cases }
}

fn flag_program(layout: &Layout) -> DecodeProgram {
	let named: Vec<(u64, NameRef)> = match &layout.tables {
		Tables::Runs { runs } => runs
			.iter()
			.enumerate()
			.flat_map(|(index, table)| {
				table
					.run
					.values()
					.iter()
					.enumerate()
					.filter_map(move |(position, value)| table.slice(index, position).map(|name| (value.raw_value, name)))
			})
			.collect(),
		Tables::Sparse { table } => table
			.entries
			.iter()
			.map(|entry| {
				let name = NameRef {
					table: 0,
					start: entry.start,
					end: entry.end,
				};
				(entry.value.raw_value, name)
			})
			.collect(),
	};

	let zero = named.iter().find(|(value, _)| *value == 0).map(|(_, name)| *name);
	let mut bits: Vec<BitTest> = named
		.into_iter()
		.filter(|(value, _)| *value != 0)
		.map(|(mask, name)| BitTest { mask, name })
		.collect();
	// Signed ordering can place the top bit first.
	bits.sort_by_key(|bit| bit.mask);

	DecodeProgram::Flags { zero, bits }
}
