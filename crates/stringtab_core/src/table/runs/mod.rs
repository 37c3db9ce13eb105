use serde::Serialize;

use crate::table::{ConstantValue, Kind};

/// Maximal ordered stretch of normalized constants that share one compact table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Run {
	values: Vec<ConstantValue>,
}

impl Run {
	/// Members in ascending order.
	pub fn values(&self) -> &[ConstantValue] {
		&self.values
	}

	/// Lowest member.
	pub fn first(&self) -> &ConstantValue {
		&self.values[0]
	}

	/// Highest member.
	pub fn last(&self) -> &ConstantValue {
		&self.values[self.values.len() - 1]
	}

	/// Number of members. Never zero.
	pub fn len(&self) -> usize {
		self.values.len()
	}

	/// Whether the run's lowest member is the zero value.
	pub fn starts_at_zero(&self) -> bool {
		self.first().raw_value == 0
	}
}

/// Whether `next` continues a run ending in `prev` for the given kind.
///
/// Enums step by one with wrapping 64-bit arithmetic. Flags step to the next bit up, and a
/// zero value may lead any run.
pub fn is_contiguous(kind: Kind, prev: u64, next: u64) -> bool {
	match kind {
		Kind::Enum => next == prev.wrapping_add(1),
		Kind::Flag => prev == 0 || next == prev << 1,
	}
}

/// Partition normalized values into maximal contiguous runs.
///
/// For example, enum values `1,2,3,5,6,7` split into `{1,2,3}` and `{5,6,7}`. Input must be
/// sorted and deduplicated; empty input yields no runs.
pub fn split_into_runs(kind: Kind, values: Vec<ConstantValue>) -> Vec<Run> {
	let mut runs = Vec::new();
	let mut current: Vec<ConstantValue> = Vec::new();

	for value in values {
		let breaks = current.last().is_some_and(|prev| !is_contiguous(kind, prev.raw_value, value.raw_value));
		if breaks {
			runs.push(Run {
				values: std::mem::take(&mut current),
			});
		}
		current.push(value);
	}

	if !current.is_empty() {
		runs.push(Run { values: current });
	}
	runs
}
