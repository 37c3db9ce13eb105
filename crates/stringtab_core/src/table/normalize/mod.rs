use tracing::trace;

use crate::table::{ConstantValue, Kind, Result, StringtabError, TypeContext, cmp_bits};

/// Drop constants the kind cannot represent. Flag sets keep only zero and single-bit values.
pub fn retain_for_kind(kind: Kind, mut values: Vec<ConstantValue>) -> Vec<ConstantValue> {
	if kind == Kind::Flag {
		values.retain(|value| {
			let keep = value.is_single_bit_or_zero();
			if !keep {
				trace!(constant = %value.original_name, value = %value.literal_text, "dropping multi-bit flag constant");
			}
			keep
		});
	}
	values
}

/// Order constants by value and keep the first declared name for each distinct value.
///
/// Ordering uses the signedness of the first constant for the whole type; callers reject
/// mixed signedness beforehand (see [`check_signedness`]).
///
/// The sort is stable, so among equal values the one declared first survives and every later
/// alias disappears from the output entirely.
pub fn normalize(cx: &TypeContext<'_>, values: Vec<ConstantValue>) -> Result<Vec<ConstantValue>> {
	let mut values = retain_for_kind(cx.kind, values);
	if values.is_empty() {
		return Err(StringtabError::EmptyInput {
			type_name: cx.type_name.to_owned(),
		});
	}

	let signed = values[0].signed;
	values.sort_by(|left, right| cmp_bits(left.raw_value, right.raw_value, signed));
	values.dedup_by(|later, kept| {
		let duplicate = later.raw_value == kept.raw_value;
		if duplicate {
			trace!(dropped = %later.original_name, kept = %kept.original_name, "dropping aliased constant");
		}
		duplicate
	});

	Ok(values)
}

/// Reject a type whose constants do not all share the first constant's signedness.
pub fn check_signedness(cx: &TypeContext<'_>, values: &[ConstantValue]) -> Result<()> {
	let Some(first) = values.first() else {
		return Ok(());
	};
	match values.iter().find(|value| value.signed != first.signed) {
		Some(value) => Err(StringtabError::MixedSignedness {
			type_name: cx.type_name.to_owned(),
			constant: value.original_name.clone(),
		}),
		None => Ok(()),
	}
}
