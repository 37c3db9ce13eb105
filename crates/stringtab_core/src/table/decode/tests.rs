use crate::table::{ConstantValue, DecodeProgram, EnumCase, GenOptions, Kind, Strategy, TypeContext, TypeOutput, generate_values};

fn generate(type_name: &str, kind: Kind, values: Vec<ConstantValue>) -> TypeOutput {
	let options = GenOptions::default();
	let cx = TypeContext {
		type_name,
		kind,
		options: &options,
	};
	generate_values(&cx, values).expect("pipeline succeeds")
}

fn unsigned(pairs: &[(&str, u64)]) -> Vec<ConstantValue> {
	pairs.iter().map(|(name, value)| ConstantValue::new(*name, *value, false)).collect()
}

fn signed(pairs: &[(&str, i64)]) -> Vec<ConstantValue> {
	pairs.iter().map(|(name, value)| ConstantValue::new(*name, *value as u64, true)).collect()
}

#[test]
fn offset_run_falls_back_outside_range() {
	let out = generate("Num", Kind::Enum, unsigned(&[("Ten", 10), ("Eleven", 11), ("Twelve", 12)]));
	let decoder = out.decoder();
	assert_eq!(decoder.name(10), "Ten");
	assert_eq!(decoder.name(11), "Eleven");
	assert_eq!(decoder.name(12), "Twelve");
	assert_eq!(decoder.name(13), "Num(13)");
	assert_eq!(decoder.name(9), "Num(9)");
	assert_eq!(decoder.name(0), "Num(0)");
}

#[test]
fn zero_based_run_indexes_directly() {
	let out = generate("Pill", Kind::Enum, signed(&[("Placebo", 0), ("Aspirin", 1), ("Ibuprofen", 2)]));
	assert_eq!(out.layout.strategy, Strategy::SingleRun);

	let DecodeProgram::Cases { cases } = &out.descriptor.program else {
		panic!("expected switch program");
	};
	assert!(matches!(cases[..], [EnumCase::Range { rebase: false, check_lower: true, .. }]));

	let decoder = out.decoder();
	assert_eq!(decoder.name(2), "Ibuprofen");
	assert_eq!(decoder.name(-1_i64 as u64), "Pill(-1)");
	assert_eq!(decoder.render(0), "Placebo");
}

#[test]
fn unsigned_zero_run_skips_lower_check() {
	let out = generate("U", Kind::Enum, unsigned(&[("A", 0), ("B", 1)]));
	let DecodeProgram::Cases { cases } = &out.descriptor.program else {
		panic!("expected switch program");
	};
	assert!(matches!(cases[..], [EnumCase::Range { rebase: false, check_lower: false, .. }]));
	assert_eq!(out.decoder().name(u64::MAX), "U(18446744073709551615)");
}

#[test]
fn signed_run_across_zero() {
	let out = generate("Temp", Kind::Enum, signed(&[("Cold", -2), ("Cool", -1), ("Zero", 0), ("Warm", 1)]));
	assert_eq!(out.layout.strategy, Strategy::SingleRun);
	let decoder = out.decoder();
	assert_eq!(decoder.name(-2_i64 as u64), "Cold");
	assert_eq!(decoder.name(1), "Warm");
	assert_eq!(decoder.name(-3_i64 as u64), "Temp(-3)");
	assert_eq!(decoder.name(2), "Temp(2)");
}

#[test]
fn multi_run_switch_decodes_each_run() {
	let values = signed(&[("Neg", -5), ("A", 0), ("B", 1), ("C", 2), ("X", 10), ("Y", 11), ("Far", 100)]);
	let out = generate("Mixed", Kind::Enum, values);
	assert_eq!(out.layout.strategy, Strategy::MultiRunSwitch);

	let decoder = out.decoder();
	for (value, name) in [(-5_i64, "Neg"), (0, "A"), (2, "C"), (10, "X"), (11, "Y"), (100, "Far")] {
		assert_eq!(decoder.name(value as u64), name);
	}
	assert_eq!(decoder.name(3), "Mixed(3)");
	assert_eq!(decoder.name(-4_i64 as u64), "Mixed(-4)");
	assert_eq!(decoder.name(12), "Mixed(12)");
}

#[test]
fn sparse_enum_uses_lookup() {
	let values: Vec<ConstantValue> = (0..12_u64).map(|step| ConstantValue::new(format!("P{step}"), step * step * 3, false)).collect();
	let out = generate("Sparse", Kind::Enum, values);
	assert_eq!(out.layout.strategy, Strategy::SparseMap);
	assert_eq!(out.descriptor.program, DecodeProgram::Lookup);

	let decoder = out.decoder();
	assert_eq!(decoder.name(0), "P0");
	assert_eq!(decoder.name(27), "P3");
	assert_eq!(decoder.name(28), "Sparse(28)");
}

fn day_flags(with_zero: bool) -> Vec<ConstantValue> {
	let mut values = Vec::new();
	if with_zero {
		values.push(ConstantValue::new("None", 0, true));
	}
	for (bit, name) in ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday", "Sunday"].iter().enumerate() {
		values.push(ConstantValue::new(*name, 1 << bit, true));
	}
	values
}

#[test]
fn flags_decompose_in_bit_order() {
	let out = generate("Day", Kind::Flag, day_flags(true));
	assert_eq!(out.layout.strategy, Strategy::MultiRunFlagDecompose);

	let decoder = out.decoder();
	assert_eq!(decoder.active_flags(0b101), ["Monday", "Wednesday"]);
	assert_eq!(decoder.render(0b1000001), "Monday+Sunday");
	assert_eq!(decoder.active_flags(0), ["None"]);
}

#[test]
fn flags_without_zero_constant_decode_zero_as_empty() {
	let out = generate("Day", Kind::Flag, day_flags(false));
	let decoder = out.decoder();
	assert!(decoder.active_flags(0).is_empty());
	assert_eq!(decoder.render(0), "");
}

#[test]
fn unknown_bits_collapse_into_one_fallback() {
	let out = generate("Day", Kind::Flag, day_flags(false));
	let decoder = out.decoder();
	assert_eq!(decoder.active_flags(0b1_1000_0010), ["Tuesday", "Day(384)"]);
	assert_eq!(decoder.active_flags(1 << 20), ["Day(1048576)"]);
}

#[test]
fn split_flag_runs_keep_global_bit_order() {
	let values = unsigned(&[("Read", 1), ("Write", 2), ("Exec", 16), ("Sticky", 32), ("Zero", 0)]);
	let out = generate("Mode", Kind::Flag, values);
	assert_eq!(out.layout.run_tables().len(), 2);

	let decoder = out.decoder();
	assert_eq!(decoder.active_flags(1 | 32 | 4), ["Read", "Sticky", "Mode(4)"]);
	assert_eq!(decoder.active_flags(0), ["Zero"]);
}

#[test]
fn signed_top_bit_sorts_last_in_decomposition() {
	let values = vec![
		ConstantValue::new("Low", 1, true),
		ConstantValue::new("Top", 1 << 63, true),
		ConstantValue::new("Mid", 1 << 8, true),
	];
	let out = generate("Wide", Kind::Flag, values);
	let decoder = out.decoder();
	assert_eq!(decoder.active_flags(1 | 1 << 63 | 1 << 8), ["Low", "Mid", "Top"]);
	assert_eq!(decoder.active_flags(2), ["Wide(2)"]);
}

#[test]
fn sparse_flags_decompose_through_map() {
	let values: Vec<ConstantValue> = (0..10_u32).map(|step| ConstantValue::new(format!("F{step}"), 1 << (step * 2), false)).collect();
	let out = generate("Sparse", Kind::Flag, values);
	assert_eq!(out.layout.strategy, Strategy::SparseMap);

	let decoder = out.decoder();
	assert_eq!(decoder.active_flags(1 | 1 << 18 | 2), ["F0", "F9", "Sparse(2)"]);
	assert!(decoder.active_flags(0).is_empty());
	assert_eq!(decoder.name(1 << 4), "F2");
}

#[test]
fn fallback_prints_unsigned_for_unsigned_types() {
	let out = generate("Bits", Kind::Flag, unsigned(&[("A", 1)]));
	assert_eq!(out.decoder().active_flags(1 << 63), ["Bits(9223372036854775808)"]);
}
