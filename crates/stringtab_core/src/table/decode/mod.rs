use crate::table::{DecodeProgram, Descriptor, EnumCase, Kind, Layout, cmp_bits};

/// Evaluates a [`Descriptor`] against its [`Layout`] the way generated code would at runtime.
#[derive(Debug, Clone, Copy)]
pub struct Decoder<'a> {
	layout: &'a Layout,
	descriptor: &'a Descriptor,
}

impl<'a> Decoder<'a> {
	/// Pair a descriptor with the layout it was built from.
	pub fn new(layout: &'a Layout, descriptor: &'a Descriptor) -> Self {
		Self { layout, descriptor }
	}

	/// Enum name for `value`, or `Type(n)` when undeclared. Flag sets render all active names.
	pub fn name(&self, value: u64) -> String {
		match &self.descriptor.program {
			DecodeProgram::Cases { cases } => self.match_cases(cases, value).unwrap_or_else(|| self.descriptor.fallback(value)),
			DecodeProgram::Lookup => self
				.layout
				.sparse()
				.and_then(|table| table.lookup(value))
				.map(str::to_owned)
				.unwrap_or_else(|| self.descriptor.fallback(value)),
			DecodeProgram::Flags { .. } => self.active_flags(value).join("+"),
		}
	}

	/// Flag names set in `value` in ascending bit order, then one `Type(n)` term for unknown bits.
	pub fn active_flags(&self, value: u64) -> Vec<String> {
		let DecodeProgram::Flags { zero, bits } = &self.descriptor.program else {
			return vec![self.name(value)];
		};

		if value == 0 {
			return zero.and_then(|name| self.layout.name(name)).map(|name| vec![name.to_owned()]).unwrap_or_default();
		}

		let mut rest = value;
		let mut out = Vec::with_capacity(value.count_ones() as usize);
		for bit in bits {
			if rest & bit.mask == 0 {
				continue;
			}
			if let Some(name) = self.layout.name(bit.name) {
				out.push(name.to_owned());
				rest &= !bit.mask;
			}
		}
		if rest != 0 {
			out.push(self.descriptor.fallback(rest));
		}
		out
	}

	/// Display string: enum name, or flag names joined with `+`.
	pub fn render(&self, value: u64) -> String {
		match self.descriptor.kind {
			Kind::Enum => self.name(value),
			Kind::Flag => self.active_flags(value).join("+"),
		}
	}

	fn match_cases(&self, cases: &[EnumCase], value: u64) -> Option<String> {
		let signed = self.descriptor.signed;
		for case in cases {
			match *case {
				EnumCase::Exact { value: expected, name } => {
					if value == expected {
						return self.layout.name(name).map(str::to_owned);
					}
				}
				EnumCase::Range {
					table,
					first,
					last,
					rebase,
					check_lower,
				} => {
					if check_lower && cmp_bits(value, first, signed).is_lt() {
						continue;
					}
					if cmp_bits(value, last, signed).is_gt() {
						continue;
					}
					let position = if rebase { value.wrapping_sub(first) } else { value };
					let run = self.layout.run_tables().get(table)?;
					return run.name_at(usize::try_from(position).ok()?).map(str::to_owned);
				}
			}
		}
		None
	}
}

#[cfg(test)]
mod tests;
