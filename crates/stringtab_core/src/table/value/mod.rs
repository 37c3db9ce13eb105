use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::table::{GenOptions, Result, StringtabError};

/// Discard identifier. Constants declared with it are never named.
pub const BLANK_NAME: &str = "_";

/// Classification kind of a declared constant type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
	/// Sequential enumeration: each runtime value maps to at most one name.
	Enum,
	/// Bit-flag set: runtime values are unions of single-bit constants.
	Flag,
}

impl Kind {
	/// Stable lowercase label.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Enum => "enum",
			Self::Flag => "flag",
		}
	}
}

/// One declared constant after display-name resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConstantValue {
	/// Declared identifier.
	pub original_name: String,
	/// Name printed at runtime.
	pub display_name: String,
	/// 64-bit bit pattern of the constant.
	pub raw_value: u64,
	/// Whether `raw_value` orders and prints as `i64`.
	pub signed: bool,
	/// Textual value of the declaring expression.
	pub literal_text: String,
}

impl ConstantValue {
	/// Build a constant whose display name is its declared name.
	pub fn new(original_name: impl Into<String>, raw_value: u64, signed: bool) -> Self {
		let original_name = original_name.into();
		Self {
			display_name: original_name.clone(),
			original_name,
			raw_value,
			signed,
			literal_text: format_decimal(raw_value, signed),
		}
	}

	/// Replace the runtime display name.
	pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
		self.display_name = display_name.into();
		self
	}

	/// Replace the literal text used by consistency checks.
	pub fn with_literal_text(mut self, literal_text: impl Into<String>) -> Self {
		self.literal_text = literal_text.into();
		self
	}

	/// Whether this constant can be tested as a single bit (or is the zero sentinel).
	pub fn is_single_bit_or_zero(&self) -> bool {
		is_pow2(self.raw_value)
	}
}

/// Whether `x` is zero or an exact power of two.
pub fn is_pow2(x: u64) -> bool {
	x & x.wrapping_sub(1) == 0
}

/// Compare two bit patterns as `i64` when `signed`, else as `u64`.
pub fn cmp_bits(left: u64, right: u64, signed: bool) -> Ordering {
	if signed {
		(left as i64).cmp(&(right as i64))
	} else {
		left.cmp(&right)
	}
}

/// Render a bit pattern as decimal under the given signedness.
pub fn format_decimal(value: u64, signed: bool) -> String {
	if signed { (value as i64).to_string() } else { value.to_string() }
}

/// Parse a decimal, `-`-prefixed, or `0x`-prefixed integer literal.
pub fn parse_int_literal(text: &str) -> Option<i128> {
	let text = text.trim();
	let (negative, digits) = match text.strip_prefix('-') {
		Some(rest) => (true, rest),
		None => (false, text.strip_prefix('+').unwrap_or(text)),
	};
	let magnitude = if let Some(hex) = digits.strip_prefix("0x").or_else(|| digits.strip_prefix("0X")) {
		i128::from_str_radix(&hex.replace('_', ""), 16).ok()?
	} else {
		digits.replace('_', "").parse::<i128>().ok()?
	};
	Some(if negative { -magnitude } else { magnitude })
}

/// Constant value as handed over by the extraction side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawValue {
	/// Integer constant, wide enough for both `i64` and `u64` declarations.
	Int(i128),
	/// Anything else (floats, strings, complex numbers), kept as text.
	Other(String),
}

impl RawValue {
	/// Two's-complement 64-bit pattern, or `None` when unrepresentable.
	pub fn to_bits(&self) -> Option<u64> {
		match *self {
			Self::Int(value) if (i64::MIN as i128..=u64::MAX as i128).contains(&value) => {
				Some(if value < 0 { value as i64 as u64 } else { value as u64 })
			}
			Self::Int(_) | Self::Other(_) => None,
		}
	}

	fn describe(&self) -> String {
		match self {
			Self::Int(value) => value.to_string(),
			Self::Other(text) => text.clone(),
		}
	}
}

/// Unresolved constant declaration for one type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawConstant {
	/// Declared identifier.
	pub name: String,
	/// Declared value.
	pub value: RawValue,
	/// Whether the declared type is signed.
	pub signed: bool,
	/// Source text of the value, when known.
	pub literal: Option<String>,
	/// Trailing annotation text (for example a line comment), when present.
	pub annotation: Option<String>,
}

impl RawConstant {
	/// Integer constant without literal text or annotation.
	pub fn int(name: impl Into<String>, value: i128, signed: bool) -> Self {
		Self {
			name: name.into(),
			value: RawValue::Int(value),
			signed,
			literal: None,
			annotation: None,
		}
	}

	/// Attach annotation text.
	pub fn with_annotation(mut self, annotation: impl Into<String>) -> Self {
		self.annotation = Some(annotation.into());
		self
	}

	/// Attach source literal text.
	pub fn with_literal(mut self, literal: impl Into<String>) -> Self {
		self.literal = Some(literal.into());
		self
	}

	/// Resolve into a [`ConstantValue`]; discard-named constants yield `None`.
	pub fn resolve(&self, type_name: &str, options: &GenOptions) -> Result<Option<ConstantValue>> {
		if self.name == BLANK_NAME {
			return Ok(None);
		}
		if self.name.is_empty() {
			return Err(StringtabError::BlankConstantName {
				type_name: type_name.to_owned(),
			});
		}

		let raw_value = self.value.to_bits().ok_or_else(|| StringtabError::UnsupportedConstantKind {
			type_name: type_name.to_owned(),
			constant: self.name.clone(),
			found: self.value.describe(),
		})?;

		let display_name = match self.annotation.as_deref() {
			Some(annotation) if options.use_annotation_name => annotation.trim().to_owned(),
			_ => options.trim(&self.name).to_owned(),
		};

		let mut value = ConstantValue::new(self.name.clone(), raw_value, self.signed).with_display_name(display_name);
		if let Some(literal) = &self.literal {
			value.literal_text = literal.clone();
		}
		Ok(Some(value))
	}
}
