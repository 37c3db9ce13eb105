use serde::Serialize;

use crate::table::{Result, StringtabError};

/// Caller-supplied naming options shared by every processed type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GenOptions {
	/// Literal prefix stripped from declared names to form display names.
	pub trim_prefix: String,
	/// Prefer a constant's annotation text over prefix trimming when present.
	pub use_annotation_name: bool,
}

impl GenOptions {
	/// Apply one `key = value` option.
	pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
		match key {
			"trim_prefix" | "trimPrefix" => {
				self.trim_prefix = value.to_owned();
			}
			"use_annotation_name" | "line_comment" | "lineComment" => {
				self.use_annotation_name = parse_bool(value).ok_or_else(|| StringtabError::InvalidConfigurationValue {
					key: key.to_owned(),
					value: value.to_owned(),
				})?;
			}
			_ => return Err(StringtabError::InvalidConfiguration { key: key.to_owned() }),
		}
		Ok(())
	}

	/// Build options from `(key, value)` pairs applied in order.
	pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Result<Self> {
		let mut options = Self::default();
		options.extend_pairs(pairs)?;
		Ok(options)
	}

	/// Apply `(key, value)` pairs on top of the current options.
	pub fn extend_pairs<'a>(&mut self, pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Result<()> {
		for (key, value) in pairs {
			self.set(key, value)?;
		}
		Ok(())
	}

	/// Strip the configured prefix from `name` when it is a prefix.
	pub fn trim<'a>(&self, name: &'a str) -> &'a str {
		name.strip_prefix(self.trim_prefix.as_str()).unwrap_or(name)
	}
}

/// Split a `key=value` option argument.
pub fn split_option(arg: &str) -> Result<(&str, &str)> {
	match arg.split_once('=') {
		Some((key, value)) if !key.trim().is_empty() => Ok((key.trim(), value)),
		_ => Err(StringtabError::InvalidConfiguration { key: arg.to_owned() }),
	}
}

fn parse_bool(value: &str) -> Option<bool> {
	match value.trim() {
		"true" | "1" | "yes" | "on" => Some(true),
		"false" | "0" | "no" | "off" | "" => Some(false),
		_ => None,
	}
}
