use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use crate::table::{GenOptions, Kind, RawConstant, RawValue, Result, StringtabError, TypeRequest, parse_int_literal};

/// Constant declarations handed over by an extraction front end.
#[derive(Debug, Clone, Deserialize)]
pub struct InputDocument {
	/// Option keys applied before any type is processed.
	#[serde(default)]
	pub options: BTreeMap<String, serde_json::Value>,
	/// Declared types in declaration order.
	pub types: Vec<TypeDecl>,
}

/// One declared type.
#[derive(Debug, Clone, Deserialize)]
pub struct TypeDecl {
	/// Type name.
	pub name: String,
	/// Classification kind (`"enum"` or `"flag"`).
	pub kind: Kind,
	/// Constants in declaration order.
	pub constants: Vec<ConstDecl>,
}

/// One declared constant.
#[derive(Debug, Clone, Deserialize)]
pub struct ConstDecl {
	/// Declared identifier.
	pub name: String,
	/// JSON number, or a string holding an integer literal.
	pub value: serde_json::Value,
	/// Whether the declared type is signed.
	#[serde(default = "default_signed")]
	pub signed: bool,
	/// Source literal text.
	#[serde(default)]
	pub literal: Option<String>,
	/// Trailing annotation text.
	#[serde(default)]
	pub annotation: Option<String>,
}

fn default_signed() -> bool {
	true
}

impl InputDocument {
	/// Parse a document from JSON bytes.
	pub fn from_slice(bytes: &[u8]) -> Result<Self> {
		Ok(serde_json::from_slice(bytes)?)
	}

	/// Read and parse a document from disk.
	pub fn open(path: impl AsRef<Path>) -> Result<Self> {
		let bytes = std::fs::read(path)?;
		Self::from_slice(&bytes)
	}

	/// Options declared in the document, validated.
	pub fn gen_options(&self) -> Result<GenOptions> {
		let mut options = GenOptions::default();
		for (key, value) in &self.options {
			let text = match value {
				serde_json::Value::String(text) => text.clone(),
				serde_json::Value::Bool(flag) => flag.to_string(),
				serde_json::Value::Null => String::new(),
				other => other.to_string(),
			};
			options.set(key, &text)?;
		}
		Ok(options)
	}

	/// Declared type by name.
	pub fn find(&self, type_name: &str) -> Option<&TypeDecl> {
		self.types.iter().find(|item| item.name == type_name)
	}

	/// Requests for every declared type, in declaration order.
	pub fn requests(&self) -> Vec<TypeRequest> {
		self.types.iter().map(TypeDecl::request).collect()
	}

	/// Requests for the named types, in the given order.
	pub fn requests_for(&self, type_names: &[String]) -> Result<Vec<TypeRequest>> {
		type_names
			.iter()
			.map(|name| {
				self.find(name)
					.map(TypeDecl::request)
					.ok_or_else(|| StringtabError::TypeNotFound { type_name: name.clone() })
			})
			.collect()
	}
}

impl TypeDecl {
	/// Convert into a pipeline request.
	pub fn request(&self) -> TypeRequest {
		TypeRequest {
			type_name: self.name.clone(),
			kind: self.kind,
			constants: self.constants.iter().map(ConstDecl::raw).collect(),
		}
	}
}

impl ConstDecl {
	/// Convert into an unresolved constant.
	pub fn raw(&self) -> RawConstant {
		RawConstant {
			name: self.name.clone(),
			value: raw_value(&self.value),
			signed: self.signed,
			literal: self.literal.clone(),
			annotation: self.annotation.clone(),
		}
	}
}

fn raw_value(value: &serde_json::Value) -> RawValue {
	match value {
		serde_json::Value::Number(number) => number
			.as_i64()
			.map(i128::from)
			.or_else(|| number.as_u64().map(i128::from))
			.map(RawValue::Int)
			.unwrap_or_else(|| RawValue::Other(number.to_string())),
		serde_json::Value::String(text) => parse_int_literal(text).map(RawValue::Int).unwrap_or_else(|| RawValue::Other(text.clone())),
		other => RawValue::Other(other.to_string()),
	}
}
