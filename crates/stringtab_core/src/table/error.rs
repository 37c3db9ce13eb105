use thiserror::Error;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, StringtabError>;

/// Errors produced while resolving constants and building name tables.
#[derive(Debug, Error)]
pub enum StringtabError {
	/// Filesystem or stream IO failure.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// Input document was not valid JSON or did not match the expected shape.
	#[error("json: {0}")]
	Json(#[from] serde_json::Error),
	/// No usable constants remained for a type after kind filtering.
	#[error("no values defined for type {type_name}")]
	EmptyInput {
		/// Declared type being processed.
		type_name: String,
	},
	/// A constant's value is not representable as a 64-bit integer pattern.
	#[error("can't handle non-integer constant {constant} of type {type_name} (value {found})")]
	UnsupportedConstantKind {
		/// Declared type being processed.
		type_name: String,
		/// Offending constant name.
		constant: String,
		/// Textual form of the rejected value.
		found: String,
	},
	/// Unrecognized configuration key.
	#[error("unknown configuration option: {key}")]
	InvalidConfiguration {
		/// Rejected option key.
		key: String,
	},
	/// Known configuration key with a value of the wrong shape.
	#[error("invalid value for configuration option {key}: {value}")]
	InvalidConfigurationValue {
		/// Option key.
		key: String,
		/// Rejected value text.
		value: String,
	},
	/// A constant was supplied with an empty name.
	#[error("constant of type {type_name} has an empty name")]
	BlankConstantName {
		/// Declared type being processed.
		type_name: String,
	},
	/// Constants of one type disagree on signedness.
	#[error("constant {constant} of type {type_name} disagrees with the type's signedness")]
	MixedSignedness {
		/// Declared type being processed.
		type_name: String,
		/// First constant whose signedness differs from the first declared one.
		constant: String,
	},
	/// Requested type is not declared in the input.
	#[error("type not found: {type_name}")]
	TypeNotFound {
		/// Requested type name.
		type_name: String,
	},
	/// Value argument could not be parsed as an integer literal.
	#[error("invalid integer literal: {value}")]
	InvalidValueLiteral {
		/// User-provided literal.
		value: String,
	},
}
