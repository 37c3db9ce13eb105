mod config;
mod decode;
mod descriptor;
mod error;
mod input;
mod layout;
mod normalize;
mod pipeline;
mod runs;
mod strategy;
mod value;

/// Naming options and option-argument parsing.
pub use config::{GenOptions, split_option};
/// Runtime evaluator for decode descriptors.
pub use decode::Decoder;
/// Abstract decode routines and consistency guards.
pub use descriptor::{BitTest, ConstantCheck, DecodeProgram, Descriptor, EnumCase};
/// Error and result aliases.
pub use error::{Result, StringtabError};
/// JSON input boundary.
pub use input::{ConstDecl, InputDocument, TypeDecl};
/// Name-table layouts.
pub use layout::{IndexWidth, Layout, NameRef, RunTable, SparseEntry, SparseTable, Tables};
/// Kind filtering, ordering, and alias removal.
pub use normalize::{check_signedness, normalize, retain_for_kind};
/// Per-type and batch entry points.
pub use pipeline::{TypeContext, TypeOutput, TypeRequest, generate_all, generate_all_parallel, generate_type, generate_values};
/// Run detection.
pub use runs::{Run, is_contiguous, split_into_runs};
/// Layout strategy selection.
pub use strategy::{MAX_RUN_TABLES, Strategy, select_strategy};
/// Constant model and integer helpers.
pub use value::{BLANK_NAME, ConstantValue, Kind, RawConstant, RawValue, cmp_bits, format_decimal, is_pow2, parse_int_literal};
