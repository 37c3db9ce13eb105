/// Value decoding command.
pub mod decode;
/// Layout generation command.
pub mod generate;
/// Shared argument and output helpers.
pub(crate) mod util;
