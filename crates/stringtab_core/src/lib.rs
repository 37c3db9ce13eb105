//! Public library API for building compact name tables over integer constant sets.

/// Constant normalization, run detection, layout selection, and decode descriptors.
pub mod table;
