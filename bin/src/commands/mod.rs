//! CLI command implementations.

pub(crate) mod indicators;
pub(crate) mod info;
pub(crate) mod parse;
pub(crate) mod query;
