//! Class-name composition for utility-first styling.
//!
//! The crate flattens conditional class inputs into tokens, removes literal
//! duplicates, and resolves conflicting utilities so the last token of each
//! utility group wins under the same variants. Group classification is
//! data-driven: the built-in table is compiled from `utility_groups.toml`,
//! and [`MergeConfig`] extends it at runtime.
//!
//! Composition is total. Unrecognised tokens are never dropped except as
//! literal duplicates, and every input shape without a class contribution
//! is a no-op.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod config;
mod groups;
mod input;
mod merge;
mod token;

pub use config::{ConfigError, GroupSpec, MergeConfig, RuleSpec};
pub use groups::{GroupTable, Validator};
pub use input::{class_list, ClassInput};
pub use merge::{compose, default_merger, ClassMerger};
pub use token::{parse_class, ParsedClass};
