//! # wordex-core
//!
//! Lookup tables, modifier codes, diagnostics and the word resolver for wordex.

pub mod config;
pub mod diagnostics;
pub mod error;
pub mod lookup;
pub mod modifier;
pub mod resolver;

pub use resolver::{build, Resolver};
