//! Homoglyph analysis engine.
//!
//! This crate layers program analysis on top of `glyphguard-core`:
//! - Host interface traits for symbol enumeration and rename delegation
//! - An in-memory program model implementing that interface
//! - The symbol walker and file walker producing diagnostics
//! - The remediation engine offering strip/substitute rename fixes
//!
//! Parsing and name resolution are the host's job; this crate consumes a
//! resolved symbol and reference model and requests renames back through
//! the host, which is the sole mutator of the program.

pub mod analyze;
pub mod files;
pub mod host;
pub mod model;
pub mod remedy;
pub mod walker;
