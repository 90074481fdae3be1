//! Host-independent homoglyph detection primitives.
//!
//! This crate provides the pure building blocks for detecting identifiers
//! and auxiliary text that mix ASCII Latin letters with visually identical
//! non-ASCII look-alikes (e.g. Cyrillic homoglyphs):
//! - Non-ASCII scanner over UTF-16 code units
//! - Closed homoglyph table and the strip/substitute name transforms
//! - Mixed-script token matcher for free text
//! - Diagnostic types and message formatting
//! - Location and span types
//! - Unified error type
//!
//! Nothing in this crate touches a program model or the filesystem; the
//! `glyphguard-engine` crate layers walkers and remediation on top.

pub mod diagnostic;
pub mod error;
pub mod homoglyph;
pub mod matcher;
pub mod scan;
pub mod text;
pub mod types;
