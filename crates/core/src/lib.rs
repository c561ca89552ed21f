//! Core library for verinfo
//!
//! This crate implements the **Functional Core** of the verinfo application,
//! following the Functional Core - Imperative Shell architectural pattern.
//!
//! # Architecture Overview
//!
//! - **`verinfo_core`** (this crate): Pure transformation functions with zero I/O
//! - **`verinfo`**: Reading input, rendering output and error reporting (the Imperative Shell)
//!
//! All functions in this crate are pure: the same input always produces the
//! same output, nothing is read from or written to the outside world, and
//! everything can be tested with inline fixture strings.
//!
//! # Module Organization
//!
//! - [`version`]: Tokenizing free-form version strings into a [`VersionRecord`]
//! - [`tag`]: Source-control tag helpers and version comparison
//! - [`properties`]: Rendering a parsed version as build-tool properties
//!
//! # Example Usage
//!
//! ```rust
//! use verinfo_core::version::parse;
//!
//! let version = parse("5.7.1-SNAPSHOT");
//!
//! assert_eq!(version.major(), 5);
//! assert_eq!(version.minor(), 7);
//! assert_eq!(version.patch(), 1);
//! assert_eq!(version.build_number(), 0);
//! assert_eq!(version.qualifier(), Some("SNAPSHOT"));
//! ```
//!
//! Parsing never fails. Input without a numeric prefix comes back with the
//! whole string as its qualifier:
//!
//! ```rust
//! let version = verinfo_core::version::parse("release-candidate");
//!
//! assert_eq!(version.major(), 0);
//! assert_eq!(version.qualifier(), Some("release-candidate"));
//! ```

pub mod properties;
pub mod tag;
pub mod version;

pub use version::{parse, VersionRecord};
