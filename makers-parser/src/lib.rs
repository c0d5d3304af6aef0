//! # makers-parser
//!
//! Extracts the documentation that authors leave next to Makefile targets.
//!
//! A Makefile is read as a flat list of lines. Whenever a line declares a target
//! (`name: prerequisites` at column 0), the `#` comment lines directly below it
//! become that target's documentation:
//!
//! ```text
//! build: deps
//! # Builds the project
//! # from sources.
//! ```
//!
//! Nothing else about Makefile syntax is understood. Variables, includes,
//! conditionals and pattern rules are all ignored.
//!
//! Layout
//!
//!     ├── target.rs       # Target and Makefile records
//!     ├── extraction.rs   # The two-state line scanner
//!     └── loader.rs       # Reading a Makefile from disk or memory
//!
//! The crate is shell agnostic: it never prints, and reports failures through
//! [`LoaderError`].

pub mod extraction;
pub mod loader;
pub mod target;

pub use extraction::{extract, extract_str, Scanner};
pub use loader::{LoaderError, MakefileLoader};
pub use target::{Makefile, Target};
