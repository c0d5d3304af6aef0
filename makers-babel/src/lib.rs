//! Markdown rendering for extracted Makefile targets
//!
//!     Turns the [`Target`](makers_parser::Target) records produced by
//!     `makers-parser` into markdown documents and writes them to disk.
//!
//! Architecture
//!
//!     - header.rs: the "generated, do not edit" banner shared by every document
//!     - render.rs: target sections, the index document and per-target documents
//!     - publish.rs: writing a rendered set into an output directory
//!
//!     Rendering is pure: it takes the targets, the layout options and a timestamp
//!     and returns text. Only publish.rs touches the filesystem.
//!
//! Links
//!
//!     Plain markdown links cannot target in-page anchors reliably, so sections are
//!     anchored with `<a name=...>` and referenced with `<a href=...>`. In the merged
//!     document links are fragments (`#build`); in per-target documents they point at
//!     sibling files (`build.md`).
//!
pub mod error;
pub mod header;
pub mod publish;
pub mod render;

pub use error::{PublishError, RenderError};
pub use header::Header;
pub use publish::{prepare_output_dir, publish};
pub use render::{index_collision, render, LinkStyle, RenderOptions, RenderedDocument, RenderedSet};
