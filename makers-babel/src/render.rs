//! Target rendering
//!
//!     Every document starts with the [`Header`]. After that:
//!
//!     - The index document (`README.md` by default) holds a numbered table of
//!       contents. When merging, every target section follows it.
//!     - A split document (`<name>.md`) holds one target section.
//!
//!     A target section looks like:
//!
//!     ```text
//!     ### <a name="clean">`clean`</a>
//!     Pre-Requisites: <a href="#build">`build`</a>
//!      Removes artifacts
//!
//!     ---
//!     ```
//!
//!     The `Pre-Requisites:` line only appears when the target has prerequisites.

use crate::error::RenderError;
use crate::header::Header;
use chrono::{DateTime, FixedOffset};
use makers_parser::Target;
use tracing::{debug, warn};

/// How a reference to another target is spelled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkStyle {
    /// `#name`, for targets living in the same document
    Fragment,
    /// `name.<extension>`, for targets living in their own file
    File { extension: String },
}

impl LinkStyle {
    pub fn href(&self, name: &str) -> String {
        match self {
            LinkStyle::Fragment => format!("#{}", name),
            LinkStyle::File { extension } => format!("{}.{}", name, extension),
        }
    }
}

/// Layout knobs for one rendering pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    pub emit_merged: bool,
    pub emit_split: bool,
    /// Extension of split documents, without the dot.
    pub extension: String,
    /// File name of the index / merged document. When splitting, a target
    /// whose document name equals it (`README` with the defaults) is written
    /// after the index and replaces it on disk.
    pub index_name: String,
    pub generated_at: DateTime<FixedOffset>,
}

impl RenderOptions {
    pub fn new(generated_at: DateTime<FixedOffset>) -> Self {
        RenderOptions {
            emit_merged: true,
            emit_split: false,
            extension: "md".to_string(),
            index_name: "README.md".to_string(),
            generated_at,
        }
    }

    pub fn merged(mut self, emit: bool) -> Self {
        self.emit_merged = emit;
        self
    }

    pub fn split(mut self, emit: bool) -> Self {
        self.emit_split = emit;
        self
    }

    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    /// See [`RenderOptions::index_name`] for collisions with split documents.
    pub fn with_index_name(mut self, name: impl Into<String>) -> Self {
        self.index_name = name.into();
        self
    }

    fn file_links(&self) -> LinkStyle {
        LinkStyle::File {
            extension: self.extension.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedDocument {
    /// File name relative to the output directory
    pub name: String,
    pub contents: String,
}

/// Rendered documents in the order they should be written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderedSet {
    documents: Vec<RenderedDocument>,
}

impl RenderedSet {
    fn push(&mut self, name: String, contents: String) {
        self.documents.push(RenderedDocument { name, contents });
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.documents
            .iter()
            .find(|doc| doc.name == name)
            .map(|doc| doc.contents.as_str())
    }

    pub fn names(&self) -> Vec<&str> {
        self.documents.iter().map(|doc| doc.name.as_str()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RenderedDocument> {
        self.documents.iter()
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

impl IntoIterator for RenderedSet {
    type Item = RenderedDocument;
    type IntoIter = std::vec::IntoIter<RenderedDocument>;

    fn into_iter(self) -> Self::IntoIter {
        self.documents.into_iter()
    }
}

/// Render `targets` into the index document and, when splitting, one
/// document per target.
///
/// Fails when there is nothing to document. The caller is responsible for
/// requesting at least one of merged or split output.
pub fn render(
    source: &str,
    targets: &[Target],
    options: &RenderOptions,
) -> Result<RenderedSet, RenderError> {
    if targets.is_empty() {
        return Err(RenderError::NoDocumentedTargets(source.to_string()));
    }

    let header = Header::new(source, options.generated_at).render();
    let mut set = RenderedSet::default();

    // Split-only runs still get an index, linking to the per-target files.
    let index_links = if options.emit_merged {
        LinkStyle::Fragment
    } else {
        options.file_links()
    };
    let mut index = header.clone();
    index.push_str(&render_contents(targets, &index_links));
    if options.emit_merged {
        for target in targets {
            index.push_str(&render_section(target, &LinkStyle::Fragment));
        }
    }
    set.push(options.index_name.clone(), index);

    if let Some(target) = index_collision(targets, options) {
        warn!(
            target_name = %target.name,
            index = %options.index_name,
            "split document overwrites the index document"
        );
    }

    if options.emit_split {
        let links = options.file_links();
        for target in targets {
            let mut doc = header.clone();
            doc.push_str(&render_section(target, &links));
            set.push(target.filename(&options.extension), doc);
        }
    }

    debug!(
        documents = set.len(),
        targets = targets.len(),
        merged = options.emit_merged,
        split = options.emit_split,
        "rendered"
    );
    Ok(set)
}

/// First target whose split document would share the index document's name.
pub fn index_collision<'a>(targets: &'a [Target], options: &RenderOptions) -> Option<&'a Target> {
    if !options.emit_split {
        return None;
    }
    targets
        .iter()
        .find(|target| target.filename(&options.extension) == options.index_name)
}

/// The numbered table of contents, closed by a horizontal rule.
pub fn render_contents(targets: &[Target], links: &LinkStyle) -> String {
    let mut out = String::from("\n# Targets\n");
    for target in targets {
        out.push_str(&format!("1. {}\n", link(&target.name, links)));
    }
    out.push_str("\n\n___\n\n\n");
    out
}

/// One target: anchored heading, prerequisite links, documentation, rule.
pub fn render_section(target: &Target, links: &LinkStyle) -> String {
    let mut out = format!(
        "### <a name=\"{name}\">`{name}`</a>\n",
        name = target.name
    );
    if target.has_prerequisites() {
        out.push_str("Pre-Requisites: ");
        for prerequisite in &target.prerequisites {
            out.push_str(&link(prerequisite, links));
            out.push('\n');
        }
    }
    out.push_str(&target.documentation);
    out.push_str("\n---\n");
    out
}

fn link(name: &str, links: &LinkStyle) -> String {
    format!("<a href=\"{}\">`{}`</a>", links.href(name), name)
}
