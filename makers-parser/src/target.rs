//! Target records produced by the scanner

/// One documented build rule.
///
/// `name` is taken verbatim from the declaration line and is assumed to be safe
/// for use in file names and HTML anchors. No sanitising happens anywhere.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Target {
    pub name: String,
    /// Prerequisite names in declaration order, duplicates included.
    pub prerequisites: Vec<String>,
    /// Comment text, one newline-terminated line per comment line.
    pub documentation: String,
}

impl Target {
    pub fn new(name: impl Into<String>) -> Self {
        Target {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_prerequisites<I, S>(mut self, prerequisites: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.prerequisites = prerequisites.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_documentation(mut self, documentation: impl Into<String>) -> Self {
        self.documentation = documentation.into();
        self
    }

    /// Append one comment line to the documentation
    pub fn push_doc_line(&mut self, line: &str) {
        self.documentation.push_str(line);
        self.documentation.push('\n');
    }

    /// Targets without documentation are never emitted
    pub fn is_documented(&self) -> bool {
        !self.documentation.is_empty()
    }

    pub fn has_prerequisites(&self) -> bool {
        !self.prerequisites.is_empty()
    }

    /// File name of this target's standalone document, e.g. `build.md`
    pub fn filename(&self, extension: &str) -> String {
        format!("{}.{}", self.name, extension)
    }
}

/// The documented targets of one Makefile, together with where they came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Makefile {
    /// Label of the input, usually the path exactly as the user gave it.
    pub source: String,
    pub targets: Vec<Target>,
}

impl Makefile {
    pub fn new(source: impl Into<String>, targets: Vec<Target>) -> Self {
        Makefile {
            source: source.into(),
            targets,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn target_names(&self) -> Vec<&str> {
        self.targets.iter().map(|t| t.name.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_doc_line_terminates_each_line() {
        let mut target = Target::new("build");
        target.push_doc_line(" first");
        target.push_doc_line("");
        assert_eq!(target.documentation, " first\n\n");
        assert!(target.is_documented());
    }

    #[test]
    fn test_new_target_is_undocumented() {
        let target = Target::new("clean");
        assert!(!target.is_documented());
        assert!(!target.has_prerequisites());
    }

    #[test]
    fn test_filename_uses_extension() {
        assert_eq!(Target::new("install-deps").filename("md"), "install-deps.md");
    }

    #[test]
    fn test_makefile_target_names_keep_order() {
        let makefile = Makefile::new(
            "Makefile",
            vec![Target::new("b"), Target::new("a"), Target::new("b")],
        );
        assert_eq!(makefile.target_names(), vec!["b", "a", "b"]);
        assert_eq!(makefile.len(), 3);
    }
}
