use serde_yaml::{Mapping, Sequence, Value};

/// A kubeconfig document: the root YAML mapping.
pub type Document = Mapping;

/// The three named entry lists a kubeconfig carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Clusters,
    Contexts,
    Users,
}

impl Section {
    /// All sections, in the order they are merged.
    pub const ALL: [Self; 3] = [Self::Clusters, Self::Contexts, Self::Users];

    /// The top-level key of this section in the document.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Clusters => "clusters",
            Self::Contexts => "contexts",
            Self::Users => "users",
        }
    }

    /// Singular form used in user-facing messages.
    #[must_use]
    pub const fn singular(self) -> &'static str {
        match self {
            Self::Clusters => "cluster",
            Self::Contexts => "context",
            Self::Users => "user",
        }
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// Which of the two documents a merge error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentRole {
    /// The kubeconfig being merged in.
    Source,
    /// The main kubeconfig being merged into.
    Target,
}

impl std::fmt::Display for DocumentRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Source => "input",
            Self::Target => "main",
        })
    }
}

/// The key that stores the active context name.
pub const CURRENT_CONTEXT: &str = "current-context";

/// Extract the `name` of an entry, if it is a mapping with a string `name`.
///
/// Entries that are not mappings or lack a `name` are not mergeable and are
/// skipped by the merger.
#[must_use]
pub fn entry_name(entry: &Value) -> Option<&str> {
    entry.as_mapping()?.get("name")?.as_str()
}

/// Borrow a section's sequence from a document, if present and a sequence.
#[must_use]
pub fn section_entries(document: &Document, section: Section) -> Option<&Sequence> {
    document.get(section.key()).and_then(Value::as_sequence)
}

/// The document's `current-context`, if set to a non-empty string.
#[must_use]
pub fn current_context(document: &Document) -> Option<String> {
    document
        .get(CURRENT_CONTEXT)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(ToOwned::to_owned)
}

/// Set the document's `current-context`.
pub fn set_current_context(document: &mut Document, name: &str) {
    document.insert(
        Value::String(CURRENT_CONTEXT.to_string()),
        Value::String(name.to_string()),
    );
}

/// Ordered list of context names, excluding entries without a `name`.
#[must_use]
pub fn context_names(document: &Document) -> Vec<String> {
    section_entries(document, Section::Contexts)
        .map(|entries| {
            entries.iter().filter_map(entry_name).map(ToOwned::to_owned).collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_yaml::Value;

    fn doc(yaml: &str) -> Document {
        serde_yaml::from_str(yaml).expect("test YAML should parse")
    }

    #[test]
    fn test_section_keys_and_singulars() {
        assert_eq!(Section::Clusters.key(), "clusters");
        assert_eq!(Section::Contexts.singular(), "context");
        assert_eq!(Section::Users.singular(), "user");
    }

    #[test]
    fn test_entry_name_extracts_string_name() {
        let entry: Value = serde_yaml::from_str("{name: dev, cluster: {server: x}}")
            .expect("test YAML should parse");
        assert_eq!(entry_name(&entry), Some("dev"));
    }

    #[test]
    fn test_entry_name_rejects_non_mapping_and_nameless() {
        assert_eq!(entry_name(&Value::String("dev".to_string())), None);
        let nameless: Value =
            serde_yaml::from_str("{cluster: {server: x}}").expect("test YAML should parse");
        assert_eq!(entry_name(&nameless), None);
    }

    #[test]
    fn test_current_context_ignores_empty_string() {
        let document = doc("current-context: ''");
        assert_eq!(current_context(&document), None);

        let document = doc("current-context: prod");
        assert_eq!(current_context(&document), Some("prod".to_string()));
    }

    #[test]
    fn test_set_current_context_overwrites() {
        let mut document = doc("current-context: dev");
        set_current_context(&mut document, "prod");
        assert_eq!(current_context(&document), Some("prod".to_string()));
    }

    #[test]
    fn test_context_names_skips_nameless_entries() {
        let document = doc(
            "contexts:\n  - name: a\n  - cluster: orphan\n  - name: b\n",
        );
        assert_eq!(context_names(&document), vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn test_context_names_empty_without_section() {
        let document = doc("clusters: []");
        assert!(context_names(&document).is_empty());
    }

    #[test]
    fn test_mapping_equality_is_key_order_insensitive() {
        let a: Value = serde_yaml::from_str("{name: x, cluster: {server: s, ca: c}}")
            .expect("test YAML should parse");
        let b: Value = serde_yaml::from_str("{cluster: {ca: c, server: s}, name: x}")
            .expect("test YAML should parse");
        assert_eq!(a, b);
    }

    #[test]
    fn test_sequence_equality_is_order_sensitive() {
        let a: Value = serde_yaml::from_str("[1, 2]").expect("test YAML should parse");
        let b: Value = serde_yaml::from_str("[2, 1]").expect("test YAML should parse");
        assert_ne!(a, b);
    }
}
