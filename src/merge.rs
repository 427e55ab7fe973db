#![allow(clippy::self_named_module_files)]

use serde_yaml::{Sequence, Value};
use tracing::debug;

use crate::document::{entry_name, Document, DocumentRole, Section};
use crate::interact::Interaction;
use crate::KubemergeError;

pub mod policy;

pub use policy::CollisionPolicy;

/// One merge decision, identified by section and entry name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MergeEvent {
    Added { section: Section, name: String },
    SkippedIdentical { section: Section, name: String },
    Overwritten { section: Section, name: String },
    KeptExisting { section: Section, name: String },
}

impl std::fmt::Display for MergeEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Added { section, name } => {
                write!(f, "added {} '{}'", section.singular(), name)
            },
            Self::SkippedIdentical { section, name } => {
                write!(f, "skipped identical {} '{}'", section.singular(), name)
            },
            Self::Overwritten { section, name } => {
                write!(f, "overwritten {} '{}'", section.singular(), name)
            },
            Self::KeptExisting { section, name } => {
                write!(f, "kept existing {} '{}'", section.singular(), name)
            },
        }
    }
}

/// Merges the named entry lists of a source kubeconfig into a target one.
///
/// Entries are atomic: a collision is resolved by keeping or replacing the
/// whole entry, never by merging fields. Decisions are recorded as
/// [`MergeEvent`]s for the caller to report.
pub struct SectionMerger<'a, I: Interaction> {
    policy: CollisionPolicy,
    interaction: &'a mut I,
    events: Vec<MergeEvent>,
}

impl<'a, I: Interaction> SectionMerger<'a, I> {
    pub fn new(policy: CollisionPolicy, interaction: &'a mut I) -> Self {
        Self { policy, interaction, events: Vec::new() }
    }

    /// Decisions recorded so far, in merge order.
    #[must_use]
    pub fn events(&self) -> &[MergeEvent] {
        &self.events
    }

    /// Consume the merger and return its recorded decisions.
    #[must_use]
    pub fn into_events(self) -> Vec<MergeEvent> {
        self.events
    }

    /// Merge the `clusters`, `contexts` and `users` sections of `source`
    /// into `target`, in that order.
    ///
    /// All three sections are validated up front, so a malformed section
    /// leaves the target entirely unmodified.
    ///
    /// # Errors
    ///
    /// Returns [`KubemergeError::MalformedSection`] if a present section is
    /// not a sequence, or a prompt error if interactive resolution fails.
    pub fn merge_all(
        &mut self,
        target: &mut Document,
        source: &Document,
    ) -> Result<(), KubemergeError> {
        for section in Section::ALL {
            validate_section(source, section, DocumentRole::Source)?;
            validate_section(target, section, DocumentRole::Target)?;
        }

        for section in Section::ALL {
            self.merge_section(target, source, section)?;
        }

        Ok(())
    }

    /// Merge one named section of `source` into `target`.
    ///
    /// A missing source section is a no-op; an absent or null target section
    /// is initialized to an empty sequence. Source entries that are not
    /// mappings or lack a `name` are skipped silently.
    ///
    /// # Errors
    ///
    /// Returns [`KubemergeError::MalformedSection`] if either document holds
    /// the section as something other than a sequence, or a prompt error if
    /// interactive resolution fails.
    pub fn merge_section(
        &mut self,
        target: &mut Document,
        source: &Document,
        section: Section,
    ) -> Result<(), KubemergeError> {
        let key = Value::String(section.key().to_string());

        let Some(source_value) = source.get(&key) else {
            return Ok(());
        };
        let source_entries = source_value.as_sequence().ok_or(
            KubemergeError::MalformedSection { section, role: DocumentRole::Source },
        )?;

        if matches!(target.get(&key), None | Some(Value::Null)) {
            target.insert(key.clone(), Value::Sequence(Sequence::new()));
        }
        let existing = target.get_mut(&key).and_then(Value::as_sequence_mut).ok_or(
            KubemergeError::MalformedSection { section, role: DocumentRole::Target },
        )?;

        for entry in source_entries {
            let Some(name) = entry_name(entry) else {
                debug!("skipping {} entry without a name", section.singular());
                continue;
            };
            let name = name.to_string();

            match existing.iter().position(|e| entry_name(e) == Some(name.as_str())) {
                None => {
                    existing.push(entry.clone());
                    self.events.push(MergeEvent::Added { section, name });
                },
                Some(position) if existing[position] == *entry => {
                    self.events.push(MergeEvent::SkippedIdentical { section, name });
                },
                Some(position) => {
                    if self.resolve(section, &name, &existing[position], entry)? {
                        existing[position] = entry.clone();
                        self.events.push(MergeEvent::Overwritten { section, name });
                    } else {
                        self.events.push(MergeEvent::KeptExisting { section, name });
                    }
                },
            }
        }

        Ok(())
    }

    /// Decide whether a colliding entry replaces the existing one.
    fn resolve(
        &mut self,
        section: Section,
        name: &str,
        existing: &Value,
        incoming: &Value,
    ) -> Result<bool, KubemergeError> {
        debug!(
            "collision on {} '{}': existing {:?}, incoming {:?}",
            section.singular(),
            name,
            existing,
            incoming
        );

        match &mut self.policy {
            CollisionPolicy::KeepExisting => Ok(false),
            CollisionPolicy::Overwrite => Ok(true),
            CollisionPolicy::Scripted(answers) => Ok(answers.pop_front().unwrap_or(false)),
            CollisionPolicy::Prompt => {
                let prompt = format!(
                    "{} '{}' already exists with different settings. Overwrite it?",
                    section.singular(),
                    name
                );
                self.interaction.confirm(&prompt)
            },
        }
    }
}

/// Reject a present, non-sequence section before any mutation happens.
fn validate_section(
    document: &Document,
    section: Section,
    role: DocumentRole,
) -> Result<(), KubemergeError> {
    match document.get(section.key()) {
        None | Some(Value::Null | Value::Sequence(_)) => Ok(()),
        Some(_) => Err(KubemergeError::MalformedSection { section, role }),
    }
}
