use tracing::{debug, warn};

use crate::document::{
    context_names, current_context, section_entries, set_current_context, Document, Section,
};
use crate::interact::Interaction;
use crate::KubemergeError;

/// Lets the operator repoint `current-context` after a merge.
pub struct ActiveContextSelector<'a, I: Interaction> {
    interaction: &'a mut I,
}

impl<'a, I: Interaction> ActiveContextSelector<'a, I> {
    pub fn new(interaction: &'a mut I) -> Self {
        Self { interaction }
    }

    /// Offer to change `current-context` to one of the available context
    /// names, and return the resulting value.
    ///
    /// Takes no action when `contexts` is absent or empty, when the operator
    /// declines or cancels, or when no selection is made; the existing value
    /// is returned unchanged in all of those cases.
    ///
    /// # Errors
    ///
    /// Returns an error if an interactive prompt fails.
    pub fn select_and_apply(
        &mut self,
        document: &mut Document,
    ) -> Result<Option<String>, KubemergeError> {
        let existing = current_context(document);

        if section_entries(document, Section::Contexts).map_or(true, Vec::is_empty) {
            debug!("no contexts available in the merged kubeconfig to select from");
            return Ok(existing);
        }

        if !self.interaction.confirm("Would you like to change the current context?")? {
            return Ok(existing);
        }

        let names = context_names(document);
        if names.is_empty() {
            warn!("no valid contexts found");
            return Ok(existing);
        }

        match self.interaction.choose_one("Select a context:", &names)? {
            Some(selected) => {
                set_current_context(document, &selected);
                Ok(Some(selected))
            },
            None => {
                debug!("no context selected; current context remains unchanged");
                Ok(existing)
            },
        }
    }
}

/// Point `current-context` at `name` without any interaction.
///
/// # Errors
///
/// Returns [`KubemergeError::UnknownContext`] if `name` is not among the
/// document's context names.
pub fn apply_named_context(
    document: &mut Document,
    name: &str,
) -> Result<String, KubemergeError> {
    if context_names(document).iter().any(|candidate| candidate == name) {
        set_current_context(document, name);
        Ok(name.to_string())
    } else {
        Err(KubemergeError::UnknownContext(name.to_string()))
    }
}
