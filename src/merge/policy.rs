use std::collections::VecDeque;

/// How the merger resolves two entries sharing a `name` but differing in
/// content. The decision is always over the whole entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CollisionPolicy {
    /// Leave the existing entry untouched.
    KeepExisting,
    /// Replace the existing entry with the incoming one, in place.
    Overwrite,
    /// Ask the operator per collision.
    Prompt,
    /// Answer per collision from a fixed script; exhausting the script
    /// behaves like declining.
    Scripted(VecDeque<bool>),
}

impl CollisionPolicy {
    /// A scripted policy answering the given decisions in order.
    #[must_use]
    pub fn scripted(answers: impl IntoIterator<Item = bool>) -> Self {
        Self::Scripted(answers.into_iter().collect())
    }
}

impl Default for CollisionPolicy {
    fn default() -> Self {
        Self::Prompt
    }
}
