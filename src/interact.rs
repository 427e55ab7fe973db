use std::collections::VecDeque;

use dialoguer::{theme::ColorfulTheme, Confirm, Select};

use crate::KubemergeError;

/// Operator interaction capability.
///
/// The merger and the context selector only ever talk to this trait, so
/// automated tests can script answers instead of driving a real terminal.
/// Cancellation (e.g. Esc) is never an error: it answers `false` for
/// confirmations and `None` for selections.
pub trait Interaction {
    /// Ask a yes/no question.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying prompt fails (terminal I/O).
    fn confirm(&mut self, prompt: &str) -> Result<bool, KubemergeError>;

    /// Ask the operator to pick one of `options`, in the given order.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying prompt fails (terminal I/O).
    fn choose_one(
        &mut self,
        prompt: &str,
        options: &[String],
    ) -> Result<Option<String>, KubemergeError>;
}

/// Interactive prompts on the controlling terminal, via dialoguer.
pub struct TerminalPrompter {
    theme: ColorfulTheme,
}

impl TerminalPrompter {
    #[must_use]
    pub fn new() -> Self {
        Self { theme: ColorfulTheme::default() }
    }
}

impl Default for TerminalPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Interaction for TerminalPrompter {
    fn confirm(&mut self, prompt: &str) -> Result<bool, KubemergeError> {
        let answer = Confirm::with_theme(&self.theme)
            .with_prompt(prompt)
            .default(false)
            .interact_opt()?;
        Ok(answer.unwrap_or(false))
    }

    fn choose_one(
        &mut self,
        prompt: &str,
        options: &[String],
    ) -> Result<Option<String>, KubemergeError> {
        if options.is_empty() {
            return Ok(None);
        }

        let selection = Select::with_theme(&self.theme)
            .with_prompt(prompt)
            .items(options)
            .default(0)
            .interact_opt()?;

        Ok(selection.map(|index| options[index].clone()))
    }
}

/// Deterministic interaction with pre-scripted answers.
///
/// Exhausted scripts behave like cancellation: confirmations answer `false`
/// and selections answer `None`.
#[derive(Debug, Default)]
pub struct ScriptedInteraction {
    confirms: VecDeque<bool>,
    choices: VecDeque<Option<String>>,
    confirms_seen: Vec<String>,
    choices_seen: Vec<String>,
}

impl ScriptedInteraction {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_confirms(mut self, answers: impl IntoIterator<Item = bool>) -> Self {
        self.confirms.extend(answers);
        self
    }

    #[must_use]
    pub fn with_choices(
        mut self,
        answers: impl IntoIterator<Item = Option<String>>,
    ) -> Self {
        self.choices.extend(answers);
        self
    }

    /// Prompts that were asked as confirmations, in order.
    #[must_use]
    pub fn confirms_seen(&self) -> &[String] {
        &self.confirms_seen
    }

    /// Prompts that were asked as selections, in order.
    #[must_use]
    pub fn choices_seen(&self) -> &[String] {
        &self.choices_seen
    }
}

impl Interaction for ScriptedInteraction {
    fn confirm(&mut self, prompt: &str) -> Result<bool, KubemergeError> {
        self.confirms_seen.push(prompt.to_string());
        Ok(self.confirms.pop_front().unwrap_or(false))
    }

    fn choose_one(
        &mut self,
        prompt: &str,
        options: &[String],
    ) -> Result<Option<String>, KubemergeError> {
        self.choices_seen.push(prompt.to_string());
        let answer = self.choices.pop_front().flatten();
        // A scripted answer must be one of the offered options.
        Ok(answer.filter(|name| options.contains(name)))
    }
}
