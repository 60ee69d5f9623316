//! Reflection prompt viewer
//!
//! Stateless apart from a reveal toggle over the optional response text.

use crate::catalog::PromptPuzzle;

/// View state for one date's prompt
#[derive(Debug, Clone, Default)]
pub struct PromptView {
    prompt: Option<PromptPuzzle>,
    show_response: bool,
}

impl PromptView {
    #[must_use]
    pub fn new(prompt: Option<PromptPuzzle>) -> Self {
        // An all-empty prompt object renders the same as no prompt
        let prompt = prompt.filter(|p| !p.is_empty());
        Self {
            prompt,
            show_response: false,
        }
    }

    #[must_use]
    pub const fn prompt(&self) -> Option<&PromptPuzzle> {
        self.prompt.as_ref()
    }

    #[must_use]
    pub const fn is_available(&self) -> bool {
        self.prompt.is_some()
    }

    #[must_use]
    pub const fn show_response(&self) -> bool {
        self.show_response
    }

    /// Toggle the additional-thoughts reveal
    pub const fn toggle_response(&mut self) {
        self.show_response = !self.show_response;
    }
}
