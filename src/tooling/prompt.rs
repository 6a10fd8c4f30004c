//! Interactive input for the `rate` command.

use crate::error::ApiError;
use crate::session::{CompletionView, PairView, SessionEvent};
use crate::types::Choice;

/// What the rater asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptAction {
    Event(SessionEvent),
    /// Write the session's records as CSV next to its document
    Export,
    Quit,
}

/// Source of rater input and sink for rendered screens.
pub trait Prompter {
    fn show(&mut self, screen: &str);
    fn pair_action(&mut self, view: &PairView) -> Result<PromptAction, ApiError>;
    fn completion_action(&mut self, view: &CompletionView) -> Result<PromptAction, ApiError>;
}

/// Terminal prompter backed by `dialoguer`.
#[derive(Debug, Default)]
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    fn select(prompt: &str, options: &[(&str, PromptAction)]) -> Result<PromptAction, ApiError> {
        use dialoguer::Select;

        let labels: Vec<&str> = options.iter().map(|(label, _)| *label).collect();
        let index = Select::new()
            .with_prompt(prompt)
            .items(&labels[..])
            .default(0)
            .interact()
            .map_err(|e| ApiError::PromptError(format!("Failed to get user input: {}", e)))?;
        Ok(options[index].1)
    }
}

impl Prompter for DialoguerPrompter {
    fn show(&mut self, screen: &str) {
        println!("{}", screen);
    }

    fn pair_action(&mut self, view: &PairView) -> Result<PromptAction, ApiError> {
        let mut options = vec![
            ("Prefer A", PromptAction::Event(SessionEvent::Choose(Choice::A))),
            ("Prefer B", PromptAction::Event(SessionEvent::Choose(Choice::B))),
        ];
        if view.can_go_back {
            options.push(("← Previous", PromptAction::Event(SessionEvent::Previous)));
        }
        options.push(("Next →", PromptAction::Event(SessionEvent::Next)));
        options.push(("Quit", PromptAction::Quit));
        Self::select("Which video seems more physically reasonable?", &options)
    }

    fn completion_action(&mut self, view: &CompletionView) -> Result<PromptAction, ApiError> {
        let mut options = Vec::new();
        if !view.records.is_empty() {
            options.push(("Export results as CSV", PromptAction::Export));
        }
        options.push(("New round", PromptAction::Event(SessionEvent::NewRound)));
        options.push(("Quit", PromptAction::Quit));
        Self::select("What next?", &options)
    }
}
