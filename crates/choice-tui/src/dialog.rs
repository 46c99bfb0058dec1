//! Showing a selection dialog on a terminal and reporting the result

use std::io::Stdout;

use choice_app::{DialogResult, SelectDialogConfig, SelectionDialogState, Settings};
use choice_core::prelude::*;
use choice_core::{MultipleChoiceQuestion, Response};
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::widgets::ListState;
use ratatui::Terminal;

use crate::event::{CrosstermEvents, EventSource};
use crate::widgets::SelectionDialog;

/// The UI environment a dialog is shown in: where it draws, where its keys
/// come from, and the settings it honours.
pub struct DialogHost<B: Backend, E: EventSource> {
    terminal: Terminal<B>,
    events: E,
    settings: Settings,
}

impl<B: Backend, E: EventSource> DialogHost<B, E> {
    pub fn new(terminal: Terminal<B>, events: E, settings: Settings) -> Self {
        Self {
            terminal,
            events,
            settings,
        }
    }

    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn events(&self) -> &E {
        &self.events
    }
}

impl DialogHost<CrosstermBackend<Stdout>, CrosstermEvents> {
    /// Take over the real terminal (raw mode, alternate screen).
    ///
    /// Call [`restore`](Self::restore) before printing anything else.
    pub fn init(settings: Settings) -> Self {
        Self::new(ratatui::init(), CrosstermEvents::default(), settings)
    }

    /// Give the terminal back to the shell.
    pub fn restore(self) {
        drop(self);
        ratatui::restore();
    }
}

/// Show a checklist dialog for `question` and report the outcome.
///
/// The selection is seeded from `prior` (left untouched). `on_result` is
/// invoked exactly once when the user confirms or cancels; it is not
/// invoked when this function returns an error.
pub fn show_select_dialog<B, E>(
    host: &mut DialogHost<B, E>,
    title: &str,
    question: &MultipleChoiceQuestion,
    prior: Option<&Response>,
    on_result: impl FnOnce(DialogResult),
) -> Result<()>
where
    B: Backend,
    E: EventSource,
{
    let config = SelectDialogConfig::new(title, question.clone())
        .with_prior(prior.cloned())
        .with_settings(host.settings.dialog.clone());

    let mut state = SelectionDialogState::open(config)?;
    let result = run_dialog(host, &mut state)?;
    on_result(result);
    Ok(())
}

/// Draw `state` and feed it keys until the user confirms or cancels.
pub fn run_dialog<B, E>(
    host: &mut DialogHost<B, E>,
    state: &mut SelectionDialogState,
) -> Result<DialogResult>
where
    B: Backend,
    E: EventSource,
{
    let mut list_state = ListState::default();

    loop {
        host.terminal
            .draw(|frame| {
                frame.render_stateful_widget(
                    SelectionDialog::new(state),
                    frame.area(),
                    &mut list_state,
                )
            })
            .map_err(|e| Error::terminal(e.to_string()))?;

        let Some(key) = host.events.next_key()? else {
            continue;
        };

        let action = state.handle_key(key);
        trace!("Key {:?} -> {:?}", key, action);

        if let Some(result) = state.resolve(action)? {
            return Ok(result);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::KeyScript;
    use choice_app::InputKey;
    use ratatui::backend::TestBackend;

    fn host(keys: Vec<InputKey>) -> DialogHost<TestBackend, KeyScript> {
        let terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        DialogHost::new(terminal, KeyScript::new(keys), Settings::default())
    }

    #[test]
    fn test_callback_invoked_once_on_confirm() {
        let question = MultipleChoiceQuestion::from_labels(&["A", "B"]).unwrap();
        let mut host = host(vec![InputKey::Char(' '), InputKey::Enter]);

        let mut calls = Vec::new();
        show_select_dialog(&mut host, "Pick", &question, None, |r| calls.push(r)).unwrap();

        assert_eq!(calls.len(), 1);
        match &calls[0] {
            DialogResult::Confirmed(Some(response)) => {
                assert_eq!(response.selected().len(), 1);
                assert_eq!(response.selected()[0].label(), "A");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_callback_receives_cancel() {
        let question = MultipleChoiceQuestion::from_labels(&["A"]).unwrap();
        let mut host = host(vec![InputKey::Char(' '), InputKey::Esc]);

        let mut result = None;
        show_select_dialog(&mut host, "Pick", &question, None, |r| result = Some(r)).unwrap();

        assert_eq!(result, Some(DialogResult::Cancelled));
    }

    #[test]
    fn test_callback_not_invoked_on_error() {
        let question = MultipleChoiceQuestion::from_labels(&["A"]).unwrap();
        let mut host = host(vec![InputKey::Down]);

        let mut called = false;
        let res = show_select_dialog(&mut host, "Pick", &question, None, |_| called = true);

        assert!(res.is_err());
        assert!(!called);
    }

    #[test]
    fn test_dialog_is_drawn_before_first_key() {
        let question = MultipleChoiceQuestion::from_labels(&["Red"]).unwrap();
        let mut host = host(vec![InputKey::Enter]);

        show_select_dialog(&mut host, "Colours", &question, None, |_| {}).unwrap();

        let content: String = host
            .terminal()
            .backend()
            .buffer()
            .content
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(content.contains("Colours"));
        assert!(content.contains("[ ] Red"));
    }
}
