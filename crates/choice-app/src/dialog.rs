//! Selection dialog state.
//!
//! Data model and key handling for the checklist modal. The rendering widget
//! lives in `choice-tui`.

use choice_core::prelude::*;
use choice_core::{ChoiceOption, MultipleChoiceQuestion, Response};

use crate::adapter::SelectionAdapter;
use crate::config::DialogSettings;
use crate::input_key::InputKey;

/// Everything needed to open a selection dialog.
#[derive(Debug, Clone)]
pub struct SelectDialogConfig {
    pub title: String,
    pub question: MultipleChoiceQuestion,
    pub prior: Option<Response>,
    pub settings: DialogSettings,
}

impl SelectDialogConfig {
    pub fn new(title: impl Into<String>, question: MultipleChoiceQuestion) -> Self {
        Self {
            title: title.into(),
            question,
            prior: None,
            settings: DialogSettings::default(),
        }
    }

    pub fn with_prior(mut self, prior: Option<Response>) -> Self {
        self.prior = prior;
        self
    }

    pub fn with_settings(mut self, settings: DialogSettings) -> Self {
        self.settings = settings;
        self
    }
}

/// Outcome of feeding one key to the dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogAction {
    /// Key ignored
    None,
    /// Cursor moved to a new row
    Moved(usize),
    /// Row `index` was toggled; `checked` is its new value
    Toggled { index: usize, checked: bool },
    /// User confirmed the selection
    Confirm,
    /// User dismissed the dialog
    Cancel,
}

/// Value delivered to the caller exactly once when the dialog closes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogResult {
    /// Confirmed; multi-select always carries a response, single-select
    /// carries `None` when nothing was chosen
    Confirmed(Option<Response>),
    Cancelled,
}

/// Live state of an open selection dialog.
#[derive(Debug)]
pub struct SelectionDialogState {
    title: String,
    adapter: SelectionAdapter,
    cursor: Option<usize>,
    settings: DialogSettings,
}

impl SelectionDialogState {
    /// Seed the selection from the prior answer and open the dialog.
    ///
    /// Fails only when the stale-option policy rejects the prior answer.
    pub fn open(config: SelectDialogConfig) -> Result<Self> {
        let SelectDialogConfig {
            title,
            question,
            prior,
            settings,
        } = config;

        let mut adapter = SelectionAdapter::new(question, prior, settings.stale_options);
        adapter.init_selected_state()?;

        let cursor = (adapter.size() > 0).then_some(0);
        info!(
            "Opened selection dialog '{}' ({} options, {:?})",
            title,
            adapter.size(),
            adapter.question().cardinality()
        );

        Ok(Self {
            title,
            adapter,
            cursor,
            settings,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn prompt(&self) -> Option<&str> {
        self.adapter.question().prompt()
    }

    pub fn size(&self) -> usize {
        self.adapter.size()
    }

    pub fn labels(&self) -> Vec<&str> {
        self.adapter.labels()
    }

    pub fn option(&self, index: usize) -> Option<&ChoiceOption> {
        self.adapter.option(index)
    }

    pub fn current_value(&self) -> Option<&Response> {
        self.adapter.current_value()
    }

    /// Row under the cursor; `None` for an empty question
    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn is_checked(&self, index: usize) -> bool {
        self.adapter.is_selected(index)
    }

    pub fn selected_count(&self) -> usize {
        self.adapter.selected_count()
    }

    pub fn settings(&self) -> &DialogSettings {
        &self.settings
    }

    pub fn adapter(&self) -> &SelectionAdapter {
        &self.adapter
    }

    /// Apply one key press.
    pub fn handle_key(&mut self, key: InputKey) -> DialogAction {
        if is_cancel_key(key) {
            return DialogAction::Cancel;
        }

        if let Some(index) = key.quick_index() {
            if index < self.size() {
                self.cursor = Some(index);
                return self.toggle(index);
            }
            return DialogAction::None;
        }

        match key {
            InputKey::Enter => DialogAction::Confirm,
            InputKey::Char(' ') | InputKey::Char('x') => match self.cursor {
                Some(index) => self.toggle(index),
                None => DialogAction::None,
            },
            InputKey::Up | InputKey::Char('k') => self.move_by(-1, self.settings.wrap_navigation),
            InputKey::Down | InputKey::Char('j') => {
                self.move_by(1, self.settings.wrap_navigation)
            }
            InputKey::PageUp => self.move_by(-(self.page_size() as isize), false),
            InputKey::PageDown => self.move_by(self.page_size() as isize, false),
            InputKey::Home | InputKey::Char('g') => self.move_to(0),
            InputKey::End | InputKey::Char('G') => self.move_to(self.size().saturating_sub(1)),
            _ => DialogAction::None,
        }
    }

    /// Turn a closing action into the value handed to the caller.
    ///
    /// Returns `Ok(None)` for actions that keep the dialog open.
    pub fn resolve(&self, action: DialogAction) -> Result<Option<DialogResult>> {
        match action {
            DialogAction::Confirm => {
                let response = self.adapter.selected_options()?;
                info!(
                    "Selection dialog '{}' confirmed with {} option(s)",
                    self.title,
                    response.as_ref().map_or(0, |r| r.selected().len())
                );
                Ok(Some(DialogResult::Confirmed(response)))
            }
            DialogAction::Cancel => {
                info!("Selection dialog '{}' cancelled", self.title);
                Ok(Some(DialogResult::Cancelled))
            }
            _ => Ok(None),
        }
    }

    fn toggle(&mut self, index: usize) -> DialogAction {
        if let Err(e) = self.adapter.toggle(index) {
            error!("Toggle of index {} failed: {}", index, e);
            return DialogAction::None;
        }
        let checked = self.adapter.is_selected(index);
        debug!("Option {} is now {}", index, if checked { "checked" } else { "unchecked" });
        DialogAction::Toggled { index, checked }
    }

    /// Page step, never larger than the list itself
    fn page_size(&self) -> usize {
        self.settings.page_size.clamp(1, self.size().max(1))
    }

    fn move_by(&mut self, delta: isize, wrap: bool) -> DialogAction {
        let Some(current) = self.cursor else {
            return DialogAction::None;
        };
        let len = self.size() as isize;
        let target = (current as isize).saturating_add(delta);

        let next = if wrap {
            target.rem_euclid(len)
        } else {
            target.clamp(0, len - 1)
        };

        self.move_to(next as usize)
    }

    fn move_to(&mut self, index: usize) -> DialogAction {
        match self.cursor {
            Some(current) if current != index && index < self.size() => {
                self.cursor = Some(index);
                DialogAction::Moved(index)
            }
            _ => DialogAction::None,
        }
    }
}

/// Check if a key press is a cancellation request
pub fn is_cancel_key(key: InputKey) -> bool {
    matches!(
        key,
        InputKey::Esc | InputKey::Char('q') | InputKey::Char('Q') | InputKey::CharCtrl('c')
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StaleOptionPolicy;
    use choice_core::{Cardinality, MultipleChoiceResponse};

    fn open(labels: &[&str], prior: &[&str]) -> SelectionDialogState {
        let question = MultipleChoiceQuestion::from_labels(labels).unwrap();
        let prior: Option<Response> = (!prior.is_empty()).then(|| {
            MultipleChoiceResponse::new(prior.iter().map(|l| ChoiceOption::labelled(l))).into()
        });
        SelectionDialogState::open(SelectDialogConfig::new("Pick", question).with_prior(prior))
            .unwrap()
    }

    fn confirmed_labels(state: &SelectionDialogState) -> Vec<String> {
        match state.resolve(DialogAction::Confirm).unwrap() {
            Some(DialogResult::Confirmed(Some(response))) => response
                .selected()
                .iter()
                .map(|o| o.label().to_string())
                .collect(),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_open_seeds_from_prior() {
        let state = open(&["A", "B", "C"], &["B"]);
        assert!(!state.is_checked(0));
        assert!(state.is_checked(1));
        assert!(!state.is_checked(2));
        assert_eq!(state.cursor(), Some(0));
    }

    #[test]
    fn test_red_green_blue_scenario() {
        let mut state = open(&["Red", "Green", "Blue"], &[]);
        assert_eq!(state.selected_count(), 0);

        state.handle_key(InputKey::Down);
        assert_eq!(
            state.handle_key(InputKey::Char(' ')),
            DialogAction::Toggled {
                index: 1,
                checked: true
            }
        );
        state.handle_key(InputKey::Down);
        state.handle_key(InputKey::Char(' '));

        assert_eq!(state.handle_key(InputKey::Enter), DialogAction::Confirm);
        assert_eq!(confirmed_labels(&state), vec!["Green", "Blue"]);
    }

    #[test]
    fn test_edit_prior_scenario() {
        let mut state = open(&["A", "B", "C"], &["B"]);

        state.handle_key(InputKey::Char('3'));
        state.handle_key(InputKey::Char('2'));

        assert_eq!(confirmed_labels(&state), vec!["C"]);
    }

    #[test]
    fn test_empty_question() {
        let mut state = open(&[], &[]);
        assert_eq!(state.cursor(), None);
        assert_eq!(state.handle_key(InputKey::Char(' ')), DialogAction::None);
        assert_eq!(state.handle_key(InputKey::Down), DialogAction::None);
        assert_eq!(state.handle_key(InputKey::Char('1')), DialogAction::None);
        assert!(confirmed_labels(&state).is_empty());
    }

    #[test]
    fn test_cancel_keys() {
        let mut state = open(&["A"], &[]);
        for key in [
            InputKey::Esc,
            InputKey::Char('q'),
            InputKey::Char('Q'),
            InputKey::CharCtrl('c'),
        ] {
            assert_eq!(state.handle_key(key), DialogAction::Cancel);
        }
        assert_eq!(
            state.resolve(DialogAction::Cancel).unwrap(),
            Some(DialogResult::Cancelled)
        );
    }

    #[test]
    fn test_non_closing_actions_resolve_to_none() {
        let state = open(&["A"], &[]);
        assert_eq!(state.resolve(DialogAction::None).unwrap(), None);
        assert_eq!(state.resolve(DialogAction::Moved(0)).unwrap(), None);
    }

    #[test]
    fn test_navigation_clamps_by_default() {
        let mut state = open(&["A", "B", "C"], &[]);
        assert_eq!(state.handle_key(InputKey::Up), DialogAction::None);
        assert_eq!(state.handle_key(InputKey::End), DialogAction::Moved(2));
        assert_eq!(state.handle_key(InputKey::Char('j')), DialogAction::None);
        assert_eq!(state.handle_key(InputKey::Char('k')), DialogAction::Moved(1));
        assert_eq!(state.handle_key(InputKey::Home), DialogAction::Moved(0));
    }

    #[test]
    fn test_navigation_wraps_when_enabled() {
        let question = MultipleChoiceQuestion::from_labels(&["A", "B", "C"]).unwrap();
        let settings = DialogSettings {
            wrap_navigation: true,
            ..DialogSettings::default()
        };
        let mut state = SelectionDialogState::open(
            SelectDialogConfig::new("Pick", question).with_settings(settings),
        )
        .unwrap();

        assert_eq!(state.handle_key(InputKey::Up), DialogAction::Moved(2));
        assert_eq!(state.handle_key(InputKey::Down), DialogAction::Moved(0));
    }

    #[test]
    fn test_page_navigation() {
        let labels: Vec<String> = (0..12).map(|i| format!("Item {}", i)).collect();
        let refs: Vec<&str> = labels.iter().map(String::as_str).collect();
        let mut state = open(&refs, &[]);

        assert_eq!(state.handle_key(InputKey::PageDown), DialogAction::Moved(5));
        assert_eq!(state.handle_key(InputKey::PageDown), DialogAction::Moved(10));
        assert_eq!(state.handle_key(InputKey::PageDown), DialogAction::Moved(11));
        assert_eq!(state.handle_key(InputKey::PageUp), DialogAction::Moved(6));
    }

    #[test]
    fn test_page_size_larger_than_list() {
        let question = MultipleChoiceQuestion::from_labels(&["A", "B", "C"]).unwrap();
        let settings = DialogSettings {
            page_size: usize::MAX,
            ..DialogSettings::default()
        };
        let mut state = SelectionDialogState::open(
            SelectDialogConfig::new("Pick", question).with_settings(settings),
        )
        .unwrap();
        state.handle_key(InputKey::Down);

        assert_eq!(state.handle_key(InputKey::PageDown), DialogAction::Moved(2));
        assert_eq!(state.handle_key(InputKey::PageUp), DialogAction::Moved(0));
        assert_eq!(state.handle_key(InputKey::PageUp), DialogAction::None);
    }

    #[test]
    fn test_quick_toggle_out_of_range() {
        let mut state = open(&["A", "B"], &[]);
        assert_eq!(state.handle_key(InputKey::Char('3')), DialogAction::None);
        assert_eq!(state.selected_count(), 0);
    }

    #[test]
    fn test_toggle_with_x() {
        let mut state = open(&["A", "B"], &["A"]);
        assert_eq!(
            state.handle_key(InputKey::Char('x')),
            DialogAction::Toggled {
                index: 0,
                checked: false
            }
        );
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let mut state = open(&["A"], &[]);
        assert_eq!(state.handle_key(InputKey::Char('z')), DialogAction::None);
        assert_eq!(state.selected_count(), 0);
    }

    #[test]
    fn test_open_rejects_stale_prior() {
        let question = MultipleChoiceQuestion::from_labels(&["A"]).unwrap();
        let prior = MultipleChoiceResponse::new([ChoiceOption::labelled("Old")]).into();
        let settings = DialogSettings {
            stale_options: StaleOptionPolicy::Reject,
            ..DialogSettings::default()
        };

        let result = SelectionDialogState::open(
            SelectDialogConfig::new("Pick", question)
                .with_prior(Some(prior))
                .with_settings(settings),
        );
        assert!(matches!(result, Err(Error::StaleOption { .. })));
    }

    #[test]
    fn test_single_select_dialog() {
        let question = MultipleChoiceQuestion::new(
            vec![ChoiceOption::labelled("Yes"), ChoiceOption::labelled("No")],
            Cardinality::Single,
        )
        .unwrap();
        let mut state =
            SelectionDialogState::open(SelectDialogConfig::new("Agree?", question)).unwrap();

        assert_eq!(
            state.resolve(DialogAction::Confirm).unwrap(),
            Some(DialogResult::Confirmed(None))
        );

        state.handle_key(InputKey::Char('1'));
        state.handle_key(InputKey::Char('2'));
        assert_eq!(state.selected_count(), 1);
        assert!(state.is_checked(1));
    }
}
