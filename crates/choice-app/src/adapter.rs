//! Selection adapter: maps between question options, positional selection
//! state and recorded responses.

use choice_core::prelude::*;
use choice_core::{ChoiceOption, MultipleChoiceQuestion, Response};

use crate::config::StaleOptionPolicy;
use crate::selection_state::SelectionState;
use crate::strategy::{strategy_for, SelectionStrategy};

/// Holds the working selection for one dialog.
///
/// The state is absent until [`init_selected_state`](Self::init_selected_state)
/// runs; the dialog opens only after that, so user toggles always find a
/// state to act on.
#[derive(Debug)]
pub struct SelectionAdapter {
    question: MultipleChoiceQuestion,
    prior: Option<Response>,
    strategy: Box<dyn SelectionStrategy>,
    stale_policy: StaleOptionPolicy,
    state: Option<SelectionState>,
}

impl SelectionAdapter {
    /// Create an adapter whose strategy follows the question's cardinality.
    pub fn new(
        question: MultipleChoiceQuestion,
        prior: Option<Response>,
        stale_policy: StaleOptionPolicy,
    ) -> Self {
        let strategy = strategy_for(question.cardinality());
        Self::with_strategy(question, prior, stale_policy, strategy)
    }

    pub fn with_strategy(
        question: MultipleChoiceQuestion,
        prior: Option<Response>,
        stale_policy: StaleOptionPolicy,
        strategy: Box<dyn SelectionStrategy>,
    ) -> Self {
        Self {
            question,
            prior,
            strategy,
            stale_policy,
            state: None,
        }
    }

    pub fn size(&self) -> usize {
        self.question.size()
    }

    pub fn labels(&self) -> Vec<&str> {
        self.question.labels()
    }

    pub fn option(&self, index: usize) -> Option<&ChoiceOption> {
        self.question.option(index)
    }

    pub fn question(&self) -> &MultipleChoiceQuestion {
        &self.question
    }

    /// The previously recorded answer, if any
    pub fn current_value(&self) -> Option<&Response> {
        self.prior.as_ref()
    }

    pub fn strategy(&self) -> &dyn SelectionStrategy {
        self.strategy.as_ref()
    }

    pub fn state(&self) -> Option<&SelectionState> {
        self.state.as_ref()
    }

    pub fn is_initialized(&self) -> bool {
        self.state.is_some()
    }

    /// Seed the selection from the prior answer, replacing any existing state.
    ///
    /// Prior options that the question does not contain are handled per the
    /// configured [`StaleOptionPolicy`].
    pub fn init_selected_state(&mut self) -> Result<()> {
        self.check_stale_options()?;

        let state = self.strategy.seed(&self.question, self.prior.as_ref());
        debug!(
            "Initialized selection: {} of {} options checked",
            state.selected_count(),
            state.len()
        );
        self.state = Some(state);
        Ok(())
    }

    fn check_stale_options(&self) -> Result<()> {
        let Some(prior) = &self.prior else {
            return Ok(());
        };

        for option in prior.selected() {
            if self.question.position_of(option).is_some() {
                continue;
            }
            match self.stale_policy {
                StaleOptionPolicy::Ignore => {}
                StaleOptionPolicy::Warn => warn!(
                    "Prior answer selects option '{}' which the question no longer offers; dropping it",
                    option.id()
                ),
                StaleOptionPolicy::Reject => {
                    return Err(Error::stale_option(option.id().as_str()));
                }
            }
        }

        Ok(())
    }

    /// Toggle the option at `index` according to the strategy.
    pub fn toggle(&mut self, index: usize) -> Result<()> {
        let state = self.state.as_mut().ok_or(Error::InvalidState)?;
        self.strategy.toggle(state, index);
        trace!("Toggled index {}: {:?}", index, state.as_slice());
        Ok(())
    }

    /// Whether `index` is currently checked. Reads as unchecked before
    /// initialization.
    pub fn is_selected(&self, index: usize) -> bool {
        self.state.as_ref().is_some_and(|s| s.is_selected(index))
    }

    pub fn selected_count(&self) -> usize {
        self.state.as_ref().map_or(0, SelectionState::selected_count)
    }

    /// The answer described by the current selection, options in question
    /// order.
    ///
    /// Multi-select always yields a response (possibly empty); single-select
    /// yields `None` when nothing is checked.
    pub fn selected_options(&self) -> Result<Option<Response>> {
        let state = self.state.as_ref().ok_or(Error::InvalidState)?;
        Ok(self.strategy.extract(&self.question, state))
    }
}
