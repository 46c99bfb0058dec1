//! Multi-select and single-select behavior behind one interface.
//!
//! Both strategies share the same seeding and extraction shape: seed
//! positional flags from a prior [`Response`] by option identity, mutate them
//! through toggles, and read them back in question order. They differ in how
//! many flags may be set at once and in the response kind they produce.

use std::fmt;

use choice_core::{
    Cardinality, ChoiceOption, MultipleChoiceQuestion, MultipleChoiceResponse, Response,
    SingleChoiceResponse,
};
use tracing::debug;

use crate::selection_state::SelectionState;

/// Selection rules for one cardinality.
pub trait SelectionStrategy: fmt::Debug {
    fn cardinality(&self) -> Cardinality;

    /// Initial state: index `i` is checked iff `prior` reports `option(i)`
    /// as selected.
    fn seed(&self, question: &MultipleChoiceQuestion, prior: Option<&Response>) -> SelectionState {
        match prior {
            Some(prior) => SelectionState::from_fn(question.size(), |i| {
                question.option(i).is_some_and(|o| prior.is_selected(o))
            }),
            None => SelectionState::new(question.size()),
        }
    }

    /// Apply a user toggle at `index`.
    fn toggle(&self, state: &mut SelectionState, index: usize);

    /// Build the answer from the checked indices, in question order.
    fn extract(
        &self,
        question: &MultipleChoiceQuestion,
        state: &SelectionState,
    ) -> Option<Response>;
}

/// Pick the strategy matching a question's cardinality
pub fn strategy_for(cardinality: Cardinality) -> Box<dyn SelectionStrategy> {
    match cardinality {
        Cardinality::Multiple => Box::new(MultiSelect),
        Cardinality::Single => Box::new(SingleSelect),
    }
}

fn checked_options(
    question: &MultipleChoiceQuestion,
    state: &SelectionState,
) -> Vec<ChoiceOption> {
    state
        .selected_indices()
        .filter_map(|i| question.option(i).cloned())
        .collect()
}

/// Any number of options may be checked.
#[derive(Debug, Clone, Copy, Default)]
pub struct MultiSelect;

impl SelectionStrategy for MultiSelect {
    fn cardinality(&self) -> Cardinality {
        Cardinality::Multiple
    }

    fn toggle(&self, state: &mut SelectionState, index: usize) {
        state.toggle(index);
    }

    fn extract(
        &self,
        question: &MultipleChoiceQuestion,
        state: &SelectionState,
    ) -> Option<Response> {
        Some(MultipleChoiceResponse::new(checked_options(question, state)).into())
    }
}

/// At most one option is checked at a time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SingleSelect;

impl SelectionStrategy for SingleSelect {
    fn cardinality(&self) -> Cardinality {
        Cardinality::Single
    }

    fn seed(&self, question: &MultipleChoiceQuestion, prior: Option<&Response>) -> SelectionState {
        let mut state = MultiSelect.seed(question, prior);
        let first = state.selected_indices().next();
        if let Some(first) = first {
            if state.selected_count() > 1 {
                debug!(
                    "Prior answer selects {} options, keeping index {}",
                    state.selected_count(),
                    first
                );
            }
            state.clear_except(first);
        }
        state
    }

    fn toggle(&self, state: &mut SelectionState, index: usize) {
        if state.toggle(index) == Some(true) {
            state.clear_except(index);
        }
    }

    fn extract(
        &self,
        question: &MultipleChoiceQuestion,
        state: &SelectionState,
    ) -> Option<Response> {
        checked_options(question, state)
            .into_iter()
            .next()
            .map(|o| SingleChoiceResponse::new(o).into())
    }
}
