//! Recorded answers to a question

use serde::{Deserialize, Serialize};

use crate::option::ChoiceOption;

/// Answer holding any number of options, keyed by identity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultipleChoiceResponse {
    selected: Vec<ChoiceOption>,
}

impl MultipleChoiceResponse {
    /// Build a response from selected options. Repeated options collapse to
    /// their first occurrence.
    pub fn new(options: impl IntoIterator<Item = ChoiceOption>) -> Self {
        let mut selected: Vec<ChoiceOption> = Vec::new();
        for option in options {
            if !selected.contains(&option) {
                selected.push(option);
            }
        }
        Self { selected }
    }

    pub fn is_selected(&self, option: &ChoiceOption) -> bool {
        self.selected.contains(option)
    }

    pub fn selected(&self) -> &[ChoiceOption] {
        &self.selected
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }
}

/// Answer holding exactly one option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SingleChoiceResponse {
    selected: ChoiceOption,
}

impl SingleChoiceResponse {
    pub fn new(option: ChoiceOption) -> Self {
        Self { selected: option }
    }

    pub fn is_selected(&self, option: &ChoiceOption) -> bool {
        &self.selected == option
    }

    pub fn option(&self) -> &ChoiceOption {
        &self.selected
    }
}

/// A recorded answer for a question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Response {
    Multiple(MultipleChoiceResponse),
    Single(SingleChoiceResponse),
}

impl Response {
    /// Membership query by option identity
    pub fn is_selected(&self, option: &ChoiceOption) -> bool {
        match self {
            Response::Multiple(r) => r.is_selected(option),
            Response::Single(r) => r.is_selected(option),
        }
    }

    pub fn selected(&self) -> &[ChoiceOption] {
        match self {
            Response::Multiple(r) => r.selected(),
            Response::Single(r) => std::slice::from_ref(&r.selected),
        }
    }
}

impl From<MultipleChoiceResponse> for Response {
    fn from(response: MultipleChoiceResponse) -> Self {
        Response::Multiple(response)
    }
}

impl From<SingleChoiceResponse> for Response {
    fn from(response: SingleChoiceResponse) -> Self {
        Response::Single(response)
    }
}
