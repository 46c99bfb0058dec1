//! Multiple-choice question model

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::option::ChoiceOption;

/// How many options an answer may hold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cardinality {
    /// Any number of options, no upper bound enforced
    #[default]
    Multiple,
    /// At most one option
    Single,
}

/// An ordered, immutable sequence of options.
///
/// Option order is significant: the dialog lists options in this order and
/// selection state is indexed positionally against it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultipleChoiceQuestion {
    options: Vec<ChoiceOption>,
    cardinality: Cardinality,
    prompt: Option<String>,
}

impl MultipleChoiceQuestion {
    /// Create a question, rejecting options that share an id.
    pub fn new(options: Vec<ChoiceOption>, cardinality: Cardinality) -> Result<Self> {
        let mut seen = HashSet::with_capacity(options.len());
        for option in &options {
            if !seen.insert(option.id()) {
                return Err(Error::duplicate_option(option.id().as_str()));
            }
        }

        Ok(Self {
            options,
            cardinality,
            prompt: None,
        })
    }

    /// Multi-select question from plain labels (ids equal labels)
    pub fn from_labels(labels: &[&str]) -> Result<Self> {
        Self::new(
            labels.iter().map(|l| ChoiceOption::labelled(l)).collect(),
            Cardinality::Multiple,
        )
    }

    /// Set the prompt shown above the options.
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = Some(prompt.into());
        self
    }

    pub fn size(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    pub fn option(&self, index: usize) -> Option<&ChoiceOption> {
        self.options.get(index)
    }

    pub fn options(&self) -> &[ChoiceOption] {
        &self.options
    }

    pub fn labels(&self) -> Vec<&str> {
        self.options.iter().map(ChoiceOption::label).collect()
    }

    /// Position of an option by identity
    pub fn position_of(&self, option: &ChoiceOption) -> Option<usize> {
        self.options.iter().position(|o| o == option)
    }

    pub fn cardinality(&self) -> Cardinality {
        self.cardinality
    }

    pub fn prompt(&self) -> Option<&str> {
        self.prompt.as_deref()
    }
}
