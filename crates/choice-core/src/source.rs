//! Loading questions and prior responses from TOML or JSON files
//!
//! Question file:
//! ```toml
//! prompt = "Pick your favourite colours"
//! cardinality = "multiple"
//!
//! [[options]]
//! id = "red"
//! label = "Red"
//! ```
//!
//! Prior response file: `selected = ["red"]`

use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::{Error, Result};
use crate::option::{ChoiceOption, OptionId};
use crate::question::{Cardinality, MultipleChoiceQuestion};
use crate::response::{MultipleChoiceResponse, Response, SingleChoiceResponse};

#[derive(Debug, Deserialize)]
struct QuestionDocument {
    #[serde(default)]
    prompt: Option<String>,
    #[serde(default)]
    cardinality: Cardinality,
    #[serde(default)]
    options: Vec<ChoiceOption>,
}

#[derive(Debug, Deserialize)]
struct PriorDocument {
    #[serde(default)]
    selected: Vec<OptionId>,
}

/// Load a question from a `.toml` or `.json` file.
pub fn load_question(path: &Path) -> Result<MultipleChoiceQuestion> {
    let doc: QuestionDocument = read_document(path)?;
    let question = MultipleChoiceQuestion::new(doc.options, doc.cardinality)
        .map_err(|e| Error::question_file(path, e.to_string()))?;

    tracing::debug!(
        "Loaded question with {} options from {:?}",
        question.size(),
        path
    );

    Ok(match doc.prompt {
        Some(prompt) => question.with_prompt(prompt),
        None => question,
    })
}

/// Load a prior response for `question` from a `.toml` or `.json` file.
///
/// Ids are resolved against the question to recover labels; ids the question
/// does not know are kept as bare options so the selection layer can apply
/// its stale-option policy. A single-choice question with no ids yields
/// `None`. For a single-choice question only known ids count towards the
/// one-option limit; when stale ids are present the answer is carried as a
/// multiple-choice record so none of them is lost before the policy runs.
pub fn load_prior(path: &Path, question: &MultipleChoiceQuestion) -> Result<Option<Response>> {
    let doc: PriorDocument = read_document(path)?;

    let mut known = 0;
    let options: Vec<ChoiceOption> = doc
        .selected
        .into_iter()
        .map(|id| match question.options().iter().find(|o| *o.id() == id) {
            Some(option) => {
                known += 1;
                option.clone()
            }
            None => ChoiceOption::new(id, ""),
        })
        .collect();

    let response = match question.cardinality() {
        Cardinality::Multiple => Some(MultipleChoiceResponse::new(options).into()),
        Cardinality::Single if known > 1 => {
            return Err(Error::question_file(
                path,
                "single-choice answer lists more than one option",
            ));
        }
        Cardinality::Single if options.len() > 1 => {
            Some(MultipleChoiceResponse::new(options).into())
        }
        Cardinality::Single => options
            .into_iter()
            .next()
            .map(|o| SingleChoiceResponse::new(o).into()),
    };

    Ok(response)
}

fn read_document<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = std::fs::read_to_string(path)?;

    match path.extension().and_then(|e| e.to_str()) {
        Some("json") => Ok(serde_json::from_str(&content)?),
        Some("toml") => Ok(toml::from_str(&content)?),
        other => Err(Error::question_file(
            path,
            format!("unsupported extension {:?}, expected .toml or .json", other),
        )),
    }
}
