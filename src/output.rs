//! JSON report printed after the dialog closes

use choice_app::DialogResult;
use choice_core::ChoiceOption;
use serde::Serialize;

/// What the user decided, as written to stdout
#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Report<'a> {
    Confirmed { selected: &'a [ChoiceOption] },
    Cancelled,
}

impl<'a> Report<'a> {
    pub fn from_result(result: &'a DialogResult) -> Self {
        match result {
            DialogResult::Confirmed(Some(response)) => Report::Confirmed {
                selected: response.selected(),
            },
            DialogResult::Confirmed(None) => Report::Confirmed { selected: &[] },
            DialogResult::Cancelled => Report::Cancelled,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
