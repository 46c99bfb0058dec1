//! # choice-core - Core Domain Types
//!
//! Foundation crate for choice-dialog. Provides the question/option/response
//! model, error handling, logging setup and file loading.
//!
//! This crate has **zero internal dependencies** and no UI dependencies.
//!
//! ## Public API
//!
//! ### Domain Types
//! - [`ChoiceOption`] / [`OptionId`] - A selectable choice and its stable identity
//! - [`MultipleChoiceQuestion`] / [`Cardinality`] - Ordered options plus selection mode
//! - [`Response`] - Recorded answer ([`MultipleChoiceResponse`] or [`SingleChoiceResponse`])
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ### Files (`source`)
//! - [`load_question()`] - Read a question from TOML or JSON
//! - [`load_prior()`] - Read a prior answer for a question
//!
//! ## Prelude
//!
//! ```rust
//! use choice_core::prelude::*;
//! ```

pub mod error;
pub mod logging;
pub mod option;
pub mod prelude;
pub mod question;
pub mod response;
pub mod source;

pub use error::{Error, Result, ResultExt};
pub use option::{ChoiceOption, OptionId};
pub use question::{Cardinality, MultipleChoiceQuestion};
pub use response::{MultipleChoiceResponse, Response, SingleChoiceResponse};
pub use source::{load_prior, load_question};
