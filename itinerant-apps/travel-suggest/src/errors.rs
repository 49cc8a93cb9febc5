//!  Itinerant Travel Suggest
//!
//!  Copyright (C) 2026  Mamy Ratsimbazafy
//!
//!  This program is free software: you can redistribute it and/or modify
//!  it under the terms of the GNU Affero General Public License as published by
//!  the Free Software Foundation, either version 3 of the License, or
//!  (at your option) any later version.
//!
//!  This program is distributed in the hope that it will be useful,
//!  but WITHOUT ANY WARRANTY; without even the implied warranty of
//!  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
//!  GNU Affero General Public License for more details.
//!
//!  You should have received a copy of the GNU Affero General Public License
//!  along with this program.  If not, see <http://www.gnu.org/licenses/>.

//! # Suggestion Errors
//!
//! Every failure the suggestion operations can report. All of them are raised
//! during validation, before any offer is generated.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SuggestionError {
    /// The input does not have the `YYYY-MM-DD` shape.
    #[error("{field} must be in ISO format (YYYY-MM-DD), got: {value}")]
    Format { field: String, value: String },

    /// The input has the right shape but is not a calendar date.
    #[error("Invalid {field}: {cause}")]
    Semantic { field: String, cause: String },

    /// A date that must come later does not.
    #[error("{message}")]
    Ordering { field: String, message: String },

    /// A required input was not provided at all.
    #[error("{field} is required")]
    MissingInput { field: String },
}

impl SuggestionError {
    /// Name of the input the error is about.
    pub fn field(&self) -> &str {
        match self {
            SuggestionError::Format { field, .. }
            | SuggestionError::Semantic { field, .. }
            | SuggestionError::Ordering { field, .. }
            | SuggestionError::MissingInput { field } => field,
        }
    }

    pub(crate) fn ordering(field: &str, message: impl Into<String>) -> Self {
        SuggestionError::Ordering {
            field: field.to_string(),
            message: message.into(),
        }
    }

    pub(crate) fn missing(field: &str) -> Self {
        SuggestionError::MissingInput {
            field: field.to_string(),
        }
    }
}
