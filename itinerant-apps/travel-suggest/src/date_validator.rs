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

//! # Date Validator
//!
//! Side-effect free parsing of `YYYY-MM-DD` inputs.
//! Shape errors and calendar errors are reported separately so callers can
//! tell "wrong format" apart from "no such day".

use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::SuggestionError;

// ASCII digits only: `\d` would also accept other Unicode digits.
static ISO_DATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").unwrap());

/// Parse `value` as an ISO calendar date, reporting errors against `field`.
pub fn validate_iso_date(value: &str, field: &str) -> Result<NaiveDate, SuggestionError> {
    if !ISO_DATE_RE.is_match(value) {
        return Err(SuggestionError::Format {
            field: field.to_string(),
            value: value.to_string(),
        });
    }

    let date =
        NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|e| SuggestionError::Semantic {
            field: field.to_string(),
            cause: e.to_string(),
        })?;

    // chrono is proleptic and has a year 0; the Gregorian calendar starts at 1.
    if date.year() < 1 {
        return Err(SuggestionError::Semantic {
            field: field.to_string(),
            cause: format!("year {} is out of range", date.year()),
        });
    }
    Ok(date)
}

/// Like [`validate_iso_date`], for an input that may not have been provided.
pub fn require_iso_date(value: Option<&str>, field: &str) -> Result<NaiveDate, SuggestionError> {
    let value = value.ok_or_else(|| SuggestionError::missing(field))?;
    validate_iso_date(value, field)
}
