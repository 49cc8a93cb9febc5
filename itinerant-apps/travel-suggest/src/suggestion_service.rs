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

//! # Suggestion Service
//!
//! The two boundary operations. Each validates every input first and only
//! then hands the validated values to a generator, so a failed call never
//! produces a partial result.

use chrono::NaiveDate;
use itinerant_draws::rng_for_call;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::date_validator::require_iso_date;
use crate::errors::SuggestionError;
use crate::flights_generator::{generate_flights, FlightSuggestions};
use crate::hotels_generator::{generate_hotels, HotelOffer};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "mcp", derive(schemars::JsonSchema))]
#[serde(rename_all = "snake_case")]
pub struct HotelsRequest {
    // Required in the tool schema; an absent field is still reported as MissingInput.
    /// City or area to stay in, e.g. "Paris".
    #[cfg_attr(feature = "mcp", schemars(with = "String"))]
    pub location: Option<String>,
    /// Check-in date, YYYY-MM-DD.
    #[cfg_attr(feature = "mcp", schemars(with = "String"))]
    pub check_in: Option<String>,
    /// Check-out date, YYYY-MM-DD. Must be after check_in.
    #[cfg_attr(feature = "mcp", schemars(with = "String"))]
    pub check_out: Option<String>,
}

impl HotelsRequest {
    pub fn new(
        location: impl Into<String>,
        check_in: impl Into<String>,
        check_out: impl Into<String>,
    ) -> Self {
        Self {
            location: Some(location.into()),
            check_in: Some(check_in.into()),
            check_out: Some(check_out.into()),
        }
    }

    pub fn validate(&self) -> Result<HotelStay, SuggestionError> {
        let location = self
            .location
            .clone()
            .ok_or_else(|| SuggestionError::missing("location"))?;
        let check_in = require_iso_date(self.check_in.as_deref(), "check_in")?;
        let check_out = require_iso_date(self.check_out.as_deref(), "check_out")?;
        if check_out <= check_in {
            return Err(SuggestionError::ordering(
                "check_out",
                "check_out date must be after check_in date",
            ));
        }
        Ok(HotelStay {
            location,
            check_in,
            check_out,
        })
    }
}

/// A hotel request that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HotelStay {
    pub location: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
}

impl HotelStay {
    pub fn nights(&self) -> i64 {
        (self.check_out - self.check_in).num_days()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "mcp", derive(schemars::JsonSchema))]
#[serde(rename_all = "snake_case")]
pub struct FlightsRequest {
    /// Departure city, e.g. "New York".
    #[cfg_attr(feature = "mcp", schemars(with = "String"))]
    pub from_location: Option<String>,
    /// Arrival city, e.g. "London".
    #[cfg_attr(feature = "mcp", schemars(with = "String"))]
    pub to_location: Option<String>,
    /// Outbound date, YYYY-MM-DD.
    #[cfg_attr(feature = "mcp", schemars(with = "String"))]
    pub departure_date: Option<String>,
    /// Return date for a round trip, YYYY-MM-DD. Must be after departure_date.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_date: Option<String>,
}

impl FlightsRequest {
    pub fn new(
        from_location: impl Into<String>,
        to_location: impl Into<String>,
        departure_date: impl Into<String>,
    ) -> Self {
        Self {
            from_location: Some(from_location.into()),
            to_location: Some(to_location.into()),
            departure_date: Some(departure_date.into()),
            return_date: None,
        }
    }

    pub fn return_date(mut self, return_date: impl Into<String>) -> Self {
        self.return_date = Some(return_date.into());
        self
    }

    pub fn validate(&self) -> Result<FlightTrip, SuggestionError> {
        let origin = self
            .from_location
            .clone()
            .ok_or_else(|| SuggestionError::missing("from_location"))?;
        let destination = self
            .to_location
            .clone()
            .ok_or_else(|| SuggestionError::missing("to_location"))?;
        let departure_date = require_iso_date(self.departure_date.as_deref(), "departure_date")?;

        // An absent return date means one-way, not a missing input.
        let return_date = match self.return_date.as_deref() {
            Some(value) => Some(require_iso_date(Some(value), "return_date")?),
            None => None,
        };
        if return_date.is_some_and(|r| r <= departure_date) {
            return Err(SuggestionError::ordering(
                "return_date",
                "return_date must be after departure_date",
            ));
        }

        Ok(FlightTrip {
            origin,
            destination,
            departure_date,
            return_date,
        })
    }
}

/// A flight request that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlightTrip {
    pub origin: String,
    pub destination: String,
    pub departure_date: NaiveDate,
    pub return_date: Option<NaiveDate>,
}

/// Entry point for the hotel and flight suggestion operations.
///
/// Holds no mutable state: every call builds its own RNG, seeded from
/// `seed` when one is configured and from OS entropy otherwise.
#[derive(Debug, Clone, Copy, Default)]
pub struct SuggestionService {
    seed: Option<u64>,
}

impl SuggestionService {
    pub fn new() -> Self {
        Self { seed: None }
    }

    /// Every call replays the same random sequence.
    pub fn with_seed(seed: u64) -> Self {
        Self { seed: Some(seed) }
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn suggest_hotels(
        &self,
        request: &HotelsRequest,
    ) -> Result<Vec<HotelOffer>, SuggestionError> {
        let mut rng = rng_for_call(self.seed);
        Self::suggest_hotels_with_rng(&mut rng, request)
    }

    /// Generate hotels for a stay that already passed [`HotelsRequest::validate`].
    pub fn hotels_for_stay(&self, stay: &HotelStay) -> Vec<HotelOffer> {
        let mut rng = rng_for_call(self.seed);
        Self::hotels_for_stay_with_rng(&mut rng, stay)
    }

    pub fn suggest_flights(
        &self,
        request: &FlightsRequest,
    ) -> Result<FlightSuggestions, SuggestionError> {
        let mut rng = rng_for_call(self.seed);
        Self::suggest_flights_with_rng(&mut rng, request)
    }

    pub fn suggest_hotels_with_rng<R: Rng + ?Sized>(
        rng: &mut R,
        request: &HotelsRequest,
    ) -> Result<Vec<HotelOffer>, SuggestionError> {
        let stay = request
            .validate()
            .inspect_err(|e| tracing::debug!("Rejected hotel request: {}", e))?;

        Ok(Self::hotels_for_stay_with_rng(rng, &stay))
    }

    fn hotels_for_stay_with_rng<R: Rng + ?Sized>(
        rng: &mut R,
        stay: &HotelStay,
    ) -> Vec<HotelOffer> {
        let hotels = generate_hotels(rng, &stay.location, stay.check_in, stay.check_out);
        tracing::debug!(
            "Generated {} hotel offers in {} for {} night(s)",
            hotels.len(),
            stay.location,
            stay.nights()
        );
        hotels
    }

    pub fn suggest_flights_with_rng<R: Rng + ?Sized>(
        rng: &mut R,
        request: &FlightsRequest,
    ) -> Result<FlightSuggestions, SuggestionError> {
        let trip = request
            .validate()
            .inspect_err(|e| tracing::debug!("Rejected flight request: {}", e))?;

        let flights = generate_flights(
            rng,
            &trip.origin,
            &trip.destination,
            trip.departure_date,
            trip.return_date,
        );
        tracing::debug!(
            "Generated {} outbound and {} return offers for {} -> {}",
            flights.departure_flights.len(),
            flights.return_flights.len(),
            trip.origin,
            trip.destination
        );
        Ok(flights)
    }
}
