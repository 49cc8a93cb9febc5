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

// Library for itinerant-travel-suggest
// Synthetic hotel and flight suggestions (MCP tools + CLIs)

mod date_validator;
mod errors;
mod flights_airports;
mod flights_generator;
mod hotels_generator;
mod suggestion_service;

#[cfg(feature = "mcp")]
mod mcp_server;

pub use date_validator::{require_iso_date, validate_iso_date};
pub use errors::SuggestionError;

pub use flights_airports::Airport;
pub use flights_generator::*;

pub use hotels_generator::{
    HotelAmenity, HotelOffer, HotelType, MAX_AMENITIES, MAX_HOTELS, MAX_RATING, MIN_AMENITIES,
    MIN_HOTELS, MIN_RATING, generate_hotels,
};

pub use suggestion_service::{
    FlightTrip, FlightsRequest, HotelStay, HotelsRequest, SuggestionService,
};

#[cfg(feature = "mcp")]
pub use mcp_server::{TravelSuggestServer, homepage, http_router};

// Re-exported so callers can drive the generators with their own seeds
pub use itinerant_draws::rng_for_call;
