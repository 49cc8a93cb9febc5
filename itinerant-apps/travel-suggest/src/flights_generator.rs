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

//! # Flight Suggestion Generator
//!
//! Synthesizes direct and connecting flight offers for an outbound leg and,
//! for round trips, a return leg flown between the same two airports.
//!
//! Durations are authoritative: every arrival is computed from its departure,
//! and a connecting offer's duration is the sum of its two segments and the
//! layover between them.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use itinerant_draws::Draws;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::flights_airports::{connection_candidates, Airport};

pub const MIN_FLIGHTS: usize = 3;
pub const MAX_FLIGHTS: usize = 7;
pub const FIRST_DEPARTURE_HOUR: u32 = 6;
pub const LAST_DEPARTURE_HOUR: u32 = 22;
pub const MIN_DURATION_MINUTES: i64 = 60;
pub const MAX_DURATION_MINUTES: i64 = 480;
pub const MIN_CONNECTION_MINUTES: i64 = 45;
pub const MAX_CONNECTION_MINUTES: i64 = 180;
pub const MIN_PRICE: f64 = 99.0;
pub const MAX_PRICE: f64 = 999.0;
pub const MAX_SEATS: u32 = 30;
pub const CURRENCY: &str = "USD";

const MIN_SEGMENT_MINUTES: i64 = 30;
const CONNECTING_PROBABILITY: f64 = 0.4;
const FLIGHT_ID_LEN: usize = 8;

/// Airline display name and its two-letter designator.
const AIRLINES: &[(&str, &str)] = &[
    ("SkyWings", "SW"),
    ("Global Air", "GA"),
    ("Atlantic Airways", "AT"),
    ("Pacific Express", "PX"),
    ("Mountain Jets", "MJ"),
    ("Stellar Airlines", "SL"),
    ("Sunshine Airways", "SS"),
    ("Northern Flights", "NF"),
];

const AIRCRAFT: &[&str] = &[
    "Boeing 737",
    "Airbus A320",
    "Boeing 787",
    "Airbus A350",
    "Embraer E190",
    "Bombardier CRJ900",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CabinClass {
    Economy,
    #[serde(rename = "Premium Economy")]
    PremiumEconomy,
    Business,
    First,
}

impl CabinClass {
    pub const ALL: [CabinClass; 4] = [
        CabinClass::Economy,
        CabinClass::PremiumEconomy,
        CabinClass::Business,
        CabinClass::First,
    ];

    pub fn as_str_name(&self) -> &'static str {
        match self {
            CabinClass::Economy => "Economy",
            CabinClass::PremiumEconomy => "Premium Economy",
            CabinClass::Business => "Business",
            CabinClass::First => "First",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct FlightSegment {
    pub flight_number: String,
    pub from_airport: Airport,
    pub to_airport: Airport,
    pub departure: NaiveDateTime,
    pub arrival: NaiveDateTime,
    pub duration_minutes: i64,
}

/// Layover details of a connecting offer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Connection {
    pub segments: [FlightSegment; 2],
    pub connection_airport: Airport,
    pub connection_duration_minutes: i64,
}

impl Connection {
    /// Gate-to-gate minutes, layover included.
    pub fn total_minutes(&self) -> i64 {
        self.segments[0].duration_minutes
            + self.connection_duration_minutes
            + self.segments[1].duration_minutes
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct FlightOffer {
    pub flight_id: String,
    pub airline: String,
    pub flight_number: String,
    pub aircraft: String,
    pub from_airport: Airport,
    pub to_airport: Airport,
    pub departure: NaiveDateTime,
    pub arrival: NaiveDateTime,
    pub duration_minutes: i64,
    pub is_direct: bool,
    pub price: f64,
    pub currency: String,
    pub available_seats: u32,
    pub cabin_class: CabinClass,
    #[serde(flatten)]
    pub connection: Option<Connection>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct FlightSuggestions {
    pub departure_flights: Vec<FlightOffer>,
    pub return_flights: Vec<FlightOffer>,
}

/// Generate outbound offers from `origin` to `destination` on
/// `departure_date` and, when `return_date` is given, return offers flown
/// the other way on that date.
///
/// Expects `return_date > departure_date`; the service enforces it.
pub fn generate_flights<R: Rng + ?Sized>(
    rng: &mut R,
    origin: &str,
    destination: &str,
    departure_date: NaiveDate,
    return_date: Option<NaiveDate>,
) -> FlightSuggestions {
    let from = Airport::for_city(origin);
    let to = Airport::for_city(destination);

    let departure_flights = generate_leg(rng, &from, &to, departure_date);
    let return_flights = match return_date {
        Some(date) => generate_leg(rng, &to, &from, date),
        None => Vec::new(),
    };

    FlightSuggestions {
        departure_flights,
        return_flights,
    }
}

fn generate_leg<R: Rng + ?Sized>(
    rng: &mut R,
    from: &Airport,
    to: &Airport,
    date: NaiveDate,
) -> Vec<FlightOffer> {
    let count = rng.gen_range(MIN_FLIGHTS..=MAX_FLIGHTS);
    let mut offers: Vec<FlightOffer> = (0..count)
        .map(|_| generate_offer(rng, from, to, date))
        .collect();
    offers.sort_by_key(|offer| offer.departure);
    offers
}

fn generate_offer<R: Rng + ?Sized>(
    rng: &mut R,
    from: &Airport,
    to: &Airport,
    date: NaiveDate,
) -> FlightOffer {
    let &(airline, designator) = rng.pick(AIRLINES);
    let flight_number = draw_flight_number(rng, designator);
    let departure = rng.quarter_hour(date, FIRST_DEPARTURE_HOUR, LAST_DEPARTURE_HOUR);

    let connection = if rng.gen_bool(CONNECTING_PROBABILITY) {
        Some(draw_connection(rng, designator, &flight_number, from, to, departure))
    } else {
        None
    };
    let duration_minutes = match &connection {
        Some(connection) => connection.total_minutes(),
        None => rng.gen_range(MIN_DURATION_MINUTES..=MAX_DURATION_MINUTES),
    };

    FlightOffer {
        flight_id: rng.token(FLIGHT_ID_LEN),
        airline: airline.to_string(),
        flight_number,
        aircraft: rng.pick(AIRCRAFT).to_string(),
        from_airport: from.clone(),
        to_airport: to.clone(),
        departure,
        arrival: departure + Duration::minutes(duration_minutes),
        duration_minutes,
        is_direct: connection.is_none(),
        price: rng.cents(MIN_PRICE, MAX_PRICE),
        currency: CURRENCY.to_string(),
        available_seats: rng.gen_range(1..=MAX_SEATS),
        cabin_class: *rng.pick(&CabinClass::ALL),
        connection,
    }
}

/// Two segments through a hub; the first one carries the offer's flight number.
fn draw_connection<R: Rng + ?Sized>(
    rng: &mut R,
    designator: &str,
    flight_number: &str,
    from: &Airport,
    to: &Airport,
    departure: NaiveDateTime,
) -> Connection {
    let hubs = connection_candidates(from, to);
    let hub = rng.pick(&hubs).clone();

    let layover = rng.gen_range(MIN_CONNECTION_MINUTES..=MAX_CONNECTION_MINUTES);
    let flying = rng.gen_range(2 * MIN_SEGMENT_MINUTES..=MAX_DURATION_MINUTES - layover);
    let first_leg = rng.gen_range(MIN_SEGMENT_MINUTES..=flying - MIN_SEGMENT_MINUTES);
    let second_leg = flying - first_leg;

    let first = FlightSegment {
        flight_number: flight_number.to_string(),
        from_airport: from.clone(),
        to_airport: hub.clone(),
        departure,
        arrival: departure + Duration::minutes(first_leg),
        duration_minutes: first_leg,
    };
    let second_departure = first.arrival + Duration::minutes(layover);
    let second = FlightSegment {
        flight_number: draw_flight_number(rng, designator),
        from_airport: hub.clone(),
        to_airport: to.clone(),
        departure: second_departure,
        arrival: second_departure + Duration::minutes(second_leg),
        duration_minutes: second_leg,
    };

    Connection {
        segments: [first, second],
        connection_airport: hub,
        connection_duration_minutes: layover,
    }
}

fn draw_flight_number<R: Rng + ?Sized>(rng: &mut R, designator: &str) -> String {
    format!("{}{}", designator, rng.gen_range(100..=9999))
}
