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

//! Property tests for flight suggestions.
//!
//! Covers the leg counts, the time window and grid, price/seat bounds, the
//! round-trip mirror and the connecting-flight segment contract.
//!
//! Run with:
//!     cargo test --test t_flights_generation_properties

use chrono::{Duration, NaiveDate, Timelike};
use itinerant_travel_suggest::{
    CURRENCY, CabinClass, FlightOffer, MAX_CONNECTION_MINUTES, MAX_DURATION_MINUTES, MAX_FLIGHTS,
    MAX_PRICE, MAX_SEATS, MIN_CONNECTION_MINUTES, MIN_DURATION_MINUTES, MIN_FLIGHTS, MIN_PRICE,
    generate_flights, rng_for_call,
};

const ROUTES: &[(&str, &str)] = &[
    ("New York", "London"),
    ("Paris", "Tokyo"),
    ("Chicago", "Miami"),
    ("Denver", "Frankfurt"),
    ("NYC", "LA"),
    ("Reykjavik", "Salt Lake City"),
    ("Atlanta", "Dubai"),
];

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn check_offer(offer: &FlightOffer, on: NaiveDate) {
    assert_eq!(offer.departure.date(), on, "{} departs on wrong day", offer.flight_id);
    let minutes_after_six =
        i64::from(offer.departure.hour()) * 60 + i64::from(offer.departure.minute()) - 6 * 60;
    assert!(
        (0..=16 * 60).contains(&minutes_after_six),
        "{} departs at {}",
        offer.flight_id,
        offer.departure
    );
    assert!([0, 15, 30, 45].contains(&offer.departure.minute()));
    assert_eq!(offer.departure.second(), 0);

    assert!((MIN_DURATION_MINUTES..=MAX_DURATION_MINUTES).contains(&offer.duration_minutes));
    assert_eq!(offer.arrival, offer.departure + Duration::minutes(offer.duration_minutes));

    assert!(offer.price >= MIN_PRICE && offer.price <= MAX_PRICE, "price {}", offer.price);
    assert_eq!(offer.currency, CURRENCY);
    assert!((1..=MAX_SEATS).contains(&offer.available_seats));
    assert!(CabinClass::ALL.contains(&offer.cabin_class));

    assert_eq!(offer.flight_id.len(), 8);
    assert!(offer.flight_id.chars().all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()));
    for airport in [&offer.from_airport, &offer.to_airport] {
        assert_eq!(airport.code.len(), 3);
        assert!(airport.code.chars().all(|c| c.is_ascii_uppercase()));
    }
}

fn check_connection(offer: &FlightOffer) {
    let Some(connection) = &offer.connection else {
        assert!(offer.is_direct);
        return;
    };
    assert!(!offer.is_direct);
    assert_eq!(connection.segments.len(), 2);

    let hub = &connection.connection_airport;
    assert_ne!(hub.code, offer.from_airport.code);
    assert_ne!(hub.code, offer.to_airport.code);
    assert_ne!(hub.city, offer.from_airport.city);
    assert_ne!(hub.city, offer.to_airport.city);

    assert!(
        (MIN_CONNECTION_MINUTES..=MAX_CONNECTION_MINUTES)
            .contains(&connection.connection_duration_minutes)
    );

    let [first, second] = &connection.segments;
    assert_eq!(&first.from_airport, &offer.from_airport);
    assert_eq!(&first.to_airport, hub);
    assert_eq!(&second.from_airport, hub);
    assert_eq!(&second.to_airport, &offer.to_airport);
    for segment in [first, second] {
        assert!(segment.duration_minutes > 0);
        assert_eq!(
            segment.arrival,
            segment.departure + Duration::minutes(segment.duration_minutes)
        );
    }
    assert_eq!(
        second.departure - first.arrival,
        Duration::minutes(connection.connection_duration_minutes)
    );
    assert_eq!(
        first.duration_minutes + connection.connection_duration_minutes + second.duration_minutes,
        offer.duration_minutes
    );
}

#[test]
fn test_one_way_has_no_return_flights() {
    for seed in 0..100u64 {
        let (from, to) = ROUTES[seed as usize % ROUTES.len()];
        let mut rng = rng_for_call(Some(seed));
        let result = generate_flights(&mut rng, from, to, date(2024, 12, 1), None);

        assert!(result.return_flights.is_empty());
        assert!((MIN_FLIGHTS..=MAX_FLIGHTS).contains(&result.departure_flights.len()));
        for offer in &result.departure_flights {
            check_offer(offer, date(2024, 12, 1));
            check_connection(offer);
        }
    }
}

#[test]
fn test_round_trip_mirrors_outbound() {
    for seed in 0..100u64 {
        let (from, to) = ROUTES[seed as usize % ROUTES.len()];
        let mut rng = rng_for_call(Some(seed));
        let result = generate_flights(&mut rng, from, to, date(2024, 12, 1), Some(date(2024, 12, 15)));

        assert!((MIN_FLIGHTS..=MAX_FLIGHTS).contains(&result.departure_flights.len()));
        assert!((MIN_FLIGHTS..=MAX_FLIGHTS).contains(&result.return_flights.len()));

        for outbound in &result.departure_flights {
            check_offer(outbound, date(2024, 12, 1));
            check_connection(outbound);
            assert_eq!(outbound.from_airport.city, from);
            assert_eq!(outbound.to_airport.city, to);
        }
        for inbound in &result.return_flights {
            check_offer(inbound, date(2024, 12, 15));
            check_connection(inbound);
            let outbound = &result.departure_flights[0];
            assert_eq!(outbound.from_airport.city, inbound.to_airport.city);
            assert_eq!(outbound.to_airport.city, inbound.from_airport.city);
            assert_eq!(outbound.from_airport, inbound.to_airport);
            assert_eq!(outbound.to_airport, inbound.from_airport);
        }
    }
}

#[test]
fn test_connecting_flights_appear() {
    let connecting = (0..20u64)
        .flat_map(|seed| {
            let mut rng = rng_for_call(Some(seed));
            generate_flights(&mut rng, "Denver", "Frankfurt", date(2024, 12, 1), None)
                .departure_flights
        })
        .filter(|f| !f.is_direct)
        .count();
    assert!(connecting > 0, "no connecting flight in 20 searches");
}

#[test]
fn test_late_evening_departures_may_arrive_next_day() {
    let mut saw_next_day = false;
    for seed in 0..300u64 {
        let mut rng = rng_for_call(Some(seed));
        let result = generate_flights(&mut rng, "Boston", "Seattle", date(2024, 12, 31), None);
        for offer in &result.departure_flights {
            check_offer(offer, date(2024, 12, 31));
            saw_next_day |= offer.arrival.date() == date(2025, 1, 1);
        }
    }
    assert!(saw_next_day, "arrivals should be able to roll into the next day");
}

#[test]
fn test_json_field_names() {
    let mut rng = rng_for_call(Some(5));
    let result = generate_flights(&mut rng, "New York", "London", date(2024, 12, 1), None);
    let json = serde_json::to_value(&result).unwrap();
    assert!(json["return_flights"].as_array().unwrap().is_empty());

    let flight = &json["departure_flights"][0];
    for field in [
        "flight_id",
        "airline",
        "flight_number",
        "aircraft",
        "from_airport",
        "to_airport",
        "departure",
        "arrival",
        "duration_minutes",
        "is_direct",
        "price",
        "currency",
        "available_seats",
        "cabin_class",
    ] {
        assert!(flight.get(field).is_some(), "missing field {}", field);
    }
    for field in ["code", "name", "city"] {
        assert!(flight["from_airport"].get(field).is_some());
    }
    // ISO-8601 local date-time, no offset
    let departure = flight["departure"].as_str().unwrap();
    assert!(departure.starts_with("2024-12-01T"), "{}", departure);
    assert_eq!(departure.len(), "2024-12-01T06:00:00".len());
}
