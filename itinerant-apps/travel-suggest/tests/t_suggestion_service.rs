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

//! Tests for the two boundary operations: validation happens first and is
//! all-or-nothing, then the generator result is returned as is.
//!
//! Run with:
//!     cargo test --test t_suggestion_service

use itinerant_travel_suggest::{
    FlightsRequest, HotelsRequest, SuggestionError, SuggestionService, rng_for_call,
};

fn assert_ordering(err: SuggestionError, field: &str, message: &str) {
    match &err {
        SuggestionError::Ordering { field: f, .. } => assert_eq!(f, field),
        other => panic!("expected Ordering error, got {:?}", other),
    }
    assert_eq!(err.to_string(), message);
}

#[test]
fn test_paris_example() {
    let service = SuggestionService::new();
    let hotels = service
        .suggest_hotels(&HotelsRequest::new("Paris", "2024-12-01", "2024-12-05"))
        .expect("valid request");
    assert!((3..=8).contains(&hotels.len()));
    assert!(hotels.iter().all(|h| h.location.contains("Paris")));
}

#[test]
fn test_checkout_before_checkin() {
    let err = SuggestionService::new()
        .suggest_hotels(&HotelsRequest::new("Paris", "2024-12-05", "2024-12-01"))
        .unwrap_err();
    assert_ordering(err, "check_out", "check_out date must be after check_in date");
}

#[test]
fn test_same_checkin_checkout() {
    let err = SuggestionService::new()
        .suggest_hotels(&HotelsRequest::new("Paris", "2024-12-01", "2024-12-01"))
        .unwrap_err();
    assert_ordering(err, "check_out", "check_out date must be after check_in date");
}

#[test]
fn test_invalid_checkin_format() {
    let err = SuggestionService::new()
        .suggest_hotels(&HotelsRequest::new("Paris", "01-12-2024", "2024-12-05"))
        .unwrap_err();
    assert!(matches!(err, SuggestionError::Format { .. }));
    assert!(err.to_string().starts_with("check_in must be in ISO format"));
}

#[test]
fn test_invalid_checkout_day() {
    let err = SuggestionService::new()
        .suggest_hotels(&HotelsRequest::new("Paris", "2023-02-27", "2023-02-29"))
        .unwrap_err();
    assert!(matches!(err, SuggestionError::Semantic { .. }));
    assert!(err.to_string().starts_with("Invalid check_out"));
}

#[test]
fn test_missing_hotel_inputs() {
    let request = HotelsRequest {
        location: Some("Paris".into()),
        check_in: None,
        check_out: Some("2024-12-05".into()),
    };
    let err = SuggestionService::new().suggest_hotels(&request).unwrap_err();
    assert_eq!(err, SuggestionError::MissingInput { field: "check_in".into() });
}

#[test]
fn test_return_before_departure() {
    let err = SuggestionService::new()
        .suggest_flights(&FlightsRequest::new("NYC", "LA", "2024-12-15").return_date("2024-12-10"))
        .unwrap_err();
    assert_ordering(err, "return_date", "return_date must be after departure_date");
}

#[test]
fn test_return_same_day_as_departure() {
    let err = SuggestionService::new()
        .suggest_flights(&FlightsRequest::new("NYC", "LA", "2024-12-15").return_date("2024-12-15"))
        .unwrap_err();
    assert!(matches!(err, SuggestionError::Ordering { .. }));
}

#[test]
fn test_invalid_departure_format() {
    let err = SuggestionService::new()
        .suggest_flights(&FlightsRequest::new("New York", "London", "01-12-2024"))
        .unwrap_err();
    assert!(err.to_string().starts_with("departure_date must be in ISO format"));
}

#[test]
fn test_invalid_return_date_reported_before_ordering() {
    let err = SuggestionService::new()
        .suggest_flights(&FlightsRequest::new("New York", "London", "2024-12-15").return_date("2024-02-30"))
        .unwrap_err();
    assert!(matches!(err, SuggestionError::Semantic { ref field, .. } if field == "return_date"));
}

#[test]
fn test_missing_origin() {
    let request = FlightsRequest {
        from_location: None,
        to_location: Some("London".into()),
        departure_date: Some("2024-12-01".into()),
        return_date: None,
    };
    let err = SuggestionService::new().suggest_flights(&request).unwrap_err();
    assert!(matches!(err, SuggestionError::MissingInput { ref field } if field == "from_location"));
}

#[test]
fn test_round_trip_search() {
    let result = SuggestionService::new()
        .suggest_flights(&FlightsRequest::new("Paris", "Tokyo", "2024-12-01").return_date("2024-12-15"))
        .expect("valid request");
    assert!(result.departure_flights.len() >= 3);
    assert!(result.return_flights.len() >= 3);
    let dep = &result.departure_flights[0];
    let ret = &result.return_flights[0];
    assert_eq!(dep.from_airport.city, ret.to_airport.city);
    assert_eq!(dep.to_airport.city, ret.from_airport.city);
}

#[test]
fn test_service_returns_generator_output_unchanged() {
    let request = HotelsRequest::new("Lisbon", "2024-07-01", "2024-07-04");
    let via_service = SuggestionService::with_seed(99).suggest_hotels(&request).unwrap();

    let mut rng = rng_for_call(Some(99));
    let direct = SuggestionService::suggest_hotels_with_rng(&mut rng, &request).unwrap();
    assert_eq!(via_service, direct);
}

#[test]
fn test_concurrent_calls_do_not_interfere() {
    let service = SuggestionService::with_seed(7);
    let request = FlightsRequest::new("Dallas", "Phoenix", "2024-12-01");
    let expected = service.suggest_flights(&request).unwrap();

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let request = request.clone();
            std::thread::spawn(move || service.suggest_flights(&request).unwrap())
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

#[test]
fn test_unseeded_calls_keep_structure() {
    let service = SuggestionService::new();
    let request = HotelsRequest::new("Miami", "2024-12-01", "2024-12-05");
    for _ in 0..5 {
        let hotels = service.suggest_hotels(&request).unwrap();
        assert!((3..=8).contains(&hotels.len()));
    }
}
