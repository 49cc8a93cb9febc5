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

//! # Hotel Suggestion Generator
//!
//! Synthesizes hotel offers for a location and stay window.
//! Pure apart from the draws made on the caller's RNG.

use chrono::NaiveDate;
use itinerant_draws::Draws;
use rand::Rng;
use serde::{Deserialize, Serialize};

pub const MIN_HOTELS: usize = 3;
pub const MAX_HOTELS: usize = 8;
pub const MIN_RATING: f64 = 3.0;
pub const MAX_RATING: f64 = 5.0;
pub const MIN_AMENITIES: usize = 3;
pub const MAX_AMENITIES: usize = 6;
const MAX_ROOMS: u32 = 15;

const NAME_PREFIXES: &[&str] = &[
    "Grand", "Royal", "Central", "Harbor", "Park", "Riverside", "Plaza", "Golden",
];
const NEIGHBORHOODS: &[&str] = &[
    "Downtown",
    "Old Town",
    "City Center",
    "Waterfront",
    "Financial District",
    "Arts District",
    "Historic Quarter",
    "Midtown",
];
const STREETS: &[&str] = &[
    "Main Street",
    "Park Avenue",
    "Market Street",
    "Harbor Road",
    "King Street",
    "Station Road",
    "River Lane",
    "Elm Street",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HotelType {
    Luxury,
    Boutique,
    Budget,
    Business,
}

impl HotelType {
    pub const ALL: [HotelType; 4] = [
        HotelType::Luxury,
        HotelType::Boutique,
        HotelType::Budget,
        HotelType::Business,
    ];

    /// Nightly price band, in USD.
    pub fn price_band(self) -> (f64, f64) {
        match self {
            HotelType::Luxury => (250.0, 600.0),
            HotelType::Boutique => (180.0, 350.0),
            HotelType::Budget => (80.0, 150.0),
            HotelType::Business => (150.0, 300.0),
        }
    }

    pub fn as_str_name(&self) -> &'static str {
        match self {
            HotelType::Luxury => "Luxury",
            HotelType::Boutique => "Boutique",
            HotelType::Budget => "Budget",
            HotelType::Business => "Business",
        }
    }

    fn name_suffixes(self) -> &'static [&'static str] {
        match self {
            HotelType::Luxury => &["Palace", "Resort & Spa", "Grand Hotel"],
            HotelType::Boutique => &["Boutique Hotel", "House", "Residence"],
            HotelType::Budget => &["Inn", "Lodge", "Hostel"],
            HotelType::Business => &["Business Hotel", "Suites", "Conference Hotel"],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HotelAmenity {
    #[serde(rename = "Free WiFi")]
    FreeWifi,
    Pool,
    Spa,
    #[serde(rename = "Fitness Center")]
    FitnessCenter,
    Restaurant,
    Bar,
    #[serde(rename = "Room Service")]
    RoomService,
    Parking,
    #[serde(rename = "Airport Shuttle")]
    AirportShuttle,
    #[serde(rename = "Business Center")]
    BusinessCenter,
    #[serde(rename = "Pet Friendly")]
    PetFriendly,
    #[serde(rename = "Breakfast Included")]
    BreakfastIncluded,
}

impl HotelAmenity {
    pub const ALL: [HotelAmenity; 12] = [
        HotelAmenity::FreeWifi,
        HotelAmenity::Pool,
        HotelAmenity::Spa,
        HotelAmenity::FitnessCenter,
        HotelAmenity::Restaurant,
        HotelAmenity::Bar,
        HotelAmenity::RoomService,
        HotelAmenity::Parking,
        HotelAmenity::AirportShuttle,
        HotelAmenity::BusinessCenter,
        HotelAmenity::PetFriendly,
        HotelAmenity::BreakfastIncluded,
    ];

    pub fn as_str_name(&self) -> &'static str {
        match self {
            HotelAmenity::FreeWifi => "Free WiFi",
            HotelAmenity::Pool => "Pool",
            HotelAmenity::Spa => "Spa",
            HotelAmenity::FitnessCenter => "Fitness Center",
            HotelAmenity::Restaurant => "Restaurant",
            HotelAmenity::Bar => "Bar",
            HotelAmenity::RoomService => "Room Service",
            HotelAmenity::Parking => "Parking",
            HotelAmenity::AirportShuttle => "Airport Shuttle",
            HotelAmenity::BusinessCenter => "Business Center",
            HotelAmenity::PetFriendly => "Pet Friendly",
            HotelAmenity::BreakfastIncluded => "Breakfast Included",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct HotelOffer {
    pub name: String,
    pub address: String,
    pub location: String,
    pub rating: f64,
    pub price_per_night: f64,
    pub total_price: f64,
    pub hotel_type: HotelType,
    pub amenities: Vec<HotelAmenity>,
    pub available_rooms: u32,
}

/// Generate between 3 and 8 hotel offers in `location`, best rated first.
///
/// Expects `check_out > check_in`; the service enforces it before calling.
/// The stay length only feeds `total_price`.
pub fn generate_hotels<R: Rng + ?Sized>(
    rng: &mut R,
    location: &str,
    check_in: NaiveDate,
    check_out: NaiveDate,
) -> Vec<HotelOffer> {
    let nights = (check_out - check_in).num_days().max(1);
    let count = rng.gen_range(MIN_HOTELS..=MAX_HOTELS);

    let mut hotels: Vec<HotelOffer> = (0..count)
        .map(|_| generate_hotel(rng, location, nights))
        .collect();

    hotels.sort_by(|a, b| b.rating.total_cmp(&a.rating));
    hotels
}

fn generate_hotel<R: Rng + ?Sized>(rng: &mut R, location: &str, nights: i64) -> HotelOffer {
    let hotel_type = *rng.pick(&HotelType::ALL);
    let (min_price, max_price) = hotel_type.price_band();
    let price_per_night = rng.cents(min_price, max_price);
    let amenity_count = rng.gen_range(MIN_AMENITIES..=MAX_AMENITIES);

    HotelOffer {
        name: format!(
            "{} {} {}",
            rng.pick(NAME_PREFIXES),
            location,
            rng.pick(hotel_type.name_suffixes())
        ),
        address: format!(
            "{} {}, {}",
            rng.gen_range(1..=999),
            rng.pick(STREETS),
            location
        ),
        location: format!("{}, {}", rng.pick(NEIGHBORHOODS), location),
        rating: rng.one_decimal(MIN_RATING, MAX_RATING),
        price_per_night,
        total_price: (price_per_night * nights as f64 * 100.0).round() / 100.0,
        hotel_type,
        amenities: rng.pick_distinct(&HotelAmenity::ALL, amenity_count),
        available_rooms: rng.gen_range(1..=MAX_ROOMS),
    }
}
