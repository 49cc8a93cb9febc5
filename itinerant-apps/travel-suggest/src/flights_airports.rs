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

//! # Airports
//!
//! Deterministic city name → airport mapping, and the hubs connecting
//! flights may stop at.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Airport {
    pub code: String,
    pub name: String,
    pub city: String,
}

impl Airport {
    /// Airport serving `city`.
    ///
    /// Well-known cities get their real main airport; anything else gets a
    /// code built from the letters of the name. The `city` field is always
    /// `city` as given.
    pub fn for_city(city: &str) -> Self {
        let key = city.trim();
        if let Some((_, code, name)) = KNOWN_CITIES
            .iter()
            .find(|(known, _, _)| known.eq_ignore_ascii_case(key))
        {
            return Self {
                code: code.to_string(),
                name: name.to_string(),
                city: city.to_string(),
            };
        }

        let name = if key.is_empty() {
            "International Airport".to_string()
        } else {
            format!("{} International Airport", key)
        };
        Self {
            code: derive_code(key),
            name,
            city: city.to_string(),
        }
    }

    /// True when both airports would be the same stop for a traveller.
    pub fn same_place(&self, other: &Airport) -> bool {
        self.code == other.code || self.city.trim().eq_ignore_ascii_case(other.city.trim())
    }
}

/// Three uppercase letters from a place name: initials of each word first,
/// then the remaining letters in order, padded with `X`.
fn derive_code(city: &str) -> String {
    let words: Vec<Vec<char>> = city
        .split(|c: char| c.is_whitespace() || c == '-')
        .map(|w| {
            w.chars()
                .filter(char::is_ascii_alphabetic)
                .map(|c| c.to_ascii_uppercase())
                .collect::<Vec<_>>()
        })
        .filter(|w| !w.is_empty())
        .collect();

    let mut code: String = words.iter().map(|w| w[0]).take(3).collect();
    for c in words.iter().flat_map(|w| w.iter().skip(1)) {
        if code.len() == 3 {
            break;
        }
        code.push(*c);
    }
    while code.len() < 3 {
        code.push('X');
    }
    code
}

const KNOWN_CITIES: &[(&str, &str, &str)] = &[
    ("New York", "JFK", "John F. Kennedy International Airport"),
    ("NYC", "JFK", "John F. Kennedy International Airport"),
    ("Los Angeles", "LAX", "Los Angeles International Airport"),
    ("LA", "LAX", "Los Angeles International Airport"),
    ("Chicago", "ORD", "O'Hare International Airport"),
    ("San Francisco", "SFO", "San Francisco International Airport"),
    ("Miami", "MIA", "Miami International Airport"),
    ("Boston", "BOS", "Logan International Airport"),
    ("Seattle", "SEA", "Seattle-Tacoma International Airport"),
    ("Denver", "DEN", "Denver International Airport"),
    ("Dallas", "DFW", "Dallas/Fort Worth International Airport"),
    ("Phoenix", "PHX", "Phoenix Sky Harbor International Airport"),
    ("Atlanta", "ATL", "Hartsfield-Jackson Atlanta International Airport"),
    ("London", "LHR", "Heathrow Airport"),
    ("Paris", "CDG", "Charles de Gaulle Airport"),
    ("Frankfurt", "FRA", "Frankfurt Airport"),
    ("Amsterdam", "AMS", "Amsterdam Airport Schiphol"),
    ("Madrid", "MAD", "Adolfo Suárez Madrid–Barajas Airport"),
    ("Rome", "FCO", "Leonardo da Vinci–Fiumicino Airport"),
    ("Tokyo", "HND", "Haneda Airport"),
    ("Singapore", "SIN", "Singapore Changi Airport"),
    ("Dubai", "DXB", "Dubai International Airport"),
    ("Sydney", "SYD", "Sydney Kingsford Smith Airport"),
];

/// Airports a connecting flight may change planes at.
pub(crate) const CONNECTION_HUBS: &[(&str, &str, &str)] = &[
    ("ATL", "Hartsfield-Jackson Atlanta International Airport", "Atlanta"),
    ("ORD", "O'Hare International Airport", "Chicago"),
    ("DFW", "Dallas/Fort Worth International Airport", "Dallas"),
    ("DEN", "Denver International Airport", "Denver"),
    ("CLT", "Charlotte Douglas International Airport", "Charlotte"),
    ("AMS", "Amsterdam Airport Schiphol", "Amsterdam"),
    ("FRA", "Frankfurt Airport", "Frankfurt"),
    ("MUC", "Munich Airport", "Munich"),
    ("IST", "Istanbul Airport", "Istanbul"),
    ("DXB", "Dubai International Airport", "Dubai"),
    ("DOH", "Hamad International Airport", "Doha"),
    ("SIN", "Singapore Changi Airport", "Singapore"),
];

/// Hubs usable between `from` and `to`: never the same place as either end.
pub(crate) fn connection_candidates(from: &Airport, to: &Airport) -> Vec<Airport> {
    CONNECTION_HUBS
        .iter()
        .map(|(code, name, city)| Airport {
            code: code.to_string(),
            name: name.to_string(),
            city: city.to_string(),
        })
        .filter(|hub| !hub.same_place(from) && !hub.same_place(to))
        .collect()
}
