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
//!
//! # Examples
//!
//! ## Basic suggestion
//!
//! ```bash
//! itinerant-hotels -L "Tokyo" -i 2026-02-15 -o 2026-02-20
//! ```
//!
//! ## Reproducible output as JSON
//!
//! ```bash
//! itinerant-hotels -L "Paris" -i 2026-03-01 -o 2026-03-05 --seed 42 --json
//! ```
//!
//! # Output
//!
//! The tool prints a summary of the stay followed by the suggested hotels with:
//! - Name and category
//! - Price per night and for the whole stay
//! - Rating
//! - Amenities and rooms left

use anyhow::{Context, Result};
use clap::Parser;
use itinerant_travel_suggest::{HotelsRequest, SuggestionService};

#[derive(Parser, Debug)]
#[command(name = "itinerant-hotels")]
#[command(version = "0.1.0")]
#[command(about = "Suggest synthetic hotels for a stay")]
struct Args {
    #[arg(short = 'L', long)]
    location: String,
    #[arg(short = 'i', long, help = "Check-in date (YYYY-MM-DD)")]
    checkin: String,
    #[arg(short = 'o', long, help = "Check-out date (YYYY-MM-DD)")]
    checkout: String,
    #[arg(long, help = "Seed for reproducible suggestions")]
    seed: Option<u64>,
    #[arg(short = 'n', long, default_value = "10")]
    limit: usize,
    #[arg(long, help = "Print the raw JSON response")]
    json: bool,
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let level = if args.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let service = match args.seed {
        Some(seed) => SuggestionService::with_seed(seed),
        None => SuggestionService::new(),
    };
    let request = HotelsRequest::new(&args.location, &args.checkin, &args.checkout);
    let stay = request.validate()?;
    let hotels = service.hotels_for_stay(&stay);

    if args.json {
        let json = serde_json::to_string_pretty(&hotels).context("Failed to serialize hotels")?;
        println!("{}", json);
        return Ok(());
    }

    println!("\n🏨 Hotel Suggestions");
    println!("=======================");
    println!("Location: {}", stay.location);
    println!(
        "Dates: {} to {} ({} night(s))",
        stay.check_in,
        stay.check_out,
        stay.nights()
    );
    if let Some(seed) = service.seed() {
        println!("Seed: {}", seed);
    }
    println!("=======================\n");

    println!("Found {} hotel(s)\n", hotels.len());
    for (i, hotel) in hotels.iter().take(args.limit).enumerate() {
        println!("{}. {} ({})", i + 1, hotel.name, hotel.hotel_type.as_str_name());
        println!("   {}", hotel.address);
        println!("   Area: {}", hotel.location);
        println!(
            "   Price: ${:.2}/night, ${:.2} total",
            hotel.price_per_night, hotel.total_price
        );
        println!("   Rating: {:.1}", hotel.rating);
        let amenities: Vec<&str> = hotel.amenities.iter().map(|a| a.as_str_name()).collect();
        println!("   Amenities: {}", amenities.join(", "));
        println!("   Rooms left: {}", hotel.available_rooms);
        println!();
    }
    Ok(())
}
