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

//! CLI for synthetic flight suggestions.

use anyhow::{Context, Result};
use clap::Parser;
use itinerant_travel_suggest::{FlightOffer, FlightSuggestions, FlightsRequest, SuggestionService};
use std::cmp::max;

/// CLI arguments
#[derive(Parser, Debug)]
#[command(name = "itinerant-flights")]
#[command(author, version, about, long_about = None)]
struct CliArgs {
    /// Origin city (e.g., "New York")
    #[arg(short, long)]
    from: String,

    /// Destination city (e.g., "London")
    #[arg(short, long)]
    to: String,

    /// Departure date (YYYY-MM-DD)
    #[arg(short, long)]
    date: String,

    /// Return date for round trips (YYYY-MM-DD)
    #[arg(short = 'R', long)]
    return_date: Option<String>,

    /// Seed for reproducible suggestions
    #[arg(long)]
    seed: Option<u64>,

    /// Print the raw JSON response
    #[arg(long)]
    json: bool,

    /// Verbose output
    #[arg(short, long, default_value = "false")]
    verbose: bool,
}

/// Configure logging based on verbosity level
fn setup_logging(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

/// Format duration in hours/minutes.
fn fmt_duration(minutes: i64) -> String {
    let hrs = minutes / 60;
    let mins = minutes % 60;
    if mins == 0 {
        format!("{}h", hrs)
    } else if hrs == 0 {
        format!("{}m", mins)
    } else {
        format!("{}h {:02}m", hrs, mins)
    }
}

fn fmt_times(offer: &FlightOffer) -> String {
    let dep = offer.departure.format("%H:%M");
    let arr = offer.arrival.format("%H:%M");
    let plus_days = (offer.arrival.date() - offer.departure.date()).num_days();
    if plus_days > 0 {
        format!("{} → {}+{}", dep, arr, plus_days)
    } else {
        format!("{} → {}", dep, arr)
    }
}

/// "direct" or "1 stop: 1h 05m@DEN"
fn fmt_stops(offer: &FlightOffer) -> String {
    match &offer.connection {
        None => "direct".to_string(),
        Some(c) => format!(
            "1 stop: {}@{}",
            fmt_duration(c.connection_duration_minutes),
            c.connection_airport.code
        ),
    }
}

/// Get terminal width for responsive tables
fn get_terminal_width() -> usize {
    term_size::dimensions().map(|(w, _)| w).unwrap_or(100)
}

fn dash_bar() -> String {
    "-".repeat(get_terminal_width().min(100))
}

/// Calculate terminal-aware column widths
fn calc_column_widths(offers: &[FlightOffer]) -> (usize, usize, usize, usize) {
    let mut max_airline = 7;
    let mut max_times = 15;
    let mut max_duration = 10;
    let mut max_stops = 10;

    for offer in offers {
        max_airline = max(max_airline, offer.airline.len() + offer.flight_number.len() + 1);
        max_times = max(max_times, fmt_times(offer).chars().count());
        max_duration = max(max_duration, fmt_duration(offer.duration_minutes).len());
        max_stops = max(max_stops, fmt_stops(offer).len());
    }

    let available_width = get_terminal_width().saturating_sub(30);
    let total_content = max_airline + max_times + max_duration + max_stops;
    if total_content > available_width && available_width > 50 {
        let ratio = available_width as f64 / total_content as f64;
        max_airline = max((max_airline as f64 * ratio).floor() as usize, 4);
        max_times = max((max_times as f64 * ratio).floor() as usize, 10);
        max_duration = max((max_duration as f64 * ratio).floor() as usize, 5);
        max_stops = max((max_stops as f64 * ratio).floor() as usize, 10);
    }

    (max_airline, max_times, max_duration, max_stops)
}

fn render_leg(title: &str, offers: &[FlightOffer]) {
    let Some(first) = offers.first() else {
        return;
    };

    println!(
        "\n🛫  {}: {} ({}) → {} ({}) on {}",
        title,
        first.from_airport.city,
        first.from_airport.code,
        first.to_airport.city,
        first.to_airport.code,
        first.departure.date()
    );
    println!("{}", dash_bar());

    let (aw, tw, dw, sw) = calc_column_widths(offers);
    println!(
        "  {:>3}  {:<aw$}  {:<tw$}  {:<dw$}  {:<sw$}  {:<15}  PRICE",
        "#", "FLIGHT", "DEP → ARR", "DURATION", "STOPS", "CABIN"
    );
    println!("{}", dash_bar());

    for (i, offer) in offers.iter().enumerate() {
        let flight = format!("{} {}", offer.airline, offer.flight_number);
        println!(
            "  {:>3}  {:<aw$}  {:<tw$}  {:<dw$}  {:<sw$}  {:<15}  ${:.2} ({} seats)",
            i + 1,
            flight,
            fmt_times(offer),
            fmt_duration(offer.duration_minutes),
            fmt_stops(offer),
            offer.cabin_class.as_str_name(),
            offer.price,
            offer.available_seats
        );
    }
}

fn render_results(result: &FlightSuggestions) {
    let cheapest = result
        .departure_flights
        .iter()
        .chain(&result.return_flights)
        .map(|f| f.price)
        .fold(f64::INFINITY, f64::min);

    println!("{}", "=".repeat(get_terminal_width().min(100)));
    println!(
        "📊 Total Flights: {} outbound, {} return",
        result.departure_flights.len(),
        result.return_flights.len()
    );
    if cheapest.is_finite() {
        println!("💰 Best Price:  ${:.2}", cheapest);
    }

    render_leg("Outbound", &result.departure_flights);
    render_leg("Return", &result.return_flights);
}

fn main() -> Result<()> {
    let args = CliArgs::parse();
    setup_logging(args.verbose);
    tracing::debug!("Args: {:?}", args);

    let service = match args.seed {
        Some(seed) => SuggestionService::with_seed(seed),
        None => SuggestionService::new(),
    };

    let mut request = FlightsRequest::new(&args.from, &args.to, &args.date);
    if let Some(rd) = &args.return_date {
        request = request.return_date(rd);
    }

    let result = service.suggest_flights(&request)?;

    if args.json {
        let json = serde_json::to_string_pretty(&result).context("Failed to serialize flights")?;
        println!("{}", json);
        return Ok(());
    }

    render_results(&result);
    Ok(())
}
