//! Basics 8: A Tour of the Standard Library (and a little chrono)
//! Strings, math, time, and how Rust groups code into modules.
//!
//! Run with: cargo run --bin basics_packages

use chrono::{DateTime, Datelike, Duration, Local, TimeZone};
use colored::Colorize;
use tracing_subscriber::EnvFilter;

/// Modules are Rust's unit of code organization; `pub` controls what escapes.
mod geometry {
    pub fn circle_area(radius: f64) -> f64 {
        std::f64::consts::PI * radius * radius
    }

    pub mod units {
        pub fn cm_to_m(cm: f64) -> f64 {
            cm / 100.0
        }
    }
}

pub fn format_timestamp<Tz: TimeZone>(at: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    at.format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Renders a duration as `2h30m0s`.
pub fn human_duration(duration: Duration) -> String {
    let total = duration.num_seconds();
    format!("{}h{}m{}s", total / 3600, (total % 3600) / 60, total % 60)
}

fn strings() {
    let text = "  Hello, Rust Programming!  ";
    println!("Original: {:?}", text);
    println!("Trimmed: {:?}", text.trim());
    println!("Upper: {}", text.to_uppercase());
    println!("Lower: {}", text.to_lowercase());
    println!("Contains 'Rust': {}", text.contains("Rust"));
    println!("Replace: {}", text.replacen("Rust", "Rustlang", 1));
}

fn math() {
    println!("Pi: {:.5}", std::f64::consts::PI);
    println!("Square root of 16: {:.2}", 16f64.sqrt());
    println!("Power 2^3: {:.2}", 2f64.powf(3.0));
    println!("Absolute of -42: {}", (-42i32).abs());
    println!("Max of 10 and 5: {}", 10i32.max(5));
}

fn time() {
    let now = Local::now();
    println!("Current time: {}", now);
    println!("Year: {}", now.year());
    println!("Month: {}", now.format("%B"));
    println!("Day: {}", now.day());
    println!("Formatted time: {}", format_timestamp(&now));

    let tomorrow = now + Duration::hours(24);
    println!("Tomorrow: {}", format_timestamp(&tomorrow));

    let duration = Duration::hours(2) + Duration::minutes(30);
    println!("Duration: {}", human_duration(duration));
}

fn modules() {
    println!("Circle area (r=2): {:.3}", geometry::circle_area(2.0));
    println!("150cm in meters: {}", geometry::units::cm_to_m(150.0));
    println!("To split code into crates:");
    println!("1. Create a library with `cargo new --lib name`");
    println!("2. Add it under [dependencies] with a path or version");
    println!("3. Bring items into scope with `use name::item;`");
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    println!("{}", "=== String Examples ===".bold());
    strings();

    println!("\n{}", "=== Math Examples ===".bold());
    math();

    println!("\n{}", "=== Time Examples ===".bold());
    time();

    println!("\n{}", "=== Modules ===".bold());
    modules();
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_format_timestamp() {
        let at = Utc.with_ymd_and_hms(2024, 3, 9, 7, 5, 1).unwrap();
        assert_eq!(format_timestamp(&at), "2024-03-09 07:05:01");
    }

    #[test]
    fn test_human_duration() {
        let d = Duration::hours(2) + Duration::minutes(30);
        assert_eq!(human_duration(d), "2h30m0s");
    }

    #[test]
    fn test_module_paths() {
        assert_eq!(geometry::units::cm_to_m(150.0), 1.5);
        assert!((geometry::circle_area(1.0) - std::f64::consts::PI).abs() < 1e-12);
    }
}
