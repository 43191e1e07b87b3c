//! Basics 2: Control Flow
//! if/else, loops, match and labeled break/continue.
//!
//! Run with: cargo run --bin basics_control_flow

use colored::Colorize;
use tracing_subscriber::EnvFilter;

pub fn life_stage(age: u32) -> &'static str {
    if age >= 18 {
        "adult"
    } else {
        "minor"
    }
}

pub fn letter_grade(score: u32) -> char {
    if score >= 90 {
        'A'
    } else if score >= 80 {
        'B'
    } else {
        'C'
    }
}

pub fn day_kind(day: &str) -> &'static str {
    match day {
        "Monday" => "Start of work week",
        "Friday" => "TGIF!",
        "Saturday" | "Sunday" => "Weekend!",
        _ => "Regular work day",
    }
}

/// Match on ranges instead of an expressionless `switch`.
pub fn feedback(score: u32) -> &'static str {
    match score {
        90.. => "Excellent!",
        80..=89 => "Good job!",
        _ => "Keep practicing!",
    }
}

/// Counts upward from 0, skipping 2 and stopping at 4 or `limit`.
pub fn skip_and_stop(limit: u32) -> Vec<u32> {
    let mut seen = Vec::new();
    for i in 0..limit {
        if i == 2 {
            continue;
        }
        if i == 4 {
            break;
        }
        seen.push(i);
    }
    seen
}

/// First pair (row, col) whose product equals `target`, using a labeled break.
pub fn find_product(rows: u32, cols: u32, target: u32) -> Option<(u32, u32)> {
    let mut found = None;
    'outer: for r in 1..=rows {
        for c in 1..=cols {
            if r * c == target {
                found = Some((r, c));
                break 'outer;
            }
        }
    }
    found
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    println!("{}", "=== If-Else Examples ===".bold());
    let age = 18;
    println!("You are an {}", life_stage(age));

    // `if` is an expression, so the binding can live in the condition's scope.
    let score = 85;
    println!("Grade: {}", letter_grade(score));

    println!("\n{}", "=== Loop Examples ===".bold());
    println!("Basic for loop:");
    for i in 0..3 {
        println!("Count: {}", i);
    }

    println!("\nWhile loop:");
    let mut count = 0;
    while count < 3 {
        println!("Count: {}", count);
        count += 1;
    }

    println!("\nIterating with indices:");
    let fruits = ["apple", "banana", "orange"];
    for (index, fruit) in fruits.iter().enumerate() {
        println!("Index: {}, Fruit: {}", index, fruit);
    }

    println!("\n{}", "=== Match Examples ===".bold());
    println!("{}", day_kind("Monday"));
    println!("{}", feedback(score));

    println!("\n{}", "=== Break and Continue Examples ===".bold());
    for n in skip_and_stop(5) {
        println!("Current number: {}", n);
    }

    println!("\n{}", "=== Labeled Break ===".bold());
    match find_product(5, 5, 12) {
        Some((r, c)) => println!("First pair with product 12: {} x {}", r, c),
        None => println!("No pair with product 12"),
    }
}
