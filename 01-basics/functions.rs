//! Basics 3: Functions, Closures and Methods
//!
//! Run with: cargo run --bin basics_functions

use colored::Colorize;
use thiserror::Error;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

#[derive(Error, Debug, PartialEq)]
pub enum MathError {
    #[error("division by zero")]
    DivisionByZero,
}

pub fn add(a: i32, b: i32) -> i32 {
    a + b
}

pub fn divide(a: f64, b: f64) -> Result<f64, MathError> {
    if b == 0.0 {
        warn!(a, "refusing to divide by zero");
        return Err(MathError::DivisionByZero);
    }
    Ok(a / b)
}

/// Returns `(area, perimeter)`; tuples stand in for named return values.
pub fn rectangle(width: f64, height: f64) -> (f64, f64) {
    let area = width * height;
    let perimeter = 2.0 * (width + height);
    (area, perimeter)
}

/// Slices replace variadic parameters.
pub fn sum(numbers: &[i32]) -> i32 {
    numbers.iter().sum()
}

pub fn calculate<F>(operation: F, a: i32, b: i32) -> i32
where
    F: Fn(i32, i32) -> i32,
{
    operation(a, b)
}

pub fn counter() -> impl FnMut() -> u32 {
    let mut count = 0;
    move || {
        count += 1;
        count
    }
}

#[derive(Debug, Clone)]
pub struct Person {
    pub first_name: String,
    pub last_name: String,
}

impl Person {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn change_first_name(&mut self, new_name: impl Into<String>) {
        let new_name = new_name.into();
        debug!(old = %self.first_name, new = %new_name, "renaming");
        self.first_name = new_name;
    }
}

/// Runs its message when dropped, the scope-exit counterpart of `defer`.
pub struct Deferred {
    message: &'static str,
}

impl Drop for Deferred {
    fn drop(&mut self) {
        println!("{}", self.message);
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    println!("{}", "=== Basic Function ===".bold());
    println!("5 + 3 = {}", add(5, 3));

    println!("\n{}", "=== Result Return Values ===".bold());
    match divide(10.0, 2.0) {
        Ok(result) => println!("10 / 2 = {:.2}", result),
        Err(e) => println!("Error: {}", e),
    }
    if let Err(e) = divide(1.0, 0.0) {
        println!("1 / 0 -> Error: {}", e.to_string().red());
    }

    println!("\n{}", "=== Tuple Return Values ===".bold());
    let (area, perimeter) = rectangle(5.0, 3.0);
    println!("Rectangle 5x3 - Area: {:.2}, Perimeter: {:.2}", area, perimeter);

    println!("\n{}", "=== Slice Parameters ===".bold());
    println!("Sum of 1,2,3: {}", sum(&[1, 2, 3]));
    let numbers = vec![1, 2, 3, 4, 5];
    println!("Sum of vec: {}", sum(&numbers));

    println!("\n{}", "=== Function as Parameter ===".bold());
    let multiply = |a, b| a * b;
    println!("Calculate multiply 4 * 5: {}", calculate(multiply, 4, 5));
    println!("Calculate with fn item add(4, 5): {}", calculate(add, 4, 5));

    println!("\n{}", "=== Closure ===".bold());
    let mut increment = counter();
    println!("Count: {}", increment());
    println!("Count: {}", increment());
    println!("Count: {}", increment());

    println!("\n{}", "=== Methods ===".bold());
    let mut person = Person::new("John", "Doe");
    println!("Full name: {}", person.full_name());
    person.change_first_name("Jane");
    println!("After name change: {}", person.full_name());

    println!("\n{}", "=== Drop Guard (defer) ===".bold());
    let _guard = Deferred {
        message: "This will be printed last",
    };
    println!("This will be printed first");
}
