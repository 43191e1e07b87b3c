//! Basics 6: Error Handling
//! Typed errors with thiserror, context at the boundary with anyhow,
//! and catching a panic with catch_unwind.
//!
//! Run with: cargo run --bin basics_error_handling

use anyhow::Context;
use colored::Colorize;
use std::panic::{self, AssertUnwindSafe};
use thiserror::Error;
use tracing::warn;
use tracing_subscriber::EnvFilter;

/// Carries both operands so the caller can report exactly what failed.
#[derive(Error, Debug, PartialEq)]
#[error("{message}: {dividend} / {divisor}")]
pub struct DivisionError {
    pub dividend: i32,
    pub divisor: i32,
    pub message: String,
}

#[derive(Error, Debug, PartialEq)]
pub enum MathError {
    #[error("cannot calculate square root of negative number")]
    NegativeSquareRoot,
    #[error(transparent)]
    Division(#[from] DivisionError),
}

pub fn divide(dividend: i32, divisor: i32) -> Result<i32, DivisionError> {
    if divisor == 0 {
        warn!(dividend, "division by zero");
        return Err(DivisionError {
            dividend,
            divisor,
            message: "cannot divide by zero".to_string(),
        });
    }
    // i32::MIN / -1 is the one quotient that does not fit.
    dividend.checked_div(divisor).ok_or_else(|| DivisionError {
        dividend,
        divisor,
        message: "quotient overflows i32".to_string(),
    })
}

pub fn square_root(x: f64) -> Result<f64, MathError> {
    if x < 0.0 {
        return Err(MathError::NegativeSquareRoot);
    }
    Ok(x.sqrt())
}

/// `(a / b).sqrt()`, both failure kinds funnelled into `MathError` by `?`.
pub fn root_of_quotient(a: i32, b: i32) -> Result<f64, MathError> {
    let quotient = divide(a, b)?;
    square_root(f64::from(quotient))
}

/// Outcome of each adjacent pair `(numbers[i], numbers[i + 1])`.
pub fn pairwise_divide(numbers: &[i32]) -> Vec<Result<i32, DivisionError>> {
    numbers.windows(2).map(|w| divide(w[0], w[1])).collect()
}

/// Runs `f`, turning a panic into its message.
pub fn recover<F, T>(f: F) -> Result<T, String>
where
    F: FnOnce() -> T,
{
    panic::catch_unwind(AssertUnwindSafe(f)).map_err(|payload| {
        if let Some(s) = payload.downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = payload.downcast_ref::<String>() {
            s.clone()
        } else {
            "unknown panic payload".to_string()
        }
    })
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    println!("{}", "=== Basic Error Handling ===".bold());
    match divide(10, 0) {
        Ok(result) => println!("Result: {}", result),
        Err(e) => println!("Error: {}", e.to_string().red()),
    }

    println!("\n{}", "=== Multiple Error Cases ===".bold());
    let numbers = [10, 0, 5, 2];
    for (pair, outcome) in numbers.windows(2).zip(pairwise_divide(&numbers)) {
        match outcome {
            Ok(result) => println!("{} / {} = {}", pair[0], pair[1], result),
            Err(e) => println!("Custom division error: {}", e),
        }
    }

    println!("\n{}", "=== Error Enums and ? ===".bold());
    match square_root(-4.0) {
        Ok(root) => println!("Square root: {}", root),
        Err(e) => println!("Square root error: {}", e),
    }
    match root_of_quotient(32, 2) {
        Ok(root) => println!("sqrt(32 / 2) = {}", root),
        Err(e) => println!("Error: {}", e),
    }
    if let Err(MathError::Division(inner)) = root_of_quotient(1, 0) {
        println!("Matched the wrapped error: divisor was {}", inner.divisor);
    }

    println!("\n{}", "=== Context at the Boundary (anyhow) ===".bold());
    let parsed: i32 = "42".parse().context("parsing the demo input")?;
    let halved = divide(parsed, 2).context("halving the parsed input")?;
    println!("42 / 2 = {}", halved);
    if let Err(e) = divide(parsed, 0).context("dividing the parsed input by zero") {
        println!("With context: {:#}", e);
    }

    println!("\n{}", "=== Panic and Recover ===".bold());
    // Keep the default hook from printing a backtrace banner for the demo.
    let default_hook = panic::take_hook();
    panic::set_hook(Box::new(|_| {}));
    let outcome: Result<(), String> = recover(|| panic!("something went wrong!"));
    panic::set_hook(default_hook);
    match outcome {
        Ok(()) => println!("This won't be printed"),
        Err(msg) => println!("Recovered from panic: {}", msg.yellow()),
    }
    println!("Execution continues after the recovered panic");

    Ok(())
}
