//! Basics 1: Variables, Constants and Scalar Types
//!
//! Run with: cargo run --bin basics_variables

use colored::Colorize;
use tracing::debug;
use tracing_subscriber::EnvFilter;

const MAX_USERS: u32 = 100;

/// Name of the static type behind a value, e.g. `i32` or `&str`.
pub fn type_name_of<T: ?Sized>(_value: &T) -> &'static str {
    std::any::type_name::<T>()
}

/// The "zero values" Rust hands out through `Default`.
#[derive(Debug, Default, PartialEq)]
pub struct Defaults {
    pub integer: i64,
    pub float: f64,
    pub text: String,
    pub flag: bool,
}

fn basic_bindings() {
    let name = "John";
    let age: u32 = 25;
    let salary = 50_000.0; // inferred as f64

    let (is_employed, company) = (true, "TechCorp");

    println!("Name: {}", name);
    println!("Age: {}", age);
    println!("Salary: {:.2}", salary);
    println!("Employed: {}", is_employed);
    println!("Company: {}", company);
    println!("MAX_USERS constant: {}", MAX_USERS);
}

fn data_types() {
    let integer_num: i64 = 42;
    let float_num = 2.5;
    let text = "Hello, Rust!";
    let is_true = true;
    let letter = 'R';

    println!("Integer: {} (Type: {})", integer_num, type_name_of(&integer_num));
    println!("Float: {} (Type: {})", float_num, type_name_of(&float_num));
    println!("String: {} (Type: {})", text, type_name_of(&text));
    println!("Boolean: {} (Type: {})", is_true, type_name_of(&is_true));
    println!("Char: {} (Type: {})", letter, type_name_of(&letter));
}

fn zero_values() {
    let defaults = Defaults::default();
    debug!(?defaults, "built default values");

    println!("Default Integer: {}", defaults.integer);
    println!("Default Float: {:.6}", defaults.float);
    println!("Default String: {:?}", defaults.text);
    println!("Default Boolean: {}", defaults.flag);
}

fn mutability_and_shadowing() {
    let mut counter = 0;
    counter += 1;
    println!("Mutable counter after += 1: {}", counter);

    // Shadowing rebinds the name, and may change the type.
    let spaces = "   ";
    let spaces = spaces.len();
    println!("Shadowed 'spaces' is now a number: {}", spaces);
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    println!("{}", "=== Basic Variables ===".bold());
    basic_bindings();

    println!("\n{}", "=== Data Types ===".bold());
    data_types();

    println!("\n{}", "=== Zero Values ===".bold());
    zero_values();

    println!("\n{}", "=== Mutability and Shadowing ===".bold());
    mutability_and_shadowing();
}
