//! Basics 4: Structs
//! Named structs, nesting, methods with `&self` / `&mut self`,
//! and ad-hoc records.
//!
//! Run with: cargo run --bin basics_structs

use colored::Colorize;
use serde::Serialize;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Address {
    pub street: String,
    pub city: String,
    pub country: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Person {
    pub name: String,
    pub age: u32,
    pub address: Address,
}

impl Person {
    pub fn greet(&self) -> String {
        format!(
            "Hello, my name is {} and I'm {} years old",
            self.name, self.age
        )
    }

    pub fn birthday(&mut self) {
        self.age += 1;
        debug!(name = %self.name, age = self.age, "birthday");
    }
}

fn main() -> Result<(), serde_json::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    println!("{}", "=== Struct Literals ===".bold());
    let address = Address {
        street: "123 Main St".to_string(),
        city: "Bangkok".to_string(),
        country: "Thailand".to_string(),
    };

    let mut person = Person {
        name: "John".to_string(),
        age: 25,
        address,
    };

    println!("Person: {:?}", person);
    println!("Address: {:?}", person.address);
    println!("As JSON:\n{}", serde_json::to_string_pretty(&person)?);

    println!("\n{}", "=== Methods ===".bold());
    println!("{}", person.greet());
    person.birthday();
    println!("After birthday: {} years old", person.age);

    println!("\n{}", "=== Struct Update Syntax ===".bold());
    let sibling = Person {
        name: "Jane".to_string(),
        ..person.clone()
    };
    println!("Sibling shares the address: {}", sibling.address == person.address);

    println!("\n{}", "=== Ad-hoc Records ===".bold());
    // One-off shapes: a local struct or a plain tuple.
    #[derive(Debug)]
    #[allow(dead_code)]
    struct Employee {
        id: u32,
        role: &'static str,
        active: bool,
    }
    let employee = Employee {
        id: 1,
        role: "Developer",
        active: true,
    };
    println!("Employee: {:?}", employee);

    let point = (3, -2);
    println!("Tuple record: x={}, y={}", point.0, point.1);

    Ok(())
}
