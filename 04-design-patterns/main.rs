//! Design Patterns: a tour of the `design_patterns` library.
//!
//! Run with: cargo run --bin design_patterns_demo

use anyhow::Context;
use colored::Colorize;
use design_patterns::behavioral::{
    BitcoinStrategy, CreditCardStrategy, LogEntry, LogLevel, LoggerChain, PayPalStrategy, ShoppingCart,
    TemperatureDisplay, WeatherStation,
};
use design_patterns::creational::{payment_factory, Director, InstanceCell, PaymentType};
use design_patterns::structural::{
    Adaptee, Adapter, Coffee, ComputerFacade, MilkDecorator, SimpleCoffee, SugarDecorator, Target, WhipDecorator,
};
use std::sync::{Arc, Mutex};
use tracing_subscriber::EnvFilter;

fn creational() -> anyhow::Result<()> {
    println!("{}", "=== Singleton Pattern ===".bold());
    let cell = InstanceCell::new();
    let singleton1 = cell.get_instance();
    let singleton2 = cell.get_instance();
    singleton1.increment_count();
    println!("Singleton1 count: {}", singleton1.count());
    println!("Singleton2 count: {}", singleton2.count());
    println!("Same instance? {}", Arc::ptr_eq(&singleton1, &singleton2));

    println!("\n{}", "=== Factory Pattern ===".bold());
    println!("{}", payment_factory(PaymentType::CreditCard).pay(100.0));
    println!("{}", payment_factory(PaymentType::PayPal).pay(50.0));
    let by_name: PaymentType = "debit card".parse().context("choosing a payment method")?;
    println!("{}", payment_factory(by_name).pay(25.0));
    if let Err(e) = "cash".parse::<PaymentType>() {
        println!("{}", e.to_string().red());
    }

    println!("\n{}", "=== Builder Pattern ===".bold());
    let director = Director::new();
    let gaming = director.build_gaming_pc();
    let office = director.build_office_pc();
    println!("Gaming PC: {}", gaming);
    println!("Office PC: {}", office);
    println!(
        "Gaming PC as JSON: {}",
        serde_json::to_string(&gaming).context("serializing the gaming PC")?
    );
    Ok(())
}

fn structural() {
    println!("\n{}", "=== Adapter Pattern ===".bold());
    let adapter = Adapter::new(Adaptee);
    println!("{}", adapter.request());

    println!("\n{}", "=== Decorator Pattern ===".bold());
    let coffee = SugarDecorator::new(Box::new(MilkDecorator::new(Box::new(SimpleCoffee))));
    println!("Cost: {:.2}, Description: {}", coffee.cost(), coffee.description());
    let fancy = WhipDecorator::new(Box::new(coffee));
    println!("Cost: {:.2}, Description: {}", fancy.cost(), fancy.description());

    println!("\n{}", "=== Facade Pattern ===".bold());
    for step in ComputerFacade::new().start() {
        println!("{}", step);
    }
}

fn behavioral() {
    println!("\n{}", "=== Observer Pattern ===".bold());
    let mut station = WeatherStation::new();
    let display1 = Arc::new(Mutex::new(TemperatureDisplay::new("Display 1")));
    let display2 = Arc::new(Mutex::new(TemperatureDisplay::new("Display 2")));
    station.register_observer(display1.clone());
    let second = station.register_observer(display2.clone());
    station.set_temperature(25.0);
    for display in [&display1, &display2] {
        if let Ok(display) = display.lock() {
            println!("{:?}", display.last_line());
        }
    }
    station.remove_observer(second);
    println!("Observers after removal: {}", station.observer_count());

    println!("\n{}", "=== Strategy Pattern ===".bold());
    let mut cart = ShoppingCart::new(Box::new(CreditCardStrategy::new("1234", "123")));
    println!("{}", cart.checkout(100.0));
    cart.set_payment_strategy(Box::new(PayPalStrategy::new("test@test.com", "password")));
    println!("{}", cart.checkout(50.0));
    cart.set_payment_strategy(Box::new(BitcoinStrategy::new("bc1qexample")));
    println!("{}", cart.checkout(75.0));

    println!("\n{}", "=== Chain of Responsibility Pattern ===".bold());
    let chain = LoggerChain::new();
    let entries = [
        LogEntry::new(LogLevel::Info, "This is an information."),
        LogEntry::new(LogLevel::Debug, "This is a debug information."),
        LogEntry::new(LogLevel::Error, "This is an error information."),
    ];
    for entry in &entries {
        match chain.log(entry) {
            Some(line) => println!("{}", line),
            None => println!("(unhandled {} entry)", entry.level),
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    creational()?;
    structural();
    behavioral();
    Ok(())
}
