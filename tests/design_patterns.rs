// Drives the pattern catalog through its public API only.

use design_patterns::behavioral::{
    BitcoinStrategy, CreditCardStrategy, LogEntry, LogLevel, LoggerChain, PayPalStrategy, PaymentStrategy,
    ShoppingCart, TemperatureDisplay, TemperatureLogger, WeatherStation,
};
use design_patterns::code_point_string;
use design_patterns::creational::{payment_factory, Director, InstanceCell, PaymentType};
use design_patterns::structural::{
    Adaptee, Adapter, Coffee, ComputerFacade, MilkDecorator, SimpleCoffee, SugarDecorator, Target, WhipDecorator,
};
use rstest::rstest;
use std::sync::{Arc, Mutex};

#[rstest]
#[case(PaymentType::CreditCard, "Paid using Credit Card")]
#[case(PaymentType::DebitCard, "Paid using Debit Card")]
#[case(PaymentType::PayPal, "Paid using PayPal")]
fn factory_builds_each_payment_method(#[case] kind: PaymentType, #[case] expected: &str) {
    assert_eq!(payment_factory(kind).pay(10.0), expected);
}

#[test]
fn singleton_handles_share_one_counter() {
    let cell = InstanceCell::new();
    let first = cell.get_instance();
    first.increment_count();
    first.increment_count();
    assert_eq!(cell.get_instance().count(), 2);
}

#[test]
fn director_presets_are_independent_values() {
    let director = Director::new();
    let mut gaming = director.build_gaming_pc();
    let office = director.build_office_pc();
    gaming.ram = 64;
    assert_eq!(office.ram, 16);
    assert_eq!(director.build_gaming_pc().ram, 32);
}

#[test]
fn adapter_satisfies_target() {
    let targets: Vec<Box<dyn Target>> = vec![Box::new(Adapter::new(Adaptee))];
    assert_eq!(targets[0].request(), "Adapter: Specific request from Adaptee");
}

#[rstest]
#[case(vec![], 1.0, "Simple coffee")]
#[case(vec!["milk"], 1.5, "Simple coffee, milk")]
#[case(vec!["milk", "sugar"], 1.7, "Simple coffee, milk, sugar")]
#[case(vec!["whip", "sugar", "milk"], 2.4, "Simple coffee, whip, sugar, milk")]
fn decorators_stack(#[case] toppings: Vec<&str>, #[case] cost: f64, #[case] description: &str) {
    let mut coffee: Box<dyn Coffee> = Box::new(SimpleCoffee);
    for topping in toppings {
        coffee = match topping {
            "milk" => Box::new(MilkDecorator::new(coffee)),
            "sugar" => Box::new(SugarDecorator::new(coffee)),
            "whip" => Box::new(WhipDecorator::new(coffee)),
            other => panic!("unknown topping {other}"),
        };
    }
    assert!((coffee.cost() - cost).abs() < 1e-9);
    assert_eq!(coffee.description(), description);
}

#[test]
fn facade_boot_sequence_has_four_steps() {
    let steps = ComputerFacade::new().start();
    assert_eq!(steps.len(), 4);
    assert_eq!(steps[0], "CPU: Freezing...");
    assert_eq!(steps[3], "CPU: Executing...");
}

#[test]
fn weather_station_updates_every_observer() {
    let mut station = WeatherStation::new();
    let display = Arc::new(Mutex::new(TemperatureDisplay::new("Lobby")));
    let logger = Arc::new(Mutex::new(TemperatureLogger::new()));
    station.register_observer(display.clone());
    let logger_id = station.register_observer(logger.clone());

    station.set_temperature(25.0);
    station.remove_observer(logger_id);
    station.set_temperature(72.0);

    assert_eq!(
        display.lock().unwrap().last_line(),
        Some("Display Lobby shows temperature: H")
    );
    assert_eq!(logger.lock().unwrap().readings(), &[25.0]);
    assert_eq!(station.temperature(), 72.0);
}

#[rstest]
#[case(Box::new(CreditCardStrategy::new("1234", "123")), "Credit Card")]
#[case(Box::new(PayPalStrategy::new("test@test.com", "password")), "PayPal")]
#[case(Box::new(BitcoinStrategy::new("bc1q")), "Bitcoin")]
fn cart_checks_out_with_current_strategy(#[case] strategy: Box<dyn PaymentStrategy>, #[case] via: &str) {
    let cart = ShoppingCart::new(strategy);
    assert_eq!(
        cart.checkout(100.0),
        format!("Paid {} using {}", code_point_string(100), via)
    );
}

#[rstest]
#[case(LogLevel::Info, "Info: ")]
#[case(LogLevel::Debug, "Debug: ")]
#[case(LogLevel::Error, "Error: ")]
fn logger_chain_prefixes_by_level(#[case] level: LogLevel, #[case] prefix: &str) {
    let chain = LoggerChain::new();
    let line = chain.log(&LogEntry::new(level, "msg")).unwrap();
    assert_eq!(line, format!("{prefix}msg"));
}
