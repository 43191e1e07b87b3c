//! Behavioral patterns: how values communicate.

pub mod chain_of_responsibility;
pub mod observer;
pub mod strategy;

pub use chain_of_responsibility::{DebugLogger, ErrorLogger, InfoLogger, LogEntry, LogLevel, Logger, LoggerChain};
pub use observer::{Observer, ObserverId, SharedObserver, TemperatureDisplay, TemperatureLogger, WeatherStation};
pub use strategy::{BitcoinStrategy, CreditCardStrategy, PayPalStrategy, PaymentStrategy, ShoppingCart};
