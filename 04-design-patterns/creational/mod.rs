//! Creational patterns: how values get made.

pub mod builder;
pub mod factory;
pub mod singleton;

pub use builder::{Computer, ComputerBuilder, Director};
pub use factory::{payment_factory, CreditCard, DebitCard, PayPal, PaymentMethod, PaymentType, PaymentTypeError};
pub use singleton::{InstanceCell, Singleton};
