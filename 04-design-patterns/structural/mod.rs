//! Structural patterns: how values are composed.

pub mod adapter;
pub mod decorator;
pub mod facade;

pub use adapter::{Adaptee, Adapter, Target};
pub use decorator::{Coffee, MilkDecorator, SimpleCoffee, SugarDecorator, WhipDecorator};
pub use facade::{ComputerFacade, Cpu, HardDrive, Memory};
