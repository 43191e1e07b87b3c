//! Factory: callers ask for a payment kind and get back a trait object.

use std::str::FromStr;
use thiserror::Error;
use tracing::debug;

pub trait PaymentMethod {
    fn pay(&self, amount: f64) -> String;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CreditCard;

#[derive(Debug, Clone, Copy, Default)]
pub struct DebitCard;

#[derive(Debug, Clone, Copy, Default)]
pub struct PayPal;

// The amount is accepted for interface parity and not shown.
impl PaymentMethod for CreditCard {
    fn pay(&self, _amount: f64) -> String {
        "Paid using Credit Card".to_string()
    }
}

impl PaymentMethod for DebitCard {
    fn pay(&self, _amount: f64) -> String {
        "Paid using Debit Card".to_string()
    }
}

impl PaymentMethod for PayPal {
    fn pay(&self, _amount: f64) -> String {
        "Paid using PayPal".to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentType {
    CreditCard,
    DebitCard,
    PayPal,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PaymentTypeError {
    #[error("unknown payment type: {0:?}")]
    Unknown(String),
}

impl FromStr for PaymentType {
    type Err = PaymentTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace(['-', '_', ' '], "").as_str() {
            "creditcard" => Ok(Self::CreditCard),
            "debitcard" => Ok(Self::DebitCard),
            "paypal" => Ok(Self::PayPal),
            _ => Err(PaymentTypeError::Unknown(s.to_string())),
        }
    }
}

/// The enum is closed, so every variant maps to an implementation.
pub fn payment_factory(kind: PaymentType) -> Box<dyn PaymentMethod> {
    debug!(?kind, "building payment method");
    match kind {
        PaymentType::CreditCard => Box::new(CreditCard),
        PaymentType::DebitCard => Box::new(DebitCard),
        PaymentType::PayPal => Box::new(PayPal),
    }
}
