//! Strategy: the cart delegates payment to whichever strategy it holds,
//! and the strategy can be swapped between checkouts.

use crate::code_point_string;
use tracing::{debug, warn};

pub trait PaymentStrategy {
    fn pay(&self, amount: f64) -> String;
}

fn receipt(amount: f64, via: &str) -> String {
    format!("Paid {} using {}", code_point_string(amount as i64), via)
}

#[derive(Debug, Clone)]
pub struct CreditCardStrategy {
    card_number: String,
    cvv: String,
}

impl CreditCardStrategy {
    pub fn new(card_number: impl Into<String>, cvv: impl Into<String>) -> Self {
        Self {
            card_number: card_number.into(),
            cvv: cvv.into(),
        }
    }

    fn last_four(&self) -> &str {
        let start = self.card_number.len().saturating_sub(4);
        self.card_number.get(start..).unwrap_or("")
    }
}

impl PaymentStrategy for CreditCardStrategy {
    fn pay(&self, amount: f64) -> String {
        if !matches!(self.cvv.len(), 3 | 4) {
            warn!("credit card cvv has unexpected length");
        }
        debug!(card = self.last_four(), amount, "charging credit card");
        receipt(amount, "Credit Card")
    }
}

#[derive(Debug, Clone)]
pub struct PayPalStrategy {
    email: String,
    password: String,
}

impl PayPalStrategy {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

impl PaymentStrategy for PayPalStrategy {
    fn pay(&self, amount: f64) -> String {
        if self.password.is_empty() {
            warn!(email = %self.email, "paypal account has no password");
        }
        debug!(email = %self.email, amount, "charging paypal");
        receipt(amount, "PayPal")
    }
}

#[derive(Debug, Clone)]
pub struct BitcoinStrategy {
    address: String,
}

impl BitcoinStrategy {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
        }
    }
}

impl PaymentStrategy for BitcoinStrategy {
    fn pay(&self, amount: f64) -> String {
        debug!(address = %self.address, amount, "sending bitcoin");
        receipt(amount, "Bitcoin")
    }
}

pub struct ShoppingCart {
    strategy: Box<dyn PaymentStrategy>,
}

impl ShoppingCart {
    pub fn new(strategy: Box<dyn PaymentStrategy>) -> Self {
        Self { strategy }
    }

    pub fn set_payment_strategy(&mut self, strategy: Box<dyn PaymentStrategy>) {
        self.strategy = strategy;
    }

    pub fn checkout(&self, amount: f64) -> String {
        self.strategy.pay(amount)
    }
}
