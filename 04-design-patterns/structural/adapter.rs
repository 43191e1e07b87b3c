//! Adapter: makes an existing type usable where a different trait is expected.

/// The interface callers expect.
pub trait Target {
    fn request(&self) -> String;
}

/// An existing type with an incompatible method.
#[derive(Debug, Clone, Copy, Default)]
pub struct Adaptee;

impl Adaptee {
    pub fn specific_request(&self) -> String {
        "Specific request from Adaptee".to_string()
    }
}

#[derive(Debug, Clone, Default)]
pub struct Adapter {
    adaptee: Adaptee,
}

impl Adapter {
    pub fn new(adaptee: Adaptee) -> Self {
        Self { adaptee }
    }
}

impl Target for Adapter {
    fn request(&self) -> String {
        format!("Adapter: {}", self.adaptee.specific_request())
    }
}
