//! Builder: step-by-step construction with a fluent, consuming API.

use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Computer {
    pub cpu: String,
    /// Gigabytes.
    pub ram: u32,
    /// Gigabytes.
    pub storage: u32,
    pub gpu: String,
    pub bluetooth: bool,
}

impl fmt::Display for Computer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{CPU:{} RAM:{} Storage:{} GPU:{} Bluetooth:{}}}",
            self.cpu, self.ram, self.storage, self.gpu, self.bluetooth
        )
    }
}

/// Each setter takes `self` by value, so a builder cannot be reused after
/// `build` and two builds never share state.
#[derive(Debug, Clone, Default)]
pub struct ComputerBuilder {
    computer: Computer,
}

impl ComputerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cpu(mut self, cpu: impl Into<String>) -> Self {
        self.computer.cpu = cpu.into();
        self
    }

    pub fn ram(mut self, ram: u32) -> Self {
        self.computer.ram = ram;
        self
    }

    pub fn storage(mut self, storage: u32) -> Self {
        self.computer.storage = storage;
        self
    }

    pub fn gpu(mut self, gpu: impl Into<String>) -> Self {
        self.computer.gpu = gpu.into();
        self
    }

    pub fn bluetooth(mut self, bluetooth: bool) -> Self {
        self.computer.bluetooth = bluetooth;
        self
    }

    pub fn build(self) -> Computer {
        self.computer
    }
}

/// Knows the recipes for common configurations.
#[derive(Debug, Clone, Copy, Default)]
pub struct Director;

impl Director {
    pub fn new() -> Self {
        Self
    }

    pub fn build_gaming_pc(&self) -> Computer {
        ComputerBuilder::new()
            .cpu("Intel i9")
            .ram(32)
            .storage(2000)
            .gpu("RTX 4080")
            .bluetooth(true)
            .build()
    }

    pub fn build_office_pc(&self) -> Computer {
        ComputerBuilder::new()
            .cpu("Intel i5")
            .ram(16)
            .storage(512)
            .gpu("Integrated")
            .bluetooth(true)
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_director_presets() {
        let director = Director::new();
        let gaming = director.build_gaming_pc();
        assert_eq!(gaming.cpu, "Intel i9");
        assert_eq!(gaming.ram, 32);
        assert_eq!(gaming.storage, 2000);
        assert_eq!(gaming.gpu, "RTX 4080");
        assert!(gaming.bluetooth);

        let office = director.build_office_pc();
        assert_eq!(office.cpu, "Intel i5");
        assert_eq!(office.ram, 16);
        assert_eq!(office.storage, 512);
        assert_eq!(office.gpu, "Integrated");
    }

    #[test]
    fn test_builds_are_independent() {
        let director = Director::new();
        let gaming = director.build_gaming_pc();
        let _office = director.build_office_pc();
        // The office build must not have overwritten the gaming one.
        assert_eq!(gaming.cpu, "Intel i9");
    }

    #[test]
    fn test_unset_fields_default() {
        let pc = ComputerBuilder::new().cpu("Ryzen 7").build();
        assert_eq!(pc.ram, 0);
        assert!(pc.gpu.is_empty());
        assert!(!pc.bluetooth);
    }

    #[test]
    fn test_display_and_json() {
        let pc = Director::new().build_office_pc();
        assert_eq!(
            pc.to_string(),
            "{CPU:Intel i5 RAM:16 Storage:512 GPU:Integrated Bluetooth:true}"
        );
        let json = serde_json::to_value(&pc).unwrap();
        assert_eq!(json["gpu"], "Integrated");
        assert_eq!(json["ram"], 16);
    }
}
