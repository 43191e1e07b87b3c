//! Facade: `ComputerFacade::start` hides the boot sequence across three
//! subsystems behind a single call.

use crate::code_point_string;
use tracing::debug;

#[derive(Debug, Clone, Copy, Default)]
pub struct Cpu;

impl Cpu {
    pub fn freeze(&self) -> String {
        "CPU: Freezing...".to_string()
    }

    pub fn jump(&self, position: &str) -> String {
        format!("CPU: Jumping to {}", position)
    }

    pub fn execute(&self) -> String {
        "CPU: Executing...".to_string()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Memory;

impl Memory {
    pub fn load(&self, position: &str, data: &str) -> String {
        format!("Memory: Loading {} to {}", data, position)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct HardDrive;

impl HardDrive {
    /// The size is rendered as a single code point (see [`code_point_string`]).
    pub fn read(&self, position: &str, size: i64) -> String {
        format!(
            "HardDrive: Reading data of size {} from {}",
            code_point_string(size),
            position
        )
    }
}

#[derive(Debug, Clone, Default)]
pub struct ComputerFacade {
    cpu: Cpu,
    memory: Memory,
    hard_drive: HardDrive,
}

impl ComputerFacade {
    pub fn new() -> Self {
        Self::default()
    }

    /// Direct access for callers that need more than the boot sequence.
    pub fn hard_drive(&self) -> &HardDrive {
        &self.hard_drive
    }

    /// Runs the boot sequence and returns one line per step.
    pub fn start(&self) -> Vec<String> {
        debug!("booting");
        vec![
            self.cpu.freeze(),
            self.memory.load("0x00", "BOOT_SECTOR"),
            self.cpu.jump("0x00"),
            self.cpu.execute(),
        ]
    }
}
