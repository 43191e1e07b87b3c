//! # Design Patterns Catalog
//!
//! Classic object-oriented patterns expressed with Rust traits, trait
//! objects, and ownership instead of inheritance.
//!
//! ## Creational
//! - Singleton (one lazily created, shared instance)
//! - Factory (pick an implementation by enum or by name)
//! - Builder (fluent construction plus a director with presets)
//!
//! ## Structural
//! - Adapter (wrap an incompatible API behind the expected trait)
//! - Decorator (stack behavior around a `Box<dyn Coffee>`)
//! - Facade (one call drives several subsystems)
//!
//! ## Behavioral
//! - Observer (a subject notifies registered observers)
//! - Strategy (swap the payment algorithm at runtime)
//! - Chain of Responsibility (each logger handles or forwards)
//!
//! Run the demo with:
//! ```bash
//! cargo run --bin design_patterns_demo
//! ```

pub mod behavioral;
pub mod creational;
pub mod structural;

/// Renders `value` as the single Unicode scalar with that code point.
///
/// The number is truncated to 32 bits first; negative values, surrogates,
/// and anything past `U+10FFFF` become `U+FFFD`. So `100` renders as `"d"`,
/// not `"100"`. Several patterns here format amounts this way.
pub fn code_point_string(value: i64) -> String {
    let code = value as i32;
    u32::try_from(code)
        .ok()
        .and_then(char::from_u32)
        .unwrap_or(char::REPLACEMENT_CHARACTER)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_point_string() {
        assert_eq!(code_point_string(100), "d");
        assert_eq!(code_point_string(50), "2");
        assert_eq!(code_point_string(0x1F600), "😀");
    }

    #[test]
    fn test_invalid_code_points_become_replacement_char() {
        assert_eq!(code_point_string(-1), "\u{FFFD}");
        assert_eq!(code_point_string(0xD800), "\u{FFFD}");
        assert_eq!(code_point_string(0x110000), "\u{FFFD}");
    }

    #[test]
    fn test_truncates_to_32_bits() {
        // Only the low 32 bits survive: 2^32 + 65 is 'A'.
        assert_eq!(code_point_string((1i64 << 32) + 65), "A");
    }
}
