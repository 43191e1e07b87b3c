//! Basics 5: Arrays, Slices and Vectors
//!
//! Run with: cargo run --bin basics_arrays_slices

use colored::Colorize;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Borrowed view over `data[start..end]`, clamped to the slice bounds.
pub fn window<T>(data: &[T], start: usize, end: usize) -> &[T] {
    let end = end.min(data.len());
    let start = start.min(end);
    &data[start..end]
}

pub fn combine<T: Clone>(first: &[T], second: &[T]) -> Vec<T> {
    let mut combined = Vec::with_capacity(first.len() + second.len());
    combined.extend_from_slice(first);
    combined.extend_from_slice(second);
    combined
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    println!("{}", "=== Arrays ===".bold());
    let numbers: [i32; 5] = [1, 2, 3, 4, 5];
    println!("Array: {:?}", numbers);
    let fruits = ["apple", "banana", "orange"];
    println!("Fruits: {:?} (length {} known at compile time)", fruits, fruits.len());

    println!("\n{}", "=== Slices ===".bold());
    let numbers_slice = &numbers[1..4];
    println!("Slice from array: {:?}", numbers_slice);
    println!("Clamped window [3..10]: {:?}", window(&numbers, 3, 10));

    println!("\n{}", "=== Vectors ===".bold());
    let mut dynamic: Vec<i32> = vec![0; 3];
    dynamic.reserve_exact(2);
    println!(
        "Vec with reserve: {:?} (len={}, cap={})",
        dynamic,
        dynamic.len(),
        dynamic.capacity()
    );

    // Growing past capacity reallocates.
    let before = dynamic.capacity();
    dynamic.extend([1, 2, 3]);
    debug!(before, after = dynamic.capacity(), "vector grew");
    println!(
        "After extend: {:?} (len={}, cap={})",
        dynamic,
        dynamic.len(),
        dynamic.capacity()
    );

    let slice1 = [1, 2, 3];
    let slice2 = [4, 5, 6];
    println!("Combined slices: {:?}", combine(&slice1, &slice2));
    println!("Concat via std: {:?}", [&slice1[..], &slice2[..]].concat());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window() {
        let numbers = [1, 2, 3, 4, 5];
        assert_eq!(window(&numbers, 1, 4), &[2, 3, 4]);
        assert_eq!(window(&numbers, 3, 10), &[4, 5]);
        assert!(window(&numbers, 7, 9).is_empty());
    }

    #[test]
    fn test_combine() {
        assert_eq!(combine(&[1, 2, 3], &[4, 5, 6]), vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(combine::<i32>(&[], &[]), Vec::<i32>::new());
    }
}
