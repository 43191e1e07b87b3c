//! Algorithms 2: Searching
//!
//! All four searches return `Option<usize>`: the index of a match, or `None`.
//! Everything except linear search needs sorted input.
//!
//! - Linear: O(n), works on anything.
//! - Binary: O(log n).
//! - Jump: O(√n), scans forward in √n-sized blocks, then linearly.
//! - Interpolation: O(log log n) on uniformly spread data, O(n) worst case.
//!
//! Run with: cargo run --bin algo_searching

use colored::Colorize;
use std::cmp::Ordering;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Index of the first element equal to `target`.
pub fn linear_search<T: PartialEq>(arr: &[T], target: &T) -> Option<usize> {
    arr.iter().position(|value| value == target)
}

pub fn binary_search<T: Ord>(arr: &[T], target: &T) -> Option<usize> {
    // Half-open window [low, high) avoids underflow on `mid - 1`.
    let mut low = 0;
    let mut high = arr.len();

    while low < high {
        let mid = low + (high - low) / 2;
        match arr[mid].cmp(target) {
            Ordering::Equal => return Some(mid),
            Ordering::Less => low = mid + 1,
            Ordering::Greater => high = mid,
        }
    }
    None
}

pub fn jump_search<T: Ord>(arr: &[T], target: &T) -> Option<usize> {
    let n = arr.len();
    if n == 0 {
        return None;
    }
    let step = (n as f64).sqrt() as usize;

    // Find the block whose last element is not below the target.
    let mut prev = 0;
    let mut block_end = step.min(n);
    while arr[block_end - 1] < *target {
        prev = block_end;
        if prev >= n {
            return None;
        }
        block_end = (block_end + step).min(n);
    }
    debug!(prev, block_end, "jump search scanning block");

    arr[prev..block_end]
        .iter()
        .position(|value| value == target)
        .map(|offset| prev + offset)
}

/// Probes where `target` would sit if values were spread evenly between
/// the window's endpoints.
pub fn interpolation_search(arr: &[i64], target: i64) -> Option<usize> {
    if arr.is_empty() {
        return None;
    }
    let mut low = 0;
    let mut high = arr.len() - 1;

    while low <= high && target >= arr[low] && target <= arr[high] {
        if arr[high] == arr[low] {
            return (arr[low] == target).then_some(low);
        }

        // Widened so neither the differences nor the product can overflow.
        let span = (high - low) as i128;
        let rise = target as i128 - arr[low] as i128;
        let run = arr[high] as i128 - arr[low] as i128;
        let offset = span * rise / run;
        let pos = low + offset as usize;

        match arr[pos].cmp(&target) {
            Ordering::Equal => return Some(pos),
            Ordering::Less => low = pos + 1,
            Ordering::Greater => {
                if pos == 0 {
                    return None;
                }
                high = pos - 1;
            }
        }
    }
    None
}

fn report(result: Option<usize>) {
    match result {
        Some(index) => println!("Element found at index: {}", index),
        None => println!("Element not found"),
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let arr: [i64; 10] = [1, 3, 5, 7, 9, 11, 13, 15, 17, 19];
    let target = 13;
    println!("Searching for {} in array: {:?}\n", target, arr);

    println!("{}", "Example 1: Linear Search".bold());
    report(linear_search(&arr, &target));

    println!("\n{}", "Example 2: Binary Search".bold());
    report(binary_search(&arr, &target));

    println!("\n{}", "Example 3: Jump Search".bold());
    report(jump_search(&arr, &target));

    println!("\n{}", "Example 4: Interpolation Search".bold());
    report(interpolation_search(&arr, target));

    println!("\n{}", "Example 5: Missing element".bold());
    report(binary_search(&arr, &4));
}
