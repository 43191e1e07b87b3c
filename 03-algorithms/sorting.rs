//! Algorithms 1: Sorting
//!
//! | algorithm | time (avg)  | space    | stable |
//! |-----------|-------------|----------|--------|
//! | bubble    | O(n²)       | O(1)     | yes    |
//! | quick     | O(n log n)  | O(log n) | no     |
//! | merge     | O(n log n)  | O(n)     | yes    |
//! | insertion | O(n²)       | O(1)     | yes    |
//!
//! Plus a merge sort that splits its halves across threads with `rayon::join`.
//!
//! Run with: cargo run --bin algo_sorting

use colored::Colorize;
use rand::Rng;
use std::time::Instant;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Below this many elements the parallel sort stops forking.
const PARALLEL_CUTOFF: usize = 4096;

pub fn bubble_sort<T: Ord>(arr: &mut [T]) {
    let n = arr.len();
    for i in 0..n.saturating_sub(1) {
        let mut swapped = false;
        for j in 0..n - i - 1 {
            if arr[j] > arr[j + 1] {
                arr.swap(j, j + 1);
                swapped = true;
            }
        }
        if !swapped {
            debug!(pass = i, "bubble sort finished early");
            break;
        }
    }
}

/// Lomuto partition around the last element; recurses into the smaller
/// side and loops on the larger one, so stack depth stays O(log n).
pub fn quick_sort<T: Ord>(mut arr: &mut [T]) {
    while arr.len() > 1 {
        let pivot = partition(arr);
        let (left, right) = arr.split_at_mut(pivot);
        let right = &mut right[1..];
        if left.len() < right.len() {
            quick_sort(left);
            arr = right;
        } else {
            quick_sort(right);
            arr = left;
        }
    }
}

fn partition<T: Ord>(arr: &mut [T]) -> usize {
    let high = arr.len() - 1;
    let mut store = 0;
    for j in 0..high {
        if arr[j] <= arr[high] {
            arr.swap(store, j);
            store += 1;
        }
    }
    arr.swap(store, high);
    store
}

pub fn merge_sort<T: Ord + Clone>(arr: &[T]) -> Vec<T> {
    if arr.len() <= 1 {
        return arr.to_vec();
    }
    let (left, right) = arr.split_at(arr.len() / 2);
    merge(merge_sort(left), merge_sort(right))
}

pub fn parallel_merge_sort<T: Ord + Clone + Send + Sync>(arr: &[T]) -> Vec<T> {
    if arr.len() <= PARALLEL_CUTOFF {
        return merge_sort(arr);
    }
    let (left, right) = arr.split_at(arr.len() / 2);
    let (left, right) = rayon::join(|| parallel_merge_sort(left), || parallel_merge_sort(right));
    merge(left, right)
}

// Ties take from the left run first, which keeps the sort stable.
fn merge<T: Ord>(left: Vec<T>, right: Vec<T>) -> Vec<T> {
    let mut result = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    loop {
        let take_left = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => l <= r,
            (Some(_), None) => true,
            (None, Some(_)) => false,
            (None, None) => break,
        };
        let next = if take_left { left.next() } else { right.next() };
        result.extend(next);
    }
    result
}

pub fn insertion_sort<T: Ord>(arr: &mut [T]) {
    for i in 1..arr.len() {
        let mut j = i;
        while j > 0 && arr[j - 1] > arr[j] {
            arr.swap(j - 1, j);
            j -= 1;
        }
    }
}

pub fn is_sorted<T: Ord>(arr: &[T]) -> bool {
    arr.windows(2).all(|w| w[0] <= w[1])
}

/// `len` values drawn uniformly from `0..100`.
pub fn random_array<R: Rng + ?Sized>(len: usize, rng: &mut R) -> Vec<u32> {
    (0..len).map(|_| rng.gen_range(0..100)).collect()
}

fn report(name: &str, original: &[u32], sorted: &[u32]) {
    println!("{}", name.bold());
    println!("Original array: {:?}", original);
    println!("Sorted array: {:?}", sorted);
    println!("Is sorted? {}\n", is_sorted(sorted));
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let mut rng = rand::thread_rng();

    let original = random_array(10, &mut rng);
    let mut arr = original.clone();
    bubble_sort(&mut arr);
    report("Example 1: Bubble Sort", &original, &arr);

    let original = random_array(10, &mut rng);
    let mut arr = original.clone();
    quick_sort(&mut arr);
    report("Example 2: Quick Sort", &original, &arr);

    let original = random_array(10, &mut rng);
    let arr = merge_sort(&original);
    report("Example 3: Merge Sort", &original, &arr);

    let original = random_array(10, &mut rng);
    let mut arr = original.clone();
    insertion_sort(&mut arr);
    report("Example 4: Insertion Sort", &original, &arr);

    println!("{}", "Example 5: Parallel Merge Sort".bold());
    let big = random_array(1_000_000, &mut rng);

    let start = Instant::now();
    let sequential = merge_sort(&big);
    let seq_time = start.elapsed();

    let start = Instant::now();
    let parallel = parallel_merge_sort(&big);
    let par_time = start.elapsed();

    println!("Sequential: {:?}", seq_time);
    println!("Parallel:   {:?}", par_time);
    println!("Same result? {}", sequential == parallel);
}
