//! Algorithms 3: Dynamic Programming
//!
//! Each problem here has overlapping subproblems and optimal substructure,
//! so a table of earlier answers replaces repeated recursion.
//!
//! Run with: cargo run --bin algo_dynamic_programming

use colored::Colorize;
use std::collections::HashMap;
use thiserror::Error;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum KnapsackError {
    #[error("got {values} values but {weights} weights")]
    LengthMismatch { values: usize, weights: usize },
}

/// Largest `n` whose Fibonacci number fits in a `u64`.
pub const FIBONACCI_MAX_N: u32 = 93;

/// Naive recursion: O(2^n). Only for comparison with the versions below.
///
/// `None` past [`FIBONACCI_MAX_N`].
pub fn fibonacci_recursive(n: u32) -> Option<u64> {
    fn go(n: u32) -> u64 {
        if n <= 1 {
            return n as u64;
        }
        go(n - 1) + go(n - 2)
    }

    (n <= FIBONACCI_MAX_N).then(|| go(n))
}

/// Bottom-up table, O(n).
pub fn fibonacci_dp(n: u32) -> Option<u64> {
    if n > FIBONACCI_MAX_N {
        debug!(n, "fibonacci overflows u64");
        return None;
    }
    let n = n as usize;
    if n <= 1 {
        return Some(n as u64);
    }
    let mut dp = vec![0u64; n + 1];
    dp[1] = 1;
    for i in 2..=n {
        dp[i] = dp[i - 1].checked_add(dp[i - 2])?;
    }
    Some(dp[n])
}

/// Top-down recursion with a memo, O(n).
pub fn fibonacci_memo(n: u32) -> Option<u64> {
    fn go(n: u32, memo: &mut HashMap<u32, u64>) -> u64 {
        if n <= 1 {
            return n as u64;
        }
        if let Some(&cached) = memo.get(&n) {
            return cached;
        }
        let value = go(n - 1, memo) + go(n - 2, memo);
        memo.insert(n, value);
        value
    }

    (n <= FIBONACCI_MAX_N).then(|| go(n, &mut HashMap::new()))
}

/// Length of the longest common subsequence, compared byte by byte.
pub fn longest_common_subsequence(a: &str, b: &str) -> usize {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    let mut dp = vec![vec![0usize; b.len() + 1]; a.len() + 1];

    for i in 1..=a.len() {
        for j in 1..=b.len() {
            dp[i][j] = if a[i - 1] == b[j - 1] {
                dp[i - 1][j - 1] + 1
            } else {
                dp[i - 1][j].max(dp[i][j - 1])
            };
        }
    }
    dp[a.len()][b.len()]
}

/// 0/1 knapsack: each item is taken whole or not at all.
///
/// `dp[i][w]` is the best value using the first `i` items within weight `w`.
pub fn knapsack(values: &[u64], weights: &[usize], capacity: usize) -> Result<u64, KnapsackError> {
    if values.len() != weights.len() {
        return Err(KnapsackError::LengthMismatch {
            values: values.len(),
            weights: weights.len(),
        });
    }

    let n = values.len();
    let mut dp = vec![vec![0u64; capacity + 1]; n + 1];
    for i in 1..=n {
        let (value, weight) = (values[i - 1], weights[i - 1]);
        for w in 0..=capacity {
            dp[i][w] = if weight <= w {
                dp[i - 1][w].max(value + dp[i - 1][w - weight])
            } else {
                dp[i - 1][w]
            };
        }
    }
    debug!(items = n, capacity, best = dp[n][capacity], "knapsack solved");
    Ok(dp[n][capacity])
}

/// Fewest coins summing to `amount`, or `None` if it cannot be made.
pub fn coin_change(coins: &[usize], amount: usize) -> Option<usize> {
    let mut dp: Vec<Option<usize>> = vec![None; amount + 1];
    dp[0] = Some(0);

    for i in 1..=amount {
        dp[i] = coins
            .iter()
            .filter(|&&coin| coin > 0 && coin <= i)
            .filter_map(|&coin| dp[i - coin])
            .min()
            .map(|count| count + 1);
    }
    dp[amount]
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    println!("{}", "Example 1: Fibonacci".bold());
    let n = 10;
    let show = |value: Option<u64>| value.map_or_else(|| "overflows u64".red().to_string(), |v| v.to_string());
    println!("Fibonacci({}) using recursion: {}", n, show(fibonacci_recursive(n)));
    println!("Fibonacci({}) using DP: {}", n, show(fibonacci_dp(n)));
    println!("Fibonacci({}) using memoization: {}", n, show(fibonacci_memo(n)));
    let past = FIBONACCI_MAX_N + 1;
    println!("Fibonacci({}) using DP: {}", past, show(fibonacci_dp(past)));

    println!("\n{}", "Example 2: Longest Common Subsequence".bold());
    let (text1, text2) = ("abcde", "ace");
    println!(
        "Length of Longest Common Subsequence between '{}' and '{}': {}",
        text1,
        text2,
        longest_common_subsequence(text1, text2)
    );

    println!("\n{}", "Example 3: 0/1 Knapsack".bold());
    match knapsack(&[60, 100, 120], &[10, 20, 30], 50) {
        Ok(best) => println!("Maximum value in Knapsack: {}", best),
        Err(e) => println!("Error: {}", e),
    }

    println!("\n{}", "Example 4: Coin Change".bold());
    let amount = 11;
    match coin_change(&[1, 2, 5], amount) {
        Some(count) => println!("Minimum coins needed for amount {}: {}", amount, count),
        None => println!("Cannot make amount {} with given coins", amount),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, 0)]
    #[case(1, 1)]
    #[case(2, 1)]
    #[case(10, 55)]
    #[case(20, 6765)]
    fn test_fibonacci_variants_agree(#[case] n: u32, #[case] expected: u64) {
        assert_eq!(fibonacci_recursive(n), Some(expected));
        assert_eq!(fibonacci_dp(n), Some(expected));
        assert_eq!(fibonacci_memo(n), Some(expected));
    }

    #[test]
    fn test_fibonacci_large_n_without_exponential_time() {
        assert_eq!(fibonacci_dp(90), Some(2_880_067_194_370_816_120));
        assert_eq!(fibonacci_memo(90), fibonacci_dp(90));
    }

    #[test]
    fn test_fibonacci_u64_boundary() {
        assert_eq!(fibonacci_dp(93), Some(12_200_160_415_121_876_738));
        assert_eq!(fibonacci_memo(93), fibonacci_dp(93));
        assert_eq!(fibonacci_dp(94), None);
        assert_eq!(fibonacci_memo(94), None);
        assert_eq!(fibonacci_recursive(94), None);
        assert_eq!(fibonacci_dp(u32::MAX), None);
    }

    #[rstest]
    #[case("abcde", "ace", 3)]
    #[case("abc", "abc", 3)]
    #[case("abc", "def", 0)]
    #[case("", "abc", 0)]
    fn test_lcs(#[case] a: &str, #[case] b: &str, #[case] expected: usize) {
        assert_eq!(longest_common_subsequence(a, b), expected);
    }

    #[test]
    fn test_knapsack() {
        assert_eq!(knapsack(&[60, 100, 120], &[10, 20, 30], 50), Ok(220));
        assert_eq!(knapsack(&[60, 100, 120], &[10, 20, 30], 0), Ok(0));
        assert_eq!(knapsack(&[], &[], 10), Ok(0));
    }

    #[test]
    fn test_knapsack_length_mismatch() {
        let err = knapsack(&[1, 2], &[1], 5).unwrap_err();
        assert_eq!(err, KnapsackError::LengthMismatch { values: 2, weights: 1 });
        assert_eq!(err.to_string(), "got 2 values but 1 weights");
    }

    #[rstest]
    #[case(&[1, 2, 5], 11, Some(3))]
    #[case(&[2], 3, None)]
    #[case(&[1], 0, Some(0))]
    #[case(&[3, 7], 14, Some(2))]
    fn test_coin_change(#[case] coins: &[usize], #[case] amount: usize, #[case] expected: Option<usize>) {
        assert_eq!(coin_change(coins, amount), expected);
    }
}
