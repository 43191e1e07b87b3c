//! Algorithms 5: String Algorithms
//!
//! Pattern matching (KMP, Rabin-Karp), edit distance, and the longest
//! palindromic substring.
//!
//! Matchers report **byte** offsets into the text, so results can be used
//! to slice the original `&str`. Edit distance and palindromes work on
//! `char`s and are safe for any UTF-8 input.
//!
//! Run with: cargo run --bin algo_string_algorithms

use colored::Colorize;
use tracing::debug;
use tracing_subscriber::EnvFilter;

const BASE: i64 = 256;
const PRIME: i64 = 101;

/// `lps[i]` is the length of the longest proper prefix of `pattern[..=i]`
/// that is also a suffix of it.
pub fn compute_lps(pattern: &[u8]) -> Vec<usize> {
    let mut lps = vec![0; pattern.len()];
    let mut len = 0;
    let mut i = 1;

    while i < pattern.len() {
        if pattern[i] == pattern[len] {
            len += 1;
            lps[i] = len;
            i += 1;
        } else if len != 0 {
            len = lps[len - 1];
        } else {
            lps[i] = 0;
            i += 1;
        }
    }
    lps
}

/// Every (possibly overlapping) occurrence of `pattern` in `text`, in O(n + m).
pub fn kmp_search(text: &str, pattern: &str) -> Vec<usize> {
    let (text, pattern) = (text.as_bytes(), pattern.as_bytes());
    if pattern.is_empty() {
        return Vec::new();
    }

    let lps = compute_lps(pattern);
    let mut matches = Vec::new();
    let mut j = 0;

    for (i, &byte) in text.iter().enumerate() {
        while j > 0 && byte != pattern[j] {
            j = lps[j - 1];
        }
        if byte == pattern[j] {
            j += 1;
        }
        if j == pattern.len() {
            matches.push(i + 1 - j);
            j = lps[j - 1];
        }
    }
    matches
}

/// Rolling-hash search. Hash hits are verified byte by byte, so collisions
/// never produce false matches.
pub fn rabin_karp(text: &str, pattern: &str) -> Vec<usize> {
    let (text, pattern) = (text.as_bytes(), pattern.as_bytes());
    let m = pattern.len();
    if m == 0 || m > text.len() {
        return Vec::new();
    }

    let hash = |bytes: &[u8]| bytes.iter().fold(0, |h, &b| (h * BASE + b as i64) % PRIME);
    let pattern_hash = hash(pattern);
    let mut window_hash = hash(&text[..m]);

    // BASE^(m-1) mod PRIME, the weight of the byte leaving the window.
    let high = (1..m).fold(1, |h, _| (h * BASE) % PRIME);

    let mut matches = Vec::new();
    for i in 0..=text.len() - m {
        if window_hash == pattern_hash {
            if text[i..i + m] == *pattern {
                matches.push(i);
            } else {
                debug!(offset = i, "hash collision");
            }
        }
        if i + m < text.len() {
            let rolled = BASE * (window_hash - text[i] as i64 * high) + text[i + m] as i64;
            window_hash = rolled.rem_euclid(PRIME);
        }
    }
    matches
}

/// Minimum number of single-character insertions, deletions, and
/// substitutions that turn `a` into `b`.
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    // Two rolling rows instead of the full table.
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for i in 1..=a.len() {
        curr[0] = i;
        for j in 1..=b.len() {
            curr[j] = if a[i - 1] == b[j - 1] {
                prev[j - 1]
            } else {
                1 + prev[j].min(curr[j - 1]).min(prev[j - 1])
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[b.len()]
}

/// Longest substring that reads the same both ways. Ties go to the
/// leftmost candidate.
pub fn longest_palindromic_substring(s: &str) -> &str {
    let chars: Vec<(usize, char)> = s.char_indices().collect();
    let n = chars.len();
    if n < 2 {
        return s;
    }

    // table[i][j]: chars[i..=j] is a palindrome.
    let mut table = vec![vec![false; n]; n];
    let mut start = 0;
    let mut best = 1;

    for i in 0..n {
        table[i][i] = true;
    }
    for i in 0..n - 1 {
        if chars[i].1 == chars[i + 1].1 {
            table[i][i + 1] = true;
            if best < 2 {
                start = i;
                best = 2;
            }
        }
    }
    for len in 3..=n {
        for i in 0..=n - len {
            let j = i + len - 1;
            if table[i + 1][j - 1] && chars[i].1 == chars[j].1 {
                table[i][j] = true;
                if len > best {
                    start = i;
                    best = len;
                }
            }
        }
    }

    let from = chars[start].0;
    let to = chars
        .get(start + best)
        .map_or(s.len(), |&(offset, _)| offset);
    &s[from..to]
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    println!("{}", "Example 1: KMP String Matching".bold());
    let (text, pattern) = ("AABAACAADAABAAABAA", "AABA");
    println!("Text: {}\nPattern: {}", text, pattern);
    println!("Pattern found at indices: {:?}", kmp_search(text, pattern));

    println!("\n{}", "Example 2: Rabin-Karp String Matching".bold());
    let (text, pattern) = ("GEEKS FOR GEEKS", "GEEK");
    println!("Text: {}\nPattern: {}", text, pattern);
    println!("Pattern found at indices: {:?}", rabin_karp(text, pattern));

    println!("\n{}", "Example 3: Levenshtein Distance".bold());
    let (a, b) = ("kitten", "sitting");
    println!("Distance between '{}' and '{}': {}", a, b, levenshtein_distance(a, b));

    println!("\n{}", "Example 4: Longest Palindromic Substring".bold());
    for s in ["babad", "cbbd", "racecar level"] {
        println!("'{}' -> '{}'", s, longest_palindromic_substring(s));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    #[test]
    fn test_lps() {
        assert_eq!(compute_lps(b"AABA"), vec![0, 1, 0, 1]);
        assert_eq!(compute_lps(b"AAACAAAA"), vec![0, 1, 2, 0, 1, 2, 3, 3]);
        assert!(compute_lps(b"").is_empty());
    }

    #[rstest]
    #[case("AABAACAADAABAAABAA", "AABA", vec![0, 9, 13])]
    #[case("GEEKS FOR GEEKS", "GEEK", vec![0, 10])]
    #[case("aaaa", "aa", vec![0, 1, 2])]
    #[case("abc", "abcd", vec![])]
    #[case("abc", "", vec![])]
    #[case("", "a", vec![])]
    fn test_matchers_agree(#[case] text: &str, #[case] pattern: &str, #[case] expected: Vec<usize>) {
        assert_eq!(kmp_search(text, pattern), expected);
        assert_eq!(rabin_karp(text, pattern), expected);
    }

    #[test]
    fn test_match_offsets_are_bytes() {
        let text = "héllo héllo";
        let hits = kmp_search(text, "llo");
        assert_eq!(hits, vec![3, 10]);
        assert_eq!(&text[hits[1]..hits[1] + 3], "llo");
        assert_eq!(rabin_karp(text, "llo"), hits);
    }

    #[rstest]
    #[case("kitten", "sitting", 3)]
    #[case("", "abc", 3)]
    #[case("abc", "", 3)]
    #[case("flaw", "lawn", 2)]
    #[case("same", "same", 0)]
    #[case("café", "cafe", 1)]
    fn test_levenshtein(#[case] a: &str, #[case] b: &str, #[case] expected: usize) {
        assert_eq!(levenshtein_distance(a, b), expected);
    }

    #[rstest]
    #[case("babad", "bab")]
    #[case("cbbd", "bb")]
    #[case("a", "a")]
    #[case("", "")]
    #[case("abc", "a")]
    #[case("forgeeksskeegfor", "geeksskeeg")]
    #[case("xéx", "xéx")]
    fn test_longest_palindrome(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(longest_palindromic_substring(input), expected);
    }

    proptest! {
        #[test]
        fn prop_matchers_agree_with_naive(text in "[ab]{0,40}", pattern in "[ab]{1,4}") {
            let naive: Vec<usize> = (0..=text.len().saturating_sub(pattern.len()))
                .filter(|&i| text[i..].starts_with(pattern.as_str()))
                .collect();
            prop_assert_eq!(kmp_search(&text, &pattern), naive.clone());
            prop_assert_eq!(rabin_karp(&text, &pattern), naive);
        }

        #[test]
        fn prop_levenshtein_is_symmetric(a in "[a-c]{0,8}", b in "[a-c]{0,8}") {
            prop_assert_eq!(levenshtein_distance(&a, &b), levenshtein_distance(&b, &a));
        }
    }
}
