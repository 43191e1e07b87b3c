//! Data Structures 2: Stack (LIFO)
//!
//! Backed by a `Vec<T>`; the end of the vector is the top of the stack.
//!
//! Time complexity:
//! - push: O(1) amortized
//! - pop / peek: O(1)
//!
//! Run with: cargo run --bin ds_stack

use colored::Colorize;
use thiserror::Error;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StackError {
    #[error("stack is empty")]
    Empty,
}

#[derive(Debug, Clone, Default)]
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Stack<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn push(&mut self, item: T) {
        self.items.push(item);
        debug!(size = self.items.len(), "pushed");
    }

    pub fn pop(&mut self) -> Result<T, StackError> {
        self.items.pop().ok_or_else(|| {
            warn!("pop on empty stack");
            StackError::Empty
        })
    }

    pub fn peek(&self) -> Result<&T, StackError> {
        self.items.last().ok_or(StackError::Empty)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn size(&self) -> usize {
        self.items.len()
    }
}

/// True when every `)` closes an earlier `(`. Other characters are ignored.
pub fn is_valid_brackets(s: &str) -> bool {
    let mut stack = Stack::new();
    for ch in s.chars() {
        match ch {
            '(' => stack.push(ch),
            ')' => {
                if stack.pop().is_err() {
                    return false;
                }
            }
            _ => {}
        }
    }
    stack.is_empty()
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let mut stack = Stack::new();

    println!("{}", "Example 1: Pushing elements".bold());
    println!("Pushing: 1, 2, 3");
    for item in [1, 2, 3] {
        stack.push(item);
    }

    println!("\n{}", "Example 2: Stack Status".bold());
    println!("Stack size: {}", stack.size());
    if let Ok(top) = stack.peek() {
        println!("Top element: {}", top);
    }

    println!("\n{}", "Example 3: Popping elements".bold());
    while let Ok(item) = stack.pop() {
        println!("Popped: {}", item);
    }

    println!("\n{}", "Example 4: Error handling".bold());
    println!("Trying to pop from empty stack:");
    if let Err(e) = stack.pop() {
        println!("Error: {}", e.to_string().red());
    }

    println!("\n{}", "Example 5: Bracket Matching".bold());
    for test in ["((()))", "(()())", "(()", ")("] {
        println!("Is '{}' valid? {}", test, is_valid_brackets(test));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_push_peek_pop() {
        let mut stack = Stack::new();
        stack.push(1);
        stack.push(2);
        assert_eq!(stack.peek(), Ok(&2));
        assert_eq!(stack.size(), 2);
        assert_eq!(stack.pop(), Ok(2));
        assert_eq!(stack.pop(), Ok(1));
        assert!(stack.is_empty());
    }

    #[test]
    fn test_empty_pop_is_an_error_and_size_stays_zero() {
        let mut stack: Stack<i32> = Stack::new();
        assert_eq!(stack.pop(), Err(StackError::Empty));
        assert_eq!(stack.peek(), Err(StackError::Empty));
        assert_eq!(stack.size(), 0);
        assert_eq!(StackError::Empty.to_string(), "stack is empty");
    }

    #[test]
    fn test_brackets() {
        assert!(is_valid_brackets("((()))"));
        assert!(is_valid_brackets("(()())"));
        assert!(is_valid_brackets(""));
        assert!(is_valid_brackets("(a)(b)"));
        assert!(!is_valid_brackets("(()"));
        assert!(!is_valid_brackets(")("));
    }

    proptest! {
        #[test]
        fn prop_pops_in_reverse_push_order(values: Vec<i32>) {
            let mut stack = Stack::new();
            for &v in &values {
                stack.push(v);
            }
            prop_assert_eq!(stack.size(), values.len());

            let mut popped = Vec::new();
            while let Ok(v) = stack.pop() {
                popped.push(v);
            }
            let mut expected = values.clone();
            expected.reverse();
            prop_assert_eq!(popped, expected);
            prop_assert_eq!(stack.size(), 0);
        }
    }
}
