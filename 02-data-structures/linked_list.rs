//! Data Structures 1: Singly Linked List
//!
//! Each node owns the next one through `Option<Box<Node<T>>>`, so the
//! list is a chain of unique ownership ending in `None`.
//!
//! Time complexity:
//! - insert at tail: O(n)
//! - delete first match: O(n)
//!
//! Run with: cargo run --bin ds_linked_list

use colored::Colorize;
use itertools::Itertools;
use std::fmt;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Debug)]
struct Node<T> {
    data: T,
    next: Option<Box<Node<T>>>,
}

#[derive(Debug)]
pub struct LinkedList<T> {
    head: Option<Box<Node<T>>>,
    len: usize,
}

impl<T> LinkedList<T> {
    pub fn new() -> Self {
        Self { head: None, len: 0 }
    }

    /// Appends at the tail by walking to the last link.
    pub fn insert(&mut self, data: T) {
        let mut cursor = &mut self.head;
        while let Some(node) = cursor {
            cursor = &mut node.next;
        }
        *cursor = Some(Box::new(Node { data, next: None }));
        self.len += 1;
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head.as_deref(),
        }
    }
}

impl<T: PartialEq> LinkedList<T> {
    /// Unlinks the first node holding `data`. Returns whether one was found.
    pub fn delete(&mut self, data: &T) -> bool {
        let mut cursor = &mut self.head;
        loop {
            match cursor {
                None => return false,
                Some(node) if node.data == *data => {
                    *cursor = node.next.take();
                    self.len -= 1;
                    debug!(len = self.len, "node removed");
                    return true;
                }
                Some(node) => cursor = &mut node.next,
            }
        }
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

// The default recursive drop would use one stack frame per node.
impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        let mut link = self.head.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
    }
}

pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            &node.data
        })
    }
}

/// Renders as `1 -> 2 -> 3 -> nil`.
impl<T: fmt::Display> fmt::Display for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "nil");
        }
        write!(f, "{} -> nil", self.iter().join(" -> "))
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let mut list = LinkedList::new();

    println!("{}", "Example 1: Inserting elements".bold());
    for value in 1..=4 {
        list.insert(value);
    }
    println!("Original List: {}", list);

    println!("\n{}", "Example 2: Deleting element 2".bold());
    let removed = list.delete(&2);
    println!("After deleting 2 (found: {}): {}", removed, list);

    println!("\n{}", "Example 3: Inserting element 5".bold());
    list.insert(5);
    println!("After inserting 5: {}", list);

    println!("\n{}", "Example 4: Deleting a missing element".bold());
    println!("Delete 42 found anything? {}", list.delete(&42));
    println!("Length: {}", list.len());
}
