//! Data Structures 3: Queue (FIFO)
//!
//! Backed by a `VecDeque<T>` ring buffer, so dequeuing from the front
//! does not shift the remaining items.
//!
//! Run with: cargo run --bin ds_queue

use colored::Colorize;
use std::collections::VecDeque;
use thiserror::Error;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueError {
    #[error("queue is empty")]
    Empty,
}

#[derive(Debug, Clone, Default)]
pub struct Queue<T> {
    items: VecDeque<T>,
}

impl<T> Queue<T> {
    pub fn new() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }

    pub fn enqueue(&mut self, item: T) {
        self.items.push_back(item);
        debug!(size = self.items.len(), "enqueued");
    }

    pub fn dequeue(&mut self) -> Result<T, QueueError> {
        self.items.pop_front().ok_or_else(|| {
            warn!("dequeue on empty queue");
            QueueError::Empty
        })
    }

    pub fn peek(&self) -> Result<&T, QueueError> {
        self.items.front().ok_or(QueueError::Empty)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn size(&self) -> usize {
        self.items.len()
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let mut queue = Queue::new();

    println!("{}", "Example 1: Enqueuing elements".bold());
    println!("Enqueuing: 1, 2, 3");
    for item in [1, 2, 3] {
        queue.enqueue(item);
    }

    println!("\n{}", "Example 2: Queue Status".bold());
    println!("Queue size: {}", queue.size());
    if let Ok(first) = queue.peek() {
        println!("Front element: {}", first);
    }

    println!("\n{}", "Example 3: Dequeuing elements".bold());
    while let Ok(item) = queue.dequeue() {
        println!("Dequeued: {}", item);
    }

    println!("\n{}", "Example 4: Error handling".bold());
    println!("Trying to dequeue from empty queue:");
    if let Err(e) = queue.dequeue() {
        println!("Error: {}", e.to_string().red());
    }

    println!("\n{}", "Example 5: Mixed operations".bold());
    queue.enqueue(10);
    queue.enqueue(20);
    if let Ok(item) = queue.dequeue() {
        println!("Dequeued: {}", item);
    }
    queue.enqueue(30);
    println!("Final queue size: {}", queue.size());
    println!("Is empty? {}", queue.is_empty());
}
