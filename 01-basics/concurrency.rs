//! Basics 7: Threads and Channels
//! Worker threads joined by a WaitGroup, rendezvous and buffered channels,
//! and a select over two channels.
//!
//! Run with: cargo run --bin basics_concurrency

use colored::Colorize;
use crossbeam::channel::{bounded, unbounded, RecvError, SendError, Sender};
use crossbeam::select;
use crossbeam::sync::WaitGroup;
use std::thread;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;
use tracing_subscriber::EnvFilter;

const WORK_DELAY: Duration = Duration::from_millis(100);

#[derive(Error, Debug)]
pub enum ChannelError {
    #[error(transparent)]
    Send(#[from] SendError<u32>),
    #[error(transparent)]
    Recv(#[from] RecvError),
}

/// Prints `from..=to`, reporting each number on `out`.
/// Holding the `WaitGroup` until return is what marks this worker done.
pub fn print_numbers(from: u32, to: u32, delay: Duration, out: &Sender<u32>, wg: WaitGroup) {
    let _done = wg;
    for i in from..=to {
        thread::sleep(delay);
        println!("Number: {}", i);
        if out.send(i).is_err() {
            break;
        }
    }
    debug!(from, to, "worker finished");
}

/// Starts one worker per range, waits for all of them, and returns
/// every number they produced (in arrival order).
pub fn fan_out(ranges: &[(u32, u32)], delay: Duration) -> Vec<u32> {
    let wg = WaitGroup::new();
    let (tx, rx) = unbounded();

    for &(from, to) in ranges {
        let wg = wg.clone();
        let tx = tx.clone();
        thread::spawn(move || print_numbers(from, to, delay, &tx, wg));
    }
    drop(tx);

    wg.wait();
    rx.iter().collect()
}

/// Sends `1..=count`, then drops the sender so the receiver sees the channel close.
pub fn generate_numbers(tx: Sender<u32>, count: u32, delay: Duration) {
    for i in 1..=count {
        if tx.send(i).is_err() {
            return;
        }
        thread::sleep(delay);
    }
}

/// Rendezvous channel: every send waits for the matching receive.
pub fn unbuffered_roundtrip(count: u32, delay: Duration) -> Vec<u32> {
    let (tx, rx) = bounded(0);
    let producer = thread::spawn(move || generate_numbers(tx, count, delay));

    let mut received = Vec::new();
    for num in rx.iter() {
        println!("Received: {}", num);
        received.push(num);
    }
    let _ = producer.join();
    received
}

/// Fills a buffered channel without a receiver running, then drains it.
pub fn buffered_roundtrip(values: &[u32]) -> Result<Vec<u32>, ChannelError> {
    let (tx, rx) = bounded(values.len());
    for &v in values {
        tx.send(v)?;
    }

    let mut drained = Vec::with_capacity(values.len());
    for _ in values {
        drained.push(rx.recv()?);
    }
    Ok(drained)
}

/// Waits on two channels at once and returns messages in the order they arrived.
pub fn select_two(first_delay: Duration, second_delay: Duration) -> Result<Vec<String>, RecvError> {
    let (tx1, rx1) = bounded::<String>(0);
    let (tx2, rx2) = bounded::<String>(0);

    // The originals stay alive here so a finished sender never reads as disconnected.
    let sender1 = tx1.clone();
    let h1 = thread::spawn(move || {
        thread::sleep(first_delay);
        let _ = sender1.send("Message from channel 1".to_string());
    });
    let sender2 = tx2.clone();
    let h2 = thread::spawn(move || {
        thread::sleep(second_delay);
        let _ = sender2.send("Message from channel 2".to_string());
    });

    let mut messages = Vec::with_capacity(2);
    for _ in 0..2 {
        let msg = select! {
            recv(rx1) -> msg => msg,
            recv(rx2) -> msg => msg,
        };
        messages.push(msg?);
    }

    let _ = h1.join();
    let _ = h2.join();
    drop((tx1, tx2));
    Ok(messages)
}

fn main() -> Result<(), ChannelError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    println!("{}", "=== Threads with a WaitGroup ===".bold());
    let produced = fan_out(&[(1, 3), (4, 6)], WORK_DELAY);
    println!("Workers produced {} numbers", produced.len());

    println!("\n{}", "=== Unbuffered Channel ===".bold());
    unbuffered_roundtrip(5, WORK_DELAY);

    println!("\n{}", "=== Buffered Channel ===".bold());
    for value in buffered_roundtrip(&[1, 2, 3])? {
        println!("From buffered channel: {}", value);
    }

    println!("\n{}", "=== Select ===".bold());
    for msg in select_two(Duration::from_millis(100), Duration::from_millis(200))? {
        println!("{}", msg);
    }

    Ok(())
}
