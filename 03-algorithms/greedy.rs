//! Algorithms 4: Greedy Algorithms
//!
//! Each step takes the locally best choice and never revisits it:
//! - Activity selection: earliest finishing activity first.
//! - Fractional knapsack: best value-per-weight first.
//! - Huffman coding: merge the two rarest subtrees first.
//! - Dijkstra: settle the closest unsettled vertex first.
//!
//! Run with: cargo run --bin algo_greedy

use colored::Colorize;
use itertools::Itertools;
use std::cmp::Ordering;
use std::collections::{BTreeMap, BinaryHeap};
use std::fmt;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

// ============================================================================
// Activity selection
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Activity {
    pub start: u32,
    pub end: u32,
}

impl fmt::Display for Activity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}

/// Largest set of non-overlapping activities. An activity may start
/// exactly when the previous one ends.
pub fn activity_selection(mut activities: Vec<Activity>) -> Vec<Activity> {
    activities.sort_by_key(|a| a.end);

    let mut selected: Vec<Activity> = Vec::new();
    for activity in activities {
        let fits = selected.last().map_or(true, |last| activity.start >= last.end);
        if fits {
            selected.push(activity);
        }
    }
    selected
}

// ============================================================================
// Fractional knapsack
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Item {
    pub value: f64,
    pub weight: f64,
}

impl Item {
    fn ratio(&self) -> f64 {
        self.value / self.weight
    }
}

/// Best total value when items may be split.
pub fn fractional_knapsack(items: &[Item], capacity: f64) -> f64 {
    let mut by_ratio: Vec<&Item> = items.iter().collect();
    by_ratio.sort_by(|a, b| b.ratio().total_cmp(&a.ratio()));

    let mut total = 0.0;
    let mut remaining = capacity;
    for item in by_ratio {
        if item.weight <= remaining {
            remaining -= item.weight;
            total += item.value;
        } else {
            total += item.ratio() * remaining;
            break;
        }
    }
    total
}

// ============================================================================
// Huffman coding
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuffmanNode {
    /// Set on leaves only.
    pub symbol: Option<char>,
    pub freq: usize,
    pub left: Option<Box<HuffmanNode>>,
    pub right: Option<Box<HuffmanNode>>,
}

impl HuffmanNode {
    fn leaf(symbol: char, freq: usize) -> Self {
        Self {
            symbol: Some(symbol),
            freq,
            left: None,
            right: None,
        }
    }
}

/// Heap entry ordered so the lowest frequency pops first; `seq` breaks
/// ties in insertion order so the tree shape is reproducible.
struct Pending {
    freq: usize,
    seq: usize,
    node: HuffmanNode,
}

impl PartialEq for Pending {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Pending {}

impl Ord for Pending {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .freq
            .cmp(&self.freq)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Pending {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Builds the Huffman tree for `text`; `None` for empty input.
pub fn build_huffman_tree(text: &str) -> Option<HuffmanNode> {
    let mut freq: BTreeMap<char, usize> = BTreeMap::new();
    for c in text.chars() {
        *freq.entry(c).or_insert(0) += 1;
    }

    let mut heap: BinaryHeap<Pending> = freq
        .into_iter()
        .enumerate()
        .map(|(seq, (c, f))| Pending {
            freq: f,
            seq,
            node: HuffmanNode::leaf(c, f),
        })
        .collect();
    let mut seq = heap.len();

    while heap.len() > 1 {
        let (Some(left), Some(right)) = (heap.pop(), heap.pop()) else {
            break;
        };
        let merged = HuffmanNode {
            symbol: None,
            freq: left.freq + right.freq,
            left: Some(Box::new(left.node)),
            right: Some(Box::new(right.node)),
        };
        heap.push(Pending {
            freq: merged.freq,
            seq,
            node: merged,
        });
        seq += 1;
    }

    let root = heap.pop().map(|p| p.node);
    debug!(root_freq = root.as_ref().map(|r| r.freq), "huffman tree built");
    root
}

/// Code for every symbol: `0` for a left edge, `1` for a right edge.
/// A tree with a single symbol gets the code `"0"`.
pub fn huffman_codes(root: &HuffmanNode) -> BTreeMap<char, String> {
    let mut codes = BTreeMap::new();
    if let Some(symbol) = root.symbol {
        codes.insert(symbol, "0".to_string());
        return codes;
    }

    let mut stack = vec![(root, String::new())];
    while let Some((node, prefix)) = stack.pop() {
        if let Some(symbol) = node.symbol {
            codes.insert(symbol, prefix);
            continue;
        }
        if let Some(right) = node.right.as_deref() {
            stack.push((right, format!("{prefix}1")));
        }
        if let Some(left) = node.left.as_deref() {
            stack.push((left, format!("{prefix}0")));
        }
    }
    codes
}

// ============================================================================
// Dijkstra
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub to: usize,
    pub weight: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct State {
    cost: u64,
    vertex: usize,
}

impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed for a min-heap.
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.vertex.cmp(&self.vertex))
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Shortest distance from `start` to every vertex of an adjacency list.
/// Unreachable vertices (and every vertex, if `start` is out of range) are `None`.
pub fn dijkstra(graph: &[Vec<Edge>], start: usize) -> Vec<Option<u64>> {
    let mut dist: Vec<Option<u64>> = vec![None; graph.len()];
    if start >= graph.len() {
        warn!(start, vertices = graph.len(), "start vertex out of range");
        return dist;
    }

    let mut heap = BinaryHeap::new();
    dist[start] = Some(0);
    heap.push(State { cost: 0, vertex: start });

    while let Some(State { cost, vertex }) = heap.pop() {
        // Stale entry: a shorter path was already found.
        if dist[vertex].is_some_and(|best| cost > best) {
            continue;
        }

        for edge in &graph[vertex] {
            let Some(slot) = dist.get_mut(edge.to) else {
                warn!(from = vertex, to = edge.to, "edge points outside the graph");
                continue;
            };
            // A path longer than u64::MAX is treated as no path.
            let Some(next) = cost.checked_add(edge.weight) else {
                warn!(from = vertex, to = edge.to, "path length overflows u64");
                continue;
            };
            if slot.map_or(true, |known| next < known) {
                *slot = Some(next);
                heap.push(State { cost: next, vertex: edge.to });
            }
        }
    }
    dist
}

fn edges(list: &[(usize, u64)]) -> Vec<Edge> {
    list.iter().map(|&(to, weight)| Edge { to, weight }).collect()
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    println!("{}", "Example 1: Activity Selection".bold());
    let activities = [
        (1, 4), (3, 5), (0, 6), (5, 7), (3, 9), (5, 9),
        (6, 10), (8, 11), (8, 12), (2, 14), (12, 16),
    ]
    .into_iter()
    .map(|(start, end)| Activity { start, end })
    .collect();
    println!("Selected activities: {}", activity_selection(activities).iter().join(" "));

    println!("\n{}", "Example 2: Fractional Knapsack".bold());
    let items = [
        Item { value: 60.0, weight: 10.0 },
        Item { value: 100.0, weight: 20.0 },
        Item { value: 120.0, weight: 30.0 },
    ];
    println!("Maximum value: {:.2}", fractional_knapsack(&items, 50.0));

    println!("\n{}", "Example 3: Huffman Coding".bold());
    let text = "this is an example for huffman encoding";
    if let Some(tree) = build_huffman_tree(text) {
        println!("Huffman tree root frequency: {}", tree.freq);
        for (symbol, code) in huffman_codes(&tree) {
            println!("  {:?}: {}", symbol, code);
        }
    }

    println!("\n{}", "Example 4: Dijkstra's Shortest Path".bold());
    let graph = vec![
        edges(&[(1, 4), (2, 1)]),
        edges(&[(3, 1)]),
        edges(&[(1, 2), (3, 5)]),
        edges(&[(4, 3)]),
        edges(&[]),
    ];
    let distances = dijkstra(&graph, 0)
        .into_iter()
        .map(|d| d.map_or_else(|| "unreachable".to_string(), |d| d.to_string()))
        .join(", ");
    println!("Shortest distances from vertex 0: [{}]", distances);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn activity(start: u32, end: u32) -> Activity {
        Activity { start, end }
    }

    #[test]
    fn test_activity_selection() {
        let input = [
            (1, 4), (3, 5), (0, 6), (5, 7), (3, 9), (5, 9),
            (6, 10), (8, 11), (8, 12), (2, 14), (12, 16),
        ]
        .into_iter()
        .map(|(s, e)| activity(s, e))
        .collect();
        let expected = vec![activity(1, 4), activity(5, 7), activity(8, 11), activity(12, 16)];
        assert_eq!(activity_selection(input), expected);
    }

    #[test]
    fn test_activity_selection_edge_cases() {
        assert!(activity_selection(Vec::new()).is_empty());
        // Back-to-back activities are compatible.
        let touching = vec![activity(2, 3), activity(1, 2)];
        assert_eq!(activity_selection(touching), vec![activity(1, 2), activity(2, 3)]);
    }

    #[test]
    fn test_fractional_knapsack() {
        let items = [
            Item { value: 60.0, weight: 10.0 },
            Item { value: 100.0, weight: 20.0 },
            Item { value: 120.0, weight: 30.0 },
        ];
        assert!((fractional_knapsack(&items, 50.0) - 240.0).abs() < 1e-9);
        assert!((fractional_knapsack(&items, 100.0) - 280.0).abs() < 1e-9);
        assert_eq!(fractional_knapsack(&items, 0.0), 0.0);
        assert_eq!(fractional_knapsack(&[], 10.0), 0.0);
    }

    #[test]
    fn test_huffman_root_frequency_is_text_length() {
        let text = "this is an example for huffman encoding";
        let tree = build_huffman_tree(text).unwrap();
        assert_eq!(tree.freq, text.chars().count());
        assert!(build_huffman_tree("").is_none());
    }

    #[test]
    fn test_huffman_codes_are_prefix_free_and_favor_common_symbols() {
        let tree = build_huffman_tree("aaaaaaaabbbc").unwrap();
        let codes = huffman_codes(&tree);
        assert_eq!(codes.len(), 3);
        assert!(codes[&'a'].len() < codes[&'c'].len());

        let all: Vec<&String> = codes.values().collect();
        for (i, a) in all.iter().enumerate() {
            for (j, b) in all.iter().enumerate() {
                if i != j {
                    assert!(!b.starts_with(a.as_str()), "{a} is a prefix of {b}");
                }
            }
        }
    }

    #[test]
    fn test_huffman_single_symbol() {
        let tree = build_huffman_tree("zzzz").unwrap();
        assert_eq!(tree.freq, 4);
        assert_eq!(huffman_codes(&tree), BTreeMap::from([('z', "0".to_string())]));
    }

    #[test]
    fn test_dijkstra() {
        let graph = vec![
            edges(&[(1, 4), (2, 1)]),
            edges(&[(3, 1)]),
            edges(&[(1, 2), (3, 5)]),
            edges(&[(4, 3)]),
            edges(&[]),
        ];
        assert_eq!(dijkstra(&graph, 0), vec![Some(0), Some(3), Some(1), Some(4), Some(7)]);
        assert_eq!(dijkstra(&graph, 3), vec![None, None, None, Some(0), Some(3)]);
    }

    #[test]
    fn test_dijkstra_out_of_range() {
        let graph = vec![edges(&[(5, 1)]), edges(&[])];
        assert_eq!(dijkstra(&graph, 0), vec![Some(0), None]);
        assert_eq!(dijkstra(&graph, 9), vec![None, None]);
    }

    #[test]
    fn test_dijkstra_skips_overflowing_paths() {
        let graph = vec![
            edges(&[(1, u64::MAX - 1), (2, 5)]),
            edges(&[(2, 10)]),
            edges(&[]),
        ];
        assert_eq!(dijkstra(&graph, 0), vec![Some(0), Some(u64::MAX - 1), Some(5)]);

        let graph = vec![edges(&[(1, u64::MAX)]), edges(&[(2, 1)]), edges(&[])];
        assert_eq!(dijkstra(&graph, 0), vec![Some(0), Some(u64::MAX), None]);
    }
}
