//! Data Structures 4: Undirected Graph
//!
//! Adjacency lists keyed by vertex in a `BTreeMap`, so iteration order
//! (and therefore every printout) is deterministic.
//!
//! - BFS visits vertices in layers using a `VecDeque`.
//! - DFS is iterative with an explicit stack, so deep graphs cannot
//!   overflow the call stack. A recursive version is kept for comparison.
//!
//! Run with: cargo run --bin ds_graph

use colored::Colorize;
use itertools::Itertools;
use std::collections::{BTreeMap, HashSet, VecDeque};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Default, Clone)]
pub struct Graph {
    vertices: BTreeMap<u32, Vec<u32>>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a vertex with no edges. Re-adding an existing vertex keeps its edges.
    pub fn add_vertex(&mut self, vertex: u32) {
        self.vertices.entry(vertex).or_default();
    }

    /// Adds an undirected edge, creating either endpoint if needed.
    pub fn add_edge(&mut self, from: u32, to: u32) {
        self.vertices.entry(from).or_default().push(to);
        self.vertices.entry(to).or_default().push(from);
        debug!(from, to, "edge added");
    }

    pub fn neighbors(&self, vertex: u32) -> &[u32] {
        self.vertices.get(&vertex).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Undirected edges added so far. Each `add_edge` counts once, including
    /// self-loops and repeated edges between the same pair.
    pub fn edge_count(&self) -> usize {
        self.vertices.values().map(Vec::len).sum::<usize>() / 2
    }

    pub fn contains(&self, vertex: u32) -> bool {
        self.vertices.contains_key(&vertex)
    }

    /// Breadth-first order from `start`. A vertex not in the graph is
    /// visited alone, giving `[start]`.
    pub fn bfs(&self, start: u32) -> Vec<u32> {
        let mut visited = HashSet::from([start]);
        let mut queue = VecDeque::from([start]);
        let mut order = Vec::new();

        while let Some(vertex) = queue.pop_front() {
            order.push(vertex);
            for &next in self.neighbors(vertex) {
                if visited.insert(next) {
                    queue.push_back(next);
                }
            }
        }
        order
    }

    /// Depth-first order from `start`, matching the recursive visit order.
    pub fn dfs(&self, start: u32) -> Vec<u32> {
        let mut visited = HashSet::new();
        let mut stack = vec![start];
        let mut order = Vec::new();

        while let Some(vertex) = stack.pop() {
            if !visited.insert(vertex) {
                continue;
            }
            order.push(vertex);
            // Reversed so the first neighbor is explored first.
            for &next in self.neighbors(vertex).iter().rev() {
                if !visited.contains(&next) {
                    stack.push(next);
                }
            }
        }
        order
    }

    pub fn dfs_recursive(&self, start: u32) -> Vec<u32> {
        fn visit(graph: &Graph, vertex: u32, visited: &mut HashSet<u32>, order: &mut Vec<u32>) {
            visited.insert(vertex);
            order.push(vertex);
            for &next in graph.neighbors(vertex) {
                if !visited.contains(&next) {
                    visit(graph, next, visited, order);
                }
            }
        }

        let mut order = Vec::new();
        visit(self, start, &mut HashSet::new(), &mut order);
        order
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let mut graph = Graph::new();

    println!("{}", "Example 1: Building the graph".bold());
    for v in 0..6 {
        graph.add_vertex(v);
    }
    for (from, to) in [(0, 1), (1, 2), (0, 3), (1, 4), (2, 5), (3, 4), (4, 5)] {
        graph.add_edge(from, to);
    }
    for v in 0..6 {
        println!("{} -> [{}]", v, graph.neighbors(v).iter().join(", "));
    }
    println!("Vertices: {}, edges: {}", graph.vertex_count(), graph.edge_count());

    println!("\n{}", "Example 2: Breadth-first search from 0".bold());
    println!("BFS: {}", graph.bfs(0).iter().join(" "));

    println!("\n{}", "Example 3: Depth-first search from 0".bold());
    println!("DFS (iterative): {}", graph.dfs(0).iter().join(" "));
    println!("DFS (recursive): {}", graph.dfs_recursive(0).iter().join(" "));

    println!("\n{}", "Example 4: Starting outside the graph".bold());
    println!("Contains 9? {}", graph.contains(9));
    println!("BFS from 9: {}", graph.bfs(9).iter().join(" "));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Graph {
        let mut graph = Graph::new();
        for (from, to) in [(0, 1), (1, 2), (0, 3), (1, 4), (2, 5), (3, 4), (4, 5)] {
            graph.add_edge(from, to);
        }
        graph
    }

    #[test]
    fn test_edges_are_undirected() {
        let graph = sample();
        assert_eq!(graph.neighbors(0), &[1, 3]);
        assert_eq!(graph.neighbors(4), &[1, 3, 5]);
        assert_eq!(graph.vertex_count(), 6);
    }

    #[test]
    fn test_edge_count() {
        let mut graph = sample();
        assert_eq!(graph.edge_count(), 7);
        graph.add_vertex(9);
        assert_eq!(graph.edge_count(), 7);
        graph.add_edge(9, 9);
        assert_eq!(graph.edge_count(), 8);
        assert_eq!(Graph::new().edge_count(), 0);
    }

    #[test]
    fn test_bfs_order() {
        assert_eq!(sample().bfs(0), vec![0, 1, 3, 2, 4, 5]);
    }

    #[test]
    fn test_dfs_order_matches_recursive() {
        let graph = sample();
        assert_eq!(graph.dfs(0), vec![0, 1, 2, 5, 4, 3]);
        assert_eq!(graph.dfs(0), graph.dfs_recursive(0));
        assert_eq!(graph.dfs(3), graph.dfs_recursive(3));
    }

    #[test]
    fn test_unknown_start_visits_only_itself() {
        let graph = sample();
        assert_eq!(graph.bfs(42), vec![42]);
        assert_eq!(graph.dfs(42), vec![42]);
        assert_eq!(graph.dfs_recursive(42), vec![42]);
        assert_eq!(Graph::new().bfs(7), vec![7]);
        assert!(graph.neighbors(42).is_empty());
        assert!(!graph.contains(42));
    }

    #[test]
    fn test_isolated_vertex_is_only_itself() {
        let mut graph = sample();
        graph.add_vertex(9);
        assert_eq!(graph.bfs(9), vec![9]);
        assert_eq!(graph.dfs(9), vec![9]);
    }

    #[test]
    fn test_long_path_does_not_overflow_iterative_dfs() {
        let mut graph = Graph::new();
        for v in 0..100_000 {
            graph.add_edge(v, v + 1);
        }
        assert_eq!(graph.dfs(0).len(), 100_001);
    }
}
