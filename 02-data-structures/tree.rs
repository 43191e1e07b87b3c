//! Data Structures 5: Binary Search Tree
//!
//! Smaller keys go left, everything else (including duplicates) goes right.
//! Insert and search are loops over `&mut Option<Box<_>>` links, and the
//! three depth-first traversals use an explicit stack, so a degenerate
//! (sorted-input) tree never recurses once per level.
//!
//! Run with: cargo run --bin ds_tree

use colored::Colorize;
use itertools::Itertools;
use tracing::debug;
use tracing_subscriber::EnvFilter;

type Link<T> = Option<Box<TreeNode<T>>>;

#[derive(Debug)]
struct TreeNode<T> {
    value: T,
    left: Link<T>,
    right: Link<T>,
}

#[derive(Debug)]
pub struct BinarySearchTree<T> {
    root: Link<T>,
    len: usize,
}

impl<T: Ord> BinarySearchTree<T> {
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    pub fn insert(&mut self, value: T) {
        let mut link = &mut self.root;
        while let Some(node) = link {
            link = if value < node.value {
                &mut node.left
            } else {
                &mut node.right
            };
        }
        *link = Some(Box::new(TreeNode {
            value,
            left: None,
            right: None,
        }));
        self.len += 1;
        debug!(len = self.len, "inserted");
    }

    pub fn search(&self, value: &T) -> bool {
        let mut link = &self.root;
        while let Some(node) = link {
            if *value == node.value {
                return true;
            }
            link = if *value < node.value {
                &node.left
            } else {
                &node.right
            };
        }
        false
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn min(&self) -> Option<&T> {
        let mut node = self.root.as_deref()?;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        Some(&node.value)
    }

    pub fn max(&self) -> Option<&T> {
        let mut node = self.root.as_deref()?;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        Some(&node.value)
    }

    /// Number of nodes on the longest root-to-leaf path; 0 for an empty tree.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack: Vec<(&TreeNode<T>, usize)> =
            self.root.as_deref().map(|n| (n, 1)).into_iter().collect();
        while let Some((node, depth)) = stack.pop() {
            height = height.max(depth);
            for child in [node.left.as_deref(), node.right.as_deref()].into_iter().flatten() {
                stack.push((child, depth + 1));
            }
        }
        height
    }

    /// Left, node, right: yields the values in sorted order.
    pub fn inorder_traversal(&self) -> Vec<&T> {
        let mut out = Vec::with_capacity(self.len);
        let mut stack = Vec::new();
        let mut current = self.root.as_deref();

        loop {
            while let Some(node) = current {
                stack.push(node);
                current = node.left.as_deref();
            }
            let Some(node) = stack.pop() else { break };
            out.push(&node.value);
            current = node.right.as_deref();
        }
        out
    }

    /// Node, left, right.
    pub fn preorder_traversal(&self) -> Vec<&T> {
        let mut out = Vec::with_capacity(self.len);
        let mut stack: Vec<&TreeNode<T>> = self.root.as_deref().into_iter().collect();

        while let Some(node) = stack.pop() {
            out.push(&node.value);
            // Right first so left is popped first.
            stack.extend(node.right.as_deref());
            stack.extend(node.left.as_deref());
        }
        out
    }

    /// Left, right, node. Built as node-right-left, then reversed.
    pub fn postorder_traversal(&self) -> Vec<&T> {
        let mut out = Vec::with_capacity(self.len);
        let mut stack: Vec<&TreeNode<T>> = self.root.as_deref().into_iter().collect();

        while let Some(node) = stack.pop() {
            out.push(&node.value);
            stack.extend(node.left.as_deref());
            stack.extend(node.right.as_deref());
        }
        out.reverse();
        out
    }
}

impl<T: Ord> Default for BinarySearchTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> FromIterator<T> for BinarySearchTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        for value in iter {
            tree.insert(value);
        }
        tree
    }
}

// Flattens the tree so dropping a deep chain does not recurse per level.
impl<T> Drop for BinarySearchTree<T> {
    fn drop(&mut self) {
        let mut stack: Vec<Box<TreeNode<T>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    println!("{}", "Example 1: Inserting values".bold());
    let values = [5, 3, 7, 1, 4, 6, 8];
    println!("Inserting: {}", values.iter().join(", "));
    let tree: BinarySearchTree<i32> = values.into_iter().collect();

    println!("\n{}", "Example 2: Traversals".bold());
    println!("Inorder:   {}", tree.inorder_traversal().iter().join(" "));
    println!("Preorder:  {}", tree.preorder_traversal().iter().join(" "));
    println!("Postorder: {}", tree.postorder_traversal().iter().join(" "));

    println!("\n{}", "Example 3: Searching".bold());
    for target in [4, 9] {
        println!("Search {}: {}", target, tree.search(&target));
    }

    println!("\n{}", "Example 4: Shape".bold());
    println!("Size: {}, height: {}, empty: {}", tree.len(), tree.height(), tree.is_empty());
    if let (Some(min), Some(max)) = (tree.min(), tree.max()) {
        println!("Min: {}, max: {}", min, max);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn sample() -> BinarySearchTree<i32> {
        [5, 3, 7, 1, 4, 6, 8].into_iter().collect()
    }

    fn owned(values: Vec<&i32>) -> Vec<i32> {
        values.into_iter().copied().collect()
    }

    #[test]
    fn test_traversals() {
        let tree = sample();
        assert_eq!(owned(tree.inorder_traversal()), vec![1, 3, 4, 5, 6, 7, 8]);
        assert_eq!(owned(tree.preorder_traversal()), vec![5, 3, 1, 4, 7, 6, 8]);
        assert_eq!(owned(tree.postorder_traversal()), vec![1, 4, 3, 6, 8, 7, 5]);
    }

    #[test]
    fn test_search() {
        let tree = sample();
        assert!(tree.search(&4));
        assert!(tree.search(&8));
        assert!(!tree.search(&9));
        assert!(!BinarySearchTree::<i32>::new().search(&1));
    }

    #[test]
    fn test_shape_queries() {
        let tree = sample();
        assert_eq!(tree.len(), 7);
        assert_eq!(tree.height(), 3);
        assert_eq!(tree.min(), Some(&1));
        assert_eq!(tree.max(), Some(&8));

        let empty = BinarySearchTree::<i32>::new();
        assert!(empty.is_empty());
        assert_eq!(empty.height(), 0);
        assert_eq!(empty.min(), None);
        assert!(empty.inorder_traversal().is_empty());
    }

    #[test]
    fn test_duplicates_go_right() {
        let tree: BinarySearchTree<i32> = [2, 2, 2].into_iter().collect();
        assert_eq!(owned(tree.inorder_traversal()), vec![2, 2, 2]);
        assert_eq!(tree.height(), 3);
    }

    #[test]
    fn test_sorted_input_is_deep_but_safe() {
        let tree: BinarySearchTree<u32> = (0..5_000).collect();
        assert_eq!(tree.height(), 5_000);
        assert_eq!(tree.inorder_traversal().len(), 5_000);
        drop(tree);
    }

    proptest! {
        #[test]
        fn prop_inorder_is_sorted_input(values: Vec<i16>) {
            let tree: BinarySearchTree<i16> = values.iter().copied().collect();
            let mut expected = values.clone();
            expected.sort();
            let inorder: Vec<i16> = tree.inorder_traversal().into_iter().copied().collect();
            prop_assert_eq!(inorder, expected);
            for v in &values {
                prop_assert!(tree.search(v));
            }
        }
    }
}
