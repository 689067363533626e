use std::fmt::Debug;

use crate::{Error, Result};

/// Handle to a node of a [`FibonacciHeap`], returned by `insert`
///
/// A handle stays valid for the lifetime of the heap that issued it. Once its
/// node has been extracted, operations on it fail with `InvalidHandle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeHandle(usize);

impl NodeHandle {
    /// Arena slot backing this handle
    pub fn index(&self) -> usize {
        self.0
    }
}

/// A heap node. Sibling links form a circular list, so a lone node points to itself.
#[derive(Debug, Clone)]
struct FibNode<V, K> {
    key: K,
    payload: V,
    parent: Option<usize>,
    child: Option<usize>,
    left: usize,
    right: usize,
    degree: usize,
    marked: bool,
    in_heap: bool,
}

/// Fibonacci heap over `(key, payload)` pairs, stored in an index arena
///
/// Operations and amortized costs:
/// - `insert`, `find_min`, `decrease_key`, `merge`: O(1)
/// - `extract_min`: O(log n)
///
/// Nodes live in a `Vec` and link to each other by index, which keeps the
/// circular sibling lists and parent back-references free of raw pointers.
/// Extracted slots are not reused; a heap lives for a single shortest-path run.
#[derive(Debug, Clone)]
pub struct FibonacciHeap<V, K>
where
    V: Copy + Debug,
    K: PartialOrd + Copy + Debug,
{
    nodes: Vec<FibNode<V, K>>,
    min: Option<usize>,
    len: usize,
}

/// Maps handles of a heap that was merged into another onto the merged heap
#[derive(Debug, Clone, Copy)]
pub struct MergedHandles {
    offset: usize,
}

impl MergedHandles {
    pub fn translate(&self, handle: NodeHandle) -> NodeHandle {
        NodeHandle(handle.0 + self.offset)
    }
}

impl<V, K> Default for FibonacciHeap<V, K>
where
    V: Copy + Debug,
    K: PartialOrd + Copy + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<V, K> FibonacciHeap<V, K>
where
    V: Copy + Debug,
    K: PartialOrd + Copy + Debug,
{
    /// Creates a new empty heap
    pub fn new() -> Self {
        FibonacciHeap {
            nodes: Vec::new(),
            min: None,
            len: 0,
        }
    }

    /// Creates an empty heap with room for `capacity` nodes
    pub fn with_capacity(capacity: usize) -> Self {
        FibonacciHeap {
            nodes: Vec::with_capacity(capacity),
            min: None,
            len: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.min.is_none()
    }

    /// Number of nodes currently in the heap
    pub fn len(&self) -> usize {
        self.len
    }

    /// True while the handle's node has not been extracted
    pub fn contains(&self, handle: NodeHandle) -> bool {
        self.nodes.get(handle.0).map_or(false, |n| n.in_heap)
    }

    /// Current key of a node still in the heap
    pub fn key(&self, handle: NodeHandle) -> Result<K> {
        self.live(handle).map(|idx| self.nodes[idx].key)
    }

    /// Adds a new singleton tree to the root list
    pub fn insert(&mut self, payload: V, key: K) -> NodeHandle {
        let idx = self.nodes.len();
        self.nodes.push(FibNode {
            key,
            payload,
            parent: None,
            child: None,
            left: idx,
            right: idx,
            degree: 0,
            marked: false,
            in_heap: true,
        });
        self.add_root(idx);
        self.len += 1;
        NodeHandle(idx)
    }

    /// Returns the minimum `(payload, key)` without removing it
    pub fn find_min(&self) -> Result<(V, K)> {
        let min = self.min.ok_or(Error::EmptyHeap)?;
        let node = &self.nodes[min];
        Ok((node.payload, node.key))
    }

    /// Removes and returns the minimum `(payload, key)`
    pub fn extract_min(&mut self) -> Result<(V, K)> {
        let z = self.min.ok_or(Error::EmptyHeap)?;

        // Promote every child of z to the root list.
        if let Some(first) = self.nodes[z].child.take() {
            for child in self.ring(first) {
                self.unlink(child);
                self.add_root(child);
            }
            self.nodes[z].degree = 0;
        }

        let right = self.nodes[z].right;
        self.unlink(z);
        if right == z {
            self.min = None;
        } else {
            self.min = Some(right);
            self.consolidate();
        }

        self.len -= 1;
        let node = &mut self.nodes[z];
        node.in_heap = false;
        node.parent = None;
        Ok((node.payload, node.key))
    }

    /// Lowers the key of a node and restores heap order
    ///
    /// Fails with `InvalidKey` unless `new_key` is strictly smaller than the
    /// current key; the heap is left untouched in that case.
    pub fn decrease_key(&mut self, handle: NodeHandle, new_key: K) -> Result<()> {
        let x = self.live(handle)?;
        if !(new_key < self.nodes[x].key) {
            return Err(Error::InvalidKey);
        }

        self.nodes[x].key = new_key;
        if let Some(parent) = self.nodes[x].parent {
            if new_key < self.nodes[parent].key {
                self.cut(x, parent);
                self.cascading_cut(parent);
            }
        }

        if let Some(min) = self.min {
            if new_key < self.nodes[min].key {
                self.min = Some(x);
            }
        }
        Ok(())
    }

    /// Melds `other` into this heap in O(1) plus the cost of moving its arena
    ///
    /// The returned translator turns handles issued by `other` into handles
    /// valid for `self`.
    pub fn merge(&mut self, other: Self) -> MergedHandles {
        let offset = self.nodes.len();
        let shift = |i: usize| i + offset;

        self.nodes.extend(other.nodes.into_iter().map(|mut n| {
            n.parent = n.parent.map(shift);
            n.child = n.child.map(shift);
            n.left = shift(n.left);
            n.right = shift(n.right);
            n
        }));
        self.len += other.len;

        if let Some(other_min) = other.min.map(shift) {
            match self.min {
                None => self.min = Some(other_min),
                Some(min) => {
                    // Splice the two root rings together.
                    let min_left = self.nodes[min].left;
                    let other_left = self.nodes[other_min].left;
                    self.nodes[min_left].right = other_min;
                    self.nodes[other_min].left = min_left;
                    self.nodes[other_left].right = min;
                    self.nodes[min].left = other_left;

                    if self.nodes[other_min].key < self.nodes[min].key {
                        self.min = Some(other_min);
                    }
                }
            }
        }

        MergedHandles { offset }
    }

    fn live(&self, handle: NodeHandle) -> Result<usize> {
        if self.contains(handle) {
            Ok(handle.0)
        } else {
            Err(Error::InvalidHandle(handle.0))
        }
    }

    /// Collects the members of the circular list starting at `start`
    fn ring(&self, start: usize) -> Vec<usize> {
        let mut members = vec![start];
        let mut current = self.nodes[start].right;
        while current != start {
            members.push(current);
            current = self.nodes[current].right;
        }
        members
    }

    /// Detaches `x` from its sibling ring, leaving it as a ring of one
    fn unlink(&mut self, x: usize) {
        let (left, right) = (self.nodes[x].left, self.nodes[x].right);
        self.nodes[left].right = right;
        self.nodes[right].left = left;
        self.nodes[x].left = x;
        self.nodes[x].right = x;
    }

    /// Inserts `x` immediately to the left of `anchor` in anchor's ring
    fn splice_before(&mut self, anchor: usize, x: usize) {
        let anchor_left = self.nodes[anchor].left;
        self.nodes[x].right = anchor;
        self.nodes[x].left = anchor_left;
        self.nodes[anchor_left].right = x;
        self.nodes[anchor].left = x;
    }

    fn add_root(&mut self, x: usize) {
        self.nodes[x].parent = None;
        self.nodes[x].marked = false;
        match self.min {
            None => {
                self.nodes[x].left = x;
                self.nodes[x].right = x;
                self.min = Some(x);
            }
            Some(min) => {
                self.splice_before(min, x);
                if self.nodes[x].key < self.nodes[min].key {
                    self.min = Some(x);
                }
            }
        }
    }

    /// Makes root `y` a child of root `x`
    fn link(&mut self, y: usize, x: usize) {
        self.unlink(y);
        match self.nodes[x].child {
            None => self.nodes[x].child = Some(y),
            Some(child) => self.splice_before(child, y),
        }
        self.nodes[y].parent = Some(x);
        self.nodes[y].marked = false;
        self.nodes[x].degree += 1;
    }

    /// Links equal-degree roots until all root degrees are distinct, then
    /// rebuilds the root list and the cached minimum
    fn consolidate(&mut self) {
        let Some(start) = self.min else { return };
        let mut by_degree: Vec<Option<usize>> = Vec::new();

        for root in self.ring(start) {
            let mut x = root;
            let mut degree = self.nodes[x].degree;
            loop {
                if degree >= by_degree.len() {
                    by_degree.resize(degree + 1, None);
                }
                let Some(mut y) = by_degree[degree].take() else { break };
                if self.nodes[y].key < self.nodes[x].key {
                    std::mem::swap(&mut x, &mut y);
                }
                self.link(y, x);
                degree += 1;
            }
            by_degree[degree] = Some(x);
        }

        self.min = None;
        for root in by_degree.into_iter().flatten() {
            self.add_root(root);
        }
    }

    /// Moves `x` from the child list of `parent` to the root list
    fn cut(&mut self, x: usize, parent: usize) {
        if self.nodes[x].right == x {
            self.nodes[parent].child = None;
        } else if self.nodes[parent].child == Some(x) {
            self.nodes[parent].child = Some(self.nodes[x].right);
        }
        self.unlink(x);
        self.nodes[parent].degree -= 1;
        self.add_root(x);
    }

    fn cascading_cut(&mut self, mut y: usize) {
        while let Some(parent) = self.nodes[y].parent {
            if !self.nodes[y].marked {
                self.nodes[y].marked = true;
                return;
            }
            self.cut(y, parent);
            y = parent;
        }
    }
}
