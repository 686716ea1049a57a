//! Min-priority queue over pooled nodes.
//!
//! A hand-rolled binary heap of [`NodeId`]s keyed by each node's `f`, read
//! through the pool at comparison time. Decrease-key is handled the blunt
//! way: the caller lowers `f` in place and asks for a full O(N) rebuild via
//! [`reheap`](OpenList::reheap). Ordering between equal-`f` nodes is
//! unspecified.

use crate::node::{NodeId, NodePool};

/// Binary min-heap of open nodes ordered by `f`.
///
/// Every id in the list has its node's open flag set, and a node is in the
/// list at most once: [`push`](OpenList::push) sets the flag and
/// [`pop_min`](OpenList::pop_min) clears it.
///
/// # Example
///
/// ```
/// use jump_pathfind::node::NodePool;
/// use jump_pathfind::open_list::OpenList;
/// use vox_spatial::VoxelPos;
///
/// let mut pool = NodePool::new();
/// let mut open = OpenList::new();
///
/// let id = pool.get_or_create(VoxelPos::new(1, 0, 0));
/// open.push(&mut pool, id);
/// assert!(pool.get(id).is_open());
///
/// assert_eq!(open.pop_min(&mut pool), Some(id));
/// assert!(!pool.get(id).is_open());
/// assert_eq!(open.pop_min(&mut pool), None);
/// ```
#[derive(Debug, Default)]
pub struct OpenList {
    heap: Vec<NodeId>,
}

impl OpenList {
    /// Creates an empty list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of nodes in the list.
    #[must_use]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Whether the list is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Inserts a node. The node must not already be open; its open flag is
    /// set here. O(log N).
    pub fn push(&mut self, pool: &mut NodePool, id: NodeId) {
        debug_assert!(!pool.get(id).is_open(), "node is already on the list");
        pool.get_mut(id).set_open();
        self.heap.push(id);
        self.sift_up(pool, self.heap.len() - 1);
    }

    /// Removes and returns the node with the minimum `f`, clearing its open
    /// flag. O(log N).
    pub fn pop_min(&mut self, pool: &mut NodePool) -> Option<NodeId> {
        if self.heap.is_empty() {
            return None;
        }
        let last = self.heap.len() - 1;
        self.heap.swap(0, last);
        let id = self.heap.pop()?;
        if !self.heap.is_empty() {
            self.sift_down(pool, 0);
        }
        debug_assert!(pool.get(id).is_open(), "popped node lost its open flag");
        debug_assert!(!pool.get(id).is_closed(), "closed node was re-popped");
        pool.get_mut(id).clear_open();
        Some(id)
    }

    /// Restores the heap property after some member's `f` decreased in
    /// place. O(N) Floyd rebuild.
    pub fn reheap(&mut self, pool: &NodePool) {
        for i in (0..self.heap.len() / 2).rev() {
            self.sift_down(pool, i);
        }
    }

    /// Empties the list without touching node flags; callers reset node
    /// state separately.
    pub fn clear(&mut self) {
        self.heap.clear();
    }

    /// Empties the list and returns the backing storage to the allocator.
    pub fn release(&mut self) {
        self.heap = Vec::new();
    }

    fn less(&self, pool: &NodePool, a: usize, b: usize) -> bool {
        pool.get(self.heap[a]).f() < pool.get(self.heap[b]).f()
    }

    fn sift_up(&mut self, pool: &NodePool, mut idx: usize) {
        while idx > 0 {
            let up = (idx - 1) / 2;
            if !self.less(pool, idx, up) {
                break;
            }
            self.heap.swap(idx, up);
            idx = up;
        }
    }

    fn sift_down(&mut self, pool: &NodePool, mut idx: usize) {
        let len = self.heap.len();
        loop {
            let left = 2 * idx + 1;
            if left >= len {
                break;
            }
            let right = left + 1;
            let mut least = idx;
            if self.less(pool, left, least) {
                least = left;
            }
            if right < len && self.less(pool, right, least) {
                least = right;
            }
            if least == idx {
                break;
            }
            self.heap.swap(idx, least);
            idx = least;
        }
    }
}
