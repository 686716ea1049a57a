//! Best-first search driver.

use jump_types::{DiagonalPolicy, SearchConfig};
use tracing::{debug, trace};
use vox_spatial::{Passability, VoxelPos};

use crate::heuristics::{euclidean, manhattan};
use crate::node::{NodeId, NodePool};
use crate::open_list::OpenList;

/// Offsets a single coordinate by a signed delta, wrapping like
/// [`VoxelPos::offset`] so off-grid probes read as blocked.
#[inline]
pub(crate) const fn off(coord: u32, delta: i32) -> u32 {
    coord.wrapping_add_signed(delta)
}

/// Jump point search over a voxel occupancy grid.
///
/// The searcher borrows a read-only [`Passability`] oracle and owns all
/// mutable search state (node pool, open list, scratch buffers), so one
/// instance serves one search at a time; concurrent searches over a shared
/// grid each need their own searcher.
///
/// [`find_path`](Self::find_path) never fails loudly: blocked endpoints,
/// unreachable goals and internal misfires all surface as an empty path.
/// Callers that need to distinguish those cases pre-validate endpoints
/// against the grid.
///
/// # Example
///
/// ```
/// use jump_pathfind::JumpPointSearcher;
/// use vox_spatial::{VoxelGrid, VoxelPos};
///
/// let grid = VoxelGrid::open(3, 3, 3);
/// let mut searcher = JumpPointSearcher::new(&grid);
///
/// let path = searcher.find_path(VoxelPos::new(0, 0, 0), VoxelPos::new(2, 2, 2));
/// assert_eq!(path, vec![VoxelPos::new(0, 0, 0), VoxelPos::new(2, 2, 2)]);
/// ```
#[derive(Debug)]
pub struct JumpPointSearcher<'g, G> {
    grid: &'g G,
    pub(crate) policy: DiagonalPolicy,
    pub(crate) skip: u32,
    pub(crate) pool: NodePool,
    open: OpenList,
    pub(crate) finish_pos: VoxelPos,
    nbuf: Vec<VoxelPos>,
    pub(crate) steps_total: u64,
}

impl<'g, G: Passability> JumpPointSearcher<'g, G> {
    /// Creates a searcher with the default configuration
    /// ([`DiagonalPolicy::Always`], skip 1).
    #[must_use]
    pub fn new(grid: &'g G) -> Self {
        Self::with_config(grid, SearchConfig::default())
    }

    /// Creates a searcher with an explicit configuration.
    #[must_use]
    pub fn with_config(grid: &'g G, config: SearchConfig) -> Self {
        Self {
            grid,
            policy: config.policy(),
            skip: clamp_skip(config.skip()),
            pool: NodePool::new(),
            open: OpenList::new(),
            finish_pos: VoxelPos::INVALID,
            nbuf: Vec::with_capacity(26),
            steps_total: 0,
        }
    }

    /// The active diagonal movement policy.
    #[must_use]
    pub const fn policy(&self) -> DiagonalPolicy {
        self.policy
    }

    /// The active grid stride.
    #[must_use]
    pub const fn skip(&self) -> u32 {
        self.skip
    }

    /// Sets the grid stride; values below 1 clamp to 1.
    pub fn set_skip(&mut self, skip: u32) {
        self.skip = clamp_skip(skip);
    }

    /// Total voxels slid across by jump routines since construction or the
    /// last [`free_memory`](Self::free_memory).
    #[must_use]
    pub const fn steps_traversed(&self) -> u64 {
        self.steps_total
    }

    /// Releases the node pool and open list buffers and resets telemetry.
    ///
    /// Between searches the pool is normally retained so repeat searches
    /// reuse its allocations; call this to give the memory back instead.
    pub fn free_memory(&mut self) {
        self.pool.release();
        self.open.release();
        self.nbuf = Vec::with_capacity(26);
        self.steps_total = 0;
    }

    /// Finds a path from `start` to `finish`.
    ///
    /// Both endpoints are floor-aligned to the stride before searching.
    /// Returns:
    ///
    /// - an empty vector if either endpoint is blocked (before or after
    ///   alignment) or no path exists,
    /// - a single-element vector when start and finish coincide,
    /// - otherwise the sequence of jump points from the aligned start to the
    ///   aligned finish. Consecutive points are connected by straight
    ///   axis-aligned or diagonal segments that are collision-free by
    ///   construction; [`expand_jump_path`](crate::path::expand_jump_path)
    ///   recovers the full voxel sequence.
    pub fn find_path(&mut self, start: VoxelPos, finish: VoxelPos) -> Vec<VoxelPos> {
        if !self.grid.passable_pos(start) || !self.grid.passable_pos(finish) {
            return Vec::new();
        }
        if start == finish {
            return vec![start];
        }

        self.pool.reset_states();
        self.open.clear();

        let start = start.align_down(self.skip);
        let finish = finish.align_down(self.skip);
        // Alignment can move an endpoint onto a blocked cell.
        if !self.grid.passable_pos(start) || !self.grid.passable_pos(finish) {
            return Vec::new();
        }

        debug!(%start, %finish, skip = self.skip, policy = ?self.policy, "starting search");

        let Some(start_id) = self.materialize(start) else {
            return Vec::new();
        };
        let Some(finish_id) = self.materialize(finish) else {
            return Vec::new();
        };
        self.finish_pos = finish;

        self.open.push(&mut self.pool, start_id);

        let mut expanded = 0u64;
        while let Some(cur) = self.open.pop_min(&mut self.pool) {
            self.pool.get_mut(cur).set_closed();
            if cur == finish_id {
                let path = self.backtrace(cur);
                debug!(
                    len = path.len(),
                    expanded,
                    steps = self.steps_total,
                    "path found"
                );
                return path;
            }
            expanded += 1;
            self.identify_successors(cur);
        }

        debug!(expanded, "open list drained without reaching the finish");
        Vec::new()
    }

    /// Expands one node: prune neighbours, jump from each candidate, relax.
    fn identify_successors(&mut self, cur: NodeId) {
        let mut buf = std::mem::take(&mut self.nbuf);
        buf.clear();
        self.find_neighbours(cur, &mut buf);

        let cur_pos = self.pool.get(cur).pos();
        let cur_g = self.pool.get(cur).g();
        trace!(pos = %cur_pos, g = cur_g, candidates = buf.len(), "expanding");

        for &cand in &buf {
            let jp = self.jump(cand, cur_pos);
            if !jp.is_valid() {
                continue;
            }

            let Some(jid) = self.materialize(jp) else {
                debug_assert!(false, "jump returned an impassable position");
                continue;
            };
            if jid == cur || self.pool.get(jid).is_closed() {
                continue;
            }

            let tentative = cur_g + euclidean(cur_pos, jp);
            let estimate = tentative + manhattan(jp, self.finish_pos);
            let jn = self.pool.get_mut(jid);
            let was_open = jn.is_open();
            if !was_open || tentative < jn.g() {
                jn.relax(tentative, estimate, Some(cur));
                if was_open {
                    self.open.reheap(&self.pool);
                } else {
                    self.open.push(&mut self.pool, jid);
                }
            }
        }

        self.nbuf = buf;
    }

    /// Pools the node for `pos`, or `None` if the cell is not passable.
    fn materialize(&mut self, pos: VoxelPos) -> Option<NodeId> {
        if !self.grid.passable_pos(pos) {
            return None;
        }
        Some(self.pool.get_or_create(pos))
    }

    /// Walks parent links back from the finish and reverses.
    fn backtrace(&self, tail: NodeId) -> Vec<VoxelPos> {
        let mut path = Vec::new();
        let mut cur = Some(tail);
        while let Some(id) = cur {
            let node = self.pool.get(id);
            debug_assert!(node.parent() != Some(id), "parent link cycles");
            path.push(node.pos());
            cur = node.parent();
        }
        path.reverse();
        path
    }

    /// Shorthand for the grid oracle, taking pre-offset coordinates.
    #[inline]
    pub(crate) fn at(&self, x: u32, y: u32, z: u32) -> bool {
        self.grid.passable(x, y, z)
    }

    /// The stride as a signed step, for offset arithmetic. `skip` is
    /// clamped to `i32::MAX` at configuration time.
    #[inline]
    #[allow(clippy::cast_possible_wrap)]
    pub(crate) const fn stride(&self) -> i32 {
        self.skip as i32
    }
}

const fn clamp_skip(skip: u32) -> u32 {
    // Strides must stay representable as signed offsets.
    let max = i32::MAX as u32;
    if skip < 1 {
        1
    } else if skip > max {
        max
    } else {
        skip
    }
}
