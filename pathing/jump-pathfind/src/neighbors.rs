//! Successor pruning.
//!
//! Given a node and the direction it was reached from, emit only the
//! candidates jump point search needs to consider: the natural
//! continuations of the move plus the forced neighbours created by nearby
//! blockers. Nodes without a parent (the start node) and all nodes under a
//! restricted diagonal policy instead get a full local expansion filtered
//! by the policy's flanking rules.
//!
//! The forced-neighbour shielding sets here must match the stopping tests
//! in the jump routines exactly; the two sides describe the same geometry
//! from opposite ends of a slide.

use jump_types::{DiagonalPolicy, Direction};
use vox_spatial::{Passability, VoxelPos};

use crate::node::NodeId;
use crate::search::{off, JumpPointSearcher};

impl<G: Passability> JumpPointSearcher<'_, G> {
    /// Emits successor candidates for `nid` into `out` (up to 26).
    pub(crate) fn find_neighbours(&self, nid: NodeId, out: &mut Vec<VoxelPos>) {
        let node = self.pool.get(nid);
        let pos = node.pos();

        // Directed pruning only applies when the full jump recursion runs;
        // under restricted policies every node expands locally so the
        // unit-jump driver sees all admissible moves.
        if self.policy == DiagonalPolicy::Always {
            if let Some(pid) = node.parent() {
                let parent_pos = self.pool.get(pid).pos();
                self.directed_neighbours(pos, parent_pos, out);
                return;
            }
        }
        self.local_neighbours(pos, out);
    }

    /// Full local expansion: every admissible, passable neighbour of `pos`.
    ///
    /// Builds a 3x3x3 scratch cube `b[i][j][k]` over the offsets
    /// `{-skip, 0, +skip}` on x, y, z. Axis entries record passability;
    /// face and volume entries record policy admissibility, then get
    /// overwritten with "admitted and passable" as each corner is emitted,
    /// because the volume combinators read the face results.
    fn local_neighbours(&self, pos: VoxelPos, out: &mut Vec<VoxelPos>) {
        let (x, y, z) = pos.as_tuple();
        let s = self.stride();
        let mut b = [[[false; 3]; 3]; 3];

        // Axis neighbours.
        b[2][1][1] = self.at(off(x, s), y, z);
        if b[2][1][1] {
            out.push(VoxelPos::new(off(x, s), y, z));
        }
        b[0][1][1] = self.at(off(x, -s), y, z);
        if b[0][1][1] {
            out.push(VoxelPos::new(off(x, -s), y, z));
        }
        b[1][2][1] = self.at(x, off(y, s), z);
        if b[1][2][1] {
            out.push(VoxelPos::new(x, off(y, s), z));
        }
        b[1][0][1] = self.at(x, off(y, -s), z);
        if b[1][0][1] {
            out.push(VoxelPos::new(x, off(y, -s), z));
        }
        b[1][1][2] = self.at(x, y, off(z, s));
        if b[1][1][2] {
            out.push(VoxelPos::new(x, y, off(z, s)));
        }
        b[1][1][0] = self.at(x, y, off(z, -s));
        if b[1][1][0] {
            out.push(VoxelPos::new(x, y, off(z, -s)));
        }

        if !self.policy.allows_diagonals() {
            return;
        }

        // Face diagonals, plane by plane. Index 0 maps to -skip, 2 to +skip.
        let deltas = [(0usize, -s), (2usize, s)];

        // Oxy
        b[0][0][1] = self.policy.admits_face(b[0][1][1], b[1][0][1]);
        b[0][2][1] = self.policy.admits_face(b[0][1][1], b[1][2][1]);
        b[2][2][1] = self.policy.admits_face(b[2][1][1], b[1][2][1]);
        b[2][0][1] = self.policy.admits_face(b[2][1][1], b[1][0][1]);
        for (i, dx) in deltas {
            for (j, dy) in deltas {
                if b[i][j][1] {
                    if self.at(off(x, dx), off(y, dy), z) {
                        out.push(VoxelPos::new(off(x, dx), off(y, dy), z));
                    } else {
                        b[i][j][1] = false;
                    }
                }
            }
        }

        // Oxz
        b[0][1][0] = self.policy.admits_face(b[1][1][0], b[0][1][1]);
        b[2][1][0] = self.policy.admits_face(b[1][1][0], b[2][1][1]);
        b[2][1][2] = self.policy.admits_face(b[1][1][2], b[2][1][1]);
        b[0][1][2] = self.policy.admits_face(b[1][1][2], b[0][1][1]);
        for (i, dx) in deltas {
            for (k, dz) in deltas {
                if b[i][1][k] {
                    if self.at(off(x, dx), y, off(z, dz)) {
                        out.push(VoxelPos::new(off(x, dx), y, off(z, dz)));
                    } else {
                        b[i][1][k] = false;
                    }
                }
            }
        }

        // Oyz
        b[1][0][0] = self.policy.admits_face(b[1][0][1], b[1][1][0]);
        b[1][0][2] = self.policy.admits_face(b[1][0][1], b[1][1][2]);
        b[1][2][2] = self.policy.admits_face(b[1][2][1], b[1][1][2]);
        b[1][2][0] = self.policy.admits_face(b[1][2][1], b[1][1][0]);
        for (j, dy) in deltas {
            for (k, dz) in deltas {
                if b[1][j][k] {
                    if self.at(x, off(y, dy), off(z, dz)) {
                        out.push(VoxelPos::new(x, off(y, dy), off(z, dz)));
                    } else {
                        b[1][j][k] = false;
                    }
                }
            }
        }

        // Volume diagonals: flanked by three axis cells and three face
        // diagonals, the latter already folded with passability above.
        b[0][0][0] =
            self.policy
                .admits_volume([b[1][1][0], b[1][0][1], b[0][1][1], b[1][0][0], b[0][1][0], b[0][0][1]]);
        b[0][2][0] =
            self.policy
                .admits_volume([b[1][1][0], b[1][2][1], b[0][1][1], b[1][2][0], b[0][1][0], b[0][2][1]]);
        b[2][2][0] =
            self.policy
                .admits_volume([b[1][1][0], b[1][2][1], b[2][1][1], b[1][2][0], b[2][1][0], b[2][2][1]]);
        b[2][0][0] =
            self.policy
                .admits_volume([b[1][1][0], b[1][0][1], b[2][1][1], b[1][0][0], b[2][1][0], b[2][0][1]]);
        b[0][0][2] =
            self.policy
                .admits_volume([b[1][1][2], b[1][0][1], b[0][1][1], b[1][0][2], b[0][1][2], b[0][0][1]]);
        b[0][2][2] =
            self.policy
                .admits_volume([b[1][1][2], b[1][2][1], b[0][1][1], b[1][2][2], b[0][1][2], b[0][2][1]]);
        b[2][2][2] =
            self.policy
                .admits_volume([b[1][1][2], b[1][2][1], b[2][1][1], b[1][2][2], b[2][1][2], b[2][2][1]]);
        b[2][0][2] =
            self.policy
                .admits_volume([b[1][1][2], b[1][0][1], b[2][1][1], b[1][0][2], b[2][1][2], b[2][0][1]]);

        for (i, dx) in deltas {
            for (j, dy) in deltas {
                if b[i][j][0] && self.at(off(x, dx), off(y, dy), off(z, -s)) {
                    out.push(VoxelPos::new(off(x, dx), off(y, dy), off(z, -s)));
                }
            }
        }
        for (i, dx) in deltas {
            for (j, dy) in deltas {
                if b[i][j][2] && self.at(off(x, dx), off(y, dy), off(z, s)) {
                    out.push(VoxelPos::new(off(x, dx), off(y, dy), off(z, s)));
                }
            }
        }
    }

    /// Directed pruning for a parented node under [`DiagonalPolicy::Always`].
    ///
    /// Case split on the arrival direction: natural continuations plus the
    /// forced neighbours whose shielding cells are blocked.
    fn directed_neighbours(&self, pos: VoxelPos, parent_pos: VoxelPos, out: &mut Vec<VoxelPos>) {
        let (x, y, z) = pos.as_tuple();
        let s = self.stride();
        let dir = Direction::between(parent_pos, pos);
        let (dx, dy, dz) = (dir.dx * s, dir.dy * s, dir.dz * s);

        if dx != 0 && dy != 0 && dz != 0 {
            self.prune_volume(x, y, z, dx, dy, dz, out);
        } else if dx != 0 && dy != 0 {
            self.prune_face_xy(x, y, z, dx, dy, out);
        } else if dx != 0 && dz != 0 {
            self.prune_face_xz(x, y, z, dx, dz, out);
        } else if dy != 0 && dz != 0 {
            self.prune_face_yz(x, y, z, dy, dz, out);
        } else if dx != 0 {
            self.prune_axis_x(x, y, z, dx, out);
        } else if dy != 0 {
            self.prune_axis_y(x, y, z, dy, out);
        } else if dz != 0 {
            self.prune_axis_z(x, y, z, dz, out);
        } else {
            debug_assert!(false, "parented node with zero arrival direction");
        }
    }

    #[inline]
    fn emit_if_passable(&self, out: &mut Vec<VoxelPos>, x: u32, y: u32, z: u32) {
        if self.at(x, y, z) {
            out.push(VoxelPos::new(x, y, z));
        }
    }

    /// Arrival along a volume diagonal: three axis continuations, three
    /// face continuations with their forced companions, then the volume
    /// continuation with its six forced patterns.
    #[allow(clippy::too_many_arguments)]
    fn prune_volume(
        &self,
        x: u32,
        y: u32,
        z: u32,
        dx: i32,
        dy: i32,
        dz: i32,
        out: &mut Vec<VoxelPos>,
    ) {
        // Axis continuations.
        self.emit_if_passable(out, off(x, dx), y, z);
        self.emit_if_passable(out, x, off(y, dy), z);
        self.emit_if_passable(out, x, y, off(z, dz));

        // Oxy
        self.emit_if_passable(out, off(x, dx), off(y, dy), z);
        if self.at(off(x, -dx), off(y, dy), z)
            && !self.at(off(x, -dx), y, z)
            && !self.at(off(x, -dx), y, off(z, -dz))
        {
            emit(out, off(x, -dx), off(y, dy), z);
        }
        if self.at(off(x, dx), off(y, -dy), z)
            && !self.at(x, off(y, -dy), z)
            && !self.at(x, off(y, -dy), off(z, -dz))
        {
            emit(out, off(x, dx), off(y, -dy), z);
        }

        // Oxz
        self.emit_if_passable(out, off(x, dx), y, off(z, dz));
        if self.at(off(x, -dx), y, off(z, dz))
            && !self.at(off(x, -dx), y, z)
            && !self.at(off(x, -dx), off(y, -dy), z)
        {
            emit(out, off(x, -dx), y, off(z, dz));
        }
        if self.at(off(x, dx), y, off(z, -dz))
            && !self.at(x, y, off(z, -dz))
            && !self.at(x, off(y, -dy), off(z, -dz))
        {
            emit(out, off(x, dx), y, off(z, -dz));
        }

        // Oyz
        self.emit_if_passable(out, x, off(y, dy), off(z, dz));
        if self.at(x, off(y, -dy), off(z, dz))
            && !self.at(x, off(y, -dy), z)
            && !self.at(off(x, -dx), off(y, -dy), z)
        {
            emit(out, x, off(y, -dy), off(z, dz));
        }
        if self.at(x, off(y, dy), off(z, -dz))
            && !self.at(x, y, off(z, -dz))
            && !self.at(off(x, -dx), y, off(z, -dz))
        {
            emit(out, x, off(y, dy), off(z, -dz));
        }

        // Volume continuation.
        self.emit_if_passable(out, off(x, dx), off(y, dy), off(z, dz));

        // Forced, one reversed component.
        if self.at(off(x, dx), off(y, dy), off(z, -dz)) && !self.at(x, y, off(z, -dz)) {
            emit(out, off(x, dx), off(y, dy), off(z, -dz));
        }
        if self.at(off(x, dx), off(y, -dy), off(z, dz)) && !self.at(x, off(y, -dy), z) {
            emit(out, off(x, dx), off(y, -dy), off(z, dz));
        }
        if self.at(off(x, -dx), off(y, dy), off(z, dz)) && !self.at(off(x, -dx), y, z) {
            emit(out, off(x, -dx), off(y, dy), off(z, dz));
        }

        // Forced, two reversed components.
        if self.at(off(x, dx), off(y, -dy), off(z, -dz))
            && !self.at(x, off(y, -dy), off(z, -dz))
            && !self.at(x, off(y, -dy), z)
            && !self.at(x, y, off(z, -dz))
        {
            emit(out, off(x, dx), off(y, -dy), off(z, -dz));
        }
        if self.at(off(x, -dx), off(y, dy), off(z, -dz))
            && !self.at(off(x, -dx), y, off(z, -dz))
            && !self.at(off(x, -dx), y, z)
            && !self.at(x, y, off(z, -dz))
        {
            emit(out, off(x, -dx), off(y, dy), off(z, -dz));
        }
        if self.at(off(x, -dx), off(y, -dy), off(z, dz))
            && !self.at(off(x, -dx), off(y, -dy), z)
            && !self.at(off(x, -dx), y, z)
            && !self.at(x, off(y, -dy), z)
        {
            emit(out, off(x, -dx), off(y, -dy), off(z, dz));
        }
    }

    /// Arrival along an xy face diagonal: the two axis continuations, the
    /// diagonal with its in-plane forced pair, and the out-of-plane sweep
    /// over blocked z-neighbours.
    fn prune_face_xy(&self, x: u32, y: u32, z: u32, dx: i32, dy: i32, out: &mut Vec<VoxelPos>) {
        let s = self.stride();

        self.emit_if_passable(out, off(x, dx), y, z);
        self.emit_if_passable(out, x, off(y, dy), z);

        self.emit_if_passable(out, off(x, dx), off(y, dy), z);
        if self.at(off(x, -dx), off(y, dy), z) && !self.at(off(x, -dx), y, z) {
            emit(out, off(x, -dx), off(y, dy), z);
        }
        if self.at(off(x, dx), off(y, -dy), z) && !self.at(x, off(y, -dy), z) {
            emit(out, off(x, dx), off(y, -dy), z);
        }

        for tdz in [-s, s] {
            let zz = off(z, tdz);
            if self.at(x, y, zz) {
                continue;
            }
            self.emit_if_passable(out, x, off(y, dy), zz);
            self.emit_if_passable(out, off(x, dx), y, zz);
            self.emit_if_passable(out, off(x, dx), off(y, dy), zz);

            if self.at(off(x, -dx), off(y, dy), zz)
                && !self.at(off(x, -dx), y, zz)
                && !self.at(off(x, -dx), y, z)
            {
                emit(out, off(x, -dx), off(y, dy), zz);
            }
            if self.at(off(x, dx), off(y, -dy), zz)
                && !self.at(x, off(y, -dy), zz)
                && !self.at(x, off(y, -dy), z)
            {
                emit(out, off(x, dx), off(y, -dy), zz);
            }
        }
    }

    /// Arrival along an xz face diagonal; the y axis is the out-of-plane
    /// sweep.
    fn prune_face_xz(&self, x: u32, y: u32, z: u32, dx: i32, dz: i32, out: &mut Vec<VoxelPos>) {
        let s = self.stride();

        self.emit_if_passable(out, off(x, dx), y, z);
        self.emit_if_passable(out, x, y, off(z, dz));

        self.emit_if_passable(out, off(x, dx), y, off(z, dz));
        if self.at(off(x, -dx), y, off(z, dz)) && !self.at(off(x, -dx), y, z) {
            emit(out, off(x, -dx), y, off(z, dz));
        }
        if self.at(off(x, dx), y, off(z, -dz)) && !self.at(x, y, off(z, -dz)) {
            emit(out, off(x, dx), y, off(z, -dz));
        }

        for tdy in [-s, s] {
            let yy = off(y, tdy);
            if self.at(x, yy, z) {
                continue;
            }
            self.emit_if_passable(out, off(x, dx), yy, z);
            self.emit_if_passable(out, x, yy, off(z, dz));
            self.emit_if_passable(out, off(x, dx), yy, off(z, dz));

            if self.at(off(x, -dx), yy, off(z, dz))
                && !self.at(off(x, -dx), yy, z)
                && !self.at(off(x, -dx), y, z)
            {
                emit(out, off(x, -dx), yy, off(z, dz));
            }
            if self.at(off(x, dx), yy, off(z, -dz))
                && !self.at(x, yy, off(z, -dz))
                && !self.at(x, y, off(z, -dz))
            {
                emit(out, off(x, dx), yy, off(z, -dz));
            }
        }
    }

    /// Arrival along a yz face diagonal; the x axis is the out-of-plane
    /// sweep.
    fn prune_face_yz(&self, x: u32, y: u32, z: u32, dy: i32, dz: i32, out: &mut Vec<VoxelPos>) {
        let s = self.stride();

        self.emit_if_passable(out, x, off(y, dy), z);
        self.emit_if_passable(out, x, y, off(z, dz));

        self.emit_if_passable(out, x, off(y, dy), off(z, dz));
        if self.at(x, off(y, -dy), off(z, dz)) && !self.at(x, off(y, -dy), z) {
            emit(out, x, off(y, -dy), off(z, dz));
        }
        if self.at(x, off(y, dy), off(z, -dz)) && !self.at(x, y, off(z, -dz)) {
            emit(out, x, off(y, dy), off(z, -dz));
        }

        for tdx in [-s, s] {
            let xx = off(x, tdx);
            if self.at(xx, y, z) {
                continue;
            }
            self.emit_if_passable(out, xx, off(y, dy), z);
            self.emit_if_passable(out, xx, y, off(z, dz));
            self.emit_if_passable(out, xx, off(y, dy), off(z, dz));

            if self.at(xx, off(y, -dy), off(z, dz))
                && !self.at(xx, off(y, -dy), z)
                && !self.at(x, off(y, -dy), z)
            {
                emit(out, xx, off(y, -dy), off(z, dz));
            }
            if self.at(xx, off(y, dy), off(z, -dz))
                && !self.at(xx, y, off(z, -dz))
                && !self.at(x, y, off(z, -dz))
            {
                emit(out, xx, off(y, dy), off(z, -dz));
            }
        }
    }

    /// Arrival along the x axis: the natural continuation plus the eight
    /// forced candidates that share shielding sets with the x jump routine.
    fn prune_axis_x(&self, x: u32, y: u32, z: u32, dx: i32, out: &mut Vec<VoxelPos>) {
        let s = self.stride();
        let xx = off(x, dx);

        self.emit_if_passable(out, xx, y, z);

        // Face-diagonal forced candidates.
        if self.at(xx, off(y, s), z) && !self.at(x, off(y, s), z) {
            emit(out, xx, off(y, s), z);
        }
        if self.at(xx, off(y, -s), z) && !self.at(x, off(y, -s), z) {
            emit(out, xx, off(y, -s), z);
        }
        if self.at(xx, y, off(z, s)) && !self.at(x, y, off(z, s)) {
            emit(out, xx, y, off(z, s));
        }
        if self.at(xx, y, off(z, -s)) && !self.at(x, y, off(z, -s)) {
            emit(out, xx, y, off(z, -s));
        }

        // Volume-diagonal forced candidates.
        for tdy in [-s, s] {
            for tdz in [-s, s] {
                if self.at(xx, off(y, tdy), off(z, tdz))
                    && !self.at(x, off(y, tdy), off(z, tdz))
                    && !self.at(x, off(y, tdy), z)
                    && !self.at(x, y, off(z, tdz))
                {
                    emit(out, xx, off(y, tdy), off(z, tdz));
                }
            }
        }
    }

    /// Arrival along the y axis.
    fn prune_axis_y(&self, x: u32, y: u32, z: u32, dy: i32, out: &mut Vec<VoxelPos>) {
        let s = self.stride();
        let yy = off(y, dy);

        self.emit_if_passable(out, x, yy, z);

        if self.at(off(x, s), yy, z) && !self.at(off(x, s), y, z) {
            emit(out, off(x, s), yy, z);
        }
        if self.at(off(x, -s), yy, z) && !self.at(off(x, -s), y, z) {
            emit(out, off(x, -s), yy, z);
        }
        if self.at(x, yy, off(z, s)) && !self.at(x, y, off(z, s)) {
            emit(out, x, yy, off(z, s));
        }
        if self.at(x, yy, off(z, -s)) && !self.at(x, y, off(z, -s)) {
            emit(out, x, yy, off(z, -s));
        }

        for tdx in [-s, s] {
            for tdz in [-s, s] {
                if self.at(off(x, tdx), yy, off(z, tdz))
                    && !self.at(off(x, tdx), y, off(z, tdz))
                    && !self.at(off(x, tdx), y, z)
                    && !self.at(x, y, off(z, tdz))
                {
                    emit(out, off(x, tdx), yy, off(z, tdz));
                }
            }
        }
    }

    /// Arrival along the z axis.
    fn prune_axis_z(&self, x: u32, y: u32, z: u32, dz: i32, out: &mut Vec<VoxelPos>) {
        let s = self.stride();
        let zz = off(z, dz);

        self.emit_if_passable(out, x, y, zz);

        if self.at(off(x, s), y, zz) && !self.at(off(x, s), y, z) {
            emit(out, off(x, s), y, zz);
        }
        if self.at(off(x, -s), y, zz) && !self.at(off(x, -s), y, z) {
            emit(out, off(x, -s), y, zz);
        }
        if self.at(x, off(y, s), zz) && !self.at(x, off(y, s), z) {
            emit(out, x, off(y, s), zz);
        }
        if self.at(x, off(y, -s), zz) && !self.at(x, off(y, -s), z) {
            emit(out, x, off(y, -s), zz);
        }

        for tdx in [-s, s] {
            for tdy in [-s, s] {
                if self.at(off(x, tdx), off(y, tdy), zz)
                    && !self.at(off(x, tdx), off(y, tdy), z)
                    && !self.at(off(x, tdx), y, z)
                    && !self.at(x, off(y, tdy), z)
                {
                    emit(out, off(x, tdx), off(y, tdy), zz);
                }
            }
        }
    }
}

#[inline]
fn emit(out: &mut Vec<VoxelPos>, x: u32, y: u32, z: u32) {
    out.push(VoxelPos::new(x, y, z));
}
