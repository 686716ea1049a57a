//! Jump routines.
//!
//! A jump slides from a candidate cell along its arrival direction until it
//! hits the finish, a cell with a forced neighbour, a branching point whose
//! lower-dimensional sub-direction admits a jump of its own, or a blocked
//! step (which kills the whole slide). Volume slides recurse into three
//! axis and three face sub-directions, face slides into two axis
//! sub-directions, and axis slides do not recurse, so every voxel on a
//! slide is visited a bounded number of times.
//!
//! Under restricted diagonal policies there is no sliding: the candidate is
//! returned as its own jump point and the driver degrades to best-first
//! search over the policy-filtered expansion (see the pruner).

use jump_types::{DiagonalPolicy, Direction};
use vox_spatial::{Passability, VoxelPos};

use crate::search::{off, JumpPointSearcher};

impl<G: Passability> JumpPointSearcher<'_, G> {
    /// Jumps from candidate `cand`, reached from `src`. Returns the jump
    /// point or [`VoxelPos::INVALID`].
    pub(crate) fn jump(&mut self, cand: VoxelPos, src: VoxelPos) -> VoxelPos {
        if !self.at(cand.x, cand.y, cand.z) {
            return VoxelPos::INVALID;
        }
        if cand == self.finish_pos {
            return cand;
        }
        if self.policy != DiagonalPolicy::Always {
            return cand;
        }

        let s = self.stride();
        let dir = Direction::between(src, cand);
        let (dx, dy, dz) = (dir.dx * s, dir.dy * s, dir.dz * s);

        if dx != 0 && dy != 0 && dz != 0 {
            self.jump_xyz(cand, dx, dy, dz)
        } else if dx != 0 && dy != 0 {
            self.jump_xy(cand, dx, dy)
        } else if dx != 0 && dz != 0 {
            self.jump_xz(cand, dx, dz)
        } else if dy != 0 && dz != 0 {
            self.jump_yz(cand, dy, dz)
        } else if dx != 0 {
            self.jump_x(cand, dx)
        } else if dy != 0 {
            self.jump_y(cand, dy)
        } else if dz != 0 {
            self.jump_z(cand, dz)
        } else {
            debug_assert!(false, "candidate coincides with its source");
            VoxelPos::INVALID
        }
    }

    /// Slide along a volume diagonal.
    fn jump_xyz(&mut self, mut p: VoxelPos, dx: i32, dy: i32, dz: i32) -> VoxelPos {
        let fin = self.finish_pos;
        let mut steps = 0u64;

        loop {
            if p == fin {
                break;
            }
            steps += 1;

            let (x, y, z) = p.as_tuple();

            // Forced neighbours with one reversed component.
            if (self.at(off(x, -dx), off(y, dy), off(z, dz)) && !self.at(off(x, -dx), y, z))
                || (self.at(off(x, dx), off(y, -dy), off(z, dz)) && !self.at(x, off(y, -dy), z))
                || (self.at(off(x, dx), off(y, dy), off(z, -dz)) && !self.at(x, y, off(z, -dz)))
                || (self.at(off(x, -dx), off(y, -dy), off(z, dz))
                    && !self.at(off(x, -dx), off(y, -dy), z)
                    && !self.at(off(x, -dx), y, z)
                    && !self.at(x, off(y, -dy), z))
                || (self.at(off(x, -dx), off(y, dy), off(z, -dz))
                    && !self.at(off(x, -dx), y, off(z, -dz))
                    && !self.at(off(x, -dx), y, z)
                    && !self.at(x, y, off(z, -dz)))
                || (self.at(off(x, dx), off(y, -dy), off(z, -dz))
                    && !self.at(x, off(y, -dy), off(z, -dz))
                    && !self.at(x, off(y, -dy), z)
                    && !self.at(x, y, off(z, -dz)))
            {
                break;
            }

            // Forced neighbours in the three coordinate planes.
            if (self.at(off(x, -dx), off(y, dy), z)
                && !self.at(off(x, -dx), y, z)
                && !self.at(off(x, -dx), y, off(z, -dz)))
                || (self.at(off(x, -dx), y, off(z, dz))
                    && !self.at(off(x, -dx), y, z)
                    && !self.at(off(x, -dx), off(y, -dy), z))
                || (self.at(off(x, dx), off(y, -dy), z)
                    && !self.at(x, off(y, -dy), z)
                    && !self.at(x, off(y, -dy), off(z, -dz)))
                || (self.at(x, off(y, -dy), off(z, dz))
                    && !self.at(x, off(y, -dy), z)
                    && !self.at(off(x, -dx), off(y, -dy), z))
                || (self.at(off(x, dx), y, off(z, -dz))
                    && !self.at(x, y, off(z, -dz))
                    && !self.at(x, off(y, -dy), off(z, -dz)))
                || (self.at(x, off(y, dy), off(z, -dz))
                    && !self.at(x, y, off(z, -dz))
                    && !self.at(off(x, -dx), y, off(z, -dz)))
            {
                break;
            }

            // Branch: an axis or face sub-jump reaching a jump point makes
            // this cell one too.
            if (self.at(off(x, dx), y, z)
                && self.jump_x(VoxelPos::new(off(x, dx), y, z), dx).is_valid())
                || (self.at(x, off(y, dy), z)
                    && self.jump_y(VoxelPos::new(x, off(y, dy), z), dy).is_valid())
                || (self.at(x, y, off(z, dz))
                    && self.jump_z(VoxelPos::new(x, y, off(z, dz)), dz).is_valid())
                || (self.at(off(x, dx), off(y, dy), z)
                    && self
                        .jump_xy(VoxelPos::new(off(x, dx), off(y, dy), z), dx, dy)
                        .is_valid())
                || (self.at(off(x, dx), y, off(z, dz))
                    && self
                        .jump_xz(VoxelPos::new(off(x, dx), y, off(z, dz)), dx, dz)
                        .is_valid())
                || (self.at(x, off(y, dy), off(z, dz))
                    && self
                        .jump_yz(VoxelPos::new(x, off(y, dy), off(z, dz)), dy, dz)
                        .is_valid())
            {
                break;
            }

            if self.at(off(x, dx), off(y, dy), off(z, dz)) {
                p = p.offset(dx, dy, dz);
            } else {
                p = VoxelPos::INVALID;
                break;
            }
        }

        self.steps_total += steps;
        p
    }

    /// Slide along the xy face diagonal.
    fn jump_xy(&mut self, mut p: VoxelPos, dx: i32, dy: i32) -> VoxelPos {
        let fin = self.finish_pos;
        let s = self.stride();
        let mut steps = 0u64;

        loop {
            if p == fin {
                break;
            }
            steps += 1;

            let (x, y, z) = p.as_tuple();

            if (self.at(off(x, -dx), off(y, dy), z) && !self.at(off(x, -dx), y, z))
                || (self.at(off(x, dx), off(y, -dy), z) && !self.at(x, off(y, -dy), z))
            {
                break;
            }

            // Out-of-plane: a blocked z-neighbour opens wrap-around routes
            // through five cells on its level.
            if self.face_jump_stops_out_of_plane_z(x, y, z, dx, dy, s) {
                break;
            }

            if (self.at(off(x, dx), y, z)
                && self.jump_x(VoxelPos::new(off(x, dx), y, z), dx).is_valid())
                || (self.at(x, off(y, dy), z)
                    && self.jump_y(VoxelPos::new(x, off(y, dy), z), dy).is_valid())
            {
                break;
            }

            if self.at(off(x, dx), off(y, dy), z) {
                p = p.offset(dx, dy, 0);
            } else {
                p = VoxelPos::INVALID;
                break;
            }
        }

        self.steps_total += steps;
        p
    }

    /// Slide along the xz face diagonal.
    fn jump_xz(&mut self, mut p: VoxelPos, dx: i32, dz: i32) -> VoxelPos {
        let fin = self.finish_pos;
        let s = self.stride();
        let mut steps = 0u64;

        loop {
            if p == fin {
                break;
            }
            steps += 1;

            let (x, y, z) = p.as_tuple();

            if (self.at(off(x, -dx), y, off(z, dz)) && !self.at(off(x, -dx), y, z))
                || (self.at(off(x, dx), y, off(z, -dz)) && !self.at(x, y, off(z, -dz)))
            {
                break;
            }

            if self.face_jump_stops_out_of_plane_y(x, y, z, dx, dz, s) {
                break;
            }

            if (self.at(off(x, dx), y, z)
                && self.jump_x(VoxelPos::new(off(x, dx), y, z), dx).is_valid())
                || (self.at(x, y, off(z, dz))
                    && self.jump_z(VoxelPos::new(x, y, off(z, dz)), dz).is_valid())
            {
                break;
            }

            if self.at(off(x, dx), y, off(z, dz)) {
                p = p.offset(dx, 0, dz);
            } else {
                p = VoxelPos::INVALID;
                break;
            }
        }

        self.steps_total += steps;
        p
    }

    /// Slide along the yz face diagonal.
    fn jump_yz(&mut self, mut p: VoxelPos, dy: i32, dz: i32) -> VoxelPos {
        let fin = self.finish_pos;
        let s = self.stride();
        let mut steps = 0u64;

        loop {
            if p == fin {
                break;
            }
            steps += 1;

            let (x, y, z) = p.as_tuple();

            if (self.at(x, off(y, -dy), off(z, dz)) && !self.at(x, off(y, -dy), z))
                || (self.at(x, off(y, dy), off(z, -dz)) && !self.at(x, y, off(z, -dz)))
            {
                break;
            }

            if self.face_jump_stops_out_of_plane_x(x, y, z, dy, dz, s) {
                break;
            }

            if (self.at(x, off(y, dy), z)
                && self.jump_y(VoxelPos::new(x, off(y, dy), z), dy).is_valid())
                || (self.at(x, y, off(z, dz))
                    && self.jump_z(VoxelPos::new(x, y, off(z, dz)), dz).is_valid())
            {
                break;
            }

            if self.at(x, off(y, dy), off(z, dz)) {
                p = p.offset(0, dy, dz);
            } else {
                p = VoxelPos::INVALID;
                break;
            }
        }

        self.steps_total += steps;
        p
    }

    /// Slide along the x axis.
    fn jump_x(&mut self, mut p: VoxelPos, dx: i32) -> VoxelPos {
        let fin = self.finish_pos;
        let s = self.stride();
        let mut steps = 0u64;

        loop {
            if p == fin {
                break;
            }
            steps += 1;

            let (x, y, z) = p.as_tuple();
            let xx = off(x, dx);

            if (self.at(xx, off(y, s), z) && !self.at(x, off(y, s), z))
                || (self.at(xx, off(y, -s), z) && !self.at(x, off(y, -s), z))
                || (self.at(xx, y, off(z, s)) && !self.at(x, y, off(z, s)))
                || (self.at(xx, y, off(z, -s)) && !self.at(x, y, off(z, -s)))
                || (self.at(xx, off(y, s), off(z, s))
                    && !self.at(x, off(y, s), off(z, s))
                    && !self.at(x, off(y, s), z)
                    && !self.at(x, y, off(z, s)))
                || (self.at(xx, off(y, -s), off(z, s))
                    && !self.at(x, off(y, -s), off(z, s))
                    && !self.at(x, off(y, -s), z)
                    && !self.at(x, y, off(z, s)))
                || (self.at(xx, off(y, s), off(z, -s))
                    && !self.at(x, off(y, s), off(z, -s))
                    && !self.at(x, off(y, s), z)
                    && !self.at(x, y, off(z, -s)))
                || (self.at(xx, off(y, -s), off(z, -s))
                    && !self.at(x, off(y, -s), off(z, -s))
                    && !self.at(x, off(y, -s), z)
                    && !self.at(x, y, off(z, -s)))
            {
                break;
            }

            if self.at(xx, y, z) {
                p = p.offset(dx, 0, 0);
            } else {
                p = VoxelPos::INVALID;
                break;
            }
        }

        self.steps_total += steps;
        p
    }

    /// Slide along the y axis.
    fn jump_y(&mut self, mut p: VoxelPos, dy: i32) -> VoxelPos {
        let fin = self.finish_pos;
        let s = self.stride();
        let mut steps = 0u64;

        loop {
            if p == fin {
                break;
            }
            steps += 1;

            let (x, y, z) = p.as_tuple();
            let yy = off(y, dy);

            if (self.at(off(x, s), yy, z) && !self.at(off(x, s), y, z))
                || (self.at(off(x, -s), yy, z) && !self.at(off(x, -s), y, z))
                || (self.at(x, yy, off(z, s)) && !self.at(x, y, off(z, s)))
                || (self.at(x, yy, off(z, -s)) && !self.at(x, y, off(z, -s)))
                || (self.at(off(x, s), yy, off(z, s))
                    && !self.at(off(x, s), y, off(z, s))
                    && !self.at(off(x, s), y, z)
                    && !self.at(x, y, off(z, s)))
                || (self.at(off(x, -s), yy, off(z, s))
                    && !self.at(off(x, -s), y, off(z, s))
                    && !self.at(off(x, -s), y, z)
                    && !self.at(x, y, off(z, s)))
                || (self.at(off(x, s), yy, off(z, -s))
                    && !self.at(off(x, s), y, off(z, -s))
                    && !self.at(off(x, s), y, z)
                    && !self.at(x, y, off(z, -s)))
                || (self.at(off(x, -s), yy, off(z, -s))
                    && !self.at(off(x, -s), y, off(z, -s))
                    && !self.at(off(x, -s), y, z)
                    && !self.at(x, y, off(z, -s)))
            {
                break;
            }

            if self.at(x, yy, z) {
                p = p.offset(0, dy, 0);
            } else {
                p = VoxelPos::INVALID;
                break;
            }
        }

        self.steps_total += steps;
        p
    }

    /// Slide along the z axis.
    fn jump_z(&mut self, mut p: VoxelPos, dz: i32) -> VoxelPos {
        let fin = self.finish_pos;
        let s = self.stride();
        let mut steps = 0u64;

        loop {
            if p == fin {
                break;
            }
            steps += 1;

            let (x, y, z) = p.as_tuple();
            let zz = off(z, dz);

            if (self.at(off(x, s), y, zz) && !self.at(off(x, s), y, z))
                || (self.at(off(x, -s), y, zz) && !self.at(off(x, -s), y, z))
                || (self.at(x, off(y, s), zz) && !self.at(x, off(y, s), z))
                || (self.at(x, off(y, -s), zz) && !self.at(x, off(y, -s), z))
                || (self.at(off(x, s), off(y, s), zz)
                    && !self.at(off(x, s), off(y, s), z)
                    && !self.at(off(x, s), y, z)
                    && !self.at(x, off(y, s), z))
                || (self.at(off(x, -s), off(y, s), zz)
                    && !self.at(off(x, -s), off(y, s), z)
                    && !self.at(off(x, -s), y, z)
                    && !self.at(x, off(y, s), z))
                || (self.at(off(x, s), off(y, -s), zz)
                    && !self.at(off(x, s), off(y, -s), z)
                    && !self.at(off(x, s), y, z)
                    && !self.at(x, off(y, -s), z))
                || (self.at(off(x, -s), off(y, -s), zz)
                    && !self.at(off(x, -s), off(y, -s), z)
                    && !self.at(off(x, -s), y, z)
                    && !self.at(x, off(y, -s), z))
            {
                break;
            }

            if self.at(x, y, zz) {
                p = p.offset(0, 0, dz);
            } else {
                p = VoxelPos::INVALID;
                break;
            }
        }

        self.steps_total += steps;
        p
    }

    /// Out-of-plane stop test for an xy slide: for each blocked cell above
    /// or below, passability of the three plain wrap cells or either of the
    /// two shielded ones forces a stop.
    fn face_jump_stops_out_of_plane_z(
        &self,
        x: u32,
        y: u32,
        z: u32,
        dx: i32,
        dy: i32,
        s: i32,
    ) -> bool {
        for tdz in [-s, s] {
            let zz = off(z, tdz);
            if self.at(x, y, zz) {
                continue;
            }
            if self.at(off(x, dx), y, zz)
                || self.at(x, off(y, dy), zz)
                || self.at(off(x, dx), off(y, dy), zz)
                || (self.at(off(x, dx), off(y, -dy), zz)
                    && !self.at(x, off(y, -dy), zz)
                    && !self.at(x, off(y, -dy), z))
                || (self.at(off(x, -dx), off(y, dy), zz)
                    && !self.at(off(x, -dx), y, zz)
                    && !self.at(off(x, -dx), y, z))
            {
                return true;
            }
        }
        false
    }

    /// Out-of-plane stop test for an xz slide.
    fn face_jump_stops_out_of_plane_y(
        &self,
        x: u32,
        y: u32,
        z: u32,
        dx: i32,
        dz: i32,
        s: i32,
    ) -> bool {
        for tdy in [-s, s] {
            let yy = off(y, tdy);
            if self.at(x, yy, z) {
                continue;
            }
            if self.at(off(x, dx), yy, z)
                || self.at(x, yy, off(z, dz))
                || self.at(off(x, dx), yy, off(z, dz))
                || (self.at(off(x, dx), yy, off(z, -dz))
                    && !self.at(x, yy, off(z, -dz))
                    && !self.at(x, y, off(z, -dz)))
                || (self.at(off(x, -dx), yy, off(z, dz))
                    && !self.at(off(x, -dx), yy, z)
                    && !self.at(off(x, -dx), y, z))
            {
                return true;
            }
        }
        false
    }

    /// Out-of-plane stop test for a yz slide.
    fn face_jump_stops_out_of_plane_x(
        &self,
        x: u32,
        y: u32,
        z: u32,
        dy: i32,
        dz: i32,
        s: i32,
    ) -> bool {
        for tdx in [-s, s] {
            let xx = off(x, tdx);
            if self.at(xx, y, z) {
                continue;
            }
            if self.at(xx, off(y, dy), z)
                || self.at(xx, y, off(z, dz))
                || self.at(xx, off(y, dy), off(z, dz))
                || (self.at(xx, off(y, dy), off(z, -dz))
                    && !self.at(xx, y, off(z, -dz))
                    && !self.at(x, y, off(z, -dz)))
                || (self.at(xx, off(y, -dy), off(z, dz))
                    && !self.at(xx, off(y, -dy), z)
                    && !self.at(x, off(y, -dy), z))
            {
                return true;
            }
        }
        false
    }
}
