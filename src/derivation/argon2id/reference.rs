//! Reference block selection (RFC 9106 §3.4.1).
//!
//! Each block is computed as G(previous, reference). The reference is
//! picked from the already-finalized blocks using the pseudo-random
//! values J1 and J2, with window constraints that guarantee the chosen
//! block was completed before the current slice started.

use super::memory::MemoryLayout;

/// Coordinates of the block currently being filled.
#[derive(Clone, Copy)]
pub(crate) struct Position {
    pub pass: u32,
    pub slice: u32,
    pub lane: u32,
    /// Index within the current segment.
    pub index: u32,
}

/// Maps (position, J1, J2) to the lane and in-lane index of the
/// reference block.
///
/// J2 selects the lane (restricted to the current lane during the very
/// first slice, when other lanes hold nothing usable yet). J1 is mapped
/// through the phi function, a quadratic skew that lands more often on
/// recently filled blocks, which is what makes time-memory trade-off
/// attacks pay full price for discarded memory.
pub(crate) fn reference_position(
    pos: Position,
    layout: &MemoryLayout,
    j1: u32,
    j2: u32,
) -> (u32, u32) {
    let segment_len = layout.segment_len;
    let lane_len = layout.lane_len;

    let ref_lane = if pos.pass == 0 && pos.slice == 0 {
        pos.lane
    } else {
        j2 % layout.lanes
    };

    let same_lane = ref_lane == pos.lane;

    // W: how many finalized blocks are eligible. In the same lane every
    // earlier block qualifies; in another lane the window stops at the
    // last fully completed slice, minus one when the block preceding the
    // current one is itself the newest block of that window.
    let window = if pos.pass == 0 {
        if pos.slice == 0 {
            pos.index.saturating_sub(1)
        } else if same_lane {
            pos.slice * segment_len + pos.index - 1
        } else if pos.index == 0 {
            pos.slice * segment_len - 1
        } else {
            pos.slice * segment_len
        }
    } else if same_lane {
        lane_len - segment_len + pos.index - 1
    } else if pos.index == 0 {
        lane_len - segment_len - 1
    } else {
        lane_len - segment_len
    };

    if window == 0 {
        return (ref_lane, 0);
    }

    // Phi: x = J1² / 2³², relative = W − 1 − W·x / 2³²
    let x = ((j1 as u64) * (j1 as u64)) >> 32;
    let relative = (window as u64 - 1 - ((window as u64 * x) >> 32)) as u32;

    // On later passes the window wraps around the lane, starting just
    // after the slice currently being overwritten.
    let start = if pos.pass == 0 || pos.slice == 3 {
        0
    } else {
        (pos.slice + 1) * segment_len
    };

    (ref_lane, (start + relative) % lane_len)
}
