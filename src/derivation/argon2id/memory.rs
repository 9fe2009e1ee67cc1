//! Memory matrix organization and the filling schedule.
//!
//! The working memory is a matrix of 1024-byte blocks, laid out
//! lane-major. Filling proceeds pass by pass and slice by slice; inside
//! one slice every lane's segment is independent, so segments run on one
//! scoped thread per lane when the parallelism degree is above one.
//! Joining the threads at the end of each slice is the synchronization
//! barrier that makes cross-lane references race-free.

use std::marker::PhantomData;
use std::thread;

use super::block::Block;
use super::params::Params;
use super::reference::{Position, reference_position};

/// Number of slices per lane; slice boundaries are the sync points.
const SYNC_POINTS: u32 = 4;

/// Dimensions of the memory matrix for one invocation.
///
/// - `lanes` independent rows of `lane_len` blocks each.
/// - Each lane divides into [`SYNC_POINTS`] slices of `segment_len`
///   blocks.
#[derive(Debug, Clone)]
pub(crate) struct MemoryLayout {
    pub lanes: u32,
    pub lane_len: u32,
    pub segment_len: u32,
    pub total_blocks: u32,
}

/// Shared view of the block array used during a slice.
///
/// Lanes fill their segments concurrently, but the aliasing rules they
/// follow are positional, which the borrow checker cannot see. Access
/// goes through a raw pointer instead, with the safety argument living
/// in [`MemoryLayout::fill_segment`].
struct SharedBlocks<'a> {
    ptr: *mut Block,
    len: usize,
    _lifetime: PhantomData<&'a mut [Block]>,
}

// The fill schedule gives each thread exclusive write access to its own
// lane's current segment. See fill_segment for the full argument.
unsafe impl Send for SharedBlocks<'_> {}
unsafe impl Sync for SharedBlocks<'_> {}

impl<'a> SharedBlocks<'a> {
    fn new(blocks: &'a mut [Block]) -> Self {
        Self {
            ptr: blocks.as_mut_ptr(),
            len: blocks.len(),
            _lifetime: PhantomData,
        }
    }

    /// # Safety
    ///
    /// `index` must be in bounds and the block must not be concurrently
    /// written by any thread.
    unsafe fn block(&self, index: usize) -> &Block {
        debug_assert!(index < self.len);
        unsafe { &*self.ptr.add(index) }
    }

    /// # Safety
    ///
    /// `index` must be in bounds and the calling thread must be the only
    /// one accessing this block.
    #[allow(clippy::mut_from_ref)]
    unsafe fn block_mut(&self, index: usize) -> &mut Block {
        debug_assert!(index < self.len);
        unsafe { &mut *self.ptr.add(index) }
    }
}

impl MemoryLayout {
    pub(crate) fn new(params: &Params) -> Self {
        let total_blocks = params.effective_mem_kib();
        let lane_len = total_blocks / params.lanes;

        Self {
            lanes: params.lanes,
            lane_len,
            segment_len: lane_len / SYNC_POINTS,
            total_blocks,
        }
    }

    #[inline]
    pub(crate) fn index(&self, lane: u32, column: u32) -> usize {
        (lane * self.lane_len + column) as usize
    }

    /// Fills all memory blocks over the given number of passes.
    ///
    /// Single-lane configurations fill inline; otherwise each lane's
    /// segment runs on its own scoped thread and the scope join enforces
    /// the slice barrier.
    pub(crate) fn fill(&self, memory: &mut [Block], passes: u32) {
        let shared = SharedBlocks::new(memory);

        for pass in 0..passes {
            for slice in 0..SYNC_POINTS {
                if self.lanes == 1 {
                    self.fill_segment(&shared, pass, slice, 0, passes);
                } else {
                    thread::scope(|scope| {
                        for lane in 0..self.lanes {
                            let shared = &shared;
                            scope.spawn(move || {
                                self.fill_segment(shared, pass, slice, lane, passes);
                            });
                        }
                    });
                }
            }
        }
    }

    /// Fills one segment: the blocks of `lane` within `slice`.
    ///
    /// For each column this determines the J1/J2 values (from an address
    /// block in data-independent mode, from the previous block's first
    /// word otherwise), resolves the reference block, and writes
    /// G(previous, reference), XORed into the existing block on
    /// refilling passes.
    ///
    /// Safety argument for the raw accesses: this thread is the only
    /// writer of `lane`'s current segment for the duration of the slice.
    /// The previous block is either in this segment or at the tail of
    /// this lane (written by this same thread in an earlier slice or
    /// pass), and `reference_position` only ever selects blocks outside
    /// every lane's in-flight segment. All other threads' writes were
    /// ordered before this slice by the scope join barrier.
    fn fill_segment(&self, memory: &SharedBlocks<'_>, pass: u32, slice: u32, lane: u32, passes: u32) {
        let data_independent = pass == 0 && slice < 2;

        let mut address_counter = 0u32;
        let mut addresses = Block::ZERO;

        // In pass 0, slice 0 the first two columns were seeded directly
        // from H' and are never recomputed.
        let first = if pass == 0 && slice == 0 { 2 } else { 0 };

        for index in first..self.segment_len {
            let column = slice * self.segment_len + index;

            let prev_column = if column == 0 {
                self.lane_len - 1
            } else {
                column - 1
            };
            let prev = self.index(lane, prev_column);

            let word = if data_independent {
                // One address block serves 128 consecutive positions.
                if index == first || index % 128 == 0 {
                    address_counter += 1;
                    addresses = Block::address_block(
                        pass,
                        lane,
                        slice,
                        self.total_blocks,
                        passes,
                        address_counter,
                    );
                }

                addresses.0[(index % 128) as usize]
            } else {
                unsafe { memory.block(prev) }.0[0]
            };

            let (j1, j2) = (word as u32, (word >> 32) as u32);

            let pos = Position {
                pass,
                slice,
                lane,
                index,
            };
            let (ref_lane, ref_column) = reference_position(pos, self, j1, j2);

            let mixed = unsafe {
                Block::compress(
                    memory.block(prev),
                    memory.block(self.index(ref_lane, ref_column)),
                )
            };

            let slot = unsafe { memory.block_mut(self.index(lane, column)) };

            if pass == 0 {
                *slot = mixed;
            } else {
                slot.xor_assign(&mixed);
            }
        }
    }
}
