//! Start-up claiming of PIO state machines from a primary pool with a fallback pool.
//!
//! Each PIO block has four state machines. A driver asks for the first free one in
//! the primary block and only falls back to the second block when the primary is full.
//! Claims last for the life of the program; there is no release.

use core::cell::Cell;

use embassy_sync::blocking_mutex::Mutex;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;

use crate::{Error, Result};

/// Number of state machines in one PIO block.
pub const STATE_MACHINES_PER_PIO: u8 = 4;

const ALL_STATE_MACHINES: u8 = (1 << STATE_MACHINES_PER_PIO) - 1;

/// Which PIO block a state machine belongs to.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(not(feature = "host"), derive(defmt::Format))]
pub enum PioBlock {
    /// PIO0, the primary pool.
    Pio0,
    /// PIO1, the fallback pool.
    Pio1,
}

/// A state machine handed out by [`StateMachinePool::claim_unused`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(not(feature = "host"), derive(defmt::Format))]
pub struct StateMachineClaim {
    /// PIO block the state machine lives in.
    pub block: PioBlock,
    /// State machine number within the block, `0..4`.
    pub index: u8,
}

/// Occupancy of the four state machines of one PIO block.
pub struct StateMachinePool {
    block: PioBlock,
    claimed: Mutex<CriticalSectionRawMutex, Cell<u8>>,
}

impl StateMachinePool {
    /// An empty pool for `block`.
    #[must_use]
    pub const fn new(block: PioBlock) -> Self {
        Self {
            block,
            claimed: Mutex::new(Cell::new(0)),
        }
    }

    /// The PIO block this pool hands out.
    #[must_use]
    pub const fn block(&self) -> PioBlock {
        self.block
    }

    /// Claim the lowest-numbered free state machine, or `None` if all four are taken.
    pub fn claim_unused(&self) -> Option<StateMachineClaim> {
        self.claimed.lock(|claimed| {
            let mask = claimed.get();
            let index = (0..STATE_MACHINES_PER_PIO).find(|index| mask & (1 << index) == 0)?;
            claimed.set(mask | (1 << index));
            Some(StateMachineClaim {
                block: self.block,
                index,
            })
        })
    }

    /// Mark a state machine as used by some other driver. Returns `false` if it was already taken.
    ///
    /// # Panics
    ///
    /// Panics if `index >= 4`.
    pub fn reserve(&self, index: u8) -> bool {
        assert!(
            index < STATE_MACHINES_PER_PIO,
            "state machine index out of range"
        );
        self.claimed.lock(|claimed| {
            let mask = claimed.get();
            let bit = 1 << index;
            if mask & bit == 0 {
                claimed.set(mask | bit);
                true
            } else {
                false
            }
        })
    }

    /// Whether state machine `index` has been claimed or reserved.
    #[must_use]
    pub fn is_claimed(&self, index: u8) -> bool {
        index < STATE_MACHINES_PER_PIO
            && self.claimed.lock(|claimed| claimed.get() & (1 << index) != 0)
    }

    /// How many state machines are still free.
    #[must_use]
    pub fn available(&self) -> u8 {
        let free = !self.claimed.lock(Cell::get) & ALL_STATE_MACHINES;
        // At most four bits are set.
        free.count_ones() as u8
    }
}

/// Claim from `primary` first, then `secondary`.
///
/// # Errors
///
/// Returns [`Error::NoFreeStateMachine`] when both pools are exhausted. At start-up this is fatal.
pub fn claim_state_machine(
    primary: &StateMachinePool,
    secondary: &StateMachinePool,
) -> Result<StateMachineClaim> {
    primary
        .claim_unused()
        .or_else(|| secondary.claim_unused())
        .ok_or(Error::NoFreeStateMachine)
}

/// Process-wide pool for PIO0.
pub static PIO0_POOL: StateMachinePool = StateMachinePool::new(PioBlock::Pio0);

/// Process-wide pool for PIO1.
pub static PIO1_POOL: StateMachinePool = StateMachinePool::new(PioBlock::Pio1);
