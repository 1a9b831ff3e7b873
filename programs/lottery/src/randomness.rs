use anchor_lang::prelude::*;
use anchor_lang::solana_program::sysvar::slot_hashes;
use arrayref::array_ref;

use crate::error::LotteryError;

// Remixing passes before falling back to a plain modulo.
const MAX_RESAMPLES: u8 = 3;

/// Picks winner indices. Injected into `Lottery::pick_winner` so draws can be
/// fixed in tests.
pub trait RandomSource {
    /// Returns an index in `[0, bound)`.
    fn next(&mut self, bound: u64) -> Result<u64>;
}

/// Deterministic generator stretched from one ledger-provided seed.
pub struct SeededRandom {
    state: u64,
    counter: u64,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            state: seed,
            counter: 0,
        }
    }
}

impl RandomSource for SeededRandom {
    fn next(&mut self, bound: u64) -> Result<u64> {
        self.counter = self.counter.wrapping_add(1);
        self.state = mix(self.state, self.counter);
        unbiased_range(self.state, bound)
    }
}

/// Derives a seed from the most recent entry of the SlotHashes sysvar mixed
/// with the cluster timestamp.
///
/// The sysvar is passed unchecked because Anchor refuses to deserialize it,
/// so the key is validated here.
pub fn slot_hash_seed(sysvar: &AccountInfo, unix_timestamp: i64) -> Result<u64> {
    require_keys_eq!(
        *sysvar.key,
        slot_hashes::ID,
        LotteryError::InvalidSlotHashesAccount
    );

    // Layout: u64 entry count, then (slot: u64, hash: [u8; 32]) newest first.
    let data = sysvar.try_borrow_data()?;
    require!(data.len() >= 48, LotteryError::InvalidSlotHashesAccount);

    let hash_value1 = u64::from_le_bytes(*array_ref![data, 16, 8]);
    let hash_value2 = u64::from_le_bytes(*array_ref![data, 24, 8]);

    let mut seed = mix(hash_value1, unix_timestamp as u64);
    seed = mix(seed, hash_value2);

    Ok(seed)
}

/// splitmix64 finalizer over the wrapping sum of both inputs.
fn mix(a: u64, b: u64) -> u64 {
    let mut z = a.wrapping_add(b);

    z = (z ^ (z >> 30)).wrapping_mul(0xbf58476d1ce4e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d049bb133111eb);
    z ^ (z >> 31)
}

/// Maps `x` into `[0, range)` without modulo bias.
fn unbiased_range(x: u64, range: u64) -> Result<u64> {
    require!(range > 0, LotteryError::NoEntrants);

    if range.is_power_of_two() {
        return Ok(x & (range - 1));
    }

    // Values at or above the last whole multiple of `range` would favour low indices.
    let zone = u64::MAX - (u64::MAX % range);
    let mut value = x;

    for attempt in 0..MAX_RESAMPLES {
        if value < zone {
            return Ok(value % range);
        }
        value = mix(value, u64::from(attempt) + 1);
    }

    Ok(value % range)
}
