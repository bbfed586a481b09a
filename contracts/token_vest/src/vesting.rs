//! Tranche vesting arithmetic.
//!
//! An allocation unlocks in [`VESTING_TRANCHES`] equal tranches. The first
//! tranche is available at the unlock timestamp itself and one more becomes
//! available at every full `interval` after it. All functions take `now`
//! explicitly and never touch storage.

use crate::errors::SaleError;
use crate::types::ParticipantVesting;

pub const VESTING_TRANCHES: u64 = 10;

/// Number of tranches unlocked at `now`, capped at [`VESTING_TRANCHES`].
pub fn unlocked_tranches(unlock: u64, interval: u64, now: u64) -> Result<u64, SaleError> {
    if now < unlock {
        return Ok(0);
    }
    let elapsed_intervals = (now - unlock)
        .checked_div(interval)
        .ok_or(SaleError::InvalidConfig)?;
    Ok(elapsed_intervals
        .saturating_add(1)
        .min(VESTING_TRANCHES))
}

/// Cumulative amount of `total_allocated` vested at `now`, floor-rounded.
pub fn vested_amount(
    total_allocated: i128,
    unlock: u64,
    interval: u64,
    now: u64,
) -> Result<i128, SaleError> {
    let tranches = unlocked_tranches(unlock, interval, now)?;
    if tranches == VESTING_TRANCHES {
        return Ok(total_allocated);
    }
    let numerator = total_allocated
        .checked_mul(tranches as i128)
        .ok_or(SaleError::Overflow)?;
    Ok(numerator / VESTING_TRANCHES as i128)
}

/// Amount a participant could withdraw at `now`.
pub fn releasable(
    vesting: &ParticipantVesting,
    unlock: u64,
    interval: u64,
    now: u64,
) -> Result<i128, SaleError> {
    let vested = vested_amount(vesting.total_allocated, unlock, interval, now)?;
    Ok((vested - vesting.total_withdrawn).max(0))
}
