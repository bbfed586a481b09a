//! Sale phase state machine.
//!
//! The phase is never stored: it is derived from the three timestamps of the
//! [`SaleSchedule`] and a `now` supplied by the caller, so every transition
//! after `start_sale` happens purely by the passage of ledger time.

use crate::errors::SaleError;
use crate::types::{SalePhase, SaleSchedule};

pub const SECONDS_PER_DAY: u64 = 86_400;

impl SaleSchedule {
    /// Lays out the sale window and the withdrawal unlock relative to `now`.
    pub fn from_offsets(
        now: u64,
        days_before_start: u64,
        sale_duration_days: u64,
        withdrawal_delay_days: u64,
    ) -> Result<Self, SaleError> {
        let sale_start = add_days(now, days_before_start)?;
        let sale_end = add_days(sale_start, sale_duration_days)?;
        let withdrawal_unlock = add_days(sale_end, withdrawal_delay_days)?;

        Ok(SaleSchedule {
            sale_start,
            sale_end,
            withdrawal_unlock,
        })
    }

    pub fn phase(&self, now: u64) -> SalePhase {
        if now < self.sale_start {
            SalePhase::Scheduled
        } else if now < self.sale_end {
            SalePhase::Open
        } else if now < self.withdrawal_unlock {
            SalePhase::Closed
        } else {
            SalePhase::WithdrawalOpen
        }
    }

    /// Seconds until the sale window closes, zero once it has.
    pub fn remaining(&self, now: u64) -> u64 {
        self.sale_end.saturating_sub(now)
    }
}

pub fn phase_of(schedule: Option<&SaleSchedule>, now: u64) -> SalePhase {
    schedule.map_or(SalePhase::Unconfigured, |s| s.phase(now))
}

fn add_days(timestamp: u64, days: u64) -> Result<u64, SaleError> {
    days.checked_mul(SECONDS_PER_DAY)
        .and_then(|seconds| timestamp.checked_add(seconds))
        .ok_or(SaleError::Overflow)
}
