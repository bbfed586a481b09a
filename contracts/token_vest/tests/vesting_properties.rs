#![allow(clippy::unwrap_used)]

use proptest::prelude::*;
use token_vest::{releasable, vested_amount, ParticipantVesting, SaleSchedule, VESTING_TRANCHES};

const INTERVAL: u64 = 30 * 86_400;

proptest! {
    #[test]
    fn vested_amount_is_monotonic_and_bounded(
        allocated in 0i128..1_000_000_000_000_000,
        unlock in 0u64..4_000_000_000,
        a in 0u64..(20 * INTERVAL),
        b in 0u64..(20 * INTERVAL),
    ) {
        let (early, late) = (a.min(b), a.max(b));
        let v_early = vested_amount(allocated, unlock, INTERVAL, unlock + early).unwrap();
        let v_late = vested_amount(allocated, unlock, INTERVAL, unlock + late).unwrap();
        prop_assert!(v_early <= v_late);
        prop_assert!(v_late <= allocated);
        prop_assert!(v_early >= allocated / VESTING_TRANCHES as i128);
    }

    #[test]
    fn withdrawing_every_tranche_releases_exact_allocation(
        allocated in 1i128..1_000_000_000_000_000,
        checkpoints in proptest::collection::vec(0u64..(12 * INTERVAL), 1..20),
    ) {
        let unlock = 1_000_000u64;
        let mut vesting = ParticipantVesting { total_allocated: allocated, total_withdrawn: 0 };
        let mut times = checkpoints;
        times.sort_unstable();
        times.push(10 * INTERVAL);

        let mut paid = 0i128;
        for offset in times {
            let amount = releasable(&vesting, unlock, INTERVAL, unlock + offset).unwrap();
            prop_assert!(amount >= 0);
            vesting.total_withdrawn += amount;
            paid += amount;
            prop_assert!(vesting.total_withdrawn <= vesting.total_allocated);
        }
        prop_assert_eq!(paid, allocated);
    }

    #[test]
    fn first_tranche_is_floor_tenth(allocated in 0i128..1_000_000_000_000_000) {
        let unlock = 5_000u64;
        let vesting = ParticipantVesting { total_allocated: allocated, total_withdrawn: 0 };
        prop_assert_eq!(releasable(&vesting, unlock, INTERVAL, unlock).unwrap(), allocated / 10);
        prop_assert_eq!(releasable(&vesting, unlock, INTERVAL, unlock - 1).unwrap(), 0);
    }

    #[test]
    fn remaining_time_matches_configured_days(
        now in 0u64..4_000_000_000,
        days_before_start in 0u64..400,
        duration in 0u64..400,
        delay in 0u64..400,
    ) {
        let schedule = SaleSchedule::from_offsets(now, days_before_start, duration, delay).unwrap();
        prop_assert_eq!(schedule.remaining(now), (days_before_start + duration) * 86_400);
        prop_assert!(schedule.sale_start <= schedule.sale_end);
        prop_assert!(schedule.sale_end <= schedule.withdrawal_unlock);
    }
}
