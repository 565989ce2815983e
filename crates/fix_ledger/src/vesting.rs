//! Linear block-height vesting

use crate::math::*;
use crate::state::{BlockHeight, VestingSchedule};

/// floor((height - start) * total / duration) with no upper bound.
///
/// Before `start_block` the result is negative and left unclamped.
pub fn linear_unlock(schedule: &VestingSchedule, height: BlockHeight) -> i128 {
    let elapsed = signed_delta(height, schedule.start_block);
    floor_div_i128(
        elapsed.saturating_mul(i128::from(schedule.total_amount)),
        i128::from(schedule.duration_blocks),
    )
}

/// Linear unlock capped at `total_amount`; what claims pay out against
pub fn vested_to_date(schedule: &VestingSchedule, height: BlockHeight) -> i128 {
    linear_unlock(schedule, height).min(i128::from(schedule.total_amount))
}

/// Vested minus already claimed; zero or negative means nothing to claim
pub fn claimable(schedule: &VestingSchedule, height: BlockHeight) -> i128 {
    vested_to_date(schedule, height).saturating_sub(i128::from(schedule.claimed_amount))
}

/// Uncapped unlock minus claimed, as reported by `effective_balance`
pub fn projected_unclaimed(schedule: &VestingSchedule, height: BlockHeight) -> i128 {
    linear_unlock(schedule, height).saturating_sub(i128::from(schedule.claimed_amount))
}
