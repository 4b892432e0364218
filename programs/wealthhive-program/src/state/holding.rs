use crate::{constants::SECONDS_PER_DAY, error::ErrorCode};
use anchor_lang::prelude::*;

/// Calendar day (UTC) a timestamp falls on, counted from the epoch. Claim
/// eligibility compares days, not elapsed hours.
pub fn epoch_day(timestamp: i64) -> i64 {
    timestamp.div_euclid(SECONDS_PER_DAY)
}

/// A user's purchased instance of a catalog plan. `price`, `validity_days`
/// and `daily_earning` are snapshots taken at purchase time.
#[account]
#[derive(InitSpace)]
pub struct Holding {
    pub user: Pubkey,
    pub plan_id: u64,
    pub sequence: u64, // per-user index, part of the PDA seed
    pub price: u64,
    pub validity_days: u64,
    pub daily_earning: u64,
    pub purchased_at: i64,
    pub expires_at: i64,
    pub last_claimed_at: Option<i64>,
    pub total_claimed: u64,
    pub is_active: bool,
    pub bump: u8,
}

impl Holding {
    /// Lazy expiry: the first mutation that observes `now` past the expiry
    /// date deactivates the holding. Idempotent.
    pub fn refresh_active(&mut self, now: i64) {
        if self.is_active && now > self.expires_at {
            self.is_active = false;
        }
    }

    pub fn is_claimable(&self, now: i64) -> bool {
        if !self.is_active || now > self.expires_at {
            return false;
        }
        match self.last_claimed_at {
            None => true,
            Some(claimed_at) => epoch_day(claimed_at) < epoch_day(now),
        }
    }

    /// Record today's claim and return the amount earned. Callers must have
    /// checked `is_claimable` first; this re-validates so a race cannot
    /// credit the same day twice.
    pub fn record_claim(&mut self, now: i64) -> Result<u64> {
        require!(self.is_claimable(now), ErrorCode::InvalidTransition);

        self.last_claimed_at = Some(now);
        self.total_claimed = self
            .total_claimed
            .checked_add(self.daily_earning)
            .ok_or(ErrorCode::ArithmeticOverflow)?;

        Ok(self.daily_earning)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DAY: i64 = SECONDS_PER_DAY;

    fn holding(purchased_at: i64, validity_days: u64) -> Holding {
        Holding {
            user: Pubkey::new_unique(),
            plan_id: 0,
            sequence: 0,
            price: 50_000,
            validity_days,
            daily_earning: 6_000,
            purchased_at,
            expires_at: purchased_at + validity_days as i64 * DAY,
            last_claimed_at: None,
            total_claimed: 0,
            is_active: true,
            bump: 255,
        }
    }

    #[test]
    fn epoch_day_changes_at_utc_midnight() {
        assert_eq!(epoch_day(0), 0);
        assert_eq!(epoch_day(DAY - 1), 0);
        assert_eq!(epoch_day(DAY), 1);
        // pre-epoch timestamps round toward earlier days, not toward zero
        assert_eq!(epoch_day(-1), -1);
    }

    #[test]
    fn never_claimed_holding_is_claimable() {
        let h = holding(1_000, 10);
        assert!(h.is_claimable(2_000));
    }

    #[test]
    fn claim_credits_once_per_calendar_day() {
        let mut h = holding(1_000, 10);

        assert_eq!(h.record_claim(2_000).unwrap(), 6_000);
        assert_eq!(h.total_claimed, 6_000);
        assert_eq!(h.last_claimed_at, Some(2_000));

        // later the same day: ineligible, and a forced claim is rejected
        assert!(!h.is_claimable(40_000));
        assert_eq!(
            h.record_claim(40_000).unwrap_err(),
            error!(ErrorCode::InvalidTransition)
        );
        assert_eq!(h.total_claimed, 6_000);

        // next calendar day, even one second past midnight
        assert!(h.is_claimable(DAY + 1));
        assert_eq!(h.record_claim(DAY + 1).unwrap(), 6_000);
        assert_eq!(h.total_claimed, 12_000);
    }

    #[test]
    fn claim_just_before_midnight_is_eligible_again_after() {
        let mut h = holding(0, 10);

        h.record_claim(DAY - 10).unwrap();
        assert!(h.is_claimable(DAY + 10));
    }

    #[test]
    fn expired_holding_is_not_claimable() {
        let h = holding(0, 2);
        assert!(h.is_claimable(2 * DAY)); // expiry day itself still counts
        assert!(!h.is_claimable(2 * DAY + 1));
    }

    #[test]
    fn refresh_active_flips_exactly_once() {
        let mut h = holding(0, 2);

        h.refresh_active(DAY);
        assert!(h.is_active);

        h.refresh_active(2 * DAY + 1);
        assert!(!h.is_active);

        // idempotent on later reads
        h.refresh_active(3 * DAY);
        assert!(!h.is_active);
    }

    #[test]
    fn deactivated_holding_is_not_claimable() {
        let mut h = holding(0, 10);
        h.is_active = false;
        assert!(!h.is_claimable(DAY));
    }

    #[test]
    fn total_claimed_matches_the_sum_of_daily_earnings() {
        let mut h = holding(0, 5);

        let mut credited = 0u64;
        for day in 1..=5 {
            credited += h.record_claim(day * DAY).unwrap();
        }

        assert_eq!(h.total_claimed, credited);
        assert_eq!(h.total_claimed, 5 * h.daily_earning);
    }
}
