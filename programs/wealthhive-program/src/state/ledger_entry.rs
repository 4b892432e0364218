use crate::{constants::*, error::ErrorCode};
use anchor_lang::prelude::*;

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub enum EntryType {
    Deposit,
    Withdrawal,
    PlanPurchase,
    DailyEarning,
}

impl anchor_lang::Space for EntryType {
    const INIT_SPACE: usize = 1; // 1 byte for enum discriminator
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub enum EntryStatus {
    Pending,
    Completed,
    Rejected,
}

impl anchor_lang::Space for EntryStatus {
    const INIT_SPACE: usize = 1; // 1 byte for enum discriminator
}

/// Type-specific payload recorded with an entry: the off-platform payment
/// reference for deposits, the payout bank account for withdrawals, the plan
/// terms snapshot for purchases, the claim summary for earnings. Stored
/// verbatim for the audit trail, validated structurally only.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, PartialEq, Eq, Debug)]
pub enum EntryDetails {
    Deposit {
        method: String,       // payment rail, e.g. "UPI" or "USDT"
        reference_no: String, // UTR number / transfer hash the user submits
    },
    Withdrawal {
        account_holder: String,
        account_number: String,
        ifsc_code: String,
    },
    PlanPurchase {
        plan_id: u64,
        price: u64,
        validity_days: u64,
        daily_earning: u64,
    },
    DailyEarning {
        day: i64, // epoch day the claim covered
        holdings_claimed: u64,
    },
}

impl anchor_lang::Space for EntryDetails {
    // discriminator + the largest variant (Withdrawal: three length-prefixed
    // strings at their caps)
    const INIT_SPACE: usize = 1
        + (4 + MAX_ACCOUNT_HOLDER_LENGTH)
        + (4 + MAX_ACCOUNT_NUMBER_LENGTH)
        + (4 + MAX_IFSC_LENGTH);
}

/// Append-only audit record for every money movement. After creation only
/// `status` and `updated_at` may change, and only through the transitions
/// below.
#[account]
#[derive(InitSpace)]
pub struct LedgerEntry {
    pub user: Pubkey,
    pub reference: u64, // caller-chosen idempotency key, part of the PDA seed
    pub sequence: u64,  // per-user append index
    pub entry_type: EntryType,
    pub amount: u64, // paise
    pub status: EntryStatus,
    pub details: EntryDetails,
    pub created_at: i64,
    pub updated_at: i64,
    pub bump: u8,
}

impl LedgerEntry {
    /// `pending -> completed`. Terminal states never transition again.
    pub fn complete(&mut self, now: i64) -> Result<()> {
        require!(
            self.status == EntryStatus::Pending,
            ErrorCode::InvalidTransition
        );

        self.status = EntryStatus::Completed;
        self.updated_at = now;
        Ok(())
    }

    /// `pending -> rejected`. Terminal states never transition again.
    pub fn reject(&mut self, now: i64) -> Result<()> {
        require!(
            self.status == EntryStatus::Pending,
            ErrorCode::InvalidTransition
        );

        self.status = EntryStatus::Rejected;
        self.updated_at = now;
        Ok(())
    }
}
