pub mod constants;
pub mod error;
pub mod instructions;
pub mod state;

use anchor_lang::prelude::*;

pub use constants::*;
pub use instructions::*;
pub use state::*;

declare_id!("A9bpNYbPCvaTqzvhzb2nCQK9myCvatafbJq6YkzUPfbk");

#[program]
pub mod wealthhive_program {
    use super::*;

    pub fn initialize(
        ctx: Context<Initialize>,
        min_withdrawal: u64,
        referral_code: u64,
        code_attempt: u8,
    ) -> Result<()> {
        ctx.accounts
            .initialize(min_withdrawal, referral_code, code_attempt, &ctx.bumps)
    }

    pub fn sign_up(
        ctx: Context<SignUp>,
        invitation_code: u64,
        referral_code: u64,
        code_attempt: u8,
    ) -> Result<()> {
        ctx.accounts
            .sign_up(invitation_code, referral_code, code_attempt, &ctx.bumps)
    }

    pub fn create_plan(
        ctx: Context<CreatePlan>,
        name: String,
        description: String,
        price: u64,
        validity_days: u64,
        daily_earning: u64,
        image_url: String,
    ) -> Result<()> {
        ctx.accounts.create_plan(
            name,
            description,
            price,
            validity_days,
            daily_earning,
            image_url,
            &ctx.bumps,
        )
    }

    pub fn update_plan(
        ctx: Context<UpdatePlan>,
        plan_id: u64,
        price: Option<u64>,
        validity_days: Option<u64>,
        daily_earning: Option<u64>,
        description: Option<String>,
        is_active: Option<bool>,
    ) -> Result<()> {
        ctx.accounts.update_plan(
            plan_id,
            price,
            validity_days,
            daily_earning,
            description,
            is_active,
        )
    }

    pub fn purchase_plan(ctx: Context<PurchasePlan>, reference: u64, plan_id: u64) -> Result<()> {
        ctx.accounts.purchase_plan(reference, plan_id, &ctx.bumps)
    }

    pub fn claim_daily<'info>(
        ctx: Context<'_, '_, 'info, 'info, ClaimDaily<'info>>,
        reference: u64,
    ) -> Result<u64> {
        ClaimDaily::claim_daily(ctx, reference)
    }

    pub fn submit_deposit(
        ctx: Context<SubmitDeposit>,
        reference: u64,
        amount: u64,
        method: String,
        reference_no: String,
    ) -> Result<()> {
        ctx.accounts
            .submit_deposit(reference, amount, method, reference_no, &ctx.bumps)
    }

    pub fn submit_withdrawal(
        ctx: Context<SubmitWithdrawal>,
        reference: u64,
        amount: u64,
        account_holder: String,
        account_number: String,
        ifsc_code: String,
    ) -> Result<()> {
        ctx.accounts.submit_withdrawal(
            reference,
            amount,
            account_holder,
            account_number,
            ifsc_code,
            &ctx.bumps,
        )
    }

    pub fn approve_transaction(ctx: Context<ReviewTransaction>) -> Result<()> {
        ctx.accounts.approve()
    }

    pub fn reject_transaction(ctx: Context<ReviewTransaction>) -> Result<()> {
        ctx.accounts.reject()
    }

    pub fn set_paused(ctx: Context<SetPaused>, paused: bool) -> Result<()> {
        ctx.accounts.set_paused(paused)
    }

    pub fn set_account_status(ctx: Context<SetAccountStatus>, active: bool) -> Result<()> {
        ctx.accounts.set_account_status(active)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    const DAY: i64 = SECONDS_PER_DAY;

    fn account_with(deposit: u64, withdrawal: u64) -> UserAccount {
        UserAccount {
            authority: Pubkey::new_unique(),
            deposit_balance: deposit,
            withdrawal_balance: withdrawal,
            total_withdrawn: 0,
            referral_code: 654321,
            referred_by: None,
            referral_count: 0,
            holdings_count: 0,
            ledger_count: 0,
            is_active: true,
            created_at: 0,
            bump: 255,
        }
    }

    /// The full purchase-then-claim walk: Rs 1000 deposit balance, a
    /// Rs 500 / 10 day / Rs 60-per-day plan.
    #[test]
    fn purchase_then_claim_scenario() {
        let mut acc = account_with(100_000, 0);
        let purchased_at = 100 * DAY + 3600;

        // purchase debits the deposit wallet and snapshots the plan terms
        acc.debit(WalletKind::Deposit, 50_000).unwrap();
        let mut holding = Holding {
            user: acc.authority,
            plan_id: 0,
            sequence: 0,
            price: 50_000,
            validity_days: 10,
            daily_earning: 6_000,
            purchased_at,
            expires_at: purchased_at + 10 * DAY,
            last_claimed_at: None,
            total_claimed: 0,
            is_active: true,
            bump: 255,
        };
        acc.holdings_count += 1;
        assert_eq!(acc.deposit_balance, 50_000);

        // next day: one claim credits the withdrawal wallet
        let next_day = purchased_at + DAY;
        assert!(holding.is_claimable(next_day));
        let earned = holding.record_claim(next_day).unwrap();
        acc.credit(WalletKind::Withdrawal, earned).unwrap();

        assert_eq!(acc.withdrawal_balance, 6_000);
        assert_eq!(holding.total_claimed, 6_000);
        assert_eq!(epoch_day(holding.last_claimed_at.unwrap()), epoch_day(next_day));

        // second claim the same day finds nothing eligible
        assert!(!holding.is_claimable(next_day + 7200));
        assert_eq!(acc.withdrawal_balance, 6_000);
    }

    #[test]
    fn purchase_with_insufficient_deposit_balance_changes_nothing() {
        let mut acc = account_with(30_000, 0);

        let err = acc.debit(WalletKind::Deposit, 50_000).unwrap_err();
        assert_eq!(err, error!(ErrorCode::InsufficientBalance));
        assert_eq!(acc.deposit_balance, 30_000);
        assert_eq!(acc.holdings_count, 0);
    }

    /// Withdrawal life cycle: reserve at submission, refund on rejection,
    /// finalize on approval.
    #[test]
    fn withdrawal_reserve_refund_and_finalize() {
        let mut acc = account_with(0, 40_000);
        let mut entry = LedgerEntry {
            user: acc.authority,
            reference: 7,
            sequence: 0,
            entry_type: EntryType::Withdrawal,
            amount: 25_000,
            status: EntryStatus::Pending,
            details: EntryDetails::Withdrawal {
                account_holder: "A Kumar".to_string(),
                account_number: "123456789012".to_string(),
                ifsc_code: "HDFC0001234".to_string(),
            },
            created_at: 0,
            updated_at: 0,
            bump: 255,
        };

        // submission reserves the amount
        acc.debit(WalletKind::Withdrawal, entry.amount).unwrap();
        assert_eq!(acc.withdrawal_balance, 15_000);

        // rejection refunds the reservation
        entry.reject(10).unwrap();
        acc.credit(WalletKind::Withdrawal, entry.amount).unwrap();
        assert_eq!(acc.withdrawal_balance, 40_000);

        // the entry is terminal now: approving it later must fail and the
        // wallet must not move again
        assert_eq!(entry.complete(20).unwrap_err(), error!(ErrorCode::InvalidTransition));
        assert_eq!(acc.withdrawal_balance, 40_000);
        assert_eq!(acc.total_withdrawn, 0);
    }

    #[test]
    fn approved_deposit_credits_exactly_once() {
        let mut acc = account_with(0, 0);
        let mut entry = LedgerEntry {
            user: acc.authority,
            reference: 9,
            sequence: 0,
            entry_type: EntryType::Deposit,
            amount: 100_000,
            status: EntryStatus::Pending,
            details: EntryDetails::Deposit {
                method: "UPI".to_string(),
                reference_no: "309812776401".to_string(),
            },
            created_at: 0,
            updated_at: 0,
            bump: 255,
        };

        entry.complete(5).unwrap();
        acc.credit(WalletKind::Deposit, entry.amount).unwrap();
        assert_eq!(acc.deposit_balance, 100_000);

        // a replayed approval is rejected before any balance effect
        assert_eq!(entry.complete(6).unwrap_err(), error!(ErrorCode::InvalidTransition));
        assert_eq!(acc.deposit_balance, 100_000);
    }
}
