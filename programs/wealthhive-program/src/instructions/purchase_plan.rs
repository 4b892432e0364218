use crate::{constants::*, error::ErrorCode, state::*};
use anchor_lang::prelude::*;

#[derive(Accounts)]
#[instruction(reference: u64, plan_id: u64)]
pub struct PurchasePlan<'info> {
    #[account(mut)]
    pub user: Signer<'info>,

    #[account(
        seeds = [GLOBAL_STATE_SEED.as_bytes()],
        bump = global_state.bump
    )]
    pub global_state: Account<'info, GlobalState>,

    #[account(
        mut,
        seeds = [USER_SEED.as_bytes(), user.key().as_ref()],
        bump = user_account.bump,
        constraint = user_account.authority == user.key() @ ErrorCode::UnauthorizedUser,
        constraint = user_account.is_active @ ErrorCode::AccountDisabled
    )]
    pub user_account: Account<'info, UserAccount>,

    #[account(
        mut,
        seeds = [PLAN_SEED.as_bytes(), plan_id.to_le_bytes().as_ref()],
        bump = plan.bump,
        constraint = plan.is_active @ ErrorCode::PlanNotActive
    )]
    pub plan: Account<'info, Plan>,

    #[account(
        init,
        payer = user,
        space = 8 + Holding::INIT_SPACE,
        seeds = [
            HOLDING_SEED.as_bytes(),
            user.key().as_ref(),
            user_account.holdings_count.to_le_bytes().as_ref()
        ],
        bump
    )]
    pub holding: Account<'info, Holding>,

    /// Seeded by the caller-chosen reference: replaying the same purchase
    /// request fails to re-initialize this account, so the wallet can never
    /// be debited twice for one request.
    #[account(
        init,
        payer = user,
        space = 8 + LedgerEntry::INIT_SPACE,
        seeds = [
            LEDGER_ENTRY_SEED.as_bytes(),
            user.key().as_ref(),
            reference.to_le_bytes().as_ref()
        ],
        bump
    )]
    pub ledger_entry: Account<'info, LedgerEntry>,

    pub system_program: Program<'info, System>,
}

impl<'info> PurchasePlan<'info> {
    /// Debit the deposit wallet, create the holding with a snapshot of the
    /// plan terms, and append the completed purchase entry. One instruction,
    /// so either all three effects land or none do.
    pub fn purchase_plan(
        &mut self,
        reference: u64,
        _plan_id: u64,
        bumps: &PurchasePlanBumps,
    ) -> Result<()> {
        require!(!self.global_state.is_paused, ErrorCode::PlatformPaused);

        let now = Clock::get()?.unix_timestamp;
        let plan = &mut self.plan;
        let user_account = &mut self.user_account;

        let remaining = user_account.debit(WalletKind::Deposit, plan.price)?;

        let expires_at = now
            .checked_add(plan.validity_days as i64 * SECONDS_PER_DAY)
            .ok_or(ErrorCode::ArithmeticOverflow)?;

        self.holding.set_inner(Holding {
            user: self.user.key(),
            plan_id: plan.plan_id,
            sequence: user_account.holdings_count,
            price: plan.price,
            validity_days: plan.validity_days,
            daily_earning: plan.daily_earning,
            purchased_at: now,
            expires_at,
            last_claimed_at: None,
            total_claimed: 0,
            is_active: true,
            bump: bumps.holding,
        });

        self.ledger_entry.set_inner(LedgerEntry {
            user: self.user.key(),
            reference,
            sequence: user_account.ledger_count,
            entry_type: EntryType::PlanPurchase,
            amount: plan.price,
            status: EntryStatus::Completed,
            details: EntryDetails::PlanPurchase {
                plan_id: plan.plan_id,
                price: plan.price,
                validity_days: plan.validity_days,
                daily_earning: plan.daily_earning,
            },
            created_at: now,
            updated_at: now,
            bump: bumps.ledger_entry,
        });

        user_account.holdings_count += 1;
        user_account.ledger_count += 1;
        plan.times_purchased += 1;

        msg!(
            "User {} purchased plan '{}' for Rs {:.2} (deposit balance: Rs {:.2})",
            self.user.key(),
            plan.name,
            plan.price as f64 / 100.0,
            remaining as f64 / 100.0
        );

        Ok(())
    }
}
