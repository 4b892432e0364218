use crate::{constants::*, error::ErrorCode, state::*};
use anchor_lang::prelude::*;

/// Shared account set for both admin verdicts. The entry's PDA is
/// re-derived from its own recorded user and reference, so an admin cannot
/// be handed a ledger row that belongs to a different wallet than the one
/// being credited.
#[derive(Accounts)]
pub struct ReviewTransaction<'info> {
    pub authority: Signer<'info>,

    #[account(
        seeds = [GLOBAL_STATE_SEED.as_bytes()],
        bump = global_state.bump,
        constraint = global_state.authority == authority.key() @ ErrorCode::UnauthorizedAuthority
    )]
    pub global_state: Account<'info, GlobalState>,

    #[account(
        mut,
        seeds = [
            LEDGER_ENTRY_SEED.as_bytes(),
            ledger_entry.user.as_ref(),
            ledger_entry.reference.to_le_bytes().as_ref()
        ],
        bump = ledger_entry.bump
    )]
    pub ledger_entry: Account<'info, LedgerEntry>,

    #[account(
        mut,
        seeds = [USER_SEED.as_bytes(), ledger_entry.user.as_ref()],
        bump = user_account.bump,
        constraint = user_account.authority == ledger_entry.user @ ErrorCode::UnauthorizedUser
    )]
    pub user_account: Account<'info, UserAccount>,
}

impl<'info> ReviewTransaction<'info> {
    /// `pending -> completed`. A completed deposit credits the deposit
    /// wallet; a completed withdrawal only finalizes the payout counter,
    /// the funds having left the wallet at submission. Entries that were
    /// never pending (purchases, earnings) fail the transition check.
    pub fn approve(&mut self) -> Result<()> {
        let now = Clock::get()?.unix_timestamp;
        let entry = &mut self.ledger_entry;
        let user_account = &mut self.user_account;

        entry.complete(now)?;

        match entry.entry_type {
            EntryType::Deposit => {
                user_account.credit(WalletKind::Deposit, entry.amount)?;
            }
            EntryType::Withdrawal => {
                user_account.total_withdrawn = user_account
                    .total_withdrawn
                    .checked_add(entry.amount)
                    .ok_or(ErrorCode::ArithmeticOverflow)?;
            }
            EntryType::PlanPurchase | EntryType::DailyEarning => {
                return err!(ErrorCode::InvalidTransition);
            }
        }

        msg!(
            "Approved {:?} of Rs {:.2} for user {}",
            entry.entry_type,
            entry.amount as f64 / 100.0,
            entry.user
        );

        Ok(())
    }

    /// `pending -> rejected`. A rejected deposit never touched the wallet;
    /// a rejected withdrawal refunds the amount reserved at submission.
    pub fn reject(&mut self) -> Result<()> {
        let now = Clock::get()?.unix_timestamp;
        let entry = &mut self.ledger_entry;
        let user_account = &mut self.user_account;

        entry.reject(now)?;

        match entry.entry_type {
            EntryType::Deposit => {}
            EntryType::Withdrawal => {
                user_account.credit(WalletKind::Withdrawal, entry.amount)?;
            }
            EntryType::PlanPurchase | EntryType::DailyEarning => {
                return err!(ErrorCode::InvalidTransition);
            }
        }

        msg!(
            "Rejected {:?} of Rs {:.2} for user {}",
            entry.entry_type,
            entry.amount as f64 / 100.0,
            entry.user
        );

        Ok(())
    }
}
