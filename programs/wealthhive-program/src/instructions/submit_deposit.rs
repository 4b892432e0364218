use crate::{constants::*, error::ErrorCode, state::*};
use anchor_lang::prelude::*;

#[derive(Accounts)]
#[instruction(reference: u64)]
pub struct SubmitDeposit<'info> {
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

impl<'info> SubmitDeposit<'info> {
    /// Record the user's claim that funds were sent off-platform. Nothing
    /// is credited here: the claimed amount stays unverified until an
    /// administrator completes the entry.
    pub fn submit_deposit(
        &mut self,
        reference: u64,
        amount: u64,
        method: String,
        reference_no: String,
        bumps: &SubmitDepositBumps,
    ) -> Result<()> {
        require!(!self.global_state.is_paused, ErrorCode::PlatformPaused);
        require!(amount > 0, ErrorCode::InvalidAmount);
        require!(!method.is_empty(), ErrorCode::DetailMissing);
        require!(method.len() <= MAX_METHOD_LENGTH, ErrorCode::DetailTooLong);
        require!(!reference_no.is_empty(), ErrorCode::DetailMissing);
        require!(
            reference_no.len() <= MAX_REFERENCE_NO_LENGTH,
            ErrorCode::DetailTooLong
        );

        let now = Clock::get()?.unix_timestamp;
        let user_account = &mut self.user_account;

        self.ledger_entry.set_inner(LedgerEntry {
            user: self.user.key(),
            reference,
            sequence: user_account.ledger_count,
            entry_type: EntryType::Deposit,
            amount,
            status: EntryStatus::Pending,
            details: EntryDetails::Deposit {
                method: method.clone(),
                reference_no,
            },
            created_at: now,
            updated_at: now,
            bump: bumps.ledger_entry,
        });

        user_account.ledger_count += 1;

        msg!(
            "User {} submitted a {} deposit request of Rs {:.2}",
            self.user.key(),
            method,
            amount as f64 / 100.0
        );

        Ok(())
    }
}
