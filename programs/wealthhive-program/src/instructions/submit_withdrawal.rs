use crate::{constants::*, error::ErrorCode, state::*};
use anchor_lang::prelude::*;

#[derive(Accounts)]
#[instruction(reference: u64)]
pub struct SubmitWithdrawal<'info> {
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

impl<'info> SubmitWithdrawal<'info> {
    /// The requested amount is reserved by debiting the withdrawal wallet
    /// up front, so stacked pending requests cannot overdraw it. A rejected
    /// request refunds the reservation; an approved one has no further
    /// balance effect.
    pub fn submit_withdrawal(
        &mut self,
        reference: u64,
        amount: u64,
        account_holder: String,
        account_number: String,
        ifsc_code: String,
        bumps: &SubmitWithdrawalBumps,
    ) -> Result<()> {
        require!(!self.global_state.is_paused, ErrorCode::PlatformPaused);
        require!(
            amount >= self.global_state.min_withdrawal,
            ErrorCode::BelowMinimum
        );
        require!(!account_holder.is_empty(), ErrorCode::DetailMissing);
        require!(
            account_holder.len() <= MAX_ACCOUNT_HOLDER_LENGTH,
            ErrorCode::DetailTooLong
        );
        require!(!account_number.is_empty(), ErrorCode::DetailMissing);
        require!(
            account_number.len() <= MAX_ACCOUNT_NUMBER_LENGTH,
            ErrorCode::DetailTooLong
        );
        require!(!ifsc_code.is_empty(), ErrorCode::DetailMissing);
        require!(ifsc_code.len() <= MAX_IFSC_LENGTH, ErrorCode::DetailTooLong);

        let now = Clock::get()?.unix_timestamp;
        let user_account = &mut self.user_account;

        let remaining = user_account.debit(WalletKind::Withdrawal, amount)?;

        self.ledger_entry.set_inner(LedgerEntry {
            user: self.user.key(),
            reference,
            sequence: user_account.ledger_count,
            entry_type: EntryType::Withdrawal,
            amount,
            status: EntryStatus::Pending,
            details: EntryDetails::Withdrawal {
                account_holder,
                account_number,
                ifsc_code,
            },
            created_at: now,
            updated_at: now,
            bump: bumps.ledger_entry,
        });

        user_account.ledger_count += 1;

        msg!(
            "User {} requested a withdrawal of Rs {:.2} (reserved, Rs {:.2} left)",
            self.user.key(),
            amount as f64 / 100.0,
            remaining as f64 / 100.0
        );

        Ok(())
    }
}
