use crate::{constants::*, error::ErrorCode, state::*};
use anchor_lang::prelude::*;

#[derive(Accounts)]
#[instruction(invitation_code: u64, referral_code: u64)]
pub struct SignUp<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [GLOBAL_STATE_SEED.as_bytes()],
        bump = global_state.bump
    )]
    pub global_state: Account<'info, GlobalState>,

    #[account(
        init,
        payer = authority,
        space = 8 + UserAccount::INIT_SPACE,
        seeds = [USER_SEED.as_bytes(), authority.key().as_ref()],
        bump
    )]
    pub user_account: Account<'info, UserAccount>,

    /// Registry entry for the new user's own code. Seeded by the code, so
    /// initialization doubles as the global uniqueness check: on collision
    /// the client retries with the next attempt counter.
    #[account(
        init,
        payer = authority,
        space = 8 + ReferralCode::INIT_SPACE,
        seeds = [REFERRAL_CODE_SEED.as_bytes(), referral_code.to_le_bytes().as_ref()],
        bump
    )]
    pub new_code: Account<'info, ReferralCode>,

    /// The inviter's registry entry. A code nobody issued has no PDA here,
    /// which is what makes an invitation invalid.
    #[account(
        seeds = [REFERRAL_CODE_SEED.as_bytes(), invitation_code.to_le_bytes().as_ref()],
        bump = inviter_code.bump,
        constraint = inviter_code.code == invitation_code @ ErrorCode::InvalidInvitationCode
    )]
    pub inviter_code: Account<'info, ReferralCode>,

    #[account(
        mut,
        seeds = [USER_SEED.as_bytes(), inviter_code.owner.as_ref()],
        bump = inviter_account.bump,
        constraint = inviter_account.authority == inviter_code.owner @ ErrorCode::InvalidInvitationCode
    )]
    pub inviter_account: Account<'info, UserAccount>,

    pub system_program: Program<'info, System>,
}

impl<'info> SignUp<'info> {
    pub fn sign_up(
        &mut self,
        invitation_code: u64,
        referral_code: u64,
        code_attempt: u8,
        bumps: &SignUpBumps,
    ) -> Result<()> {
        require!(!self.global_state.is_paused, ErrorCode::PlatformPaused);
        require!(
            referral_code == ReferralCode::issue(&self.authority.key(), code_attempt)?,
            ErrorCode::InvalidReferralCode
        );

        let now = Clock::get()?.unix_timestamp;

        self.user_account.set_inner(UserAccount {
            authority: self.authority.key(),
            deposit_balance: 0,
            withdrawal_balance: 0,
            total_withdrawn: 0,
            referral_code,
            referred_by: Some(self.inviter_code.owner),
            referral_count: 0,
            holdings_count: 0,
            ledger_count: 0,
            is_active: true,
            created_at: now,
            bump: bumps.user_account,
        });

        self.new_code.set_inner(ReferralCode {
            code: referral_code,
            owner: self.authority.key(),
            issued_at: now,
            bump: bumps.new_code,
        });

        self.inviter_account.referral_count = self
            .inviter_account
            .referral_count
            .checked_add(1)
            .ok_or(ErrorCode::ArithmeticOverflow)?;

        self.global_state.total_accounts = self
            .global_state
            .total_accounts
            .checked_add(1)
            .ok_or(ErrorCode::ArithmeticOverflow)?;

        msg!(
            "User {} signed up with code {} (invited by {} via {})",
            self.authority.key(),
            referral_code,
            self.inviter_code.owner,
            invitation_code
        );

        Ok(())
    }
}
