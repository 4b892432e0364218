use crate::{constants::*, error::ErrorCode, state::*};
use anchor_lang::prelude::*;

#[derive(Accounts)]
#[instruction(min_withdrawal: u64, referral_code: u64)]
pub struct Initialize<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        init,
        payer = authority,
        space = 8 + GlobalState::INIT_SPACE,
        seeds = [GLOBAL_STATE_SEED.as_bytes()],
        bump
    )]
    pub global_state: Account<'info, GlobalState>,

    /// The authority's own account doubles as the root of the invitation
    /// chain: every later sign-up must present an existing referral code.
    #[account(
        init,
        payer = authority,
        space = 8 + UserAccount::INIT_SPACE,
        seeds = [USER_SEED.as_bytes(), authority.key().as_ref()],
        bump
    )]
    pub user_account: Account<'info, UserAccount>,

    #[account(
        init,
        payer = authority,
        space = 8 + ReferralCode::INIT_SPACE,
        seeds = [REFERRAL_CODE_SEED.as_bytes(), referral_code.to_le_bytes().as_ref()],
        bump
    )]
    pub genesis_code: Account<'info, ReferralCode>,

    pub system_program: Program<'info, System>,
}

impl<'info> Initialize<'info> {
    pub fn initialize(
        &mut self,
        min_withdrawal: u64,
        referral_code: u64,
        code_attempt: u8,
        bumps: &InitializeBumps,
    ) -> Result<()> {
        // Zero means "platform default" rather than "no floor".
        let min_withdrawal = if min_withdrawal == 0 {
            DEFAULT_MIN_WITHDRAWAL
        } else {
            min_withdrawal
        };
        require!(
            referral_code == ReferralCode::issue(&self.authority.key(), code_attempt)?,
            ErrorCode::InvalidReferralCode
        );

        let now = Clock::get()?.unix_timestamp;

        let global_state = &mut self.global_state;
        global_state.authority = self.authority.key();
        global_state.min_withdrawal = min_withdrawal;
        global_state.is_paused = false;
        global_state.total_plans = 0;
        global_state.total_accounts = 1;
        global_state.bump = bumps.global_state;

        self.user_account.set_inner(UserAccount {
            authority: self.authority.key(),
            deposit_balance: 0,
            withdrawal_balance: 0,
            total_withdrawn: 0,
            referral_code,
            referred_by: None,
            referral_count: 0,
            holdings_count: 0,
            ledger_count: 0,
            is_active: true,
            created_at: now,
            bump: bumps.user_account,
        });

        self.genesis_code.set_inner(ReferralCode {
            code: referral_code,
            owner: self.authority.key(),
            issued_at: now,
            bump: bumps.genesis_code,
        });

        msg!(
            "Platform initialized by authority {} (min withdrawal Rs {:.2})",
            self.authority.key(),
            min_withdrawal as f64 / 100.0
        );
        msg!("Genesis invitation code: {}", referral_code);

        Ok(())
    }
}
