use anchor_lang::prelude::*;

#[account]
#[derive(InitSpace)]
pub struct GlobalState {
    pub authority: Pubkey,
    pub min_withdrawal: u64, // paise, platform floor for withdrawal requests
    pub is_paused: bool,
    // Global counters for plan ids and the referral code space backstop
    pub total_plans: u64,
    pub total_accounts: u64,
    pub bump: u8,
}
