use anchor_lang::prelude::*;

/// Catalog item managed by the platform authority. Holdings copy the plan
/// terms at purchase time, so edits here only affect future purchases.
#[account]
#[derive(InitSpace)]
pub struct Plan {
    pub plan_id: u64,
    #[max_len(64)]
    pub name: String,
    #[max_len(200)]
    pub description: String,
    pub price: u64,         // paise
    pub validity_days: u64,
    pub daily_earning: u64, // paise
    #[max_len(200)]
    pub image_url: String,
    pub times_purchased: u64,
    pub is_active: bool,
    pub created_at: i64,
    pub bump: u8,
}
