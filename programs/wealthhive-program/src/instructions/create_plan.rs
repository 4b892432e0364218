use crate::{constants::*, error::ErrorCode, state::*};
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct CreatePlan<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [GLOBAL_STATE_SEED.as_bytes()],
        bump = global_state.bump,
        constraint = global_state.authority == authority.key() @ ErrorCode::UnauthorizedAuthority
    )]
    pub global_state: Account<'info, GlobalState>,

    #[account(
        init,
        payer = authority,
        space = 8 + Plan::INIT_SPACE,
        seeds = [
            PLAN_SEED.as_bytes(),
            global_state.total_plans.to_le_bytes().as_ref()
        ],
        bump
    )]
    pub plan: Account<'info, Plan>,

    pub system_program: Program<'info, System>,
}

impl<'info> CreatePlan<'info> {
    pub fn create_plan(
        &mut self,
        name: String,
        description: String,
        price: u64,
        validity_days: u64,
        daily_earning: u64,
        image_url: String,
        bumps: &CreatePlanBumps,
    ) -> Result<()> {
        require!(name.len() <= MAX_NAME_LENGTH, ErrorCode::NameTooLong);
        require!(
            description.len() <= MAX_DESCRIPTION_LENGTH,
            ErrorCode::DescriptionTooLong
        );
        require!(image_url.len() <= MAX_URL_LENGTH, ErrorCode::UrlTooLong);
        require!(price > 0, ErrorCode::InvalidPlanPrice);
        require!(
            (MIN_VALIDITY_DAYS..=MAX_VALIDITY_DAYS).contains(&validity_days),
            ErrorCode::InvalidValidity
        );

        let global_state = &mut self.global_state;

        self.plan.set_inner(Plan {
            plan_id: global_state.total_plans,
            name: name.clone(),
            description,
            price,
            validity_days,
            daily_earning,
            image_url,
            times_purchased: 0,
            is_active: true,
            created_at: Clock::get()?.unix_timestamp,
            bump: bumps.plan,
        });

        global_state.total_plans += 1;

        msg!(
            "Plan '{}' created: Rs {:.2} for {} days, Rs {:.2}/day",
            name,
            price as f64 / 100.0,
            validity_days,
            daily_earning as f64 / 100.0
        );

        Ok(())
    }
}
