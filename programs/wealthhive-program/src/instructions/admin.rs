use crate::{constants::*, error::ErrorCode, state::*};
use anchor_lang::prelude::*;

/// Catalog edit. Holdings snapshot plan terms at purchase, so nothing here
/// touches already-sold plans.
#[derive(Accounts)]
#[instruction(plan_id: u64)]
pub struct UpdatePlan<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        seeds = [GLOBAL_STATE_SEED.as_bytes()],
        bump = global_state.bump,
        constraint = global_state.authority == authority.key() @ ErrorCode::UnauthorizedAuthority
    )]
    pub global_state: Account<'info, GlobalState>,

    #[account(
        mut,
        seeds = [PLAN_SEED.as_bytes(), plan_id.to_le_bytes().as_ref()],
        bump = plan.bump
    )]
    pub plan: Account<'info, Plan>,
}

impl<'info> UpdatePlan<'info> {
    pub fn update_plan(
        &mut self,
        _plan_id: u64,
        price: Option<u64>,
        validity_days: Option<u64>,
        daily_earning: Option<u64>,
        description: Option<String>,
        is_active: Option<bool>,
    ) -> Result<()> {
        let plan = &mut self.plan;

        if let Some(price) = price {
            require!(price > 0, ErrorCode::InvalidPlanPrice);
            plan.price = price;
        }
        if let Some(validity_days) = validity_days {
            require!(
                (MIN_VALIDITY_DAYS..=MAX_VALIDITY_DAYS).contains(&validity_days),
                ErrorCode::InvalidValidity
            );
            plan.validity_days = validity_days;
        }
        if let Some(daily_earning) = daily_earning {
            plan.daily_earning = daily_earning;
        }
        if let Some(description) = description {
            require!(
                description.len() <= MAX_DESCRIPTION_LENGTH,
                ErrorCode::DescriptionTooLong
            );
            plan.description = description;
        }
        if let Some(is_active) = is_active {
            plan.is_active = is_active;
        }

        msg!("Plan {} updated (future purchases only)", plan.plan_id);

        Ok(())
    }
}

#[derive(Accounts)]
pub struct SetPaused<'info> {
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [GLOBAL_STATE_SEED.as_bytes()],
        bump = global_state.bump,
        constraint = global_state.authority == authority.key() @ ErrorCode::UnauthorizedAuthority
    )]
    pub global_state: Account<'info, GlobalState>,
}

impl<'info> SetPaused<'info> {
    pub fn set_paused(&mut self, paused: bool) -> Result<()> {
        self.global_state.is_paused = paused;
        msg!("Platform paused: {}", paused);
        Ok(())
    }
}

/// Soft-disable. Accounts and their history are never deleted; a disabled
/// account just stops being able to move money.
#[derive(Accounts)]
pub struct SetAccountStatus<'info> {
    pub authority: Signer<'info>,

    #[account(
        seeds = [GLOBAL_STATE_SEED.as_bytes()],
        bump = global_state.bump,
        constraint = global_state.authority == authority.key() @ ErrorCode::UnauthorizedAuthority
    )]
    pub global_state: Account<'info, GlobalState>,

    #[account(
        mut,
        seeds = [USER_SEED.as_bytes(), user_account.authority.as_ref()],
        bump = user_account.bump
    )]
    pub user_account: Account<'info, UserAccount>,
}

impl<'info> SetAccountStatus<'info> {
    pub fn set_account_status(&mut self, active: bool) -> Result<()> {
        self.user_account.is_active = active;
        msg!(
            "Account {} active: {}",
            self.user_account.authority,
            active
        );
        Ok(())
    }
}
