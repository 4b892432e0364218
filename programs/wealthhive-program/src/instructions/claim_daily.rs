use crate::{constants::*, error::ErrorCode, state::*};
use anchor_lang::prelude::*;
use anchor_lang::system_program::{create_account, CreateAccount};
use anchor_lang::AccountsExit;

#[derive(Accounts)]
#[instruction(reference: u64)]
pub struct ClaimDaily<'info> {
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

    /// The day's earning entry. Initialized in the handler rather than by
    /// the framework: a claim that finds nothing eligible returns zero and
    /// must leave no ledger row behind.
    /// CHECK: PDA verified by seeds; created in the handler only when a
    /// credit occurs.
    #[account(
        mut,
        seeds = [
            LEDGER_ENTRY_SEED.as_bytes(),
            user.key().as_ref(),
            reference.to_le_bytes().as_ref()
        ],
        bump
    )]
    pub ledger_entry: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
}

impl<'info> ClaimDaily<'info> {
    /// Walk the user's holdings (passed as remaining accounts), credit one
    /// day's earning for each eligible holding as a single summed credit to
    /// the withdrawal wallet, and append one `DailyEarning` entry. Holdings
    /// already claimed today, expired, or deactivated are skipped silently.
    pub fn claim_daily(
        ctx: Context<'_, '_, 'info, 'info, ClaimDaily<'info>>,
        reference: u64,
    ) -> Result<u64> {
        require!(
            !ctx.accounts.global_state.is_paused,
            ErrorCode::PlatformPaused
        );

        // Replayed reference: the request already went through. No-op.
        if !ctx.accounts.ledger_entry.data_is_empty() {
            msg!("Reference {} already recorded, nothing to do", reference);
            return Ok(0);
        }

        let now = Clock::get()?.unix_timestamp;
        let today = epoch_day(now);
        let user_key = ctx.accounts.user.key();

        let mut total: u64 = 0;
        let mut holdings_claimed: u64 = 0;

        for account_info in ctx.remaining_accounts {
            require!(account_info.is_writable, ErrorCode::HoldingNotFound);

            let mut holding: Account<Holding> = Account::try_from(account_info)
                .map_err(|_| error!(ErrorCode::HoldingNotFound))?;
            require!(holding.user == user_key, ErrorCode::UnauthorizedUser);

            holding.refresh_active(now);

            if holding.is_claimable(now) {
                let earned = holding.record_claim(now)?;
                total = total
                    .checked_add(earned)
                    .ok_or(ErrorCode::ArithmeticOverflow)?;
                holdings_claimed += 1;
            }

            // Persist claim fields and any lazy expiry flip.
            holding.exit(&crate::ID)?;
        }

        if total == 0 {
            msg!("No holdings eligible for day {}", today);
            return Ok(0);
        }

        let balance = ctx
            .accounts
            .user_account
            .credit(WalletKind::Withdrawal, total)?;
        let sequence = ctx.accounts.user_account.ledger_count;
        let bump = ctx.bumps.ledger_entry;

        Self::append_entry(
            &ctx,
            LedgerEntry {
                user: user_key,
                reference,
                sequence,
                entry_type: EntryType::DailyEarning,
                amount: total,
                status: EntryStatus::Completed,
                details: EntryDetails::DailyEarning {
                    day: today,
                    holdings_claimed,
                },
                created_at: now,
                updated_at: now,
                bump,
            },
        )?;
        ctx.accounts.user_account.ledger_count += 1;

        msg!(
            "User {} claimed Rs {:.2} across {} holdings (withdrawal balance: Rs {:.2})",
            user_key,
            total as f64 / 100.0,
            holdings_claimed,
            balance as f64 / 100.0
        );

        Ok(total)
    }

    fn append_entry(
        ctx: &Context<'_, '_, '_, 'info, ClaimDaily<'info>>,
        entry: LedgerEntry,
    ) -> Result<()> {
        let entry_info = ctx.accounts.ledger_entry.to_account_info();
        let space = 8 + LedgerEntry::INIT_SPACE;
        let lamports = Rent::get()?.minimum_balance(space);

        let user_key = ctx.accounts.user.key();
        let reference_bytes = entry.reference.to_le_bytes();
        let signer_seeds: &[&[u8]] = &[
            LEDGER_ENTRY_SEED.as_bytes(),
            user_key.as_ref(),
            reference_bytes.as_ref(),
            &[entry.bump],
        ];

        create_account(
            CpiContext::new_with_signer(
                ctx.accounts.system_program.to_account_info(),
                CreateAccount {
                    from: ctx.accounts.user.to_account_info(),
                    to: entry_info.clone(),
                },
                &[signer_seeds],
            ),
            lamports,
            space as u64,
            &crate::ID,
        )?;

        let mut entry_data = entry_info.try_borrow_mut_data()?;
        entry.try_serialize(&mut &mut entry_data[..])?;

        Ok(())
    }
}
