use crate::error::ErrorCode;
use anchor_lang::prelude::*;

/// The two independent balances every account carries. Plan purchases spend
/// from the deposit wallet; daily earnings accrue to the withdrawal wallet.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum WalletKind {
    Deposit,
    Withdrawal,
}

#[account]
#[derive(InitSpace)]
pub struct UserAccount {
    pub authority: Pubkey,
    pub deposit_balance: u64,    // paise
    pub withdrawal_balance: u64, // paise
    pub total_withdrawn: u64,    // paise, completed withdrawals only
    pub referral_code: u64,
    pub referred_by: Option<Pubkey>,
    pub referral_count: u64,
    pub holdings_count: u64, // next holding sequence number
    pub ledger_count: u64,   // next ledger sequence number
    pub is_active: bool,     // accounts are soft-disabled, never closed
    pub created_at: i64,
    pub bump: u8,
}

impl UserAccount {
    fn balance_mut(&mut self, wallet: WalletKind) -> &mut u64 {
        match wallet {
            WalletKind::Deposit => &mut self.deposit_balance,
            WalletKind::Withdrawal => &mut self.withdrawal_balance,
        }
    }

    pub fn balance(&self, wallet: WalletKind) -> u64 {
        match wallet {
            WalletKind::Deposit => self.deposit_balance,
            WalletKind::Withdrawal => self.withdrawal_balance,
        }
    }

    /// Credit `amount` paise to the chosen wallet and return the new balance.
    pub fn credit(&mut self, wallet: WalletKind, amount: u64) -> Result<u64> {
        require!(amount > 0, ErrorCode::InvalidAmount);

        let balance = self.balance_mut(wallet);
        *balance = balance
            .checked_add(amount)
            .ok_or(ErrorCode::ArithmeticOverflow)?;

        Ok(*balance)
    }

    /// Debit `amount` paise from the chosen wallet and return the new
    /// balance. The balance is validated first so a failed debit leaves the
    /// account untouched.
    pub fn debit(&mut self, wallet: WalletKind, amount: u64) -> Result<u64> {
        require!(amount > 0, ErrorCode::InvalidAmount);

        let balance = self.balance_mut(wallet);
        require!(*balance >= amount, ErrorCode::InsufficientBalance);
        *balance -= amount;

        Ok(*balance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account() -> UserAccount {
        UserAccount {
            authority: Pubkey::new_unique(),
            deposit_balance: 0,
            withdrawal_balance: 0,
            total_withdrawn: 0,
            referral_code: 123456,
            referred_by: None,
            referral_count: 0,
            holdings_count: 0,
            ledger_count: 0,
            is_active: true,
            created_at: 0,
            bump: 255,
        }
    }

    #[test]
    fn credit_and_debit_track_each_wallet_independently() {
        let mut acc = account();

        assert_eq!(acc.credit(WalletKind::Deposit, 100_000).unwrap(), 100_000);
        assert_eq!(acc.credit(WalletKind::Withdrawal, 6_000).unwrap(), 6_000);
        assert_eq!(acc.debit(WalletKind::Deposit, 50_000).unwrap(), 50_000);

        assert_eq!(acc.deposit_balance, 50_000);
        assert_eq!(acc.withdrawal_balance, 6_000);
    }

    #[test]
    fn debit_more_than_balance_fails_and_leaves_balance_unchanged() {
        let mut acc = account();
        acc.withdrawal_balance = 15_000;

        let err = acc.debit(WalletKind::Withdrawal, 20_000).unwrap_err();
        assert_eq!(err, error!(ErrorCode::InsufficientBalance));
        assert_eq!(acc.withdrawal_balance, 15_000);
    }

    #[test]
    fn debit_entire_balance_is_allowed() {
        let mut acc = account();
        acc.deposit_balance = 50_000;

        assert_eq!(acc.debit(WalletKind::Deposit, 50_000).unwrap(), 0);
    }

    #[test]
    fn zero_amount_is_rejected_for_both_operations() {
        let mut acc = account();
        acc.deposit_balance = 1_000;

        assert_eq!(
            acc.credit(WalletKind::Deposit, 0).unwrap_err(),
            error!(ErrorCode::InvalidAmount)
        );
        assert_eq!(
            acc.debit(WalletKind::Deposit, 0).unwrap_err(),
            error!(ErrorCode::InvalidAmount)
        );
        assert_eq!(acc.deposit_balance, 1_000);
    }

    #[test]
    fn credit_overflow_is_reported_not_wrapped() {
        let mut acc = account();
        acc.deposit_balance = u64::MAX - 1;

        let err = acc.credit(WalletKind::Deposit, 2).unwrap_err();
        assert_eq!(err, error!(ErrorCode::ArithmeticOverflow));
        assert_eq!(acc.deposit_balance, u64::MAX - 1);
    }
}
