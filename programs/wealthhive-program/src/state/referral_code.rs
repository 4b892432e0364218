use crate::{constants::*, error::ErrorCode};
use anchor_lang::prelude::*;
use anchor_lang::solana_program::hash::hashv;

/// Registry entry for an issued referral code. The PDA is seeded by the code
/// itself, so creating the entry is also the global uniqueness check: a
/// colliding code fails to initialize and the caller retries with the next
/// attempt counter.
#[account]
#[derive(InitSpace)]
pub struct ReferralCode {
    pub code: u64,
    pub owner: Pubkey,
    pub issued_at: i64,
    pub bump: u8,
}

impl ReferralCode {
    /// Derive the six-digit code for `(entropy, attempt)`.
    ///
    /// The SHA-256 digest is folded uniformly onto [100000, 999999], so a
    /// client can pre-derive the registry address before signing. `attempt`
    /// is the bounded collision-retry counter; once the budget is spent the
    /// caller gets `CodeSpaceExhausted` instead of another candidate.
    pub fn issue(entropy: &Pubkey, attempt: u8) -> Result<u64> {
        require!(attempt < MAX_CODE_ATTEMPTS, ErrorCode::CodeSpaceExhausted);

        let digest = hashv(&[entropy.as_ref(), &[attempt]]).to_bytes();
        let mut raw = [0u8; 8];
        raw.copy_from_slice(&digest[..8]);

        Ok(REFERRAL_CODE_MIN + u64::from_le_bytes(raw) % REFERRAL_CODE_SPACE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issued_codes_stay_inside_the_six_digit_space() {
        let entropy = Pubkey::new_unique();

        for attempt in 0..MAX_CODE_ATTEMPTS {
            let code = ReferralCode::issue(&entropy, attempt).unwrap();
            assert!(code >= REFERRAL_CODE_MIN);
            assert!(code < REFERRAL_CODE_MIN + REFERRAL_CODE_SPACE);
        }
    }

    #[test]
    fn issue_is_deterministic_per_entropy_and_attempt() {
        let entropy = Pubkey::new_unique();

        let first = ReferralCode::issue(&entropy, 3).unwrap();
        let second = ReferralCode::issue(&entropy, 3).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn retry_attempts_produce_fresh_candidates() {
        let entropy = Pubkey::new_unique();

        let codes: Vec<u64> = (0..MAX_CODE_ATTEMPTS)
            .map(|attempt| ReferralCode::issue(&entropy, attempt).unwrap())
            .collect();

        // A stuck derivation would hand the caller the same collision back
        // on every retry.
        let first = codes[0];
        assert!(codes.iter().any(|code| *code != first));
    }

    #[test]
    fn different_signers_get_different_codes() {
        let codes: Vec<u64> = (0..4)
            .map(|_| ReferralCode::issue(&Pubkey::new_unique(), 0).unwrap())
            .collect();

        let first = codes[0];
        assert!(codes.iter().any(|code| *code != first));
    }

    #[test]
    fn retry_budget_is_bounded() {
        let entropy = Pubkey::new_unique();

        let err = ReferralCode::issue(&entropy, MAX_CODE_ATTEMPTS).unwrap_err();
        assert_eq!(err, error!(ErrorCode::CodeSpaceExhausted));
    }
}
