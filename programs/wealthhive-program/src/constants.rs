use anchor_lang::prelude::*;

#[constant]
pub const SEED: &str = "anchor";

// Global seeds
pub const GLOBAL_STATE_SEED: &str = "global_state";

// User related seeds
pub const USER_SEED: &str = "user";
pub const REFERRAL_CODE_SEED: &str = "referral_code";
pub const HOLDING_SEED: &str = "holding";
pub const LEDGER_ENTRY_SEED: &str = "ledger";

// Catalog seeds
pub const PLAN_SEED: &str = "plan";

// Maximum string lengths
pub const MAX_NAME_LENGTH: usize = 64;
pub const MAX_DESCRIPTION_LENGTH: usize = 200;
pub const MAX_URL_LENGTH: usize = 200;
pub const MAX_METHOD_LENGTH: usize = 16;
pub const MAX_REFERENCE_NO_LENGTH: usize = 64;
pub const MAX_ACCOUNT_HOLDER_LENGTH: usize = 64;
pub const MAX_ACCOUNT_NUMBER_LENGTH: usize = 20;
pub const MAX_IFSC_LENGTH: usize = 16;

// Platform configuration
// All monetary amounts are u64 paise (1/100 rupee)
pub const DEFAULT_MIN_WITHDRAWAL: u64 = 10_000; // Rs 100 in paise
pub const MIN_VALIDITY_DAYS: u64 = 1;
pub const MAX_VALIDITY_DAYS: u64 = 3650;

// Referral code configuration
pub const REFERRAL_CODE_MIN: u64 = 100_000; // six decimal digits
pub const REFERRAL_CODE_SPACE: u64 = 900_000;
pub const MAX_CODE_ATTEMPTS: u8 = 8;

// Claim configuration
pub const SECONDS_PER_DAY: i64 = 86400; // 24 hours in seconds
