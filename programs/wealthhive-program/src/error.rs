use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCode {
    // Validation errors
    #[msg("Plan name is too long")]
    NameTooLong,
    #[msg("Description is too long")]
    DescriptionTooLong,
    #[msg("Image URL is too long")]
    UrlTooLong,
    #[msg("Payment detail field is too long")]
    DetailTooLong,
    #[msg("Payment detail field is required")]
    DetailMissing,
    #[msg("Invalid amount")]
    InvalidAmount,
    #[msg("Invalid plan price")]
    InvalidPlanPrice,
    #[msg("Invalid plan validity")]
    InvalidValidity,

    // Authorization errors
    #[msg("Unauthorized user")]
    UnauthorizedUser,
    #[msg("Unauthorized authority")]
    UnauthorizedAuthority,

    // Wallet and ledger errors
    #[msg("Insufficient balance")]
    InsufficientBalance,
    #[msg("Withdrawal amount is below the platform minimum")]
    BelowMinimum,
    #[msg("Transaction is not pending")]
    InvalidTransition,

    // Referral errors
    #[msg("Invitation code does not match any account")]
    InvalidInvitationCode,
    #[msg("Referral code does not match its derivation")]
    InvalidReferralCode,
    #[msg("Referral code retry budget exhausted")]
    CodeSpaceExhausted,

    // Plan and holding errors
    #[msg("Plan is not active")]
    PlanNotActive,
    #[msg("Account is not a holding of this user")]
    HoldingNotFound,

    // Account state errors
    #[msg("Platform is paused")]
    PlatformPaused,
    #[msg("Account is disabled")]
    AccountDisabled,

    // Math errors
    #[msg("Arithmetic overflow")]
    ArithmeticOverflow,
}
