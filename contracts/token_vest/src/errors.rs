use soroban_sdk::{contracterror, log, Env, String};

/// Codes start at 101 so they stay apart from the token contract's own
/// error codes when a transfer fails inside a sale call.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum SaleError {
    Unauthorized = 101,
    SaleNotOpen = 102,
    DepositAboveCap = 103,
    DepositBelowMinimum = 104,
    NotWhitelisted = 105,
    WithdrawalNotOpen = 106,
    NothingToWithdraw = 107,
    AlreadyStarted = 108,
    NotConfigured = 109,
    AlreadyInitialized = 110,
    NotInitialized = 111,
    InvalidConfig = 112,
    InvalidAmount = 113,
    ZeroAllocation = 114,
    InsufficientInventory = 115,
    SaleNotClosed = 116,
    Overflow = 117,
    Reentrant = 118,
}

/// Failure classes callers can branch on without matching every code.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ErrorCategory {
    Authorization,
    PhaseViolation,
    BoundsViolation,
    EligibilityViolation,
    ConfigurationViolation,
    Vesting,
    Internal,
}

impl SaleError {
    /// Stable failure text. Integrations match on these strings, so they
    /// must not change.
    pub fn message(&self) -> &'static str {
        match self {
            SaleError::Unauthorized => "token vest: only foundation address can call this function",
            SaleError::SaleNotOpen => "token vest: sale not started yet",
            SaleError::DepositAboveCap => "token vest: value must be less than 2 ether",
            SaleError::DepositBelowMinimum => "token vest: value is less than 2 ether",
            SaleError::NotWhitelisted => {
                "token vest: only whitelisted addresses can call this function"
            }
            SaleError::WithdrawalNotOpen | SaleError::NothingToWithdraw => {
                "token vest: it is not time for withdrawal"
            }
            SaleError::AlreadyStarted => "token vest: sale already started",
            SaleError::NotConfigured => "token vest: sale not configured",
            SaleError::AlreadyInitialized => "token vest: already initialized",
            SaleError::NotInitialized => "token vest: not initialized",
            SaleError::InvalidConfig => "token vest: invalid configuration",
            SaleError::InvalidAmount => "token vest: value must be positive",
            SaleError::ZeroAllocation => "token vest: value buys no tokens",
            SaleError::InsufficientInventory => "token vest: not enough tokens left for sale",
            SaleError::SaleNotClosed => "token vest: sale not closed yet",
            SaleError::Overflow => "token vest: arithmetic overflow",
            SaleError::Reentrant => "token vest: reentrant call",
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            SaleError::Unauthorized => ErrorCategory::Authorization,
            SaleError::SaleNotOpen | SaleError::WithdrawalNotOpen | SaleError::SaleNotClosed => {
                ErrorCategory::PhaseViolation
            }
            SaleError::DepositAboveCap
            | SaleError::DepositBelowMinimum
            | SaleError::InvalidAmount
            | SaleError::ZeroAllocation
            | SaleError::InsufficientInventory => ErrorCategory::BoundsViolation,
            SaleError::NotWhitelisted => ErrorCategory::EligibilityViolation,
            SaleError::AlreadyStarted
            | SaleError::NotConfigured
            | SaleError::AlreadyInitialized
            | SaleError::NotInitialized
            | SaleError::InvalidConfig => ErrorCategory::ConfigurationViolation,
            SaleError::NothingToWithdraw => ErrorCategory::Vesting,
            SaleError::Overflow | SaleError::Reentrant => ErrorCategory::Internal,
        }
    }

    pub fn from_code(code: u32) -> Option<SaleError> {
        let error = match code {
            101 => SaleError::Unauthorized,
            102 => SaleError::SaleNotOpen,
            103 => SaleError::DepositAboveCap,
            104 => SaleError::DepositBelowMinimum,
            105 => SaleError::NotWhitelisted,
            106 => SaleError::WithdrawalNotOpen,
            107 => SaleError::NothingToWithdraw,
            108 => SaleError::AlreadyStarted,
            109 => SaleError::NotConfigured,
            110 => SaleError::AlreadyInitialized,
            111 => SaleError::NotInitialized,
            112 => SaleError::InvalidConfig,
            113 => SaleError::InvalidAmount,
            114 => SaleError::ZeroAllocation,
            115 => SaleError::InsufficientInventory,
            116 => SaleError::SaleNotClosed,
            117 => SaleError::Overflow,
            118 => SaleError::Reentrant,
            _ => return None,
        };
        Some(error)
    }
}

/// Writes the failure text to the diagnostic log and hands the error back,
/// for use in `map_err` at the entrypoint boundary.
pub fn reject(env: &Env, error: SaleError) -> SaleError {
    log!(
        env,
        "rejected with code {}: {}",
        error as u32,
        String::from_str(env, error.message())
    );
    error
}
