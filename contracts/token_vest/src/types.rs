use soroban_sdk::{contracttype, Address, Env};

/// Default spacing between vesting tranches: 30 days.
pub const DEFAULT_VESTING_INTERVAL: u64 = 30 * 86_400;

/// Deposit policy of the sale. The open sale caps each deposit, the private
/// sale requires a minimum deposit and a whitelisted participant.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub enum SaleVariant {
    /// Deposits must be strictly below the cap.
    Open(i128),
    /// Deposits must be at least the minimum.
    Private(i128),
}

impl SaleVariant {
    pub fn requires_whitelist(&self) -> bool {
        matches!(self, SaleVariant::Private(_))
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct SaleConfig {
    pub token: Address,         // Distributed token contract
    pub payment_asset: Address, // Asset collected from participants
    pub rate: i128,             // Payment units per whole token
    pub token_unit: i128,       // 10^decimals of the distributed token
    pub foundation: Address,
    pub variant: SaleVariant,
    pub vesting_interval: u64, // Seconds between tranches
}

/// Timestamps fixed once by `start_sale`.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct SaleSchedule {
    pub sale_start: u64,
    pub sale_end: u64,
    pub withdrawal_unlock: u64,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[contracttype]
pub enum SalePhase {
    Unconfigured,
    Scheduled,
    Open,
    Closed,
    WithdrawalOpen,
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[contracttype]
pub struct ParticipantVesting {
    pub total_allocated: i128,
    pub total_withdrawn: i128,
}

impl ParticipantVesting {
    pub fn remaining(&self) -> i128 {
        self.total_allocated - self.total_withdrawn
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct VestingDetail {
    pub total_allocated: i128,
    pub total_withdrawn: i128,
    /// Amount `withdraw` would release at the current ledger time.
    pub withdrawal_amount: i128,
    /// Allocation not yet released.
    pub remaining: i128,
}

#[contracttype]
pub enum DataKey {
    Config,
    Schedule,
    TotalAllocated,
    TotalWithdrawn,
    Vesting(Address),
    Whitelisted(Address),
    Lock,
}

pub fn get_ledger_timestamp(env: &Env) -> u64 {
    env.ledger().timestamp()
}
