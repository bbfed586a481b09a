use crate::access;
use crate::clock::phase_of;
use crate::errors::{reject, SaleError};
use crate::events;
use crate::storage::*;
use crate::types::*;
use crate::vesting;
use soroban_sdk::{contract, contractimpl, contractmeta, log, token, Address, Env, String, Vec};

// Metadata that is added on to every WASM custom section
contractmeta!(
    key = "Description",
    val = "Token sale with tranche vesting, open and whitelisted variants"
);

#[contract]
pub struct TokenVestContract;

#[contractimpl]
impl TokenVestContract {
    /// Initialize the sale. `rate` is the price of one whole token in the
    /// smallest unit of `payment_asset`.
    pub fn initialize(
        env: Env,
        foundation: Address,
        token: Address,
        payment_asset: Address,
        rate: i128,
        variant: SaleVariant,
        vesting_interval: u64,
    ) -> Result<(), SaleError> {
        init(
            &env,
            foundation,
            token,
            payment_asset,
            rate,
            variant,
            vesting_interval,
        )
        .map_err(|e| reject(&env, e))
    }

    /// Fix the sale window and the withdrawal unlock, all counted in days
    /// from the current ledger time. Callable once.
    pub fn start_sale(
        env: Env,
        caller: Address,
        days_before_start: u64,
        sale_duration_days: u64,
        withdrawal_delay_days: u64,
    ) -> Result<SaleSchedule, SaleError> {
        start(
            &env,
            &caller,
            days_before_start,
            sale_duration_days,
            withdrawal_delay_days,
        )
        .map_err(|e| reject(&env, e))
    }

    /// Add addresses to the private sale whitelist.
    pub fn whitelist_for_sale(
        env: Env,
        caller: Address,
        addresses: Vec<Address>,
    ) -> Result<u32, SaleError> {
        whitelist(&env, &caller, addresses).map_err(|e| reject(&env, e))
    }

    /// Pay `amount` of the payment asset and get the matching token
    /// allocation credited for vesting. Returns the tokens allocated.
    pub fn buy_and_vest(env: Env, participant: Address, amount: i128) -> Result<i128, SaleError> {
        buy(&env, &participant, amount).map_err(|e| reject(&env, e))
    }

    /// Release every tranche unlocked so far. Returns the amount released.
    pub fn withdraw(env: Env, participant: Address) -> Result<i128, SaleError> {
        access::enter(&env).map_err(|e| reject(&env, e))?;
        let released = release(&env, &participant).map_err(|e| reject(&env, e))?;
        access::exit(&env);
        Ok(released)
    }

    /// Send the whole collected payment balance to the foundation.
    pub fn withdraw_payment(env: Env, caller: Address) -> Result<i128, SaleError> {
        access::enter(&env).map_err(|e| reject(&env, e))?;
        let amount = sweep_payment(&env, &caller).map_err(|e| reject(&env, e))?;
        access::exit(&env);
        Ok(amount)
    }

    /// Send tokens that were never allocated to the foundation.
    pub fn withdraw_leftover_tokens(env: Env, caller: Address) -> Result<i128, SaleError> {
        access::enter(&env).map_err(|e| reject(&env, e))?;
        let amount = sweep_leftover(&env, &caller).map_err(|e| reject(&env, e))?;
        access::exit(&env);
        Ok(amount)
    }

    // View functions
    pub fn get_config(env: Env) -> Result<SaleConfig, SaleError> {
        get_config(&env).ok_or(SaleError::NotInitialized)
    }

    pub fn get_schedule(env: Env) -> Result<SaleSchedule, SaleError> {
        get_schedule(&env).ok_or(SaleError::NotConfigured)
    }

    pub fn get_phase(env: Env) -> SalePhase {
        phase_of(get_schedule(&env).as_ref(), get_ledger_timestamp(&env))
    }

    /// Seconds left until the sale window closes.
    pub fn get_remaining_time(env: Env) -> Result<u64, SaleError> {
        let schedule = get_schedule(&env).ok_or(SaleError::NotConfigured)?;
        Ok(schedule.remaining(get_ledger_timestamp(&env)))
    }

    pub fn get_vesting_detail(env: Env, participant: Address) -> Result<VestingDetail, SaleError> {
        let vesting = get_vesting(&env, &participant).unwrap_or_default();
        let withdrawal_amount = match (get_config(&env), get_schedule(&env)) {
            (Some(config), Some(schedule)) => vesting::releasable(
                &vesting,
                schedule.withdrawal_unlock,
                config.vesting_interval,
                get_ledger_timestamp(&env),
            )?,
            _ => 0,
        };

        Ok(VestingDetail {
            total_allocated: vesting.total_allocated,
            total_withdrawn: vesting.total_withdrawn,
            withdrawal_amount,
            remaining: vesting.remaining(),
        })
    }

    pub fn is_whitelisted(env: Env, participant: Address) -> bool {
        is_whitelisted(&env, &participant)
    }

    pub fn get_total_allocated(env: Env) -> i128 {
        get_total_allocated(&env)
    }

    pub fn get_total_withdrawn(env: Env) -> i128 {
        get_total_withdrawn(&env)
    }

    /// Tokens held by the contract that no participant is owed.
    pub fn get_unsold_tokens(env: Env) -> Result<i128, SaleError> {
        let config = get_config(&env).ok_or(SaleError::NotInitialized)?;
        Ok(unsold_tokens(&env, &config))
    }

    /// Failure text for a `SaleError` code.
    pub fn error_message(env: Env, code: u32) -> Option<String> {
        SaleError::from_code(code).map(|e| String::from_str(&env, e.message()))
    }
}

fn init(
    env: &Env,
    foundation: Address,
    token: Address,
    payment_asset: Address,
    rate: i128,
    variant: SaleVariant,
    vesting_interval: u64,
) -> Result<(), SaleError> {
    if has_config(env) {
        return Err(SaleError::AlreadyInitialized);
    }

    foundation.require_auth();

    let bound = match variant {
        SaleVariant::Open(cap) => cap,
        SaleVariant::Private(minimum) => minimum,
    };
    if rate <= 0 || bound <= 0 || vesting_interval == 0 || token == payment_asset {
        return Err(SaleError::InvalidConfig);
    }

    let decimals = token::Client::new(env, &token).decimals();
    let token_unit = 10i128
        .checked_pow(decimals)
        .ok_or(SaleError::InvalidConfig)?;

    let config = SaleConfig {
        token,
        payment_asset,
        rate,
        token_unit,
        foundation,
        variant,
        vesting_interval,
    };
    set_config(env, &config);
    set_total_allocated(env, 0);
    set_total_withdrawn(env, 0);

    log!(env, "sale initialized, rate {} token unit {}", rate, token_unit);
    Ok(())
}

fn start(
    env: &Env,
    caller: &Address,
    days_before_start: u64,
    sale_duration_days: u64,
    withdrawal_delay_days: u64,
) -> Result<SaleSchedule, SaleError> {
    let config = get_config(env).ok_or(SaleError::NotInitialized)?;
    access::require_foundation(&config, caller)?;

    if get_schedule(env).is_some() {
        return Err(SaleError::AlreadyStarted);
    }

    let schedule = SaleSchedule::from_offsets(
        get_ledger_timestamp(env),
        days_before_start,
        sale_duration_days,
        withdrawal_delay_days,
    )?;
    set_schedule(env, &schedule);

    events::emit_sale_started(
        env,
        schedule.sale_start,
        schedule.sale_end,
        schedule.withdrawal_unlock,
    );
    Ok(schedule)
}

fn whitelist(env: &Env, caller: &Address, addresses: Vec<Address>) -> Result<u32, SaleError> {
    let config = get_config(env).ok_or(SaleError::NotInitialized)?;
    access::require_foundation(&config, caller)?;

    let mut added = 0u32;
    for participant in addresses.iter() {
        if is_whitelisted(env, &participant) {
            continue;
        }
        set_whitelisted(env, &participant);
        events::emit_whitelisted(env, participant);
        added += 1;
    }
    Ok(added)
}

fn buy(env: &Env, participant: &Address, amount: i128) -> Result<i128, SaleError> {
    participant.require_auth();

    let config = get_config(env).ok_or(SaleError::NotInitialized)?;

    let now = get_ledger_timestamp(env);
    if phase_of(get_schedule(env).as_ref(), now) != SalePhase::Open {
        return Err(SaleError::SaleNotOpen);
    }

    if config.variant.requires_whitelist() && !is_whitelisted(env, participant) {
        return Err(SaleError::NotWhitelisted);
    }

    match config.variant {
        SaleVariant::Open(cap) if amount >= cap => return Err(SaleError::DepositAboveCap),
        SaleVariant::Private(minimum) if amount < minimum => {
            return Err(SaleError::DepositBelowMinimum)
        }
        _ => {}
    }
    if amount <= 0 {
        return Err(SaleError::InvalidAmount);
    }

    let tokens = amount
        .checked_mul(config.token_unit)
        .ok_or(SaleError::Overflow)?
        / config.rate;
    if tokens == 0 {
        return Err(SaleError::ZeroAllocation);
    }
    if tokens > unsold_tokens(env, &config) {
        return Err(SaleError::InsufficientInventory);
    }

    // Effects
    let mut vesting = get_vesting(env, participant).unwrap_or_default();
    vesting.total_allocated = vesting
        .total_allocated
        .checked_add(tokens)
        .ok_or(SaleError::Overflow)?;
    set_vesting(env, participant, &vesting);
    let total_allocated = get_total_allocated(env)
        .checked_add(tokens)
        .ok_or(SaleError::Overflow)?;
    set_total_allocated(env, total_allocated);

    // Interactions
    token::Client::new(env, &config.payment_asset).transfer(
        participant,
        &env.current_contract_address(),
        &amount,
    );

    events::emit_purchased(env, participant.clone(), amount, tokens);
    Ok(tokens)
}

fn release(env: &Env, participant: &Address) -> Result<i128, SaleError> {
    participant.require_auth();

    let config = get_config(env).ok_or(SaleError::NotInitialized)?;
    let schedule = get_schedule(env).ok_or(SaleError::WithdrawalNotOpen)?;
    let now = get_ledger_timestamp(env);
    if schedule.phase(now) != SalePhase::WithdrawalOpen {
        return Err(SaleError::WithdrawalNotOpen);
    }

    let mut vesting = get_vesting(env, participant).unwrap_or_default();
    let amount = vesting::releasable(
        &vesting,
        schedule.withdrawal_unlock,
        config.vesting_interval,
        now,
    )?;
    if amount <= 0 {
        return Err(SaleError::NothingToWithdraw);
    }

    // Effects: the ledger is updated before any token leaves the contract
    vesting.total_withdrawn += amount;
    set_vesting(env, participant, &vesting);
    set_total_withdrawn(env, get_total_withdrawn(env) + amount);

    // Interactions
    token::Client::new(env, &config.token).transfer(
        &env.current_contract_address(),
        participant,
        &amount,
    );

    events::emit_withdrawn(env, participant.clone(), amount, vesting.total_withdrawn);
    Ok(amount)
}

fn sweep_payment(env: &Env, caller: &Address) -> Result<i128, SaleError> {
    let config = get_config(env).ok_or(SaleError::NotInitialized)?;
    access::require_foundation(&config, caller)?;

    let payment = token::Client::new(env, &config.payment_asset);
    let contract = env.current_contract_address();
    let amount = payment.balance(&contract);
    if amount > 0 {
        payment.transfer(&contract, &config.foundation, &amount);
    }

    events::emit_payment_withdrawn(env, config.foundation, amount);
    Ok(amount)
}

fn sweep_leftover(env: &Env, caller: &Address) -> Result<i128, SaleError> {
    let config = get_config(env).ok_or(SaleError::NotInitialized)?;
    access::require_foundation(&config, caller)?;

    let now = get_ledger_timestamp(env);
    if phase_of(get_schedule(env).as_ref(), now) < SalePhase::Closed {
        return Err(SaleError::SaleNotClosed);
    }

    let amount = unsold_tokens(env, &config);
    if amount > 0 {
        token::Client::new(env, &config.token).transfer(
            &env.current_contract_address(),
            &config.foundation,
            &amount,
        );
    }

    events::emit_leftover_withdrawn(env, config.foundation, amount);
    Ok(amount)
}

/// Held token balance minus everything still owed to participants.
fn unsold_tokens(env: &Env, config: &SaleConfig) -> i128 {
    let held = token::Client::new(env, &config.token).balance(&env.current_contract_address());
    let outstanding = get_total_allocated(env) - get_total_withdrawn(env);
    (held - outstanding).max(0)
}
