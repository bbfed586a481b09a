use soroban_sdk::{contracttype, symbol_short, Address, Env, Symbol};

/// First topic of every event the contract publishes.
pub const EVENT_TOPIC: Symbol = symbol_short!("tokenvest");

// ==================== Event Payloads ====================

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct SaleStartedEvent {
    pub sale_start: u64,
    pub sale_end: u64,
    pub withdrawal_unlock: u64,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct PurchasedEvent {
    pub participant: Address,
    pub paid: i128,
    pub tokens: i128,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct WithdrawnEvent {
    pub participant: Address,
    pub amount: i128,
    pub total_withdrawn: i128,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct WhitelistedEvent {
    pub participant: Address,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct PaymentWithdrawnEvent {
    pub to: Address,
    pub amount: i128,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct LeftoverWithdrawnEvent {
    pub to: Address,
    pub amount: i128,
}

// ==================== Event Publishing Functions ====================

pub fn emit_sale_started(env: &Env, sale_start: u64, sale_end: u64, withdrawal_unlock: u64) {
    let event = SaleStartedEvent {
        sale_start,
        sale_end,
        withdrawal_unlock,
    };
    env.events()
        .publish((EVENT_TOPIC, symbol_short!("started")), event);
}

pub fn emit_purchased(env: &Env, participant: Address, paid: i128, tokens: i128) {
    let event = PurchasedEvent {
        participant,
        paid,
        tokens,
    };
    env.events()
        .publish((EVENT_TOPIC, symbol_short!("purchase")), event);
}

pub fn emit_withdrawn(env: &Env, participant: Address, amount: i128, total_withdrawn: i128) {
    let event = WithdrawnEvent {
        participant,
        amount,
        total_withdrawn,
    };
    env.events()
        .publish((EVENT_TOPIC, symbol_short!("withdrawn")), event);
}

pub fn emit_whitelisted(env: &Env, participant: Address) {
    env.events().publish(
        (EVENT_TOPIC, symbol_short!("whitelist")),
        WhitelistedEvent { participant },
    );
}

pub fn emit_payment_withdrawn(env: &Env, to: Address, amount: i128) {
    env.events().publish(
        (EVENT_TOPIC, symbol_short!("pay_out")),
        PaymentWithdrawnEvent { to, amount },
    );
}

pub fn emit_leftover_withdrawn(env: &Env, to: Address, amount: i128) {
    env.events().publish(
        (EVENT_TOPIC, symbol_short!("leftover")),
        LeftoverWithdrawnEvent { to, amount },
    );
}
