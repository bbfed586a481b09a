use soroban_sdk::{
    testutils::{Address as _, Ledger},
    token, Address, Env,
};
use token_vest::{
    SaleVariant, TokenVestContract, TokenVestContractClient, DEFAULT_VESTING_INTERVAL,
    SECONDS_PER_DAY,
};

// Stellar asset contracts carry 7 decimals
pub const UNIT: i128 = 10_000_000;
pub const RATE: i128 = 2_000;
pub const TWO_UNITS: i128 = 2 * UNIT;
pub const INVENTORY: i128 = 100_000_000 * UNIT;

pub struct SaleTest<'a> {
    pub env: &'a Env,
    pub client: TokenVestContractClient<'a>,
    pub contract_id: Address,
    pub foundation: Address,
    pub token: token::Client<'a>,
    pub payment: token::Client<'a>,
    payment_admin: token::StellarAssetClient<'a>,
}

impl<'a> SaleTest<'a> {
    pub fn participant(&self) -> Address {
        let participant = Address::generate(self.env);
        self.payment_admin.mint(&participant, &(1_000 * UNIT));
        participant
    }

    pub fn advance_days(&self, days: u64) {
        let now = self.env.ledger().timestamp();
        self.env
            .ledger()
            .with_mut(|l| l.timestamp = now + days * SECONDS_PER_DAY);
    }
}

pub fn setup_sale<'a>(env: &'a Env, variant: SaleVariant, rate: i128) -> SaleTest<'a> {
    env.mock_all_auths();
    env.ledger().with_mut(|l| l.timestamp = 1_700_000_000);

    let foundation = Address::generate(env);
    let issuer = Address::generate(env);

    let token_id = env.register_stellar_asset_contract_v2(issuer.clone()).address();
    let payment_id = env.register_stellar_asset_contract_v2(issuer).address();
    let token = token::Client::new(env, &token_id);
    let payment = token::Client::new(env, &payment_id);
    let payment_admin = token::StellarAssetClient::new(env, &payment_id);

    let contract_id = env.register_contract(None, TokenVestContract);
    let client = TokenVestContractClient::new(env, &contract_id);
    client.initialize(
        &foundation,
        &token_id,
        &payment_id,
        &rate,
        &variant,
        &DEFAULT_VESTING_INTERVAL,
    );
    token::StellarAssetClient::new(env, &token_id).mint(&contract_id, &INVENTORY);

    SaleTest {
        env,
        client,
        contract_id,
        foundation,
        token,
        payment,
        payment_admin,
    }
}
