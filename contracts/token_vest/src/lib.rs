#![no_std]

mod access;
mod clock;
mod contract;
mod errors;
mod events;
mod storage;
mod types;
mod vesting;


pub use clock::SECONDS_PER_DAY;
pub use contract::{TokenVestContract, TokenVestContractClient};
pub use errors::{ErrorCategory, SaleError};
pub use events::{
    LeftoverWithdrawnEvent, PaymentWithdrawnEvent, PurchasedEvent, SaleStartedEvent,
    WhitelistedEvent, WithdrawnEvent, EVENT_TOPIC,
};
pub use types::*;
pub use vesting::{releasable, vested_amount, VESTING_TRANCHES};
