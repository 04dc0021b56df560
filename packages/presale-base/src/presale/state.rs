use cosmwasm_std::Addr;
use cw_controllers::Admin;
use cw_storage_plus::{Item, Map};

use crate::presale::types::{Config, Participant, PresaleLedger, TransferAdminState};

pub const CONTRACT_NAME: &str = "bonding-curve-presale";

/// default curve, USD per whole sale token
pub const BASE_PRICE: &str = "0.001";
pub const PRICE_INCREMENT: &str = "0.000000000002";

/// default caps, whole sale tokens and USD
pub const MAX_TOKENS_FOR_SALE: u128 = 500_000_000;
pub const MAX_RAISE: &str = "750000";

// keeps 10^decimals squared inside Uint512 math
pub const MAX_TOKEN_DECIMALS: u8 = 24;

pub const TRANSFER_ADMIN_TIMEOUT: u64 = 3600;

pub const PAGINATION_MAX_LIMIT: u32 = 100;
pub const PAGINATION_DEFAULT_LIMIT: u32 = 30;

pub const OWNER: Admin = Admin::new("owner");
pub const TRANSFER_ADMIN_STATE: Item<TransferAdminState> = Item::new("transfer admin state");

/// token addresses and decimals
pub const CONFIG: Item<Config> = Item::new("config");

/// curve, caps, anchors, accounting and status
pub const LEDGER: Item<PresaleLedger> = Item::new("ledger");

/// participant by user address
pub const PARTICIPANTS: Map<&Addr, Participant> = Map::new("participants");
