use cosmwasm_schema::{cw_serde, QueryResponses};

use cosmwasm_std::{Addr, Decimal, Uint128};

use crate::presale::types::{Participant, SaleAsset};

#[cw_serde]
pub struct MigrateMsg {
    pub version: String,
}

#[cw_serde]
pub struct InstantiateMsg {
    pub admin: Option<String>,

    pub sale_token: String,
    pub wld_token: String,
    pub weth_token: String,

    pub base_price: Option<Decimal>,
    pub price_increment: Option<Decimal>,
    /// sale token atoms, the default is scaled by the sale token decimals
    pub max_tokens_for_sale: Option<Uint128>,
    pub max_raise: Option<Decimal>,

    pub wld_usd_price: Option<Decimal>,
    pub weth_usd_price: Option<Decimal>,
}

#[cw_serde]
pub enum ExecuteMsg {
    // user
    Purchase {
        asset: SaleAsset,
        asset_amount: Uint128,
    },

    // admin
    StartPresale {},

    EndPresale {},

    FinalizePresale {
        destination: String,
    },

    UpdateOraclePrices {
        wld_usd_price: Decimal,
        weth_usd_price: Decimal,
    },

    /// amounts are in sale token atoms
    UpdateSaleConfig {
        base_price: Option<Decimal>,
        price_increment: Option<Decimal>,
        max_tokens_for_sale: Option<Uint128>,
        max_raise: Option<Decimal>,
    },

    UpdateAdmin {
        admin: String,
    },

    AcceptAdminRole {},
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(Decimal)]
    QueryCurrentPrice {},

    #[returns(Decimal)]
    QueryFinalPrice {},

    #[returns(Decimal)]
    QueryBasePrice {},

    #[returns(Decimal)]
    QueryPriceIncrement {},

    #[returns(Uint128)]
    QueryMaxTokensForSale {},

    #[returns(Uint128)]
    QueryTokensSold {},

    #[returns(Decimal)]
    QueryMaxRaise {},

    #[returns(Decimal)]
    QueryAssetRaised { asset: SaleAsset },

    #[returns(Decimal)]
    QueryTotalRaised {},

    #[returns(crate::presale::types::PresaleStatus)]
    QueryStatus {},

    #[returns(Decimal)]
    QueryWldUsdPrice {},

    #[returns(Decimal)]
    QueryWethUsdPrice {},

    /// tokens a contribution of usd_value would receive now
    #[returns(Uint128)]
    QueryTokensForUsd { usd_value: Decimal },

    #[returns(Decimal)]
    QueryPriceAt { tokens_sold: Uint128 },

    /// USD cost of token_amount starting from current tokens sold
    #[returns(Decimal)]
    QueryUsdForTokens { token_amount: Uint128 },

    #[returns(QueryEstimateResponse)]
    QueryEstimate {
        asset: SaleAsset,
        asset_amount: Uint128,
    },

    #[returns(crate::presale::types::PresaleLedger)]
    QueryLedger {},

    #[returns(crate::presale::types::Config)]
    QueryConfig {},

    #[returns(cw_controllers::AdminResponse)]
    QueryAdmin {},

    #[returns(crate::presale::types::Participant)]
    QueryParticipant { user: String },

    #[returns(Vec<QueryParticipantsResponseItem>)]
    QueryParticipantList {
        start_after: Option<String>,
        limit: Option<u32>,
    },
}

#[cw_serde]
pub struct QueryEstimateResponse {
    pub usd_value: Decimal,
    pub token_amount: Uint128,
    pub price_after: Decimal,
}

#[cw_serde]
pub struct QueryParticipantsResponseItem {
    pub address: Addr,
    pub participant: Participant,
}
