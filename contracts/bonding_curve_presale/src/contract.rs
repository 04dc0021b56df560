#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult};

use presale_base::{
    error::ContractError,
    presale::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg},
};

use crate::actions::{
    execute as e, instantiate::try_instantiate, migrate::migrate_contract, query as q,
};

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    try_instantiate(deps, env, info, msg)
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::Purchase {
            asset,
            asset_amount,
        } => e::try_purchase(deps, env, info, asset, asset_amount),

        ExecuteMsg::StartPresale {} => e::try_start_presale(deps, env, info),

        ExecuteMsg::EndPresale {} => e::try_end_presale(deps, env, info),

        ExecuteMsg::FinalizePresale { destination } => {
            e::try_finalize_presale(deps, env, info, destination)
        }

        ExecuteMsg::UpdateOraclePrices {
            wld_usd_price,
            weth_usd_price,
        } => e::try_update_oracle_prices(deps, env, info, wld_usd_price, weth_usd_price),

        ExecuteMsg::UpdateSaleConfig {
            base_price,
            price_increment,
            max_tokens_for_sale,
            max_raise,
        } => e::try_update_sale_config(
            deps,
            env,
            info,
            base_price,
            price_increment,
            max_tokens_for_sale,
            max_raise,
        ),

        ExecuteMsg::UpdateAdmin { admin } => e::try_update_admin(deps, env, info, admin),

        ExecuteMsg::AcceptAdminRole {} => e::try_accept_admin_role(deps, env, info),
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::QueryCurrentPrice {} => to_json_binary(&q::query_current_price(deps, env)?),

        QueryMsg::QueryFinalPrice {} => to_json_binary(&q::query_final_price(deps, env)?),

        QueryMsg::QueryBasePrice {} => to_json_binary(&q::query_base_price(deps, env)?),

        QueryMsg::QueryPriceIncrement {} => to_json_binary(&q::query_price_increment(deps, env)?),

        QueryMsg::QueryMaxTokensForSale {} => {
            to_json_binary(&q::query_max_tokens_for_sale(deps, env)?)
        }

        QueryMsg::QueryTokensSold {} => to_json_binary(&q::query_tokens_sold(deps, env)?),

        QueryMsg::QueryMaxRaise {} => to_json_binary(&q::query_max_raise(deps, env)?),

        QueryMsg::QueryAssetRaised { asset } => {
            to_json_binary(&q::query_asset_raised(deps, env, asset)?)
        }

        QueryMsg::QueryTotalRaised {} => to_json_binary(&q::query_total_raised(deps, env)?),

        QueryMsg::QueryStatus {} => to_json_binary(&q::query_status(deps, env)?),

        QueryMsg::QueryWldUsdPrice {} => to_json_binary(&q::query_wld_usd_price(deps, env)?),

        QueryMsg::QueryWethUsdPrice {} => to_json_binary(&q::query_weth_usd_price(deps, env)?),

        QueryMsg::QueryTokensForUsd { usd_value } => {
            to_json_binary(&q::query_tokens_for_usd(deps, env, usd_value)?)
        }

        QueryMsg::QueryPriceAt { tokens_sold } => {
            to_json_binary(&q::query_price_at(deps, env, tokens_sold)?)
        }

        QueryMsg::QueryUsdForTokens { token_amount } => {
            to_json_binary(&q::query_usd_for_tokens(deps, env, token_amount)?)
        }

        QueryMsg::QueryEstimate {
            asset,
            asset_amount,
        } => to_json_binary(&q::query_estimate(deps, env, asset, asset_amount)?),

        QueryMsg::QueryLedger {} => to_json_binary(&q::query_ledger(deps, env)?),

        QueryMsg::QueryConfig {} => to_json_binary(&q::query_config(deps, env)?),

        QueryMsg::QueryAdmin {} => to_json_binary(&q::query_admin(deps, env)?),

        QueryMsg::QueryParticipant { user } => {
            to_json_binary(&q::query_participant(deps, env, user)?)
        }

        QueryMsg::QueryParticipantList { start_after, limit } => {
            to_json_binary(&q::query_participant_list(deps, env, start_after, limit)?)
        }
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, env: Env, msg: MigrateMsg) -> Result<Response, ContractError> {
    migrate_contract(deps, env, msg)
}
