use cosmwasm_std::{Decimal, Deps, Env, Order, StdResult, Uint128};
use cw_controllers::AdminResponse;
use cw_storage_plus::Bound;

use presale_base::{
    presale::{
        msg::{QueryEstimateResponse, QueryParticipantsResponseItem},
        state::{CONFIG, LEDGER, OWNER, PAGINATION_DEFAULT_LIMIT, PAGINATION_MAX_LIMIT, PARTICIPANTS},
        types::{Config, Participant, PresaleLedger, PresaleStatus, SaleAsset},
    },
};

use crate::math::{self, PriceCurve};

fn load_curve(deps: Deps) -> StdResult<(PresaleLedger, PriceCurve)> {
    let ledger = LEDGER.load(deps.storage)?;
    let Config {
        sale_token_decimals,
        ..
    } = CONFIG.load(deps.storage)?;
    let curve = PriceCurve::from_ledger(&ledger, sale_token_decimals);

    Ok((ledger, curve))
}

pub fn query_current_price(deps: Deps, _env: Env) -> StdResult<Decimal> {
    let (ledger, curve) = load_curve(deps)?;

    Ok(curve.current_price(ledger.tokens_sold)?)
}

pub fn query_final_price(deps: Deps, _env: Env) -> StdResult<Decimal> {
    let (_, curve) = load_curve(deps)?;

    Ok(curve.final_price()?)
}

pub fn query_price_at(deps: Deps, _env: Env, tokens_sold: Uint128) -> StdResult<Decimal> {
    let (_, curve) = load_curve(deps)?;

    Ok(curve.current_price(tokens_sold)?)
}

pub fn query_base_price(deps: Deps, _env: Env) -> StdResult<Decimal> {
    Ok(LEDGER.load(deps.storage)?.base_price)
}

pub fn query_price_increment(deps: Deps, _env: Env) -> StdResult<Decimal> {
    Ok(LEDGER.load(deps.storage)?.price_increment)
}

pub fn query_max_tokens_for_sale(deps: Deps, _env: Env) -> StdResult<Uint128> {
    Ok(LEDGER.load(deps.storage)?.max_tokens_for_sale)
}

pub fn query_tokens_sold(deps: Deps, _env: Env) -> StdResult<Uint128> {
    Ok(LEDGER.load(deps.storage)?.tokens_sold)
}

pub fn query_max_raise(deps: Deps, _env: Env) -> StdResult<Decimal> {
    Ok(LEDGER.load(deps.storage)?.max_raise)
}

pub fn query_asset_raised(deps: Deps, _env: Env, asset: SaleAsset) -> StdResult<Decimal> {
    Ok(LEDGER.load(deps.storage)?.raised(asset))
}

pub fn query_total_raised(deps: Deps, _env: Env) -> StdResult<Decimal> {
    Ok(LEDGER.load(deps.storage)?.total_raised()?)
}

pub fn query_status(deps: Deps, _env: Env) -> StdResult<PresaleStatus> {
    Ok(LEDGER.load(deps.storage)?.status)
}

pub fn query_wld_usd_price(deps: Deps, _env: Env) -> StdResult<Decimal> {
    Ok(LEDGER.load(deps.storage)?.wld_usd_price)
}

pub fn query_weth_usd_price(deps: Deps, _env: Env) -> StdResult<Decimal> {
    Ok(LEDGER.load(deps.storage)?.weth_usd_price)
}

pub fn query_tokens_for_usd(deps: Deps, _env: Env, usd_value: Decimal) -> StdResult<Uint128> {
    let (ledger, curve) = load_curve(deps)?;

    Ok(curve.tokens_for_usd(ledger.tokens_sold, usd_value)?)
}

pub fn query_usd_for_tokens(deps: Deps, _env: Env, token_amount: Uint128) -> StdResult<Decimal> {
    let (ledger, curve) = load_curve(deps)?;

    Ok(curve.usd_for_tokens(ledger.tokens_sold, token_amount)?)
}

/// quote without allowance, status or capacity checks
pub fn query_estimate(
    deps: Deps,
    _env: Env,
    asset: SaleAsset,
    asset_amount: Uint128,
) -> StdResult<QueryEstimateResponse> {
    let (ledger, curve) = load_curve(deps)?;
    let config = CONFIG.load(deps.storage)?;

    let usd_value = math::usd_value(
        asset_amount,
        ledger.anchor_price(asset)?,
        config.asset_decimals(asset),
    )?;
    let token_amount = curve.tokens_for_usd(ledger.tokens_sold, usd_value)?;
    let price_after = curve.current_price(ledger.tokens_sold.checked_add(token_amount)?)?;

    Ok(QueryEstimateResponse {
        usd_value,
        token_amount,
        price_after,
    })
}

pub fn query_ledger(deps: Deps, _env: Env) -> StdResult<PresaleLedger> {
    LEDGER.load(deps.storage)
}

pub fn query_config(deps: Deps, _env: Env) -> StdResult<Config> {
    CONFIG.load(deps.storage)
}

pub fn query_admin(deps: Deps, _env: Env) -> StdResult<AdminResponse> {
    OWNER.query_admin(deps)
}

pub fn query_participant(deps: Deps, _env: Env, user: String) -> StdResult<Participant> {
    Ok(PARTICIPANTS
        .may_load(deps.storage, &deps.api.addr_validate(&user)?)?
        .unwrap_or_default())
}

pub fn query_participant_list(
    deps: Deps,
    _env: Env,
    start_after: Option<String>,
    limit: Option<u32>,
) -> StdResult<Vec<QueryParticipantsResponseItem>> {
    let limit = limit
        .unwrap_or(PAGINATION_DEFAULT_LIMIT)
        .min(PAGINATION_MAX_LIMIT) as usize;
    let address = start_after
        .map(|x| deps.api.addr_validate(&x))
        .transpose()?;
    let start = address.as_ref().map(Bound::exclusive);

    PARTICIPANTS
        .range(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .map(|x| {
            let (address, participant) = x?;

            Ok(QueryParticipantsResponseItem {
                address,
                participant,
            })
        })
        .collect()
}
