use cosmwasm_std::{attr, Decimal, DepsMut, Env, MessageInfo, Response, StdResult, Uint128};
use cw_utils::nonpayable;
use strum::IntoEnumIterator;

use presale_base::{
    error::ContractError,
    presale::{
        state::{CONFIG, LEDGER, OWNER, PARTICIPANTS, TRANSFER_ADMIN_STATE, TRANSFER_ADMIN_TIMEOUT},
        types::{SaleAsset, TransferAdminState},
    },
};

use crate::{helpers, querier};

pub fn try_purchase(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    asset: SaleAsset,
    asset_amount: Uint128,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;

    let buyer = info.sender;
    let mut ledger = LEDGER.load(deps.storage)?;
    let config = CONFIG.load(deps.storage)?;
    let asset_token = config.asset_token(asset);

    ledger.ensure_active()?;

    if asset_amount.is_zero() {
        Err(ContractError::ZeroAmount)?;
    }

    let allowance = querier::query_token_allowance(
        deps.as_ref(),
        &env.block,
        asset_token,
        &buyer,
        &env.contract.address,
    )?;

    let contribution =
        helpers::prepare_contribution(&ledger, &config, &buyer, asset, asset_amount, allowance)?;

    let is_new_participant = !PARTICIPANTS.has(deps.storage, &buyer);
    let mut participant = PARTICIPANTS
        .may_load(deps.storage, &buyer)?
        .unwrap_or_default();

    ledger.commit(&contribution, is_new_participant)?;
    participant.record(&contribution)?;

    LEDGER.save(deps.storage, &ledger)?;
    PARTICIPANTS.save(deps.storage, &buyer, &participant)?;

    // a failed transfer or mint reverts the ledger update with the whole transaction
    let transfer_msg = helpers::get_transfer_from_msg(
        asset_token,
        &buyer,
        &env.contract.address,
        asset_amount,
    )?;
    let mint_msg =
        helpers::get_mint_msg(&config.sale_token, &buyer, contribution.tokens_issued)?;

    Ok(Response::new()
        .add_message(transfer_msg)
        .add_message(mint_msg)
        .add_attributes(vec![
            attr("action", "try_purchase"),
            attr("buyer", buyer),
            attr("asset", asset.to_string()),
            attr("asset_amount", asset_amount),
            attr("usd_value", contribution.usd_value.to_string()),
            attr("tokens_issued", contribution.tokens_issued),
            attr("tokens_sold", ledger.tokens_sold),
        ]))
}

pub fn try_start_presale(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;
    OWNER.assert_admin(deps.as_ref(), &info.sender)?;

    let mut ledger = LEDGER.load(deps.storage)?;
    ledger.start()?;
    LEDGER.save(deps.storage, &ledger)?;

    Ok(Response::new().add_attributes(vec![("action", "try_start_presale")]))
}

pub fn try_end_presale(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;
    OWNER.assert_admin(deps.as_ref(), &info.sender)?;

    let mut ledger = LEDGER.load(deps.storage)?;
    ledger.end()?;
    LEDGER.save(deps.storage, &ledger)?;

    Ok(Response::new().add_attributes(vec![
        attr("action", "try_end_presale"),
        attr("tokens_sold", ledger.tokens_sold),
        attr("total_raised", ledger.total_raised()?.to_string()),
    ]))
}

pub fn try_finalize_presale(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    destination: String,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;
    OWNER.assert_admin(deps.as_ref(), &info.sender)?;

    let destination = deps.api.addr_validate(&destination)?;
    let config = CONFIG.load(deps.storage)?;
    let mut ledger = LEDGER.load(deps.storage)?;

    ledger.finalize()?;
    LEDGER.save(deps.storage, &ledger)?;

    let mut response = Response::new().add_attributes(vec![
        attr("action", "try_finalize_presale"),
        attr("destination", destination.as_str()),
    ]);

    for asset in SaleAsset::iter() {
        let amount = ledger.collected(asset);

        if amount.is_zero() {
            continue;
        }

        response = response
            .add_message(helpers::get_transfer_msg(
                config.asset_token(asset),
                &destination,
                amount,
            )?)
            .add_attribute(format!("{}_amount", asset.to_string().to_lowercase()), amount);
    }

    Ok(response)
}

pub fn try_update_oracle_prices(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    wld_usd_price: Decimal,
    weth_usd_price: Decimal,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;
    OWNER.assert_admin(deps.as_ref(), &info.sender)?;

    let mut ledger = LEDGER.load(deps.storage)?;
    ledger.update_anchor_prices(wld_usd_price, weth_usd_price)?;
    LEDGER.save(deps.storage, &ledger)?;

    Ok(Response::new().add_attributes(vec![
        attr("action", "try_update_oracle_prices"),
        attr("wld_usd_price", wld_usd_price.to_string()),
        attr("weth_usd_price", weth_usd_price.to_string()),
    ]))
}

#[allow(clippy::too_many_arguments)]
pub fn try_update_sale_config(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    base_price: Option<Decimal>,
    price_increment: Option<Decimal>,
    max_tokens_for_sale: Option<Uint128>,
    max_raise: Option<Decimal>,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;
    OWNER.assert_admin(deps.as_ref(), &info.sender)?;

    let config = CONFIG.load(deps.storage)?;
    let mut ledger = LEDGER.load(deps.storage)?;
    ledger.update_sale_params(base_price, price_increment, max_tokens_for_sale, max_raise)?;
    helpers::check_curve(&ledger, config.sale_token_decimals)?;
    LEDGER.save(deps.storage, &ledger)?;

    Ok(Response::new().add_attributes(vec![("action", "try_update_sale_config")]))
}

pub fn try_update_admin(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    admin: String,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;
    OWNER.assert_admin(deps.as_ref(), &info.sender)?;

    let block_time = env.block.time.seconds();
    let new_admin = deps.api.addr_validate(&admin)?;

    TRANSFER_ADMIN_STATE.save(
        deps.storage,
        &TransferAdminState {
            new_admin: new_admin.clone(),
            deadline: block_time + TRANSFER_ADMIN_TIMEOUT,
        },
    )?;

    Ok(Response::new().add_attributes(vec![
        attr("action", "try_update_admin"),
        attr("new_admin", new_admin),
    ]))
}

pub fn try_accept_admin_role(
    mut deps: DepsMut,
    env: Env,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;

    let sender = info.sender;
    let block_time = env.block.time.seconds();
    let TransferAdminState {
        new_admin,
        deadline,
    } = TRANSFER_ADMIN_STATE.load(deps.storage)?;

    if sender != new_admin {
        Err(ContractError::Unauthorized)?;
    }

    if block_time >= deadline {
        Err(ContractError::TransferAdminDeadline)?;
    }

    OWNER.set(deps.branch(), Some(sender))?;

    TRANSFER_ADMIN_STATE.update(deps.storage, |mut x| -> StdResult<TransferAdminState> {
        x.deadline = block_time;
        Ok(x)
    })?;

    Ok(Response::new().add_attributes(vec![("action", "try_accept_admin_role")]))
}
