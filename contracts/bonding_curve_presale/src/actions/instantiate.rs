use std::str::FromStr;

use cosmwasm_std::{attr, Decimal, DepsMut, Env, MessageInfo, Response, Uint128};
use cw2::set_contract_version;
use cw_utils::nonpayable;

use presale_base::{
    error::ContractError,
    presale::{
        msg::InstantiateMsg,
        state::{
            BASE_PRICE, CONFIG, CONTRACT_NAME, LEDGER, MAX_RAISE, MAX_TOKENS_FOR_SALE,
            MAX_TOKEN_DECIMALS, OWNER, PRICE_INCREMENT, TRANSFER_ADMIN_STATE,
        },
        types::{Config, PresaleLedger, TransferAdminState},
    },
};

use crate::{helpers::check_curve, querier::query_token_decimals};

const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn try_instantiate(
    mut deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let block_time = env.block.time.seconds();
    let admin = match msg.admin {
        Some(x) => deps.api.addr_validate(&x)?,
        None => info.sender,
    };

    let sale_token = deps.api.addr_validate(&msg.sale_token)?;
    let wld_token = deps.api.addr_validate(&msg.wld_token)?;
    let weth_token = deps.api.addr_validate(&msg.weth_token)?;

    let config = Config {
        sale_token_decimals: query_token_decimals(deps.as_ref(), &sale_token)?,
        wld_decimals: query_token_decimals(deps.as_ref(), &wld_token)?,
        weth_decimals: query_token_decimals(deps.as_ref(), &weth_token)?,
        sale_token,
        wld_token,
        weth_token,
    };

    if [
        config.sale_token_decimals,
        config.wld_decimals,
        config.weth_decimals,
    ]
    .iter()
    .any(|x| *x > MAX_TOKEN_DECIMALS)
    {
        Err(ContractError::InvalidTokenDecimals)?;
    }

    let max_tokens_for_sale = match msg.max_tokens_for_sale {
        Some(x) => x,
        None => Uint128::new(MAX_TOKENS_FOR_SALE)
            .checked_mul(Uint128::new(10).checked_pow(config.sale_token_decimals as u32)?)?,
    };

    let ledger = PresaleLedger::new(
        msg.base_price
            .unwrap_or(Decimal::from_str(BASE_PRICE)?),
        msg.price_increment
            .unwrap_or(Decimal::from_str(PRICE_INCREMENT)?),
        max_tokens_for_sale,
        msg.max_raise.unwrap_or(Decimal::from_str(MAX_RAISE)?),
        msg.wld_usd_price.unwrap_or_default(),
        msg.weth_usd_price.unwrap_or_default(),
    )?;
    check_curve(&ledger, config.sale_token_decimals)?;

    OWNER.set(deps.branch(), Some(admin.clone()))?;

    TRANSFER_ADMIN_STATE.save(
        deps.storage,
        &TransferAdminState {
            new_admin: admin.clone(),
            deadline: block_time,
        },
    )?;

    CONFIG.save(deps.storage, &config)?;
    LEDGER.save(deps.storage, &ledger)?;

    Ok(Response::new().add_attributes(vec![
        attr("action", "try_instantiate"),
        attr("admin", admin),
        attr("sale_token", config.sale_token),
        attr("max_tokens_for_sale", ledger.max_tokens_for_sale),
        attr("max_raise", ledger.max_raise.to_string()),
    ]))
}
