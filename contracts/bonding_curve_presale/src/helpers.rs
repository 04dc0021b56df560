use cosmwasm_std::{to_json_binary, Addr, CosmosMsg, StdResult, Uint128, WasmMsg};
use cw20::Cw20ExecuteMsg;

use presale_base::{
    error::ContractError,
    presale::types::{Config, Contribution, PresaleLedger, SaleAsset},
};

use crate::math::{self, PriceCurve};

/// Validates a purchase against the current ledger and prices it on the curve.
/// Nothing is written, the caller commits the returned contribution.
pub fn prepare_contribution(
    ledger: &PresaleLedger,
    config: &Config,
    buyer: &Addr,
    asset: SaleAsset,
    asset_amount: Uint128,
    allowance: Uint128,
) -> Result<Contribution, ContractError> {
    ledger.ensure_active()?;

    if asset_amount.is_zero() {
        Err(ContractError::ZeroAmount)?;
    }

    if allowance < asset_amount {
        Err(ContractError::InsufficientAllowance {
            allowance,
            required: asset_amount,
        })?;
    }

    let anchor_price = ledger.anchor_price(asset)?;
    let usd_value = math::usd_value(asset_amount, anchor_price, config.asset_decimals(asset))?;

    if usd_value.is_zero() {
        Err(ContractError::ContributionTooSmall)?;
    }

    // raise cap is checked before pricing so an oversized buy never reaches the curve
    ledger.check_raise_capacity(usd_value)?;

    let tokens_issued = PriceCurve::from_ledger(ledger, config.sale_token_decimals)
        .tokens_for_usd(ledger.tokens_sold, usd_value)?;

    if tokens_issued.is_zero() {
        Err(ContractError::ContributionTooSmall)?;
    }

    ledger.check_token_capacity(tokens_issued)?;

    Ok(Contribution {
        buyer: buyer.to_owned(),
        asset,
        asset_amount,
        usd_value,
        tokens_issued,
    })
}

/// Curve parameters must keep the final price representable
pub fn check_curve(ledger: &PresaleLedger, decimals: u8) -> Result<(), ContractError> {
    PriceCurve::from_ledger(ledger, decimals)
        .final_price()
        .map_err(|_| ContractError::InvalidCurveParameters)?;

    Ok(())
}

pub fn get_transfer_from_msg(
    token: &Addr,
    owner: &Addr,
    recipient: &Addr,
    amount: Uint128,
) -> StdResult<CosmosMsg> {
    Ok(CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: token.to_string(),
        msg: to_json_binary(&Cw20ExecuteMsg::TransferFrom {
            owner: owner.to_string(),
            recipient: recipient.to_string(),
            amount,
        })?,
        funds: vec![],
    }))
}

pub fn get_transfer_msg(token: &Addr, recipient: &Addr, amount: Uint128) -> StdResult<CosmosMsg> {
    Ok(CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: token.to_string(),
        msg: to_json_binary(&Cw20ExecuteMsg::Transfer {
            recipient: recipient.to_string(),
            amount,
        })?,
        funds: vec![],
    }))
}

pub fn get_mint_msg(token: &Addr, recipient: &Addr, amount: Uint128) -> StdResult<CosmosMsg> {
    Ok(CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: token.to_string(),
        msg: to_json_binary(&Cw20ExecuteMsg::Mint {
            recipient: recipient.to_string(),
            amount,
        })?,
        funds: vec![],
    }))
}
