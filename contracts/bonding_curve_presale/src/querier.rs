use cosmwasm_std::{Addr, BlockInfo, Deps, StdResult, Uint128};
use cw20::{AllowanceResponse, Cw20QueryMsg, TokenInfoResponse};

/// expired allowance counts as zero
pub fn query_token_allowance(
    deps: Deps,
    block: &BlockInfo,
    token: &Addr,
    owner: &Addr,
    spender: &Addr,
) -> StdResult<Uint128> {
    let AllowanceResponse { allowance, expires } = deps.querier.query_wasm_smart(
        token,
        &Cw20QueryMsg::Allowance {
            owner: owner.to_string(),
            spender: spender.to_string(),
        },
    )?;

    if expires.is_expired(block) {
        return Ok(Uint128::zero());
    }

    Ok(allowance)
}

pub fn query_token_decimals(deps: Deps, token: &Addr) -> StdResult<u8> {
    let TokenInfoResponse { decimals, .. } = deps
        .querier
        .query_wasm_smart(token, &Cw20QueryMsg::TokenInfo {})?;

    Ok(decimals)
}
