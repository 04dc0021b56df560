use cosmwasm_std::{Decimal, Isqrt, Uint128, Uint256, Uint512};

use presale_base::{error::ContractError, presale::types::PresaleLedger};

/// Linear price curve `price(s) = base_price + price_increment * s` where `s` is
/// counted in whole sale tokens. Inputs and outputs are sale token atoms,
/// prices are USD per whole token.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceCurve {
    pub base_price: Decimal,
    pub price_increment: Decimal,
    pub max_tokens_for_sale: Uint128,
    pub decimals: u8,
}

impl PriceCurve {
    pub fn new(
        base_price: Decimal,
        price_increment: Decimal,
        max_tokens_for_sale: Uint128,
        decimals: u8,
    ) -> Self {
        Self {
            base_price,
            price_increment,
            max_tokens_for_sale,
            decimals,
        }
    }

    pub fn from_ledger(ledger: &PresaleLedger, decimals: u8) -> Self {
        Self::new(
            ledger.base_price,
            ledger.price_increment,
            ledger.max_tokens_for_sale,
            decimals,
        )
    }

    fn scale(&self) -> Result<Uint512, ContractError> {
        Ok(Uint512::from(10u128).checked_pow(self.decimals as u32)?)
    }

    /// price atoms multiplied by the token scale, exact
    fn scaled_price(&self, tokens_sold: Uint128) -> Result<Uint512, ContractError> {
        let base = Uint512::from(self.base_price.atomics()).checked_mul(self.scale()?)?;
        let increment =
            Uint512::from(self.price_increment.atomics()).checked_mul(tokens_sold.into())?;

        Ok(base.checked_add(increment)?)
    }

    pub fn current_price(&self, tokens_sold: Uint128) -> Result<Decimal, ContractError> {
        let price = self.scaled_price(tokens_sold)?.checked_div(self.scale()?)?;

        to_decimal(price)
    }

    pub fn final_price(&self) -> Result<Decimal, ContractError> {
        self.current_price(self.max_tokens_for_sale)
    }

    /// Tokens bought for usd_value starting at tokens_sold, rounded down.
    /// Capacity is not checked here.
    pub fn tokens_for_usd(
        &self,
        tokens_sold: Uint128,
        usd_value: Decimal,
    ) -> Result<Uint128, ContractError> {
        if self.base_price.is_zero() && self.price_increment.is_zero() {
            Err(ContractError::DegenerateCurve)?;
        }

        let scale = self.scale()?;
        let price = self.scaled_price(tokens_sold)?;
        let usd = Uint512::from(usd_value.atomics());

        // flat segment: delta = usd * scale^2 / price
        if self.price_increment.is_zero() {
            let delta = usd
                .checked_mul(scale)?
                .checked_mul(scale)?
                .checked_div(price)?;

            return Ok(Uint128::try_from(delta)?);
        }

        // increment * delta^2 + 2 * price * delta - 2 * usd * scale^2 = 0
        let increment = Uint512::from(self.price_increment.atomics());
        let discriminant = price.checked_mul(price)?.checked_add(
            Uint512::from(2u128)
                .checked_mul(increment)?
                .checked_mul(usd)?
                .checked_mul(scale)?
                .checked_mul(scale)?,
        )?;
        let delta = discriminant
            .isqrt()
            .checked_sub(price)?
            .checked_div(increment)?;

        Ok(Uint128::try_from(delta)?)
    }

    /// USD cost of token_amount starting at tokens_sold, rounded down
    pub fn usd_for_tokens(
        &self,
        tokens_sold: Uint128,
        token_amount: Uint128,
    ) -> Result<Decimal, ContractError> {
        let scale = self.scale()?;
        let price = self.scaled_price(tokens_sold)?;
        let delta = Uint512::from(token_amount);
        let increment = Uint512::from(self.price_increment.atomics());

        let numerator = Uint512::from(2u128)
            .checked_mul(price)?
            .checked_mul(delta)?
            .checked_add(increment.checked_mul(delta)?.checked_mul(delta)?)?;
        let denominator = Uint512::from(2u128)
            .checked_mul(scale)?
            .checked_mul(scale)?;

        to_decimal(numerator.checked_div(denominator)?)
    }
}

/// USD value of asset atoms at an anchor price per whole asset token, rounded down
pub fn usd_value(
    asset_amount: Uint128,
    anchor_price: Decimal,
    asset_decimals: u8,
) -> Result<Decimal, ContractError> {
    let scale = Uint256::from(10u128).checked_pow(asset_decimals as u32)?;
    let value = Uint256::from(asset_amount)
        .checked_mul(anchor_price.atomics().into())?
        .checked_div(scale)?;

    Ok(Decimal::new(Uint128::try_from(value)?))
}

fn to_decimal(atomics: Uint512) -> Result<Decimal, ContractError> {
    Ok(Decimal::new(Uint128::try_from(atomics)?))
}
