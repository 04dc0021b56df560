use cosmwasm_schema::cw_serde;

use cosmwasm_std::{Addr, Decimal, Uint128};
use strum_macros::{Display, EnumIter};

use crate::error::ContractError;

/// Payment assets accepted by the sale
#[derive(Copy, Display, EnumIter)]
#[strum(serialize_all = "UPPERCASE")]
#[cw_serde]
pub enum SaleAsset {
    Wld,
    Weth,
}

#[derive(Copy, Default)]
#[cw_serde]
pub enum PresaleStatus {
    #[default]
    NotStarted,
    Active,
    Ended,
    Finalized,
}

#[cw_serde]
pub struct Config {
    // Token minted to buyers, the presale must be its minter
    pub sale_token: Addr,
    pub sale_token_decimals: u8,
    // Payment tokens pulled from buyers by allowance
    pub wld_token: Addr,
    pub wld_decimals: u8,
    pub weth_token: Addr,
    pub weth_decimals: u8,
}

impl Config {
    pub fn asset_token(&self, asset: SaleAsset) -> &Addr {
        match asset {
            SaleAsset::Wld => &self.wld_token,
            SaleAsset::Weth => &self.weth_token,
        }
    }

    pub fn asset_decimals(&self, asset: SaleAsset) -> u8 {
        match asset {
            SaleAsset::Wld => self.wld_decimals,
            SaleAsset::Weth => self.weth_decimals,
        }
    }
}

#[cw_serde]
pub struct TransferAdminState {
    pub new_admin: Addr,
    pub deadline: u64,
}

/// Canonical sale state. Prices and USD amounts are 18 decimal fixed point,
/// token amounts are in the smallest units of their token.
#[cw_serde]
pub struct PresaleLedger {
    /************** Curve *************/
    // USD per whole token at zero tokens sold
    pub base_price: Decimal,
    // USD per whole token added for each whole token sold
    pub price_increment: Decimal,
    pub max_tokens_for_sale: Uint128,
    // USD cap on total contributions
    pub max_raise: Decimal,

    /************** Accounting *************/
    pub tokens_sold: Uint128,
    // USD equivalent raised per asset
    pub wld_raised: Decimal,
    pub weth_raised: Decimal,
    // Asset amounts held in custody, transferred on finalize
    pub wld_collected: Uint128,
    pub weth_collected: Uint128,
    pub participant_count: u64,

    /************** Anchors *************/
    // USD per whole asset token, set by admin
    pub wld_usd_price: Decimal,
    pub weth_usd_price: Decimal,

    pub status: PresaleStatus,
}

impl PresaleLedger {
    pub fn new(
        base_price: Decimal,
        price_increment: Decimal,
        max_tokens_for_sale: Uint128,
        max_raise: Decimal,
        wld_usd_price: Decimal,
        weth_usd_price: Decimal,
    ) -> Result<Self, ContractError> {
        let ledger = Self {
            base_price,
            price_increment,
            max_tokens_for_sale,
            max_raise,
            tokens_sold: Uint128::zero(),
            wld_raised: Decimal::zero(),
            weth_raised: Decimal::zero(),
            wld_collected: Uint128::zero(),
            weth_collected: Uint128::zero(),
            participant_count: 0,
            wld_usd_price,
            weth_usd_price,
            status: PresaleStatus::NotStarted,
        };

        ledger.validate_sale_params()?;

        Ok(ledger)
    }

    pub fn validate_sale_params(&self) -> Result<(), ContractError> {
        if self.base_price.is_zero() && self.price_increment.is_zero() {
            Err(ContractError::InvalidCurveParameters)?;
        }

        if self.max_tokens_for_sale.is_zero() || self.max_raise.is_zero() {
            Err(ContractError::InvalidSaleCaps)?;
        }

        Ok(())
    }

    pub fn raised(&self, asset: SaleAsset) -> Decimal {
        match asset {
            SaleAsset::Wld => self.wld_raised,
            SaleAsset::Weth => self.weth_raised,
        }
    }

    pub fn collected(&self, asset: SaleAsset) -> Uint128 {
        match asset {
            SaleAsset::Wld => self.wld_collected,
            SaleAsset::Weth => self.weth_collected,
        }
    }

    pub fn usd_price(&self, asset: SaleAsset) -> Decimal {
        match asset {
            SaleAsset::Wld => self.wld_usd_price,
            SaleAsset::Weth => self.weth_usd_price,
        }
    }

    /// anchor price of the asset, zero means it can't be accepted
    pub fn anchor_price(&self, asset: SaleAsset) -> Result<Decimal, ContractError> {
        let price = self.usd_price(asset);

        if price.is_zero() {
            Err(ContractError::MissingAnchorPrice {
                asset: asset.to_string(),
            })?;
        }

        Ok(price)
    }

    pub fn total_raised(&self) -> Result<Decimal, ContractError> {
        Ok(self.wld_raised.checked_add(self.weth_raised)?)
    }

    pub fn ensure_active(&self) -> Result<(), ContractError> {
        if self.status != PresaleStatus::Active {
            Err(ContractError::PresaleNotActive)?;
        }

        Ok(())
    }

    pub fn check_raise_capacity(&self, usd_value: Decimal) -> Result<(), ContractError> {
        if self.total_raised()?.checked_add(usd_value)? > self.max_raise {
            Err(ContractError::ExceedMaxRaise)?;
        }

        Ok(())
    }

    pub fn check_token_capacity(&self, token_amount: Uint128) -> Result<(), ContractError> {
        if self.tokens_sold.checked_add(token_amount)? > self.max_tokens_for_sale {
            Err(ContractError::ExceedTokensForSale)?;
        }

        Ok(())
    }

    /// Applies an accepted contribution. Capacity is checked again so the
    /// ledger is left untouched on any error.
    pub fn commit(
        &mut self,
        contribution: &Contribution,
        is_new_participant: bool,
    ) -> Result<(), ContractError> {
        self.ensure_active()?;
        self.check_raise_capacity(contribution.usd_value)?;
        self.check_token_capacity(contribution.tokens_issued)?;

        let tokens_sold = self.tokens_sold.checked_add(contribution.tokens_issued)?;
        let raised = self
            .raised(contribution.asset)
            .checked_add(contribution.usd_value)?;
        let collected = self
            .collected(contribution.asset)
            .checked_add(contribution.asset_amount)?;

        self.tokens_sold = tokens_sold;
        match contribution.asset {
            SaleAsset::Wld => {
                self.wld_raised = raised;
                self.wld_collected = collected;
            }
            SaleAsset::Weth => {
                self.weth_raised = raised;
                self.weth_collected = collected;
            }
        }

        if is_new_participant {
            self.participant_count += 1;
        }

        Ok(())
    }

    pub fn start(&mut self) -> Result<(), ContractError> {
        match self.status {
            PresaleStatus::NotStarted => {}
            PresaleStatus::Finalized => Err(ContractError::PresaleFinalized)?,
            _ => Err(ContractError::PresaleAlreadyStarted)?,
        }

        self.anchor_price(SaleAsset::Wld)?;
        self.anchor_price(SaleAsset::Weth)?;

        self.status = PresaleStatus::Active;

        Ok(())
    }

    pub fn end(&mut self) -> Result<(), ContractError> {
        self.ensure_active()?;
        self.status = PresaleStatus::Ended;

        Ok(())
    }

    pub fn finalize(&mut self) -> Result<(), ContractError> {
        match self.status {
            PresaleStatus::Ended => {}
            PresaleStatus::Finalized => Err(ContractError::PresaleFinalized)?,
            _ => Err(ContractError::PresaleNotEnded)?,
        }

        self.status = PresaleStatus::Finalized;

        Ok(())
    }

    pub fn update_anchor_prices(
        &mut self,
        wld_usd_price: Decimal,
        weth_usd_price: Decimal,
    ) -> Result<(), ContractError> {
        if self.status == PresaleStatus::Finalized {
            Err(ContractError::PresaleFinalized)?;
        }

        self.wld_usd_price = wld_usd_price;
        self.weth_usd_price = weth_usd_price;

        Ok(())
    }

    pub fn update_sale_params(
        &mut self,
        base_price: Option<Decimal>,
        price_increment: Option<Decimal>,
        max_tokens_for_sale: Option<Uint128>,
        max_raise: Option<Decimal>,
    ) -> Result<(), ContractError> {
        if self.status != PresaleStatus::NotStarted {
            Err(ContractError::ImmutableSaleConfig)?;
        }

        let mut updated = self.clone();

        if let Some(x) = base_price {
            updated.base_price = x;
        }

        if let Some(x) = price_increment {
            updated.price_increment = x;
        }

        if let Some(x) = max_tokens_for_sale {
            updated.max_tokens_for_sale = x;
        }

        if let Some(x) = max_raise {
            updated.max_raise = x;
        }

        updated.validate_sale_params()?;
        *self = updated;

        Ok(())
    }
}

/// Purchase in flight, built and consumed inside a single execution
#[cw_serde]
pub struct Contribution {
    pub buyer: Addr,
    pub asset: SaleAsset,
    pub asset_amount: Uint128,
    pub usd_value: Decimal,
    pub tokens_issued: Uint128,
}

#[derive(Default)]
#[cw_serde]
pub struct Participant {
    pub tokens_purchased: Uint128,
    pub wld_contributed: Uint128,
    pub weth_contributed: Uint128,
    pub usd_contributed: Decimal,
}

impl Participant {
    pub fn record(&mut self, contribution: &Contribution) -> Result<(), ContractError> {
        self.tokens_purchased = self
            .tokens_purchased
            .checked_add(contribution.tokens_issued)?;
        self.usd_contributed = self.usd_contributed.checked_add(contribution.usd_value)?;

        match contribution.asset {
            SaleAsset::Wld => {
                self.wld_contributed = self
                    .wld_contributed
                    .checked_add(contribution.asset_amount)?
            }
            SaleAsset::Weth => {
                self.weth_contributed = self
                    .weth_contributed
                    .checked_add(contribution.asset_amount)?
            }
        }

        Ok(())
    }
}
