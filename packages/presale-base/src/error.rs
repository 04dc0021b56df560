use cosmwasm_std::{
    ConversionOverflowError, DivideByZeroError, OverflowError, StdError, Uint128,
};
use cw_controllers::AdminError;
use cw_utils::PaymentError;
use thiserror::Error;

impl From<StdError> for ContractError {
    fn from(std_error: StdError) -> Self {
        Self::CustomError {
            val: std_error.to_string(),
        }
    }
}

impl From<ContractError> for StdError {
    fn from(contract_error: ContractError) -> Self {
        Self::generic_err(contract_error.to_string())
    }
}

/// Broad error classes a client can branch on, e.g. to ask the buyer for an
/// allowance instead of showing a hard failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Configuration,
    State,
    Authorization,
    Allowance,
    Capacity,
    Arithmetic,
    ZeroAmount,
    Other,
}

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("Custom Error val: {val:?}")]
    CustomError { val: String },

    #[error("{0}")]
    PaymentError(#[from] PaymentError),

    // ------------------------------ common ----------------------------------------
    #[error("Parsing previous version error!")]
    ParsingPrevVersion,

    #[error("Parsing new version error!")]
    ParsingNewVersion,

    #[error("Msg version is not equal contract new version!")]
    ImproperMsgVersion,

    // ------------------------------ authorization ---------------------------------
    #[error("{0}")]
    Admin(#[from] AdminError),

    #[error("Sender does not have access permissions!")]
    Unauthorized,

    #[error("It's too late to accept admin role!")]
    TransferAdminDeadline,

    // ------------------------------ configuration ---------------------------------
    #[error("{asset} USD price is not set!")]
    MissingAnchorPrice { asset: String },

    #[error("Base price and price increment can't be both zero!")]
    InvalidCurveParameters,

    #[error("Max tokens for sale and max raise must be positive!")]
    InvalidSaleCaps,

    #[error("Token decimals are out of range!")]
    InvalidTokenDecimals,

    // ------------------------------ lifecycle -------------------------------------
    #[error("Presale is already started!")]
    PresaleAlreadyStarted,

    #[error("Presale is not active!")]
    PresaleNotActive,

    #[error("Presale is not ended!")]
    PresaleNotEnded,

    #[error("Presale is finalized!")]
    PresaleFinalized,

    #[error("Sale config can't be changed after presale start!")]
    ImmutableSaleConfig,

    // ------------------------------ contribution ----------------------------------
    #[error("Insufficient allowance: {allowance} is approved, {required} is required")]
    InsufficientAllowance {
        allowance: Uint128,
        required: Uint128,
    },

    #[error("Amount can not be equal zero!")]
    ZeroAmount,

    #[error("Contribution is too small to buy any tokens!")]
    ContributionTooSmall,

    #[error("Exceed max raise!")]
    ExceedMaxRaise,

    #[error("Exceed tokens for sale!")]
    ExceedTokensForSale,

    // ------------------------------ arithmetic ------------------------------------
    #[error("{0}")]
    Overflow(#[from] OverflowError),

    #[error("{0}")]
    DivideByZero(#[from] DivideByZeroError),

    #[error("{0}")]
    ConversionOverflow(#[from] ConversionOverflowError),

    #[error("Price curve is degenerate!")]
    DegenerateCurve,
}

impl ContractError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingAnchorPrice { .. }
            | Self::InvalidCurveParameters
            | Self::InvalidSaleCaps
            | Self::InvalidTokenDecimals => ErrorKind::Configuration,

            Self::PresaleAlreadyStarted
            | Self::PresaleNotActive
            | Self::PresaleNotEnded
            | Self::PresaleFinalized
            | Self::ImmutableSaleConfig => ErrorKind::State,

            Self::Admin(_) | Self::Unauthorized | Self::TransferAdminDeadline => {
                ErrorKind::Authorization
            }

            Self::InsufficientAllowance { .. } => ErrorKind::Allowance,

            Self::ExceedMaxRaise | Self::ExceedTokensForSale => ErrorKind::Capacity,

            Self::Overflow(_)
            | Self::DivideByZero(_)
            | Self::ConversionOverflow(_)
            | Self::DegenerateCurve => ErrorKind::Arithmetic,

            Self::ZeroAmount | Self::ContributionTooSmall => ErrorKind::ZeroAmount,

            Self::CustomError { .. }
            | Self::PaymentError(_)
            | Self::ParsingPrevVersion
            | Self::ParsingNewVersion
            | Self::ImproperMsgVersion => ErrorKind::Other,
        }
    }
}
