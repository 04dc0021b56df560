use std::str::FromStr;

use cosmwasm_std::{Decimal, Uint128};
use cw20::Expiration;
use pretty_assertions::assert_eq;
use strum::IntoEnumIterator;

use presale_base::{
    error::ContractError,
    presale::types::{Participant, SaleAsset},
};

use crate::suite::{Suite, SuiteBuilder, ADMIN, ALICE, BOB, CAROL, INITIAL_BALANCE, TOKEN};

/// tokens bought for 1000 USD from an empty default curve
const TOKENS_FOR_1000_USD: u128 = 999_001_995_013_958_131_572_425;

fn dec(value: &str) -> Decimal {
    Decimal::from_str(value).unwrap()
}

fn started(builder: SuiteBuilder) -> Suite {
    let mut suite = builder.build();
    suite.start_presale(ADMIN).unwrap();
    suite
}

#[test]
fn purchase_with_wld() {
    let mut suite = started(SuiteBuilder::new());

    suite
        .approve_and_purchase(ALICE, SaleAsset::Wld, 1_000 * TOKEN)
        .unwrap();

    assert_eq!(
        suite.query_sale_token_balance(ALICE).unwrap(),
        TOKENS_FOR_1000_USD
    );
    assert_eq!(
        suite
            .query_asset_balance(SaleAsset::Wld, &suite.presale_contract())
            .unwrap(),
        1_000 * TOKEN
    );
    assert_eq!(
        suite.query_asset_balance(SaleAsset::Wld, ALICE).unwrap(),
        INITIAL_BALANCE - 1_000 * TOKEN
    );

    let ledger = suite.query_ledger().unwrap();
    assert_eq!(ledger.tokens_sold, Uint128::new(TOKENS_FOR_1000_USD));
    assert_eq!(ledger.wld_raised, dec("1000"));
    assert_eq!(ledger.weth_raised, Decimal::zero());
    assert_eq!(ledger.wld_collected, Uint128::new(1_000 * TOKEN));
    assert_eq!(ledger.participant_count, 1);

    assert!(suite.query_current_price().unwrap() > suite.query_base_price().unwrap());
}

#[test]
fn purchase_with_weth_is_priced_in_usd() {
    let mut suite = started(SuiteBuilder::new());

    // half of WETH at 2000 USD
    suite
        .approve_and_purchase(BOB, SaleAsset::Weth, TOKEN / 2)
        .unwrap();

    assert_eq!(
        suite.query_sale_token_balance(BOB).unwrap(),
        TOKENS_FOR_1000_USD
    );
    assert_eq!(suite.query_asset_raised(SaleAsset::Weth).unwrap(), dec("1000"));
    assert_eq!(suite.query_asset_raised(SaleAsset::Wld).unwrap(), Decimal::zero());
    assert_eq!(suite.query_total_raised().unwrap(), dec("1000"));
}

#[test]
fn asset_decimals_come_from_the_token() {
    let mut suite = started(SuiteBuilder::new().with_wld_decimals(6));

    assert_eq!(suite.query_config().unwrap().wld_decimals, 6);

    suite
        .approve_and_purchase(ALICE, SaleAsset::Wld, 1_000_000_000)
        .unwrap();

    assert_eq!(
        suite.query_sale_token_balance(ALICE).unwrap(),
        TOKENS_FOR_1000_USD
    );
}

#[test]
fn purchase_requires_allowance() {
    let mut suite = started(SuiteBuilder::new());

    let err = suite.purchase(ALICE, SaleAsset::Wld, TOKEN).unwrap_err();
    assert_eq!(
        ContractError::InsufficientAllowance {
            allowance: Uint128::zero(),
            required: Uint128::new(TOKEN),
        },
        err.downcast().unwrap()
    );

    suite
        .increase_allowance(ALICE, SaleAsset::Wld, TOKEN - 1)
        .unwrap();
    let err = suite.purchase(ALICE, SaleAsset::Wld, TOKEN).unwrap_err();
    assert_eq!(
        ContractError::InsufficientAllowance {
            allowance: Uint128::new(TOKEN - 1),
            required: Uint128::new(TOKEN),
        },
        err.downcast().unwrap()
    );

    // allowance for one asset doesn't cover the other
    suite
        .increase_allowance(ALICE, SaleAsset::Weth, TOKEN)
        .unwrap();
    suite.purchase(ALICE, SaleAsset::Weth, TOKEN).unwrap();
    assert_eq!(suite.query_ledger().unwrap().wld_raised, Decimal::zero());
}

#[test]
fn expired_allowance_counts_as_zero() {
    let mut suite = started(SuiteBuilder::new());
    let expires_at = suite.get_height() + 5;

    suite
        .increase_allowance_until(ALICE, SaleAsset::Wld, 2 * TOKEN, Expiration::AtHeight(expires_at))
        .unwrap();
    suite.purchase(ALICE, SaleAsset::Wld, TOKEN).unwrap();

    suite.update_height(5);
    let err = suite.purchase(ALICE, SaleAsset::Wld, TOKEN).unwrap_err();
    assert_eq!(
        ContractError::InsufficientAllowance {
            allowance: Uint128::zero(),
            required: Uint128::new(TOKEN),
        },
        err.downcast().unwrap()
    );
    assert_eq!(
        suite.query_ledger().unwrap().wld_collected,
        Uint128::new(TOKEN)
    );
}

#[test]
fn zero_and_dust_purchases_fail() {
    let mut suite = started(SuiteBuilder::new().with_anchor_prices("0.000000000000000001", "2000"));

    let err = suite.purchase(ALICE, SaleAsset::Wld, 0).unwrap_err();
    assert_eq!(ContractError::ZeroAmount, err.downcast().unwrap());

    // one WLD atom is worth less than one USD atom
    let err = suite
        .approve_and_purchase(ALICE, SaleAsset::Wld, 1)
        .unwrap_err();
    assert_eq!(ContractError::ContributionTooSmall, err.downcast().unwrap());
}

#[test]
fn purchase_outside_active_window_fails() {
    let mut suite = SuiteBuilder::new().build();
    suite
        .increase_allowance(ALICE, SaleAsset::Wld, 10 * TOKEN)
        .unwrap();

    let err = suite.purchase(ALICE, SaleAsset::Wld, TOKEN).unwrap_err();
    assert_eq!(ContractError::PresaleNotActive, err.downcast().unwrap());

    suite.start_presale(ADMIN).unwrap();
    suite.purchase(ALICE, SaleAsset::Wld, TOKEN).unwrap();
    suite.end_presale(ADMIN).unwrap();

    let err = suite.purchase(ALICE, SaleAsset::Wld, TOKEN).unwrap_err();
    assert_eq!(ContractError::PresaleNotActive, err.downcast().unwrap());
}

#[test]
fn zero_anchor_disables_only_that_asset() {
    let mut suite = started(SuiteBuilder::new());

    suite.update_oracle_prices(ADMIN, "0", "2000").unwrap();

    let err = suite
        .approve_and_purchase(ALICE, SaleAsset::Wld, TOKEN)
        .unwrap_err();
    assert_eq!(
        ContractError::MissingAnchorPrice {
            asset: "WLD".to_string()
        },
        err.downcast().unwrap()
    );
    assert_eq!(suite.query_tokens_sold().unwrap(), 0);

    suite
        .approve_and_purchase(ALICE, SaleAsset::Weth, TOKEN)
        .unwrap();
    assert_eq!(suite.query_total_raised().unwrap(), dec("2000"));
}

#[test]
fn new_anchor_prices_apply_to_next_purchase() {
    let mut suite = started(SuiteBuilder::new());

    suite
        .approve_and_purchase(ALICE, SaleAsset::Wld, 100 * TOKEN)
        .unwrap();
    suite.update_oracle_prices(ADMIN, "2.5", "2000").unwrap();
    suite
        .approve_and_purchase(ALICE, SaleAsset::Wld, 100 * TOKEN)
        .unwrap();

    assert_eq!(suite.query_asset_raised(SaleAsset::Wld).unwrap(), dec("350"));
    assert_eq!(
        suite.query_participant(ALICE).unwrap().usd_contributed,
        dec("350")
    );
}

#[test]
fn max_raise_is_never_exceeded() {
    let mut suite = started(SuiteBuilder::new().with_max_raise("1500"));

    suite
        .approve_and_purchase(ALICE, SaleAsset::Wld, 1_000 * TOKEN)
        .unwrap();
    let ledger_before = suite.query_ledger().unwrap();

    let err = suite
        .approve_and_purchase(BOB, SaleAsset::Wld, 1_000 * TOKEN)
        .unwrap_err();
    assert_eq!(ContractError::ExceedMaxRaise, err.downcast().unwrap());
    assert_eq!(suite.query_ledger().unwrap(), ledger_before);
    assert_eq!(
        suite.query_asset_balance(SaleAsset::Wld, BOB).unwrap(),
        INITIAL_BALANCE
    );
    assert_eq!(suite.query_sale_token_balance(BOB).unwrap(), 0);

    // filling the cap exactly is fine
    suite.purchase(BOB, SaleAsset::Wld, 500 * TOKEN).unwrap();
    assert_eq!(suite.query_total_raised().unwrap(), dec("1500"));
}

#[test]
fn tokens_for_sale_are_never_oversold() {
    let mut suite = started(
        SuiteBuilder::new()
            .with_flat_price("0.001")
            .with_max_tokens_for_sale(1_000 * TOKEN),
    );

    let err = suite
        .approve_and_purchase(ALICE, SaleAsset::Wld, 5 * TOKEN)
        .unwrap_err();
    assert_eq!(ContractError::ExceedTokensForSale, err.downcast().unwrap());
    assert_eq!(suite.query_tokens_sold().unwrap(), 0);
    assert_eq!(suite.query_sale_token_balance(ALICE).unwrap(), 0);

    // one USD buys the whole supply
    suite.purchase(ALICE, SaleAsset::Wld, TOKEN).unwrap();
    assert_eq!(suite.query_tokens_sold().unwrap(), 1_000 * TOKEN);
    assert_eq!(
        suite.query_tokens_sold().unwrap(),
        suite.query_max_tokens_for_sale().unwrap()
    );

    let err = suite
        .approve_and_purchase(BOB, SaleAsset::Weth, TOKEN / 1_000)
        .unwrap_err();
    assert_eq!(ContractError::ExceedTokensForSale, err.downcast().unwrap());
}

#[test]
fn failed_mint_reverts_the_purchase() {
    let mut suite = started(SuiteBuilder::new().without_minter_role());

    suite
        .approve_and_purchase(ALICE, SaleAsset::Wld, 1_000 * TOKEN)
        .unwrap_err();

    let ledger = suite.query_ledger().unwrap();
    assert_eq!(ledger.tokens_sold, Uint128::zero());
    assert_eq!(ledger.wld_raised, Decimal::zero());
    assert_eq!(ledger.wld_collected, Uint128::zero());
    assert_eq!(ledger.participant_count, 0);
    assert_eq!(
        suite.query_asset_balance(SaleAsset::Wld, ALICE).unwrap(),
        INITIAL_BALANCE
    );
    assert_eq!(suite.query_participant(ALICE).unwrap(), Participant::default());
}

#[test]
fn failed_transfer_reverts_the_purchase() {
    let mut suite = started(SuiteBuilder::new());

    // allowance is there but the balance is gone
    suite
        .increase_allowance(ALICE, SaleAsset::Weth, TOKEN)
        .unwrap();
    suite
        .transfer_asset(ALICE, SaleAsset::Weth, BOB, INITIAL_BALANCE)
        .unwrap();

    suite.purchase(ALICE, SaleAsset::Weth, TOKEN).unwrap_err();

    let ledger = suite.query_ledger().unwrap();
    assert_eq!(ledger.tokens_sold, Uint128::zero());
    assert_eq!(ledger.weth_raised, Decimal::zero());
    assert_eq!(suite.query_sale_token_balance(ALICE).unwrap(), 0);
    assert!(suite.query_participant_list(None, None).unwrap().is_empty());
}

#[test]
fn estimate_matches_purchase() {
    let mut suite = started(SuiteBuilder::new());

    suite
        .approve_and_purchase(CAROL, SaleAsset::Wld, 12_345 * TOKEN)
        .unwrap();

    let estimate = suite.query_estimate(SaleAsset::Weth, 3 * TOKEN).unwrap();
    assert_eq!(estimate.usd_value, dec("6000"));
    assert_eq!(
        estimate.token_amount.u128(),
        suite.query_tokens_for_usd("6000").unwrap()
    );

    suite
        .approve_and_purchase(ALICE, SaleAsset::Weth, 3 * TOKEN)
        .unwrap();

    assert_eq!(
        suite.query_sale_token_balance(ALICE).unwrap(),
        estimate.token_amount.u128()
    );
    assert_eq!(suite.query_current_price().unwrap(), estimate.price_after);
}

#[test]
fn participants_are_tracked() {
    let mut suite = started(SuiteBuilder::new());

    suite
        .approve_and_purchase(BOB, SaleAsset::Wld, 10 * TOKEN)
        .unwrap();
    suite
        .approve_and_purchase(ALICE, SaleAsset::Wld, 20 * TOKEN)
        .unwrap();
    suite
        .approve_and_purchase(ALICE, SaleAsset::Weth, TOKEN / 100)
        .unwrap();

    let alice = suite.query_participant(ALICE).unwrap();
    assert_eq!(alice.wld_contributed, Uint128::new(20 * TOKEN));
    assert_eq!(alice.weth_contributed, Uint128::new(TOKEN / 100));
    assert_eq!(alice.usd_contributed, dec("40"));
    assert_eq!(
        alice.tokens_purchased.u128(),
        suite.query_sale_token_balance(ALICE).unwrap()
    );

    assert_eq!(suite.query_ledger().unwrap().participant_count, 2);

    let list = suite.query_participant_list(None, None).unwrap();
    let addresses: Vec<String> = list.iter().map(|x| x.address.to_string()).collect();
    assert_eq!(addresses, vec![ALICE.to_string(), BOB.to_string()]);
    assert_eq!(list[0].participant, alice);

    let list = suite.query_participant_list(Some(ALICE), Some(10)).unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0].address.to_string(), BOB.to_string());
}

#[test]
fn ledger_stays_consistent_across_purchases() {
    let mut suite = started(SuiteBuilder::new().with_max_raise("20000"));
    let buyers = [ALICE, BOB, CAROL];

    let mut previous_price = suite.query_current_price().unwrap();
    for (i, amount) in [1_000 * TOKEN, TOKEN / 4, 777 * TOKEN, 3 * TOKEN, 5 * TOKEN / 2]
        .into_iter()
        .enumerate()
    {
        let asset = if amount < 10 * TOKEN {
            SaleAsset::Weth
        } else {
            SaleAsset::Wld
        };
        suite
            .approve_and_purchase(buyers[i % buyers.len()], asset, amount)
            .unwrap();

        let ledger = suite.query_ledger().unwrap();
        let minted: u128 = buyers
            .iter()
            .map(|x| suite.query_sale_token_balance(x).unwrap())
            .sum();

        assert!(ledger.tokens_sold <= ledger.max_tokens_for_sale);
        assert!(ledger.total_raised().unwrap() <= ledger.max_raise);
        assert_eq!(ledger.tokens_sold.u128(), minted);

        for asset in SaleAsset::iter() {
            assert_eq!(
                ledger.collected(asset).u128(),
                suite
                    .query_asset_balance(asset, &suite.presale_contract())
                    .unwrap()
            );
        }

        let price = suite.query_current_price().unwrap();
        assert!(price > previous_price);
        assert!(price <= suite.query_final_price().unwrap());
        previous_price = price;
    }
}
