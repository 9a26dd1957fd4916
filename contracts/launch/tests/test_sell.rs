mod common;

use belugalaunch_token::LaunchError;
use belugalaunch_fees::FeeDistribution;
use common::{balance, buy, event_data, sell, setup, snapshot, CREATOR_REWARD};
use soroban_sdk::Address;

type TradeEvent = (Address, Address, i128, i128, i128, i128, u128, u128, FeeDistribution);

#[test]
fn test_sell_matches_quote() {
    let s = setup();
    let bought = buy(&s, 10_000_000, None);
    let amount = bought / 2;

    let quote = s.launch.quote_sell(&amount);
    assert_eq!(quote.net_in, amount);
    assert_eq!(quote.fee_bps, 300);

    let native_before = balance(&s.env, &s.native, &s.buyer);
    let out = sell(&s, &s.buyer, amount);

    let trade: TradeEvent = event_data(&s.env, &s.launch.address, "Trade", Some("sell")).unwrap();
    let (trader, _, gross, fee, consumed, net_out, _, after, paid) = trade;
    assert_eq!(trader, s.buyer);
    assert_eq!((gross, consumed), (amount, amount));
    assert_eq!((fee, net_out), (quote.fee, out));
    assert_eq!(after, quote.sqrt_price_after);
    assert_eq!(paid.total(), quote.fee);

    assert_eq!(out, quote.amount_out);
    assert_eq!(balance(&s.env, &s.native, &s.buyer) - native_before, out);
    assert_eq!(balance(&s.env, &s.token, &s.buyer), bought - amount);
    assert_eq!(common::sqrt_price(&s), quote.sqrt_price_after);
}

#[test]
fn test_sell_fee_is_distributed() {
    let s = setup();
    let bought = buy(&s, 10_000_000, Some(s.referrer.clone()));
    let quote = s.launch.quote_sell(&bought);
    let before = snapshot(&s);

    s.launch.sell(&s.buyer, &bought, &s.buyer, &Some(s.referrer.clone()), &0, &0);

    let diff = snapshot(&s).diff(&before);
    let paid = diff.beneficiary + diff.burner + diff.referrer + diff.protocol;
    assert_eq!(paid, quote.fee);
    assert!(diff.referrer > 0);
    assert_eq!(balance(&s.env, &s.native, &s.launch.address), 0);
}

#[test]
fn test_floor_applies_after_fee() {
    let s = setup();
    let bought = buy(&s, 10_000_000, None);
    let quote = s.launch.quote_sell(&bought);

    let result = s.launch.try_sell(&s.buyer, &bought, &s.buyer, &None, &(quote.amount_out + 1), &0);
    assert_eq!(result, Err(Ok(LaunchError::SlippageExceeded)));
    assert_eq!(balance(&s.env, &s.token, &s.buyer), bought);

    let out = s.launch.sell(&s.buyer, &bought, &s.buyer, &None, &quote.amount_out, &0);
    assert_eq!(out, quote.amount_out);
}

#[test]
fn test_oversized_sell_refunds_unconsumed() {
    let s = setup();
    buy(&s, 10_000_000, None);
    let start_price = common::sqrt_price(&s);

    // the pool only holds the native from one buy
    let quote = s.launch.quote_sell(&CREATOR_REWARD);
    assert!(quote.net_in < CREATOR_REWARD);

    let out = sell(&s, &s.creator, CREATOR_REWARD);

    assert_eq!(out, quote.amount_out);
    assert!(out > 0 && out < 10_000_000);
    assert_eq!(balance(&s.env, &s.token, &s.creator), CREATOR_REWARD - quote.net_in);
    assert_eq!(balance(&s.env, &s.native, &s.creator), out);
    assert_ne!(common::sqrt_price(&s), start_price);
}

#[test]
fn test_sell_rejects_zero() {
    let s = setup();
    buy(&s, 10_000_000, None);

    assert_eq!(
        s.launch.try_sell(&s.buyer, &0, &s.buyer, &None, &0, &0),
        Err(Ok(LaunchError::InvalidAmount))
    );
    assert_eq!(s.launch.try_quote_sell(&0), Err(Ok(LaunchError::InvalidAmount)));
}

#[test]
fn test_sell_to_unset_recipient() {
    let s = setup();
    let bought = buy(&s, 10_000_000, None);

    let result = s.launch.try_sell(&s.buyer, &bought, &s.launch.address, &None, &0, &0);
    assert_eq!(result, Err(Ok(LaunchError::InvalidRecipient)));
}
