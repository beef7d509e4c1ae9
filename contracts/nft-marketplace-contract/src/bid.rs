use soroban_sdk::{Address, Env};

use crate::errors::MarketplaceError;
use crate::types::*;

/// Validates the bid and makes `new_bidder` the highest bidder.
///
/// Returns the displaced bidder and amount, if any. The caller credits it to the
/// refund ledger; nothing is sent to the displaced bidder here.
pub fn record_bid(
    env: &Env,
    listing: &mut Listing,
    new_bidder: Address,
    new_bid_amount: i128,
) -> Result<Option<(Address, i128)>, MarketplaceError> {
    listing.check_can_bid(env, &new_bidder, new_bid_amount)?;

    let displaced = listing
        .highest_bidder
        .take()
        .map(|prev_bidder| (prev_bidder, listing.highest_bid));

    listing.highest_bidder = Some(new_bidder);
    listing.highest_bid = new_bid_amount;

    Ok(displaced)
}

/// Pull-style ledger of outbid amounts, keyed by bidder and settlement token.
pub struct RefundLedger;

impl RefundLedger {
    pub fn balance(env: &Env, bidder: &Address, token: &Address) -> i128 {
        env.storage()
            .persistent()
            .get(&DataKey::Refund(bidder.clone(), token.clone()))
            .unwrap_or(0)
    }

    pub fn credit(
        env: &Env,
        bidder: &Address,
        token: &Address,
        amount: i128,
    ) -> Result<i128, MarketplaceError> {
        let total = Self::balance(env, bidder, token)
            .checked_add(amount)
            .ok_or(MarketplaceError::ArithmeticOverflow)?;

        env.storage()
            .persistent()
            .set(&DataKey::Refund(bidder.clone(), token.clone()), &total);

        Ok(total)
    }

    /// Zero the entry and return what was owed
    pub fn take(env: &Env, bidder: &Address, token: &Address) -> Result<i128, MarketplaceError> {
        let owed = Self::balance(env, bidder, token);
        if owed <= 0 {
            return Err(MarketplaceError::NothingToWithdraw);
        }

        env.storage()
            .persistent()
            .remove(&DataKey::Refund(bidder.clone(), token.clone()));

        Ok(owed)
    }
}
