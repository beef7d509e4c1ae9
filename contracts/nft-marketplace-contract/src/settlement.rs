use crate::access::AccessControl;
use crate::config::{ConfigManager, BPS_DENOMINATOR};
use crate::distribution;
use crate::errors::MarketplaceError;
use crate::event::ListingSold;
use crate::listing::ListingRegistry;
use crate::types::*;
use soroban_sdk::{log, Address, BytesN, Env, Symbol};

/// How a sale price is split between treasury, royalty recipient and seller.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FeeBreakdown {
    pub marketplace_fee: i128,
    pub royalty_fee: i128,
    pub seller_proceeds: i128,
}

impl FeeBreakdown {
    /// Fees truncate toward zero; the remainder stays with the seller.
    pub fn compute(
        price: i128,
        marketplace_fee_bps: u32,
        royalty_fee_bps: u32,
    ) -> Result<FeeBreakdown, MarketplaceError> {
        let marketplace_fee = bps_share(price, marketplace_fee_bps)?;
        let royalty_fee = bps_share(price, royalty_fee_bps)?;
        let seller_proceeds = price
            .checked_sub(marketplace_fee)
            .and_then(|rest| rest.checked_sub(royalty_fee))
            .ok_or(MarketplaceError::ArithmeticOverflow)?;

        Ok(FeeBreakdown {
            marketplace_fee,
            royalty_fee,
            seller_proceeds,
        })
    }

    pub fn for_config(price: i128, config: &FeeConfig) -> Result<FeeBreakdown, MarketplaceError> {
        Self::compute(
            price,
            config.marketplace_fee_bps,
            config.effective_royalty_bps(),
        )
    }
}

fn bps_share(amount: i128, bps: u32) -> Result<i128, MarketplaceError> {
    amount
        .checked_mul(bps as i128)
        .map(|scaled| scaled / BPS_DENOMINATOR as i128)
        .ok_or(MarketplaceError::ArithmeticOverflow)
}

pub struct Settlement;

impl Settlement {
    /// Buy a fixed-price listing.
    ///
    /// Every check runs first, then the listing is committed as `Sold`, and only
    /// then are the payment, the asset and the proceeds moved. A second buyer
    /// (or a collaborator calling back in) sees a listing that is no longer active.
    pub fn buy(
        env: &Env,
        buyer: Address,
        listing_id: BytesN<32>,
        native_amount: Option<i128>,
    ) -> Result<(), MarketplaceError> {
        AccessControl::ensure_not_blacklisted(env, &buyer)?;

        let mut listing = ListingRegistry::get(env, &listing_id)?;
        listing.check_can_buy(&buyer, &native_amount)?;
        AccessControl::ensure_not_blacklisted(env, &listing.seller)?;

        let config = ConfigManager::get_fee_config(env)?;
        let token = ConfigManager::settlement_token(env, &listing.payment_token)?;
        let fees = FeeBreakdown::for_config(listing.price, &config)?;

        distribution::ensure_payment_available(
            env,
            &listing.payment_token,
            &token,
            &buyer,
            listing.price,
        )?;

        // The seller may have moved the asset or revoked approval since listing
        listing.asset_kind.ensure_transferable(
            env,
            &listing.asset_contract,
            &listing.seller,
            listing.token_id,
            listing.quantity,
        )?;

        listing.status = ListingStatus::Sold;
        ListingRegistry::save(env, &listing);

        distribution::collect_payment(env, &listing.payment_token, &token, &buyer, &listing.price);
        Self::exchange(env, &listing, &buyer, &token, &config, listing.price, &fees);

        Ok(())
    }

    /// Deliver the asset to `buyer` and pay out `price`, which the contract already holds.
    /// The listing must already be committed as `Sold`.
    pub fn exchange(
        env: &Env,
        listing: &Listing,
        buyer: &Address,
        token: &Address,
        config: &FeeConfig,
        price: i128,
        fees: &FeeBreakdown,
    ) {
        listing.asset_kind.transfer(
            env,
            &listing.asset_contract,
            &listing.seller,
            buyer,
            listing.token_id,
            listing.quantity,
        );

        distribution::transfer_from_contract(env, token, &config.treasury, &fees.marketplace_fee);
        if let Some(royalty_recipient) = &config.royalty_recipient {
            distribution::transfer_from_contract(env, token, royalty_recipient, &fees.royalty_fee);
        }
        distribution::transfer_from_contract(env, token, &listing.seller, &fees.seller_proceeds);

        log!(
            env,
            "listing settled: price {}, fee {}, royalty {}, proceeds {}",
            price,
            fees.marketplace_fee,
            fees.royalty_fee,
            fees.seller_proceeds
        );

        env.events().publish(
            (Symbol::new(env, "listing_sold"), buyer.clone()),
            ListingSold {
                listing_id: listing.id.clone(),
                seller: listing.seller.clone(),
                buyer: buyer.clone(),
                price,
                marketplace_fee: fees.marketplace_fee,
                royalty_fee: fees.royalty_fee,
                seller_proceeds: fees.seller_proceeds,
            },
        );
    }
}
