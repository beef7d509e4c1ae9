use crate::access::AccessControl;
use crate::bid::{record_bid, RefundLedger};
use crate::config::ConfigManager;
use crate::distribution;
use crate::errors::MarketplaceError;
use crate::event::{AuctionFinalized, BidPlaced, RefundCredited, RefundWithdrawn};
use crate::listing::ListingRegistry;
use crate::settlement::{FeeBreakdown, Settlement};
use crate::types::*;
use soroban_sdk::{log, Address, BytesN, Env, Symbol};

pub struct AuctionEngine;

impl AuctionEngine {
    /// Places a bid on an active auction.
    pub fn place_bid(
        env: &Env,
        bidder: Address,
        listing_id: BytesN<32>,
        amount: i128,
    ) -> Result<(), MarketplaceError> {
        AccessControl::ensure_not_blacklisted(env, &bidder)?;

        let mut listing = ListingRegistry::get(env, &listing_id)?;
        let token = ConfigManager::settlement_token(env, &listing.payment_token)?;

        let displaced = record_bid(env, &mut listing, bidder.clone(), amount)?;

        distribution::ensure_payment_available(
            env,
            &listing.payment_token,
            &token,
            &bidder,
            amount,
        )?;

        // Commit the new high bid and the displaced bidder's credit before any transfer
        if let Some((prev_bidder, prev_amount)) = &displaced {
            RefundLedger::credit(env, prev_bidder, &token, *prev_amount)?;
        }
        ListingRegistry::save(env, &listing);

        distribution::collect_payment(env, &listing.payment_token, &token, &bidder, &amount);

        if let Some((prev_bidder, prev_amount)) = displaced {
            log!(env, "outbid refund credited", prev_bidder.clone(), prev_amount);

            env.events().publish(
                (Symbol::new(env, "refund_credited"), prev_bidder.clone()),
                RefundCredited {
                    listing_id: listing_id.clone(),
                    bidder: prev_bidder,
                    token: token.clone(),
                    amount: prev_amount,
                },
            );
        }

        env.events().publish(
            (Symbol::new(env, "bid_placed"), bidder.clone()),
            BidPlaced {
                listing_id,
                bidder,
                amount,
                auction_end_time: listing.auction_end_time.unwrap_or_default(),
            },
        );

        Ok(())
    }

    /// Closes an expired auction. Anyone may call it.
    pub fn finalize(env: &Env, listing_id: BytesN<32>) -> Result<(), MarketplaceError> {
        let mut listing = ListingRegistry::get(env, &listing_id)?;
        listing.check_can_finalize(env)?;

        let winner = listing.highest_bidder.clone();
        match &winner {
            Some(winner) => {
                let token = ConfigManager::settlement_token(env, &listing.payment_token)?;

                // The seller may have moved the asset or revoked approval while bids ran
                let deliverable = listing
                    .asset_kind
                    .ensure_transferable(
                        env,
                        &listing.asset_contract,
                        &listing.seller,
                        listing.token_id,
                        listing.quantity,
                    )
                    .is_ok();

                if deliverable {
                    let config = ConfigManager::get_fee_config(env)?;
                    let fees = FeeBreakdown::for_config(listing.highest_bid, &config)?;

                    listing.status = ListingStatus::Sold;
                    ListingRegistry::save(env, &listing);

                    // Bid funds are already held by the contract
                    Settlement::exchange(
                        env,
                        &listing,
                        winner,
                        &token,
                        &config,
                        listing.highest_bid,
                        &fees,
                    );
                } else {
                    RefundLedger::credit(env, winner, &token, listing.highest_bid)?;
                    listing.status = ListingStatus::Undeliverable;
                    ListingRegistry::save(env, &listing);

                    log!(env, "auction undeliverable, winning bid refunded", winner.clone());

                    env.events().publish(
                        (Symbol::new(env, "refund_credited"), winner.clone()),
                        RefundCredited {
                            listing_id: listing_id.clone(),
                            bidder: winner.clone(),
                            token,
                            amount: listing.highest_bid,
                        },
                    );
                }
            }
            None => {
                listing.status = ListingStatus::ExpiredNoBids;
                ListingRegistry::save(env, &listing);
            }
        }

        env.events().publish(
            (Symbol::new(env, "auction_finalized"), listing_id.clone()),
            AuctionFinalized {
                listing_id,
                winner,
                final_price: listing.highest_bid,
                status: listing.status,
                timestamp: env.ledger().timestamp(),
            },
        );

        Ok(())
    }

    /// Sends the caller everything the refund ledger owes them in `payment_token`.
    pub fn withdraw_refund(
        env: &Env,
        bidder: Address,
        payment_token: PaymentToken,
    ) -> Result<i128, MarketplaceError> {
        let token = ConfigManager::settlement_token(env, &payment_token)?;
        let amount = RefundLedger::take(env, &bidder, &token)?;

        distribution::transfer_from_contract(env, &token, &bidder, &amount);

        env.events().publish(
            (Symbol::new(env, "refund_withdrawn"), bidder.clone()),
            RefundWithdrawn {
                bidder,
                token,
                amount,
            },
        );

        Ok(amount)
    }

    pub fn pending_refund(
        env: &Env,
        bidder: &Address,
        payment_token: &PaymentToken,
    ) -> Result<i128, MarketplaceError> {
        let token = ConfigManager::settlement_token(env, payment_token)?;
        Ok(RefundLedger::balance(env, bidder, &token))
    }
}
