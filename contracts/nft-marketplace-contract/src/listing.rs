use crate::access::AccessControl;
use crate::config::ConfigManager;
use crate::errors::MarketplaceError;
use crate::event::{ListingCancelled, ListingCreated};
use crate::types::*;
use soroban_sdk::{xdr::ToXdr, Address, Bytes, BytesN, Env, Symbol};

pub struct ListingRegistry;

impl ListingRegistry {
    /// Derive the listing id from (seller, asset contract, token id, mode).
    ///
    /// The id is `sha256(xdr(seller) || xdr(asset_contract) || be64(token_id) || be32(mode))`,
    /// so clients can recompute it without an index.
    pub fn compute_id(
        env: &Env,
        seller: &Address,
        asset_contract: &Address,
        token_id: u64,
        mode: ListingMode,
    ) -> BytesN<32> {
        let mut payload = Bytes::new(env);
        payload.append(&seller.clone().to_xdr(env));
        payload.append(&asset_contract.clone().to_xdr(env));
        payload.extend_from_array(&token_id.to_be_bytes());
        payload.extend_from_array(&(mode as u32).to_be_bytes());

        env.crypto().sha256(&payload).to_bytes()
    }

    pub fn get(env: &Env, listing_id: &BytesN<32>) -> Result<Listing, MarketplaceError> {
        env.storage()
            .persistent()
            .get(&DataKey::Listing(listing_id.clone()))
            .ok_or(MarketplaceError::ListingNotFound)
    }

    pub fn save(env: &Env, listing: &Listing) {
        env.storage()
            .persistent()
            .set(&DataKey::Listing(listing.id.clone()), listing);
    }

    /// Create a listing. The asset stays with the seller until a sale settles.
    pub fn create(
        env: &Env,
        seller: Address,
        asset_contract: Address,
        token_id: u64,
        quantity: u64,
        payment_token: PaymentToken,
        price: i128,
        mode: ListingMode,
        duration: u64,
    ) -> Result<BytesN<32>, MarketplaceError> {
        AccessControl::ensure_not_blacklisted(env, &seller)?;

        let config = ConfigManager::get_fee_config(env)?;
        if price <= 0 || price < config.minimum_price_unit {
            return Err(MarketplaceError::InvalidPrice);
        }

        let current_time = env.ledger().timestamp();
        let auction_end_time = match mode {
            ListingMode::Auction => {
                if duration == 0 {
                    return Err(MarketplaceError::InvalidDuration);
                }
                Some(
                    current_time
                        .checked_add(duration)
                        .ok_or(MarketplaceError::InvalidDuration)?,
                )
            }
            ListingMode::FixedPrice => None,
        };

        let listing_id = Self::compute_id(env, &seller, &asset_contract, token_id, mode);
        if let Ok(existing) = Self::get(env, &listing_id) {
            if existing.is_active() {
                return Err(MarketplaceError::ListingAlreadyActive);
            }
        }

        // Payment token must resolve (native token requires initialization)
        ConfigManager::settlement_token(env, &payment_token)?;

        let asset_kind = AssetKind::probe(env, &asset_contract, &seller, token_id)?;
        asset_kind.validate_quantity(quantity)?;
        asset_kind.ensure_transferable(env, &asset_contract, &seller, token_id, quantity)?;

        let listing = Listing {
            id: listing_id.clone(),
            seller: seller.clone(),
            asset_contract: asset_contract.clone(),
            token_id,
            quantity,
            asset_kind,
            payment_token: payment_token.clone(),
            price,
            mode,
            auction_duration: match mode {
                ListingMode::Auction => duration,
                ListingMode::FixedPrice => 0,
            },
            auction_end_time,
            highest_bidder: None,
            highest_bid: 0,
            status: ListingStatus::Active,
            created_at: current_time,
        };

        Self::save(env, &listing);

        env.events().publish(
            (Symbol::new(env, "listing_created"), seller.clone()),
            ListingCreated {
                listing_id: listing_id.clone(),
                seller,
                asset_contract,
                token_id,
                quantity,
                payment_token,
                price,
                mode,
                auction_end_time,
            },
        );

        Ok(listing_id)
    }

    /// Cancel an active listing. No funds move.
    pub fn cancel(
        env: &Env,
        seller: Address,
        listing_id: BytesN<32>,
    ) -> Result<(), MarketplaceError> {
        AccessControl::ensure_not_blacklisted(env, &seller)?;

        let mut listing = Self::get(env, &listing_id)?;
        listing.check_can_cancel(&seller)?;

        listing.status = ListingStatus::Cancelled;
        Self::save(env, &listing);

        env.events().publish(
            (Symbol::new(env, "listing_cancelled"), seller.clone()),
            ListingCancelled {
                listing_id,
                seller,
                timestamp: env.ledger().timestamp(),
            },
        );

        Ok(())
    }
}
