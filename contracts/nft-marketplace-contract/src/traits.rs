use crate::errors::MarketplaceError;
use crate::types::*;
use soroban_sdk::{Address, BytesN, Env};

/// Interface for the NFT marketplace contract.
pub trait MarketplaceTrait {
    /// One-time setup after deployment: administrator, native settlement token and fees.
    fn initialize(
        env: Env,
        admin: Address,
        native_token: Address,
        fee_config: FeeConfig,
    ) -> Result<(), MarketplaceError>;

    /// List `quantity` units of `token_id` for sale. The asset stays with the seller,
    /// who must have approved the marketplace as operator.
    fn list_nft(
        env: Env,
        seller: Address,
        asset_contract: Address,
        token_id: u64,
        quantity: u64,
        payment_token: PaymentToken,
        price: i128,
        mode: ListingMode,
        duration: u64,
    ) -> Result<BytesN<32>, MarketplaceError>;

    fn get_listing_id(
        env: Env,
        seller: Address,
        asset_contract: Address,
        token_id: u64,
        mode: ListingMode,
    ) -> BytesN<32>;

    /// Buy a fixed-price listing. `native_amount` must equal the price for native
    /// listings and be `None` for token listings.
    fn buy_nft(
        env: Env,
        buyer: Address,
        listing_id: BytesN<32>,
        native_amount: Option<i128>,
    ) -> Result<(), MarketplaceError>;

    fn place_bid(
        env: Env,
        bidder: Address,
        listing_id: BytesN<32>,
        amount: i128,
    ) -> Result<(), MarketplaceError>;

    /// Settle or expire an auction once its end time has passed. Permissionless.
    fn finalize_auction(env: Env, listing_id: BytesN<32>) -> Result<(), MarketplaceError>;

    fn cancel_listing(
        env: Env,
        seller: Address,
        listing_id: BytesN<32>,
    ) -> Result<(), MarketplaceError>;

    fn listings(env: Env, listing_id: BytesN<32>) -> Result<Listing, MarketplaceError>;

    fn withdraw_refund(
        env: Env,
        bidder: Address,
        payment_token: PaymentToken,
    ) -> Result<i128, MarketplaceError>;

    fn pending_refund(
        env: Env,
        bidder: Address,
        payment_token: PaymentToken,
    ) -> Result<i128, MarketplaceError>;

    fn blacklist_user(
        env: Env,
        admin: Address,
        user: Address,
        banned: bool,
    ) -> Result<(), MarketplaceError>;

    fn is_blacklisted(env: Env, user: Address) -> bool;

    fn get_fee_config(env: Env) -> Result<FeeConfig, MarketplaceError>;

    fn update_fee_config(
        env: Env,
        admin: Address,
        fee_config: FeeConfig,
    ) -> Result<(), MarketplaceError>;

    fn get_admin(env: Env) -> Result<Address, MarketplaceError>;

    fn transfer_admin(env: Env, admin: Address, new_admin: Address)
        -> Result<(), MarketplaceError>;

    fn get_native_token(env: Env) -> Result<Address, MarketplaceError>;
}
