use crate::access::AccessControl;
use crate::auction::AuctionEngine;
use crate::config::ConfigManager;
use crate::errors::MarketplaceError;
use crate::listing::ListingRegistry;
use crate::settlement::Settlement;
use crate::traits::MarketplaceTrait;
use crate::types::*;
use soroban_sdk::{contract, contractimpl, Address, BytesN, Env};

#[contract]
pub struct MarketplaceContract;

#[contractimpl]
impl MarketplaceTrait for MarketplaceContract {
    fn initialize(
        env: Env,
        admin: Address,
        native_token: Address,
        fee_config: FeeConfig,
    ) -> Result<(), MarketplaceError> {
        ConfigManager::init(&env, &admin, &native_token, &fee_config)
    }

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
    ) -> Result<BytesN<32>, MarketplaceError> {
        seller.require_auth();
        ListingRegistry::create(
            &env,
            seller,
            asset_contract,
            token_id,
            quantity,
            payment_token,
            price,
            mode,
            duration,
        )
    }

    fn get_listing_id(
        env: Env,
        seller: Address,
        asset_contract: Address,
        token_id: u64,
        mode: ListingMode,
    ) -> BytesN<32> {
        ListingRegistry::compute_id(&env, &seller, &asset_contract, token_id, mode)
    }

    fn buy_nft(
        env: Env,
        buyer: Address,
        listing_id: BytesN<32>,
        native_amount: Option<i128>,
    ) -> Result<(), MarketplaceError> {
        buyer.require_auth();
        Settlement::buy(&env, buyer, listing_id, native_amount)
    }

    fn place_bid(
        env: Env,
        bidder: Address,
        listing_id: BytesN<32>,
        amount: i128,
    ) -> Result<(), MarketplaceError> {
        bidder.require_auth();
        AuctionEngine::place_bid(&env, bidder, listing_id, amount)
    }

    fn finalize_auction(env: Env, listing_id: BytesN<32>) -> Result<(), MarketplaceError> {
        AuctionEngine::finalize(&env, listing_id)
    }

    fn cancel_listing(
        env: Env,
        seller: Address,
        listing_id: BytesN<32>,
    ) -> Result<(), MarketplaceError> {
        seller.require_auth();
        ListingRegistry::cancel(&env, seller, listing_id)
    }

    fn listings(env: Env, listing_id: BytesN<32>) -> Result<Listing, MarketplaceError> {
        ListingRegistry::get(&env, &listing_id)
    }

    fn withdraw_refund(
        env: Env,
        bidder: Address,
        payment_token: PaymentToken,
    ) -> Result<i128, MarketplaceError> {
        bidder.require_auth();
        AuctionEngine::withdraw_refund(&env, bidder, payment_token)
    }

    fn pending_refund(
        env: Env,
        bidder: Address,
        payment_token: PaymentToken,
    ) -> Result<i128, MarketplaceError> {
        AuctionEngine::pending_refund(&env, &bidder, &payment_token)
    }

    fn blacklist_user(
        env: Env,
        admin: Address,
        user: Address,
        banned: bool,
    ) -> Result<(), MarketplaceError> {
        AccessControl::set_blacklisted(&env, &admin, &user, banned)
    }

    fn is_blacklisted(env: Env, user: Address) -> bool {
        AccessControl::is_blacklisted(&env, &user)
    }

    fn get_fee_config(env: Env) -> Result<FeeConfig, MarketplaceError> {
        ConfigManager::get_fee_config(&env)
    }

    fn update_fee_config(
        env: Env,
        admin: Address,
        fee_config: FeeConfig,
    ) -> Result<(), MarketplaceError> {
        ConfigManager::update_fee_config(&env, &admin, &fee_config)
    }

    fn get_admin(env: Env) -> Result<Address, MarketplaceError> {
        ConfigManager::get_admin(&env)
    }

    fn transfer_admin(
        env: Env,
        admin: Address,
        new_admin: Address,
    ) -> Result<(), MarketplaceError> {
        ConfigManager::transfer_admin(&env, &admin, &new_admin)
    }

    fn get_native_token(env: Env) -> Result<Address, MarketplaceError> {
        ConfigManager::get_native_token(&env)
    }
}
