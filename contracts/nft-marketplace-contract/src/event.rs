use soroban_sdk::{contracttype, Address, BytesN};

use crate::types::{ListingMode, ListingStatus, PaymentToken};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ListingCreated {
    pub listing_id: BytesN<32>,
    pub seller: Address,
    pub asset_contract: Address,
    pub token_id: u64,
    pub quantity: u64,
    pub payment_token: PaymentToken,
    pub price: i128,
    pub mode: ListingMode,
    pub auction_end_time: Option<u64>,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ListingCancelled {
    pub listing_id: BytesN<32>,
    pub seller: Address,
    pub timestamp: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ListingSold {
    pub listing_id: BytesN<32>,
    pub seller: Address,
    pub buyer: Address,
    pub price: i128,
    pub marketplace_fee: i128,
    pub royalty_fee: i128,
    pub seller_proceeds: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BidPlaced {
    pub listing_id: BytesN<32>,
    pub bidder: Address,
    pub amount: i128,
    pub auction_end_time: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RefundCredited {
    pub listing_id: BytesN<32>,
    pub bidder: Address,
    pub token: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RefundWithdrawn {
    pub bidder: Address,
    pub token: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionFinalized {
    pub listing_id: BytesN<32>,
    pub winner: Option<Address>,
    pub final_price: i128,
    pub status: ListingStatus,
    pub timestamp: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UserBlacklisted {
    pub user: Address,
    pub banned: bool,
}
