use soroban_sdk::{contracttype, Address, BytesN};

/// Storage keys. New variants go at the end so existing entries keep their encoding.
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Admin,                   // Contract administrator (instance)
    NativeToken,             // Stellar Asset Contract of the native currency (instance)
    FeeConfig,               // Fee and treasury configuration (instance)
    Listing(BytesN<32>),     // Listing record by derived id (persistent)
    Banned(Address),         // Ban list membership (persistent)
    Refund(Address, Address), // Outbid refunds owed, by (bidder, token) (persistent)
}

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ListingMode {
    FixedPrice = 0,
    Auction = 1,
}

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ListingStatus {
    Active = 0,
    Sold = 1,
    Cancelled = 2,
    ExpiredNoBids = 3,
    // Auction ended but the seller could no longer deliver; winning bid refunded
    Undeliverable = 4,
}

/// Transfer capability an asset contract exposes, resolved once at listing time.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum AssetKind {
    SingleUnit = 0,
    MultiUnit = 1,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum PaymentToken {
    Native,
    Token(Address),
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Listing {
    pub id: BytesN<32>,
    pub seller: Address,
    pub asset_contract: Address,
    pub token_id: u64,
    pub quantity: u64,
    pub asset_kind: AssetKind,
    pub payment_token: PaymentToken,
    pub price: i128,
    pub mode: ListingMode,
    pub auction_duration: u64,
    pub auction_end_time: Option<u64>,
    pub highest_bidder: Option<Address>,
    pub highest_bid: i128,
    pub status: ListingStatus,
    pub created_at: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FeeConfig {
    pub treasury: Address,
    pub royalty_recipient: Option<Address>,
    pub marketplace_fee_bps: u32, // 0-10000 representing 0-100%
    pub royalty_fee_bps: u32,
    pub minimum_price_unit: i128,
}
