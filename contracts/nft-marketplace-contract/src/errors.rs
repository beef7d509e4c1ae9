use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum MarketplaceError {
    NotInitialized = 1,
    AlreadyInitialized = 2,

    // Authorization
    Blacklisted = 101,
    NotSeller = 102,
    NotAdmin = 103,
    SelfPurchase = 104,

    // Listing state
    ListingNotFound = 201,
    ListingNotActive = 202,
    ListingAlreadyActive = 203,
    WrongListingMode = 204,
    AuctionEnded = 205,
    AuctionNotEnded = 206,
    AuctionHasBids = 207,

    // Values
    InvalidPrice = 301,
    InvalidDuration = 302,
    InvalidQuantity = 303,
    PaymentMismatch = 304,
    BidTooLow = 305,
    InvalidFeeConfig = 306,
    ArithmeticOverflow = 307,
    NothingToWithdraw = 308,

    // Collaborator transfers
    InsufficientBalance = 401,
    InsufficientAllowance = 402,
    AssetNotOwned = 403,
    AssetNotApproved = 404,
    UnsupportedAsset = 405,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Lifecycle,
    Authorization,
    State,
    Value,
    Transfer,
}

impl MarketplaceError {
    /// Classifies the error by its code range.
    pub fn kind(&self) -> ErrorKind {
        match *self as u32 {
            100..=199 => ErrorKind::Authorization,
            200..=299 => ErrorKind::State,
            300..=399 => ErrorKind::Value,
            400..=499 => ErrorKind::Transfer,
            _ => ErrorKind::Lifecycle,
        }
    }
}
