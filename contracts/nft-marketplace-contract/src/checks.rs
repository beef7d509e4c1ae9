use soroban_sdk::{Address, Env};

use crate::{errors::MarketplaceError, types::*};

impl Listing {
    pub fn is_active(&self) -> bool {
        self.status == ListingStatus::Active
    }

    /// True once the listing was sold, cancelled or expired without bids
    pub fn is_terminal(&self) -> bool {
        !self.is_active()
    }

    fn ensure_active(&self) -> Result<(), MarketplaceError> {
        if !self.is_active() {
            return Err(MarketplaceError::ListingNotActive);
        }
        Ok(())
    }

    fn ensure_mode(&self, mode: ListingMode) -> Result<(), MarketplaceError> {
        if self.mode != mode {
            return Err(MarketplaceError::WrongListingMode);
        }
        Ok(())
    }

    pub fn check_can_buy(
        &self,
        buyer: &Address,
        native_amount: &Option<i128>,
    ) -> Result<(), MarketplaceError> {
        self.ensure_active()?;
        self.ensure_mode(ListingMode::FixedPrice)?;

        if buyer == &self.seller {
            return Err(MarketplaceError::SelfPurchase);
        }

        // Native payments must carry exactly the price; token payments carry nothing
        match (&self.payment_token, native_amount) {
            (PaymentToken::Native, Some(amount)) if *amount == self.price => Ok(()),
            (PaymentToken::Token(_), None) => Ok(()),
            _ => Err(MarketplaceError::PaymentMismatch),
        }
    }

    pub fn check_can_bid(
        &self,
        env: &Env,
        bidder: &Address,
        amount: i128,
    ) -> Result<(), MarketplaceError> {
        self.ensure_active()?;
        self.ensure_mode(ListingMode::Auction)?;

        if bidder == &self.seller {
            return Err(MarketplaceError::SelfPurchase);
        }

        let end_time = self
            .auction_end_time
            .ok_or(MarketplaceError::WrongListingMode)?;
        if env.ledger().timestamp() >= end_time {
            return Err(MarketplaceError::AuctionEnded);
        }

        // First bid may meet the starting price; later bids must beat the highest
        let too_low = match self.highest_bidder {
            Some(_) => amount <= self.highest_bid,
            None => amount < self.price,
        };
        if too_low {
            return Err(MarketplaceError::BidTooLow);
        }

        Ok(())
    }

    pub fn check_can_finalize(&self, env: &Env) -> Result<(), MarketplaceError> {
        self.ensure_active()?;
        self.ensure_mode(ListingMode::Auction)?;

        let end_time = self
            .auction_end_time
            .ok_or(MarketplaceError::WrongListingMode)?;
        if env.ledger().timestamp() < end_time {
            return Err(MarketplaceError::AuctionNotEnded);
        }

        Ok(())
    }

    pub fn check_can_cancel(&self, seller: &Address) -> Result<(), MarketplaceError> {
        if seller != &self.seller {
            return Err(MarketplaceError::NotSeller);
        }

        self.ensure_active()?;

        // An auction with a standing bid runs to completion
        if self.highest_bidder.is_some() {
            return Err(MarketplaceError::AuctionHasBids);
        }

        Ok(())
    }
}
