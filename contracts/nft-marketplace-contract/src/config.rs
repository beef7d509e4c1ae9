use crate::access::AccessControl;
use crate::errors::MarketplaceError;
use crate::types::{DataKey, FeeConfig, PaymentToken};
use soroban_sdk::{Address, Env, Symbol};

pub const BPS_DENOMINATOR: u32 = 10_000;

pub struct ConfigManager;

impl ConfigManager {
    /// Initialize the marketplace; deployment and initialization are separate steps
    pub fn init(
        env: &Env,
        admin: &Address,
        native_token: &Address,
        fee_config: &FeeConfig,
    ) -> Result<(), MarketplaceError> {
        if env.storage().instance().has(&DataKey::Admin) {
            return Err(MarketplaceError::AlreadyInitialized);
        }

        admin.require_auth();
        fee_config.validate()?;

        env.storage().instance().set(&DataKey::Admin, admin);
        env.storage()
            .instance()
            .set(&DataKey::NativeToken, native_token);
        env.storage().instance().set(&DataKey::FeeConfig, fee_config);

        env.events().publish(
            (Symbol::new(env, "marketplace_initialized"), admin.clone()),
            fee_config.clone(),
        );

        Ok(())
    }

    pub fn get_admin(env: &Env) -> Result<Address, MarketplaceError> {
        env.storage()
            .instance()
            .get(&DataKey::Admin)
            .ok_or(MarketplaceError::NotInitialized)
    }

    pub fn transfer_admin(
        env: &Env,
        admin: &Address,
        new_admin: &Address,
    ) -> Result<(), MarketplaceError> {
        AccessControl::verify_admin(env, admin)?;

        env.storage().instance().set(&DataKey::Admin, new_admin);

        env.events().publish(
            (Symbol::new(env, "admin_transferred"), admin.clone()),
            new_admin.clone(),
        );

        Ok(())
    }

    pub fn get_fee_config(env: &Env) -> Result<FeeConfig, MarketplaceError> {
        env.storage()
            .instance()
            .get(&DataKey::FeeConfig)
            .ok_or(MarketplaceError::NotInitialized)
    }

    pub fn update_fee_config(
        env: &Env,
        admin: &Address,
        fee_config: &FeeConfig,
    ) -> Result<(), MarketplaceError> {
        AccessControl::verify_admin(env, admin)?;
        fee_config.validate()?;

        env.storage().instance().set(&DataKey::FeeConfig, fee_config);

        env.events().publish(
            (Symbol::new(env, "fee_config_updated"), admin.clone()),
            fee_config.clone(),
        );

        Ok(())
    }

    pub fn get_native_token(env: &Env) -> Result<Address, MarketplaceError> {
        env.storage()
            .instance()
            .get(&DataKey::NativeToken)
            .ok_or(MarketplaceError::NotInitialized)
    }

    /// Token contract that settles payments for `payment_token`
    pub fn settlement_token(
        env: &Env,
        payment_token: &PaymentToken,
    ) -> Result<Address, MarketplaceError> {
        match payment_token {
            PaymentToken::Native => Self::get_native_token(env),
            PaymentToken::Token(token) => Ok(token.clone()),
        }
    }
}

impl FeeConfig {
    pub fn validate(&self) -> Result<(), MarketplaceError> {
        let total_bps = self.marketplace_fee_bps as u64 + self.royalty_fee_bps as u64;
        if total_bps > BPS_DENOMINATOR as u64 {
            return Err(MarketplaceError::InvalidFeeConfig);
        }

        if self.minimum_price_unit <= 0 {
            return Err(MarketplaceError::InvalidFeeConfig);
        }

        Ok(())
    }

    /// Royalty share in basis points, zero when no recipient is configured
    pub fn effective_royalty_bps(&self) -> u32 {
        match self.royalty_recipient {
            Some(_) => self.royalty_fee_bps,
            None => 0,
        }
    }
}
