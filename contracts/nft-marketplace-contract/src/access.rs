use crate::errors::MarketplaceError;
use crate::event::UserBlacklisted;
use crate::types::DataKey;
use soroban_sdk::{Address, Env, Symbol};

pub struct AccessControl;

impl AccessControl {
    /// Verify `admin` is the stored administrator and has signed the call
    pub fn verify_admin(env: &Env, admin: &Address) -> Result<(), MarketplaceError> {
        let contract_admin: Address = env
            .storage()
            .instance()
            .get(&DataKey::Admin)
            .ok_or(MarketplaceError::NotInitialized)?;

        if admin != &contract_admin {
            return Err(MarketplaceError::NotAdmin);
        }

        admin.require_auth();

        Ok(())
    }

    /// Add or remove `user` from the ban list
    pub fn set_blacklisted(
        env: &Env,
        admin: &Address,
        user: &Address,
        banned: bool,
    ) -> Result<(), MarketplaceError> {
        Self::verify_admin(env, admin)?;

        let key = DataKey::Banned(user.clone());
        if banned {
            env.storage().persistent().set(&key, &true);
        } else {
            env.storage().persistent().remove(&key);
        }

        env.events().publish(
            (Symbol::new(env, "user_blacklisted"), user.clone()),
            UserBlacklisted {
                user: user.clone(),
                banned,
            },
        );

        Ok(())
    }

    pub fn is_blacklisted(env: &Env, user: &Address) -> bool {
        env.storage()
            .persistent()
            .has(&DataKey::Banned(user.clone()))
    }

    /// Gate for every state-changing entry point; runs before any mutation
    pub fn ensure_not_blacklisted(env: &Env, user: &Address) -> Result<(), MarketplaceError> {
        if Self::is_blacklisted(env, user) {
            return Err(MarketplaceError::Blacklisted);
        }

        Ok(())
    }
}
