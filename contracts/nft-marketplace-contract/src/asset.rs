use soroban_sdk::{Address, Env};

use crate::errors::MarketplaceError;
use crate::external::{MultiUnitAssetClient, SingleUnitAssetClient};
use crate::types::AssetKind;

impl AssetKind {
    /// Detects which transfer interface `asset_contract` exposes for `token_id`.
    ///
    /// The single-unit interface is tried first; a contract that answers
    /// `owner_of` for the token is treated as single-unit even if it also
    /// answers `balance_of`.
    pub fn probe(
        env: &Env,
        asset_contract: &Address,
        owner: &Address,
        token_id: u64,
    ) -> Result<AssetKind, MarketplaceError> {
        let single = SingleUnitAssetClient::new(env, asset_contract);
        if let Ok(Ok(_)) = single.try_owner_of(&token_id) {
            return Ok(AssetKind::SingleUnit);
        }

        let multi = MultiUnitAssetClient::new(env, asset_contract);
        if let Ok(Ok(_)) = multi.try_balance_of(owner, &token_id) {
            return Ok(AssetKind::MultiUnit);
        }

        Err(MarketplaceError::UnsupportedAsset)
    }

    pub fn validate_quantity(&self, quantity: u64) -> Result<(), MarketplaceError> {
        match self {
            AssetKind::SingleUnit if quantity != 1 => Err(MarketplaceError::InvalidQuantity),
            AssetKind::MultiUnit if quantity == 0 => Err(MarketplaceError::InvalidQuantity),
            _ => Ok(()),
        }
    }

    /// Verifies `owner` holds the units and the marketplace may move them. Nothing is transferred.
    pub fn ensure_transferable(
        &self,
        env: &Env,
        asset_contract: &Address,
        owner: &Address,
        token_id: u64,
        quantity: u64,
    ) -> Result<(), MarketplaceError> {
        let operator = env.current_contract_address();

        match self {
            AssetKind::SingleUnit => {
                let client = SingleUnitAssetClient::new(env, asset_contract);
                let current_owner = match client.try_owner_of(&token_id) {
                    Ok(Ok(current_owner)) => current_owner,
                    _ => return Err(MarketplaceError::AssetNotOwned),
                };
                if &current_owner != owner {
                    return Err(MarketplaceError::AssetNotOwned);
                }

                let approved = client.get_approved(&token_id) == Some(operator.clone())
                    || client.is_approved_for_all(owner, &operator);
                if !approved {
                    return Err(MarketplaceError::AssetNotApproved);
                }
            }
            AssetKind::MultiUnit => {
                let client = MultiUnitAssetClient::new(env, asset_contract);
                if client.balance_of(owner, &token_id) < quantity {
                    return Err(MarketplaceError::AssetNotOwned);
                }
                if !client.is_approved_for_all(owner, &operator) {
                    return Err(MarketplaceError::AssetNotApproved);
                }
            }
        }

        Ok(())
    }

    /// Moves the listed units from `from` to `to`, with the marketplace acting as spender.
    pub fn transfer(
        &self,
        env: &Env,
        asset_contract: &Address,
        from: &Address,
        to: &Address,
        token_id: u64,
        quantity: u64,
    ) {
        let spender = env.current_contract_address();

        match self {
            AssetKind::SingleUnit => {
                SingleUnitAssetClient::new(env, asset_contract)
                    .transfer_from(&spender, from, to, &token_id);
            }
            AssetKind::MultiUnit => {
                MultiUnitAssetClient::new(env, asset_contract)
                    .transfer_from(&spender, from, to, &token_id, &quantity);
            }
        }
    }
}
