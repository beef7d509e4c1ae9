use soroban_sdk::{contractclient, Address};

/// Interface of asset contracts holding indivisible units, one owner per token id.
#[allow(dead_code)]
#[contractclient(name = "SingleUnitAssetClient")]
pub trait SingleUnitAsset {
    fn owner_of(token_id: u64) -> Address;

    fn get_approved(token_id: u64) -> Option<Address>;

    fn is_approved_for_all(owner: Address, operator: Address) -> bool;

    /// Moves `token_id` from `from` to `to`; `spender` must be the owner or approved.
    fn transfer_from(spender: Address, from: Address, to: Address, token_id: u64);
}

/// Interface of asset contracts holding a fungible balance per token id.
#[allow(dead_code)]
#[contractclient(name = "MultiUnitAssetClient")]
pub trait MultiUnitAsset {
    fn balance_of(account: Address, id: u64) -> u64;

    fn is_approved_for_all(owner: Address, operator: Address) -> bool;

    /// Moves `amount` units of `id` from `from` to `to`; `spender` must be the owner or an operator.
    fn transfer_from(spender: Address, from: Address, to: Address, id: u64, amount: u64);
}
