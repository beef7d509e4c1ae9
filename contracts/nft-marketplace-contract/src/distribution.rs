use soroban_sdk::{token, Address, Env};

use crate::errors::MarketplaceError;
use crate::types::PaymentToken;

// Check that `payer` can cover `amount` the way `payment_token` is collected
pub fn ensure_payment_available(
    env: &Env,
    payment_token: &PaymentToken,
    token: &Address,
    payer: &Address,
    amount: i128,
) -> Result<(), MarketplaceError> {
    let client = token::Client::new(env, token);

    if client.balance(payer) < amount {
        return Err(MarketplaceError::InsufficientBalance);
    }

    if let PaymentToken::Token(_) = payment_token {
        if client.allowance(payer, &env.current_contract_address()) < amount {
            return Err(MarketplaceError::InsufficientAllowance);
        }
    }

    Ok(())
}

// Pull funds into the contract: native value is signed by the payer, tokens spend the allowance
pub fn collect_payment(
    env: &Env,
    payment_token: &PaymentToken,
    token: &Address,
    payer: &Address,
    amount: &i128,
) {
    let client = token::Client::new(env, token);
    let contract = env.current_contract_address();

    match payment_token {
        PaymentToken::Native => client.transfer(payer, &contract, amount),
        PaymentToken::Token(_) => client.transfer_from(&contract, payer, &contract, amount),
    }
}

// Transfer tokens from contract
pub fn transfer_from_contract(env: &Env, token: &Address, to: &Address, amount: &i128) {
    if *amount <= 0 {
        return;
    }
    token::Client::new(env, token).transfer(&env.current_contract_address(), to, amount);
}
