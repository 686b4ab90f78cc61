use crate::errors::Error;
use crate::storage::*;
use crate::types::*;
use soroban_sdk::{contract, contractimpl, contractmeta, Address, Env, String, Vec};

contractmeta!(
    key = "Description",
    val = "Fee-bearing token with blacklist and whitelist controls"
);

const DECIMALS: u32 = 18;
const MAX_FEE_PCT: u32 = 100;

#[contract]
pub struct FeeTokenContract;

fn config(env: &Env) -> Result<TokenConfig, Error> {
    read_config(env).ok_or(Error::NotInitialized)
}

/// Applies `to += delta` on top of whatever the current balance is, so
/// aliased accounts (fee receiver doubling as recipient) stay consistent.
fn credit(env: &Env, account: &Address, delta: i128) {
    write_balance(env, account, read_balance(env, account) + delta);
}

#[contractimpl]
impl FeeTokenContract {
    /// Mints the full supply to `owner`. Fees start at zero and are
    /// adjusted later through `update_fee`.
    pub fn initialize(
        env: Env,
        owner: Address,
        fee_receiver: Address,
        multisig_wallet: Address,
        initial_supply: i128,
        name: String,
        symbol: String,
        initial_blacklist: Vec<Address>,
    ) -> Result<(), Error> {
        if has_config(&env) {
            return Err(Error::AlreadyInitialized);
        }
        owner.require_auth();

        if initial_supply <= 0 {
            return Err(Error::InvalidAmount);
        }

        write_config(
            &env,
            &TokenConfig {
                owner: owner.clone(),
                fee_receiver,
                multisig_wallet,
                transfer_fee: 0,
                burn_fee: 0,
            },
        );
        write_metadata(
            &env,
            &TokenMetadata {
                decimal: DECIMALS,
                name,
                symbol,
            },
        );
        write_balance(&env, &owner, initial_supply);
        write_total_supply(&env, initial_supply);
        for account in initial_blacklist.iter() {
            set_blacklisted(&env, &account, true);
        }

        env.events()
            .publish(("initialized",), (owner, initial_supply));
        Ok(())
    }

    /// Moves `amount` from `from`, crediting `amount - fee` to `to` and the
    /// fee to the configured fee receiver.
    pub fn transfer(env: Env, from: Address, to: Address, amount: i128) -> Result<(), Error> {
        from.require_auth();

        let cfg = config(&env)?;
        if amount <= 0 {
            return Err(Error::InvalidAmount);
        }
        if is_paused(&env) {
            return Err(Error::Paused);
        }
        if is_blacklisted(&env, &from) {
            return Err(Error::SenderBlacklisted);
        }
        if is_blacklisted(&env, &to) {
            return Err(Error::RecipientBlacklisted);
        }

        let from_balance = read_balance(&env, &from);
        if from_balance < amount {
            return Err(Error::InsufficientBalance);
        }

        let fee = amount * cfg.transfer_fee as i128 / 100;
        write_balance(&env, &from, from_balance - amount);
        credit(&env, &to, amount - fee);
        if fee > 0 {
            credit(&env, &cfg.fee_receiver, fee);
        }

        env.events().publish(("transfer",), (from, to, amount, fee));
        Ok(())
    }

    /// Destroys `amount - fee` from the total supply; the burn fee is routed
    /// to the fee receiver. Burning is deliberately not blocked by pause.
    pub fn burn(env: Env, from: Address, amount: i128) -> Result<(), Error> {
        from.require_auth();

        let cfg = config(&env)?;
        if amount <= 0 {
            return Err(Error::InvalidAmount);
        }

        let from_balance = read_balance(&env, &from);
        if from_balance < amount {
            return Err(Error::InsufficientBalance);
        }

        let fee = amount * cfg.burn_fee as i128 / 100;
        write_balance(&env, &from, from_balance - amount);
        if fee > 0 {
            credit(&env, &cfg.fee_receiver, fee);
        }
        write_total_supply(&env, read_total_supply(&env) - (amount - fee));

        env.events().publish(("burn",), (from, amount, fee));
        Ok(())
    }

    pub fn update_fee(
        env: Env,
        caller: Address,
        transfer_fee: u32,
        burn_fee: u32,
    ) -> Result<(), Error> {
        caller.require_auth();

        let mut cfg = config(&env)?;
        if caller != cfg.owner {
            return Err(Error::NotAuthorized);
        }
        if transfer_fee > MAX_FEE_PCT || burn_fee > MAX_FEE_PCT {
            return Err(Error::InvalidFee);
        }

        cfg.transfer_fee = transfer_fee;
        cfg.burn_fee = burn_fee;
        write_config(&env, &cfg);

        env.events()
            .publish(("fee_updated",), (transfer_fee, burn_fee));
        Ok(())
    }

    pub fn add_blacklist(env: Env, caller: Address, account: Address) -> Result<(), Error> {
        Self::set_list_status(&env, caller, account, None, Some(true))
    }

    pub fn remove_blacklist(env: Env, caller: Address, account: Address) -> Result<(), Error> {
        Self::set_list_status(&env, caller, account, None, Some(false))
    }

    pub fn add_whitelist(env: Env, caller: Address, account: Address) -> Result<(), Error> {
        Self::set_list_status(&env, caller, account, Some(true), None)
    }

    pub fn remove_whitelist(env: Env, caller: Address, account: Address) -> Result<(), Error> {
        Self::set_list_status(&env, caller, account, Some(false), None)
    }

    pub fn update_multisig_wallet(
        env: Env,
        caller: Address,
        new_wallet: Address,
    ) -> Result<(), Error> {
        caller.require_auth();

        let mut cfg = config(&env)?;
        if caller != cfg.multisig_wallet {
            return Err(Error::UnauthorizedCaller);
        }

        cfg.multisig_wallet = new_wallet.clone();
        write_config(&env, &cfg);

        env.events().publish(("multisig_updated",), new_wallet);
        Ok(())
    }

    pub fn pause(env: Env, caller: Address) -> Result<(), Error> {
        caller.require_auth();

        let cfg = config(&env)?;
        if caller != cfg.owner {
            return Err(Error::NotAuthorized);
        }
        set_paused(&env, true);

        env.events().publish(("paused",), ());
        Ok(())
    }

    pub fn unpause(env: Env, caller: Address) -> Result<(), Error> {
        caller.require_auth();

        let cfg = config(&env)?;
        if caller != cfg.owner {
            return Err(Error::NotAuthorized);
        }
        set_paused(&env, false);

        env.events().publish(("unpaused",), ());
        Ok(())
    }

    pub fn transfer_ownership(env: Env, caller: Address, new_owner: Address) -> Result<(), Error> {
        caller.require_auth();

        let mut cfg = config(&env)?;
        if caller != cfg.owner {
            return Err(Error::NotAuthorized);
        }

        cfg.owner = new_owner.clone();
        write_config(&env, &cfg);

        env.events().publish(("ownership_moved",), new_owner);
        Ok(())
    }

    // View functions

    pub fn balance(env: Env, id: Address) -> i128 {
        read_balance(&env, &id)
    }

    pub fn total_supply(env: Env) -> i128 {
        read_total_supply(&env)
    }

    pub fn transfer_fee(env: Env) -> Result<u32, Error> {
        Ok(config(&env)?.transfer_fee)
    }

    pub fn burn_fee(env: Env) -> Result<u32, Error> {
        Ok(config(&env)?.burn_fee)
    }

    pub fn fee_receiver(env: Env) -> Result<Address, Error> {
        Ok(config(&env)?.fee_receiver)
    }

    pub fn multisig_wallet(env: Env) -> Result<Address, Error> {
        Ok(config(&env)?.multisig_wallet)
    }

    pub fn owner(env: Env) -> Result<Address, Error> {
        Ok(config(&env)?.owner)
    }

    pub fn paused(env: Env) -> bool {
        is_paused(&env)
    }

    pub fn is_blacklisted(env: Env, account: Address) -> bool {
        is_blacklisted(&env, &account)
    }

    pub fn is_whitelisted(env: Env, account: Address) -> bool {
        is_whitelisted(&env, &account)
    }

    pub fn decimals(env: Env) -> Result<u32, Error> {
        Ok(read_metadata(&env).ok_or(Error::NotInitialized)?.decimal)
    }

    pub fn name(env: Env) -> Result<String, Error> {
        Ok(read_metadata(&env).ok_or(Error::NotInitialized)?.name)
    }

    pub fn symbol(env: Env) -> Result<String, Error> {
        Ok(read_metadata(&env).ok_or(Error::NotInitialized)?.symbol)
    }
}

impl FeeTokenContract {
    fn set_list_status(
        env: &Env,
        caller: Address,
        account: Address,
        whitelisted: Option<bool>,
        blacklisted: Option<bool>,
    ) -> Result<(), Error> {
        caller.require_auth();

        let cfg = config(env)?;
        if caller != cfg.multisig_wallet {
            return Err(Error::UnauthorizedCaller);
        }

        if let Some(listed) = whitelisted {
            set_whitelisted(env, &account, listed);
        }
        if let Some(listed) = blacklisted {
            set_blacklisted(env, &account, listed);
        }

        let now_whitelisted = is_whitelisted(env, &account);
        let now_blacklisted = is_blacklisted(env, &account);
        env.events().publish(
            ("list_status",),
            (account, now_whitelisted, now_blacklisted),
        );
        Ok(())
    }
}
