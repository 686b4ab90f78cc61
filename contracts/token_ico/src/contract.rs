use crate::errors::Error;
use crate::oracle::PriceFeedClient;
use crate::storage::*;
use crate::types::*;
use soroban_sdk::{contract, contractimpl, contractmeta, token, Address, Env};

contractmeta!(
    key = "Description",
    val = "Capped token sale priced by an external feed"
);

/// Token price in USD, 8 decimal places ($0.10).
const TOKEN_USD_PRICE: i128 = 10_000_000;
/// Per-purchase bounds in USD, 8 decimal places.
const MIN_PURCHASE_USD: i128 = 10_000_000_000; // $100
const MAX_PURCHASE_USD: i128 = 5_000_000_000_000; // $50,000
/// One whole settlement unit (18 decimals).
const UNIT: i128 = 1_000_000_000_000_000_000;

#[contract]
pub struct IcoContract;

fn config(env: &Env) -> Result<SaleConfig, Error> {
    read_config(env).ok_or(Error::NotInitialized)
}

fn require_owner(env: &Env, caller: &Address) -> Result<(), Error> {
    caller.require_auth();
    let owner = read_owner(env).ok_or(Error::NotInitialized)?;
    if *caller != owner {
        return Err(Error::NotAuthorized);
    }
    Ok(())
}

/// Reads the feed and rejects non-positive or stale quotes outright.
fn current_price(env: &Env, cfg: &SaleConfig) -> Result<i128, Error> {
    let data = PriceFeedClient::new(env, &cfg.price_feed).latest_price();
    let now = env.ledger().timestamp();
    if data.price <= 0 || data.timestamp > now || now - data.timestamp > cfg.max_price_age {
        return Err(Error::StalePrice);
    }
    Ok(data.price)
}

fn min_contribution(price: i128) -> i128 {
    MIN_PURCHASE_USD * UNIT / price
}

fn max_contribution(price: i128) -> i128 {
    MAX_PURCHASE_USD * UNIT / price
}

#[contractimpl]
impl IcoContract {
    pub fn initialize(
        env: Env,
        owner: Address,
        token: Address,
        payment_token: Address,
        price_feed: Address,
        soft_cap: i128,
        hard_cap: i128,
        start: u64,
        end: u64,
        project_wallet: Address,
        max_price_age: u64,
    ) -> Result<(), Error> {
        if has_config(&env) {
            return Err(Error::AlreadyInitialized);
        }
        owner.require_auth();

        if soft_cap <= 0 || soft_cap > hard_cap || start >= end || max_price_age == 0 {
            return Err(Error::InvalidConfig);
        }

        write_config(
            &env,
            &SaleConfig {
                token: token.clone(),
                payment_token,
                price_feed: price_feed.clone(),
                soft_cap,
                hard_cap,
                start,
                end,
                project_wallet,
                max_price_age,
            },
        );
        write_owner(&env, &owner);

        env.events()
            .publish(("sale_initialized",), (token, price_feed, soft_cap, hard_cap));
        Ok(())
    }

    /// Buys tokens at the current feed price. `amount` is the settlement
    /// payment; the token quantity follows from the live quote against the
    /// fixed USD token price. Counters are committed before either token
    /// moves.
    pub fn buy_tokens(env: Env, buyer: Address, amount: i128) -> Result<(), Error> {
        buyer.require_auth();

        let cfg = config(&env)?;
        let now = env.ledger().timestamp();
        if now < cfg.start || now > cfg.end {
            return Err(Error::IcoNotActive);
        }
        if amount <= 0 {
            return Err(Error::InvalidAmount);
        }

        let price = current_price(&env, &cfg)?;
        // Bounds are USD-denominated, so they shift with every price move.
        if amount < min_contribution(price) {
            return Err(Error::ContributionTooLow);
        }
        if amount > max_contribution(price) {
            return Err(Error::ContributionTooHigh);
        }

        let tokens = amount * price / TOKEN_USD_PRICE;
        let total_sold = read_total_sold(&env);
        if total_sold + tokens > cfg.hard_cap {
            return Err(Error::HardcapReached);
        }

        let new_total = total_sold + tokens;
        write_contribution(&env, &buyer, read_contribution(&env, &buyer) + amount);
        write_tokens_purchased(&env, &buyer, read_tokens_purchased(&env, &buyer) + tokens);
        write_total_sold(&env, new_total);

        if !is_started(&env) {
            set_started(&env);
            env.events().publish(
                ("ico_started",),
                (cfg.start, cfg.end, cfg.soft_cap, cfg.hard_cap),
            );
        }
        if !is_soft_cap_reached(&env) && new_total >= cfg.soft_cap {
            set_soft_cap_reached(&env);
        }

        let contract = env.current_contract_address();
        token::Client::new(&env, &cfg.payment_token).transfer(&buyer, &contract, &amount);
        token::Client::new(&env, &cfg.token).transfer(&contract, &buyer, &tokens);

        env.events().publish(("purchase",), (buyer, amount, tokens));
        Ok(())
    }

    /// Returns a contributor's settlement payment after a failed sale. The
    /// recorded contribution is zeroed before the refund transfer.
    pub fn claim_refund(env: Env, contributor: Address) -> Result<(), Error> {
        contributor.require_auth();

        let cfg = config(&env)?;
        if env.ledger().timestamp() <= cfg.end {
            return Err(Error::IcoNotEnded);
        }
        if is_soft_cap_reached(&env) {
            return Err(Error::SoftCapReached);
        }

        let contribution = read_contribution(&env, &contributor);
        if contribution == 0 {
            return Err(Error::NoContribution);
        }

        write_contribution(&env, &contributor, 0);
        token::Client::new(&env, &cfg.payment_token).transfer(
            &env.current_contract_address(),
            &contributor,
            &contribution,
        );

        env.events().publish(("refund",), (contributor, contribution));
        Ok(())
    }

    /// Sweeps the raised settlement balance to the project wallet once the
    /// sale is a success.
    pub fn release_funds(env: Env, caller: Address) -> Result<(), Error> {
        require_owner(&env, &caller)?;

        let cfg = config(&env)?;
        if !is_soft_cap_reached(&env) {
            return Err(Error::SoftcapNotReached);
        }

        let client = token::Client::new(&env, &cfg.payment_token);
        let raised = client.balance(&env.current_contract_address());
        if raised > 0 {
            client.transfer(&env.current_contract_address(), &cfg.project_wallet, &raised);
        }

        env.events().publish(("funds_released",), raised);
        Ok(())
    }

    pub fn recover_unsold_tokens(env: Env, caller: Address, to: Address) -> Result<(), Error> {
        require_owner(&env, &caller)?;

        let cfg = config(&env)?;
        if env.ledger().timestamp() <= cfg.end {
            return Err(Error::IcoNotEnded);
        }

        set_unsold_recovered(&env);

        let client = token::Client::new(&env, &cfg.token);
        let unsold = client.balance(&env.current_contract_address());
        if unsold > 0 {
            client.transfer(&env.current_contract_address(), &to, &unsold);
        }

        env.events().publish(("unsold_recovered",), (to, unsold));
        Ok(())
    }

    pub fn finalize(env: Env, caller: Address) -> Result<(), Error> {
        require_owner(&env, &caller)?;

        if !is_unsold_recovered(&env) {
            return Err(Error::UnsoldTokensNotRecovered);
        }
        set_finalized(&env);

        env.events().publish(("finalized",), ());
        Ok(())
    }

    /// Residual-settlement cleanup, only once the sale is fully wound down.
    pub fn emergency_withdraw(env: Env, caller: Address, to: Address) -> Result<(), Error> {
        require_owner(&env, &caller)?;

        let cfg = config(&env)?;
        if !is_finalized(&env) {
            return Err(Error::NotFinalized);
        }

        let client = token::Client::new(&env, &cfg.payment_token);
        let residual = client.balance(&env.current_contract_address());
        if residual > 0 {
            client.transfer(&env.current_contract_address(), &to, &residual);
        }

        env.events().publish(("emergency_withdraw",), (to, residual));
        Ok(())
    }

    // View functions

    pub fn get_min_contribution(env: Env) -> Result<i128, Error> {
        let cfg = config(&env)?;
        Ok(min_contribution(current_price(&env, &cfg)?))
    }

    pub fn get_max_contribution(env: Env) -> Result<i128, Error> {
        let cfg = config(&env)?;
        Ok(max_contribution(current_price(&env, &cfg)?))
    }

    pub fn get_contribution(env: Env, contributor: Address) -> i128 {
        read_contribution(&env, &contributor)
    }

    pub fn get_tokens_purchased(env: Env, contributor: Address) -> i128 {
        read_tokens_purchased(&env, &contributor)
    }

    pub fn total_tokens_sold(env: Env) -> i128 {
        read_total_sold(&env)
    }

    pub fn soft_cap_reached(env: Env) -> bool {
        is_soft_cap_reached(&env)
    }

    pub fn sale_started(env: Env) -> bool {
        is_started(&env)
    }

    pub fn unsold_recovered(env: Env) -> bool {
        is_unsold_recovered(&env)
    }

    pub fn finalized(env: Env) -> bool {
        is_finalized(&env)
    }

    pub fn get_config(env: Env) -> Result<SaleConfig, Error> {
        config(&env)
    }
}
