use crate::errors::Error;
use crate::storage::*;
use crate::types::*;
use soroban_sdk::{contract, contractimpl, contractmeta, token, Address, Env, Vec};

contractmeta!(
    key = "Description",
    val = "Cliff and linear vesting of a pre-funded token balance"
);

/// Founder schedules carry no explicit end date; they accrue linearly from
/// `start` over one year, gated by the cliff.
const FOUNDER_VESTING_DURATION: u64 = 365 * 24 * 60 * 60;

#[contract]
pub struct VestingContract;

fn require_owner(env: &Env, caller: &Address) -> Result<(), Error> {
    caller.require_auth();
    let owner = read_owner(env).ok_or(Error::NotInitialized)?;
    if *caller != owner {
        return Err(Error::NotAuthorized);
    }
    Ok(())
}

fn token_client<'a>(env: &'a Env) -> Result<token::Client<'a>, Error> {
    let token = read_token(env).ok_or(Error::NotInitialized)?;
    Ok(token::Client::new(env, &token))
}

/// Amount claimable right now: zero before the cliff and after revocation,
/// otherwise the linear accrual between `start` and `end` minus what has
/// already been released.
fn releasable(schedule: &VestingSchedule, now: u64) -> i128 {
    if schedule.revoked || now < schedule.cliff {
        return 0;
    }
    let vested = if now >= schedule.end {
        schedule.total_amount
    } else {
        let elapsed = (now - schedule.start) as i128;
        let duration = (schedule.end - schedule.start) as i128;
        schedule.total_amount * elapsed / duration
    };
    vested - schedule.released
}

#[contractimpl]
impl VestingContract {
    pub fn initialize(env: Env, owner: Address, token: Address) -> Result<(), Error> {
        if has_token(&env) {
            return Err(Error::AlreadyInitialized);
        }
        owner.require_auth();

        write_token(&env, &token);
        write_owner(&env, &owner);
        write_obligation(&env, 0);

        env.events().publish(("initialized",), token);
        Ok(())
    }

    pub fn add_founder(
        env: Env,
        caller: Address,
        beneficiary: Address,
        total_amount: i128,
        start: u64,
        cliff: u64,
    ) -> Result<(), Error> {
        let end = start.saturating_add(FOUNDER_VESTING_DURATION);
        Self::add_schedule(&env, caller, beneficiary, total_amount, start, cliff, end)
    }

    pub fn add_contributor(
        env: Env,
        caller: Address,
        beneficiary: Address,
        total_amount: i128,
        start: u64,
        cliff: u64,
        end: u64,
    ) -> Result<(), Error> {
        Self::add_schedule(&env, caller, beneficiary, total_amount, start, cliff, end)
    }

    /// Pays out whatever has accrued for `beneficiary`. State is committed
    /// before the token leaves the contract.
    pub fn release(env: Env, beneficiary: Address) -> Result<(), Error> {
        beneficiary.require_auth();

        let mut schedule = read_schedule(&env, &beneficiary).ok_or(Error::NothingToRelease)?;
        let now = env.ledger().timestamp();
        let amount = releasable(&schedule, now);
        if amount <= 0 {
            return Err(Error::NothingToRelease);
        }

        schedule.released += amount;
        write_schedule(&env, &beneficiary, &schedule);
        write_obligation(&env, read_obligation(&env) - amount);

        token_client(&env)?.transfer(&env.current_contract_address(), &beneficiary, &amount);

        env.events().publish(("released",), (beneficiary, amount));
        Ok(())
    }

    /// Freezes a schedule. Tokens already released stay with the
    /// beneficiary; everything unreleased returns to the recoverable pool.
    pub fn revoke_vesting(env: Env, caller: Address, beneficiary: Address) -> Result<(), Error> {
        require_owner(&env, &caller)?;

        let mut schedule = read_schedule(&env, &beneficiary).ok_or(Error::ScheduleNotFound)?;
        if schedule.revoked {
            return Ok(());
        }

        let remainder = schedule.total_amount - schedule.released;
        schedule.revoked = true;
        write_schedule(&env, &beneficiary, &schedule);
        write_obligation(&env, read_obligation(&env) - remainder);

        env.events().publish(("revoked",), (beneficiary, remainder));
        Ok(())
    }

    /// Withdraws tokens the contract holds beyond its outstanding vesting
    /// obligations.
    pub fn recover_unused_tokens(
        env: Env,
        caller: Address,
        to: Address,
        amount: i128,
    ) -> Result<(), Error> {
        require_owner(&env, &caller)?;

        if amount <= 0 {
            return Err(Error::AmountZero);
        }
        let client = token_client(&env)?;
        let surplus = client.balance(&env.current_contract_address()) - read_obligation(&env);
        if amount > surplus {
            return Err(Error::CannotWithdrawVestedTokens);
        }

        client.transfer(&env.current_contract_address(), &to, &amount);

        env.events().publish(("recovered",), (to, amount));
        Ok(())
    }

    // View functions

    pub fn releasable_amount(env: Env, beneficiary: Address) -> i128 {
        match read_schedule(&env, &beneficiary) {
            Some(schedule) => releasable(&schedule, env.ledger().timestamp()),
            None => 0,
        }
    }

    pub fn contract_token_balance(env: Env) -> Result<i128, Error> {
        Ok(token_client(&env)?.balance(&env.current_contract_address()))
    }

    pub fn total_unclaimed_obligation(env: Env) -> i128 {
        read_obligation(&env)
    }

    pub fn get_vested_accounts(env: Env) -> Vec<Address> {
        read_accounts(&env)
    }

    pub fn get_schedule(env: Env, beneficiary: Address) -> Option<VestingSchedule> {
        read_schedule(&env, &beneficiary)
    }

    pub fn token(env: Env) -> Result<Address, Error> {
        read_token(&env).ok_or(Error::NotInitialized)
    }

    pub fn owner(env: Env) -> Result<Address, Error> {
        read_owner(&env).ok_or(Error::NotInitialized)
    }
}

impl VestingContract {
    fn add_schedule(
        env: &Env,
        caller: Address,
        beneficiary: Address,
        total_amount: i128,
        start: u64,
        cliff: u64,
        end: u64,
    ) -> Result<(), Error> {
        require_owner(env, &caller)?;

        if total_amount <= 0 {
            return Err(Error::AmountZero);
        }
        if start < env.ledger().timestamp() {
            return Err(Error::StartDateInPast);
        }
        if cliff <= start || end <= start {
            return Err(Error::EndBeforeStart);
        }
        if read_schedule(env, &beneficiary).is_some() {
            return Err(Error::AlreadyVested);
        }

        let obligation = read_obligation(env);
        let balance = token_client(env)?.balance(&env.current_contract_address());
        if total_amount > balance - obligation {
            return Err(Error::InsufficientTokensForVesting);
        }

        write_schedule(
            env,
            &beneficiary,
            &VestingSchedule {
                total_amount,
                released: 0,
                start,
                cliff,
                end,
                revoked: false,
            },
        );
        let mut accounts = read_accounts(env);
        accounts.push_back(beneficiary.clone());
        write_accounts(env, &accounts);
        write_obligation(env, obligation + total_amount);

        env.events().publish(
            ("vesting_added",),
            (beneficiary, total_amount, start, cliff, end),
        );
        Ok(())
    }
}
