//! # Savings Wallet Contract
//!
//! A Soroban smart contract that lets an owner declare named savings goals,
//! record deposits toward them, and withdraw from a goal only after its
//! target has been reached.
//!
//! ## Features
//!
//! - **Goal Registry**: Globally unique, strictly increasing goal IDs with a per-owner index
//! - **Withdrawal Gate**: Withdrawals fail with error `#102` until `saved >= target`
//! - **Ownership Checks**: Only the goal owner may deposit into or withdraw from a goal
//! - **Event Emission**: Emits events for creation, deposits, goals reached and withdrawals
//! - **Atomic Failures**: Every failing call returns a typed error and leaves state unchanged
//!
//! Balances are ledger entries only. Moving tokens in or out is left to the
//! host application.

#![no_std]

mod authorizer;
mod registry;
mod types;
mod validation;

use soroban_sdk::{contract, contracterror, contractimpl, Address, Env, String, Vec};

use crate::authorizer::WithdrawalAuthorizer;
use crate::registry::GoalRegistry;
pub use crate::types::{Goal, GoalStatus};

/// Error codes for the savings wallet contract.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum WalletError {
    /// Caller does not own the goal
    NotOwner = 100,
    /// No goal exists with the given ID
    GoalNotFound = 101,
    /// Goal has not reached its target yet
    GoalNotReached = 102,
    /// Withdrawal exceeds the saved amount
    InsufficientSaved = 103,
    /// Target amount must be greater than zero
    InvalidTarget = 104,
    /// Label exceeds `MAX_LABEL_LEN` bytes
    LabelTooLong = 105,
    /// Label contains non-ASCII bytes
    InvalidLabel = 106,
    /// Deposit amount must be greater than zero
    InvalidAmount = 107,
    /// Arithmetic overflow
    Overflow = 108,
}

#[contract]
pub struct SavingsWalletContract;

#[contractimpl]
impl SavingsWalletContract {
    /// Creates a savings goal owned by `owner`.
    ///
    /// The new goal starts with nothing saved. Its ID is the next value of
    /// the contract-wide counter and can be read back with
    /// [`get_last_goal_id`](Self::get_last_goal_id) or
    /// [`get_owner_goals`](Self::get_owner_goals).
    ///
    /// # Arguments
    /// * `env` - The contract environment
    /// * `owner` - The address creating the goal (must authorize)
    /// * `target` - Amount that must be saved before withdrawal
    /// * `label` - Short ASCII description, at most `MAX_LABEL_LEN` bytes
    ///
    /// # Returns
    /// * `true` once the goal is stored
    ///
    /// # Errors
    /// * `InvalidTarget` - If `target` is zero
    /// * `LabelTooLong` - If the label is longer than `MAX_LABEL_LEN`
    /// * `InvalidLabel` - If the label contains non-ASCII bytes
    pub fn create_goal(
        env: Env,
        owner: Address,
        target: u128,
        label: String,
    ) -> Result<bool, WalletError> {
        owner.require_auth();

        GoalRegistry::create(&env, &owner, target, label)?;
        Ok(true)
    }

    /// Records `amount` toward a goal and returns the new saved balance.
    ///
    /// # Errors
    /// * `GoalNotFound` - If the goal does not exist
    /// * `NotOwner` - If `caller` does not own the goal
    /// * `InvalidAmount` - If `amount` is zero
    /// * `Overflow` - If the saved balance would overflow
    pub fn deposit(
        env: Env,
        caller: Address,
        amount: u128,
        goal_id: u64,
    ) -> Result<u128, WalletError> {
        caller.require_auth();

        GoalRegistry::deposit(&env, goal_id, amount, &caller)
    }

    /// Withdraws `amount` from a reached goal and returns the new saved balance.
    ///
    /// # Errors
    /// * `GoalNotFound` - If the goal does not exist
    /// * `NotOwner` - If `caller` does not own the goal
    /// * `GoalNotReached` - If the goal's target has not been reached (`#102`)
    /// * `InsufficientSaved` - If `amount` exceeds the saved balance
    pub fn withdraw(
        env: Env,
        caller: Address,
        amount: u128,
        goal_id: u64,
    ) -> Result<u128, WalletError> {
        caller.require_auth();

        WithdrawalAuthorizer::withdraw(&env, amount, goal_id, &caller)
    }

    /// Retrieves a goal by ID.
    pub fn get_goal(env: Env, goal_id: u64) -> Result<Goal, WalletError> {
        GoalRegistry::lookup(&env, goal_id)
    }

    /// Returns whether a goal is still active or has reached its target.
    pub fn get_goal_status(env: Env, goal_id: u64) -> Result<GoalStatus, WalletError> {
        Ok(GoalRegistry::lookup(&env, goal_id)?.status())
    }

    /// Returns the amount still needed to reach a goal, zero once reached.
    pub fn get_remaining(env: Env, goal_id: u64) -> Result<u128, WalletError> {
        Ok(GoalRegistry::lookup(&env, goal_id)?.remaining())
    }

    /// Retrieves all goal IDs created by `owner`, oldest first.
    pub fn get_owner_goals(env: Env, owner: Address) -> Vec<u64> {
        GoalRegistry::owner_goals(&env, &owner)
    }

    /// Returns the last created goal ID, or zero if none exist.
    pub fn get_last_goal_id(env: Env) -> u64 {
        GoalRegistry::last_goal_id(&env)
    }
}
