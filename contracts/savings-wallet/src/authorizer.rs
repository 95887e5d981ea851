//! Withdrawal authorization against a goal's saved balance.

use soroban_sdk::{Address, Env};

use crate::registry::GoalRegistry;
use crate::types::GoalEvents;
use crate::WalletError;

pub struct WithdrawalAuthorizer;

impl WithdrawalAuthorizer {
    /// Withdraws `amount` from a goal and returns the remaining saved balance.
    ///
    /// Checks run in a fixed order and nothing is written until all of them
    /// pass:
    ///
    /// 1. the goal exists (`GoalNotFound`)
    /// 2. `caller` owns it (`NotOwner`)
    /// 3. the goal is reached, `saved >= target` (`GoalNotReached`)
    /// 4. `amount <= saved` (`InsufficientSaved`)
    ///
    /// The reached gate applies to every amount. A zero withdrawal from a
    /// reached goal succeeds and leaves the balance as it was. Draining a
    /// goal below its target makes it active again, blocking later
    /// withdrawals until it is refunded.
    pub fn withdraw(
        env: &Env,
        amount: u128,
        goal_id: u64,
        caller: &Address,
    ) -> Result<u128, WalletError> {
        let mut goal = GoalRegistry::lookup_owned(env, goal_id, caller)?;

        if !goal.is_reached() {
            return Err(WalletError::GoalNotReached);
        }

        goal.saved = goal
            .saved
            .checked_sub(amount)
            .ok_or(WalletError::InsufficientSaved)?;

        GoalRegistry::store(env, &goal);

        GoalEvents::withdrawn(env, goal_id, amount, goal.saved);

        Ok(goal.saved)
    }
}
