//! Goal registry: ID allocation, goal records and deposits.

use soroban_sdk::{Address, Env, String, Vec};

use crate::types::{DataKey, Goal, GoalEvents};
use crate::validation::{validate_amount, validate_label, validate_target};
use crate::WalletError;

pub struct GoalRegistry;

impl GoalRegistry {
    /// Creates a goal owned by `owner` and returns its ID.
    ///
    /// IDs are allocated from a single counter and are strictly increasing,
    /// so an ID is never handed out twice.
    pub fn create(
        env: &Env,
        owner: &Address,
        target: u128,
        label: String,
    ) -> Result<u64, WalletError> {
        validate_target(target)?;
        validate_label(&label)?;

        let goal_id = Self::last_goal_id(env)
            .checked_add(1)
            .ok_or(WalletError::Overflow)?;

        let goal = Goal {
            id: goal_id,
            owner: owner.clone(),
            label,
            target,
            saved: 0,
            created_at: env.ledger().sequence(),
        };

        Self::store(env, &goal);

        let mut owner_goals = Self::owner_goals(env, owner);
        owner_goals.push_back(goal_id);
        env.storage()
            .persistent()
            .set(&DataKey::OwnerGoals(owner.clone()), &owner_goals);

        env.storage()
            .instance()
            .set(&DataKey::LastGoalId, &goal_id);

        GoalEvents::goal_created(env, &goal);

        Ok(goal_id)
    }

    /// Fetches a goal record.
    pub fn lookup(env: &Env, goal_id: u64) -> Result<Goal, WalletError> {
        env.storage()
            .persistent()
            .get(&DataKey::Goal(goal_id))
            .ok_or(WalletError::GoalNotFound)
    }

    /// Fetches a goal and checks that `caller` owns it.
    pub fn lookup_owned(env: &Env, goal_id: u64, caller: &Address) -> Result<Goal, WalletError> {
        let goal = Self::lookup(env, goal_id)?;
        if goal.owner != *caller {
            return Err(WalletError::NotOwner);
        }
        Ok(goal)
    }

    /// Adds `amount` to a goal's saved balance and returns the new balance.
    pub fn deposit(
        env: &Env,
        goal_id: u64,
        amount: u128,
        caller: &Address,
    ) -> Result<u128, WalletError> {
        let mut goal = Self::lookup_owned(env, goal_id, caller)?;
        validate_amount(amount)?;

        let was_reached = goal.is_reached();
        goal.saved = goal
            .saved
            .checked_add(amount)
            .ok_or(WalletError::Overflow)?;

        Self::store(env, &goal);

        GoalEvents::deposited(env, goal_id, amount, goal.saved);
        if !was_reached && goal.is_reached() {
            GoalEvents::goal_reached(env, &goal);
        }

        Ok(goal.saved)
    }

    /// Writes a goal record back to storage.
    pub(crate) fn store(env: &Env, goal: &Goal) {
        env.storage()
            .persistent()
            .set(&DataKey::Goal(goal.id), goal);
    }

    pub fn owner_goals(env: &Env, owner: &Address) -> Vec<u64> {
        env.storage()
            .persistent()
            .get(&DataKey::OwnerGoals(owner.clone()))
            .unwrap_or(Vec::new(env))
    }

    pub fn last_goal_id(env: &Env) -> u64 {
        env.storage()
            .instance()
            .get(&DataKey::LastGoalId)
            .unwrap_or(0)
    }
}
