//! Type definitions for the savings wallet

use soroban_sdk::{contracttype, symbol_short, Address, Env, String};

/// Maximum label length in bytes
pub const MAX_LABEL_LEN: u32 = 50;

/// Storage keys for the contract
#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    /// Last issued goal ID
    LastGoalId,
    /// Goal record by ID
    Goal(u64),
    /// Goal IDs created by an owner
    OwnerGoals(Address),
}

/// A savings target owned by a single principal
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct Goal {
    /// Unique goal ID
    pub id: u64,
    /// Principal that created the goal
    pub owner: Address,
    /// Short ASCII description
    pub label: String,
    /// Amount required before withdrawal is allowed
    pub target: u128,
    /// Amount accumulated so far
    pub saved: u128,
    /// Ledger sequence at creation
    pub created_at: u32,
}

/// Progress of a goal, derived from `saved` and `target`
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[contracttype]
pub enum GoalStatus {
    Active,
    Reached,
}

impl Goal {
    pub fn is_reached(&self) -> bool {
        self.saved >= self.target
    }

    pub fn status(&self) -> GoalStatus {
        if self.is_reached() {
            GoalStatus::Reached
        } else {
            GoalStatus::Active
        }
    }

    /// Amount still missing before the goal is reached.
    pub fn remaining(&self) -> u128 {
        self.target.saturating_sub(self.saved)
    }
}

/// Events emitted by the savings wallet
pub struct GoalEvents;

impl GoalEvents {
    pub fn goal_created(env: &Env, goal: &Goal) {
        let topics = (symbol_short!("goal"), symbol_short!("created"));
        env.events()
            .publish(topics, (goal.id, goal.owner.clone(), goal.target));
    }

    pub fn deposited(env: &Env, goal_id: u64, amount: u128, saved: u128) {
        let topics = (symbol_short!("goal"), symbol_short!("deposit"));
        env.events().publish(topics, (goal_id, amount, saved));
    }

    /// Emitted once when a deposit moves a goal from active to reached.
    pub fn goal_reached(env: &Env, goal: &Goal) {
        let topics = (symbol_short!("goal"), symbol_short!("reached"));
        env.events()
            .publish(topics, (goal.id, goal.saved, goal.target));
    }

    pub fn withdrawn(env: &Env, goal_id: u64, amount: u128, saved: u128) {
        let topics = (symbol_short!("goal"), symbol_short!("withdraw"));
        env.events().publish(topics, (goal_id, amount, saved));
    }
}
