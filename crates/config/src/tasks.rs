//! Registry of deployment pipeline tasks, grouped by category.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

use crate::ConfigError;

/// Pipeline task categories, in registration order.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Display,
    EnumString,
    EnumIter,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum TaskCategory {
    Deploy,
    Governance,
    L2,
    Misc,
    Setup,
    Verify,
}

/// One registered pipeline task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TaskSpec {
    pub name: &'static str,
    pub category: TaskCategory,
    pub description: &'static str,
}

const DECLARED_TASKS: &[TaskSpec] = &[
    TaskSpec {
        name: "deploy-governance-relay",
        category: TaskCategory::Deploy,
        description: "Deploy the cross-chain governance relay on an L1",
    },
    TaskSpec {
        name: "deploy-l2-bridge-executor",
        category: TaskCategory::Deploy,
        description: "Deploy the bridge executor on a companion L2",
    },
    TaskSpec {
        name: "execute-governance-payload",
        category: TaskCategory::Governance,
        description: "Execute a queued governance payload",
    },
    TaskSpec {
        name: "queue-governance-payload",
        category: TaskCategory::Governance,
        description: "Queue a governance payload for cross-chain execution",
    },
    TaskSpec {
        name: "estimate-retryable-ticket",
        category: TaskCategory::L2,
        description: "Estimate submission cost of an Arbitrum retryable ticket",
    },
    TaskSpec {
        name: "relay-l2-message",
        category: TaskCategory::L2,
        description: "Relay a message from L1 to a companion L2",
    },
    TaskSpec {
        name: "export-deployments",
        category: TaskCategory::Misc,
        description: "Export deployed contract addresses as JSON",
    },
    TaskSpec {
        name: "print-deployer",
        category: TaskCategory::Misc,
        description: "Print the deployer address for the selected network",
    },
    TaskSpec {
        name: "fund-deployer",
        category: TaskCategory::Setup,
        description: "Fund the deployer from the local dev accounts",
    },
    TaskSpec {
        name: "seed-dev-accounts",
        category: TaskCategory::Setup,
        description: "Seed the local simulation accounts with test tokens",
    },
    TaskSpec {
        name: "verify-bridge-executor",
        category: TaskCategory::Verify,
        description: "Verify the bridge executor source on the explorer",
    },
    TaskSpec {
        name: "verify-governance-relay",
        category: TaskCategory::Verify,
        description: "Verify the governance relay source on the explorer",
    },
];

/// The loaded task registry.
///
/// Tasks load category by category in [`TaskCategory`] declaration order,
/// alphabetically within each category. Loading can be skipped wholesale for
/// workflows that only need the configuration itself, such as compilation.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TaskRegistry {
    tasks: Vec<TaskSpec>,
    #[serde(skip)]
    index: BTreeMap<&'static str, TaskCategory>,
    skipped: bool,
}

impl TaskRegistry {
    /// Load the declared tasks, or an empty registry when `skip` is set.
    pub fn load(skip: bool) -> Result<Self, ConfigError> {
        if skip {
            tracing::info!("Task loading skipped");
            return Ok(Self {
                skipped: true,
                ..Self::default()
            });
        }

        let mut registry = Self::default();
        for category in TaskCategory::iter() {
            let mut batch: Vec<TaskSpec> = DECLARED_TASKS
                .iter()
                .filter(|task| task.category == category)
                .copied()
                .collect();
            batch.sort_by_key(|task| task.name);
            for task in batch {
                if registry.index.insert(task.name, task.category).is_some() {
                    return Err(ConfigError::DuplicateTask(task.name));
                }
                registry.tasks.push(task);
            }
        }
        tracing::debug!(count = registry.tasks.len(), "Loaded task registry");
        Ok(registry)
    }

    /// Whether tasks were actually loaded.
    pub fn is_active(&self) -> bool {
        !self.skipped
    }

    pub fn skipped(&self) -> bool {
        self.skipped
    }

    /// All loaded tasks, in load order.
    pub fn tasks(&self) -> &[TaskSpec] {
        &self.tasks
    }

    /// Category of a task, if registered.
    pub fn category(&self, name: &str) -> Option<TaskCategory> {
        self.index.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_orders_by_category_then_name() {
        let registry = TaskRegistry::load(false).unwrap();
        let names: Vec<&str> = registry.tasks().iter().map(|t| t.name).collect();
        assert_eq!(
            names,
            [
                "deploy-governance-relay",
                "deploy-l2-bridge-executor",
                "execute-governance-payload",
                "queue-governance-payload",
                "estimate-retryable-ticket",
                "relay-l2-message",
                "export-deployments",
                "print-deployer",
                "fund-deployer",
                "seed-dev-accounts",
                "verify-bridge-executor",
                "verify-governance-relay",
            ]
        );

        let categories: Vec<TaskCategory> =
            registry.tasks().iter().map(|t| t.category).collect();
        let mut sorted = categories.clone();
        sorted.sort();
        assert_eq!(categories, sorted);
    }

    #[test]
    fn test_skip_load_yields_empty_registry() {
        let registry = TaskRegistry::load(true).unwrap();
        assert!(registry.skipped());
        assert!(!registry.is_active());
        assert!(registry.is_empty());
    }

    #[test]
    fn test_category_lookup() {
        let registry = TaskRegistry::load(false).unwrap();
        assert_eq!(
            registry.category("relay-l2-message"),
            Some(TaskCategory::L2)
        );
        assert_eq!(registry.category("no-such-task"), None);
    }

    #[test]
    fn test_category_names_are_kebab_case() {
        assert_eq!(TaskCategory::L2.to_string(), "l2");
        assert_eq!(TaskCategory::Deploy.to_string(), "deploy");
        assert_eq!("governance".parse::<TaskCategory>(), Ok(TaskCategory::Governance));
    }
}
