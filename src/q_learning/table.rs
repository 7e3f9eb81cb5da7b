//! Tables with an optimistic default for unseen keys

use std::{collections::HashMap, hash::Hash};

use serde::{Deserialize, Serialize};

use crate::soccer::{Action, GameState};

/// Initial value reported for keys that were never written
pub const OPTIMISTIC_INIT: f64 = 1.0;

/// Q-table key
///
/// `other` is `None` for single-agent learning and holds the opponent's
/// action for joint-action learning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QKey {
    pub state: GameState,
    pub own: Action,
    pub other: Option<Action>,
}

impl QKey {
    pub fn single(state: GameState, own: Action) -> Self {
        Self {
            state,
            own,
            other: None,
        }
    }

    pub fn joint(state: GameState, own: Action, other: Action) -> Self {
        Self {
            state,
            own,
            other: Some(other),
        }
    }
}

/// Map from keys to values that reads as `default` on a miss
///
/// Reads never insert: the number of stored entries only grows through
/// [`ValueTable::set`].
#[derive(Debug, Clone)]
pub struct ValueTable<K> {
    values: HashMap<K, f64>,
    default: f64,
}

impl<K: Eq + Hash> ValueTable<K> {
    pub fn new(default: f64) -> Self {
        Self {
            values: HashMap::new(),
            default,
        }
    }

    /// Table with the optimistic 1.0 default
    pub fn optimistic() -> Self {
        Self::new(OPTIMISTIC_INIT)
    }

    pub fn get(&self, key: &K) -> f64 {
        self.values.get(key).copied().unwrap_or(self.default)
    }

    pub fn set(&mut self, key: K, value: f64) {
        self.values.insert(key, value);
    }

    /// Whether `key` has been written
    pub fn contains(&self, key: &K) -> bool {
        self.values.contains_key(key)
    }

    pub fn default_value(&self) -> f64 {
        self.default
    }

    /// Number of written entries
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, f64)> {
        self.values.iter().map(|(k, &v)| (k, v))
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }
}

impl<K: Eq + Hash> Default for ValueTable<K> {
    fn default() -> Self {
        Self::optimistic()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_miss_reads_default_without_inserting() {
        let table: ValueTable<QKey> = ValueTable::optimistic();
        let key = QKey::single(GameState::initial(), Action::North);
        assert_eq!(table.get(&key), 1.0);
        assert!(table.is_empty());
        assert!(!table.contains(&key));
    }

    #[test]
    fn test_set_then_get() {
        let mut table = ValueTable::new(0.0);
        let key = QKey::joint(GameState::probe(), Action::South, Action::Stick);
        table.set(key, -4.5);
        assert_eq!(table.get(&key), -4.5);
        assert_eq!(table.len(), 1);

        table.clear();
        assert_eq!(table.get(&key), 0.0);
    }

    #[test]
    fn test_single_and_joint_keys_are_distinct() {
        let mut table = ValueTable::optimistic();
        let state = GameState::probe();
        table.set(QKey::single(state, Action::South), 7.0);
        assert_eq!(
            table.get(&QKey::joint(state, Action::South, Action::Stick)),
            1.0
        );
    }
}
