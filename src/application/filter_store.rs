// Shared filter state for a dashboard session
use crate::domain::filters::{DepartmentSelection, FilterState, Timeframe};
use std::sync::{PoisonError, RwLock};

/// Holds the session's filter selection. Every mutation happens under the
/// write lock, so readers only ever observe a complete state.
#[derive(Debug, Default)]
pub struct FilterStore {
    state: RwLock<FilterState>,
}

impl FilterStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> FilterState {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn set_store_id(&self, store_id: impl Into<String>) -> FilterState {
        self.update(|s| s.set_store_id(store_id))
    }

    pub fn set_timeframe(&self, timeframe: Timeframe) -> FilterState {
        self.update(|s| s.set_timeframe(timeframe))
    }

    pub fn set_query(&self, query: impl Into<String>) -> FilterState {
        self.update(|s| s.set_query(query))
    }

    pub fn set_selected_dept(&self, selected: DepartmentSelection) -> FilterState {
        self.update(|s| s.set_selected_dept(selected))
    }

    pub fn reset(&self) -> FilterState {
        self.update(FilterState::reset)
    }

    fn update(&self, f: impl FnOnce(&mut FilterState)) -> FilterState {
        let mut guard = self.state.write().unwrap_or_else(PoisonError::into_inner);
        f(&mut *guard);
        tracing::debug!(filters = ?&*guard, "Filter state updated");
        guard.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::department::Department;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_setters_return_updated_state() {
        let store = FilterStore::new();
        let state = store.set_store_id("blr-02");
        assert_eq!(state.store_id, "blr-02");
        assert_eq!(store.current(), state);

        store.set_selected_dept(DepartmentSelection::Only(Department::Electronics));
        store.set_query("elec");
        let state = store.set_timeframe(Timeframe::Week);
        assert_eq!(state.store_id, "blr-02");
        assert_eq!(state.query, "elec");
        assert_eq!(state.timeframe, Timeframe::Week);

        assert_eq!(store.reset(), FilterState::default());
        assert_eq!(store.current(), FilterState::default());
    }

    #[test]
    fn test_readers_never_see_partial_reset() {
        let store = Arc::new(FilterStore::new());
        let modified = FilterState {
            store_id: "mum-03".to_string(),
            timeframe: Timeframe::Today,
            query: "dairy".to_string(),
            selected_dept: DepartmentSelection::Only(Department::Dairy),
        };

        let writer = {
            let store = store.clone();
            let modified = modified.clone();
            thread::spawn(move || {
                for _ in 0..500 {
                    store.update(|s| *s = modified.clone());
                    store.reset();
                }
            })
        };

        for _ in 0..500 {
            let seen = store.current();
            assert!(seen == FilterState::default() || seen == modified);
        }
        writer.join().unwrap();
    }
}
