//! Catalog State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::catalog::CatalogState;

/// Type alias for the store
pub type CatalogStore = Store<CatalogState>;

/// Get the catalog store from context
pub fn use_catalog_store() -> CatalogStore {
    expect_context::<CatalogStore>()
}

impl crate::catalog::CatalogCell for CatalogStore {
    fn with_state<R>(&self, f: impl FnOnce(&CatalogState) -> R) -> R {
        f(&*self.read_untracked())
    }

    fn update_state(&self, f: impl FnOnce(&mut CatalogState)) {
        f(&mut *self.write())
    }
}
