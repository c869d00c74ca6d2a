//! Application Context
//!
//! The catalog controller provided via Leptos Context API.

use leptos::prelude::*;

use crate::catalog::CatalogController;
use crate::client::TauriClient;
use crate::store::CatalogStore;

/// Controller wired to the Tauri backend and the page store. `Copy`, so
/// event handlers capture it by value.
pub type Catalog = CatalogController<TauriClient, CatalogStore>;

/// Create the store and controller and provide both to all children
pub fn provide_catalog() -> Catalog {
    let store = CatalogStore::new(Default::default());
    let catalog = CatalogController::new(TauriClient, store);
    provide_context(store);
    provide_context(catalog);
    catalog
}

/// Get the catalog controller from context
pub fn use_catalog() -> Catalog {
    expect_context::<Catalog>()
}
