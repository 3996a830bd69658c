// Service exports
pub mod catalog;
pub mod favorites;
pub mod preferences;

pub use catalog::{CatalogClient, CatalogError};
pub use favorites::{FavoritesClient, FavoritesError};
pub use preferences::{PreferencesClient, PreferencesError};
