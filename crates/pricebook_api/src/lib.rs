//! HTTP surface for the item catalog service.
//! Maps the five `/items` routes onto `pricebook_core` operations.

pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use error::ApiError;
pub use router::app;
pub use state::AppState;
