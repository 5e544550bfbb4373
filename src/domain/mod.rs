//! Domain types for the souq classifieds data layer.
//! Defines the core records, reference catalogs, and error taxonomy.

pub mod ad;
pub mod catalog;
pub mod error;
pub mod suggestion;
pub mod user;

pub use ad::*;
pub use catalog::*;
pub use error::*;
pub use suggestion::*;
pub use user::*;
