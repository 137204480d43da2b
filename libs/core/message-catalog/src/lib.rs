//! Message Catalog
//!
//! A single source of truth for error codes and localized messages. A
//! [`MessageCatalog`] is built once at startup from (key, code, message)
//! entries and then shared by reference with every component that needs to
//! render a failure; there is no ambient global state.
//!
//! Two lookup tables live behind one key space:
//! - `code_for(key)` resolves a symbolic key to its numeric error code
//! - `message_for(key, locale)` resolves a key to a localized message,
//!   falling back to [`Locale::En`] when no translation exists
//!
//! [`ErrorResponse`] is the wire-facing payload a resolved failure becomes:
//! a numeric code, a message, and the moment the payload was produced.

pub mod catalog;
pub mod response;

pub use catalog::{Locale, MessageCatalog, MessageCatalogBuilder};
pub use response::ErrorResponse;
