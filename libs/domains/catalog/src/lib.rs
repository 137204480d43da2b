//! Catalog Domain
//!
//! Product catalog business logic: create, read, update, partial-update and
//! delete product records behind a storage trait, with mode-aware field
//! validation and catalog-resolved error payloads.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │   Service   │  ← Operations, empty/missing-result detection
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Validation  │  ← Per-field rules, Create vs Update mode
//! └──────┬──────┘
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + in-memory implementation)
//! └──────┬──────┘
//! ┌──────▼──────┐
//! │   Models    │  ← Record, DTO, partial-update merge
//! └─────────────┘
//! ```
//!
//! Failures come back as [`CatalogError`] and are turned into wire payloads
//! by [`ErrorTranslator`], which resolves symbolic keys through the shared
//! [`message_catalog::MessageCatalog`].
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_catalog::{
//!     memory::InMemoryProductRepository,
//!     messages::product_catalog,
//!     service::ProductService,
//!     translate::ErrorTranslator,
//! };
//!
//! # async fn example() {
//! let service = ProductService::new(InMemoryProductRepository::new());
//! let catalog = product_catalog();
//! let translator = ErrorTranslator::new(&catalog);
//!
//! if let Err(err) = service.get_all_products().await {
//!     let (status, payloads) = translator.translate(&err);
//!     println!("{status}: {payloads:?}");
//! }
//! # }
//! ```

pub mod error;
pub mod memory;
pub mod messages;
pub mod models;
pub mod repository;
pub mod service;
pub mod translate;
pub mod validation;

// Re-export commonly used types
pub use error::{CatalogError, CatalogResult, ErrorKey};
pub use memory::InMemoryProductRepository;
pub use models::{merge_update, Product, ProductDto};
pub use repository::ProductRepository;
pub use service::ProductService;
pub use translate::ErrorTranslator;
pub use validation::{Field, FieldViolation, OperationMode, ValidationKey};
