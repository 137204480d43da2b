//! Error translation.
//!
//! Maps a [`CatalogError`] into the wire payloads callers receive. Every
//! failure enters exactly one of three branches:
//!
//! 1. classified business failures resolve their key through the message
//!    catalog (numeric code + localized message) at the key's severity;
//! 2. field-validation failures emit one payload per violation at the
//!    request's status, with the full set returned;
//! 3. anything else becomes an internal-error payload carrying the raw
//!    failure description, so unanticipated failures stay diagnosable.

use http::StatusCode;
use message_catalog::{ErrorResponse, Locale, MessageCatalog};

use crate::error::{CatalogError, ErrorKey};

/// Translates catalog failures into `(status, payloads)` pairs.
pub struct ErrorTranslator<'a> {
    catalog: &'a MessageCatalog,
    locale: Locale,
}

impl<'a> ErrorTranslator<'a> {
    pub fn new(catalog: &'a MessageCatalog) -> Self {
        Self {
            catalog,
            locale: Locale::default(),
        }
    }

    pub fn with_locale(catalog: &'a MessageCatalog, locale: Locale) -> Self {
        Self { catalog, locale }
    }

    /// Translate a failure into its HTTP-equivalent status and payloads.
    ///
    /// Classified and unclassified failures yield a single payload;
    /// validation failures yield one payload per violated field rule.
    pub fn translate(&self, error: &CatalogError) -> (StatusCode, Vec<ErrorResponse>) {
        match error {
            CatalogError::EmptyResult(key) | CatalogError::NotFound(key) => {
                self.classified(*key)
            }
            CatalogError::Validation(violations) => {
                let status = StatusCode::BAD_REQUEST;
                let payloads = violations
                    .iter()
                    .map(|violation| {
                        let message = self
                            .catalog
                            .message_for(violation.key.as_str(), self.locale)
                            .unwrap_or(violation.key.as_str());
                        ErrorResponse::new(i32::from(status.as_u16()), message)
                    })
                    .collect();
                (status, payloads)
            }
            CatalogError::Storage(description) | CatalogError::Internal(description) => {
                Self::unclassified(description)
            }
        }
    }

    fn classified(&self, key: ErrorKey) -> (StatusCode, Vec<ErrorResponse>) {
        let code = self.catalog.code_for(key.as_str());
        let message = self.catalog.message_for(key.as_str(), self.locale);
        match (code, message) {
            (Some(code), Some(message)) => {
                (key.status(), vec![ErrorResponse::new(code, message)])
            }
            // A key missing from the catalog is a table gap; surface the key
            // itself through the catch-all branch rather than panicking.
            _ => Self::unclassified(key.as_str()),
        }
    }

    fn unclassified(description: &str) -> (StatusCode, Vec<ErrorResponse>) {
        let status = StatusCode::INTERNAL_SERVER_ERROR;
        (
            status,
            vec![ErrorResponse::new(i32::from(status.as_u16()), description)],
        )
    }
}
