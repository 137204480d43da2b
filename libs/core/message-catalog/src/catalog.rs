use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Supported message locales
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, Default,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Locale {
    /// English (default and fallback locale)
    #[default]
    En,
    /// German
    De,
}

/// Immutable key → code and key → localized-message lookup tables.
///
/// Built once via [`MessageCatalog::builder`] and passed by reference to the
/// components that translate failures into payloads.
#[derive(Debug, Clone, Default)]
pub struct MessageCatalog {
    codes: HashMap<String, i32>,
    messages: HashMap<(String, Locale), String>,
}

impl MessageCatalog {
    pub fn builder() -> MessageCatalogBuilder {
        MessageCatalogBuilder::default()
    }

    /// Resolve a symbolic key to its numeric error code.
    pub fn code_for(&self, key: &str) -> Option<i32> {
        self.codes.get(key).copied()
    }

    /// Resolve a symbolic key to a localized message.
    ///
    /// When the requested locale has no translation for the key, the
    /// [`Locale::En`] message is returned instead.
    pub fn message_for(&self, key: &str, locale: Locale) -> Option<&str> {
        self.messages
            .get(&(key.to_owned(), locale))
            .or_else(|| self.messages.get(&(key.to_owned(), Locale::En)))
            .map(String::as_str)
    }
}

/// Builder for [`MessageCatalog`].
#[derive(Debug, Default)]
pub struct MessageCatalogBuilder {
    codes: HashMap<String, i32>,
    messages: HashMap<(String, Locale), String>,
}

impl MessageCatalogBuilder {
    /// Register a key with a numeric code and its English message.
    pub fn entry(mut self, key: &str, code: i32, message: &str) -> Self {
        self.codes.insert(key.to_owned(), code);
        self.messages
            .insert((key.to_owned(), Locale::En), message.to_owned());
        self
    }

    /// Register a message-only key (no numeric code), English.
    ///
    /// Used for validation messages, where the numeric part of the payload
    /// comes from the request's own status rather than the catalog.
    pub fn message(mut self, key: &str, message: &str) -> Self {
        self.messages
            .insert((key.to_owned(), Locale::En), message.to_owned());
        self
    }

    /// Register a translation of an already-registered key.
    pub fn localized(mut self, key: &str, locale: Locale, message: &str) -> Self {
        self.messages
            .insert((key.to_owned(), locale), message.to_owned());
        self
    }

    pub fn build(self) -> MessageCatalog {
        MessageCatalog {
            codes: self.codes,
            messages: self.messages,
        }
    }
}
