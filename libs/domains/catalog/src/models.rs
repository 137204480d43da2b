use serde::{Deserialize, Serialize};

/// Product entity as held by the storage collaborator.
///
/// The id is assigned by storage on first save and is never altered by any
/// update path; updates always produce a new logical record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique identifier, generated by storage
    pub id: i64,
    /// Product name
    pub name: String,
    /// Product price
    pub price: f64,
}

impl Product {
    /// Sentinel id for a record that storage has not yet persisted.
    pub const UNASSIGNED_ID: i64 = 0;

    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            id: Self::UNASSIGNED_ID,
            name: name.into(),
            price,
        }
    }
}

/// Caller-facing copy of a [`Product`] used for requests and responses.
///
/// Unlike the stored record, a DTO carries the validation rules in
/// [`crate::validation`]. Absent fields deserialize to their zero values,
/// which the Update path reads as "leave the current value."
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProductDto {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub price: f64,
}

impl ProductDto {
    /// Map to a record for persistence.
    ///
    /// The DTO's id is deliberately dropped: ids are only ever sourced from
    /// storage (creation) or from the record looked up for an update.
    pub fn to_record(&self) -> Product {
        Product::new(self.name.clone(), self.price)
    }
}

impl From<Product> for ProductDto {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            price: product.price,
        }
    }
}

/// Compute the record a partial update persists.
///
/// The id always comes from the existing record. The name is replaced
/// unconditionally with the incoming value. The price is replaced only when
/// the incoming price is strictly greater than 0.0; anything else is treated
/// as "not supplied" and the stored price is retained. Note this conflates a
/// caller who genuinely wants a zero price with one who omitted the field;
/// the convention is kept as-is because callers depend on it.
pub fn merge_update(existing: &Product, incoming: &ProductDto) -> Product {
    Product {
        id: existing.id,
        name: incoming.name.clone(),
        price: if incoming.price > 0.0 {
            incoming.price
        } else {
            existing.price
        },
    }
}
