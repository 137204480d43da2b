use http::StatusCode;
use thiserror::Error;

use crate::validation::FieldViolation;

/// Symbolic keys for classified business failures.
///
/// Each key names the operation that raised it, resolves to a numeric code
/// and a localized message through the message catalog, and carries an
/// HTTP-equivalent severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKey {
    GetAllProducts,
    GetAllProductsSortedByPrice,
    GetProductsByPriceRange,
    GetProductById,
    DeleteProductById,
    UpdateProduct,
    UpdateProductFields,
}

impl ErrorKey {
    /// The message-catalog key.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::GetAllProducts => "error.emptyproductlist.getallproducts",
            Self::GetAllProductsSortedByPrice => {
                "error.emptyproductlist.getallproductssortedbyprice"
            }
            Self::GetProductsByPriceRange => "error.emptyproductlist.getproductsbypricerange",
            Self::GetProductById => "error.productunavailable.getproductbyid",
            Self::DeleteProductById => "error.productunavailable.deleteproductbyid",
            Self::UpdateProduct => "error.productunavailable.updateproduct",
            Self::UpdateProductFields => "error.productunavailable.updateproductfields",
        }
    }

    /// HTTP-equivalent severity for this failure.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::GetAllProducts
            | Self::GetAllProductsSortedByPrice
            | Self::GetProductsByPriceRange => StatusCode::NO_CONTENT,
            Self::GetProductById
            | Self::DeleteProductById
            | Self::UpdateProduct
            | Self::UpdateProductFields => StatusCode::NOT_FOUND,
        }
    }
}

/// Failure taxonomy for catalog operations.
///
/// Every operation failure is exactly one of these; none is retried, and
/// each is terminal for the current invocation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CatalogError {
    /// A list operation found no records
    #[error("empty product list: {}", .0.as_str())]
    EmptyResult(ErrorKey),

    /// An identity lookup found no record
    #[error("product unavailable: {}", .0.as_str())]
    NotFound(ErrorKey),

    /// One violation per violated field rule, collected exhaustively
    #[error("validation failed with {} violation(s)", .0.len())]
    Validation(Vec<FieldViolation>),

    /// Storage collaborator failure
    #[error("storage error: {0}")]
    Storage(String),

    /// Unanticipated failure
    #[error("internal error: {0}")]
    Internal(String),
}

pub type CatalogResult<T> = Result<T, CatalogError>;
