//! Product message tables.
//!
//! Builds the immutable [`MessageCatalog`] the catalog domain resolves its
//! failure keys against. Codes are banded: 1000s for empty-result failures,
//! 1100s for missing-record failures. Validation keys are message-only —
//! their payloads reuse the request's own status as the numeric code.

use message_catalog::{Locale, MessageCatalog};

/// Build the product error and validation message tables.
pub fn product_catalog() -> MessageCatalog {
    MessageCatalog::builder()
        .entry(
            "error.emptyproductlist.getallproducts",
            1001,
            "No products found",
        )
        .localized(
            "error.emptyproductlist.getallproducts",
            Locale::De,
            "Keine Produkte gefunden",
        )
        .entry(
            "error.emptyproductlist.getallproductssortedbyprice",
            1002,
            "No products found to sort by price",
        )
        .localized(
            "error.emptyproductlist.getallproductssortedbyprice",
            Locale::De,
            "Keine Produkte zum Sortieren nach Preis gefunden",
        )
        .entry(
            "error.emptyproductlist.getproductsbypricerange",
            1003,
            "No products found in the given price range",
        )
        .localized(
            "error.emptyproductlist.getproductsbypricerange",
            Locale::De,
            "Keine Produkte im angegebenen Preisbereich gefunden",
        )
        .entry(
            "error.productunavailable.getproductbyid",
            1101,
            "Product not found for the given id",
        )
        .localized(
            "error.productunavailable.getproductbyid",
            Locale::De,
            "Produkt mit der angegebenen ID nicht gefunden",
        )
        .entry(
            "error.productunavailable.deleteproductbyid",
            1102,
            "Product to delete not found for the given id",
        )
        .localized(
            "error.productunavailable.deleteproductbyid",
            Locale::De,
            "Zu löschendes Produkt mit der angegebenen ID nicht gefunden",
        )
        .entry(
            "error.productunavailable.updateproduct",
            1103,
            "Product to update not found for the given id",
        )
        .localized(
            "error.productunavailable.updateproduct",
            Locale::De,
            "Zu aktualisierendes Produkt mit der angegebenen ID nicht gefunden",
        )
        .entry(
            "error.productunavailable.updateproductfields",
            1104,
            "Product to update not found for the given id",
        )
        .localized(
            "error.productunavailable.updateproductfields",
            Locale::De,
            "Zu aktualisierendes Produkt mit der angegebenen ID nicht gefunden",
        )
        .message(
            "validation.productname.notblank",
            "Product name must not be blank",
        )
        .message(
            "validation.productname.alpha",
            "Product name must contain only letters and spaces",
        )
        .message(
            "validation.productname.minimumsize",
            "Product name must be at least 2 characters",
        )
        .message(
            "validation.productname.maximumsize",
            "Product name must be at most 100 characters",
        )
        .message(
            "validation.productprice.minimumvalue",
            "Product price must be at least 100",
        )
        .message(
            "validation.productprice.maximumvalue",
            "Product price must be at most 100000",
        )
        .message(
            "validation.productprice.pricepattern",
            "Product price must be a number with at most two decimal places",
        )
        .build()
}
