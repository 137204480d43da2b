//! Mode-aware field validation for product representations.
//!
//! Each rule is a (mode-set, predicate, message-key) tuple; a rule fires
//! only when the caller's [`OperationMode`] is in its mode set. All rules
//! are evaluated — violations are collected exhaustively, never
//! short-circuited on the first failure.

use std::sync::LazyLock;

use regex::Regex;

use crate::models::ProductDto;

/// Letters and spaces only
static NAME_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[a-zA-Z ]*$").unwrap());

/// Whole number or a number with up to two decimal places
static PRICE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+(\.\d{1,2})?$").unwrap());

/// Selects which validation rules apply to an entry point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationMode {
    /// Full payload required (create and full update)
    Create,
    /// Sparse payload permitted (partial update)
    Update,
}

/// Validated DTO field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Price,
}

/// Message keys for the per-field validation rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationKey {
    NameNotBlank,
    NameAlpha,
    NameMinSize,
    NameMaxSize,
    PriceMinValue,
    PriceMaxValue,
    PricePattern,
}

impl ValidationKey {
    /// The message-catalog key for this rule.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NameNotBlank => "validation.productname.notblank",
            Self::NameAlpha => "validation.productname.alpha",
            Self::NameMinSize => "validation.productname.minimumsize",
            Self::NameMaxSize => "validation.productname.maximumsize",
            Self::PriceMinValue => "validation.productprice.minimumvalue",
            Self::PriceMaxValue => "validation.productprice.maximumvalue",
            Self::PricePattern => "validation.productprice.pricepattern",
        }
    }
}

/// A single violated rule on a single field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldViolation {
    pub field: Field,
    pub key: ValidationKey,
}

struct Rule {
    field: Field,
    modes: &'static [OperationMode],
    key: ValidationKey,
    /// Returns true when the DTO satisfies the rule.
    check: fn(&ProductDto) -> bool,
}

const CREATE_ONLY: &[OperationMode] = &[OperationMode::Create];
const CREATE_AND_UPDATE: &[OperationMode] = &[OperationMode::Create, OperationMode::Update];

static RULES: &[Rule] = &[
    Rule {
        field: Field::Name,
        modes: CREATE_ONLY,
        key: ValidationKey::NameNotBlank,
        check: name_not_blank,
    },
    Rule {
        field: Field::Name,
        modes: CREATE_ONLY,
        key: ValidationKey::NameMinSize,
        check: name_min_size,
    },
    Rule {
        field: Field::Name,
        modes: CREATE_AND_UPDATE,
        key: ValidationKey::NameMaxSize,
        check: name_max_size,
    },
    Rule {
        field: Field::Name,
        modes: CREATE_AND_UPDATE,
        key: ValidationKey::NameAlpha,
        check: name_alpha,
    },
    Rule {
        field: Field::Price,
        modes: CREATE_ONLY,
        key: ValidationKey::PriceMinValue,
        check: price_min_value,
    },
    Rule {
        field: Field::Price,
        modes: CREATE_AND_UPDATE,
        key: ValidationKey::PriceMaxValue,
        check: price_max_value,
    },
    Rule {
        field: Field::Price,
        modes: CREATE_AND_UPDATE,
        key: ValidationKey::PricePattern,
        check: price_pattern,
    },
];

fn name_not_blank(dto: &ProductDto) -> bool {
    !dto.name.trim().is_empty()
}

fn name_min_size(dto: &ProductDto) -> bool {
    dto.name.chars().count() >= 2
}

fn name_max_size(dto: &ProductDto) -> bool {
    dto.name.chars().count() <= 100
}

fn name_alpha(dto: &ProductDto) -> bool {
    NAME_PATTERN.is_match(&dto.name)
}

fn price_min_value(dto: &ProductDto) -> bool {
    dto.price >= 100.0
}

fn price_max_value(dto: &ProductDto) -> bool {
    dto.price <= 100_000.0
}

/// The pattern runs against the value's canonical decimal rendering, which
/// never produces scientific notation for in-range prices. Negative and
/// non-finite values fail the pattern outright.
fn price_pattern(dto: &ProductDto) -> bool {
    PRICE_PATTERN.is_match(&dto.price.to_string())
}

/// Validate a product representation under the given mode.
///
/// Returns one [`FieldViolation`] per violated rule; an empty vector means
/// the representation is valid for that mode.
pub fn validate(dto: &ProductDto, mode: OperationMode) -> Vec<FieldViolation> {
    RULES
        .iter()
        .filter(|rule| rule.modes.contains(&mode))
        .filter(|rule| !(rule.check)(dto))
        .map(|rule| FieldViolation {
            field: rule.field,
            key: rule.key,
        })
        .collect()
}
