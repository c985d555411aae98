//! Field rules shared by the request payload and the persisted entity.
//!
//! Rules run in declaration order. The first rule a field breaks supplies that field's
//! message; later rules for the same field are skipped. All broken fields are reported
//! together in one [`ValidationErrors`].

use regex::Regex;
use rust_decimal::Decimal;
use std::borrow::Cow;
use std::sync::LazyLock;
use validator::{ValidationError, ValidationErrors};

pub const NAME_REQUIRED: &str = "O nome é obrigatório";
pub const NAME_LENGTH: &str = "O nome deve ter entre 3 e 100 caracteres";
pub const NCM_REQUIRED: &str = "O NCM é obrigatório";
pub const NCM_PATTERN: &str = "O NCM deve conter exatamente 8 dígitos";
pub const DESCRIPTION_LENGTH: &str = "A descrição não pode ter mais de 255 caracteres";
pub const PRICE_REQUIRED: &str = "O preço é obrigatório";
pub const PRICE_MINIMUM: &str = "O preço deve ser maior que zero";
pub const PRICE_DIGITS: &str =
    "O preço deve ter no máximo 12 dígitos inteiros e 2 casas decimais";
pub const QUANTITY_REQUIRED: &str = "A quantidade é obrigatória";
pub const QUANTITY_MINIMUM: &str = "A quantidade não pode ser negativa";

const NAME_MIN_CHARS: usize = 3;
const NAME_MAX_CHARS: usize = 100;
const DESCRIPTION_MAX_CHARS: usize = 255;

/// Cents are the smallest unit the `preco` column keeps.
pub const PRICE_MAX_FRACTION_DIGITS: u32 = 2;
/// 12 integer digits plus 2 decimals stay exact through the f64 path SQLite uses.
pub const PRICE_MAX_INTEGER_DIGITS: u32 = 12;

static NCM_DIGITS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{8}$").expect("NCM pattern is a valid regex"));

/// Borrowed view over whatever shape is being validated
#[derive(Debug, Default, Clone, Copy)]
pub struct ProductFields<'a> {
    pub name: Option<&'a str>,
    pub ncm: Option<&'a str>,
    pub ncm_description: Option<&'a str>,
    pub price: Option<Decimal>,
    pub quantity: Option<i32>,
}

struct Rule {
    field: &'static str,
    code: &'static str,
    message: &'static str,
    holds: fn(&ProductFields<'_>) -> bool,
}

static RULES: [Rule; 10] = [
    Rule {
        field: "nome",
        code: "required",
        message: NAME_REQUIRED,
        holds: name_present,
    },
    Rule {
        field: "nome",
        code: "length",
        message: NAME_LENGTH,
        holds: name_length,
    },
    Rule {
        field: "ncm",
        code: "required",
        message: NCM_REQUIRED,
        holds: ncm_present,
    },
    Rule {
        field: "ncm",
        code: "regex",
        message: NCM_PATTERN,
        holds: ncm_digits,
    },
    Rule {
        field: "descricaoNcm",
        code: "length",
        message: DESCRIPTION_LENGTH,
        holds: description_length,
    },
    Rule {
        field: "preco",
        code: "required",
        message: PRICE_REQUIRED,
        holds: price_present,
    },
    Rule {
        field: "preco",
        code: "range",
        message: PRICE_MINIMUM,
        holds: price_minimum,
    },
    Rule {
        field: "preco",
        code: "digits",
        message: PRICE_DIGITS,
        holds: price_digits,
    },
    Rule {
        field: "quantidade",
        code: "required",
        message: QUANTITY_REQUIRED,
        holds: quantity_present,
    },
    Rule {
        field: "quantidade",
        code: "range",
        message: QUANTITY_MINIMUM,
        holds: quantity_minimum,
    },
];

/// Runs every rule and aggregates the first failure of each field.
pub fn validate_fields(fields: &ProductFields<'_>) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();
    let mut failed: Vec<&'static str> = Vec::new();

    for rule in &RULES {
        if failed.contains(&rule.field) || (rule.holds)(fields) {
            continue;
        }
        failed.push(rule.field);
        errors.add(
            rule.field,
            ValidationError::new(rule.code).with_message(Cow::Borrowed(rule.message)),
        );
    }

    if failed.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

fn char_len(value: &str) -> usize {
    value.chars().count()
}

fn name_present(fields: &ProductFields<'_>) -> bool {
    fields.name.is_some_and(|name| !is_blank(name))
}

// Absent values pass the size, pattern and range rules; presence is checked separately.
fn name_length(fields: &ProductFields<'_>) -> bool {
    fields
        .name
        .is_none_or(|name| (NAME_MIN_CHARS..=NAME_MAX_CHARS).contains(&char_len(name)))
}

fn ncm_present(fields: &ProductFields<'_>) -> bool {
    fields.ncm.is_some_and(|ncm| !is_blank(ncm))
}

fn ncm_digits(fields: &ProductFields<'_>) -> bool {
    fields.ncm.is_none_or(|ncm| NCM_DIGITS.is_match(ncm))
}

fn description_length(fields: &ProductFields<'_>) -> bool {
    fields
        .ncm_description
        .is_none_or(|description| char_len(description) <= DESCRIPTION_MAX_CHARS)
}

fn price_present(fields: &ProductFields<'_>) -> bool {
    fields.price.is_some()
}

fn price_minimum(fields: &ProductFields<'_>) -> bool {
    // 0.01
    let min_price = Decimal::new(1, 2);
    fields.price.is_none_or(|price| price >= min_price)
}

fn price_digits(fields: &ProductFields<'_>) -> bool {
    fields.price.is_none_or(|price| {
        let upper_bound = Decimal::from(10_i64.pow(PRICE_MAX_INTEGER_DIGITS));
        price.normalize().scale() <= PRICE_MAX_FRACTION_DIGITS && price.abs() < upper_bound
    })
}

fn quantity_present(fields: &ProductFields<'_>) -> bool {
    fields.quantity.is_some()
}

fn quantity_minimum(fields: &ProductFields<'_>) -> bool {
    fields.quantity.is_none_or(|quantity| quantity >= 0)
}
