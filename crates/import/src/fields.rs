use gastos_core::taxonomy::NO_DESCRIPTION;
use rust_decimal::Decimal;
use thiserror::Error;

use crate::currency::normalize_currency;
use crate::date::{date_part, resolve_date};

#[derive(Debug, Clone, PartialEq)]
pub struct RowFields {
    pub date: String,
    pub amount: Decimal,
    pub description: String,
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowRejection {
    #[error("fewer than two non-empty columns")]
    TooFewTokens,
    #[error("no column looks like a date")]
    MissingDate,
    #[error("no column parses as an amount")]
    MissingAmount,
    #[error("description is empty")]
    EmptyDescription,
}

/// Assigns date, amount and description roles to a row's tokens.
///
/// The date is the first date-like token from the left; the amount is the
/// first parseable token from the right that is not the date. Everything
/// else, in order, becomes the description.
pub fn infer_fields(tokens: &[&str], year: i32) -> Result<RowFields, RowRejection> {
    let tokens: Vec<&str> = tokens.iter().copied().filter(|t| !t.is_empty()).collect();
    if tokens.len() < 2 {
        return Err(RowRejection::TooFewTokens);
    }

    let (date_idx, date) = tokens
        .iter()
        .enumerate()
        .find_map(|(idx, t)| date_part(t).map(|d| (idx, resolve_date(d, year))))
        .ok_or(RowRejection::MissingDate)?;

    let (amount_idx, amount) = tokens
        .iter()
        .enumerate()
        .rev()
        .filter(|(idx, _)| *idx != date_idx)
        .find_map(|(idx, t)| normalize_currency(t).map(|v| (idx, v)))
        .ok_or(RowRejection::MissingAmount)?;

    let leftovers: Vec<&str> = tokens
        .iter()
        .enumerate()
        .filter(|(idx, _)| *idx != date_idx && *idx != amount_idx)
        .map(|(_, t)| *t)
        .collect();
    let description = if leftovers.is_empty() {
        NO_DESCRIPTION.to_string()
    } else {
        leftovers.join(" ")
    };
    if description.trim().is_empty() {
        return Err(RowRejection::EmptyDescription);
    }

    Ok(RowFields { date, amount, description })
}
