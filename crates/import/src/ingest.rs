use chrono::{Datelike, Local};
use gastos_core::TransactionRecord;
use serde::Serialize;

use crate::classifier::Classifier;
use crate::fields::{infer_fields, RowRejection};
use crate::tokenizer::tokenize;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct IngestOutcome {
    /// Accepted rows, in input order.
    pub records: Vec<TransactionRecord>,
    pub ignored_count: usize,
}

/// Converts pasted statement text into records. Bare day-month dates take
/// the current local year.
pub fn ingest(raw: &str) -> IngestOutcome {
    ingest_for_year(raw, Local::now().year())
}

pub fn ingest_for_year(raw: &str, year: i32) -> IngestOutcome {
    let classifier = Classifier::default();
    let mut outcome = IngestOutcome::default();

    let lines = raw
        .split(['\r', '\n'])
        .filter(|line| !line.trim().is_empty());
    for (row, line) in lines.enumerate() {
        match process_line_with(&classifier, line, year) {
            Ok(record) => outcome.records.push(record),
            Err(reason) => {
                tracing::debug!(row = row + 1, %reason, "ignoring line");
                outcome.ignored_count += 1;
            }
        }
    }

    tracing::info!(
        accepted = outcome.records.len(),
        ignored = outcome.ignored_count,
        "ingestion finished"
    );
    outcome
}

/// Runs the full pipeline on a single non-blank line.
pub fn process_line(line: &str, year: i32) -> Result<TransactionRecord, RowRejection> {
    process_line_with(&Classifier::default(), line, year)
}

fn process_line_with(
    classifier: &Classifier,
    line: &str,
    year: i32,
) -> Result<TransactionRecord, RowRejection> {
    let tokens = tokenize(line);
    let fields = infer_fields(&tokens, year)?;
    let label = classifier.classify(&fields.description, Some(fields.amount));
    Ok(TransactionRecord::new(
        fields.date,
        fields.description,
        label.category,
        label.kind,
        fields.amount,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use gastos_core::TransactionType;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn single_semicolon_line() {
        let out = ingest_for_year("05/01/2024;Uber;25,00", 2026);
        assert_eq!(out.ignored_count, 0);
        assert_eq!(out.records.len(), 1);
        let r = &out.records[0];
        assert_eq!(r.kind, TransactionType::Expense);
        assert_eq!(r.category, "Viagem por App");
        assert_eq!(r.value, dec("-25.00"));
        assert_eq!(r.date, "05/01/2024");
        assert_eq!(r.description, "Uber");
    }

    #[test]
    fn date_with_time_of_day() {
        let out = ingest_for_year("05/01/2024 10:30;Uber;25,00", 2026);
        assert_eq!(out.ignored_count, 0);
        assert_eq!(out.records.len(), 1);
        assert_eq!(out.records[0].date, "05/01/2024");
        assert_eq!(out.records[0].category, "Viagem por App");
        assert_eq!(out.records[0].value, dec("-25.00"));
    }

    #[test]
    fn blank_input_yields_nothing() {
        assert_eq!(ingest(""), IngestOutcome::default());
        assert_eq!(ingest("   \n  "), IngestOutcome::default());
        assert_eq!(ingest("\r\n\r\n\t\n"), IngestOutcome::default());
    }

    #[test]
    fn bad_rows_are_counted_not_fatal() {
        let raw = "cabeçalho\n\
                   05/01/2024;Uber;25,00\n\
                   Uber;25,00\n\
                   06/01/2024;Padaria;abc\n\
                   07/01/2024\tSalário\t3.500,00";
        let out = ingest_for_year(raw, 2026);
        assert_eq!(out.records.len(), 2);
        assert_eq!(out.ignored_count, 3);
        assert_eq!(out.records[0].description, "Uber");
        assert_eq!(out.records[1].category, "Salário");
        assert_eq!(out.records[1].value, dec("3500"));
    }

    #[test]
    fn crlf_and_lone_cr_split_lines() {
        let out = ingest_for_year(
            "05/01/2024;Uber;25,00\r\n06/01/2024;Uber;10,00\r07/01/2024;Uber;5,00",
            2026,
        );
        assert_eq!(out.records.len(), 3);
        assert_eq!(out.ignored_count, 0);
    }

    #[test]
    fn records_keep_input_order() {
        let out = ingest_for_year("01/01/2024,Netflix,39.90\n02/01/2024,Spotify,21.90", 2026);
        let names: Vec<_> = out.records.iter().map(|r| r.description.as_str()).collect();
        assert_eq!(names, ["Netflix", "Spotify"]);
    }

    #[test]
    fn unmatched_positive_amount_is_income() {
        let r = process_line("05/01/2024;Transferência Fulano;150,00", 2026).unwrap();
        assert_eq!(r.category, "Outros Recebimentos");
        assert_eq!(r.kind, TransactionType::Income);
        assert_eq!(r.value, dec("150"));
    }

    #[test]
    fn unmatched_negative_amount_is_expense() {
        let r = process_line("05/01/2024;Zzz Ltda;-80,00", 2026).unwrap();
        assert_eq!(r.category, "Outros Gastos");
        assert_eq!(r.value, dec("-80"));
    }

    #[test]
    fn negative_amount_with_income_keyword_flips_positive() {
        let r = process_line("05/01/2024;Estorno;-19,90", 2026).unwrap();
        assert_eq!(r.kind, TransactionType::Income);
        assert_eq!(r.value, dec("19.90"));
    }

    #[test]
    fn process_line_reports_reason() {
        assert_eq!(process_line("só texto", 2026), Err(RowRejection::TooFewTokens));
        assert_eq!(process_line("Uber;25,00", 2026), Err(RowRejection::MissingDate));
    }
}
