#[macro_use]
mod util;

pub mod classifier;
pub mod currency;
pub mod date;
pub mod fields;
pub mod ingest;
pub mod tokenizer;

pub use classifier::{classify, Classification, Classifier};
pub use currency::normalize_currency;
pub use date::normalize_date;
pub use fields::{infer_fields, RowFields, RowRejection};
pub use ingest::{ingest, ingest_for_year, process_line, IngestOutcome};
pub use tokenizer::{tokenize, Delimiter};
