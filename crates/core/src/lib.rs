pub mod money;
pub mod record;
pub mod store;
pub mod taxonomy;

pub use money::format_brl;
pub use record::{is_persistable, StoredRecord, TransactionRecord, TransactionType};
pub use store::RecordStore;
pub use taxonomy::{CategoryGroup, TAXONOMY};
