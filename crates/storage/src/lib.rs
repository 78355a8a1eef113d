pub mod db;

pub use db::{
    create_db, create_memory_db, delete_value, get_value, load_records, save_records, set_value,
    DbPool, StorageError, DEFAULT_RECORDS_KEY,
};
