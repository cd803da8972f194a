pub mod files;
pub mod settings;
pub mod stats_store;
pub mod storage;

pub use files::{
    atomic_write, ensure_data_dir, get_data_dir, init_local_data_dir, log_file, settings_file, storage_file,
};
pub use settings::{load_settings, save_settings, Settings};
pub use stats_store::StatsStore;
pub use storage::{FileStore, KeyValueStore};
#[cfg(test)]
pub use storage::MemoryStore;
