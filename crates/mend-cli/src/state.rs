use mend_storage::objects::FsStore;
use mend_storage::records::RecordRepository;

use crate::config::MendConfig;

/// Everything a command needs, built once in `main` and passed down.
pub struct AppState {
    pub config: MendConfig,
    pub records: RecordRepository<FsStore>,
}

impl AppState {
    pub fn open(config: MendConfig) -> Self {
        let store = FsStore::new(config.data_dir.clone());
        tracing::debug!(data_dir = %config.data_dir.display(), "opened record store");
        Self {
            records: RecordRepository::new(store),
            config,
        }
    }
}
