pub mod debounce;
pub mod todo_store;

pub use debounce::{SyncDebouncer, SyncIndicator, SyncJob, SyncStatus};
pub use todo_store::TodoStore;
