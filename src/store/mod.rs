pub mod codec;
pub mod dir;
pub mod kv;

pub use codec::{decode_tasks, encode_tasks, TASKS_KEY};
pub use dir::{ensure_tick_dir, get_tick_dir, init_local_tick};
pub use kv::{FileStore, StoreError};
