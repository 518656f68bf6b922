pub mod filter;
pub mod task;
pub mod views;

pub use filter::{visible, Filter};
pub use task::{next_id, Task};
pub use views::{counter_text, display_list, DisplayList};
