pub mod event_type;
pub mod file_event;
pub mod filter;
pub mod memo_item;
pub mod settings;
pub mod task;
