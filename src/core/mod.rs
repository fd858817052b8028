pub mod guard;
pub mod memo;
pub mod nlq;
pub mod query;
pub mod remind;
pub mod watcher;
