pub mod config;
pub mod export;
pub mod init;
pub mod memo;
pub mod remind;
pub mod search;
pub mod tasks;
pub mod watch;
