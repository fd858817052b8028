pub mod date;
pub mod path;
