pub mod notify;
pub mod tokens;
