pub mod ping;
pub mod echo;
