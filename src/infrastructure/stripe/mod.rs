pub mod client;
pub mod signature;
pub mod types;
