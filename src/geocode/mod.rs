pub mod client;
pub mod place;
