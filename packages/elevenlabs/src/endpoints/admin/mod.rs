pub use super::*;
pub mod models;
pub mod user;
pub mod voice;
