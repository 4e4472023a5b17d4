pub mod chat;
pub mod color;
