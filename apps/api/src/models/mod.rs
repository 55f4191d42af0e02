pub mod analysis;
pub mod conversation;
pub mod profile;
pub mod user;
