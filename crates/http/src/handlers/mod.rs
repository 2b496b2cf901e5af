pub mod admin;
pub mod birds;
