//! Top-level pages, one per route

pub mod chat;
pub mod forgot_password;
pub mod landing;
pub mod login;
pub mod reset_password;
pub mod signup;
