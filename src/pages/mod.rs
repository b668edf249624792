pub mod details;
pub mod favorites;
pub mod home;
pub mod not_found;
pub mod profile;
