pub mod item;
pub mod notification;
pub mod review;
pub mod user;
