pub mod auth;
pub mod feed;
pub mod fields;
pub mod project;
pub mod users;
