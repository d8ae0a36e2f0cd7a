pub mod admin;
pub mod alumni;
pub mod blogs;
pub mod events;
pub mod gallery;
pub mod helpers;
pub mod home;
pub mod projects;
