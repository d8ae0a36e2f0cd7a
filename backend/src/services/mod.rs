pub mod admin;
pub mod alumni;
pub mod blogs;
pub mod carousel;
pub mod events;
pub mod projects;
