//! HTML rendering: maud templates plus the shared page shell.

pub mod components;
pub mod home;
pub mod post;
pub mod posts;
pub mod preview;
