//! Sign-in flow: GitHub OAuth at the front, subscriber-store callbacks
//! behind it, cookie sessions in between.

pub mod github;
pub mod hooks;
pub mod session;
