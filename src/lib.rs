pub mod config;
pub mod directory;
pub mod form;
pub mod messages;
pub mod naming;
pub mod providers;
pub mod session;
pub mod shared;
pub mod subscription;
pub mod validation;
