pub mod auth;
pub mod entities;
pub mod errors;
pub mod navigation;
pub mod ports;
pub mod pricing;
pub mod role;
