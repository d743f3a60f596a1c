//! View Application Layer

pub mod view_service;

pub use view_service::ViewService;
