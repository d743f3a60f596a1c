//! Relation Application Layer

pub mod relation_service;

pub use relation_service::RelationService;
