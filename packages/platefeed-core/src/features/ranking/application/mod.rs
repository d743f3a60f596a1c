//! Ranking Application Layer

pub mod ranking_service;

pub use ranking_service::RankingService;
