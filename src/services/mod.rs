pub mod match_service;
pub mod server;
