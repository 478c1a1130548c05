//! raceday - HTTP API for cars, drivers and lap-time simulation

pub mod cli;
pub mod garage;
pub mod http_server;
pub mod simulation;
pub mod store;
