#![no_std]

pub mod access;
pub mod asset;
pub mod auction;
pub mod bid;
pub mod checks;
pub mod config;
pub mod distribution;
pub mod errors;
pub mod event;
pub mod external;
pub mod listing;
pub mod marketplace;
pub mod settlement;
pub mod traits;
pub mod types;
