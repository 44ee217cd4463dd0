pub mod catalog;
pub mod config;
pub mod export;
pub mod focus;
pub mod log;
pub mod rest;
pub mod set;
