pub mod cli;
pub mod explore;
pub mod interactive;
pub mod ports;
