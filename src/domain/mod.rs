pub mod flow;
pub mod ports;
pub mod setup;
