pub mod abi;
pub mod config;
pub mod message;
pub mod verify;
