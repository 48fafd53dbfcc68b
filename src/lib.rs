pub mod bench;
pub mod float;
pub mod functions;
pub mod opts;
pub mod tables;
pub mod verify;
