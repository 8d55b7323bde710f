pub mod config;
pub mod export;
pub mod forecast;
pub mod init;
pub mod predict;
pub mod summary;
