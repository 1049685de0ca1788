pub mod config;
pub mod export;
pub mod init;
pub mod list;
pub mod log;
pub mod run;
pub mod summary;
