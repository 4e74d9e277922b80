pub mod assess;
pub mod config;
pub mod init;
pub mod limits;
pub mod rate;
