pub mod init;
pub mod list;
pub mod page;
pub mod serve;
