pub mod cli;
pub mod config;
pub mod models;
pub mod operations;
pub mod scanner;
pub mod tui;
pub mod utils;

// 重新导出常用模块
pub use config::Config;
pub use models::{Project, ProjectType, SortColumn, VcsStatus};
pub use scanner::FileWalker;
