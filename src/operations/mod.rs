pub mod file_manager;

pub use file_manager::open_in_file_manager;
