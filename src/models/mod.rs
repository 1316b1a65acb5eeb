pub mod project;
pub mod sorting;

pub use project::{Project, ProjectType, VcsStatus};
pub use sorting::{render_columns, render_row, reorder, SortColumn};
