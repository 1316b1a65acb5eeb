pub mod file_walker;
pub mod git_analyzer;
pub mod noise_filter;
pub mod project_detector;
pub mod size_calculator;

pub use file_walker::{DetectedProject, FileWalker};
pub use git_analyzer::GitAnalyzer;
pub use noise_filter::NoiseFilter;
pub use project_detector::ProjectDetector;
pub use size_calculator::{ProjectSizeInfo, SizeCalculator};
