use std::collections::HashSet;
use std::path::Path;

use crate::models::ProjectType;
use crate::scanner::noise_filter::GIT_DIR;

/// 标识文件与项目类型，按优先级排列：语言清单优先，`.git` 兜底
const MARKERS: [(&str, ProjectType); 8] = [
    ("Cargo.toml", ProjectType::Rust),
    ("go.mod", ProjectType::Go),
    ("package.json", ProjectType::NodeJs),
    ("pyproject.toml", ProjectType::Python),
    ("requirements.txt", ProjectType::Python),
    ("pom.xml", ProjectType::Java),
    ("composer.json", ProjectType::Php),
    (GIT_DIR, ProjectType::Git),
];

/// 项目类型检测器
#[derive(Debug, Clone, Default)]
pub struct ProjectDetector;

impl ProjectDetector {
    pub fn new() -> Self {
        Self
    }

    /// 按文件名精确匹配标识文件
    pub fn classify(entry_name: &str) -> Option<ProjectType> {
        MARKERS
            .iter()
            .find(|(marker, _)| *marker == entry_name)
            .map(|(_, project_type)| *project_type)
    }

    /// 检测目录是否是项目根目录。
    ///
    /// 只看直接子条目；存在多个标识文件时按 [`MARKERS`] 的顺序取第一个，
    /// 结果与文件系统的遍历顺序无关。无法读取的目录返回 `None`。
    pub fn detect(&self, dir: &Path) -> Option<ProjectType> {
        let entries = match std::fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::debug!("无法读取目录 {}: {}", dir.display(), e);
                return None;
            }
        };

        let present: HashSet<ProjectType> = entries
            .filter_map(Result::ok)
            .filter_map(|entry| Self::classify(&entry.file_name().to_string_lossy()))
            .collect();

        MARKERS
            .iter()
            .map(|(_, project_type)| *project_type)
            .find(|project_type| present.contains(project_type))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_classify_exact_names() {
        assert_eq!(ProjectDetector::classify(".git"), Some(ProjectType::Git));
        assert_eq!(ProjectDetector::classify("package.json"), Some(ProjectType::NodeJs));
        assert_eq!(ProjectDetector::classify("go.mod"), Some(ProjectType::Go));
        assert_eq!(ProjectDetector::classify("requirements.txt"), Some(ProjectType::Python));
        assert_eq!(ProjectDetector::classify("pyproject.toml"), Some(ProjectType::Python));
        assert_eq!(ProjectDetector::classify("Cargo.toml"), Some(ProjectType::Rust));
        assert_eq!(ProjectDetector::classify("pom.xml"), Some(ProjectType::Java));
        assert_eq!(ProjectDetector::classify("composer.json"), Some(ProjectType::Php));
    }

    #[test]
    fn test_classify_is_not_a_pattern_match() {
        assert_eq!(ProjectDetector::classify("cargo.toml"), None);
        assert_eq!(ProjectDetector::classify("package.json.bak"), None);
        assert_eq!(ProjectDetector::classify("go.sum"), None);
        assert_eq!(ProjectDetector::classify(""), None);
    }

    #[test]
    fn test_detect_plain_directory() {
        let temp_dir = tempdir().unwrap();
        fs::write(temp_dir.path().join("README.md"), "# hi").unwrap();

        assert_eq!(ProjectDetector::new().detect(temp_dir.path()), None);
    }

    #[test]
    fn test_detect_uses_priority_not_listing_order() {
        let temp_dir = tempdir().unwrap();
        fs::write(temp_dir.path().join("package.json"), "{}").unwrap();
        fs::write(temp_dir.path().join("go.mod"), "module x").unwrap();
        fs::create_dir(temp_dir.path().join(".git")).unwrap();

        assert_eq!(
            ProjectDetector::new().detect(temp_dir.path()),
            Some(ProjectType::Go)
        );
    }

    #[test]
    fn test_detect_git_only() {
        let temp_dir = tempdir().unwrap();
        fs::create_dir(temp_dir.path().join(".git")).unwrap();
        fs::create_dir(temp_dir.path().join("docs")).unwrap();

        assert_eq!(
            ProjectDetector::new().detect(temp_dir.path()),
            Some(ProjectType::Git)
        );
    }

    #[test]
    fn test_detect_missing_directory() {
        let temp_dir = tempdir().unwrap();
        assert_eq!(
            ProjectDetector::new().detect(&temp_dir.path().join("nope")),
            None
        );
    }
}
