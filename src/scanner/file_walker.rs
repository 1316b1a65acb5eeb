use std::collections::HashSet;
use std::path::{Path, PathBuf};
use indicatif::{ProgressBar, ProgressStyle};
use walkdir::WalkDir;

use crate::config::Config;
use crate::models::{Project, ProjectType};
use crate::scanner::{GitAnalyzer, NoiseFilter, ProjectDetector, SizeCalculator};

/// 文件遍历器 - 负责扫描目录并发现项目
#[derive(Debug, Clone)]
pub struct FileWalker {
    /// 剪枝规则
    filter: NoiseFilter,

    /// 项目类型检测器
    project_detector: ProjectDetector,

    /// 大小统计
    size_calculator: SizeCalculator,

    /// Git 状态探测
    git_analyzer: GitAnalyzer,

    /// 是否跟随符号链接
    follow_symlinks: bool,

    /// 不显示进度条
    quiet: bool,
}

/// 发现阶段找到的项目根目录
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetectedProject {
    /// 项目路径
    pub path: PathBuf,

    /// 项目类型
    pub project_type: ProjectType,
}

impl FileWalker {
    /// 根据配置创建文件遍历器
    pub fn new(config: &Config) -> Self {
        let filter = NoiseFilter::from_config(&config.scan);
        let follow_symlinks = config.scan.follow_symlinks;

        Self {
            size_calculator: SizeCalculator::new(filter.clone(), follow_symlinks),
            git_analyzer: GitAnalyzer::new(config.git.timeout()),
            project_detector: ProjectDetector::new(),
            filter,
            follow_symlinks,
            quiet: false,
        }
    }

    /// 关闭进度条（测试和非终端输出时使用）
    pub fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// 扫描根目录，返回按发现顺序排列的项目列表。
    ///
    /// 先遍历一次找出所有项目根目录，再对每个根目录单独统计大小并探测 Git 状态。
    pub async fn scan(&self, root: &Path) -> Vec<Project> {
        let progress = self.create_progress_bar();

        progress.set_message(format!("扫描: {}", root.display()));
        let detected = self.discover(root);
        tracing::info!("在 {} 下发现 {} 个项目", root.display(), detected.len());

        let total = detected.len();
        let mut projects = Vec::with_capacity(total);
        for (i, found) in detected.into_iter().enumerate() {
            progress.set_message(format!("分析 {}/{}: {}", i + 1, total, found.path.display()));

            let size_info = self.size_calculator.calculate_project_size(&found.path);
            let status = self.git_analyzer.probe_status(&found.path).await;
            tracing::debug!(
                "{}: {} 个文件, {} 字节, {}",
                found.path.display(),
                size_info.file_count,
                size_info.size,
                status
            );

            projects.push(Project::new(
                found.path,
                found.project_type,
                size_info.size,
                size_info.file_count,
                status,
            ));
        }

        progress.finish_and_clear();
        projects
    }

    /// 遍历目录树找出项目根目录。
    ///
    /// 噪声目录不进入；一旦某个目录被认定为项目根目录就不再向下遍历，
    /// 因此不会发现嵌套在其他项目内部的项目。同一路径只记录一次。
    pub fn discover(&self, root: &Path) -> Vec<DetectedProject> {
        let mut processed: HashSet<PathBuf> = HashSet::new();
        let mut detected = Vec::new();

        let mut walker = WalkDir::new(root)
            .follow_links(self.follow_symlinks)
            .sort_by_file_name()
            .into_iter();

        while let Some(entry) = walker.next() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    tracing::debug!("扫描时跳过条目: {}", e);
                    continue;
                }
            };

            if !entry.file_type().is_dir() {
                continue;
            }

            if self.filter.should_prune(&entry) {
                walker.skip_current_dir();
                continue;
            }

            let Some(project_type) = self.project_detector.detect(entry.path()) else {
                continue;
            };

            let path = entry.path().to_path_buf();
            if processed.insert(path.clone()) {
                tracing::debug!("发现项目 {} ({})", path.display(), project_type);
                detected.push(DetectedProject { path, project_type });
            } else {
                tracing::debug!("跳过重复的项目根目录 {}", path.display());
            }
            walker.skip_current_dir();
        }

        detected
    }

    /// 创建进度条
    fn create_progress_bar(&self) -> ProgressBar {
        if self.quiet {
            return ProgressBar::hidden();
        }

        let pb = ProgressBar::new_spinner();
        let style = ProgressStyle::with_template("{spinner:.green} [{elapsed_precise}] {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]);
        pb.set_style(style);
        pb.enable_steady_tick(std::time::Duration::from_millis(100));
        pb
    }
}

impl Default for FileWalker {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::VcsStatus;
    use std::fs;
    use tempfile::tempdir;

    fn write(path: &Path, bytes: usize) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, "x".repeat(bytes)).unwrap();
    }

    fn relative(root: &Path, detected: &[DetectedProject]) -> Vec<(String, ProjectType)> {
        detected
            .iter()
            .map(|d| {
                let rel = d.path.strip_prefix(root).unwrap();
                (rel.to_string_lossy().replace('\\', "/"), d.project_type)
            })
            .collect()
    }

    fn walker() -> FileWalker {
        FileWalker::default().with_quiet(true)
    }

    #[test]
    fn test_discover_in_name_order() {
        let temp_dir = tempdir().unwrap();
        let root = temp_dir.path();
        write(&root.join("b/package.json"), 2);
        write(&root.join("a/go.mod"), 2);
        write(&root.join("group/c/Cargo.toml"), 2);
        write(&root.join("notes/readme.md"), 2);

        let detected = walker().discover(root);
        assert_eq!(
            relative(root, &detected),
            vec![
                ("a".to_string(), ProjectType::Go),
                ("b".to_string(), ProjectType::NodeJs),
                ("group/c".to_string(), ProjectType::Rust),
            ]
        );
    }

    #[test]
    fn test_multiple_markers_yield_one_project() {
        let temp_dir = tempdir().unwrap();
        let root = temp_dir.path();
        write(&root.join("svc/package.json"), 2);
        write(&root.join("svc/go.mod"), 2);
        write(&root.join("svc/requirements.txt"), 2);
        fs::create_dir_all(root.join("svc/.git")).unwrap();

        let detected = walker().discover(root);
        assert_eq!(
            relative(root, &detected),
            vec![("svc".to_string(), ProjectType::Go)]
        );
    }

    #[test]
    fn test_no_nested_projects() {
        let temp_dir = tempdir().unwrap();
        let root = temp_dir.path();
        write(&root.join("outer/Cargo.toml"), 2);
        // 名称排在标识文件之前的子目录也不会被进入
        write(&root.join("outer/aaa/package.json"), 2);
        write(&root.join("outer/tools/inner/go.mod"), 2);

        let detected = walker().discover(root);
        assert_eq!(
            relative(root, &detected),
            vec![("outer".to_string(), ProjectType::Rust)]
        );
    }

    #[test]
    fn test_noise_directories_are_not_scanned() {
        let temp_dir = tempdir().unwrap();
        let root = temp_dir.path();
        write(&root.join("node_modules/pkg/package.json"), 2);
        write(&root.join("vendor/lib/composer.json"), 2);
        write(&root.join(".hidden/app/go.mod"), 2);
        write(&root.join("target/x/Cargo.toml"), 2);
        write(&root.join("real/pom.xml"), 2);

        let detected = walker().discover(root);
        assert_eq!(
            relative(root, &detected),
            vec![("real".to_string(), ProjectType::Java)]
        );
    }

    #[test]
    fn test_root_itself_can_be_a_project() {
        let temp_dir = tempdir().unwrap();
        let root = temp_dir.path();
        write(&root.join("pyproject.toml"), 2);
        write(&root.join("sub/package.json"), 2);

        let detected = walker().discover(root);
        assert_eq!(detected.len(), 1);
        assert_eq!(detected[0].path, root.to_path_buf());
        assert_eq!(detected[0].project_type, ProjectType::Python);
    }

    #[test]
    fn test_extra_ignore_dirs_from_config() {
        let temp_dir = tempdir().unwrap();
        let root = temp_dir.path();
        write(&root.join("archive/old/go.mod"), 2);
        write(&root.join("live/go.mod"), 2);

        let mut config = Config::default();
        config.scan.extra_ignore_dirs.insert("archive".to_string());
        let detected = FileWalker::new(&config).with_quiet(true).discover(root);
        assert_eq!(
            relative(root, &detected),
            vec![("live".to_string(), ProjectType::Go)]
        );
    }

    #[test]
    fn test_missing_root_yields_nothing() {
        let temp_dir = tempdir().unwrap();
        assert!(walker().discover(&temp_dir.path().join("missing")).is_empty());
    }

    #[tokio::test]
    async fn test_scan_aggregates_each_project() {
        let temp_dir = tempdir().unwrap();
        let root = temp_dir.path();
        write(&root.join("a/go.mod"), 40);
        write(&root.join("a/main.go"), 60);
        write(&root.join("a/build/out.bin"), 1000);
        write(&root.join("a/node_modules/x/package.json"), 500);
        write(&root.join("b/package.json"), 7);

        let projects = walker().scan(root).await;
        assert_eq!(projects.len(), 2);

        assert_eq!(projects[0].name, "a");
        assert_eq!(projects[0].project_type, ProjectType::Go);
        assert_eq!(projects[0].size, 100);
        assert_eq!(projects[0].file_count, 2);
        assert_eq!(projects[0].status, VcsStatus::NotVersioned);

        assert_eq!(projects[1].name, "b");
        assert_eq!(projects[1].project_type, ProjectType::NodeJs);
        assert_eq!(projects[1].size, 7);
        assert_eq!(projects[1].file_count, 1);
        assert_eq!(projects[1].status, VcsStatus::NotVersioned);
    }
}
