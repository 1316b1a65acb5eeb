use std::fmt;
use std::path::{Path, PathBuf};

/// 扫描发现的一个项目根目录
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    /// 项目名称（路径最后一段）
    pub name: String,

    /// 项目路径，在一次扫描中唯一
    pub path: PathBuf,

    /// 项目类型（由标识文件决定）
    pub project_type: ProjectType,

    /// 总大小（不含被剪枝的目录）
    pub size: u64,

    /// 文件数量（不含被剪枝的目录）
    pub file_count: usize,

    /// Git 同步状态
    pub status: VcsStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProjectType {
    /// 只有 Git 仓库
    Git,

    /// Node.js 项目
    NodeJs,

    /// Go 项目
    Go,

    /// Python 项目
    Python,

    /// Rust 项目
    Rust,

    /// Java/Maven 项目
    Java,

    /// PHP/Composer 项目
    Php,
}

/// Git 同步状态，按探测步骤的短路顺序排列
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VcsStatus {
    /// 没有 .git
    NotVersioned,

    /// HEAD 无法解析
    NoCommits,

    /// 工作区有改动（优先于远程判断）
    Uncommitted,

    /// 没有配置远程仓库
    NoRemote,

    /// 干净且有远程
    Synced,

    /// git 查询超时
    Unknown,
}

impl Project {
    /// 用路径最后一段作为名称创建项目
    pub fn new(
        path: PathBuf,
        project_type: ProjectType,
        size: u64,
        file_count: usize,
        status: VcsStatus,
    ) -> Self {
        Self {
            name: display_name(&path),
            path,
            project_type,
            size,
            file_count,
            status,
        }
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

impl ProjectType {
    /// 表格中显示的短标签
    pub fn tag(&self) -> &'static str {
        match self {
            ProjectType::Git => "Git",
            ProjectType::NodeJs => "JS",
            ProjectType::Go => "Go",
            ProjectType::Python => "Py",
            ProjectType::Rust => "Rust",
            ProjectType::Java => "Java",
            ProjectType::Php => "PHP",
        }
    }
}

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl VcsStatus {
    pub fn label(&self) -> &'static str {
        match self {
            VcsStatus::NotVersioned => "—",
            VcsStatus::NoCommits => "No Commits",
            VcsStatus::Uncommitted => "Uncommitted",
            VcsStatus::NoRemote => "No Remote",
            VcsStatus::Synced => "Synced",
            VcsStatus::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for VcsStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
