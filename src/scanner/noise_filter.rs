use std::collections::HashSet;
use walkdir::DirEntry;

use crate::config::{DefaultConfig, ScanConfig};

/// Git 元数据目录名
pub const GIT_DIR: &str = ".git";

/// 目录剪枝规则，项目发现与大小统计共用同一份
#[derive(Debug, Clone)]
pub struct NoiseFilter {
    /// 需要剪枝的目录名
    ignore_dirs: HashSet<String>,
}

impl NoiseFilter {
    /// 使用内置黑名单
    pub fn new() -> Self {
        Self {
            ignore_dirs: DefaultConfig::default_ignore_dirs(),
        }
    }

    /// 内置黑名单加上配置中的额外目录
    pub fn from_config(scan: &ScanConfig) -> Self {
        let mut filter = Self::new();
        filter
            .ignore_dirs
            .extend(scan.extra_ignore_dirs.iter().cloned());
        filter
    }

    /// 目录名是否属于噪声：在黑名单中，或是 `.git` 以外的隐藏目录
    pub fn is_noise_dir(&self, name: &str) -> bool {
        self.ignore_dirs.contains(name) || (name.starts_with('.') && name != GIT_DIR)
    }

    /// 遍历时是否跳过该条目。遍历起点本身从不剪枝。
    pub fn should_prune(&self, entry: &DirEntry) -> bool {
        entry.depth() > 0
            && entry.file_type().is_dir()
            && self.is_noise_dir(&entry.file_name().to_string_lossy())
    }
}

impl Default for NoiseFilter {
    fn default() -> Self {
        Self::new()
    }
}
