use std::path::Path;
use walkdir::WalkDir;

use crate::scanner::noise_filter::NoiseFilter;

/// 大小计算器 - 负责统计项目的文件数量和总大小
#[derive(Debug, Clone)]
pub struct SizeCalculator {
    /// 剪枝规则（与项目发现共用）
    filter: NoiseFilter,

    /// 是否跟随符号链接
    follow_symlinks: bool,
}

/// 项目大小统计结果
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProjectSizeInfo {
    /// 文件总大小（字节）
    pub size: u64,

    /// 文件数量
    pub file_count: usize,
}

impl SizeCalculator {
    pub fn new(filter: NoiseFilter, follow_symlinks: bool) -> Self {
        Self {
            filter,
            follow_symlinks,
        }
    }

    /// 递归统计项目目录，跳过被剪枝的子目录。
    ///
    /// 无法读取的条目直接跳过；无法获取元数据的文件仍计入数量，但不计大小。
    pub fn calculate_project_size(&self, project_path: &Path) -> ProjectSizeInfo {
        let mut info = ProjectSizeInfo::default();

        let walker = WalkDir::new(project_path)
            .follow_links(self.follow_symlinks)
            .into_iter()
            .filter_entry(|entry| !self.filter.should_prune(entry));

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    tracing::debug!("统计大小时跳过条目: {}", e);
                    continue;
                }
            };

            if entry.file_type().is_dir() {
                continue;
            }

            info.file_count += 1;
            match entry.metadata() {
                Ok(metadata) => info.size += metadata.len(),
                Err(e) => tracing::debug!("无法获取 {} 的元数据: {}", entry.path().display(), e),
            }
        }

        info
    }
}

impl Default for SizeCalculator {
    fn default() -> Self {
        Self::new(NoiseFilter::new(), false)
    }
}
