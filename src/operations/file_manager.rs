use std::path::Path;
use anyhow::{Context, Result};

/// 用系统默认的文件管理器打开目录，不等待其退出
pub fn open_in_file_manager(path: &Path) -> Result<()> {
    tracing::debug!("打开 {}", path.display());

    open::that_detached(path)
        .with_context(|| format!("无法打开目录: {}", path.display()))
}

