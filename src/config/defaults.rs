use std::collections::HashSet;

pub struct DefaultConfig;

impl DefaultConfig {
    /// git 命令默认超时（秒）
    pub const GIT_TIMEOUT_SECS: u64 = 5;

    /// 表格默认高度
    pub const TABLE_HEIGHT: u16 = 15;

    /// 默认剪枝的目录名（依赖缓存、构建产物、VCS 内部、vendor）
    pub fn default_ignore_dirs() -> HashSet<String> {
        [
            "node_modules",
            "venv",
            ".venv",
            ".git",
            "dist",
            "build",
            "vendor",
            "target",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect()
    }
}
