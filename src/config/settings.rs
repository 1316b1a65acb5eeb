use serde::Deserialize;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::time::Duration;
use anyhow::{Context, Result};

use crate::config::defaults::DefaultConfig;
use crate::models::SortColumn;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 扫描配置
    pub scan: ScanConfig,

    /// Git 探测配置
    pub git: GitConfig,

    /// 显示配置
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// 在内置黑名单之外额外剪枝的目录名
    pub extra_ignore_dirs: BTreeSet<String>,

    /// 是否跟随符号链接
    pub follow_symlinks: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GitConfig {
    /// 单条 git 命令的超时时间（秒）
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// 启动时的排序列
    pub default_sort: SortColumn,

    /// 启动时是否升序
    pub ascending: bool,

    /// 表格高度（行）
    pub table_height: u16,
}

impl Default for GitConfig {
    fn default() -> Self {
        Self {
            timeout_secs: DefaultConfig::GIT_TIMEOUT_SECS,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            default_sort: SortColumn::Name,
            ascending: true,
            table_height: DefaultConfig::TABLE_HEIGHT,
        }
    }
}

impl GitConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Config {
    /// 从文件加载配置
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("无法读取配置文件 {}", path.display()))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("配置文件格式错误 {}", path.display()))?;
        config
            .validate()
            .with_context(|| format!("配置文件取值无效 {}", path.display()))?;
        Ok(config)
    }

    /// 检查解析后的取值
    fn validate(&self) -> Result<()> {
        if self.git.timeout_secs == 0 {
            anyhow::bail!("git.timeout_secs 必须大于 0");
        }
        Ok(())
    }

    /// 获取默认配置文件路径
    pub fn default_config_path() -> Result<PathBuf> {
        let mut path = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("无法找到配置目录"))?;
        path.push("project-scout");
        path.push("config.toml");
        Ok(path)
    }

    /// 加载默认路径的配置，文件不存在时使用默认值
    pub fn load_or_default() -> Result<Self> {
        let config_path = match Self::default_config_path() {
            Ok(path) => path,
            Err(e) => {
                tracing::debug!("{}，使用默认配置", e);
                return Ok(Self::default());
            }
        };

        if config_path.exists() {
            Self::load_from_file(&config_path)
        } else {
            Ok(Self::default())
        }
    }
}
