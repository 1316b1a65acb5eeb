use clap::Parser;
use std::path::{Path, PathBuf};
use anyhow::{Context, Result};

#[derive(Parser, Debug)]
#[command(name = "project-scout")]
#[command(about = "扫描目录树中的代码项目，并在可排序的终端表格中浏览")]
#[command(version)]
pub struct Cli {
    /// 要扫描的根目录 (默认为当前目录)
    pub path: Option<PathBuf>,

    /// 配置文件路径
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// 详细输出
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// 解析扫描根目录。
    ///
    /// 未给出路径时使用当前目录；相对路径相对于当前目录解析。
    /// 规范化失败（例如路径不存在）时保留拼接后的路径，扫描结果为空。
    pub fn resolve_root(&self) -> Result<PathBuf> {
        let cwd = std::env::current_dir().context("无法获取当前目录")?;
        Ok(resolve_against(&cwd, self.path.as_deref()))
    }
}

fn resolve_against(cwd: &Path, path: Option<&Path>) -> PathBuf {
    let Some(path) = path else {
        return cwd.to_path_buf();
    };

    let joined = cwd.join(path);
    joined.canonicalize().unwrap_or(joined)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_parse_defaults() {
        let cli = Cli::try_parse_from(["project-scout"]).unwrap();
        assert_eq!(cli.path, None);
        assert_eq!(cli.config, None);
        assert!(!cli.verbose);
    }

    #[test]
    fn test_parse_all_arguments() {
        let cli = Cli::try_parse_from([
            "project-scout",
            "-v",
            "--config",
            "/tmp/scout.toml",
            "~/code",
        ])
        .unwrap();
        assert_eq!(cli.path, Some(PathBuf::from("~/code")));
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/scout.toml")));
        assert!(cli.verbose);
    }

    #[test]
    fn test_rejects_extra_positional() {
        assert!(Cli::try_parse_from(["project-scout", "a", "b"]).is_err());
    }

    #[test]
    fn test_resolve_against_cwd() {
        let temp_dir = tempdir().unwrap();
        let cwd = temp_dir.path().canonicalize().unwrap();
        std::fs::create_dir(cwd.join("code")).unwrap();

        assert_eq!(resolve_against(&cwd, None), cwd);
        assert_eq!(resolve_against(&cwd, Some(Path::new("code"))), cwd.join("code"));
        assert_eq!(resolve_against(&cwd, Some(Path::new("code/.."))), cwd);
        // 不存在的路径保持原样
        assert_eq!(
            resolve_against(&cwd, Some(Path::new("missing"))),
            cwd.join("missing")
        );
    }

    #[test]
    fn test_absolute_path_is_kept() {
        let temp_dir = tempdir().unwrap();
        let root = temp_dir.path().canonicalize().unwrap();
        assert_eq!(resolve_against(Path::new("/elsewhere"), Some(&root)), root);
    }
}
