use std::path::Path;
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;

use crate::config::DefaultConfig;
use crate::models::VcsStatus;
use crate::scanner::noise_filter::GIT_DIR;

/// Git 状态探测器 - 通过 git 命令行判断仓库的同步状态
#[derive(Debug, Clone)]
pub struct GitAnalyzer {
    /// 单条命令的超时时间
    timeout: Duration,
}

/// 一条 git 命令的结果
#[derive(Debug, Clone, PartialEq, Eq)]
enum GitOutput {
    /// 退出码为 0，附带标准输出
    Success(String),

    /// 启动失败或退出码非 0
    Failed,

    /// 超过超时时间，子进程已被杀死
    TimedOut,
}

impl GitOutput {
    /// 失败按空结果处理
    fn is_empty(&self) -> bool {
        match self {
            GitOutput::Success(stdout) => stdout.trim().is_empty(),
            GitOutput::Failed | GitOutput::TimedOut => true,
        }
    }
}

impl GitAnalyzer {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    /// 探测目录的 Git 同步状态。
    ///
    /// 只看 `path` 本身，不向下遍历。所有命令失败都被吞掉当作空结果，
    /// 任何一条命令超时则返回 [`VcsStatus::Unknown`]。
    pub async fn probe_status(&self, path: &Path) -> VcsStatus {
        if !path.join(GIT_DIR).exists() {
            return VcsStatus::NotVersioned;
        }

        match self.run_git(path, &["rev-parse", "--verify", "HEAD"]).await {
            GitOutput::Success(_) => {}
            GitOutput::Failed => return VcsStatus::NoCommits,
            GitOutput::TimedOut => return VcsStatus::Unknown,
        }

        let remotes = self.run_git(path, &["remote"]).await;
        let changes = self.run_git(path, &["status", "--short"]).await;

        resolve_status(&remotes, &changes)
    }

    /// 在 `dir` 中执行一条只读 git 命令
    async fn run_git(&self, dir: &Path, args: &[&str]) -> GitOutput {
        let output = Command::new("git")
            .args(args)
            .current_dir(dir)
            .env("GIT_TERMINAL_PROMPT", "0")
            .env("GIT_OPTIONAL_LOCKS", "0")
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .kill_on_drop(true)
            .output();

        match tokio::time::timeout(self.timeout, output).await {
            Err(_) => {
                tracing::warn!(
                    "git {} 在 {} 超时（{:?}）",
                    args.join(" "),
                    dir.display(),
                    self.timeout
                );
                GitOutput::TimedOut
            }
            Ok(Err(e)) => {
                tracing::debug!("无法执行 git {}: {}", args.join(" "), e);
                GitOutput::Failed
            }
            Ok(Ok(output)) if output.status.success() => {
                GitOutput::Success(String::from_utf8_lossy(&output.stdout).into_owned())
            }
            Ok(Ok(output)) => {
                tracing::debug!(
                    "git {} 在 {} 退出码 {:?}",
                    args.join(" "),
                    dir.display(),
                    output.status.code()
                );
                GitOutput::Failed
            }
        }
    }
}

impl Default for GitAnalyzer {
    fn default() -> Self {
        Self::new(Duration::from_secs(DefaultConfig::GIT_TIMEOUT_SECS))
    }
}

/// HEAD 已确认存在后，由远程列表和工作区改动决定状态
fn resolve_status(remotes: &GitOutput, changes: &GitOutput) -> VcsStatus {
    if *remotes == GitOutput::TimedOut || *changes == GitOutput::TimedOut {
        return VcsStatus::Unknown;
    }

    if !changes.is_empty() {
        VcsStatus::Uncommitted
    } else if remotes.is_empty() {
        VcsStatus::NoRemote
    } else {
        VcsStatus::Synced
    }
}
