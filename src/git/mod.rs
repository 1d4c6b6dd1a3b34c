//! Git 调用抽象
//!
//! 所有版本控制语义都交给外部 `git` 可执行文件处理，这里只负责发起子进程、
//! 收集退出码和输出文本。

pub mod runner;

use std::path::{Path, PathBuf};

use crate::constants;
use crate::error::Result;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// 一次子进程调用的结果
///
/// # 字段
/// - `code`: 退出码（被信号终止时为 `None`）
/// - `stdout` / `stderr`: 解码后的输出文本（非 UTF-8 字节按 lossy 处理）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    /// 构造一个只有退出码、没有输出的结果
    pub fn with_code(code: i32) -> Self {
        Self {
            code: Some(code),
            ..Default::default()
        }
    }

    /// 退出码是否为 0
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }

    /// stdout 在前、stderr 在后的合并输出
    pub fn combined(&self) -> String {
        format!("{}{}", self.stdout, self.stderr)
    }
}

/// 子进程执行能力
///
/// 主要实现：[`SystemRunner`](runner::SystemRunner)。测试中可以用
/// `MockCommandRunner`（`test-utils` feature）或手写 fake 替换，
/// 无需真实的 git。
///
/// # 错误
/// 只有进程无法启动时才返回 `Err`；进程正常退出但退出码非 0 属于 `Ok`。
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait CommandRunner {
    fn run(&self, program: &str, args: &[String], cwd: &Path) -> Result<CommandOutput>;
}

impl<T: CommandRunner + ?Sized> CommandRunner for &T {
    fn run(&self, program: &str, args: &[String], cwd: &Path) -> Result<CommandOutput> {
        (**self).run(program, args, cwd)
    }
}

/// 基于 [`CommandRunner`] 的 git 子命令封装
///
/// 所有调用都在 `base_dir` 下执行，不修改进程的当前目录。
pub struct GitCli<R> {
    runner: R,
    program: String,
    base_dir: PathBuf,
}

impl<R: CommandRunner> GitCli<R> {
    pub fn new(runner: R, program: impl Into<String>, base_dir: impl Into<PathBuf>) -> Self {
        Self {
            runner,
            program: program.into(),
            base_dir: base_dir.into(),
        }
    }

    fn git(&self, args: &[&str]) -> Result<CommandOutput> {
        let args: Vec<String> = args.iter().map(|a| a.to_string()).collect();
        tracing::debug!("Running {} {:?} in {}", self.program, args, self.base_dir.display());
        let output = self.runner.run(&self.program, &args, &self.base_dir)?;
        tracing::debug!("{} exited with {:?}", self.program, output.code);
        Ok(output)
    }

    /// `git --version`
    pub fn version(&self) -> Result<CommandOutput> {
        self.git(&["--version"])
    }

    /// 检查 `base_dir` 下是否存在 `.git`（目录或文件，兼容 worktree/submodule）
    pub fn is_initialized(&self) -> bool {
        self.base_dir.join(constants::repo::METADATA_DIR).exists()
    }

    /// `git add <path>`
    pub fn add(&self, path: &str) -> Result<CommandOutput> {
        self.git(&["add", path])
    }

    /// `git diff --cached --quiet`
    ///
    /// 退出码 0 表示暂存区没有差异。
    pub fn staged_diff_quiet(&self) -> Result<CommandOutput> {
        self.git(&["diff", "--cached", "--quiet"])
    }

    /// `git commit -m <message>`
    ///
    /// 走 git CLI 而不是库调用，hooks、GPG 签名和用户 git config 都照常生效。
    pub fn commit(&self, message: &str) -> Result<CommandOutput> {
        self.git(&["commit", "-m", message])
    }
}
