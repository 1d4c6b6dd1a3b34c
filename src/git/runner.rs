use std::env;
use std::io;
use std::path::Path;
use std::process::Command;

use super::{CommandOutput, CommandRunner};
use crate::error::{GsaveError, Result};

/// 通过 `std::process::Command` 执行真实子进程
///
/// 程序名先用 `which` 解析（Windows 上会补全 `.exe`），找不到时直接返回
/// `NotFound`，不尝试启动。相对路径（如 `tools/git`）以 `cwd` 为基准，
/// 与子进程的工作目录一致。调用会阻塞到子进程退出，没有超时。
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, args: &[String], cwd: &Path) -> Result<CommandOutput> {
        let resolved =
            which::which_in(program, env::var_os("PATH"), cwd).map_err(|e| GsaveError::Command {
                program: program.to_string(),
                source: io::Error::new(io::ErrorKind::NotFound, e.to_string()),
            })?;

        let output = Command::new(&resolved)
            .args(args)
            .current_dir(cwd)
            .output()
            .map_err(|source| GsaveError::Command {
                program: program.to_string(),
                source,
            })?;

        Ok(CommandOutput {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}
