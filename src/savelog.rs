//! 追加式保存日志
//!
//! 文件格式：首次创建时写入两行头部，之后每条记录为
//! `\n[YYYY-MM-DD HH:MM:SS] <message>\n`。每次写入都以追加模式打开再关闭，
//! 不加锁，并发调用可能交错写入。

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};

use crate::constants::log::{HEADER, TIMESTAMP_FORMAT};
use crate::error::Result;

#[derive(Debug, Clone)]
pub struct SaveLog {
    path: PathBuf,
}

impl SaveLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 日志文件不存在时创建父目录并写入头部
    ///
    /// 用 `create_new` 创建，已存在的文件（包括同时启动的另一个进程刚创建的）
    /// 不会被改写。
    pub fn ensure(&self) -> Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        match OpenOptions::new()
            .append(true)
            .create_new(true)
            .open(&self.path)
        {
            Ok(mut file) => {
                file.write_all(HEADER.as_bytes())?;
                tracing::debug!("Created save log at {}", self.path.display());
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::AlreadyExists => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    /// 以当前本地时间追加一条记录
    pub fn append(&self, message: &str) -> Result<()> {
        self.append_at(message, Local::now())
    }

    pub fn append_at(&self, message: &str, at: DateTime<Local>) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        write!(file, "\n[{}] {}\n", at.format(TIMESTAMP_FORMAT), message)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn test_ensure_creates_parent_and_header() {
        let dir = TempDir::new().unwrap();
        let log = SaveLog::new(dir.path().join("data").join("git-commits.log"));

        log.ensure().unwrap();

        let content = fs::read_to_string(log.path()).unwrap();
        assert_eq!(content, "Ignition Git Save Log\n=====================\n");
    }

    #[test]
    fn test_ensure_keeps_existing_content() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("git-commits.log");
        fs::write(&path, "existing\n").unwrap();

        let log = SaveLog::new(&path);
        log.ensure().unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "existing\n");
    }

    #[test]
    fn test_append_formats_entry() {
        let dir = TempDir::new().unwrap();
        let log = SaveLog::new(dir.path().join("git-commits.log"));
        log.ensure().unwrap();

        let at = Local.with_ymd_and_hms(2025, 1, 2, 3, 4, 5).unwrap();
        log.append_at("Saving: hello", at).unwrap();
        log.append_at("done", at).unwrap();

        let content = fs::read_to_string(log.path()).unwrap();
        assert_eq!(
            content,
            "Ignition Git Save Log\n=====================\n\
             \n[2025-01-02 03:04:05] Saving: hello\n\
             \n[2025-01-02 03:04:05] done\n"
        );
    }

    #[test]
    fn test_concurrent_ensure_writes_header_once() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("data").join("git-commits.log");

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let log = SaveLog::new(&path);
                std::thread::spawn(move || {
                    log.ensure().unwrap();
                    log.append(&format!("Saving: run {}", i)).unwrap();
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content.matches("Ignition Git Save Log").count(), 1);
        assert_eq!(content.matches("] Saving: run ").count(), 8);
    }

    #[test]
    fn test_ensure_twice_keeps_entries() {
        let dir = TempDir::new().unwrap();
        let log = SaveLog::new(dir.path().join("git-commits.log"));

        log.ensure().unwrap();
        log.append("Saving: first").unwrap();
        log.ensure().unwrap();

        let content = fs::read_to_string(log.path()).unwrap();
        assert!(content.starts_with(HEADER));
        assert!(content.contains("Saving: first"));
    }

    #[test]
    fn test_ensure_fails_when_parent_is_a_file() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("data"), "not a directory").unwrap();

        let log = SaveLog::new(dir.path().join("data").join("git-commits.log"));
        assert!(log.ensure().is_err());
    }
}
