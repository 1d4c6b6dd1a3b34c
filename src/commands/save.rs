//! Save workflow.
//!
//! A fixed, linear sequence: resolve the message, make sure the save log
//! exists, record intent, then gate on `git --version`, the `.git` marker,
//! `git add <data>/`, `git diff --cached --quiet` and finally `git commit`.
//! Nothing is retried and every failure ends the run.

use std::io::{self, Write};
use std::path::Path;

use chrono::{DateTime, Local};

use super::options::SaveOptions;
use crate::config::{AppConfig, RepoConfig};
use crate::constants::messages;
use crate::error::Result;
use crate::git::runner::SystemRunner;
use crate::git::{CommandRunner, GitCli};
use crate::savelog::SaveLog;
use crate::ui;

/// How a save run ended.
///
/// Workflow failures are outcomes rather than errors: they are written to the
/// log, shown to the operator and mapped to exit code 1. Only problems with the
/// save log itself surface as `Err` from [`SaveRunner::run`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    /// Commit created.
    Saved,
    /// Staged diff was empty, nothing committed.
    NothingToSave,
    /// `git --version` could not be run or exited non-zero.
    GitMissing,
    /// No `.git` in the base directory.
    NotInitialized,
    /// `git add` could not be started.
    StageFailed(String),
    /// `git diff --cached --quiet` could not be started.
    DiffFailed(String),
    /// `git commit` ran and exited non-zero.
    CommitRejected,
    /// `git commit` could not be started.
    CommitFailed(String),
}

impl SaveOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, SaveOutcome::Saved | SaveOutcome::NothingToSave)
    }

    pub fn exit_code(&self) -> i32 {
        if self.is_success() { 0 } else { 1 }
    }

    /// Line written to the save log and shown to the operator.
    pub fn message(&self) -> String {
        match self {
            SaveOutcome::Saved => messages::SAVED.to_string(),
            SaveOutcome::NothingToSave => messages::NOTHING_TO_SAVE.to_string(),
            SaveOutcome::GitMissing => messages::GIT_MISSING.to_string(),
            SaveOutcome::NotInitialized => messages::NOT_INITIALIZED.to_string(),
            SaveOutcome::StageFailed(reason) => format!("{}: {}", messages::ADD_FAILED, reason),
            SaveOutcome::DiffFailed(reason) => format!("{}: {}", messages::DIFF_FAILED, reason),
            SaveOutcome::CommitRejected => messages::COMMIT_FAILED.to_string(),
            SaveOutcome::CommitFailed(reason) => {
                format!("{}: {}", messages::COMMIT_FAILED, reason)
            }
        }
    }

    /// Remediation lines printed after the message. Never logged.
    pub fn hints(&self) -> Vec<String> {
        match self {
            SaveOutcome::GitMissing => vec![
                rust_i18n::t!("save.hint.download", url = "https://git-scm.com/downloads")
                    .to_string(),
            ],
            SaveOutcome::NotInitialized => vec![
                "  git init".to_string(),
                "  git add .".to_string(),
                "  git commit -m 'Initial setup'".to_string(),
            ],
            _ => Vec::new(),
        }
    }
}

/// Runs the save workflow against a [`CommandRunner`].
///
/// All paths resolve against the git facade's base directory; the process
/// working directory is left alone.
pub struct SaveRunner<R> {
    git: GitCli<R>,
    log: SaveLog,
    stage_path: String,
}

impl<R: CommandRunner> SaveRunner<R> {
    pub fn new(git: GitCli<R>, log: SaveLog, stage_path: impl Into<String>) -> Self {
        Self {
            git,
            log,
            stage_path: stage_path.into(),
        }
    }

    pub fn from_config(runner: R, repo: &RepoConfig, base_dir: &Path) -> Self {
        Self::new(
            GitCli::new(runner, repo.git_program.clone(), base_dir),
            SaveLog::new(repo.log_path(base_dir)),
            repo.stage_path(),
        )
    }

    pub fn log(&self) -> &SaveLog {
        &self.log
    }

    pub fn run(&self, message: Option<&str>) -> Result<SaveOutcome> {
        self.run_at(message, Local::now())
    }

    /// Same as [`run`](Self::run) with an explicit clock reading for the
    /// generated message.
    pub fn run_at(&self, message: Option<&str>, now: DateTime<Local>) -> Result<SaveOutcome> {
        let message = crate::message::resolve(message, now);

        self.log.ensure()?;
        self.log
            .append(&format!("{} {}", messages::SAVING_PREFIX, message))?;

        let outcome = self.execute(&message)?;
        if outcome.is_success() {
            tracing::info!("Save finished: {:?}", outcome);
        } else {
            tracing::warn!("Save failed: {:?}", outcome);
        }
        self.log.append(&outcome.message())?;
        Ok(outcome)
    }

    fn execute(&self, message: &str) -> Result<SaveOutcome> {
        match self.git.version() {
            Ok(output) if output.success() => {
                tracing::debug!("Using {}", output.stdout.trim());
            }
            Ok(output) => {
                tracing::warn!("git --version exited with {:?}", output.code);
                return Ok(SaveOutcome::GitMissing);
            }
            Err(e) => {
                tracing::warn!("git --version could not run: {}", e);
                return Ok(SaveOutcome::GitMissing);
            }
        }

        if !self.git.is_initialized() {
            return Ok(SaveOutcome::NotInitialized);
        }

        // A non-zero exit from `git add` is only logged; the diff check decides.
        match self.git.add(&self.stage_path) {
            Ok(output) => {
                let text = output.combined();
                if !text.is_empty() {
                    self.log.append(&text)?;
                }
            }
            Err(e) => return Ok(SaveOutcome::StageFailed(e.to_string())),
        }

        match self.git.staged_diff_quiet() {
            Ok(output) if output.success() => return Ok(SaveOutcome::NothingToSave),
            Ok(_) => {}
            Err(e) => return Ok(SaveOutcome::DiffFailed(e.to_string())),
        }

        match self.git.commit(message) {
            Ok(output) => {
                self.log.append(&output.combined())?;
                if output.success() {
                    Ok(SaveOutcome::Saved)
                } else {
                    Ok(SaveOutcome::CommitRejected)
                }
            }
            Err(e) => Ok(SaveOutcome::CommitFailed(e.to_string())),
        }
    }
}

/// Write an outcome the way the CLI shows it.
///
/// Every line goes to `out`, failures and their hints included, so an
/// operator capturing stdout sees the whole result.
pub fn report(outcome: &SaveOutcome, colored: bool, out: &mut impl Write) -> io::Result<()> {
    let message = outcome.message();
    match outcome {
        SaveOutcome::Saved => writeln!(out, "{}", ui::success(&message, colored))?,
        SaveOutcome::NothingToSave => writeln!(out, "{}", ui::info(&message, colored))?,
        _ => {
            writeln!(out, "{}", ui::failure(&message, colored))?;
            for hint in outcome.hints() {
                writeln!(out, "{}", ui::hint(&hint, colored))?;
            }
        }
    }
    out.flush()
}

/// Entry point for the CLI. Returns the process exit code.
pub fn run(options: &SaveOptions, config: &AppConfig) -> Result<i32> {
    let base_dir = config.repo.resolve_base_dir()?;
    tracing::debug!("Base directory: {}", base_dir.display());

    let runner = SaveRunner::from_config(SystemRunner, &config.repo, &base_dir);
    let outcome = runner.run(options.message)?;
    report(&outcome, options.colored, &mut io::stdout().lock())?;
    Ok(outcome.exit_code())
}
