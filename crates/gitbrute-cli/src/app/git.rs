//! Thin wrapper around the `git` executable.
//!
//! Every call runs `git -C <repo> ...` as a child process. A non-zero exit
//! is reported together with the command line and whatever git wrote to
//! stderr.

use std::{
    io::Write,
    path::{Path, PathBuf},
    process::{Command, Stdio},
};

use anyhow::{Context, bail};
use gitbrute::{Signature, Solution};

#[derive(Debug, Clone)]
pub struct Git {
    repo: PathBuf,
}

impl Git {
    pub fn new(repo: impl Into<PathBuf>) -> Self {
        Self { repo: repo.into() }
    }

    pub fn repo(&self) -> &Path {
        &self.repo
    }

    fn command(&self) -> Command {
        let mut cmd = Command::new("git");
        cmd.arg("-C").arg(&self.repo);
        cmd
    }

    fn output(&self, args: &[&str]) -> anyhow::Result<Vec<u8>> {
        let output = self
            .command()
            .args(args)
            .stdin(Stdio::null())
            .output()
            .with_context(|| format!("failed to run `git {}`", args.join(" ")))?;

        if !output.status.success() {
            bail!(
                "`git {}` failed ({}): {}",
                args.join(" "),
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            );
        }
        Ok(output.stdout)
    }

    /// Hash of the commit `HEAD` points at.
    pub fn current_hash(&self) -> anyhow::Result<String> {
        let out = self.output(&["rev-parse", "HEAD"])?;
        let out = String::from_utf8(out).context("`git rev-parse HEAD` printed non-UTF-8")?;
        let hash = out.lines().next().unwrap_or_default().trim();
        if hash.is_empty() {
            bail!("`git rev-parse HEAD` printed nothing");
        }
        Ok(hash.to_owned())
    }

    /// Fails unless `HEAD` now points at `expected`.
    ///
    /// A mismatch means git wrote bytes other than the ones searched, so the
    /// new hash does not carry the prefix.
    pub fn expect_head(&self, expected: &str) -> anyhow::Result<()> {
        let head = self.current_hash()?;
        if head != expected {
            bail!("HEAD is {head}, expected {expected}: git rewrote more than the dates");
        }
        Ok(())
    }

    /// Raw bytes of the commit object `hash`, without the object header.
    pub fn cat_commit(&self, hash: &str) -> anyhow::Result<Vec<u8>> {
        self.output(&["cat-file", "commit", hash])
    }

    /// Rewrites `HEAD` with the dates from `solution`.
    ///
    /// The message is passed on stdin and kept verbatim. The committer
    /// identity is taken from `committer` rather than the local git config,
    /// so the new object carries the same bytes that were searched.
    pub fn amend(
        &self,
        solution: &Solution,
        committer: &Signature,
        message: &[u8],
    ) -> anyhow::Result<()> {
        let author_date = format!("--date={}", solution.author);
        let args = [
            "commit",
            "--allow-empty",
            "--amend",
            "--no-gpg-sign",
            "--cleanup=verbatim",
            author_date.as_str(),
            "--file=-",
        ];

        let mut child = self
            .command()
            .args(args)
            .env("GIT_COMMITTER_DATE", solution.committer.to_string())
            .env("GIT_COMMITTER_NAME", committer.name())
            .env("GIT_COMMITTER_EMAIL", committer.email())
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .context("failed to run `git commit --amend`")?;

        child
            .stdin
            .take()
            .context("`git commit --amend` has no stdin")?
            .write_all(message)
            .context("failed to pass the commit message to git")?;

        let output = child
            .wait_with_output()
            .context("failed to wait for `git commit --amend`")?;
        if !output.status.success() {
            bail!(
                "`git {}` failed ({}): {}",
                args.join(" "),
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            );
        }

        tracing::debug!(
            "git: {}",
            String::from_utf8_lossy(&output.stdout).trim()
        );
        Ok(())
    }
}
