use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};

use bytes::Bytes;
use tracing::debug;

use ouro_object::ObjectId;

use crate::error::{GitError, GitResult};
use crate::show::decode_show_raw;

/// Handle on a git working directory.
///
/// Purely a subprocess wrapper: no repository state is cached, every call
/// runs a fresh `git` command in `workdir`.
pub struct GitRepo {
    workdir: PathBuf,
}

impl GitRepo {
    /// Use the repository containing `workdir`.
    pub fn open(workdir: impl Into<PathBuf>) -> Self {
        Self {
            workdir: workdir.into(),
        }
    }

    /// Use the repository containing the current directory.
    pub fn current_dir() -> Self {
        Self::open(".")
    }

    /// Fetch the raw body of the commit named by `rev`.
    pub fn fetch_commit_body(&self, rev: &str) -> GitResult<Bytes> {
        let raw = self.run(&["show", "--pretty=raw", rev], None)?;
        Ok(Bytes::from(decode_show_raw(&raw)))
    }

    /// Store `body` as a commit object and return its id.
    pub fn write_commit(&self, body: &[u8]) -> GitResult<ObjectId> {
        let out = self.run(&["hash-object", "-t", "commit", "--stdin", "-w"], Some(body))?;
        let printed = String::from_utf8_lossy(&out);
        let id = ObjectId::from_hex(printed.trim())?;
        debug!(id = %id, "wrote commit object");
        Ok(id)
    }

    /// Move the repository's current position to `rev`, discarding
    /// uncommitted local changes.
    pub fn hard_reset(&self, rev: &str) -> GitResult<()> {
        self.run(&["reset", "--hard", rev], None)?;
        Ok(())
    }

    /// Run one git command, returning its stdout.
    ///
    /// On a non-zero exit the error carries git's own output verbatim.
    fn run(&self, args: &[&str], stdin: Option<&[u8]>) -> GitResult<Vec<u8>> {
        let mut command = Command::new("git");
        command
            .args(args)
            .current_dir(&self.workdir)
            .stdin(if stdin.is_some() {
                Stdio::piped()
            } else {
                Stdio::null()
            })
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        let mut process = command.spawn()?;
        if let Some(input) = stdin {
            process
                .stdin
                .take()
                .ok_or_else(|| std::io::Error::other("child stdin unavailable"))?
                .write_all(input)?;
        }
        let output = process.wait_with_output()?;
        if !output.status.success() {
            let mut combined = String::from_utf8_lossy(&output.stderr).into_owned();
            combined.push_str(&String::from_utf8_lossy(&output.stdout));
            return Err(GitError::CommandFailed {
                command: args.join(" "),
                output: combined.trim_end().to_string(),
            });
        }
        Ok(output.stdout)
    }
}
