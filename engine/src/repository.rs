//! Read-only repository metadata through the `git` CLI.
//!
//! Nothing here fails the session: a missing `git`, a directory outside a
//! repository or an unborn branch all degrade to empty fields.

use std::path::Path;
use std::process::Command;

use anyhow::{Context, Result, bail};

use committed_types::{Author, Branch, HeadCommit, Repository};

const FIELD_SEPARATOR: char = '\u{1f}';
const HEAD_FORMAT: &str = "--format=%H%x1f%an%x1f%ae%x1f%s%x1f%b";

/// Describe the repository containing `dir`.
#[must_use]
pub fn load(dir: &Path) -> Repository {
    let users = match user(dir) {
        Ok(Some(author)) => vec![author],
        Ok(None) => Vec::new(),
        Err(err) => {
            tracing::warn!("Failed to read git user: {err:#}");
            Vec::new()
        }
    };

    let branch = branch(dir).unwrap_or_else(|err| {
        tracing::warn!("Failed to read git branch: {err:#}");
        Branch::default()
    });

    let head = match git(dir, &["log", "-1", HEAD_FORMAT]) {
        Ok(out) => parse_head(&out),
        Err(err) => {
            tracing::debug!("No head commit: {err:#}");
            None
        }
    };

    Repository {
        users,
        branch,
        head,
    }
}

fn user(dir: &Path) -> Result<Option<Author>> {
    let name = config_value(dir, "user.name")?;
    let email = config_value(dir, "user.email")?;
    if name.is_empty() && email.is_empty() {
        return Ok(None);
    }
    Ok(Some(Author::new(name, email)))
}

/// `git config --get` exits 1 for an unset key; that is an empty value.
fn config_value(dir: &Path, key: &str) -> Result<String> {
    let output = Command::new("git")
        .args(["config", "--get", key])
        .current_dir(dir)
        .output()
        .with_context(|| format!("Failed to execute git config {key}"))?;
    if output.status.code() == Some(1) {
        return Ok(String::new());
    }
    if !output.status.success() {
        bail!(
            "git config {key} failed: {}",
            String::from_utf8_lossy(&output.stderr).trim()
        );
    }
    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}

fn branch(dir: &Path) -> Result<Branch> {
    let local = git(dir, &["rev-parse", "--abbrev-ref", "HEAD"])?;
    let remote = git(
        dir,
        &["rev-parse", "--abbrev-ref", "--symbolic-full-name", "@{u}"],
    )
    .unwrap_or_default();
    let refs = git(dir, &["tag", "--points-at", "HEAD"])
        .map(|out| parse_refs(&out))
        .unwrap_or_default();

    Ok(Branch {
        local: local.trim().to_string(),
        remote: remote.trim().to_string(),
        refs,
    })
}

fn git(dir: &Path, args: &[&str]) -> Result<String> {
    let output = Command::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .with_context(|| format!("Failed to execute git {}", args.join(" ")))?;

    if !output.status.success() {
        bail!(
            "git {} failed: {}",
            args.join(" "),
            String::from_utf8_lossy(&output.stderr).trim()
        );
    }
    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

fn parse_refs(out: &str) -> Vec<String> {
    out.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_head(out: &str) -> Option<HeadCommit> {
    let mut fields = out.splitn(5, FIELD_SEPARATOR);
    let hash = fields.next()?.trim();
    if hash.is_empty() {
        return None;
    }
    let name = fields.next().unwrap_or_default();
    let email = fields.next().unwrap_or_default();
    let subject = fields.next().unwrap_or_default();
    let body = fields.next().unwrap_or_default();

    Some(HeadCommit {
        hash: hash.to_string(),
        author: Author::new(name, email),
        subject: subject.trim().to_string(),
        body: body.trim().to_string(),
    })
}
