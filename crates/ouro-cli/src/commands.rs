use anyhow::Context;
use colored::Colorize;
use tracing::info;

use ouro_git::GitRepo;
use ouro_search::{Coordinator, SearchConfig, SearchError};

use crate::cli::Cli;

pub fn run(cli: Cli) -> anyhow::Result<()> {
    let repo = GitRepo::current_dir();
    let parent_body = repo
        .fetch_commit_body(&cli.parent)
        .with_context(|| format!("failed to fetch parent commit {}", cli.parent))?;
    let child_body = repo
        .fetch_commit_body(&cli.child)
        .with_context(|| format!("failed to fetch child commit {}", cli.child))?;

    let coordinator = Coordinator::new(SearchConfig {
        prefix_len: cli.prefix_length,
        parallelism: cli.parallelism,
        extra_header: cli.extra_header.clone(),
    })?;

    info!(
        prefix_length = cli.prefix_length,
        parallelism = cli.parallelism,
        "searching"
    );
    let found = match coordinator.search(&parent_body, &child_body) {
        Ok(found) => found,
        Err(err @ SearchError::SpaceExhausted { .. }) => {
            return Err(anyhow::Error::new(err).context(
                "did not succeed just by updating the parent message; \
                 pass --extra-header to add an extra header to the parent \
                 and give the search more text to play with",
            ));
        }
        Err(err) => return Err(err.into()),
    };

    println!(
        "{} parent {}",
        "✓".green().bold(),
        found.parent_id.to_hex().yellow()
    );
    println!(
        "{} child  {}",
        "✓".green().bold(),
        found.child_id.to_hex().yellow()
    );

    if cli.dry_run {
        println!("dry run: no objects written, HEAD untouched");
        return Ok(());
    }

    // Rewind to before the old parent, then store both objects before HEAD
    // moves anywhere near them.
    repo.hard_reset(&format!("{}~1", cli.parent))
        .context("failed to reset to before the parent commit")?;
    let parent_id = repo
        .write_commit(&found.parent_body)
        .context("failed to write new parent commit")?;
    anyhow::ensure!(
        parent_id == found.parent_id,
        "git hashed the new parent to {parent_id}, search computed {}",
        found.parent_id
    );
    let child_id = repo
        .write_commit(&found.child_body)
        .context("failed to write new child commit")?;
    anyhow::ensure!(
        child_id == found.child_id,
        "git hashed the new child to {child_id}, search computed {}",
        found.child_id
    );
    repo.hard_reset(&child_id.to_hex())
        .context("failed to move HEAD to the new child")?;
    println!("{} HEAD is now {}", "✓".green().bold(), child_id.to_hex().yellow());
    Ok(())
}
