use std::time::Instant;

use anyhow::{Context, Result, anyhow};
use camino::Utf8PathBuf;

use crate::cli::{Cli, Command, SizesArgs};
use crate::depths::{DEPTH_TABLE, DepthTier};
use crate::{document, output, sizes};

#[derive(Clone, Debug)]
struct RunContext {
    out_dir: Utf8PathBuf,
    dry_run: bool,
}

impl RunContext {
    fn from_cli(cli: &Cli) -> Result<Self> {
        let out_dir = match &cli.out_dir {
            Some(dir) => Utf8PathBuf::from_path_buf(dir.clone()).map_err(|path| {
                anyhow!("output directory {} is not valid UTF-8", path.display())
            })?,
            None => executable_dir()?,
        };

        Ok(Self {
            out_dir,
            dry_run: cli.dry_run,
        })
    }

    fn prepare(&self) -> Result<()> {
        if self.dry_run {
            return Ok(());
        }
        output::ensure_dir(&self.out_dir)
    }
}

/// Fixtures land next to the binary unless `--out-dir` says otherwise.
fn executable_dir() -> Result<Utf8PathBuf> {
    let exe = std::env::current_exe().context("locating the running executable")?;
    let dir = exe
        .parent()
        .ok_or_else(|| anyhow!("executable {} has no parent directory", exe.display()))?;
    Utf8PathBuf::from_path_buf(dir.to_path_buf())
        .map_err(|path| anyhow!("executable directory {} is not valid UTF-8", path.display()))
}

pub fn run(cli: Cli) -> Result<()> {
    let ctx = RunContext::from_cli(&cli)?;
    ctx.prepare()?;
    tracing::debug!(out_dir = %ctx.out_dir, dry_run = ctx.dry_run, "resolved output directory");

    match cli.command.unwrap_or(Command::Recursion) {
        Command::Recursion => write_recursion_fixtures(&ctx, &DEPTH_TABLE).map(drop),
        Command::Sizes(args) => write_size_fixtures(&ctx, &sizes::SIZE_TABLE, args).map(drop),
        Command::All(args) => {
            write_recursion_fixtures(&ctx, &DEPTH_TABLE)?;
            write_size_fixtures(&ctx, &sizes::SIZE_TABLE, args)?;
            Ok(())
        }
    }
}

/// Build and write one file per tier, strictly in order. The first failure aborts the run.
fn write_recursion_fixtures(ctx: &RunContext, tiers: &[DepthTier]) -> Result<Vec<Utf8PathBuf>> {
    let mut written = Vec::with_capacity(tiers.len());

    for tier in tiers {
        let name = tier.file_name();
        let path = ctx.out_dir.join(&name);

        if ctx.dry_run {
            println!(
                "[dry-run] would write {} ({} bytes)",
                path,
                document::encoded_len(tier.depth)
            );
            continue;
        }

        println!("Generating {} depth object", tier.depth);
        let start = Instant::now();
        output::write_fixture(&path, |writer| {
            document::write_document(writer, tier.depth)
        })?;
        tracing::debug!(
            label = tier.label,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "recursion fixture complete"
        );
        println!("File for depth {} saved as {}", tier.depth, name);

        written.push(path);
    }

    Ok(written)
}

/// Existing size fixtures are kept unless `force` is set.
fn write_size_fixtures(
    ctx: &RunContext,
    tiers: &[u64],
    args: SizesArgs,
) -> Result<Vec<Utf8PathBuf>> {
    let mut written = Vec::with_capacity(tiers.len());

    for &megabytes in tiers {
        let name = sizes::file_name(megabytes);
        let path = ctx.out_dir.join(&name);
        let records = sizes::record_count(megabytes);

        if path.exists() && !args.force {
            println!("Skipping {} (already exists; use --force to overwrite)", name);
            continue;
        }

        if ctx.dry_run {
            println!(
                "[dry-run] would write {} ({} bytes)",
                path,
                sizes::encoded_len(records)
            );
            continue;
        }

        println!("Generating {} record array ({} MB)", records, megabytes);
        let start = Instant::now();
        output::write_fixture(&path, |writer| sizes::write_document(writer, records))?;
        tracing::debug!(
            megabytes,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "size fixture complete"
        );
        println!("File for {} MB saved as {}", megabytes, name);

        written.push(path);
    }

    Ok(written)
}
