//! Command handlers: scan, order and print, or hand a game off to Steam.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use steamsweep_ranker::{SortKey, sort};
use steamsweep_steam::{
    GameRecord, LibraryContext, ScanReport, request_uninstall, reveal_in_file_browser,
    scan_installed,
};

use crate::config::Config;

/// Widest name shown in the table before truncation.
const NAME_WIDTH: usize = 40;

/// Options of the `list` command.
#[derive(Args, Debug, Default)]
pub struct ListArgs {
    /// Order by recency, size or name.
    #[arg(long, short, value_parser = parse_sort_key)]
    pub sort: Option<SortKey>,

    /// Newest / largest / Z first.
    #[arg(long, conflicts_with = "asc")]
    pub desc: bool,

    /// Oldest / smallest / A first.
    #[arg(long)]
    pub asc: bool,

    /// Print at most N games.
    #[arg(long, short = 'n')]
    pub limit: Option<usize>,

    /// Print records as JSON.
    #[arg(long)]
    pub json: bool,
}

fn parse_sort_key(s: &str) -> Result<SortKey, String> {
    s.parse::<SortKey>().map_err(|e| e.to_string())
}

/// One command invocation. Every command scans afresh.
pub struct Session {
    root: Option<PathBuf>,
}

impl Session {
    /// `root` overrides auto-detection when set.
    pub fn new(root: Option<PathBuf>) -> Self {
        Self { root }
    }

    fn context(&self) -> Option<LibraryContext> {
        match &self.root {
            Some(root) => Some(LibraryContext::for_root(root.clone())),
            None => LibraryContext::discover(),
        }
    }

    fn scan(&self) -> Option<ScanReport> {
        let ctx = self.context()?;
        tracing::info!(root = %ctx.root.display(), "scanning Steam libraries");
        Some(scan_installed(&ctx))
    }

    /// Prints installed games in the requested order.
    pub fn list(&self, config: &Config, args: &ListArgs) -> anyhow::Result<()> {
        let Some(report) = self.scan() else {
            println!("Steam installation not found.");
            return Ok(());
        };

        let key = args.sort.unwrap_or(config.sort_by);
        let descending = if args.desc {
            true
        } else if args.asc {
            false
        } else {
            config.descending
        };

        let mut records = sort(report.records, key, descending);
        if let Some(limit) = args.limit.or(config.limit) {
            records.truncate(limit);
        }

        let stdout = io::stdout();
        let mut out = stdout.lock();
        if args.json {
            serde_json::to_writer_pretty(&mut out, &records)?;
            writeln!(out)?;
        } else {
            write_table(&mut out, &records)?;
            if !report.failures.is_empty() {
                writeln!(
                    out,
                    "{} manifest(s) could not be read and were skipped.",
                    report.failures.len()
                )?;
            }
        }
        Ok(())
    }

    /// Opens Steam's uninstall dialog for each known id after confirmation.
    pub fn uninstall(&self, ids: &[String], yes: bool) -> anyhow::Result<()> {
        let records = self.scan().map(|r| r.records).unwrap_or_default();

        let mut targets = Vec::new();
        for id in ids {
            match find_record(&records, id) {
                Some(record) => targets.push(record),
                None => eprintln!("No installed game with id {id}, skipping."),
            }
        }
        if targets.is_empty() {
            anyhow::bail!("none of the given ids are installed");
        }

        println!("Uninstall {} game(s)?", targets.len());
        for record in &targets {
            println!("  {:>10}  {} ({:.2} GB)", record.id, record.display_name(), record.size_gb);
        }
        println!("Steam will open an uninstall dialog for each.");

        if !yes {
            let stdin = io::stdin();
            let mut stdout = io::stdout();
            if !confirm(&mut stdin.lock(), &mut stdout)? {
                println!("Cancelled.");
                return Ok(());
            }
        }

        let mut failed = 0;
        for record in &targets {
            if let Err(e) = request_uninstall(&record.id) {
                tracing::warn!(app_id = %record.id, error = %e, "uninstall request failed");
                failed += 1;
            }
        }
        if failed > 0 {
            anyhow::bail!("{failed} uninstall request(s) failed");
        }
        Ok(())
    }

    /// Opens the folder holding a game's manifest.
    pub fn reveal(&self, id: &str) -> anyhow::Result<()> {
        let records = self.scan().map(|r| r.records).unwrap_or_default();
        let record = find_record(&records, id)
            .with_context(|| format!("no installed game with id {id}"))?;
        reveal_in_file_browser(record)?;
        Ok(())
    }
}

fn find_record<'a>(records: &'a [GameRecord], id: &str) -> Option<&'a GameRecord> {
    records.iter().find(|r| r.id == id)
}

/// Asks a yes/no question; anything but `y`/`yes` is a no.
fn confirm(input: &mut impl BufRead, output: &mut impl Write) -> io::Result<bool> {
    write!(output, "Continue? [y/N] ")?;
    output.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;
    Ok(matches!(
        answer.trim().to_ascii_lowercase().as_str(),
        "y" | "yes"
    ))
}

fn write_table(out: &mut impl Write, records: &[GameRecord]) -> io::Result<()> {
    if records.is_empty() {
        return writeln!(out, "No installed games found.");
    }

    writeln!(
        out,
        "{:<width$}  {:>10}  {:<16}  {:>10}",
        "Game",
        "Size (GB)",
        "Last updated",
        "App id",
        width = NAME_WIDTH
    )?;
    writeln!(out, "{}", "-".repeat(NAME_WIDTH + 2 + 10 + 2 + 16 + 2 + 10))?;

    for record in records {
        writeln!(
            out,
            "{:<width$}  {:>10.2}  {:<16}  {:>10}",
            truncate(record.display_name(), NAME_WIDTH),
            record.size_gb,
            record.last_updated_str,
            record.id,
            width = NAME_WIDTH
        )?;
    }

    let total: f64 = records.iter().map(|r| r.size_gb).sum();
    writeln!(out, "{} game(s), {:.2} GB total", records.len(), total)
}

fn truncate(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        return s.to_string();
    }
    let mut out: String = s.chars().take(width - 1).collect();
    out.push('…');
    out
}
