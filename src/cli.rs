// src/cli.rs
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::assemble::FailurePolicy;
use crate::config::consts::{FIRST_MONSTER_ID, INDEX_URL, WORKERS};
use crate::config::options::{AppOptions, ExportFormat};
use crate::core::net::HttpSource;
use crate::progress::Progress;
use crate::specs::creature::SpeedMode;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum PolicyArg {
    /// Leave creatures with unreadable fields out
    Skip,
    /// Keep them with empty cells
    Partial,
    /// Stop at the first unreadable field
    Abort,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum FormatArg {
    Csv,
    Tsv,
    Json,
}

#[derive(Debug, Parser)]
#[command(author, version, about = "Scrape dandwiki 5e creature stat blocks into a table")]
pub struct Cli {
    /// Monster index page to discover creature links from
    #[arg(long, value_name = "URL", default_value = INDEX_URL)]
    index_url: String,

    /// Only scrape the first N creatures found
    #[arg(long, value_name = "N")]
    limit: Option<usize>,

    /// Parallel page fetches
    #[arg(long, value_name = "N", default_value_t = WORKERS)]
    workers: usize,

    /// monster_id of the first creature
    #[arg(long, value_name = "ID", default_value_t = FIRST_MONSTER_ID)]
    first_id: u32,

    #[arg(long, value_enum, default_value_t = PolicyArg::Skip)]
    policy: PolicyArg,

    /// Read every fly/swim entry on its own instead of reproducing the legacy columns
    #[arg(long)]
    corrected_speeds: bool,

    #[arg(long, value_enum, default_value_t = FormatArg::Csv)]
    format: FormatArg,

    /// Output file, or a directory ending in '/'
    #[arg(short, long, value_name = "PATH")]
    out: Option<PathBuf>,

    #[arg(long)]
    include_headers: bool,

    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    pub fn verbose(&self) -> bool { self.verbose }

    pub fn to_options(&self) -> AppOptions {
        let mut opts = AppOptions::default();

        let scrape = &mut opts.scrape;
        scrape.index_url = self.index_url.clone();
        scrape.limit = self.limit;
        scrape.workers = self.workers.max(1);
        scrape.first_id = self.first_id;
        scrape.policy = match self.policy {
            PolicyArg::Skip    => FailurePolicy::Skip,
            PolicyArg::Partial => FailurePolicy::Partial,
            PolicyArg::Abort   => FailurePolicy::Abort,
        };
        if self.corrected_speeds {
            scrape.extract.speed_mode = SpeedMode::Corrected;
        }

        let export = &mut opts.export;
        export.format = match self.format {
            FormatArg::Csv  => ExportFormat::Csv,
            FormatArg::Tsv  => ExportFormat::Tsv,
            FormatArg::Json => ExportFormat::Json,
        };
        export.include_headers = self.include_headers;
        if let Some(out) = &self.out {
            export.set_path(&out.to_string_lossy());
        }
        opts
    }
}

/// Progress lines on stderr.
struct ConsoleProgress {
    total: usize,
    seen: usize,
}

impl ConsoleProgress {
    fn tick(&mut self) -> String {
        self.seen += 1;
        s!("[{}/{}]", self.seen, self.total)
    }
}

impl Progress for ConsoleProgress {
    fn begin(&mut self, total: usize) { self.total = total; }

    fn log(&mut self, msg: &str) { eprintln!("{msg}"); }

    fn item_done(&mut self, monster_id: u32, name: &str) {
        let t = self.tick();
        eprintln!("{t} #{monster_id} {name}");
    }

    fn item_failed(&mut self, monster_id: u32, reason: &str) {
        let t = self.tick();
        eprintln!("{t} #{monster_id} failed: {reason}");
    }
}

pub fn run(cli: &Cli) -> Result<PathBuf, crate::error::ScrapeError> {
    let opts = cli.to_options();
    let source = HttpSource::new()?;
    let mut progress = ConsoleProgress { total: 0, seen: 0 };

    let dataset = crate::scrape::collect_creatures(&source, &opts.scrape, Some(&mut progress))?;
    crate::file::write_export(&opts.export, &dataset)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_map_to_options() {
        let cli = Cli::parse_from([
            "monster_scrape", "--limit", "5", "--workers", "0", "--policy", "partial",
            "--corrected-speeds", "--format", "json", "-o", "data/beasts.csv",
        ]);
        let opts = cli.to_options();
        assert_eq!(opts.scrape.limit, Some(5));
        assert_eq!(opts.scrape.workers, 1);
        assert_eq!(opts.scrape.policy, FailurePolicy::Partial);
        assert_eq!(opts.scrape.extract.speed_mode, SpeedMode::Corrected);
        assert_eq!(opts.export.out_path(), PathBuf::from("data").join("beasts.json"));
    }

    #[test]
    fn defaults() {
        let opts = Cli::parse_from(["monster_scrape"]).to_options();
        assert_eq!(opts, AppOptions::default());
    }
}
