use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, ValueEnum};

use blog_linkcheck::{CheckConfig, SiteLayout, check_site, output};

use crate::logging;

/// Output format for the report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Plain text: one line per broken link plus a summary.
    #[default]
    Human,
    /// The full report as pretty-printed JSON.
    Json,
}

/// Check that internal links in blog posts resolve to real content and assets.
///
/// Exits 0 when every internal link resolves, 1 when any link is broken,
/// a post could not be read, or the blog section is missing.
#[derive(Debug, Parser)]
#[command(name = "blog-linkcheck", version, about)]
pub struct Cli {
    /// Repository root containing the content and static directories
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// Content directory, relative to the root
    #[arg(long, default_value = "content")]
    pub content_dir: PathBuf,

    /// Static asset directory, relative to the root
    #[arg(long, default_value = "static")]
    pub static_dir: PathBuf,

    /// Report format
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,

    /// Skip posts larger than this many bytes (reported as unreadable)
    #[arg(long, default_value_t = CheckConfig::default().max_file_size)]
    pub max_file_size: u64,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    fn layout(&self) -> SiteLayout {
        let mut layout = SiteLayout::new(&self.root);
        layout.content_dir.clone_from(&self.content_dir);
        layout.static_dir.clone_from(&self.static_dir);
        layout
    }

    fn check_config(&self) -> CheckConfig {
        let mut config = CheckConfig::default();
        config.max_file_size = self.max_file_size;
        config
    }
}

/// Parse arguments, run the check, print the report and return the exit code.
pub fn run() -> Result<i32> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let layout = cli.layout();
    tracing::info!(
        content = %layout.content_root().display(),
        assets = %layout.static_root().display(),
        "checking internal links"
    );

    let report = check_site(&layout, &cli.check_config())?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match cli.format {
        OutputFormat::Human => output::write_human(&report, &mut out)?,
        OutputFormat::Json => output::write_json(&report, &mut out)?,
    }
    out.flush()?;

    Ok(i32::from(!report.ok))
}
