use std::path::PathBuf;
use clap::Parser;
use md_bills_api::config::{Chamber, Config, CONFIG_FILE_NAME};
use md_bills_api::download::HttpFetcher;
use md_bills_api::scrape_bills::{BillScraper, RunTally};

/// Download bill texts, summaries, fiscal notes and witness lists for a range of Maryland bills.
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Config file. Used if present; all settings have defaults.
    #[clap(short, long, value_parser, default_value = CONFIG_FILE_NAME)]
    config: PathBuf,
    /// Session year, e.g. 2025.
    #[clap(short, long, value_parser)]
    year: Option<u16>,
    /// house or senate.
    #[clap(long, value_parser)]
    chamber: Option<Chamber>,
    /// First bill number.
    #[clap(long, value_parser)]
    first: Option<u32>,
    /// Last bill number (inclusive).
    #[clap(long, value_parser)]
    last: Option<u32>,
    #[clap(short, long, value_parser)]
    output_dir: Option<PathBuf>,
    /// Milliseconds to wait between bills.
    #[clap(long, value_parser)]
    delay_ms: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    md_bills_api::init_logging();
    let args = Args::parse();
    let mut config = Config::load_or_default(&args.config)?;
    if let Some(year) = args.year { config.year = year; }
    if let Some(chamber) = args.chamber { config.chamber = chamber; }
    if let Some(first) = args.first { config.first_bill = first; }
    if let Some(last) = args.last { config.last_bill = last; }
    if let Some(dir) = args.output_dir { config.output_dir = Some(dir); }
    if let Some(delay) = args.delay_ms { config.request_delay_ms = delay; }
    config.check()?;
    let scraper = BillScraper::new(&config,HttpFetcher::new(&config)?)?;
    println!("Downloading {} bills {} to {} of {} into {}",config.chamber,config.first_bill,config.last_bill,config.session_code(),scraper.output_dir().display());
    let outcomes = scraper.run()?;
    println!("Ran successfully: {}",RunTally::of(&outcomes));
    Ok(())
}
