pub mod config;
pub mod error;
pub mod document;
pub mod bill_record;
pub mod parse_bill_details;
pub mod bill_summary;
pub mod parse_witness_list;
pub mod legislation_site;
pub mod download;
pub mod scrape_bills;

/// Log to stderr, at the level given by `RUST_LOG` or `info` if that is not set.
pub fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_|tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}
