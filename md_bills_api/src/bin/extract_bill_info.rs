use std::path::PathBuf;
use anyhow::Context;
use clap::Parser;
use md_bills_api::bill_record::{FieldMap, FieldValue, BillRecord};
use md_bills_api::bill_summary::{normalize, write_summary_file};
use md_bills_api::document::HtmlDocument;
use md_bills_api::parse_bill_details::{extract_details_tab_info, extract_top_box};

/// Extract the summary fields from a saved bill details page and write them as CSV.
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// The saved HTML page.
    #[clap(value_parser)]
    html: PathBuf,
    /// Where to write the CSV summary.
    #[clap(short, long, value_parser, default_value = "bill_info_output.csv")]
    output: PathBuf,
}

fn or_na(value:Option<String>) -> String { value.unwrap_or_else(||"N/A".to_string()) }

fn main() -> anyhow::Result<()> {
    md_bills_api::init_logging();
    let args = Args::parse();
    let html = std::fs::read(&args.html).with_context(||format!("Could not read {}",args.html.display()))?;
    let doc = HtmlDocument::parse(&html);
    let top_box : FieldMap<String> = extract_top_box(&doc.root());
    let details : FieldMap<FieldValue> = extract_details_tab_info(&doc.root());
    println!("Top Box:");
    for field in ["Title","Sponsored by","Status"] {
        println!("{}: {}",field,or_na(top_box.get(field).cloned()));
    }
    println!("\nDetails Tab Info:");
    for field in ["Synopsis","Committees"] {
        println!("{}: {}",field,or_na(details.get(field).map(FieldValue::to_string)));
    }
    let pairs = normalize(&BillRecord::from_sections(&top_box,&details));
    write_summary_file(&args.output,&pairs)?;
    println!("\nWrote {}",args.output.display());
    Ok(())
}
