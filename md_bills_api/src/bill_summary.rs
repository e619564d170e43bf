//! Turn an extracted bill into the two column `Field,Value` CSV summary.
//!
//! Two things get tidied on the way out: committee lists are joined with `"; "`, and the sponsor
//! text, which comes off the page with names glued to titles (`DelegateSmith,DelegateJones`), is
//! given its spaces back.

use std::io::{Read, Write};
use std::path::Path;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use crate::bill_record::{BillRecord, FieldMap, FieldValue, COMMITTEES, SPONSORED_BY, STATUS, SYNOPSIS, TITLE};
use crate::error::ScrapeError;

static DELEGATE_WORD : Lazy<Regex> = Lazy::new(||Regex::new(r"\bDelegate([A-Za-z]*)").unwrap());
static DELEGATE_THEN_COMMA : Lazy<Regex> = Lazy::new(||Regex::new(r"\b(Delegates?),").unwrap());
static COMMA_THEN_DELEGATE : Lazy<Regex> = Lazy::new(||Regex::new(r",(Delegates?)\b").unwrap());
static MULTIPLE_SPACES : Lazy<Regex> = Lazy::new(||Regex::new(r"  +").unwrap());

/// `Delegate` or `Delegates` run together with the following name.
fn split_glued_title(caps:&Captures) -> String {
    let rest = &caps[1];
    let mut chars = rest.chars();
    match (chars.next(),chars.next()) {
        (None,_) | (Some('s'),None) => caps[0].to_string(),
        (Some('s'),Some(c)) if c.is_ascii_uppercase() => format!("Delegates {}",&rest[1..]),
        _ => format!("Delegate {}",rest),
    }
}

/// Put back the spaces lost around `Delegate`/`Delegates` when the page text was flattened.
/// Applying this twice gives the same as applying it once.
pub fn clean_sponsors(sponsors:&str) -> String {
    let s = DELEGATE_WORD.replace_all(sponsors,split_glued_title);
    let s = DELEGATE_THEN_COMMA.replace_all(&s,"$1, ");
    let s = COMMA_THEN_DELEGATE.replace_all(&s,", $1");
    let s = MULTIPLE_SPACES.replace_all(&s," ");
    s.trim_end_matches(' ').to_string()
}

fn clean_sponsor_field(value:String) -> String {
    if value.is_empty() { value } else { clean_sponsors(&value) }
}

/// The summary rows for a full bill record, always all five canonical fields in canonical order.
pub fn normalize(record:&BillRecord) -> Vec<(String,String)> {
    let text = |v:&Option<String>| v.clone().unwrap_or_default();
    vec![
        (TITLE.to_string(),text(&record.title)),
        (SPONSORED_BY.to_string(),clean_sponsor_field(text(&record.sponsored_by))),
        (STATUS.to_string(),text(&record.status)),
        (SYNOPSIS.to_string(),text(&record.synopsis)),
        (COMMITTEES.to_string(),record.committees.as_ref().map(FieldValue::flatten).unwrap_or_default()),
    ]
}

/// The summary rows for an arbitrary set of fields, in the order they were inserted.
/// Unlike [normalize], a missing Committees field is not added.
pub fn normalize_mapping(fields:FieldMap<FieldValue>) -> Vec<(String,String)> {
    fields.into_iter().map(|(field,value)|{
        let value = value.flatten();
        let value = if field==SPONSORED_BY { clean_sponsor_field(value) } else { value };
        (field,value)
    }).collect()
}

/// Write the summary as CSV with a `Field,Value` header.
pub fn write_summary<W:Write>(writer:W,pairs:&[(String,String)]) -> csv::Result<()> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(["Field","Value"])?;
    for (field,value) in pairs {
        csv.write_record([field,value])?;
    }
    csv.flush()?;
    Ok(())
}

/// Write (overwriting) a summary CSV file.
pub fn write_summary_file(path:&Path,pairs:&[(String,String)]) -> Result<(),ScrapeError> {
    let file = std::fs::File::create(path).map_err(|source|ScrapeError::Write{ path: path.to_path_buf(), source })?;
    write_summary(file,pairs).map_err(|source|ScrapeError::Csv{ path: path.to_path_buf(), source })
}

/// Read back a summary written by [write_summary].
pub fn read_summary<R:Read>(reader:R) -> csv::Result<Vec<(String,String)>> {
    let mut csv = csv::Reader::from_reader(reader);
    let mut res = Vec::new();
    for record in csv.records() {
        let record = record?;
        res.push((record.get(0).unwrap_or("").to_string(),record.get(1).unwrap_or("").to_string()));
    }
    Ok(res)
}
