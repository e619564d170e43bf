//! Parse the witness sign up list for a hearing, from https://mgaleg.maryland.gov/mgawebsite/Legislation/WitnessSignup/HB0001?ys=2025RS
//!
//! A typical table looks like
//! ```text
//! <table id="legislationTestimony">
//!     <tr><th>Name</th><th>Organization</th><th>Position</th><th>Testimony</th></tr>
//!     <tr><td>Jane Doe</td><td>ACLU</td><td>FAV</td><td><a href="...">Written</a></td></tr>
//! </table>
//! ```
//! Most bills have no table at all.

use std::io::Write;
use crate::document::{DocumentNode, Select};

const WITNESS_TABLE_ID : &'static str = "legislationTestimony";

/// One person signed up to testify.
#[derive(Debug,Clone,Eq,PartialEq)]
pub struct WitnessEntry {
    pub name : String,
    pub organization : String,
    pub position : String, // FAV, UNF, FWA or INFO
}

/// The witnesses in the testimony table, or None if the page has no such table.
/// The first row is the header. Rows with fewer than three cells are skipped.
pub fn extract_witness_list<N:DocumentNode>(doc:&N) -> Option<Vec<WitnessEntry>> {
    let table = doc.find_first(Select::Id(WITNESS_TABLE_ID))?;
    let mut res = Vec::new();
    for tr in table.find_all(Select::Tag("tr")).into_iter().skip(1) {
        let tds = tr.find_all(Select::Tag("td"));
        if tds.len()<3 { continue; }
        res.push(WitnessEntry{
            name: tds[0].text_content(),
            organization: tds[1].text_content(),
            position: tds[2].text_content(),
        });
    }
    Some(res)
}

/// Write the witnesses as CSV with a `Name,Organization,Position` header, which is written even if there are no witnesses.
pub fn write_witness_list<W:Write>(writer:W,witnesses:&[WitnessEntry]) -> csv::Result<()> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(["Name","Organization","Position"])?;
    for w in witnesses {
        csv.write_record([&w.name,&w.organization,&w.position])?;
    }
    csv.flush()?;
    Ok(())
}
