//! Where things live on https://mgaleg.maryland.gov, and where we put them locally.

use std::fmt;
use anyhow::Context;
use url::Url;
use crate::config::{Chamber, Config};

/// A bill, e.g. HB0001.
#[derive(Debug,Clone,Copy,Eq,PartialEq)]
pub struct BillId {
    pub chamber : Chamber,
    pub number : u32,
}

impl BillId {
    /// Bill number padded to four digits, as used in all URLs and file names.
    pub fn padded(&self) -> String { format!("{:04}",self.number) }

    /// The prefix used in local file names, `bill_0001`.
    pub fn file_stem(&self) -> String { format!("bill_{}",self.padded()) }
    pub fn bill_pdf_filename(&self) -> String { format!("{}.pdf",self.file_stem()) }
    pub fn summary_filename(&self) -> String { format!("{}_summary.csv",self.file_stem()) }
    pub fn fiscal_note_filename(&self) -> String { format!("{}_fiscal_note.pdf",self.file_stem()) }
    pub fn witness_list_filename(&self) -> String { format!("{}_witness_list.csv",self.file_stem()) }
}

impl fmt::Display for BillId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", self.chamber.prefix().to_uppercase(), self.padded())
    }
}

/// The website for one session.
pub struct LegislationSite {
    base : String, // no trailing slash
    session : String,
}

impl LegislationSite {
    pub fn new(base_url:&str,session:&str) -> anyhow::Result<Self> {
        Url::parse(base_url).with_context(||format!("Bad base url {}",base_url))?;
        Ok(LegislationSite{ base: base_url.trim_end_matches('/').to_string(), session: session.to_string() })
    }

    pub fn for_config(config:&Config) -> anyhow::Result<Self> {
        LegislationSite::new(&config.base_url,&config.session_code())
    }

    fn url(&self,path:&str) -> String {
        format!("{}{}",self.base,path)
    }

    /// The page with the top box and details tab, e.g. `/mgawebsite/Legislation/Details/hb0001?ys=2025RS`.
    pub fn details_url(&self,bill:&BillId) -> String {
        self.url(&format!("/mgawebsite/Legislation/Details/{}{}?ys={}",bill.chamber.prefix(),bill.padded(),self.session))
    }

    /// The witness sign up page, e.g. `/mgawebsite/Legislation/WitnessSignup/HB0001?ys=2025RS`.
    pub fn witness_list_url(&self,bill:&BillId) -> String {
        self.url(&format!("/mgawebsite/Legislation/WitnessSignup/{}?ys={}",bill,self.session))
    }

    /// The first reader text of the bill, e.g. `/2025RS/bills/hb/hb0001F.pdf`.
    pub fn bill_pdf_url(&self,bill:&BillId) -> String {
        let prefix = bill.chamber.prefix();
        self.url(&format!("/{}/bills/{}/{}{}F.pdf",self.session,prefix,prefix,bill.padded()))
    }

    /// The fiscal and policy note. These are filed in ten folders by the last digit of the bill number,
    /// e.g. HB0123 is `/2025RS/fnotes/bil_0003/hb0123.pdf`.
    pub fn fiscal_note_url(&self,bill:&BillId) -> String {
        self.url(&format!("/{}/fnotes/bil_{:04}/{}{}.pdf",self.session,bill.number%10,bill.chamber.prefix(),bill.padded()))
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn site() -> LegislationSite { LegislationSite::new("https://mgaleg.maryland.gov","2025RS").unwrap() }
    const HB1 : BillId = BillId{ chamber: Chamber::House, number: 1 };

    #[test]
    fn test_urls() {
        assert_eq!("https://mgaleg.maryland.gov/mgawebsite/Legislation/Details/hb0001?ys=2025RS",site().details_url(&HB1));
        assert_eq!("https://mgaleg.maryland.gov/mgawebsite/Legislation/WitnessSignup/HB0001?ys=2025RS",site().witness_list_url(&HB1));
        assert_eq!("https://mgaleg.maryland.gov/2025RS/bills/hb/hb0001F.pdf",site().bill_pdf_url(&HB1));
        assert_eq!("https://mgaleg.maryland.gov/2025RS/fnotes/bil_0001/hb0001.pdf",site().fiscal_note_url(&HB1));
    }

    #[test]
    fn test_fiscal_note_folder_and_senate() {
        let sb = BillId{ chamber: Chamber::Senate, number: 1230 };
        assert_eq!("https://mgaleg.maryland.gov/2025RS/fnotes/bil_0000/sb1230.pdf",site().fiscal_note_url(&sb));
        assert_eq!("https://mgaleg.maryland.gov/2025RS/fnotes/bil_0007/hb0457.pdf",site().fiscal_note_url(&BillId{ chamber: Chamber::House, number: 457 }));
        assert_eq!("SB1230",sb.to_string());
    }

    #[test]
    fn test_file_names() {
        assert_eq!("bill_0001.pdf",HB1.bill_pdf_filename());
        assert_eq!("bill_0001_summary.csv",HB1.summary_filename());
        assert_eq!("bill_0001_fiscal_note.pdf",HB1.fiscal_note_filename());
        assert_eq!("bill_0001_witness_list.csv",HB1.witness_list_filename());
    }

    #[test]
    fn test_base_url_with_path_and_bad_base() {
        let local = LegislationSite::new("http://localhost:8080/mirror/","2024RS").unwrap();
        assert_eq!("http://localhost:8080/mirror/2024RS/bills/hb/hb0001F.pdf",local.bill_pdf_url(&HB1));
        assert!(LegislationSite::new("not a url","2025RS").is_err());
    }
}
