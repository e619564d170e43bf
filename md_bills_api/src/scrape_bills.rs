//! Scrape a range of bills: for each, the bill text, a summary of the details page, the fiscal note and the witness list.
//!
//! Each of these four steps can fail independently (many bills have no fiscal note or witness list yet,
//! and the server is not always reliable). A failure is logged and recorded in `run_summary.json`, and
//! we carry on with the next step and the next bill.

use std::fmt;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::time::Duration;
use anyhow::Context;
use serde::{Serialize,Deserialize};
use tracing::{debug, info, warn};
use crate::bill_summary::{normalize, write_summary};
use crate::config::Config;
use crate::document::HtmlDocument;
use crate::download::{looks_like_pdf, save_download, Fetcher};
use crate::error::ScrapeError;
use crate::legislation_site::{BillId, LegislationSite};
use crate::parse_bill_details::extract_bill_record;
use crate::parse_witness_list::{extract_witness_list, write_witness_list};

pub const RUN_SUMMARY_FILE : &'static str = "run_summary.json";

/// What happened to one step for one bill.
#[derive(Serialize,Deserialize,Debug,Clone,Copy,Eq,PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum StepOutcome {
    Saved,
    /// The page was there but did not have the section we wanted.
    Missing,
    Failed,
    /// Turned off in the config.
    Skipped,
}

#[derive(Serialize,Deserialize,Debug,Clone,Eq,PartialEq)]
pub struct BillOutcome {
    pub bill : String,
    pub bill_pdf : StepOutcome,
    pub summary : StepOutcome,
    pub fiscal_note : StepOutcome,
    pub witness_list : StepOutcome,
}

impl BillOutcome {
    fn steps(&self) -> [StepOutcome;4] { [self.bill_pdf,self.summary,self.fiscal_note,self.witness_list] }
}

/// Counts of step outcomes over a whole run.
#[derive(Debug,Default,Clone,Copy,Eq,PartialEq)]
pub struct RunTally {
    pub saved : usize,
    pub missing : usize,
    pub failed : usize,
    pub skipped : usize,
}

impl RunTally {
    pub fn of(outcomes:&[BillOutcome]) -> Self {
        let mut tally = RunTally::default();
        for step in outcomes.iter().flat_map(BillOutcome::steps) {
            match step {
                StepOutcome::Saved => tally.saved+=1,
                StepOutcome::Missing => tally.missing+=1,
                StepOutcome::Failed => tally.failed+=1,
                StepOutcome::Skipped => tally.skipped+=1,
            }
        }
        tally
    }
}

impl fmt::Display for RunTally {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} saved, {} missing, {} failed, {} skipped", self.saved, self.missing, self.failed, self.skipped)
    }
}

pub struct BillScraper<'a,F:Fetcher> {
    config : &'a Config,
    fetcher : F,
    site : LegislationSite,
    dir : PathBuf,
}

impl <'a,F:Fetcher> BillScraper<'a,F> {
    pub fn new(config:&'a Config,fetcher:F) -> anyhow::Result<Self> {
        Ok(BillScraper{ config, fetcher, site: LegislationSite::for_config(config)?, dir: config.output_dir() })
    }

    pub fn output_dir(&self) -> &Path { &self.dir }

    /// Scrape every bill in the configured range, then write `run_summary.json`.
    /// Only problems with the output directory itself are returned as errors.
    pub fn run(&self) -> anyhow::Result<Vec<BillOutcome>> {
        std::fs::create_dir_all(&self.dir).with_context(||format!("Could not create {}",self.dir.display()))?;
        let mut outcomes = Vec::new();
        for number in self.config.first_bill..=self.config.last_bill {
            if number>self.config.first_bill && self.config.request_delay_ms>0 {
                std::thread::sleep(Duration::from_millis(self.config.request_delay_ms));
            }
            let bill = BillId{ chamber: self.config.chamber, number };
            info!("Processing bill {}",bill);
            outcomes.push(self.scrape_bill(&bill));
        }
        let summary_path = self.dir.join(RUN_SUMMARY_FILE);
        let file = File::create(&summary_path).with_context(||format!("Could not create {}",summary_path.display()))?;
        serde_json::to_writer_pretty(file,&outcomes)?;
        info!("Finished {} bills: {}",outcomes.len(),RunTally::of(&outcomes));
        Ok(outcomes)
    }

    /// Run all the enabled steps for one bill. Never fails; problems are logged and recorded in the outcome.
    pub fn scrape_bill(&self,bill:&BillId) -> BillOutcome {
        let steps = &self.config.steps;
        BillOutcome {
            bill: bill.to_string(),
            bill_pdf: self.step(steps.bill_pdf,bill,"bill text",||self.download_pdf(&self.site.bill_pdf_url(bill),&bill.bill_pdf_filename())),
            summary: self.step(steps.summary,bill,"summary",||self.scrape_summary(bill)),
            fiscal_note: self.step(steps.fiscal_note,bill,"fiscal note",||self.download_pdf(&self.site.fiscal_note_url(bill),&bill.fiscal_note_filename())),
            witness_list: self.step(steps.witness_list,bill,"witness list",||self.scrape_witness_list(bill)),
        }
    }

    fn step(&self,enabled:bool,bill:&BillId,what:&str,run:impl FnOnce()->Result<PathBuf,ScrapeError>) -> StepOutcome {
        if !enabled { return StepOutcome::Skipped; }
        match run() {
            Ok(path) => {
                info!("Saved {} for {} to {}",what,bill,path.display());
                StepOutcome::Saved
            }
            Err(e) if e.is_missing_section() => {
                info!("No {} for {}: {}",what,bill,e);
                StepOutcome::Missing
            }
            Err(e) => {
                warn!("Could not get {} for {}: {}",what,bill,e);
                StepOutcome::Failed
            }
        }
    }

    /// Download a PDF into the output directory, refusing anything that is not a PDF.
    pub fn download_pdf(&self,url:&str,filename:&str) -> Result<PathBuf,ScrapeError> {
        let content = self.fetcher.fetch(url)?;
        if !looks_like_pdf(&content) { return Err(ScrapeError::NotPdf{ url: url.to_string() }); }
        save_download(&self.dir,filename,&content)
    }

    /// Download the details page and write `bill_0001_summary.csv`.
    pub fn scrape_summary(&self,bill:&BillId) -> Result<PathBuf,ScrapeError> {
        let content = self.fetcher.fetch(&self.site.details_url(bill))?;
        let record = extract_bill_record(&HtmlDocument::parse(&content).root());
        let pairs = normalize(&record);
        for (field,value) in &pairs { debug!("{} {}: {}",bill,field,value); }
        let filename = bill.summary_filename();
        let mut csv = Vec::new();
        write_summary(&mut csv,&pairs).map_err(|source|ScrapeError::Csv{ path: self.dir.join(&filename), source })?;
        save_download(&self.dir,&filename,&csv)
    }

    /// Download the witness sign up page and write `bill_0001_witness_list.csv`, if it has a witness table.
    pub fn scrape_witness_list(&self,bill:&BillId) -> Result<PathBuf,ScrapeError> {
        let content = self.fetcher.fetch(&self.site.witness_list_url(bill))?;
        let witnesses = extract_witness_list(&HtmlDocument::parse(&content).root()).ok_or(ScrapeError::MissingSection("witness list table"))?;
        let filename = bill.witness_list_filename();
        let mut csv = Vec::new();
        write_witness_list(&mut csv,&witnesses).map_err(|source|ScrapeError::Csv{ path: self.dir.join(&filename), source })?;
        save_download(&self.dir,&filename,&csv)
    }
}
