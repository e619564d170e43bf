//! Settings for a scraping run, read from `config.toml`. Every field has a default, so the file is optional.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use anyhow::Context;
use serde::Deserialize;

pub const CONFIG_FILE_NAME: &str = "config.toml";
pub const DEFAULT_BASE_URL : &'static str = "https://mgaleg.maryland.gov";
const DEFAULT_USER_AGENT : &'static str = "md-bills-scraper/0.1 (bulk download of public bill records)";

/// Which chamber the bills were introduced in.
#[derive(Debug,Clone,Copy,Deserialize,Eq,PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Chamber {
    House,
    Senate,
}

impl Chamber {
    /// The lower case prefix used in URLs, `hb` or `sb`.
    pub fn prefix(&self) -> &'static str {
        match self {
            Chamber::House => "hb",
            Chamber::Senate => "sb",
        }
    }
    fn folder_name(&self) -> &'static str {
        match self {
            Chamber::House => "house",
            Chamber::Senate => "senate",
        }
    }
}

impl fmt::Display for Chamber {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.folder_name())
    }
}

impl FromStr for Chamber {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "house" | "hb" => Ok(Chamber::House),
            "senate" | "sb" => Ok(Chamber::Senate),
            _ => Err(format!("Unknown chamber {}, expecting house or senate",s)),
        }
    }
}

/// Which downloads to do for each bill.
#[derive(Deserialize,Debug,Clone,Eq,PartialEq)]
#[serde(default)]
pub struct Steps {
    pub bill_pdf : bool,
    pub summary : bool,
    pub fiscal_note : bool,
    pub witness_list : bool,
}

impl Default for Steps {
    fn default() -> Self {
        Steps { bill_pdf: true, summary: true, fiscal_note: true, witness_list: true }
    }
}

#[derive(Deserialize,Debug,Clone,Eq,PartialEq)]
#[serde(default)]
pub struct Config {
    /// Year of the legislative session, e.g. 2025.
    pub year : u16,
    /// Session suffix. RS is the regular session.
    pub session : String,
    pub chamber : Chamber,
    pub first_bill : u32,
    /// Inclusive.
    pub last_bill : u32,
    /// Where files are saved. Defaults to `md_house_bill_2025` or similar.
    pub output_dir : Option<PathBuf>,
    pub base_url : String,
    pub user_agent : String,
    pub request_timeout_secs : u64,
    /// Pause between bills, to be polite to the server.
    pub request_delay_ms : u64,
    pub steps : Steps,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            year: 2025,
            session: "RS".to_string(),
            chamber: Chamber::House,
            first_bill: 1,
            last_bill: 1999,
            output_dir: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            request_timeout_secs: 60,
            request_delay_ms: 0,
            steps: Steps::default(),
        }
    }
}

impl Config {
    pub fn from_toml(text:&str) -> anyhow::Result<Config> {
        let config : Config = toml::de::from_str(text)?;
        config.check()?;
        Ok(config)
    }

    /// Read a config file.
    pub fn load(path:&Path) -> anyhow::Result<Config> {
        let file = fs::read_to_string(path).with_context(||format!("Could not read {}",path.display()))?;
        Config::from_toml(&file).with_context(||format!("Could not parse {}",path.display()))
    }

    /// Read a config file if there is one, otherwise use the defaults.
    pub fn load_or_default(path:&Path) -> anyhow::Result<Config> {
        if path.exists() { Config::load(path) } else { Ok(Config::default()) }
    }

    pub fn check(&self) -> anyhow::Result<()> {
        if self.first_bill==0 || self.first_bill>self.last_bill { anyhow::bail!("Bill range {} to {} is empty or starts at 0",self.first_bill,self.last_bill); }
        if self.last_bill>9999 { anyhow::bail!("Bill numbers only have four digits, {} is too large",self.last_bill); }
        Ok(())
    }

    /// The session as it appears in URLs, e.g. `2025RS`.
    pub fn session_code(&self) -> String {
        format!("{}{}",self.year,self.session)
    }

    pub fn output_dir(&self) -> PathBuf {
        self.output_dir.clone().unwrap_or_else(||PathBuf::from(format!("md_{}_bill_{}",self.chamber,self.year)))
    }
}
