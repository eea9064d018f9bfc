use std::{
    ffi::OsStr,
    path::{Path, PathBuf},
};

use sdb::config::{BASE_URL, DEFAULT_CONCURRENCY, DEFAULT_OUTPUT, DEPARTMENT};

/// Download students from the Warwick student database into a spreadsheet.
#[derive(clap::Parser)]
#[command(version, about)]
pub struct Args {
    /// Get all students from a specific year [default: current year]
    #[arg(long)]
    pub year: Option<i32>,
    /// Only get students in this year of study
    #[arg(long)]
    pub student_year: Option<u32>,
    /// Output file
    #[arg(short, long)]
    pub output: Option<PathBuf>,
    /// Extra positionals are accepted; only the first is used
    #[arg(value_name = "FILE", hide = true)]
    pub file: Vec<PathBuf>,
    /// Department code used in the listing path
    #[arg(long, env = "ROSTER_DEPARTMENT", default_value = DEPARTMENT)]
    pub department: String,
    #[arg(long, env = "ROSTER_BASE_URL", default_value = BASE_URL)]
    pub base_url: String,
    /// Browser cookie; prompted for when missing
    #[arg(long, env = "ROSTER_COOKIE", hide_env_values = true)]
    pub cookie: Option<String>,
    /// JSON file with "Cookie" and optional "User-Agent" keys; wins over --cookie
    #[arg(long, value_name = "file")]
    pub headers: Option<PathBuf>,
    /// Skip the profile pages and leave out the pronoun column
    #[arg(long)]
    pub no_pronouns: bool,
    /// Profile requests in flight at once
    #[arg(short = 'j', long, default_value_t = DEFAULT_CONCURRENCY)]
    pub concurrency: usize,
    /// Connect directly, ignoring proxy environment variables
    #[arg(long)]
    pub no_proxy: bool,
}

impl Args {
    /// `-o` wins over the positional file.
    pub fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .or_else(|| self.file.first().cloned())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT))
    }

    /// The listing path is joined onto the base verbatim.
    pub fn base(&self) -> String {
        if self.base_url.ends_with('/') {
            self.base_url.clone()
        } else {
            format!("{}/", self.base_url)
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum OutputError {
    MissingDirectory,
    NotExcel,
}

impl OutputError {
    pub const fn message(&self) -> &'static str {
        match self {
            Self::MissingDirectory => "Output directory does not exist",
            Self::NotExcel => "Output file must be an excel file",
        }
    }
}

pub fn check_output(path: &Path) -> Result<(), OutputError> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    if !dir.is_dir() {
        return Err(OutputError::MissingDirectory);
    }
    if path.extension().and_then(OsStr::to_str) != Some("xlsx") {
        return Err(OutputError::NotExcel);
    }
    Ok(())
}
