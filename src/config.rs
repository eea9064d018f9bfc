use std::{
    fs::File,
    io::{self, BufReader},
    path::Path,
};

use serde::Deserialize;

macro_rules! env_or_default {
    ($name:expr, $default:expr) => {
        if let Some(s) = option_env!($name) {
            s
        } else {
            $default
        }
    };
}

pub const BASE_URL: &str = env_or_default!("ROSTER_BASE_URL", "https://tabula.warwick.ac.uk/");
pub const DEPARTMENT: &str = env_or_default!("ROSTER_DEPARTMENT", "ma");
pub const STUDENT_ENDPOINT: &str = "profiles/department/";
pub const STUDENT_PROFILE_ENDPOINT: &str = "profiles/view/";
/// Large enough that the listing never paginates.
pub const STUDENTS_PER_PAGE: u32 = 10_000;
pub const DEFAULT_OUTPUT: &str = "./students.xlsx";
pub const DEFAULT_CONCURRENCY: usize = 32;

/// Request headers copied out of a logged-in browser session.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ConfigHeaders {
    #[serde(rename = "Cookie")]
    pub cookie: String,
    #[serde(rename = "User-Agent", default)]
    pub user_agent: Option<String>,
}

impl ConfigHeaders {
    #[must_use]
    pub const fn from_cookie(cookie: String) -> Self {
        Self {
            cookie,
            user_agent: None,
        }
    }

    pub fn from_file(path: &Path) -> io::Result<Self> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        serde_json::from_reader(reader).map_err(io::Error::other)
    }
}
