use core::fmt::{self, Write};

use reqwest::{
    Client, ClientBuilder,
    header::{COOKIE, HeaderMap, HeaderValue, InvalidHeaderValue},
};

use crate::config::{ConfigHeaders, STUDENT_ENDPOINT, STUDENT_PROFILE_ENDPOINT, STUDENTS_PER_PAGE};

/// Client builder carrying the session headers.
///
/// The session cookie becomes a default header, so nothing downstream has to
/// remember to attach it.
pub fn builder(headers: &ConfigHeaders) -> Result<ClientBuilder, InvalidHeaderValue> {
    let mut default_headers = HeaderMap::new();
    default_headers.insert(COOKIE, HeaderValue::try_from(headers.cookie.trim())?);

    let mut builder = ClientBuilder::new().default_headers(default_headers);
    if let Some(user_agent) = &headers.user_agent {
        builder = builder.user_agent(user_agent);
    }
    Ok(builder)
}

#[derive(Debug)]
pub enum SessionError {
    /// The cookie or user agent can't be sent as a header value.
    Header(InvalidHeaderValue),
    Client(reqwest::Error),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Header(e) => write!(f, "invalid session header: {e}"),
            Self::Client(e) => write!(f, "couldn't build http client: {e}"),
        }
    }
}

impl core::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Header(e) => Some(e),
            Self::Client(e) => Some(e),
        }
    }
}

impl From<InvalidHeaderValue> for SessionError {
    fn from(e: InvalidHeaderValue) -> Self {
        Self::Header(e)
    }
}

impl From<reqwest::Error> for SessionError {
    fn from(e: reqwest::Error) -> Self {
        Self::Client(e)
    }
}

/// The one client shared by every request of a run.
pub fn basic(headers: &ConfigHeaders) -> Result<Client, SessionError> {
    Ok(builder(headers)?.build()?)
}

/// Listing URL for one department and admission year.
#[must_use]
pub fn roster_url(base: &str, department: &str, year: i32, student_year: Option<u32>) -> String {
    let mut url = format!(
        "{base}{STUDENT_ENDPOINT}{department}/students/{year}?studentsPerPage={STUDENTS_PER_PAGE}"
    );
    if let Some(student_year) = student_year {
        let _ = write!(url, "&yearsOfStudy={student_year}");
    }
    url
}

#[must_use]
pub fn profile_url(base: &str, id: &str) -> String {
    format!("{base}{STUDENT_PROFILE_ENDPOINT}{id}")
}

/// GETs `url` and returns the body, whatever the status code.
pub async fn fetch_page(client: &Client, url: &str) -> reqwest::Result<String> {
    let response = client.get(url).send().await?;
    tracing::debug!(target: "scrape", "{url} -> {}", response.status());
    response.text().await
}
