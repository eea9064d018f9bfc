use compact_str::CompactString;
use reqwest::Client;
use scraper::{Html, Selector};

use crate::{
    Pronouns, Student,
    scrape::{fetch_page, profile_url},
    util::try_map_ordered,
};

/// Pulls one field out of a parsed profile page.
///
/// Profile markup is not under our control; implementations are expected to
/// degrade to a sentinel value rather than fail when it changes.
pub trait FieldExtractor {
    type Output;

    fn extract(&self, page: &Html) -> Self::Output;
}

pub struct PronounExtractor {
    pub block: Selector,
    pub prefix: &'static str,
}

impl Default for PronounExtractor {
    fn default() -> Self {
        Self {
            block: Selector::parse("div.col-xs-12.col-md-7.col-lg-8").unwrap(),
            prefix: "Preferred pronouns",
        }
    }
}

impl PronounExtractor {
    fn from_text(&self, text: &str) -> Pronouns {
        text.split('\n')
            .find_map(|line| line.trim_start().strip_prefix(self.prefix))
            .map_or(Pronouns::NotStated, |rest| {
                // "Preferred pronouns: they/them"
                let value = rest.split(':').nth(1).unwrap_or(rest);
                Pronouns::Stated(CompactString::from(value.trim()))
            })
    }
}

impl FieldExtractor for PronounExtractor {
    type Output = Pronouns;

    fn extract(&self, page: &Html) -> Pronouns {
        let Some(block) = page.select(&self.block).next() else {
            return Pronouns::Unknown;
        };
        self.from_text(&block.text().collect::<String>())
    }
}

fn extract_body<X: FieldExtractor>(extractor: &X, body: &str) -> X::Output {
    extractor.extract(&Html::parse_document(body))
}

/// Fetches every student's profile page and runs `extractor` on it.
///
/// Results line up with `students`. Any failed request fails the whole batch.
pub async fn fetch_profiles<X: FieldExtractor>(
    client: &Client,
    base: &str,
    students: &[Student],
    extractor: &X,
    limit: usize,
) -> reqwest::Result<Vec<X::Output>> {
    try_map_ordered(students, limit, |student| {
        let url = profile_url(base, &student.id);
        async move {
            let body = fetch_page(client, &url).await?;
            tracing::debug!(target: "profile", "{} {}: {} bytes", student.first_name, student.last_name, body.len());
            Ok::<_, reqwest::Error>(extract_body(extractor, &body))
        }
    })
    .await
}

/// Fills in `pronouns` for every student.
pub async fn enrich<X>(
    client: &Client,
    base: &str,
    students: &mut [Student],
    extractor: &X,
    limit: usize,
) -> reqwest::Result<()>
where
    X: FieldExtractor<Output = Pronouns>,
{
    let pronouns = fetch_profiles(client, base, students, extractor, limit).await?;

    let mut unknown = 0usize;
    for (student, pronouns) in students.iter_mut().zip(pronouns) {
        if pronouns == Pronouns::Unknown {
            unknown += 1;
        }
        student.pronouns = Some(pronouns);
    }
    if unknown > 0 {
        tracing::warn!(target: "profile", "{unknown}/{} profiles had no attribute block", students.len());
    }
    Ok(())
}
