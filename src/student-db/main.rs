mod cli;
mod prompt;

use std::{io, process::ExitCode};

use sdb::{
    config::ConfigHeaders,
    profile::{PronounExtractor, enrich},
    roster::{RosterError, parse_roster},
    scrape::{basic, builder, fetch_page, roster_url},
    sheet,
};

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    use clap::Parser;

    pretty_env_logger::formatted_timed_builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    run(cli::Args::parse(), prompt::confirm_overwrite).await
}

/// `confirm` is asked before an existing output file is replaced.
async fn run(args: cli::Args, confirm: impl FnOnce() -> io::Result<bool>) -> anyhow::Result<ExitCode> {
    let output = args.output_path();
    if let Err(e) = cli::check_output(&output) {
        println!("{}", e.message());
        return Ok(ExitCode::FAILURE);
    }
    if output.exists() && !confirm()? {
        println!("Exiting");
        return Ok(ExitCode::SUCCESS);
    }

    let year = args.year.unwrap_or_else(sdb::util::current_year);
    let base = args.base();
    let url = roster_url(&base, &args.department, year, args.student_year);

    let headers = match (&args.headers, args.cookie.clone()) {
        (Some(file), _) => ConfigHeaders::from_file(file)?,
        (None, Some(cookie)) => ConfigHeaders::from_cookie(cookie),
        (None, None) => ConfigHeaders::from_cookie(prompt::cookie()?),
    };
    let client = if args.no_proxy {
        builder(&headers)?.no_proxy().build()?
    } else {
        basic(&headers)?
    };

    tracing::info!(target: "main", "requesting students from {year}");
    tracing::debug!(target: "main", "GET {url}");
    let html = fetch_page(&client, &url).await?;

    tracing::info!(target: "main", "loading students");
    let mut students = match parse_roster(&html) {
        Ok(students) => students,
        Err(e @ RosterError::NoStudents) => {
            println!("{e}");
            return Ok(ExitCode::FAILURE);
        }
        Err(e) => return Err(e.into()),
    };
    tracing::info!(target: "main", "found {} students", students.len());

    let with_pronouns = !args.no_pronouns;
    if with_pronouns {
        tracing::info!(target: "main", "requesting student profiles");
        enrich(
            &client,
            &base,
            &mut students,
            &PronounExtractor::default(),
            args.concurrency,
        )
        .await?;
    }

    tracing::info!(target: "main", "saving to {}", output.display());
    sheet::save(&output, &students, with_pronouns)?;

    Ok(ExitCode::SUCCESS)
}
