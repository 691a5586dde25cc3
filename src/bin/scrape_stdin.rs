//! Simple CLI that reads HTML from stdin and writes the scrape result as
//! JSON to stdout.
//!
//! Usage: `scrape_stdin <source-url> [parse5|loose|cheerio] < page.html`
//!
//! Set `RUST_LOG=metascrape=debug` to trace extraction on stderr.

use std::env;
use std::io::{self, Read};
use std::process::ExitCode;

use metascrape::{scrape_strict, ScrapeResult};
use serde_json::json;
use tracing_subscriber::EnvFilter;

fn run(source_url: &str, mode: Option<&str>) -> metascrape::Result<ScrapeResult> {
    let mut html = String::new();
    io::stdin().read_to_string(&mut html)?;

    scrape_strict(&html, source_url, mode)
}

/// Renders the outcome as one JSON line; `false` when it is an error object.
fn render(outcome: metascrape::Result<ScrapeResult>) -> (String, bool) {
    let err = match outcome.map(|result| serde_json::to_string(&result)) {
        Ok(Ok(output)) => return (output, true),
        Ok(Err(err)) => err.to_string(),
        Err(err) => err.to_string(),
    };
    tracing::error!(%err, "scrape failed");
    (json!({ "scrapeError": err }).to_string(), false)
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    let Some(source_url) = args.first() else {
        eprintln!("usage: scrape_stdin <source-url> [parse5|loose|cheerio] < page.html");
        return ExitCode::from(2);
    };

    let (output, ok) = render(run(source_url, args.get(1).map(String::as_str)));
    println!("{output}");
    if ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use metascrape::Error;

    #[test]
    fn result_is_rendered_as_json() {
        let (output, ok) = render(Ok(ScrapeResult::for_domain("x.com")));
        assert!(ok);
        assert_eq!(output, r#"{"domain":"x.com"}"#);
    }

    #[test]
    fn error_is_rendered_as_scrape_error_object() {
        let (output, ok) = render(Err(Error::UnknownMode("fast".to_string())));
        assert!(!ok);
        assert_eq!(output, r#"{"scrapeError":"Unknown scrape mode \"fast\""}"#);
    }
}
