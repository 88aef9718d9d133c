//! CLI that reads a rendered page and its metadata as JSON from stdin and
//! prints the requested mobile-sections payload.
//!
//! Usage: `sections_stdin [VARIANT] [LANG] < page.json`
//!
//! Input: `{ "page": ..., "meta": ..., "legacy": ..., "extract": ... }`, the
//! last two optional. Set `RUST_LOG=debug` to trace the pipeline stages.

use std::io::{self, Read};
use std::sync::Arc;

use async_trait::async_trait;
use mobile_sections::{
    ContentRenderer, Error, MetadataApi, MobileSections, Options, PageMetadata, PageRequest, RawPage,
    Result, Variant,
};
use serde::Deserialize;
use tracing_subscriber::EnvFilter;

#[derive(Deserialize)]
struct Input {
    page: RawPage,
    meta: PageMetadata,
    #[serde(default)]
    legacy: Option<RawPage>,
    #[serde(default)]
    extract: Option<String>,
}

/// Serves every upstream call from the stdin document.
struct StaticSource(Input);

#[async_trait]
impl ContentRenderer for StaticSource {
    async fn rendered_page(&self, _request: &PageRequest) -> Result<RawPage> {
        Ok(self.0.page.clone())
    }
}

#[async_trait]
impl MetadataApi for StaticSource {
    async fn metadata(&self, _title: &str) -> Result<PageMetadata> {
        Ok(self.0.meta.clone())
    }

    async fn legacy_rendered_page(&self, title: &str) -> Result<RawPage> {
        self.0
            .legacy
            .clone()
            .ok_or_else(|| Error::upstream(404, format!("no legacy rendering for {title}")))
    }

    async fn extract(&self, _title: &str) -> Result<String> {
        Ok(self.0.extract.clone().unwrap_or_default())
    }
}

fn run() -> Result<String> {
    let mut args = std::env::args().skip(1);
    let variant = match args.next() {
        Some(name) => name.parse::<Variant>()?,
        None => Variant::All,
    };
    let options = args
        .next()
        .map_or_else(Options::default, |language| Options::for_language(&language));

    let mut raw = String::new();
    io::stdin()
        .read_to_string(&mut raw)
        .map_err(|err| Error::Decode(err.to_string()))?;
    let input: Input = serde_json::from_str(&raw)?;

    let request = PageRequest::new(input.meta.normalizedtitle.clone());
    let source = Arc::new(StaticSource(input));
    let service = MobileSections::new(source.clone(), source, options);

    let payload = futures::executor::block_on(service.respond(variant, &request))?;
    Ok(serde_json::to_string(&payload)?)
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(io::stderr)
        .init();

    match run() {
        Ok(json) => println!("{json}"),
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    }
}
