//! `walkman extract [INPUT]` – print unique anchor hrefs.

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;
use walkman_core::config::WalkmanConfig;
use walkman_core::document::{Document, DocumentSource};
use walkman_core::output::{write_hrefs, OutputFormat};
use walkman_core::resolve;

/// Flags of `extract`; `None` falls back to the config file.
#[derive(Debug, Default)]
pub struct ExtractArgs {
    pub input: Option<String>,
    pub base: Option<String>,
    pub format: Option<OutputFormat>,
    pub output: Option<PathBuf>,
}

pub fn run_extract(cfg: &WalkmanConfig, args: ExtractArgs) -> Result<()> {
    let hrefs = collect_hrefs(cfg, &args)?;
    let format = args.format.unwrap_or(cfg.format);

    match &args.output {
        Some(path) => {
            let file =
                File::create(path).with_context(|| format!("create {}", path.display()))?;
            write_hrefs(BufWriter::new(file), &hrefs, format)
                .with_context(|| format!("write {}", path.display()))?;
            tracing::info!(count = hrefs.len(), path = %path.display(), "wrote hrefs");
        }
        None => write_hrefs(io::stdout().lock(), &hrefs, format)?,
    }
    Ok(())
}

/// Loads the document and returns its hrefs, resolved when a base URL is configured.
fn collect_hrefs(cfg: &WalkmanConfig, args: &ExtractArgs) -> Result<Vec<String>> {
    let source = DocumentSource::from_arg(args.input.as_deref());
    let document = Document::load(&source)?;
    let hrefs = document.hrefs();
    tracing::info!(count = hrefs.len(), source = %source.display_name(), "extracted hrefs");

    match args.base.as_deref().or(cfg.base_url.as_deref()) {
        Some(base) => {
            let base = resolve::parse_base(base)?;
            Ok(resolve::resolve_hrefs(&hrefs, &base))
        }
        None => Ok(hrefs),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn page(html: &str) -> tempfile::NamedTempFile {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(html.as_bytes()).unwrap();
        f.flush().unwrap();
        f
    }

    fn args_for(f: &tempfile::NamedTempFile) -> ExtractArgs {
        ExtractArgs {
            input: Some(f.path().display().to_string()),
            ..ExtractArgs::default()
        }
    }

    #[test]
    fn raw_hrefs_without_base() {
        let f = page(r#"<a href="/a">1</a><a>2</a><a href="/b">3</a><a href="/a">4</a>"#);
        let hrefs = collect_hrefs(&WalkmanConfig::default(), &args_for(&f)).unwrap();
        assert_eq!(hrefs, vec!["/a", "/b"]);
    }

    #[test]
    fn config_base_url_resolves() {
        let f = page(r#"<a href="/a">1</a>"#);
        let cfg = WalkmanConfig {
            base_url: Some("https://example.com/x/".to_string()),
            ..WalkmanConfig::default()
        };
        let hrefs = collect_hrefs(&cfg, &args_for(&f)).unwrap();
        assert_eq!(hrefs, vec!["https://example.com/a"]);
    }

    #[test]
    fn base_flag_overrides_config() {
        let f = page(r#"<a href="page">1</a>"#);
        let cfg = WalkmanConfig {
            base_url: Some("https://config.example/".to_string()),
            ..WalkmanConfig::default()
        };
        let args = ExtractArgs {
            base: Some("https://flag.example/dir/".to_string()),
            ..args_for(&f)
        };
        let hrefs = collect_hrefs(&cfg, &args).unwrap();
        assert_eq!(hrefs, vec!["https://flag.example/dir/page"]);
    }

    #[test]
    fn invalid_base_is_an_error() {
        let f = page(r#"<a href="/a">1</a>"#);
        let args = ExtractArgs {
            base: Some("relative/only".to_string()),
            ..args_for(&f)
        };
        assert!(collect_hrefs(&WalkmanConfig::default(), &args).is_err());
    }

    #[test]
    fn output_file_uses_format() {
        let f = page(r#"<a href="/x">1</a><a href="/y">2</a>"#);
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("hrefs.json");
        let args = ExtractArgs {
            format: Some(OutputFormat::Json),
            output: Some(out.clone()),
            ..args_for(&f)
        };
        run_extract(&WalkmanConfig::default(), args).unwrap();
        let text = std::fs::read_to_string(&out).unwrap();
        assert_eq!(text, "[\n  \"/x\",\n  \"/y\"\n]\n");
    }
}
