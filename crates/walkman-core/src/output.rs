//! Output sink: writes the result sequence once, as lines or a JSON array.

use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::error::WalkmanError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One href per line.
    #[default]
    Lines,
    /// Pretty-printed JSON array of strings.
    Json,
}

pub fn write_hrefs<W: Write>(
    mut out: W,
    hrefs: &[String],
    format: OutputFormat,
) -> Result<(), WalkmanError> {
    match format {
        OutputFormat::Lines => {
            for href in hrefs {
                writeln!(out, "{href}").map_err(WalkmanError::Write)?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut out, hrefs)?;
            writeln!(out).map_err(WalkmanError::Write)?;
        }
    }
    out.flush().map_err(WalkmanError::Write)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(hrefs: &[&str], format: OutputFormat) -> String {
        let hrefs: Vec<String> = hrefs.iter().map(|s| s.to_string()).collect();
        let mut buf = Vec::new();
        write_hrefs(&mut buf, &hrefs, format).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn lines_format() {
        assert_eq!(render(&["/a", "/b"], OutputFormat::Lines), "/a\n/b\n");
        assert_eq!(render(&[], OutputFormat::Lines), "");
    }

    #[test]
    fn json_format_is_string_array() {
        let text = render(&["/a", "/b \"q\""], OutputFormat::Json);
        assert!(text.ends_with('\n'));
        let parsed: Vec<String> = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, vec!["/a", "/b \"q\""]);
    }

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn write_failure_is_reported_as_write_error() {
        let err = write_hrefs(FailingWriter, &["/a".to_string()], OutputFormat::Lines).unwrap_err();
        assert!(matches!(err, WalkmanError::Write(_)));
        assert_eq!(err.to_string(), "write output: pipe closed");
    }

    #[test]
    fn json_format_empty() {
        assert_eq!(render(&[], OutputFormat::Json), "[]\n");
    }
}
