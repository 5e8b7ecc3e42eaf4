//! Failure viewer
//!
//! Opens the reftest analyzer page in a browser with the log file passed
//! through the `logurl` URL fragment.

use std::path::Path;

use tokio::process::Command;

use super::program;
use crate::common::{Error, Result};

/// Build the analyzer URL: `<page>#logurl=<log>`
///
/// Bytes of the log path that are not valid UTF-8 become U+FFFD; the browser
/// receives the URL as a single string.
pub fn analyzer_url(analyzer_page: &str, log_file: &Path) -> String {
    format!("{}#logurl={}", analyzer_page, log_file.to_string_lossy())
}

/// Launch the browser on `url` and wait for it to exit
///
/// A browser that cannot be started or exits non-zero is an error.
pub async fn open(browser: &str, args: &[String], url: &str) -> Result<()> {
    let program = program::resolve(browser)?;
    tracing::debug!("Opening {} with {}", url, program.display());

    let status = Command::new(&program)
        .args(args)
        .arg(url)
        .status()
        .await
        .map_err(|e| Error::viewer_launch(browser, e))?;

    if !status.success() {
        return Err(Error::ViewerFailed {
            program: browser.to_string(),
            code: status.code(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_default_analyzer_url() {
        assert_eq!(
            analyzer_url("reftest-analyzer.xhtml", Path::new("reftest.log")),
            "reftest-analyzer.xhtml#logurl=reftest.log"
        );
    }

    #[test]
    fn test_analyzer_url_keeps_log_directories() {
        let log = PathBuf::from("out").join("reftest.log");
        let url = analyzer_url("reftest-analyzer.xhtml", &log);
        assert!(url.starts_with("reftest-analyzer.xhtml#logurl=out"));
        assert!(url.ends_with("reftest.log"));
    }

    #[cfg(unix)]
    #[test]
    fn test_analyzer_url_non_utf8_log_path() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let log = Path::new(OsStr::from_bytes(b"bad\xff.log"));
        assert_eq!(
            analyzer_url("reftest-analyzer.xhtml", log),
            "reftest-analyzer.xhtml#logurl=bad\u{FFFD}.log"
        );
    }

    #[tokio::test]
    async fn test_missing_browser_is_error() {
        let err = open("reftest-debugger-no-such-browser", &[], "x.xhtml")
            .await
            .unwrap_err();
        assert!(matches!(err, Error::ProgramNotFound { .. }));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_browser_nonzero_exit_is_error() {
        let args = vec!["-c".to_string(), "exit 3".to_string()];
        let err = open("sh", &args, "x.xhtml").await.unwrap_err();
        assert!(matches!(err, Error::ViewerFailed { code: Some(3), .. }));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_browser_zero_exit_is_ok() {
        let args = vec!["-c".to_string(), "exit 0".to_string()];
        open("sh", &args, "x.xhtml").await.unwrap();
    }
}
