use std::collections::HashSet;
use std::fmt;
use std::path::Path;

use crate::markdown::slug::heading_anchor;
use crate::markdown::{extract_links, scan_headers};
use crate::utils::error::MdtocResult;
use crate::utils::fs::read_file;

/// Issues an HTTP GET and reports the response status.
///
/// The link report only cares about the status line, so tests can swap
/// in a canned probe and stay off the network.
pub trait HttpProbe {
    fn status(&self, url: &str) -> Result<u16, String>;
}

/// Probe backed by a real blocking HTTP client.
pub struct UreqProbe;

impl HttpProbe for UreqProbe {
    fn status(&self, url: &str) -> Result<u16, String> {
        match ureq::get(url).call() {
            Ok(response) => Ok(response.status()),
            // A 4xx/5xx reply is still a reply worth reporting.
            Err(ureq::Error::Status(code, _)) => Ok(code),
            Err(err) => Err(err.to_string()),
        }
    }
}

/// Verdict for a single link target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkStatus {
    /// Fragment target points at a heading in this document
    Valid,
    /// Fragment target matches no heading
    Invalid,
    /// HTTP target answered with this status code
    Response(u16),
    /// HTTP target could not be reached
    Failed(String),
    /// Not a fragment and not an http(s) URL
    Unrecognized,
}

impl fmt::Display for LinkStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LinkStatus::Valid => write!(f, "VALID"),
            LinkStatus::Invalid => write!(f, "INVALID"),
            LinkStatus::Response(code) => write!(f, "Response: {}", code),
            LinkStatus::Failed(reason) => write!(f, "request failed: {}", reason),
            LinkStatus::Unrecognized => write!(f, "unrecognized link type"),
        }
    }
}

fn link_status(url: &str, fragments: &HashSet<String>, probe: &dyn HttpProbe) -> LinkStatus {
    if url.starts_with('#') {
        if fragments.contains(url) {
            LinkStatus::Valid
        } else {
            LinkStatus::Invalid
        }
    } else if url.starts_with("http://") || url.starts_with("https://") {
        match probe.status(url) {
            Ok(code) => LinkStatus::Response(code),
            Err(reason) => LinkStatus::Failed(reason),
        }
    } else {
        LinkStatus::Unrecognized
    }
}

/// Check every Markdown link in the file at `path` and print one report
/// line per link.
///
/// Fragment links are resolved against the document's own headings. The
/// fragment set carries base anchors only, without the `-1`, `-2`
/// de-duplication suffixes the rendered toc uses, so only the first of
/// several same-named headings is addressable here. Remote links are
/// resolved through `probe`; a transport failure is reported on the
/// offending line and never aborts the run.
pub fn check_document_links(path: &Path, probe: &dyn HttpProbe) -> MdtocResult<()> {
    let markdown = read_file(path)?;

    let fragments: HashSet<String> = scan_headers(&markdown)
        .map(|header| format!("#{}", heading_anchor(&header.text)))
        .collect();

    for link in extract_links(&markdown) {
        let status = link_status(&link.url, &fragments, probe);
        println!(
            "Checking {}:{} [{}]({}) --> {}",
            link.line, link.column, link.label, link.url, status
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct StubProbe(u16);

    impl HttpProbe for StubProbe {
        fn status(&self, _url: &str) -> Result<u16, String> {
            Ok(self.0)
        }
    }

    struct DownProbe;

    impl HttpProbe for DownProbe {
        fn status(&self, _url: &str) -> Result<u16, String> {
            Err("connection refused".to_string())
        }
    }

    fn fragments_of(markdown: &str) -> HashSet<String> {
        scan_headers(markdown)
            .map(|header| format!("#{}", heading_anchor(&header.text)))
            .collect()
    }

    #[test]
    fn test_fragment_resolution() {
        let fragments = fragments_of("# Intro\n## Some Details");
        assert_eq!(
            link_status("#intro", &fragments, &StubProbe(200)),
            LinkStatus::Valid
        );
        assert_eq!(
            link_status("#some-details", &fragments, &StubProbe(200)),
            LinkStatus::Valid
        );
        assert_eq!(
            link_status("#nope", &fragments, &StubProbe(200)),
            LinkStatus::Invalid
        );
    }

    #[test]
    fn test_duplicate_headings_share_one_fragment() {
        let fragments = fragments_of("# foo\n# foo");
        assert_eq!(
            link_status("#foo", &fragments, &StubProbe(200)),
            LinkStatus::Valid
        );
        // The -1 suffix exists only in the rendered toc, not here.
        assert_eq!(
            link_status("#foo-1", &fragments, &StubProbe(200)),
            LinkStatus::Invalid
        );
    }

    #[test]
    fn test_http_targets_use_the_probe() {
        let fragments = HashSet::new();
        assert_eq!(
            link_status("https://example.com/a", &fragments, &StubProbe(200)),
            LinkStatus::Response(200)
        );
        assert_eq!(
            link_status("http://example.com/gone", &fragments, &StubProbe(404)),
            LinkStatus::Response(404)
        );
        assert_eq!(
            link_status("https://example.com/a", &fragments, &DownProbe),
            LinkStatus::Failed("connection refused".to_string())
        );
    }

    #[test]
    fn test_other_schemes_are_unrecognized() {
        let fragments = fragments_of("# Intro");
        for url in ["mailto:a@b.c", "ftp://x", "relative/path.md", ""] {
            assert_eq!(
                link_status(url, &fragments, &StubProbe(200)),
                LinkStatus::Unrecognized
            );
        }
    }

    #[test]
    fn test_status_display() {
        assert_eq!(LinkStatus::Valid.to_string(), "VALID");
        assert_eq!(LinkStatus::Invalid.to_string(), "INVALID");
        assert_eq!(LinkStatus::Response(301).to_string(), "Response: 301");
        assert_eq!(
            LinkStatus::Failed("timed out".to_string()).to_string(),
            "request failed: timed out"
        );
        assert_eq!(
            LinkStatus::Unrecognized.to_string(),
            "unrecognized link type"
        );
    }

    #[test]
    fn test_check_document_links_reads_the_file() {
        use std::io::Write;
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "# Intro\n[up](#intro)\n").unwrap();
        check_document_links(file.path(), &StubProbe(200)).unwrap();

        let dir = tempfile::tempdir().unwrap();
        assert!(check_document_links(&dir.path().join("absent.md"), &StubProbe(200)).is_err());
    }
}
