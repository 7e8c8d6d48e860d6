use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

/// Name used when the server suggests nothing usable.
pub const DEFAULT_FILENAME: &str = "download";

static FILENAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"filename="([^"]+)""#).unwrap());

/// Extracts the suggested filename from a `Content-Disposition` header value,
/// e.g. `attachment; filename="report.csv"` -> `report.csv`. Falls back to
/// [`DEFAULT_FILENAME`] when the header is missing or does not match. Any
/// path components the server smuggles in are stripped down to the final one.
pub fn filename_from_header(header: Option<&str>) -> String {
    let Some(header) = header else {
        return DEFAULT_FILENAME.to_string();
    };
    let Some(captures) = FILENAME_RE.captures(header) else {
        return DEFAULT_FILENAME.to_string();
    };

    Path::new(&captures[1])
        .file_name()
        .and_then(|n| n.to_str())
        .map(|n| n.to_string())
        .unwrap_or_else(|| DEFAULT_FILENAME.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_quoted_filename() {
        let name = filename_from_header(Some("attachment; filename=\"report.csv\""));
        assert_eq!(name, "report.csv");
    }

    #[test]
    fn missing_header_falls_back() {
        assert_eq!(filename_from_header(None), "download");
    }

    #[test]
    fn unquoted_filename_falls_back() {
        let name = filename_from_header(Some("attachment; filename=report.csv"));
        assert_eq!(name, "download");
    }

    #[test]
    fn inline_disposition_without_filename_falls_back() {
        assert_eq!(filename_from_header(Some("inline")), "download");
    }

    #[test]
    fn path_components_are_stripped() {
        let name = filename_from_header(Some("attachment; filename=\"../../etc/passwd\""));
        assert_eq!(name, "passwd");
    }

    #[test]
    fn filename_with_spaces() {
        let name = filename_from_header(Some("attachment; filename=\"my video.mp4\""));
        assert_eq!(name, "my video.mp4");
    }
}
