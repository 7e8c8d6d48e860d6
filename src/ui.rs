use crate::error::Error;
use crate::handlers::download::DownloadResult;
use std::path::PathBuf;
use tracing::info;

/// The page surface the handlers mutate: render HTML, raise an alert, save a
/// payload. Injected so the handlers stay free of any real terminal or disk.
pub trait Ui {
    /// Replaces the visible document with server-returned HTML, verbatim.
    fn replace_body(&self, html: &str);

    /// Blocking-dialog analogue; the message is shown to the user as-is.
    fn alert(&self, message: &str);

    /// Persists a downloaded payload under its suggested name and returns
    /// the path it ended up at.
    fn save_file(
        &self,
        download: DownloadResult,
    ) -> impl Future<Output = Result<PathBuf, Error>> + Send;
}

/// Terminal-backed surface: the "page" is stdout, alerts go to stderr, and
/// downloads land in a configured directory.
#[derive(Debug, Clone)]
pub struct ConsoleUi {
    download_dir: PathBuf,
}

impl ConsoleUi {
    pub fn new(download_dir: impl Into<PathBuf>) -> Self {
        Self {
            download_dir: download_dir.into(),
        }
    }
}

impl Ui for ConsoleUi {
    fn replace_body(&self, html: &str) {
        println!("{html}");
    }

    fn alert(&self, message: &str) {
        eprintln!("{message}");
    }

    async fn save_file(&self, download: DownloadResult) -> Result<PathBuf, Error> {
        let dir = self.download_dir.clone();
        let target = dir.join(&download.filename);
        let dest = target.clone();

        // Write through a named temp file and persist it into place, so a
        // failed download never leaves a partial file under the final name
        // and the temp resource is always released.
        let written = tokio::task::spawn_blocking(move || -> std::io::Result<PathBuf> {
            use std::io::Write;

            std::fs::create_dir_all(&dir)?;
            let mut tmp = tempfile::NamedTempFile::new_in(&dir)?;
            tmp.write_all(&download.payload)?;
            tmp.persist(&dest).map_err(|e| e.error)?;
            Ok(dest)
        })
        .await
        .map_err(|e| Error::Save {
            path: target.clone(),
            source: std::io::Error::other(e),
        })?
        .map_err(|source| Error::Save {
            path: target,
            source,
        })?;

        info!("Saved download to {:?}", written);
        Ok(written)
    }
}
