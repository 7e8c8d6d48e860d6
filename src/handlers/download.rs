use crate::disposition;
use crate::error::Error;
use crate::form::FormSubmission;
use crate::poster::FormPoster;
use crate::ui::Ui;
use tracing::{info, warn};

/// Binary payload plus the name the server suggested for it. Lives only for
/// the duration of the save flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadResult {
    pub filename: String,
    pub payload: Vec<u8>,
}

/// Submits the download form to `/download`, treats the response as opaque
/// bytes, and saves them under the `Content-Disposition` filename (or the
/// `download` fallback). Application-level failures alert the response text.
pub async fn handle_download<P: FormPoster, U: Ui>(
    poster: &P,
    ui: &U,
    form: &FormSubmission,
) -> Result<(), Error> {
    let resp = poster.post_form("/download", form).await?;

    if !resp.success {
        warn!("Download rejected by server");
        ui.alert(&format!("Error: {}", resp.body_text()));
        return Ok(());
    }

    let filename = disposition::filename_from_header(resp.content_disposition.as_deref());
    info!("Download succeeded: {} ({} bytes)", filename, resp.body.len());

    ui.save_file(DownloadResult {
        filename,
        payload: resp.body,
    })
    .await?;
    Ok(())
}
