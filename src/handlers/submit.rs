use crate::error::Error;
use crate::form::FormSubmission;
use crate::poster::FormPoster;
use crate::ui::Ui;
use tracing::{info, warn};

/// Submits the fetch form to `/` and replaces the page body with whatever
/// HTML the server returns. Application-level failures surface the response
/// text through an alert; only transport failures bubble up as `Err`.
pub async fn handle_submit<P: FormPoster, U: Ui>(
    poster: &P,
    ui: &U,
    form: &FormSubmission,
) -> Result<(), Error> {
    let resp = poster.post_form("/", form).await?;

    if resp.success {
        info!("Fetch succeeded ({} bytes of HTML)", resp.body.len());
        ui.replace_body(&resp.body_text());
    } else {
        warn!("Fetch rejected by server");
        ui.alert(&format!("Error: {}", resp.body_text()));
    }
    Ok(())
}
