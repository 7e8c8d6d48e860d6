pub mod download;
pub mod status;
pub mod submit;

use crate::error::Error;
use crate::form::FormSubmission;
use crate::poster::FormPoster;
use crate::ui::Ui;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::debug;

/// What became of a guarded submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Completed,
    /// The same form already had a request in flight; nothing was sent.
    Busy,
}

/// Binds the two forms to their handlers and disables each form while its
/// request is in flight, so a double submit never races its own response.
/// The forms are independent: a pending download does not block a fetch.
pub struct FormBinding<P, U> {
    poster: P,
    ui: U,
    fetch_in_flight: AtomicBool,
    download_in_flight: AtomicBool,
}

impl<P: FormPoster, U: Ui> FormBinding<P, U> {
    pub fn new(poster: P, ui: U) -> Self {
        Self {
            poster,
            ui,
            fetch_in_flight: AtomicBool::new(false),
            download_in_flight: AtomicBool::new(false),
        }
    }

    pub async fn submit(&self, form: &FormSubmission) -> Result<Outcome, Error> {
        let Some(_guard) = InFlight::acquire(&self.fetch_in_flight) else {
            debug!("Fetch form already in flight, ignoring submit");
            return Ok(Outcome::Busy);
        };
        submit::handle_submit(&self.poster, &self.ui, form).await?;
        Ok(Outcome::Completed)
    }

    pub async fn download(&self, form: &FormSubmission) -> Result<Outcome, Error> {
        let Some(_guard) = InFlight::acquire(&self.download_in_flight) else {
            debug!("Download form already in flight, ignoring submit");
            return Ok(Outcome::Busy);
        };
        download::handle_download(&self.poster, &self.ui, form).await?;
        Ok(Outcome::Completed)
    }

    pub async fn status(&self) -> Result<status::StatusSnapshot, Error> {
        status::fetch_status(&self.poster).await
    }

    pub async fn clear(&self) -> Result<(), Error> {
        status::handle_clear(&self.poster, &self.ui).await
    }
}

/// RAII in-flight marker: released on success, alert-path completion, and
/// transport error alike.
struct InFlight<'a>(&'a AtomicBool);

impl<'a> InFlight<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self(flag))
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}
