use crate::error::Error;
use crate::form::FormSubmission;
use crate::poster::FormPoster;
use crate::ui::Ui;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt::Write;
use tracing::warn;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DownloadTask {
    pub url: String,
    pub status: String,
    pub progress: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub time: String,
    pub url: String,
}

/// Snapshot of the server's queue and history, as served by `GET /status`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusSnapshot {
    pub downloads: HashMap<String, DownloadTask>,
    pub history: Vec<HistoryEntry>,
}

pub async fn fetch_status<P: FormPoster>(poster: &P) -> Result<StatusSnapshot, Error> {
    let resp = poster.get("/status").await?;
    if !resp.success {
        return Err(Error::Server(resp.body_text().into_owned()));
    }
    Ok(serde_json::from_slice(&resp.body)?)
}

/// Plain-text rendering of the queue and history tables.
pub fn render_status(snapshot: &StatusSnapshot) -> String {
    let mut out = String::from("Queue:\n");
    if snapshot.downloads.is_empty() {
        out.push_str("  (empty)\n");
    } else {
        let mut ids: Vec<_> = snapshot.downloads.keys().collect();
        // Task ids are assigned sequentially by the server; sort them
        // numerically so "10" lands after "2", with a string fallback for
        // anything that doesn't parse.
        ids.sort_by_key(|id| (id.parse::<u64>().unwrap_or(u64::MAX), (*id).clone()));
        for id in ids {
            let task = &snapshot.downloads[id];
            let _ = writeln!(
                out,
                "  [{}] {} - {} ({})",
                id, task.url, task.status, task.progress
            );
        }
    }

    out.push_str("History:\n");
    if snapshot.history.is_empty() {
        out.push_str("  (empty)\n");
    } else {
        for entry in &snapshot.history {
            let _ = writeln!(out, "  {} {}", entry.time, entry.url);
        }
    }
    out
}

/// Posts an empty form to `/clear` and alerts the server's `message` field,
/// the way the page's Clear Queue button does.
pub async fn handle_clear<P: FormPoster, U: Ui>(poster: &P, ui: &U) -> Result<(), Error> {
    let resp = poster.post_form("/clear", &FormSubmission::new()).await?;

    if !resp.success {
        warn!("Clear rejected by server");
        ui.alert(&format!("Error: {}", resp.body_text()));
        return Ok(());
    }

    let message = serde_json::from_slice::<serde_json::Value>(&resp.body)
        .ok()
        .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(String::from))
        .unwrap_or_else(|| resp.body_text().into_owned());
    ui.alert(&message);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_snapshot_decodes_server_shape() {
        let json = r#"{
            "downloads": {
                "1": {"url": "http://example.com/v", "status": "Queued", "progress": "0%"}
            },
            "history": [
                {"time": "2026-08-29 10:00:00", "url": "http://example.com/v"}
            ]
        }"#;
        let snapshot: StatusSnapshot = serde_json::from_str(json).unwrap();
        assert_eq!(snapshot.downloads["1"].status, "Queued");
        assert_eq!(snapshot.history.len(), 1);
    }

    #[test]
    fn render_lists_queue_and_history() {
        let snapshot: StatusSnapshot = serde_json::from_str(
            r#"{
                "downloads": {
                    "2": {"url": "http://b", "status": "Downloading", "progress": "40%"},
                    "1": {"url": "http://a", "status": "Queued", "progress": "0%"}
                },
                "history": [{"time": "t", "url": "http://a"}]
            }"#,
        )
        .unwrap();

        let rendered = render_status(&snapshot);
        let queue_a = rendered.find("[1] http://a").unwrap();
        let queue_b = rendered.find("[2] http://b").unwrap();
        assert!(queue_a < queue_b);
        assert!(rendered.contains("t http://a"));
    }

    #[test]
    fn render_orders_queue_numerically() {
        let snapshot: StatusSnapshot = serde_json::from_str(
            r#"{
                "downloads": {
                    "10": {"url": "http://j", "status": "Queued", "progress": "0%"},
                    "2": {"url": "http://b", "status": "Queued", "progress": "0%"},
                    "9": {"url": "http://i", "status": "Queued", "progress": "0%"}
                },
                "history": []
            }"#,
        )
        .unwrap();

        let rendered = render_status(&snapshot);
        let pos_2 = rendered.find("[2]").unwrap();
        let pos_9 = rendered.find("[9]").unwrap();
        let pos_10 = rendered.find("[10]").unwrap();
        assert!(pos_2 < pos_9);
        assert!(pos_9 < pos_10);
    }

    #[test]
    fn render_empty_snapshot() {
        let snapshot = StatusSnapshot {
            downloads: HashMap::new(),
            history: Vec::new(),
        };
        let rendered = render_status(&snapshot);
        assert!(rendered.contains("Queue:\n  (empty)"));
        assert!(rendered.contains("History:\n  (empty)"));
    }
}
