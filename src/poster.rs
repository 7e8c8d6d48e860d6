use crate::error::Error;
use crate::form::FormSubmission;
use reqwest::header::CONTENT_DISPOSITION;
use std::borrow::Cow;
use tracing::debug;

/// Outcome of a completed HTTP exchange. A non-2xx status is still `Ok` at
/// this layer; only transport failures surface as `Err` from the poster.
#[derive(Debug, Clone)]
pub struct FormResponse {
    pub success: bool,
    pub body: Vec<u8>,
    pub content_disposition: Option<String>,
}

impl FormResponse {
    pub fn body_text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }
}

/// Capability to fire form data over HTTP. Injected into the handlers so
/// they can be exercised against any endpoint, including test fixtures.
pub trait FormPoster {
    /// POSTs the fields as `multipart/form-data` to `path`.
    fn post_form(
        &self,
        path: &str,
        form: &FormSubmission,
    ) -> impl Future<Output = Result<FormResponse, Error>> + Send;

    /// Plain GET against `path`.
    fn get(&self, path: &str) -> impl Future<Output = Result<FormResponse, Error>> + Send;
}

/// reqwest-backed poster targeting a single base URL.
#[derive(Debug, Clone)]
pub struct HttpPoster {
    client: reqwest::Client,
    base_url: String,
}

impl HttpPoster {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn into_form_response(resp: reqwest::Response) -> Result<FormResponse, Error> {
        let success = resp.status().is_success();
        let content_disposition = resp
            .headers()
            .get(CONTENT_DISPOSITION)
            .and_then(|v| v.to_str().ok())
            .map(|v| v.to_string());
        let body = resp.bytes().await?.to_vec();
        Ok(FormResponse {
            success,
            body,
            content_disposition,
        })
    }
}

impl FormPoster for HttpPoster {
    async fn post_form(&self, path: &str, form: &FormSubmission) -> Result<FormResponse, Error> {
        let mut multipart = reqwest::multipart::Form::new();
        for (name, value) in form.fields() {
            multipart = multipart.text(name.clone(), value.clone());
        }

        let url = self.url(path);
        debug!("POST {} ({} fields)", url, form.fields().count());
        let resp = self.client.post(url).multipart(multipart).send().await?;
        Self::into_form_response(resp).await
    }

    async fn get(&self, path: &str) -> Result<FormResponse, Error> {
        let url = self.url(path);
        debug!("GET {}", url);
        let resp = self.client.get(url).send().await?;
        Self::into_form_response(resp).await
    }
}
