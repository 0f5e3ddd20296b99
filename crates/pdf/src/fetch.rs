use crate::PipelineError;
use reqwest::Client;
use tracing::{info, instrument};
use url::Url;

/// Downloads a PDF and returns its raw bytes.
///
/// Any non-2xx status is an error; the body is not inspected here.
#[instrument(skip(client))]
pub async fn download_pdf(client: &Client, url: &str) -> Result<Vec<u8>, PipelineError> {
    let parsed = Url::parse(url).map_err(|e| PipelineError::InvalidUrl {
        url: url.to_string(),
        reason: e.to_string(),
    })?;

    let response = client
        .get(parsed)
        .send()
        .await
        .map_err(|source| PipelineError::Transport {
            url: url.to_string(),
            source,
        })?;

    if !response.status().is_success() {
        return Err(PipelineError::Download {
            url: url.to_string(),
            status: response.status().as_u16(),
        });
    }

    let bytes = response
        .bytes()
        .await
        .map_err(|source| PipelineError::Transport {
            url: url.to_string(),
            source,
        })?;

    info!("Downloaded {} bytes from {}", bytes.len(), url);
    Ok(bytes.to_vec())
}
