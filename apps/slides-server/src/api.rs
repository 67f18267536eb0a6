//! API handlers for the slides checker server
//!
//! Provides REST endpoints for:
//! - Deck upload and checking
//! - Sample form inputs
//! - Health

use axum::{extract::Multipart, Json};
use serde::Serialize;
use shared_pptx::PptxDocument;
use shared_types::{FileResults, SlideContent};
use slides_checker::fixtures::{
    DEFAULT_ORDER_OF_SERVICE, SAMPLE_DISCUSSION_QUESTIONS, SAMPLE_SERVICE_DATE,
};
use slides_checker::{MultiContentChecker, ServiceInputs, ServiceScript, UNENFORCED_RULES};
use tracing::{debug, info, warn};

use crate::error::ServerError;

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
}

/// Handler: GET /health
pub async fn handle_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: "slides-server",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Sample inputs for pre-filling the upload form
#[derive(Serialize)]
pub struct DefaultsResponse {
    pub selected_date: &'static str,
    pub req_order_of_service: &'static str,
    pub sermon_discussion_qns: &'static str,
    /// Requirements the checker does not enforce
    pub unenforced_rules: &'static [&'static str],
}

/// Handler: GET /api/defaults
pub async fn handle_defaults() -> Json<DefaultsResponse> {
    Json(DefaultsResponse {
        selected_date: SAMPLE_SERVICE_DATE,
        req_order_of_service: DEFAULT_ORDER_OF_SERVICE,
        sermon_discussion_qns: SAMPLE_DISCUSSION_QUESTIONS,
        unenforced_rules: UNENFORCED_RULES,
    })
}

/// A deck read from the upload form
struct UploadedDeck {
    filename: String,
    slides: Vec<SlideContent>,
}

/// Form fields collected from a multipart upload
#[derive(Default)]
struct UploadForm {
    selected_date: Option<String>,
    req_order_of_service: Option<String>,
    sermon_discussion_qns: Option<String>,
    decks: Vec<UploadedDeck>,
}

impl UploadForm {
    async fn read(mut multipart: Multipart) -> Result<Self, ServerError> {
        let mut form = UploadForm::default();

        while let Some(field) = multipart.next_field().await? {
            let name = field.name().unwrap_or_default().to_string();
            match name.as_str() {
                "selected_date" => form.selected_date = Some(field.text().await?),
                "req_order_of_service" => form.req_order_of_service = Some(field.text().await?),
                "sermon_discussion_qns" => form.sermon_discussion_qns = Some(field.text().await?),
                "files" => {
                    let filename = field
                        .file_name()
                        .map(str::to_string)
                        .unwrap_or_else(|| format!("upload-{}.pptx", form.decks.len() + 1));
                    let bytes = field.bytes().await?;
                    debug!("Received {} ({} bytes)", filename, bytes.len());

                    let document = PptxDocument::from_bytes(&bytes).map_err(|e| {
                        warn!("Could not read {}: {}", filename, e);
                        ServerError::InvalidPresentation {
                            filename: filename.clone(),
                            message: e.to_string(),
                        }
                    })?;
                    form.decks.push(UploadedDeck {
                        filename,
                        slides: document.into_slides(),
                    });
                }
                other => debug!("Ignoring form field '{}'", other),
            }
        }

        Ok(form)
    }

    fn inputs(&mut self) -> Result<ServiceInputs, ServerError> {
        Ok(ServiceInputs {
            selected_date: self
                .selected_date
                .take()
                .ok_or(ServerError::MissingField("selected_date"))?,
            req_order_of_service: self
                .req_order_of_service
                .take()
                .ok_or(ServerError::MissingField("req_order_of_service"))?,
            sermon_discussion_qns: self
                .sermon_discussion_qns
                .take()
                .ok_or(ServerError::MissingField("sermon_discussion_qns"))?,
        })
    }
}

/// Handler: POST /api/upload/
///
/// Checks every uploaded deck against the submitted service inputs and
/// returns the results per file, in upload order.
pub async fn handle_upload(multipart: Multipart) -> Result<Json<Vec<FileResults>>, ServerError> {
    let mut form = UploadForm::read(multipart).await?;
    let inputs = form.inputs()?;
    if form.decks.is_empty() {
        return Err(ServerError::NoFiles);
    }

    let script = ServiceScript::parse(&inputs).map_err(|e| {
        warn!("Rejected order of service: {}", e);
        ServerError::from(e)
    })?;

    info!(
        "Checking {} deck(s) for {}",
        form.decks.len(),
        script.selected_date
    );

    let results = MultiContentChecker::new(
        form.decks
            .iter()
            .map(|deck| (deck.filename.as_str(), deck.slides.as_slice())),
        &script,
    )
    .run();

    Ok(Json(results))
}
