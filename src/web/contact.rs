use std::collections::HashMap;
use std::sync::Arc;

use axum::{Extension, Form, Json};
use serde::Serialize;

use crate::contact::service::{ContactResult, ContactService};
use crate::contact::submission::ContactSubmission;

/// Wire shape of a contact submission outcome.
///
/// A success serializes as `{"success":true}`; the `error` field only
/// appears on failures, carrying one of the three pipeline messages.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ContactResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl From<ContactResult> for ContactResponse {
    fn from(result: ContactResult) -> Self {
        match result {
            ContactResult::Success => Self {
                success: true,
                error: None,
            },
            ContactResult::Failure(err) => Self {
                success: false,
                error: Some(err.to_string()),
            },
        }
    }
}

/// Contact form endpoint handler.
///
/// # Overview
///
/// Accepts a urlencoded form, hands the three known fields to
/// [`ContactService`] and reports the outcome as JSON.
///
/// The HTTP status is `200 OK` for every processed submission, success
/// and failure alike; clients read the `success` flag, not the status
/// line. Unknown form fields are ignored rather than rejected.
pub async fn contact_handler(
    Extension(service): Extension<Arc<ContactService>>,
    Form(fields): Form<HashMap<String, String>>,
) -> Json<ContactResponse> {
    let submission = ContactSubmission::from_fields(&fields);

    let result = service
        .send_email(
            submission.email.as_deref(),
            submission.subject.as_deref(),
            submission.message.as_deref(),
        )
        .await;

    Json(result.into())
}
