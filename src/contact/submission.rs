use std::collections::HashMap;

/// One contact-form submission, extracted from a raw form payload.
///
/// A field absent from the payload stays `None` rather than becoming an
/// empty string, so downstream gates can tell "absent" from "explicitly
/// empty" even though both fail the same way today. Created once per
/// request and discarded after the service call.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactSubmission {
    pub email: Option<String>,
    pub subject: Option<String>,
    pub message: Option<String>,
}

impl ContactSubmission {
    /// Extracts exactly the `email`, `subject` and `message` fields from a
    /// string-keyed payload. Any other fields are ignored.
    pub fn from_fields(fields: &HashMap<String, String>) -> Self {
        Self {
            email: fields.get("email").cloned(),
            subject: fields.get("subject").cloned(),
            message: fields.get("message").cloned(),
        }
    }
}
