//! The contact-submission pipeline: typed form extraction and the service
//! that validates, escapes and dispatches the mail.

pub mod service;
pub mod submission;
