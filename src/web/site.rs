use std::sync::Arc;

use axum::{Extension, Json};
use serde::Serialize;

use crate::config::site::SiteConfig;
use crate::escape::uri::{encode_email_for_mailto, encode_phone_for_tel};
use crate::validate::phone::parse_bg_phone_display;

/// Wire shape of the public site values.
///
/// Carries the sanitized configuration plus the derived presentation
/// values the frontend would otherwise have to compute itself: the
/// grouped Bulgarian display form and ready-made `mailto:`/`tel:` links.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SiteInfo {
    pub client_url: String,
    pub contact_email: String,
    pub contact_phone: String,
    pub phone_display: String,
    pub mailto: String,
    pub tel: String,
}

impl From<&SiteConfig> for SiteInfo {
    fn from(site: &SiteConfig) -> Self {
        Self {
            client_url: site.client_url.clone(),
            contact_email: site.contact_email.clone(),
            contact_phone: site.contact_phone.clone(),
            phone_display: parse_bg_phone_display(Some(&site.contact_phone)),
            mailto: format!(
                "mailto:{}",
                encode_email_for_mailto(Some(&site.contact_email))
            ),
            tel: format!("tel:{}", encode_phone_for_tel(Some(&site.contact_phone))),
        }
    }
}

/// Public site values endpoint handler.
///
/// Answers `GET /api/site` with the values already sanitized at load
/// time. A missing contact channel shows up as empty strings and a bare
/// `mailto:`/`tel:` link, never as an error.
pub async fn site_handler(Extension(site): Extension<Arc<SiteConfig>>) -> Json<SiteInfo> {
    Json(SiteInfo::from(site.as_ref()))
}
