//! Typed job posting record and CMS envelope decoding.
//!
//! The backend speaks the Strapi v4 REST shape: every record is wrapped in
//! `{ "data": { "id": N, "attributes": { ... } } }` and media relations are
//! wrapped the same way one level down. Everything is decoded into explicit
//! types here so the rest of the crate never touches raw JSON.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::FetchError;

/// Maximum accepted length of a route identifier.
const MAX_ID_LEN: usize = 64;

/// Identifier of a job posting, as taken from the route.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct JobId(String);

impl JobId {
    /// Validate a raw route segment.
    ///
    /// Accepts 1-64 characters from `[A-Za-z0-9_-]`, which covers numeric
    /// Strapi ids and document ids while keeping the value safe to splice
    /// into the outbound URL path.
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if raw.is_empty() || raw.len() > MAX_ID_LEN {
            return None;
        }
        if !raw
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return None;
        }
        Some(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single image rendition (e.g. the "medium" format).
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PhotoFormat {
    pub url: String,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
}

/// Generated renditions of an uploaded image.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct PhotoFormats {
    #[serde(default)]
    pub thumbnail: Option<PhotoFormat>,
    #[serde(default)]
    pub small: Option<PhotoFormat>,
    #[serde(default)]
    pub medium: Option<PhotoFormat>,
    #[serde(default)]
    pub large: Option<PhotoFormat>,
}

/// An uploaded photo attached to a posting.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Photo {
    /// Original upload URL (often relative to the backend).
    pub url: String,
    /// Alt text entered in the CMS, if any.
    pub alternative_text: Option<String>,
    pub formats: PhotoFormats,
}

impl Photo {
    /// URL of the rendition used for display: medium when generated,
    /// otherwise the original upload.
    pub fn display_url(&self) -> &str {
        self.formats
            .medium
            .as_ref()
            .map(|f| f.url.as_str())
            .filter(|u| !u.is_empty())
            .unwrap_or(&self.url)
    }
}

/// A job posting, validated at the network boundary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JobPosting {
    pub id: JobId,
    pub job_title: String,
    pub job_location: Option<String>,
    pub contract_type: Option<String>,
    /// Markdown body.
    pub content: String,
    pub contact: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub photo: Option<Photo>,
}

// -- Wire types --

#[derive(Debug, Deserialize)]
struct Envelope<T> {
    data: Option<T>,
    #[serde(default)]
    error: Option<ApiError>,
}

#[derive(Debug, Deserialize)]
struct Entry<A> {
    attributes: A,
}

/// Strapi error body, e.g. `{"status":404,"name":"NotFoundError","message":"Not Found"}`.
#[derive(Debug, Deserialize)]
pub struct ApiError {
    #[serde(default)]
    pub status: Option<u16>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawPosting {
    #[serde(default)]
    job_title: Option<String>,
    #[serde(default)]
    job_location: Option<String>,
    #[serde(default)]
    contract_type: Option<String>,
    #[serde(default)]
    content: Option<String>,
    #[serde(default)]
    contact: Option<String>,
    #[serde(rename = "createdAt", default)]
    created_at: Option<String>,
    #[serde(default)]
    photo: Option<Envelope<Entry<RawPhoto>>>,
}

#[derive(Debug, Deserialize)]
struct RawPhoto {
    url: String,
    #[serde(rename = "alternativeText", default)]
    alternative_text: Option<String>,
    #[serde(default)]
    formats: Option<PhotoFormats>,
}

/// Decode a `GET /api/recrutements/{id}` response body.
pub fn decode_posting(id: &JobId, body: &[u8]) -> Result<JobPosting, FetchError> {
    let envelope: Envelope<Entry<RawPosting>> =
        serde_json::from_slice(body).map_err(|e| FetchError::Decode(e.to_string()))?;

    let Some(entry) = envelope.data else {
        if let Some(err) = envelope.error {
            tracing::debug!(
                id = %id,
                status = ?err.status,
                name = ?err.name,
                message = ?err.message,
                "backend returned error envelope"
            );
        }
        return Err(FetchError::Missing);
    };

    let raw = entry.attributes;

    let job_title = non_blank(raw.job_title)
        .ok_or_else(|| FetchError::Decode("job_title is missing or blank".to_string()))?;

    let created_at = match raw.created_at.as_deref() {
        Some(s) => Some(
            DateTime::parse_from_rfc3339(s)
                .map_err(|e| FetchError::Decode(format!("createdAt: {e}")))?
                .with_timezone(&Utc),
        ),
        None => None,
    };

    let photo = raw
        .photo
        .and_then(|p| p.data)
        .map(|entry| entry.attributes)
        .filter(|p| !p.url.trim().is_empty())
        .map(|p| Photo {
            url: p.url,
            alternative_text: non_blank(p.alternative_text),
            formats: p.formats.unwrap_or_default(),
        });

    Ok(JobPosting {
        id: id.clone(),
        job_title,
        job_location: non_blank(raw.job_location),
        contract_type: non_blank(raw.contract_type),
        content: raw.content.unwrap_or_default(),
        contact: non_blank(raw.contact),
        created_at,
        photo,
    })
}

/// Treat empty and whitespace-only CMS strings as absent.
fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}


#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::*;
    use serde_json::json;

    fn id() -> JobId {
        JobId::parse("42").unwrap()
    }

    fn decode(value: serde_json::Value) -> Result<JobPosting, FetchError> {
        decode_posting(&id(), value.to_string().as_bytes())
    }

    // -- JobId --

    #[test]
    fn job_id_numeric() {
        assert_eq!(JobId::parse("42").unwrap().as_str(), "42");
    }

    #[test]
    fn job_id_document_id() {
        assert!(JobId::parse("a1b2c3_d4-e5").is_some());
    }

    #[test]
    fn job_id_trimmed() {
        assert_eq!(JobId::parse("  7 ").unwrap().as_str(), "7");
    }

    #[test]
    fn job_id_rejects_empty() {
        assert!(JobId::parse("").is_none());
        assert!(JobId::parse("   ").is_none());
    }

    #[test]
    fn job_id_rejects_path_characters() {
        assert!(JobId::parse("../admin").is_none());
        assert!(JobId::parse("1?populate=*").is_none());
        assert!(JobId::parse("1/2").is_none());
    }

    #[test]
    fn job_id_rejects_too_long() {
        assert!(JobId::parse(&"9".repeat(65)).is_none());
        assert!(JobId::parse(&"9".repeat(64)).is_some());
    }

    // -- decode_posting --

    #[test]
    fn decode_full_posting() {
        let posting = decode(posting_json(medium_photo())).unwrap();
        assert_eq!(posting.id.as_str(), "42");
        assert_eq!(posting.job_title, "Conducteur de travaux");
        assert_eq!(posting.job_location.as_deref(), Some("Lyon"));
        assert_eq!(posting.contract_type.as_deref(), Some("CDI"));
        assert_eq!(posting.contact.as_deref(), Some("Marie Dupont"));
        assert!(posting.content.starts_with("## Missions"));
        assert_eq!(
            posting.created_at.unwrap().to_rfc3339(),
            "2024-03-05T09:30:00+00:00"
        );
        let photo = posting.photo.unwrap();
        assert_eq!(photo.url, "/uploads/chantier.jpg");
        assert_eq!(photo.alternative_text.as_deref(), Some("Chantier"));
        assert_eq!(photo.display_url(), "/uploads/medium_chantier.jpg");
    }

    #[test]
    fn decode_base_only_photo() {
        let posting = decode(posting_json(base_only_photo())).unwrap();
        let photo = posting.photo.unwrap();
        assert!(photo.formats.medium.is_none());
        assert_eq!(photo.display_url(), "/uploads/small.png");
    }

    #[test]
    fn decode_null_photo_relation() {
        let posting = decode(posting_json(no_photo())).unwrap();
        assert!(posting.photo.is_none());
    }

    #[test]
    fn decode_photo_field_null_or_absent() {
        let posting = decode(posting_json(serde_json::Value::Null)).unwrap();
        assert!(posting.photo.is_none());

        let mut body = posting_json(no_photo());
        body["data"]["attributes"]
            .as_object_mut()
            .unwrap()
            .remove("photo");
        assert!(decode(body).unwrap().photo.is_none());
    }

    #[test]
    fn decode_optional_fields_absent() {
        let body = json!({
            "data": { "id": 1, "attributes": { "job_title": "Chef d'équipe" } }
        });
        let posting = decode(body).unwrap();
        assert!(posting.contract_type.is_none());
        assert!(posting.job_location.is_none());
        assert!(posting.contact.is_none());
        assert!(posting.created_at.is_none());
        assert_eq!(posting.content, "");
    }

    #[test]
    fn decode_blank_contract_type_is_absent() {
        let mut body = posting_json(no_photo());
        body["data"]["attributes"]["contract_type"] = json!("  ");
        assert!(decode(body).unwrap().contract_type.is_none());
    }

    #[test]
    fn decode_missing_title_fails() {
        let body = json!({ "data": { "id": 1, "attributes": { "content": "x" } } });
        assert!(matches!(decode(body), Err(FetchError::Decode(_))));
    }

    #[test]
    fn decode_bad_timestamp_fails() {
        let mut body = posting_json(no_photo());
        body["data"]["attributes"]["createdAt"] = json!("yesterday");
        assert!(matches!(decode(body), Err(FetchError::Decode(_))));
    }

    #[test]
    fn decode_error_envelope_is_missing() {
        let body = json!({
            "data": null,
            "error": { "status": 404, "name": "NotFoundError", "message": "Not Found", "details": {} }
        });
        assert!(matches!(decode(body), Err(FetchError::Missing)));
    }

    #[test]
    fn decode_malformed_json_fails() {
        let result = decode_posting(&id(), b"<html>gateway</html>");
        assert!(matches!(result, Err(FetchError::Decode(_))));
    }

    #[test]
    fn photo_empty_medium_url_falls_back() {
        let photo = Photo {
            url: "/uploads/a.jpg".to_string(),
            alternative_text: None,
            formats: PhotoFormats {
                medium: Some(PhotoFormat {
                    url: String::new(),
                    width: None,
                    height: None,
                }),
                ..Default::default()
            },
        };
        assert_eq!(photo.display_url(), "/uploads/a.jpg");
    }
}
