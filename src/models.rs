use serde::{Deserialize, Serialize};

/// Incoming lead form submission as posted by the landing pages.
///
/// Every field is optional at the type level: the form contract requires
/// `name` and `email` but the endpoint does not enforce presence, and a
/// missing field is forwarded to the store as null.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LeadSubmission {
    pub name: Option<String>,
    pub email: Option<String>,
    pub participation_type: Option<String>,
    pub other: Option<String>,
}

/// One row for the `event_leads` table, serialized as the PostgREST
/// insert payload.
#[derive(Debug, Clone, Serialize)]
pub struct EventLeadRow {
    pub name: Option<String>,
    pub email: Option<String>,
    pub participation_type: Option<String>,
    pub other: Option<String>,
    /// Omitted (not null) when unset so the store-side default applies.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl EventLeadRow {
    pub fn from_submission(submission: LeadSubmission, created_at: Option<String>) -> Self {
        Self {
            name: submission.name,
            email: submission.email,
            participation_type: submission.participation_type,
            other: submission.other,
            created_at,
        }
    }
}
