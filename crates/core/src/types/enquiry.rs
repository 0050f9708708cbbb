//! Enquiry-form types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::email::Email;

/// One submitted enquiry, as stored by the remote store.
///
/// `submitted_at` is stamped at submission time and is the sort key for the
/// admin review list (newest first). `is_read` transitions false to true at
/// most once; re-marking a read enquiry is a no-op on the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Enquiry {
    pub id: String,
    pub name: String,
    pub email: Email,
    pub subject: String,
    /// Which form produced this enquiry (e.g. `admission`, `general`).
    pub enquiry_type: String,
    pub message: String,
    pub submitted_at: DateTime<Utc>,
    pub is_read: bool,
}

/// Input for a new enquiry submission, before an id and timestamp exist.
#[derive(Debug, Clone)]
pub struct NewEnquiry {
    pub name: String,
    pub email: Email,
    pub subject: String,
    pub enquiry_type: String,
    pub message: String,
}

impl NewEnquiry {
    /// Stamp this submission with a fresh id, the current time, and the
    /// unread flag, producing the record sent to the remote store.
    #[must_use]
    pub fn into_enquiry(self) -> Enquiry {
        Enquiry {
            id: Uuid::new_v4().to_string(),
            name: self.name,
            email: self.email,
            subject: self.subject,
            enquiry_type: self.enquiry_type,
            message: self.message,
            submitted_at: Utc::now(),
            is_read: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_enquiry() -> NewEnquiry {
        NewEnquiry {
            name: "A Parent".to_owned(),
            email: Email::parse("parent@example.com").expect("valid email"),
            subject: "Admission for Class I".to_owned(),
            enquiry_type: "admission".to_owned(),
            message: "What documents are needed?".to_owned(),
        }
    }

    #[test]
    fn test_into_enquiry_is_unread() {
        let enquiry = new_enquiry().into_enquiry();
        assert!(!enquiry.is_read);
        assert_eq!(enquiry.enquiry_type, "admission");
    }

    #[test]
    fn test_into_enquiry_generates_distinct_ids() {
        let a = new_enquiry().into_enquiry();
        let b = new_enquiry().into_enquiry();
        assert_ne!(a.id, b.id);
    }
}
