//! Enquiry submission and review.

use innovation_school_core::{Enquiry, NewEnquiry};
use tracing::instrument;

use crate::backend::BackendClient;
use crate::services::ServiceError;

/// Order a review list newest first.
#[must_use]
pub fn sorted_newest_first(mut enquiries: Vec<Enquiry>) -> Vec<Enquiry> {
    enquiries.sort_by(|a, b| b.submitted_at.cmp(&a.submitted_at));
    enquiries
}

/// Enquiry operations: public submission plus the admin review inbox.
pub struct EnquiryInbox<'a> {
    backend: &'a BackendClient,
}

impl<'a> EnquiryInbox<'a> {
    /// Create an inbox over the shared client.
    #[must_use]
    pub const fn new(backend: &'a BackendClient) -> Self {
        Self { backend }
    }

    /// Submit a visitor enquiry, stamping its id and timestamp.
    ///
    /// # Errors
    ///
    /// Returns a sanitized error if the remote call fails; the enquiry is
    /// only considered sent once the store confirms it.
    #[instrument(skip(self, enquiry))]
    pub async fn submit(&self, enquiry: NewEnquiry) -> Result<Enquiry, ServiceError> {
        let enquiry = enquiry.into_enquiry();
        self.backend.submit_enquiry(&enquiry).await?;
        Ok(enquiry)
    }

    /// All enquiries, newest first, for the admin review list.
    ///
    /// # Errors
    ///
    /// Returns a sanitized error if the remote call fails.
    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<Enquiry>, ServiceError> {
        let enquiries = self.backend.get_all_enquiries().await?;
        Ok(sorted_newest_first(enquiries))
    }

    /// How many enquiries are still unread.
    ///
    /// # Errors
    ///
    /// Returns a sanitized error if the remote call fails.
    #[instrument(skip(self))]
    pub async fn unread_count(&self) -> Result<usize, ServiceError> {
        let enquiries = self.backend.get_all_enquiries().await?;
        Ok(enquiries.iter().filter(|e| !e.is_read).count())
    }

    /// Mark one enquiry read. Safe to repeat; the transition happens once.
    ///
    /// # Errors
    ///
    /// Returns a sanitized error if the remote call fails.
    #[instrument(skip(self), fields(id = %id))]
    pub async fn mark_read(&self, id: &str) -> Result<(), ServiceError> {
        self.backend.mark_enquiry_as_read(id).await?;
        Ok(())
    }

    /// Remove an enquiry from the store.
    ///
    /// Destructive - callers confirm with the admin before invoking.
    ///
    /// # Errors
    ///
    /// Returns a sanitized error if the remote call fails.
    #[instrument(skip(self), fields(id = %id))]
    pub async fn delete(&self, id: &str) -> Result<(), ServiceError> {
        self.backend.delete_enquiry(id).await?;
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use innovation_school_core::Email;

    fn enquiry_at(id: &str, timestamp: i64) -> Enquiry {
        Enquiry {
            id: id.to_owned(),
            name: "A Parent".to_owned(),
            email: Email::parse("parent@example.com").unwrap(),
            subject: "Admission".to_owned(),
            enquiry_type: "admission".to_owned(),
            message: "Hello".to_owned(),
            submitted_at: Utc.timestamp_opt(timestamp, 0).single().unwrap(),
            is_read: false,
        }
    }

    #[test]
    fn test_sorted_newest_first() {
        let enquiries = vec![
            enquiry_at("e-100", 100),
            enquiry_at("e-300", 300),
            enquiry_at("e-200", 200),
        ];

        let sorted = sorted_newest_first(enquiries);

        let ids: Vec<&str> = sorted.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["e-300", "e-200", "e-100"]);
    }

    #[test]
    fn test_sort_is_stable_for_equal_timestamps() {
        let enquiries = vec![
            enquiry_at("e-first", 100),
            enquiry_at("e-second", 100),
        ];

        let sorted = sorted_newest_first(enquiries);

        let ids: Vec<&str> = sorted.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["e-first", "e-second"]);
    }
}
