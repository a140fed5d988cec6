//! Company-level glue records.
//!
//! Holidays, company settings, announcements, and employee document
//! metadata. These are plain CRUD passthrough records; only the holiday
//! set participates in a calculation (working-day counting).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A company holiday, excluded from working-day counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holiday {
    /// The date of the holiday.
    pub date: NaiveDate,
    /// The name of the holiday (e.g., "Republic Day").
    pub name: String,
}

/// Company-wide settings.
///
/// Holds the fallback proration denominator for callers that do not
/// derive working days from the calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanySettings {
    /// Default number of payable days in a month.
    pub default_working_days: u32,
}

impl Default for CompanySettings {
    fn default() -> Self {
        Self {
            default_working_days: 26,
        }
    }
}

/// A company announcement shown on dashboards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Announcement {
    /// Unique identifier for the announcement.
    pub id: String,
    /// The headline.
    pub title: String,
    /// The body text.
    pub content: String,
    /// The publication date.
    pub date: NaiveDate,
}

/// Metadata for a document stored against an employee.
///
/// The file itself lives with the external object-storage collaborator;
/// the engine only tracks the pointer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeDocument {
    /// Unique identifier for the document.
    pub id: String,
    /// The employee the document belongs to.
    pub employee_id: String,
    /// The original file name.
    pub file_name: String,
    /// The path within the object store.
    pub file_path: String,
    /// The document category (e.g., "id_proof", "offer_letter").
    pub document_type: String,
    /// The date the document was uploaded.
    pub uploaded_on: NaiveDate,
}
