//! # Fiscal Record Tracker
//!
//! A single-user library for tracking fiscal records ("Notas Fiscais") in a
//! spreadsheet, with rule-based field inference and an optional advisory
//! chat against a locally hosted language model.
//!
//! ## Core Concepts
//!
//! - **Normalization**: raw user input becomes canonical field values
//!   (operation code `D.DDD`, date `dd/mm/yyyy`, amount `1234.50`)
//! - **Inference**: the operation code's leading digit suggests the
//!   transaction direction and a responsible department; the user can
//!   override either, and an override that disagrees with the code only
//!   warns, it never rejects
//! - **Validation**: every field contract is checked independently and all
//!   failures are reported together; a rejected draft changes nothing
//! - **Store**: an append-only sheet, fully rewritten on each persist
//! - **Advisory**: a chat endpoint consulted for tax/process guidance; its
//!   failures collapse to a readable fallback reply and never gate data entry
//!
//! ## Example
//!
//! ```rust,ignore
//! use fiscal_record_tracker::*;
//!
//! let mut session = RecordSession::open("Planilha_Controle_Notas_Fiscais.xlsx");
//!
//! let draft = RecordDraft {
//!     issue_date: "10/10/2025".to_string(),
//!     document_number: "1023".to_string(),
//!     operation_code: "1102".to_string(),
//!     category: Some(Category::Materials),
//!     amount: "8.500,00".to_string(),
//!     responsible_department: "Almoxarifado / Contabilidade".to_string(),
//!     status: Status::Received,
//!     access_key: "35241111879788000123550000001023123456789012".to_string(),
//!     ..RecordDraft::default()
//! };
//!
//! let submission = session.submit(&draft)?;
//! assert_eq!(submission.record.direction, "Entrada");
//! ```

pub mod advisor;
pub mod config;
pub mod error;
pub mod infer;
pub mod normalize;
pub mod schema;
pub mod session;
pub mod store;
pub mod validate;

pub use advisor::{AdvisoryClient, DEFAULT_TEMPERATURE, DEFAULT_TOP_P};
pub use config::AdvisorConfig;
pub use error::{FiscalRecordError, Result};
pub use infer::{
    default_department, infer_direction, resolve_direction, suggest_department_by_category,
    suggest_department_by_code, DirectionResolution,
};
pub use normalize::{
    format_amount, format_issue_date, normalize_operation_code, parse_amount, parse_issue_date,
};
pub use schema::{
    sample_records, Category, Direction, FiscalRecord, RecordDraft, Status, COLUMNS,
    DEFAULT_WORKBOOK, SHEET_NAME,
};
pub use session::{ChatRole, ChatTurn, RecordSession, Submission};
pub use store::SheetTable;
pub use validate::{build_record, is_valid_access_key, validate};
