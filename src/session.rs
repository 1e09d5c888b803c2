use crate::advisor::AdvisoryClient;
use crate::config::AdvisorConfig;
use crate::error::Result;
use crate::infer::{infer_direction, resolve_direction};
use crate::normalize::normalize_operation_code;
use crate::schema::{sample_records, FiscalRecord, RecordDraft};
use crate::store::SheetTable;
use crate::validate::build_record;
use log::info;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChatRole {
    User,
    Assistant,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: ChatRole,
    pub text: String,
}

/// Outcome of a successful submit: the canonical record plus any
/// non-blocking warnings (currently only the direction mismatch notice).
#[derive(Debug, Clone)]
pub struct Submission {
    pub record: FiscalRecord,
    pub warnings: Vec<String>,
}

/// Per-session state: the live table, its backing path, the advisory
/// configuration and the chat history.
///
/// There is exactly one mutable table reference per session and every
/// operation runs to completion on the calling thread, so no concurrency
/// control is needed here.
pub struct RecordSession {
    path: PathBuf,
    table: SheetTable,
    config: AdvisorConfig,
    advisor: AdvisoryClient,
    chat: Vec<ChatTurn>,
    load_warning: Option<String>,
}

impl RecordSession {
    /// Loads the backing file (or starts empty), keeping any recoverable
    /// load warning around for the caller's banner.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let (table, load_warning) = SheetTable::load_or_init(&path);
        Self {
            path,
            table,
            config: AdvisorConfig::from_env(),
            advisor: AdvisoryClient::new(),
            chat: Vec::new(),
            load_warning,
        }
    }

    /// Validates the draft as a unit, then appends and persists as one
    /// logical sequence. A rejected draft leaves the table and the backing
    /// file untouched.
    pub fn submit(&mut self, draft: &RecordDraft) -> Result<Submission> {
        let record = build_record(draft)?;

        let code = normalize_operation_code(&draft.operation_code);
        let resolved = resolve_direction(draft.direction, infer_direction(&code));
        let warnings: Vec<String> = resolved.warning.into_iter().collect();

        self.table.append(&record);
        self.table.persist(&self.path)?;
        info!(
            "record {} appended, table now has {} rows",
            record.document_number,
            self.table.len()
        );

        Ok(Submission { record, warnings })
    }

    /// Appends the four seeded example rows to the live table without
    /// persisting; call [`save`] to write them out.
    ///
    /// [`save`]: RecordSession::save
    pub fn load_samples(&mut self) -> usize {
        let samples = sample_records();
        let count = samples.len();
        for record in &samples {
            self.table.append(record);
        }
        count
    }

    /// Sends a single-turn advisory question and records both sides of the
    /// exchange in the chat history. Never fails; see [`AdvisoryClient::ask`].
    pub fn ask(&mut self, question: &str, temperature: f64, top_p: f64) -> String {
        self.chat.push(ChatTurn {
            role: ChatRole::User,
            text: question.to_string(),
        });
        let reply = self.advisor.ask(question, &self.config, temperature, top_p);
        self.chat.push(ChatTurn {
            role: ChatRole::Assistant,
            text: reply.clone(),
        });
        reply
    }

    /// Advisory banner probe; never gates the data-entry path.
    pub fn advisor_available(&self) -> bool {
        self.advisor.available(&self.config.endpoint)
    }

    pub fn save(&self) -> Result<()> {
        self.table.persist(&self.path)
    }

    pub fn export_bytes(&self) -> Result<Vec<u8>> {
        self.table.export_bytes()
    }

    pub fn table(&self) -> &SheetTable {
        &self.table
    }

    pub fn chat_history(&self) -> &[ChatTurn] {
        &self.chat
    }

    pub fn load_warning(&self) -> Option<&str> {
        self.load_warning.as_deref()
    }

    pub fn config(&self) -> &AdvisorConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut AdvisorConfig {
        &mut self.config
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FiscalRecordError;
    use crate::schema::{Category, Direction, Status};
    use tempfile::TempDir;

    fn draft() -> RecordDraft {
        RecordDraft {
            issue_date: "10/10/2025".to_string(),
            document_number: "1023".to_string(),
            direction: None,
            counterparty: "Ferro & Cia Ltda".to_string(),
            description: "Compra de barras de ferro".to_string(),
            operation_code: "1102".to_string(),
            category: Some(Category::Materials),
            amount: "8.500,00".to_string(),
            responsible_department: "Almoxarifado / Contabilidade".to_string(),
            status: Status::Received,
            access_key: "35241111879788000123550000001023123456789012".to_string(),
        }
    }

    #[test]
    fn test_submit_appends_and_persists() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("notas.xlsx");

        let mut session = RecordSession::open(&path);
        assert!(session.load_warning().is_none());

        let submission = session.submit(&draft()).unwrap();
        assert_eq!(submission.record.operation_code, "1.102");
        assert_eq!(submission.record.direction, "Entrada");
        assert_eq!(submission.record.amount, "8500.00");
        assert!(submission.warnings.is_empty());
        assert!(path.exists());

        // a fresh session sees the persisted row
        let reopened = RecordSession::open(&path);
        assert_eq!(reopened.table().len(), 1);
    }

    #[test]
    fn test_rejected_draft_changes_nothing() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("notas.xlsx");

        let mut session = RecordSession::open(&path);
        let mut bad = draft();
        bad.access_key = "123".to_string();

        match session.submit(&bad) {
            Err(FiscalRecordError::DraftRejected(errors)) => assert_eq!(errors.len(), 1),
            other => panic!("expected DraftRejected, got {other:?}"),
        }
        assert!(session.table().is_empty());
        assert!(!path.exists());
    }

    #[test]
    fn test_submit_warns_on_direction_override() {
        let dir = TempDir::new().unwrap();
        let mut session = RecordSession::open(dir.path().join("notas.xlsx"));

        let mut overridden = draft();
        overridden.direction = Some(Direction::Outbound);

        let submission = session.submit(&overridden).unwrap();
        assert_eq!(submission.record.direction, "Saída");
        assert_eq!(submission.warnings.len(), 1);
    }

    #[test]
    fn test_load_samples_then_save() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("notas.xlsx");

        let mut session = RecordSession::open(&path);
        assert_eq!(session.load_samples(), 4);
        assert!(!path.exists());

        session.save().unwrap();
        let reopened = RecordSession::open(&path);
        assert_eq!(reopened.table().len(), 4);
    }

    #[test]
    fn test_ask_records_history_and_never_fails() {
        let dir = TempDir::new().unwrap();
        let mut session = RecordSession::open(dir.path().join("notas.xlsx"));
        session.config_mut().set_endpoint("http://127.0.0.1:9");

        let reply = session.ask("Como tratar CFOP 1.401?", 0.2, 0.9);
        assert!(reply.contains("I.A. indisponível"));

        let history = session.chat_history();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].role, ChatRole::User);
        assert_eq!(history[1].role, ChatRole::Assistant);
        assert_eq!(history[1].text, reply);
    }
}
