use anyhow::Result;
use calamine::{Reader, Xlsx};
use fiscal_record_tracker::*;
use std::io::Cursor;
use tempfile::TempDir;

fn inbound_purchase_draft() -> RecordDraft {
    RecordDraft {
        issue_date: "10/10/2025".to_string(),
        document_number: "1023".to_string(),
        direction: None,
        counterparty: "Ferro & Cia Ltda".to_string(),
        description: "Compra de barras de ferro".to_string(),
        operation_code: "1102".to_string(),
        category: Some(Category::Materials),
        amount: "8.500,00".to_string(),
        responsible_department: String::new(),
        status: Status::Received,
        access_key: "35241111879788000123550000001023123456789012".to_string(),
    }
}

#[test]
fn test_guided_entry_flow_end_to_end() -> Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join(DEFAULT_WORKBOOK);

    let mut session = RecordSession::open(&path);

    // the form seeds the department from the code, user keeps the suggestion
    let mut draft = inbound_purchase_draft();
    let code = normalize_operation_code(&draft.operation_code);
    assert_eq!(code, "1.102");
    assert_eq!(infer_direction(&code), Some(Direction::Inbound));
    draft.responsible_department = default_department(&code, draft.category)
        .expect("code 1.102 maps to a department")
        .to_string();

    let submission = session.submit(&draft)?;
    assert_eq!(submission.record.operation_code, "1.102");
    assert_eq!(submission.record.direction, "Entrada");
    assert_eq!(submission.record.amount, "8500.00");
    assert!(submission.warnings.is_empty());

    // the backing file now holds exactly that row, under the fixed schema
    let reopened = RecordSession::open(&path);
    assert!(reopened.load_warning().is_none());
    assert_eq!(reopened.table().len(), 1);

    let row = &reopened.table().rows()[0];
    assert_eq!(row[0], "10/10/2025");
    assert_eq!(row[2], "Entrada");
    assert_eq!(row[7], "8500.00");
    assert_eq!(row[10].len(), 44);

    Ok(())
}

#[test]
fn test_duplicates_are_permitted() -> Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join(DEFAULT_WORKBOOK);

    let mut session = RecordSession::open(&path);
    let mut draft = inbound_purchase_draft();
    draft.responsible_department = "Almoxarifado".to_string();

    session.submit(&draft)?;
    session.submit(&draft)?;
    assert_eq!(session.table().len(), 2);

    Ok(())
}

#[test]
fn test_export_is_independent_of_backing_file() -> Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join(DEFAULT_WORKBOOK);

    let mut session = RecordSession::open(&path);
    session.load_samples();
    // never saved: the backing file does not exist, the export still works
    assert!(!path.exists());

    let bytes = session.export_bytes()?;
    let mut workbook = Xlsx::new(Cursor::new(bytes))?;
    let range = workbook.worksheet_range(SHEET_NAME)?;

    let rows: Vec<_> = range.rows().collect();
    assert_eq!(rows.len(), 5); // header + four samples
    assert_eq!(rows[0][0].to_string(), COLUMNS[0]);
    assert_eq!(rows[1][5].to_string(), "1.102");
    assert!(!path.exists());

    Ok(())
}

#[test]
fn test_advisory_failure_is_a_reply_not_an_error() {
    let dir = TempDir::new().unwrap();
    let mut session = RecordSession::open(dir.path().join(DEFAULT_WORKBOOK));
    session.config_mut().set_endpoint("http://127.0.0.1:9");

    assert!(!session.advisor_available());

    let reply = session.ask(
        "Nova alíquota de ISS para manutenção: como adaptar?",
        DEFAULT_TEMPERATURE,
        DEFAULT_TOP_P,
    );
    assert!(reply.contains("I.A. indisponível"));
    assert_eq!(session.chat_history().len(), 2);
}
