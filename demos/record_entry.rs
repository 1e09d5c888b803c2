//! Guided entry flow against the default workbook in the current directory:
//! normalize, infer, validate, append, persist, export.

use fiscal_record_tracker::*;

fn main() -> Result<()> {
    env_logger::init();

    let mut session = RecordSession::open(DEFAULT_WORKBOOK);
    if let Some(warning) = session.load_warning() {
        eprintln!("aviso: {warning}");
    }
    println!(
        "Planilha {:?}, {} registros carregados",
        session.path(),
        session.table().len()
    );

    let mut draft = RecordDraft {
        issue_date: "10/10/2025".to_string(),
        document_number: "1023".to_string(),
        counterparty: "Ferro & Cia Ltda".to_string(),
        description: "Compra de barras de ferro".to_string(),
        operation_code: "1102".to_string(),
        category: Some(Category::Materials),
        amount: "8.500,00".to_string(),
        status: Status::Received,
        access_key: "35241111879788000123550000001023123456789012".to_string(),
        ..RecordDraft::default()
    };

    let code = normalize_operation_code(&draft.operation_code);
    println!("CFOP normalizado: {code}");
    match infer_direction(&code) {
        Some(direction) => println!("Tipo inferido: {direction}"),
        None => println!("Tipo não identificado"),
    }

    // seed the department the way the form does; the user may override it
    draft.responsible_department = default_department(&code, draft.category)
        .unwrap_or_default()
        .to_string();
    println!("Setor sugerido: {}", draft.responsible_department);

    match session.submit(&draft) {
        Ok(submission) => {
            for warning in &submission.warnings {
                eprintln!("aviso: {warning}");
            }
            println!(
                "Registro {} adicionado e planilha atualizada ({} linhas).",
                submission.record.document_number,
                session.table().len()
            );
        }
        Err(FiscalRecordError::DraftRejected(errors)) => {
            for error in errors {
                eprintln!("• {error}");
            }
        }
        Err(other) => return Err(other),
    }

    let bytes = session.export_bytes()?;
    println!("Exportação gerada: {} bytes", bytes.len());

    Ok(())
}
