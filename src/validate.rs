use crate::error::{FiscalRecordError, Result};
use crate::infer::{infer_direction, resolve_direction};
use crate::normalize::{
    format_amount, format_issue_date, normalize_operation_code, parse_amount, parse_issue_date,
};
use crate::schema::{FiscalRecord, RecordDraft};
use regex::Regex;
use std::sync::LazyLock;

static RE_CANONICAL_CODE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d\.\d{3}$").unwrap());
static RE_ACCESS_KEY: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d{44}$").unwrap());

/// True iff the key is exactly 44 ASCII digits after trimming.
pub fn is_valid_access_key(key: &str) -> bool {
    RE_ACCESS_KEY.is_match(key.trim())
}

/// Checks every field contract independently and reports all failures in one
/// pass, so the user sees the complete list at once.
pub fn validate(draft: &RecordDraft) -> Vec<String> {
    let mut errors = Vec::new();

    if parse_issue_date(&draft.issue_date).is_err() {
        errors.push("Data de emissão inválida (use dd/mm/aaaa).".to_string());
    }

    if draft.document_number.trim().is_empty() {
        errors.push("Número da NF é obrigatório.".to_string());
    }

    let code = normalize_operation_code(&draft.operation_code);
    if !RE_CANONICAL_CODE.is_match(&code) {
        errors.push("CFOP inválido (use 1.102 ou similar).".to_string());
    }

    let resolved = resolve_direction(draft.direction, infer_direction(&code));
    if resolved.direction.is_none() {
        errors.push("Tipo não definido (selecione manualmente ou corrija o CFOP).".to_string());
    }

    if draft.category.is_none() {
        errors.push("Categoria não selecionada.".to_string());
    }

    if parse_amount(&draft.amount).is_err() {
        errors.push("Valor total inválido.".to_string());
    }

    if draft.responsible_department.trim().is_empty() {
        errors.push("Departamento responsável não informado.".to_string());
    }

    if !is_valid_access_key(&draft.access_key) {
        errors.push("Chave de acesso deve conter 44 dígitos numéricos.".to_string());
    }

    errors
}

/// Canonicalizes a draft into a [`FiscalRecord`].
///
/// The draft is validated as a unit first; any failure rejects the whole
/// draft with [`FiscalRecordError::DraftRejected`] and nothing is built.
pub fn build_record(draft: &RecordDraft) -> Result<FiscalRecord> {
    let errors = validate(draft);
    if !errors.is_empty() {
        return Err(FiscalRecordError::DraftRejected(errors));
    }

    let code = normalize_operation_code(&draft.operation_code);
    let resolved = resolve_direction(draft.direction, infer_direction(&code));

    // validate() guarantees every parse and resolution below succeeds
    let date = parse_issue_date(&draft.issue_date)?;
    let amount = parse_amount(&draft.amount)?;
    let direction = resolved
        .direction
        .ok_or_else(|| FiscalRecordError::DraftRejected(vec!["Tipo não definido.".to_string()]))?;
    let category = draft.category.ok_or_else(|| {
        FiscalRecordError::DraftRejected(vec!["Categoria não selecionada.".to_string()])
    })?;

    Ok(FiscalRecord {
        issue_date: format_issue_date(date),
        document_number: draft.document_number.trim().to_string(),
        direction: direction.as_label().to_string(),
        counterparty: draft.counterparty.trim().to_string(),
        description: draft.description.trim().to_string(),
        operation_code: code,
        category: category.as_label().to_string(),
        amount: format_amount(amount),
        responsible_department: draft.responsible_department.trim().to_string(),
        status: draft.status.as_label().to_string(),
        access_key: draft.access_key.trim().to_string(),
    })
}
