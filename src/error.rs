use thiserror::Error;

#[derive(Error, Debug)]
pub enum FiscalRecordError {
    #[error("Data de emissão inválida: {0:?} (use dd/mm/aaaa)")]
    DateFormat(String),

    #[error("Valor inválido: {0:?} (use 1.234,56 ou 1234.56)")]
    AmountFormat(String),

    #[error("Registro rejeitado:\n{}", .0.join("\n"))]
    DraftRejected(Vec<String>),

    #[error("Spreadsheet write error: {0}")]
    SheetWrite(#[from] rust_xlsxwriter::XlsxError),

    #[error("Advisory request error: {0}")]
    Advisory(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, FiscalRecordError>;
