use serde::{Deserialize, Serialize};

/// Backing workbook defaults. The sheet layout below is the on-disk contract:
/// one sheet holding the columns of [`COLUMNS`], in that order, text cells only.
pub const DEFAULT_WORKBOOK: &str = "Planilha_Controle_Notas_Fiscais.xlsx";
pub const SHEET_NAME: &str = "Notas";

/// Column headers of the backing sheet, in schema order.
pub const COLUMNS: [&str; 11] = [
    "Data de Emissão",
    "Nº da NF",
    "Tipo (Entrada/Saída)",
    "Fornecedor ou Cliente",
    "Descrição / Observação",
    "CFOP",
    "Categoria",
    "Valor Total (R$)",
    "Departamento Responsável",
    "Situação (Paga / Pendente / Recebida / Entregue)",
    "Chave de Acesso (44 dígitos)",
];

/// Whether a fiscal record represents goods/services received or provided.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    #[serde(rename = "Entrada")]
    Inbound,
    #[serde(rename = "Saída")]
    Outbound,
}

impl Direction {
    pub const ALL: [Direction; 2] = [Direction::Inbound, Direction::Outbound];

    pub fn as_label(&self) -> &'static str {
        match self {
            Direction::Inbound => "Entrada",
            Direction::Outbound => "Saída",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim() {
            "Entrada" => Some(Direction::Inbound),
            "Saída" | "Saida" => Some(Direction::Outbound),
            _ => None,
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_label())
    }
}

/// Fixed record categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Materiais / Insumos")]
    Materials,
    #[serde(rename = "Serviços")]
    Services,
    #[serde(rename = "Vendas de Produtos")]
    ProductSales,
    #[serde(rename = "Despesas administrativas")]
    AdministrativeExpenses,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Materials,
        Category::Services,
        Category::ProductSales,
        Category::AdministrativeExpenses,
    ];

    pub fn as_label(&self) -> &'static str {
        match self {
            Category::Materials => "Materiais / Insumos",
            Category::Services => "Serviços",
            Category::ProductSales => "Vendas de Produtos",
            Category::AdministrativeExpenses => "Despesas administrativas",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_label() == label.trim())
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_label())
    }
}

/// Fixed record statuses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    #[serde(rename = "Paga")]
    Paid,
    #[serde(rename = "Pendente")]
    Pending,
    #[serde(rename = "Recebida")]
    Received,
    #[serde(rename = "Entregue")]
    Delivered,
}

impl Status {
    pub const ALL: [Status; 4] = [
        Status::Paid,
        Status::Pending,
        Status::Received,
        Status::Delivered,
    ];

    pub fn as_label(&self) -> &'static str {
        match self {
            Status::Paid => "Paga",
            Status::Pending => "Pendente",
            Status::Received => "Recebida",
            Status::Delivered => "Entregue",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Status::ALL
            .into_iter()
            .find(|s| s.as_label() == label.trim())
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_label())
    }
}

/// One row of the backing sheet, all fields in canonical text form.
///
/// A record is an immutable snapshot once appended: the store only appends
/// and rewrites the whole table, it never mutates rows in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FiscalRecord {
    /// Issue date rendered `dd/mm/yyyy`.
    pub issue_date: String,
    pub document_number: String,
    /// `Entrada` or `Saída`.
    pub direction: String,
    pub counterparty: String,
    pub description: String,
    /// Operation code in `D.DDD` form.
    pub operation_code: String,
    pub category: String,
    /// Amount with exactly two fraction digits and a `.` decimal separator.
    pub amount: String,
    pub responsible_department: String,
    pub status: String,
    /// 44 ASCII digits, no separators.
    pub access_key: String,
}

impl FiscalRecord {
    /// Cells in [`COLUMNS`] order.
    pub fn to_row(&self) -> [String; 11] {
        [
            self.issue_date.clone(),
            self.document_number.clone(),
            self.direction.clone(),
            self.counterparty.clone(),
            self.description.clone(),
            self.operation_code.clone(),
            self.category.clone(),
            self.amount.clone(),
            self.responsible_department.clone(),
            self.status.clone(),
            self.access_key.clone(),
        ]
    }
}

/// Raw form state before validation. String fields hold user input verbatim.
/// `direction` and `category` are `None` while the user leaves them on
/// automatic; the status selector always carries a value.
#[derive(Debug, Clone)]
pub struct RecordDraft {
    pub issue_date: String,
    pub document_number: String,
    pub direction: Option<Direction>,
    pub counterparty: String,
    pub description: String,
    pub operation_code: String,
    pub category: Option<Category>,
    pub amount: String,
    pub responsible_department: String,
    pub status: Status,
    pub access_key: String,
}

impl Default for RecordDraft {
    fn default() -> Self {
        Self {
            issue_date: String::new(),
            document_number: String::new(),
            direction: None,
            counterparty: String::new(),
            description: String::new(),
            operation_code: String::new(),
            category: None,
            amount: String::new(),
            responsible_department: String::new(),
            status: Status::Paid,
            access_key: String::new(),
        }
    }
}

/// Four ready-made example rows, used to seed an empty table on demand.
pub fn sample_records() -> Vec<FiscalRecord> {
    let rows = [
        [
            "10/10/2025",
            "1023",
            "Entrada",
            "Ferro & Cia Ltda",
            "Compra de barras de ferro",
            "1.102",
            "Materiais / Insumos",
            "8500.00",
            "Almoxarifado / Contabilidade",
            "Recebida",
            "35241111879788000123550000001023123456789012",
        ],
        [
            "11/10/2025",
            "1589",
            "Saída",
            "Oficina Mecânica Pires",
            "Venda de eixos montados",
            "5.101",
            "Vendas de Produtos",
            "12900.00",
            "Fiscal / Financeiro",
            "Entregue",
            "35241111879788000123550000001589123456789012",
        ],
        [
            "15/10/2025",
            "2045",
            "Entrada",
            "Servmaq Serviços Ltda",
            "Manutenção de torno mecânico",
            "1.401",
            "Serviços",
            "3500.00",
            "Manutenção / Financeiro",
            "Paga",
            "35241111879788000123550000002045123456789012",
        ],
        [
            "18/10/2025",
            "1780",
            "Saída",
            "Auto Peças Silva",
            "Venda de cubos e flanges",
            "5.102",
            "Vendas de Produtos",
            "24700.00",
            "Fiscal / Financeiro",
            "Entregue",
            "35241111879788000123550000001780123456789012",
        ],
    ];

    rows.into_iter()
        .map(|r| FiscalRecord {
            issue_date: r[0].to_string(),
            document_number: r[1].to_string(),
            direction: r[2].to_string(),
            counterparty: r[3].to_string(),
            description: r[4].to_string(),
            operation_code: r[5].to_string(),
            category: r[6].to_string(),
            amount: r[7].to_string(),
            responsible_department: r[8].to_string(),
            status: r[9].to_string(),
            access_key: r[10].to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_labels_round_trip() {
        for d in Direction::ALL {
            assert_eq!(Direction::from_label(d.as_label()), Some(d));
        }
        assert_eq!(Direction::from_label("Saida"), Some(Direction::Outbound));
        assert_eq!(Direction::from_label("outro"), None);
    }

    #[test]
    fn test_enum_serde_uses_sheet_labels() {
        let json = serde_json::to_string(&Direction::Outbound).unwrap();
        assert_eq!(json, "\"Saída\"");

        let cat: Category = serde_json::from_str("\"Materiais / Insumos\"").unwrap();
        assert_eq!(cat, Category::Materials);

        let status = serde_json::to_string(&Status::Received).unwrap();
        assert_eq!(status, "\"Recebida\"");
    }

    #[test]
    fn test_record_row_matches_schema_order() {
        let samples = sample_records();
        assert_eq!(samples.len(), 4);

        let row = samples[0].to_row();
        assert_eq!(row.len(), COLUMNS.len());
        assert_eq!(row[0], "10/10/2025");
        assert_eq!(row[5], "1.102");
        assert_eq!(row[10].len(), 44);
    }
}
