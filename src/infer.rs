use crate::schema::{Category, Direction};
use regex::Regex;
use std::sync::LazyLock;

static RE_OPERATION_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d)\.?\d{3}$").unwrap());

/// Department suggested by the operation code's leading digit.
const INBOUND_DEPARTMENT: &str = "Compras / Almoxarifado / Contabilidade";
const OUTBOUND_DEPARTMENT: &str = "Vendas / Financeiro / Fiscal";

/// Infers the transaction direction from a normalized operation code.
///
/// Domain convention: inbound codes start with 1 or 2, outbound codes with
/// 5 or 6. Any other leading digit, or a code that does not match the
/// `D.DDD` shape, yields no determination.
pub fn infer_direction(code: &str) -> Option<Direction> {
    let captures = RE_OPERATION_CODE.captures(code)?;
    match captures.get(1)?.as_str() {
        "1" | "2" => Some(Direction::Inbound),
        "5" | "6" => Some(Direction::Outbound),
        _ => None,
    }
}

/// Department suggested by the operation code's leading digit, when the
/// digit falls in one of the two mapped ranges.
pub fn suggest_department_by_code(code: &str) -> Option<&'static str> {
    match code.chars().next()? {
        '1' | '2' => Some(INBOUND_DEPARTMENT),
        '5' | '6' => Some(OUTBOUND_DEPARTMENT),
        _ => None,
    }
}

/// Department suggested by the record category. Total over the closed
/// category set.
pub fn suggest_department_by_category(category: Category) -> &'static str {
    match category {
        Category::Materials => "Produção / Almoxarifado",
        Category::Services => "Manutenção / Financeiro",
        Category::ProductSales => "Comercial / Fiscal",
        Category::AdministrativeExpenses => "Administrativo / Financeiro",
    }
}

/// Seed for the responsible-department field: the code-derived suggestion
/// wins over the category-derived one. The user may override either.
pub fn default_department(code: &str, category: Option<Category>) -> Option<&'static str> {
    suggest_department_by_code(code).or_else(|| category.map(suggest_department_by_category))
}

/// Outcome of combining an explicit user choice with the inferred direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectionResolution {
    pub direction: Option<Direction>,
    /// Non-blocking notice when the explicit choice disagrees with the code.
    pub warning: Option<String>,
}

/// The explicit user choice wins over the inference; a disagreement is
/// reported but never rejects the record.
pub fn resolve_direction(
    explicit: Option<Direction>,
    inferred: Option<Direction>,
) -> DirectionResolution {
    match (explicit, inferred) {
        (Some(chosen), Some(suggested)) if chosen != suggested => DirectionResolution {
            direction: Some(chosen),
            warning: Some(
                "O tipo selecionado diverge do CFOP. Verifique a consistência.".to_string(),
            ),
        },
        (Some(chosen), _) => DirectionResolution {
            direction: Some(chosen),
            warning: None,
        },
        (None, inferred) => DirectionResolution {
            direction: inferred,
            warning: None,
        },
    }
}
