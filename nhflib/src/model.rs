//! Доменные модели: запись отчёта, классифицированная запись, строка журнала.

use chrono::{DateTime, FixedOffset, NaiveDate};
use rust_decimal::Decimal;

/// Одна выплата из отчёта NiceHash.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedRecord {
    pub timestamp: DateTime<FixedOffset>,
    pub amount: Decimal,
}

impl ParsedRecord {
    /// Календарная дата в собственном смещении записи.
    pub fn date(&self) -> NaiveDate {
        self.timestamp.date_naive()
    }
}

/// Поток: доходы или расходы.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stream {
    Income,
    Expense,
}

/// Запись после округления. `magnitude` всегда целое и строго положительное.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassifiedRecord {
    pub stream: Stream,
    pub date: NaiveDate,
    pub magnitude: Decimal,
}

/// Строка журнала для импорта в бухгалтерию (восемь колонок).
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct LedgerRow {
    pub occurred_on: String,
    pub kind: &'static str,
    pub account: &'static str,
    pub amount: String,
    pub tax_category: &'static str,
    pub settled_on: String,
    pub settlement_account: &'static str,
    pub settlement_amount: String,
}
