//! Строки журнала для импорта: фиксированные колонки и значения.

use crate::{
    aggregate::DayTotals,
    model::{LedgerRow, Stream},
};
use chrono::NaiveDate;
use rust_decimal::Decimal;

pub const LEDGER_HEADER: [&str; 8] = [
    "発生日",
    "収支区分",
    "勘定科目",
    "金額",
    "税区分",
    "決済日",
    "決済口座",
    "決済金額",
];

pub const SETTLEMENT_ACCOUNT: &str = "NiceHashMining";

/// Постоянные значения колонок для одного потока.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Labels {
    pub kind: &'static str,
    pub account: &'static str,
    pub tax_category: &'static str,
}

pub const INCOME: Labels = Labels {
    kind: "収入",
    account: "売上高",
    tax_category: "非課売上",
};

pub const EXPENSE: Labels = Labels {
    kind: "支出",
    account: "支払手数料",
    tax_category: "非課仕入",
};

impl Stream {
    pub fn labels(self) -> Labels {
        match self {
            Stream::Income => INCOME,
            Stream::Expense => EXPENSE,
        }
    }
}

pub fn ledger_row(stream: Stream, date: NaiveDate, total: Decimal) -> LedgerRow {
    let labels = stream.labels();
    let day = date.format("%Y-%m-%d").to_string();
    // итоги целые, normalize убирает хвост вида ".0"
    let amount = total.abs().normalize().to_string();
    LedgerRow {
        occurred_on: day.clone(),
        kind: labels.kind,
        account: labels.account,
        amount: amount.clone(),
        tax_category: labels.tax_category,
        settled_on: day,
        settlement_account: SETTLEMENT_ACCOUNT,
        settlement_amount: amount,
    }
}

/// Сначала все доходы, затем все расходы.
pub fn emit(income: &DayTotals, expense: &DayTotals) -> Vec<LedgerRow> {
    income
        .iter()
        .map(|(date, total)| ledger_row(Stream::Income, date, total))
        .chain(
            expense
                .iter()
                .map(|(date, total)| ledger_row(Stream::Expense, date, total)),
        )
        .collect()
}
