//! Весь конвейер: отчёт -> классификация -> дневные итоги -> журнал.

use crate::{
    aggregate::aggregate,
    classify::classify,
    error::Result,
    formats::{ledger_csv::LedgerCsv, report::NiceHashReport},
    ledger::emit,
    traits::{ReadReport, WriteLedger},
};
use std::io::{BufRead, Write};
use tracing::{debug, info};

/// Итоги прогона, пишутся в лог.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub records: usize,
    pub dropped: usize,
    pub income_rows: usize,
    pub expense_rows: usize,
}

/// Читает весь отчёт из `r` и пишет журнал в `w`.
///
/// Журнал строится целиком в памяти; при ошибке разбора в `w` не попадает ни байта.
pub fn convert<R: BufRead, W: Write>(r: R, w: W) -> Result<Summary> {
    let records = NiceHashReport::read(r)?;
    let classified = classify(&records);
    debug!(
        income = classified.income.len(),
        expense = classified.expense.len(),
        dropped = classified.dropped,
        "records classified"
    );

    let income = aggregate(&classified.income)?;
    let expense = aggregate(&classified.expense)?;
    let rows = emit(&income, &expense);

    LedgerCsv::write(w, &rows)?;

    let summary = Summary {
        records: records.len(),
        dropped: classified.dropped,
        income_rows: income.len(),
        expense_rows: expense.len(),
    };
    info!(
        records = summary.records,
        dropped = summary.dropped,
        income_rows = summary.income_rows,
        expense_rows = summary.expense_rows,
        "ledger written"
    );
    Ok(summary)
}
