//! Разделение записей на доходы и расходы по знаку суммы.
//!
//! Округление несимметричное и всегда к нулю: доход — `floor`, расход — `ceil`.
//! Записи, у которых после округления осталось 0, отбрасываются.

use crate::model::{ClassifiedRecord, ParsedRecord, Stream};
use rust_decimal::Decimal;

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Classified {
    pub income: Vec<ClassifiedRecord>,
    pub expense: Vec<ClassifiedRecord>,
    /// Сколько записей съел фильтр нулей.
    pub dropped: usize,
}

/// Округлённый модуль суммы и поток, либо `None`, если округлилось в ноль.
pub fn round_toward_zero(amount: Decimal) -> Option<(Stream, Decimal)> {
    if amount >= Decimal::ZERO {
        let magnitude = amount.floor();
        (magnitude > Decimal::ZERO).then_some((Stream::Income, magnitude))
    } else {
        let rounded = amount.ceil();
        (rounded < Decimal::ZERO).then_some((Stream::Expense, -rounded))
    }
}

pub fn classify(records: &[ParsedRecord]) -> Classified {
    let mut out = Classified::default();

    for rec in records {
        let Some((stream, magnitude)) = round_toward_zero(rec.amount) else {
            out.dropped += 1;
            continue;
        };
        let classified = ClassifiedRecord {
            stream,
            date: rec.date(),
            magnitude,
        };
        match stream {
            Stream::Income => out.income.push(classified),
            Stream::Expense => out.expense.push(classified),
        }
    }

    out
}
