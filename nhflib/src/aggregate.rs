//! Суммирование по календарным дням. Ключ — дата в смещении самой записи.

use crate::{
    error::{NhfError, Result},
    model::ClassifiedRecord,
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::collections::BTreeMap;

/// Дневные итоги одного потока. Обход идёт по возрастанию даты.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct DayTotals {
    days: BTreeMap<NaiveDate, Decimal>,
}

impl DayTotals {
    /// Переполнение `Decimal` — фатальная ошибка, итог дня не меняется.
    pub fn add(&mut self, date: NaiveDate, magnitude: Decimal) -> Result<()> {
        let total = self.days.entry(date).or_insert(Decimal::ZERO);
        *total = total
            .checked_add(magnitude)
            .ok_or(NhfError::Overflow { date })?;
        Ok(())
    }

    pub fn get(&self, date: NaiveDate) -> Option<Decimal> {
        self.days.get(&date).copied()
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (NaiveDate, Decimal)> + '_ {
        self.days.iter().map(|(d, t)| (*d, *t))
    }
}

pub fn aggregate(records: &[ClassifiedRecord]) -> Result<DayTotals> {
    records.iter().try_fold(DayTotals::default(), |mut totals, rec| {
        totals.add(rec.date, rec.magnitude)?;
        Ok(totals)
    })
}
