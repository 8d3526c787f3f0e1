//! nhflib — перевод отчёта о майнинге NiceHash в CSV-журнал для бухгалтерии.

pub mod aggregate;
pub mod classify;
pub mod convert;
pub mod error;
pub mod ledger;
pub mod model;
pub mod traits;

pub mod formats {
    pub mod ledger_csv;
    pub mod report;
}
