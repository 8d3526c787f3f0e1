//! Журнал в CSV (UTF-8): японский заголовок, затем по строке на день и поток.

use crate::{error::Result, ledger::LEDGER_HEADER, model::LedgerRow};
use csv::WriterBuilder;
use std::io::Write;

pub struct LedgerCsv;

impl crate::traits::WriteLedger for LedgerCsv {
    fn write<W: Write>(mut w: W, rows: &[LedgerRow]) -> Result<()> {
        let mut wrt = WriterBuilder::new().has_headers(false).from_writer(&mut w);

        wrt.write_record(LEDGER_HEADER)?;
        for row in rows {
            wrt.serialize(row)?;
        }
        wrt.flush()?;
        Ok(())
    }
}
