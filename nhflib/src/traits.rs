//! Трэйты чтения отчёта и записи журнала на основе std::io::{BufRead, Write}.

use crate::{
    error::Result,
    model::{LedgerRow, ParsedRecord},
};
use std::io::{BufRead, Write};

pub trait ReadReport {
    fn read<R: BufRead>(r: R) -> Result<Vec<ParsedRecord>>;
}

pub trait WriteLedger {
    fn write<W: Write>(w: W, rows: &[LedgerRow]) -> Result<()>;
}
