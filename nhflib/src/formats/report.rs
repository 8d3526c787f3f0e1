//! Отчёт NiceHash в CSV. Первая строка — заголовок, он пропускается целиком.
//! Используются только две колонки: время выплаты (индекс 1) и сумма в фиате (индекс 5).
//! Остальные колонки игнорируются, их может быть сколько угодно.

use crate::{
    error::{NhfError, Result},
    model::ParsedRecord,
};
use chrono::{DateTime, FixedOffset, NaiveDateTime};
use csv::ReaderBuilder;
use regex::Regex;
use rust_decimal::Decimal;
use std::io::BufRead;
use tracing::debug;

pub const TIMESTAMP_COLUMN: usize = 1;
pub const AMOUNT_COLUMN: usize = 5;

/// Разбор времени вида `2023-01-01 09:00:00 JST+0900`.
///
/// Отчёт пишет смещение как `+09:00`; перед разбором первое вхождение
/// заменяется на `+0900`. Аббревиатура зоны — 3–5 заглавных латинских букв,
/// дальше она не проверяется, решает числовое смещение.
pub struct TimestampFormat {
    re: Regex,
}

impl TimestampFormat {
    pub fn new() -> Result<Self> {
        let re = Regex::new(
            r"^(?P<dt>[0-9]{4}-[0-9]{2}-[0-9]{2} [0-9]{2}:[0-9]{2}:[0-9]{2}) (?P<zone>[A-Z]{3,5})(?P<sign>[+-])(?P<hh>[0-9]{2})(?P<mm>[0-9]{2})$",
        )?;
        Ok(Self { re })
    }

    pub fn parse(&self, raw: &str) -> std::result::Result<DateTime<FixedOffset>, String> {
        let normalized = raw.trim().replacen("+09:00", "+0900", 1);
        let caps = self
            .re
            .captures(&normalized)
            .ok_or_else(|| "expected YYYY-MM-DD HH:MM:SS ZONE±HHMM".to_string())?;

        let naive = NaiveDateTime::parse_from_str(&caps["dt"], "%Y-%m-%d %H:%M:%S")
            .map_err(|e| e.to_string())?;

        let hh: i32 = caps["hh"].parse().map_err(|_| "bad offset hours".to_string())?;
        let mm: i32 = caps["mm"].parse().map_err(|_| "bad offset minutes".to_string())?;
        if mm >= 60 {
            return Err(format!("offset minutes out of range: {mm}"));
        }
        let secs = (hh * 3600 + mm * 60) * if &caps["sign"] == "-" { -1 } else { 1 };
        let offset = FixedOffset::east_opt(secs)
            .ok_or_else(|| format!("offset out of range: {}{hh:02}{mm:02}", &caps["sign"]))?;

        naive
            .and_local_timezone(offset)
            .single()
            .ok_or_else(|| "ambiguous local time".to_string())
    }
}

/// Разбирает одно поле времени. Для потока строк удобнее [`TimestampFormat`].
pub fn parse_timestamp(raw: &str) -> std::result::Result<DateTime<FixedOffset>, String> {
    TimestampFormat::new()
        .map_err(|e| e.to_string())?
        .parse(raw)
}

/// Десятичная сумма. Экспоненциальная запись (`1.5e2`) тоже принимается.
/// Разделители разрядов (`1_000`, `1,000`) считаются ошибкой.
pub fn parse_amount(raw: &str) -> std::result::Result<Decimal, String> {
    let s = raw.trim();
    if let Some(c) = s
        .chars()
        .find(|c| !c.is_ascii_digit() && !matches!(c, '.' | '+' | '-' | 'e' | 'E'))
    {
        return Err(format!("unexpected character {c:?}"));
    }
    let parsed = if s.contains(['e', 'E']) {
        Decimal::from_scientific(s)
    } else {
        s.parse::<Decimal>()
    };
    parsed.map_err(|e| e.to_string())
}

pub struct NiceHashReport;

impl crate::traits::ReadReport for NiceHashReport {
    fn read<R: BufRead>(r: R) -> Result<Vec<ParsedRecord>> {
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(r);
        let format = TimestampFormat::new()?;
        let mut records = Vec::new();

        for (idx, rec) in rdr.records().enumerate() {
            let rec = rec?;
            let row = idx + 1;

            let (Some(ts), Some(amount)) = (rec.get(TIMESTAMP_COLUMN), rec.get(AMOUNT_COLUMN)) else {
                return Err(NhfError::ShortRow { row, fields: rec.len() });
            };

            let timestamp = format.parse(ts).map_err(|reason| NhfError::Timestamp {
                row,
                value: ts.to_string(),
                reason,
            })?;
            let amount = parse_amount(amount).map_err(|reason| NhfError::Amount {
                row,
                value: amount.to_string(),
                reason,
            })?;

            records.push(ParsedRecord { timestamp, amount });
        }

        debug!(records = records.len(), "report parsed");
        Ok(records)
    }
}
