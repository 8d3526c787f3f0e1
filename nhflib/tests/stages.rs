use chrono::{DateTime, NaiveDate};
use nhflib::{
    aggregate::aggregate,
    classify::{classify, round_toward_zero},
    ledger::{emit, SETTLEMENT_ACCOUNT},
    model::{ParsedRecord, Stream},
};
use rust_decimal::Decimal;

fn rec(ts: &str, amount: &str) -> ParsedRecord {
    ParsedRecord {
        timestamp: DateTime::parse_from_str(ts, "%Y-%m-%d %H:%M:%S %z").unwrap(),
        amount: amount.parse().unwrap(),
    }
}

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn rounding_biases_toward_zero() {
    let cases = [
        ("1.7", Some((Stream::Income, "1"))),
        ("2.9", Some((Stream::Income, "2"))),
        ("0.5", None),
        ("0", None),
        ("-0.4", None),
        ("-5.2", Some((Stream::Expense, "5"))),
        ("-3", Some((Stream::Expense, "3"))),
        ("42", Some((Stream::Income, "42"))),
    ];
    for (raw, expected) in cases {
        let amount: Decimal = raw.parse().unwrap();
        let got = round_toward_zero(amount);
        let expected = expected.map(|(s, m)| (s, m.parse::<Decimal>().unwrap()));
        assert_eq!(got, expected, "amount {raw}");
        if let Some((_, m)) = got {
            assert!(m > Decimal::ZERO);
            assert!(m <= amount.abs());
        }
    }
}

#[test]
fn classifier_never_forwards_non_positive_magnitudes() {
    let recs = vec![
        rec("2023-01-01 10:00:00 +0900", "0.99"),
        rec("2023-01-01 11:00:00 +0900", "-0.99"),
        rec("2023-01-01 12:00:00 +0900", "7.01"),
        rec("2023-01-01 13:00:00 +0900", "-7.01"),
        rec("2023-01-01 14:00:00 +0900", "-0"),
    ];
    let c = classify(&recs);
    assert_eq!(c.dropped, 3);
    assert_eq!(c.income.len(), 1);
    assert_eq!(c.expense.len(), 1);
    assert!(c.income.iter().all(|r| r.stream == Stream::Income && r.magnitude > Decimal::ZERO));
    assert!(c.expense.iter().all(|r| r.stream == Stream::Expense && r.magnitude > Decimal::ZERO));

    // повторный вызов даёт то же самое
    assert_eq!(classify(&recs), c);
}

#[test]
fn aggregation_groups_by_local_date_and_ignores_order() {
    let mut recs = vec![
        rec("2023-01-01 23:30:00 +0900", "1.7"),
        rec("2023-01-01 00:05:00 +0900", "2.9"),
        // 2023-01-01 15:10 UTC, но по местному времени уже второе число
        rec("2023-01-02 00:10:00 +0900", "4.0"),
    ];
    let forward = aggregate(&classify(&recs).income).unwrap();
    recs.reverse();
    let backward = aggregate(&classify(&recs).income).unwrap();

    assert_eq!(forward, backward);
    assert_eq!(forward.len(), 2);
    assert_eq!(forward.get(day(2023, 1, 1)), Some(Decimal::new(3, 0)));
    assert_eq!(forward.get(day(2023, 1, 2)), Some(Decimal::new(4, 0)));
}

#[test]
fn streams_stay_separate_and_income_comes_first() {
    let recs = vec![
        rec("2023-01-02 10:00:00 +0900", "-5.2"),
        rec("2023-01-02 11:00:00 +0900", "-1.5"),
        rec("2023-01-02 12:00:00 +0900", "3.3"),
        rec("2023-01-01 12:00:00 +0900", "10.0"),
    ];
    let c = classify(&recs);
    let rows = emit(&aggregate(&c.income).unwrap(), &aggregate(&c.expense).unwrap());

    let kinds: Vec<_> = rows.iter().map(|r| (r.occurred_on.as_str(), r.kind, r.amount.as_str())).collect();
    assert_eq!(
        kinds,
        vec![
            ("2023-01-01", "収入", "10"),
            ("2023-01-02", "収入", "3"),
            ("2023-01-02", "支出", "6"),
        ]
    );

    let expense = &rows[2];
    assert_eq!(expense.account, "支払手数料");
    assert_eq!(expense.tax_category, "非課仕入");
    assert_eq!(expense.settled_on, expense.occurred_on);
    assert_eq!(expense.settlement_amount, expense.amount);
    assert_eq!(expense.settlement_account, SETTLEMENT_ACCOUNT);

    let income = &rows[0];
    assert_eq!(income.account, "売上高");
    assert_eq!(income.tax_category, "非課売上");
}

#[test]
fn day_total_overflow_keeps_previous_total() {
    let mut totals = nhflib::aggregate::DayTotals::default();
    totals.add(day(2023, 1, 1), Decimal::MAX).unwrap();
    assert!(totals.add(day(2023, 1, 1), Decimal::ONE).is_err());
    assert_eq!(totals.get(day(2023, 1, 1)), Some(Decimal::MAX));
    // другой день не задет
    totals.add(day(2023, 1, 2), Decimal::ONE).unwrap();
    assert_eq!(totals.len(), 2);
}
