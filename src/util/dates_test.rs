use super::*;

#[test]
fn parses_valid_wire_dates() {
    assert_eq!(
        parse_wire_date("03-05-2025"),
        NaiveDate::from_ymd_opt(2025, 5, 3)
    );
    assert_eq!(
        parse_wire_date(" 29-02-2024 "),
        NaiveDate::from_ymd_opt(2024, 2, 29)
    );
}

#[test]
fn rejects_invalid_wire_dates() {
    assert_eq!(parse_wire_date(""), None);
    assert_eq!(parse_wire_date("2025-05-03"), None);
    assert_eq!(parse_wire_date("31-02-2025"), None);
    assert_eq!(parse_wire_date("not a date"), None);
}

#[test]
fn newest_first_orders_by_parsed_date() {
    let mut dates = vec!["01-01-2024", "15-06-2025", "28-02-2025"];
    newest_first(&mut dates, |raw| parse_wire_date(raw));
    assert_eq!(dates, vec!["15-06-2025", "28-02-2025", "01-01-2024"]);
}

#[test]
fn newest_first_sinks_unparseable_dates() {
    let mut dates = vec!["garbage", "15-06-2025", ""];
    newest_first(&mut dates, |raw| parse_wire_date(raw));
    assert_eq!(dates[0], "15-06-2025");
    assert!(parse_wire_date(dates[1]).is_none());
    assert!(parse_wire_date(dates[2]).is_none());
}
