use rust_decimal::Decimal;
use serde_json::json;

use super::fixtures::*;
use crate::models::{ClientDetail, ClientId, ClientRow};

#[test]
fn test_detail_tolerates_missing_and_null_fields() {
    let detail = detail_from(json!({ "name": "Acme", "email": null, "extra": { "ignored": true } }));
    assert_eq!(detail.name.as_deref(), Some("Acme"));
    assert_eq!(detail.email, None);
    assert_eq!(detail.total_paid, None);
    assert!(detail.invoices().is_empty());
    assert!(detail.payments().is_empty());
}

#[test]
fn test_money_accepts_numbers_and_strings() {
    let detail = acme_detail();
    assert_eq!(detail.total_invoiced, Some(Decimal::from(15000)));
    assert_eq!(detail.total_paid, Some(Decimal::new(95005, 1)));
    assert_eq!(detail.outstanding, Some(Decimal::new(549950, 2)));
}

#[test]
fn test_invoices_prefer_full_list_over_recent() {
    let detail = detail_from(json!({
        "all_invoices": [{ "invoice_no": "A-1" }],
        "recent_invoices": [{ "invoice_no": "R-1" }, { "invoice_no": "R-2" }]
    }));
    let numbers: Vec<_> = detail.invoices().iter().map(|i| i.invoice_no.clone()).collect();
    assert_eq!(numbers, vec![Some("A-1".to_string())]);
}

#[test]
fn test_invoices_fall_back_to_recent_shape() {
    let detail = detail_from(json!({
        "recent_invoices": [
            { "invoice_no": "R-1", "description": "No description", "amount": 10, "status": "pending" },
            { "invoice_number": "R-2", "amount": 20, "status": "paid" }
        ]
    }));
    let invoices = detail.invoices();
    assert_eq!(invoices.len(), 2);
    assert_eq!(invoices[1].invoice_no.as_deref(), Some("R-2"));
}

#[test]
fn test_aliases_for_amount_columns() {
    let detail = detail_from(json!({
        "all_invoices": [{ "paid_amount": 5, "remaining_amount": 7 }],
        "all_payments": [{ "payment_date": "2024-01-02", "invoice_number": "X" }]
    }));
    assert_eq!(detail.invoices()[0].paid, Some(Decimal::from(5)));
    assert_eq!(detail.invoices()[0].remaining, Some(Decimal::from(7)));
    assert_eq!(detail.payments()[0].date.as_deref(), Some("2024-01-02"));
    assert_eq!(detail.payments()[0].invoice_no.as_deref(), Some("X"));
}

#[test]
fn test_installment_detection_is_case_insensitive_substring() {
    let detail = acme_detail();
    let invoices = detail.invoices();
    assert!(!invoices[0].is_installment());
    assert!(invoices[1].is_installment());
    assert!(!invoices[2].is_installment());

    let monthly = detail_from(json!({ "all_invoices": [{ "payment_type": "Monthly-INSTALLMENTS" }] }));
    assert!(monthly.invoices()[0].is_installment());
}

#[test]
fn test_from_json_reports_parse_failures() {
    assert!(ClientDetail::from_json("<html>Login</html>").unwrap_err().is_parse());
    assert!(ClientDetail::from_json("[1, 2]").unwrap_err().is_parse());
    assert!(ClientDetail::from_json("{\"total_paid\": \"lots\"}").unwrap_err().is_parse());
    assert!(ClientDetail::from_json("[]").unwrap_err().is_parse());
    assert!(ClientDetail::from_json("null").unwrap_err().is_parse());
    assert!(ClientDetail::from_json("\"Acme\"").unwrap_err().is_parse());
    assert!(ClientDetail::from_json("42").unwrap_err().is_parse());
    assert!(ClientDetail::from_json("{}").is_ok());
}

#[test]
fn test_numeric_text_fields_are_accepted() {
    let detail = ClientDetail::from_json(
        r#"{
            "phone": 9171234567,
            "tax_id": 123456789,
            "all_invoices": [{ "invoice_no": 1001, "amount": 10 }],
            "all_payments": [{ "invoice_no": 1001, "method": "cash" }]
        }"#,
    )
    .expect("numeric text should decode");
    assert_eq!(detail.phone.as_deref(), Some("9171234567"));
    assert_eq!(detail.tax_id.as_deref(), Some("123456789"));
    assert_eq!(detail.invoices()[0].invoice_no.as_deref(), Some("1001"));
    assert_eq!(detail.payments()[0].invoice_no.as_deref(), Some("1001"));
}

#[test]
fn test_counts_accept_numeric_strings() {
    let detail = ClientDetail::from_json(
        r#"{
            "invoice_count": "3",
            "all_invoices": [{ "payment_type": "installment", "installments": "4", "installments_paid": " 1 " }],
            "all_payments": [{ "installment_number": "2" }]
        }"#,
    )
    .expect("string counts should decode");
    assert_eq!(detail.invoice_count, Some(3));
    assert_eq!(detail.invoices()[0].installments, Some(4));
    assert_eq!(detail.invoices()[0].installments_paid, Some(1));
    assert_eq!(detail.payments()[0].installment_number, Some(2));
}

#[test]
fn test_unusable_counts_read_as_absent() {
    let detail = detail_from(json!({
        "invoice_count": "three",
        "all_invoices": [
            { "installments": -2 },
            { "installments": 2.5 },
            { "installments": 4.0 },
            { "installments": 5_000_000_000u64 }
        ]
    }));
    assert_eq!(detail.invoice_count, None);
    let counts: Vec<_> = detail.invoices().iter().map(|i| i.installments).collect();
    assert_eq!(counts, vec![None, None, Some(4), None]);
}

#[test]
fn test_client_id_from_string_or_number() {
    let rows = client_rows();
    assert_eq!(rows[0].id, ClientId::from(1u64));
    assert_eq!(rows[1].id.as_str(), "2");
    assert_eq!(ClientId::from(-4i64).to_string(), "-4");
    assert!(ClientId::from("  ").is_empty());
}

#[test]
fn test_row_without_name_still_decodes() {
    let rows: Vec<ClientRow> = serde_json::from_value(json!([
        { "id": 7, "name": null, "email": "ops@example.ph" },
        { "id": 8, "phone": 9171234567u64 }
    ]))
    .expect("rows without names should decode");
    assert_eq!(rows[0].name, None);
    assert_eq!(rows[0].full_text(), "ops@example.ph");
    assert_eq!(rows[1].phone.as_deref(), Some("9171234567"));
}

#[test]
fn test_row_full_text_joins_present_cells() {
    let rows = client_rows();
    assert_eq!(rows[2].full_text(), "Cruz & Sons Cruz Hardware");
}
