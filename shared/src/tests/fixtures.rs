use serde_json::{Value, json};

use crate::models::{ClientDetail, ClientRow};

pub fn detail_from(value: Value) -> ClientDetail {
    serde_json::from_value(value).expect("fixture should deserialize")
}

pub fn acme_detail_json() -> Value {
    json!({
        "name": "Acme",
        "company": "Acme Trading Corp.",
        "email": "billing@acme.ph",
        "phone": "+63 2 8123 4567",
        "tax_id": "123-456-789-000",
        "address": "12 Ayala Ave, Makati",
        "total_invoiced": 15000,
        "total_paid": 9500.5,
        "outstanding": "5499.50",
        "invoice_count": 3,
        "all_invoices": [
            {
                "invoice_no": "INV-0001",
                "due_date": "2024-05-01",
                "description": "Bookkeeping, April",
                "amount": 5000,
                "paid": 5000,
                "remaining": 0,
                "status": "paid",
                "payment_type": "full"
            },
            {
                "invoice_no": "INV-0002",
                "due_date": "2024-06-01T00:00:00",
                "description": null,
                "amount": 8000,
                "paid": 4000,
                "status": "Partial",
                "payment_type": "Installment",
                "installments": 4,
                "installments_paid": 2
            },
            {
                "invoice_no": "INV-0003",
                "amount": 2000,
                "paid": 500.5,
                "remaining": 1499.5,
                "status": "overdue"
            }
        ],
        "all_payments": [
            {
                "date": "2024-05-03",
                "invoice_no": "INV-0001",
                "method": "Bank Transfer",
                "amount": 5000,
                "status": "paid"
            },
            {
                "date": "2024-06-02",
                "invoice_no": "INV-0002",
                "method": "GCash",
                "amount": 2000,
                "installment_number": 1
            }
        ]
    })
}

pub fn acme_detail() -> ClientDetail {
    detail_from(acme_detail_json())
}

pub fn client_rows() -> Vec<ClientRow> {
    serde_json::from_value(json!([
        {
            "id": 1,
            "name": "Acme",
            "email": "billing@acme.ph",
            "company": "Acme Trading Corp.",
            "phone": "+63 2 8123 4567",
            "address": "Makati"
        },
        {
            "id": "2",
            "name": "Bayanihan Foods",
            "email": "accounts@bayanihan.ph",
            "company": null,
            "tax_id": "987-654-321-000",
            "details_url": "/client/2/details?full=1"
        },
        {
            "id": 3,
            "name": "Cruz & Sons",
            "company": "Cruz Hardware"
        }
    ]))
    .expect("rows should deserialize")
}
