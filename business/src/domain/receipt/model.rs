use serde_json::{Value, json};

use super::value_objects::ReceiptImage;
use crate::domain::shared::date::ParsedDate;
use crate::domain::shared::value_objects::EntityId;

/// Upload of a receipt picture to be read by OCR on the server.
#[derive(Debug, Clone, PartialEq)]
pub struct ReceiptRequest {
    id: EntityId,
    pub image: Option<ReceiptImage>,
    pub name: String,
}

impl ReceiptRequest {
    pub fn new(image: Option<ReceiptImage>, name: String) -> Self {
        Self {
            id: EntityId::generate(),
            image,
            name,
        }
    }

    pub fn id(&self) -> &EntityId {
        &self.id
    }

    pub fn to_body(&self) -> String {
        json!({
            "name": self.name,
            "image": self.image,
        })
        .to_string()
    }
}

/// Manually entered receipt: just the shop and the amount paid.
#[derive(Debug, Clone, PartialEq)]
pub struct SimpleReceiptRequest {
    id: EntityId,
    pub site: String,
    pub total: f64,
    /// `None` when the payment method is unknown.
    pub cash: Option<bool>,
    pub category: Option<String>,
}

impl SimpleReceiptRequest {
    pub fn new(site: String, total: f64, cash: Option<bool>, category: Option<String>) -> Self {
        Self {
            id: EntityId::generate(),
            site,
            total,
            cash,
            category,
        }
    }

    pub fn id(&self) -> &EntityId {
        &self.id
    }

    pub fn to_body(&self) -> String {
        json!({
            "site": self.site,
            "total": self.total,
            "cash": self.cash,
            "category": self.category,
        })
        .to_string()
    }
}

/// One line of a parsed receipt.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    pub id: EntityId,
    pub name: String,
    pub amount: f64,
    pub total: f64,
}

impl Line {
    pub fn new(id: EntityId, name: String, amount: f64, total: f64) -> Self {
        Self {
            id,
            name,
            amount,
            total,
        }
    }

    /// Shape of the line inside a receipt update; the amount is not sent.
    pub fn to_body_entry(&self) -> Value {
        json!({
            "id": self.id,
            "name": self.name,
            "total": self.total,
        })
    }
}

/// Price paid for a named line at a given site, used for price history.
#[derive(Debug, Clone, PartialEq)]
pub struct LinePrice {
    pub id: EntityId,
    pub name: String,
    pub site: String,
    pub total: f64,
    pub created: ParsedDate,
}

impl LinePrice {
    pub fn new(id: EntityId, name: String, site: String, total: f64, created: &str) -> Self {
        Self {
            id,
            name,
            site,
            total,
            created: ParsedDate::parse(created),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Receipt {
    pub id: EntityId,
    /// Raw OCR text.
    pub text: String,
    pub site: String,
    pub total: f64,
    pub lines: Vec<Line>,
    pub created: ParsedDate,
    pub cash: Option<bool>,
    pub line_number: u32,
    pub category: Option<String>,
}

impl Receipt {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: EntityId,
        text: String,
        site: String,
        total: f64,
        lines: Vec<Line>,
        created: &str,
        cash: Option<bool>,
        line_number: u32,
        category: Option<String>,
    ) -> Self {
        Self {
            id,
            text,
            site,
            total,
            lines,
            created: ParsedDate::parse(created),
            cash,
            line_number,
            category,
        }
    }

    /// Serializes the body of a receipt update. `created` and `line_number`
    /// are server-owned and not sent.
    pub fn to_body(&self) -> String {
        let lines: Vec<Value> = self.lines.iter().map(Line::to_body_entry).collect();

        json!({
            "id": self.id,
            "site": self.site,
            "text": self.text,
            "total": self.total,
            "cash": self.cash,
            "category": self.category,
            "lines": lines,
        })
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn parse(body: &str) -> Value {
        serde_json::from_str(body).unwrap()
    }

    fn receipt_with(lines: Vec<Line>) -> Receipt {
        Receipt::new(
            EntityId::new("receipt-1"),
            "MERCADONA\nLECHE 3,50".to_string(),
            "Mercadona".to_string(),
            3.5,
            lines,
            "2024-01-15T10:00:00Z",
            Some(true),
            1,
            Some("groceries".to_string()),
        )
    }

    #[test]
    fn should_serialize_receipt_request_with_image() {
        let request = ReceiptRequest::new(
            Some(ReceiptImage::Text("data:image/png;base64,AAAA".to_string())),
            "ticket".to_string(),
        );

        assert_eq!(
            parse(&request.to_body()),
            json!({"name": "ticket", "image": "data:image/png;base64,AAAA"})
        );
    }

    #[test]
    fn should_send_null_image_when_absent() {
        let request = ReceiptRequest::new(None, "ticket".to_string());

        assert_eq!(
            parse(&request.to_body()),
            json!({"name": "ticket", "image": null})
        );
    }

    #[test]
    fn should_serialize_simple_receipt() {
        let request = SimpleReceiptRequest::new(
            "Bakery".to_string(),
            4.25,
            Some(false),
            Some("food".to_string()),
        );

        assert_eq!(
            parse(&request.to_body()),
            json!({"site": "Bakery", "total": 4.25, "cash": false, "category": "food"})
        );
    }

    #[test]
    fn should_send_null_when_payment_method_unknown() {
        let request = SimpleReceiptRequest::new("Bakery".to_string(), 4.25, None, None);

        let body = parse(&request.to_body());

        assert_eq!(body["cash"], Value::Null);
        assert_eq!(body["category"], Value::Null);
        assert_eq!(body.as_object().unwrap().len(), 4);
    }

    #[test]
    fn should_generate_distinct_ids_for_receipt_requests() {
        let first = ReceiptRequest::new(None, "a".to_string());
        let second = ReceiptRequest::new(None, "a".to_string());
        let simple = SimpleReceiptRequest::new("a".to_string(), 1.0, None, None);

        assert_ne!(first.id(), second.id());
        assert_ne!(first.id(), simple.id());
    }

    #[test]
    fn should_drop_amount_from_lines() {
        let receipt = receipt_with(vec![Line::new(
            EntityId::new("1"),
            "milk".to_string(),
            2.0,
            3.5,
        )]);

        let body = parse(&receipt.to_body());

        assert_eq!(body["lines"], json!([{"id": "1", "name": "milk", "total": 3.5}]));
    }

    #[test]
    fn should_serialize_receipt_key_set() {
        let receipt = receipt_with(vec![]);

        assert_eq!(
            parse(&receipt.to_body()),
            json!({
                "id": "receipt-1",
                "site": "Mercadona",
                "text": "MERCADONA\nLECHE 3,50",
                "total": 3.5,
                "cash": true,
                "category": "groceries",
                "lines": [],
            })
        );
    }

    #[test]
    fn should_parse_created_date() {
        let receipt = receipt_with(vec![]);

        assert_eq!(
            receipt.created.value(),
            Some(Utc.with_ymd_and_hms(2024, 1, 15, 10, 0, 0).unwrap())
        );
    }

    #[test]
    fn should_keep_unknown_cash_state() {
        let mut receipt = receipt_with(vec![]);
        receipt.cash = None;

        assert_eq!(parse(&receipt.to_body())["cash"], Value::Null);
    }

    #[test]
    fn should_build_line_price_with_invalid_date() {
        let price = LinePrice::new(
            EntityId::new("p-1"),
            "milk".to_string(),
            "Mercadona".to_string(),
            1.15,
            "31/12/2023",
        );

        assert!(!price.created.is_valid());
        assert_eq!(price.total, 1.15);
    }
}
