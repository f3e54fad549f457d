use serde_json::json;

use crate::domain::shared::value_objects::EntityId;

/// An item as confirmed by the server, part of a shopping list.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub id: EntityId,
    pub name: String,
    pub amount: f64,
    pub unit: String,
    pub brand: String,
    pub status: String,
}

impl Item {
    pub fn new(
        id: EntityId,
        name: String,
        amount: f64,
        unit: String,
        brand: String,
        status: String,
    ) -> Self {
        Self {
            id,
            name,
            amount,
            unit,
            brand,
            status,
        }
    }
}

/// Payload for adding an item to a shopping list.
///
/// Fields are forwarded as typed by the user; validation belongs to the form layer.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemRequest {
    id: EntityId,
    pub name: String,
    pub unit: Option<String>,
    pub amount: f64,
    pub brand: Option<String>,
    pub list: EntityId,
}

impl ItemRequest {
    pub fn new(
        name: String,
        unit: Option<String>,
        amount: f64,
        brand: Option<String>,
        list: EntityId,
    ) -> Self {
        Self {
            id: EntityId::generate(),
            name,
            unit,
            amount,
            brand,
            list,
        }
    }

    pub fn id(&self) -> &EntityId {
        &self.id
    }

    /// Serializes the body sent on item creation. The owning list goes out as
    /// `shoppingListId` and the local id is not sent.
    pub fn to_body(&self) -> String {
        json!({
            "name": self.name,
            "unit": self.unit,
            "amount": self.amount,
            "brand": self.brand,
            "shoppingListId": self.list,
        })
        .to_string()
    }
}
