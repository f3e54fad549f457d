use serde_json::json;

use crate::domain::item::model::Item;
use crate::domain::shared::date::ParsedDate;
use crate::domain::shared::value_objects::EntityId;

/// Summary row of a shopping list, as shown in overviews.
#[derive(Debug, Clone, PartialEq)]
pub struct List {
    pub id: EntityId,
    pub name: String,
    pub description: String,
    pub date: ParsedDate,
    pub status: String,
}

/// Payload for creating a shopping list.
#[derive(Debug, Clone, PartialEq)]
pub struct ListRequest {
    id: EntityId,
    pub name: String,
    pub description: String,
}

impl ListRequest {
    pub fn new(name: String, description: String) -> Self {
        Self {
            id: EntityId::generate(),
            name,
            description,
        }
    }

    pub fn id(&self) -> &EntityId {
        &self.id
    }

    pub fn to_body(&self) -> String {
        json!({
            "name": self.name,
            "description": self.description,
        })
        .to_string()
    }
}

/// A shopping list together with its items.
#[derive(Debug, Clone, PartialEq)]
pub struct FullList {
    pub id: EntityId,
    pub name: String,
    pub description: String,
    pub date: ParsedDate,
    pub items: Vec<Item>,
}

impl FullList {
    pub fn new(
        id: EntityId,
        name: String,
        description: String,
        date: &str,
        items: Vec<Item>,
    ) -> Self {
        Self {
            id,
            name,
            description,
            date: ParsedDate::parse(date),
            items,
        }
    }
}
