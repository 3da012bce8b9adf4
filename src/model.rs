//! Wire records for the delivery domain.
//!
//! # Purpose
//! Defines the upstream catalog records (users, restaurants, foods) and the
//! locally owned order record. Field names are the upstream wire names;
//! upstream values are carried as-is and never validated or normalized.
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub avatar: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq)]
pub struct Restaurant {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub image: String,
    pub category: String,
    pub rating: f64,
    /// Display string on the wire, e.g. "30-40 min".
    pub delivery_time: String,
    pub delivery_fee: f64,
    pub address: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq)]
pub struct Food {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub image: String,
    pub price: f64,
    pub category: String,
    pub tags: Vec<String>,
    pub restaurant_id: i64,
    pub available: bool,
}

/// A locally owned order. `status` is a free-form display string and
/// `created_at` is a preformatted "HH:MM" string, both passed through
/// unchanged to clients.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq)]
pub struct Order {
    pub id: i64,
    pub user_id: i64,
    pub items: Vec<Food>,
    pub total: f64,
    pub status: String,
    pub created_at: String,
    pub customer_name: String,
}
