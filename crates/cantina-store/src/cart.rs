//! Per-user shopping cart store.
//!
//! A concurrent key-value map with per-key atomicity: each user's cart is
//! mutated under its own map entry, so independent users never contend.

use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

/// One line of a cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    /// Product identifier.
    pub product_id: Uuid,
    /// Quantity; always at least 1.
    pub quantity: u32,
}

/// In-memory cart storage keyed by user id.
#[derive(Debug, Default)]
pub struct CartStore {
    carts: DashMap<Uuid, HashMap<Uuid, u32>>,
}

impl CartStore {
    /// Create an empty cart store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a quantity of a product to the user's cart, summing with any
    /// existing line.
    pub fn add_item(&self, user_id: Uuid, product_id: Uuid, quantity: u32) {
        if quantity == 0 {
            return;
        }
        let mut cart = self.carts.entry(user_id).or_default();
        *cart.entry(product_id).or_insert(0) += quantity;
    }

    /// Replace the quantity of a cart line. Quantities below 1 are ignored.
    pub fn set_quantity(&self, user_id: Uuid, product_id: Uuid, quantity: u32) {
        if quantity == 0 {
            return;
        }
        if let Some(mut cart) = self.carts.get_mut(&user_id) {
            if cart.contains_key(&product_id) {
                cart.insert(product_id, quantity);
            }
        }
    }

    /// Remove a product from the user's cart.
    pub fn remove_item(&self, user_id: Uuid, product_id: Uuid) {
        if let Some(mut cart) = self.carts.get_mut(&user_id) {
            cart.remove(&product_id);
        }
    }

    /// Return the user's cart lines.
    pub fn items(&self, user_id: Uuid) -> Vec<CartItem> {
        self.carts
            .get(&user_id)
            .map(|cart| {
                cart.iter()
                    .map(|(product_id, quantity)| CartItem {
                        product_id: *product_id,
                        quantity: *quantity,
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Drop the user's cart entirely (after checkout or logout).
    pub fn clear(&self, user_id: Uuid) {
        self.carts.remove(&user_id);
    }
}
