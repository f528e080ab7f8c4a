//! # Meal Building
//!
//! Size-dependent selection rules for composing a meal.
//!
//! - Bowl: 1 side + 1 entree
//! - Plate: 1 side + 2 entrees
//! - Bigger plate: 2 sides + 3 entrees
//!
//! Slots fill front to back (side1 before side2, entree1 before entree2
//! before entree3). Selecting an item that already occupies a slot removes
//! it and shifts later picks forward, so fill order always holds. A pick in
//! a full category is rejected outright.
use serde::{Deserialize, Serialize};

use crate::models::{ItemType, MenuItem};

/// Flat upcharge added per premium selection
pub const PREMIUM_UPCHARGE: f64 = 1.50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MealSize {
    Bowl,
    Plate,
    BiggerPlate,
}

impl MealSize {
    pub fn required_sides(&self) -> usize {
        match self {
            MealSize::Bowl => 1,
            MealSize::Plate => 1,
            MealSize::BiggerPlate => 2,
        }
    }

    pub fn required_entrees(&self) -> usize {
        match self {
            MealSize::Bowl => 1,
            MealSize::Plate => 2,
            MealSize::BiggerPlate => 3,
        }
    }

    pub fn total_slots(&self) -> usize {
        self.required_sides() + self.required_entrees()
    }

    pub fn base_price(&self) -> f64 {
        match self {
            MealSize::Bowl => 8.30,
            MealSize::Plate => 9.80,
            MealSize::BiggerPlate => 11.30,
        }
    }
}

/// What happened to a single pick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Added,
    Removed,
    Rejected,
}

#[derive(Debug, Clone)]
pub struct MealBuilder {
    size: MealSize,
    sides: Vec<MenuItem>,
    entrees: Vec<MenuItem>,
}

impl MealBuilder {
    pub fn new(size: MealSize) -> Self {
        Self {
            size,
            sides: Vec::with_capacity(size.required_sides()),
            entrees: Vec::with_capacity(size.required_entrees()),
        }
    }

    pub fn size(&self) -> MealSize {
        self.size
    }

    pub fn sides(&self) -> &[MenuItem] {
        &self.sides
    }

    pub fn entrees(&self) -> &[MenuItem] {
        &self.entrees
    }

    /// Toggle an item: next open slot of its category, or out of the slot
    /// it already holds.
    pub fn select(&mut self, item: &MenuItem) -> Selection {
        let quota = match item.item_type {
            ItemType::Side => self.size.required_sides(),
            ItemType::Entree => self.size.required_entrees(),
        };
        let slots = match item.item_type {
            ItemType::Side => &mut self.sides,
            ItemType::Entree => &mut self.entrees,
        };

        if let Some(position) = slots.iter().position(|held| held.id == item.id) {
            slots.remove(position);
            return Selection::Removed;
        }

        if slots.len() >= quota {
            return Selection::Rejected;
        }

        slots.push(item.clone());
        Selection::Added
    }

    /// False only when the item's category is full and the item holds none
    /// of its slots.
    pub fn can_select(&self, item: &MenuItem) -> bool {
        let (slots, quota) = match item.item_type {
            ItemType::Side => (&self.sides, self.size.required_sides()),
            ItemType::Entree => (&self.entrees, self.size.required_entrees()),
        };

        slots.len() < quota || slots.iter().any(|held| held.id == item.id)
    }

    pub fn filled(&self) -> usize {
        self.sides.len() + self.entrees.len()
    }

    pub fn progress(&self) -> f32 {
        self.filled() as f32 / self.size.total_slots() as f32 * 100.0
    }

    /// Submission gate, true only at 100% progress
    pub fn is_complete(&self) -> bool {
        self.filled() == self.size.total_slots()
    }

    pub fn price(&self) -> f64 {
        let premiums = self
            .sides
            .iter()
            .chain(self.entrees.iter())
            .filter(|item| item.premium)
            .count();

        self.size.base_price() + premiums as f64 * PREMIUM_UPCHARGE
    }
}
