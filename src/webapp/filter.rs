use std::collections::BTreeSet;

pub const AMENITIES: &[&str] = &[
    "parking",
    "wifi",
    "cafe",
    "restaurant",
    "outdoor",
    "water",
    "exercise",
    "grooming",
];

pub const PET_SIZES: &[&str] = &["SMALL", "MEDIUM", "LARGE"];

/// The filter dialog's selection: three independent tag sets, rebuilt
/// each time the dialog opens. Nothing downstream enforces them yet.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FilterState {
    pub amenities: BTreeSet<String>,
    pub pet_sizes: BTreeSet<String>,
    pub place_types: BTreeSet<String>,
}

impl FilterState {
    pub fn new() -> Self {
        FilterState::default()
    }

    pub fn toggle_amenity(&mut self, id: &str) {
        toggle(&mut self.amenities, id);
    }

    pub fn toggle_pet_size(&mut self, id: &str) {
        toggle(&mut self.pet_sizes, id);
    }

    pub fn toggle_place_type(&mut self, id: &str) {
        toggle(&mut self.place_types, id);
    }

    pub fn reset(&mut self) {
        self.amenities.clear();
        self.pet_sizes.clear();
        self.place_types.clear();
    }

    /// Snapshot handed to the caller when the dialog is applied.
    pub fn apply(&self) -> FilterState {
        self.clone()
    }

    pub fn is_empty(&self) -> bool {
        self.amenities.is_empty() && self.pet_sizes.is_empty() && self.place_types.is_empty()
    }
}

fn toggle(set: &mut BTreeSet<String>, id: &str) {
    if !set.remove(id) {
        set.insert(id.to_string());
    }
}
