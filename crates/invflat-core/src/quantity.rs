//! Quantity normalization for line items.

use invflat_model::Quantity;

/// Known textual quantity synonyms. Exact match only; no general
/// text-to-number parsing is attempted.
const QUANTITY_SYNONYMS: [(&str, f64); 2] = [("ten", 10.0), ("five", 5.0)];

/// Produce a normalized copy of a quantity, resolving known textual
/// synonyms to their numeric value. Unknown text is returned unchanged
/// and flows into arithmetic as an undefined operand.
pub fn normalize_quantity(quantity: &Quantity) -> Quantity {
    match quantity {
        Quantity::Text(text) => QUANTITY_SYNONYMS
            .iter()
            .find(|(synonym, _)| synonym == text)
            .map_or_else(|| quantity.clone(), |(_, count)| Quantity::Count(*count)),
        Quantity::Count(_) => quantity.clone(),
    }
}
