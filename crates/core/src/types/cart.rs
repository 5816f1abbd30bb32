//! Cart line item types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{Price, ProductId};

/// One product line in the cart.
///
/// `quantity` is at least 1 for as long as the line exists; a line reduced to
/// zero units is removed from the cart rather than kept around empty. The
/// persisted cart is a JSON array of these objects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    /// Catalog-assigned product identifier, unique within the cart.
    pub id: ProductId,
    /// Display name, taken from the catalog when the line was first added.
    pub title: String,
    /// Reference to a product image, not interpreted by the cart.
    pub image_url: String,
    /// Unit price at the time the line was first added.
    pub price: Price,
    /// Number of units, always >= 1.
    pub quantity: u32,
}

impl CartItem {
    /// Price of the line as a whole: unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.price.amount() * Decimal::from(self.quantity)
    }
}

/// A catalog product handed to the cart's add operation.
///
/// Identical to [`CartItem`] minus the quantity, which the cart decides:
/// first add inserts a line with quantity 1, later adds raise the quantity of
/// the existing line instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCartItem {
    /// Catalog-assigned product identifier.
    pub id: ProductId,
    /// Display name.
    pub title: String,
    /// Reference to a product image.
    pub image_url: String,
    /// Unit price.
    pub price: Price,
}

impl NewCartItem {
    /// Turn the candidate into a first cart line with quantity 1.
    #[must_use]
    pub fn into_line(self) -> CartItem {
        CartItem {
            id: self.id,
            title: self.title,
            image_url: self.image_url,
            price: self.price,
            quantity: 1,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn shirt() -> NewCartItem {
        NewCartItem {
            id: ProductId::new("p1"),
            title: "Shirt".to_string(),
            image_url: "https://img.example/p1.png".to_string(),
            price: Price::new(Decimal::new(1000, 2)),
        }
    }

    #[test]
    fn test_into_line_starts_at_quantity_one() {
        let line = shirt().into_line();
        assert_eq!(line.quantity, 1);
        assert_eq!(line.id, ProductId::new("p1"));
        assert_eq!(line.title, "Shirt");
    }

    #[test]
    fn test_line_total_scales_with_quantity() {
        let mut line = shirt().into_line();
        line.quantity = 3;
        assert_eq!(line.line_total(), Decimal::new(3000, 2));
    }

    #[test]
    fn test_persisted_encoding_shape() {
        let line = shirt().into_line();
        let value = serde_json::to_value(&line).unwrap();

        assert_eq!(value["id"], serde_json::json!("p1"));
        assert_eq!(value["title"], serde_json::json!("Shirt"));
        assert_eq!(value["image_url"], serde_json::json!("https://img.example/p1.png"));
        assert_eq!(value["price"], serde_json::json!(10.0));
        assert_eq!(value["quantity"], serde_json::json!(1));
    }

    #[test]
    fn test_serde_roundtrip() {
        let mut line = shirt().into_line();
        line.quantity = 2;

        let json = serde_json::to_string(&line).unwrap();
        let parsed: CartItem = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, line);
    }
}
