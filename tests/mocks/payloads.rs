//! Catalog bodies in each supplier's own field-naming convention

/// Fruit supplier, `itemId` / `itemName`
pub const FRUIT_CATALOG: &str = r#"[
	{"itemId": "f-1", "itemName": "Apple", "quantity": 5, "price": "$1.00"},
	{"itemId": "f-2", "itemName": "Banana", "quantity": 20, "price": "$0.25"}
]"#;

/// Vegetable supplier, `productId` / `productName`
pub const VEGETABLE_CATALOG: &str = r#"[
	{"productId": "v-1", "productName": "Carrot", "quantity": 40, "price": "$0.40"},
	{"productId": "v-2", "productName": "Lettuce", "quantity": 3, "price": "$1.20"}
]"#;

/// Grain supplier, already canonical
#[allow(dead_code)]
pub const GRAIN_CATALOG: &str = r#"[
	{"id": "g-1", "name": "Rice", "quantity": 100, "price": "$2.50"},
	{"id": "g-2", "name": "Apple", "quantity": 50, "price": "$1.10"}
]"#;
