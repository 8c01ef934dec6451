//! Conversion between stored and transport product records.
//!
//! Both directions are total. Going to the store never materializes the
//! category: resolving `category_id` is the catalog service's job.

use chrono::{DateTime, Utc};

use super::dto::ProductDto;
use super::model::Product;

/// Map a stored product to its transport shape.
pub fn to_transport(product: &Product) -> ProductDto {
    ProductDto {
        id: product.id,
        name: product.name.clone(),
        price: product.price,
        category_id: product.category_id(),
        description: product.description.clone(),
    }
}

/// Map a transport product to a stored record registered now.
///
/// The category reference is left empty.
pub fn to_stored(dto: &ProductDto) -> Product {
    to_stored_at(dto, Utc::now())
}

/// Map a transport product to a stored record with the given registration time.
pub fn to_stored_at(dto: &ProductDto, reg_date: DateTime<Utc>) -> Product {
    Product {
        id: dto.id,
        name: dto.name.clone(),
        price: dto.price,
        category: None,
        description: dto.description.clone(),
        reg_date,
    }
}

impl From<&Product> for ProductDto {
    fn from(product: &Product) -> Self {
        to_transport(product)
    }
}

impl From<Product> for ProductDto {
    fn from(product: Product) -> Self {
        to_transport(&product)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_core::types::{CategoryId, ProductId};

    use crate::category::Category;

    fn stored(category: Option<Category>) -> Product {
        Product {
            id: Some(ProductId(3)),
            name: "Mechanical Keyboard".to_string(),
            price: 89000,
            category,
            description: Some("Brown switches".to_string()),
            reg_date: Utc::now(),
        }
    }

    #[test]
    fn test_to_transport_exposes_only_category_id() {
        let dto = to_transport(&stored(Some(Category::new(CategoryId(5), "Peripherals"))));
        assert_eq!(dto.id, Some(ProductId(3)));
        assert_eq!(dto.name, "Mechanical Keyboard");
        assert_eq!(dto.price, 89000);
        assert_eq!(dto.category_id, Some(CategoryId(5)));
        assert_eq!(dto.description.as_deref(), Some("Brown switches"));
    }

    #[test]
    fn test_to_transport_without_category() {
        let dto = to_transport(&stored(None));
        assert_eq!(dto.category_id, None);
    }

    #[test]
    fn test_to_stored_never_attaches_category() {
        let dto = ProductDto {
            id: Some(ProductId(9)),
            name: "Standing Desk".to_string(),
            price: 300000,
            category_id: Some(CategoryId(2)),
            description: None,
        };
        let product = to_stored(&dto);
        assert_eq!(product.id, Some(ProductId(9)));
        assert!(product.category.is_none());
    }

    #[test]
    fn test_round_trip_keeps_plain_fields() {
        let samples = [
            ProductDto {
                id: None,
                name: "Wireless Mouse X1".to_string(),
                price: 25000,
                category_id: None,
                description: Some("Ergonomic".to_string()),
            },
            ProductDto {
                id: Some(ProductId(1)),
                name: "USB-C Hub 7in1".to_string(),
                price: 0,
                category_id: None,
                description: None,
            },
        ];

        for dto in samples {
            let back = to_transport(&to_stored(&dto));
            assert_eq!(back, dto);
        }
    }

    #[test]
    fn test_to_stored_at_uses_given_time() {
        let at = DateTime::parse_from_rfc3339("2024-03-01T09:00:00Z")
            .unwrap()
            .with_timezone(&Utc);
        let product = to_stored_at(&ProductDto::default(), at);
        assert_eq!(product.reg_date, at);
    }
}
