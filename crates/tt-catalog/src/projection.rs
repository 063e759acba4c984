//! Projection of demo-catalog products into trackable technologies.

use serde::{Deserialize, Serialize};
use tt_core::enums::Difficulty;

/// Fields requested from the catalog for every product listing.
pub const PRODUCT_FIELDS: &str = "id,title,description,category,rating,thumbnail,images,brand";

/// A catalog product projected into the tracker's vocabulary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogTechnology {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub category: String,
    pub difficulty: Difficulty,
    pub resources: Vec<String>,
    pub brand: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ProductList {
    #[serde(default)]
    pub products: Vec<Product>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Product {
    pub id: i64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub category: Option<String>,
    pub rating: Option<f64>,
    pub brand: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ProductDetail {
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
}

impl From<Product> for CatalogTechnology {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            title: product.title,
            description: product.description,
            category: product.category.unwrap_or_else(|| "unsorted".to_string()),
            difficulty: Difficulty::from_rating(product.rating.unwrap_or_default()),
            resources: Vec::new(),
            brand: product.brand.unwrap_or_else(|| "Unknown".to_string()),
        }
    }
}

pub(crate) fn project(list: ProductList) -> Vec<CatalogTechnology> {
    list.products.into_iter().map(CatalogTechnology::from).collect()
}

/// Thumbnail followed by images, blanks dropped, first occurrence kept.
pub(crate) fn resource_links(detail: ProductDetail) -> Vec<String> {
    let mut links: Vec<String> = Vec::new();
    for link in detail.thumbnail.into_iter().chain(detail.images) {
        if !link.trim().is_empty() && !links.contains(&link) {
            links.push(link);
        }
    }
    links
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const FIXTURE: &str = r#"{
        "products": [
            {
                "id": 1,
                "title": "Essence Mascara Lash Princess",
                "description": "A popular mascara known for its volumizing effects.",
                "category": "beauty",
                "rating": 4.94,
                "thumbnail": "https://cdn.dummyjson.com/1/thumbnail.png",
                "images": ["https://cdn.dummyjson.com/1/1.png"],
                "brand": "Essence"
            },
            {
                "id": 2,
                "title": "Eyeshadow Palette",
                "description": "Versatile shades for every look.",
                "rating": 4.1
            },
            {
                "id": 3,
                "title": "Powder Canister",
                "description": "Finishing powder.",
                "category": "beauty",
                "rating": 3.2
            }
        ],
        "total": 194,
        "skip": 0,
        "limit": 3
    }"#;

    #[test]
    fn projects_products_with_defaults() {
        let list: ProductList = serde_json::from_str(FIXTURE).unwrap();
        let items = project(list);
        assert_eq!(items.len(), 3);

        assert_eq!(items[0].difficulty, Difficulty::Advanced);
        assert_eq!(items[0].brand, "Essence");
        assert!(items[0].resources.is_empty());

        assert_eq!(items[1].category, "unsorted");
        assert_eq!(items[1].brand, "Unknown");
        assert_eq!(items[1].difficulty, Difficulty::Intermediate);

        assert_eq!(items[2].difficulty, Difficulty::Beginner);
    }

    #[test]
    fn missing_products_key_is_empty() {
        let list: ProductList = serde_json::from_str(r#"{"total": 0}"#).unwrap();
        assert!(project(list).is_empty());
    }

    #[test]
    fn resource_links_are_deduplicated() {
        let detail: ProductDetail = serde_json::from_str(
            r#"{"thumbnail": "https://x/t.png", "images": ["https://x/1.png", "https://x/t.png", "", "https://x/1.png"]}"#,
        )
        .unwrap();
        assert_eq!(
            resource_links(detail),
            vec!["https://x/t.png".to_string(), "https://x/1.png".to_string()]
        );
    }

    #[test]
    fn resource_links_without_thumbnail() {
        let detail: ProductDetail = serde_json::from_str(r#"{"images": ["https://x/1.png"]}"#).unwrap();
        assert_eq!(resource_links(detail), vec!["https://x/1.png".to_string()]);
    }
}
