use std::sync::Arc;

use crate::domain::product::Product;

const HAT_IMAGE_URL: &str =
    "https://www.hollywoodreporter.com/wp-content/uploads/2022/07/best-mens-hats-H-MAIN-2022.jpg?w=1296";

/// Read-only product list shared by every request. Cloning is cheap.
#[derive(Debug, Clone)]
pub struct CatalogStore {
    products: Arc<[Product]>,
}

impl CatalogStore {
    pub fn new(products: Vec<Product>) -> Self {
        Self {
            products: products.into(),
        }
    }

    /// The fixed catalog served in production.
    pub fn seeded() -> Self {
        let mut products = vec![
            hat(1, "Child Hat", 10.0, 20),
            hat(2, "Women Hat", 20.0, 40),
        ];
        // The source data repeats this entry; duplicates are kept as-is.
        products.extend(std::iter::repeat_with(|| hat(3, "Men Hat", 30.0, 10)).take(7));
        Self::new(products)
    }

    pub fn all(&self) -> &[Product] {
        &self.products
    }
}

fn hat(id: i32, title: &str, avg_rating: f64, total_reviews: i32) -> Product {
    Product {
        id,
        image_url: HAT_IMAGE_URL.to_string(),
        title: title.to_string(),
        price: 20.0,
        avg_rating,
        total_reviews,
    }
}
