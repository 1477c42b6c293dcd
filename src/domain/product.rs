/// A catalog entry. `id` is not unique across the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: i32,
    pub image_url: String,
    pub title: String,
    pub price: f64,
    pub avg_rating: f64,
    pub total_reviews: i32,
}
