//! First-run sample catalog

use chrono::{TimeZone, Utc};
use rust_decimal::Decimal;
use crate::domain::{Category, Product, ProductId};

struct Seed {
    name: &'static str,
    description: &'static str,
    cents: i64,
    category: Category,
    image: &'static str,
    stock: u32,
    rating: f64,
    reviews: u32,
    created: (u32, u32, u32, u32),
}

const SEEDS: [Seed; 10] = [
    Seed {
        name: "Wireless Bluetooth Headphones",
        description: "High-quality wireless headphones with noise cancellation and 30-hour battery life. Perfect for music lovers and professionals.",
        cents: 12999, category: Category::Electronics,
        image: "https://images.unsplash.com/photo-1505740420928-5e560c06d30e?w=400&h=400&fit=crop",
        stock: 25, rating: 4.5, reviews: 128, created: (15, 10, 0, 0),
    },
    Seed {
        name: "Organic Cotton T-Shirt",
        description: "Comfortable and sustainable organic cotton t-shirt available in multiple colors. Perfect for everyday wear.",
        cents: 2499, category: Category::Clothing,
        image: "https://images.unsplash.com/photo-1521572163474-6864f9cf17ab?w=400&h=400&fit=crop",
        stock: 50, rating: 4.2, reviews: 89, created: (10, 14, 30, 0),
    },
    Seed {
        name: "The Art of Programming",
        description: "Comprehensive guide to modern programming practices and design patterns. Essential reading for developers.",
        cents: 3999, category: Category::Books,
        image: "https://images.unsplash.com/photo-1544947950-fa07a98d237f?w=400&h=400&fit=crop",
        stock: 15, rating: 4.8, reviews: 256, created: (5, 9, 15, 0),
    },
    Seed {
        name: "Smart Home Hub",
        description: "Control all your smart devices from one central hub. Compatible with Alexa, Google Home, and Apple HomeKit.",
        cents: 19999, category: Category::Home,
        image: "https://images.unsplash.com/photo-1558618666-fcd25c85cd64?w=400&h=400&fit=crop",
        stock: 12, rating: 4.6, reviews: 67, created: (12, 16, 45, 0),
    },
    Seed {
        name: "Yoga Mat Premium",
        description: "Non-slip yoga mat made from eco-friendly materials. Perfect for yoga, pilates, and fitness activities.",
        cents: 4999, category: Category::Sports,
        image: "https://images.unsplash.com/photo-1544367567-0f2fcb009e0b?w=400&h=400&fit=crop",
        stock: 30, rating: 4.4, reviews: 142, created: (8, 11, 20, 0),
    },
    Seed {
        name: "Natural Face Serum",
        description: "Hydrating face serum with vitamin C and hyaluronic acid. Suitable for all skin types.",
        cents: 3499, category: Category::Beauty,
        image: "https://images.unsplash.com/photo-1556228720-195a672e8a03?w=400&h=400&fit=crop",
        stock: 40, rating: 4.3, reviews: 78, created: (14, 13, 10, 0),
    },
    Seed {
        name: "Educational Building Blocks",
        description: "STEM-focused building blocks that encourage creativity and problem-solving skills in children.",
        cents: 2999, category: Category::Toys,
        image: "https://images.unsplash.com/photo-1566576912321-d58ddd7a6088?w=400&h=400&fit=crop",
        stock: 35, rating: 4.7, reviews: 203, created: (6, 15, 30, 0),
    },
    Seed {
        name: "Car Phone Mount",
        description: "Universal car phone mount with suction cup. Compatible with all smartphones and tablets.",
        cents: 1999, category: Category::Automotive,
        image: "https://images.unsplash.com/photo-1549317661-bd32c8ce0db2?w=400&h=400&fit=crop",
        stock: 60, rating: 4.1, reviews: 95, created: (11, 12, 0, 0),
    },
    Seed {
        name: "4K Ultra HD Smart TV",
        description: "55-inch 4K Ultra HD Smart TV with HDR and built-in streaming apps. Perfect for home entertainment.",
        cents: 59999, category: Category::Electronics,
        image: "https://images.unsplash.com/photo-1593359677879-a4bb92f829d1?w=400&h=400&fit=crop",
        stock: 8, rating: 4.9, reviews: 312, created: (3, 8, 45, 0),
    },
    Seed {
        name: "Denim Jacket Classic",
        description: "Timeless denim jacket with a modern fit. Versatile piece that goes with any casual outfit.",
        cents: 7999, category: Category::Clothing,
        image: "https://images.unsplash.com/photo-1576995853123-5a10305d93c0?w=400&h=400&fit=crop",
        stock: 22, rating: 4.4, reviews: 156, created: (9, 10, 30, 0),
    },
];

/// The sample catalog, each record under a freshly generated id.
pub fn sample_products() -> Vec<Product> {
    SEEDS
        .iter()
        .map(|s| {
            let (day, hour, min, sec) = s.created;
            let created_at = Utc.with_ymd_and_hms(2024, 1, day, hour, min, sec).single().unwrap_or_default();
            Product {
                id: ProductId::generate(),
                name: s.name.to_string(),
                description: s.description.to_string(),
                price: Decimal::new(s.cents, 2),
                category: s.category,
                image: s.image.to_string(),
                stock: s.stock,
                rating: s.rating,
                review_count: s.reviews,
                created_at,
                updated_at: created_at,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_sample_catalog() {
        let products = sample_products();
        assert_eq!(products.len(), 10);
        let ids: HashSet<_> = products.iter().map(|p| p.id.clone()).collect();
        assert_eq!(ids.len(), 10);
        assert_eq!(products[0].created_at.to_rfc3339(), "2024-01-15T10:00:00+00:00");
        assert!(Category::ALL.iter().all(|c| products.iter().any(|p| p.category == *c)));
    }
}
