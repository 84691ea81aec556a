//! Built-in sample catalog served when no seed file is configured.

use crate::model::Product;

struct SeedRecord {
    id: i64,
    name: &'static str,
    price: f64,
    description: &'static str,
    category: &'static str,
    gender: &'static str,
    images: &'static [&'static str],
    sizes: &'static [&'static str],
    colors: &'static [&'static str],
    in_stock: bool,
}

const SEED: &[SeedRecord] = &[
    SeedRecord {
        id: 1,
        name: "Classic Fit Cotton T-Shirt",
        price: 29.99,
        description: "Comfortable everyday t-shirt made from 100% premium cotton. Perfect for casual wear.",
        category: "t-shirts",
        gender: "men",
        images: &[
            "https://images.unsplash.com/photo-1521572163474-6864f9cf17ab?w=400",
            "https://images.unsplash.com/photo-1583743814966-8936f37f82e6?w=400",
        ],
        sizes: &["S", "M", "L", "XL", "XXL"],
        colors: &["White", "Black", "Navy", "Gray"],
        in_stock: true,
    },
    SeedRecord {
        id: 2,
        name: "Slim Fit Denim Jeans",
        price: 79.99,
        description: "Modern slim-fit jeans with premium denim fabric. Versatile and durable.",
        category: "jeans",
        gender: "men",
        images: &[
            "https://images.unsplash.com/photo-1542272604-787c3835535d?w=400",
            "https://images.unsplash.com/photo-1605518216938-7c31b7b14ad0?w=400",
        ],
        sizes: &["28", "30", "32", "34", "36", "38"],
        colors: &["Dark Blue", "Light Blue", "Black"],
        in_stock: true,
    },
    SeedRecord {
        id: 3,
        name: "Business Casual Button Shirt",
        price: 59.99,
        description: "Professional button-down shirt perfect for office wear or formal occasions.",
        category: "shirts",
        gender: "men",
        images: &[
            "https://images.unsplash.com/photo-1596755094514-f87e34085b2c?w=400",
            "https://images.unsplash.com/photo-1602810318383-e386cc2a3ccf?w=400",
        ],
        sizes: &["S", "M", "L", "XL"],
        colors: &["White", "Light Blue", "Pink", "Gray"],
        in_stock: true,
    },
    SeedRecord {
        id: 4,
        name: "Comfort Fit Chinos",
        price: 69.99,
        description: "Versatile chino pants that work for both casual and semi-formal occasions.",
        category: "pants",
        gender: "men",
        images: &[
            "https://images.unsplash.com/photo-1473966968600-fa801b869a1a?w=400",
            "https://images.unsplash.com/photo-1624378439575-d8705ad7ae80?w=400",
        ],
        sizes: &["28", "30", "32", "34", "36"],
        colors: &["Khaki", "Navy", "Black", "Olive"],
        in_stock: true,
    },
    SeedRecord {
        id: 5,
        name: "Wool Blend Sweater",
        price: 89.99,
        description: "Warm and comfortable sweater made from premium wool blend. Perfect for cooler weather.",
        category: "sweaters",
        gender: "men",
        images: &[
            "https://images.unsplash.com/photo-1571945153237-4929e783af4a?w=400",
            "https://images.unsplash.com/photo-1578662996442-48f60103fc96?w=400",
        ],
        sizes: &["S", "M", "L", "XL"],
        colors: &["Charcoal", "Navy", "Burgundy", "Cream"],
        in_stock: true,
    },
    SeedRecord {
        id: 6,
        name: "Floral Summer Dress",
        price: 89.99,
        description: "Beautiful floral dress perfect for summer occasions. Lightweight and flowing design.",
        category: "dresses",
        gender: "women",
        images: &[
            "https://images.unsplash.com/photo-1515372039744-b8f02a3ae446?w=400",
            "https://images.unsplash.com/photo-1494578819711-4bbcce5dbf76?w=400",
        ],
        sizes: &["XS", "S", "M", "L", "XL"],
        colors: &["Pink Floral", "Blue Floral", "White Floral"],
        in_stock: true,
    },
    SeedRecord {
        id: 7,
        name: "High-Waisted Skinny Jeans",
        price: 75.99,
        description: "Flattering high-waisted jeans with skinny fit. Made from stretch denim for comfort.",
        category: "jeans",
        gender: "women",
        images: &[
            "https://images.unsplash.com/photo-1541099649105-f69ad21f3246?w=400",
            "https://images.unsplash.com/photo-1582418702059-97ebafb35d09?w=400",
        ],
        sizes: &["24", "25", "26", "27", "28", "29", "30"],
        colors: &["Dark Blue", "Light Blue", "Black", "White"],
        in_stock: true,
    },
    SeedRecord {
        id: 8,
        name: "Silk Blouse",
        price: 119.99,
        description: "Elegant silk blouse perfect for professional or formal settings. Luxurious feel and drape.",
        category: "blouses",
        gender: "women",
        images: &[
            "https://images.unsplash.com/photo-1485462537746-965f33f7f6a7?w=400",
            "https://images.unsplash.com/photo-1551698618-1dfe5d97d256?w=400",
        ],
        sizes: &["XS", "S", "M", "L"],
        colors: &["Ivory", "Black", "Blush", "Navy"],
        in_stock: true,
    },
    SeedRecord {
        id: 9,
        name: "Cozy Knit Cardigan",
        price: 95.99,
        description: "Soft and comfortable cardigan perfect for layering. Made from premium knit fabric.",
        category: "cardigans",
        gender: "women",
        images: &[
            "https://images.unsplash.com/photo-1544966503-7cc5ac882d5f?w=400",
            "https://images.unsplash.com/photo-1583496661160-fb5886a13c8c?w=400",
        ],
        sizes: &["XS", "S", "M", "L", "XL"],
        colors: &["Beige", "Gray", "Black", "Cream"],
        in_stock: true,
    },
    SeedRecord {
        id: 10,
        name: "Active Leggings",
        price: 49.99,
        description: "High-performance leggings for workouts or casual wear. Moisture-wicking and stretchy.",
        category: "activewear",
        gender: "women",
        images: &[
            "https://images.unsplash.com/photo-1506629905607-bb5bdd92ff5e?w=400",
            "https://images.unsplash.com/photo-1571019613454-1cb2f99b2d8b?w=400",
        ],
        sizes: &["XS", "S", "M", "L", "XL"],
        colors: &["Black", "Navy", "Gray", "Purple"],
        in_stock: true,
    },
    SeedRecord {
        id: 11,
        name: "Midi A-Line Skirt",
        price: 65.99,
        description: "Versatile midi skirt with flattering A-line silhouette. Perfect for work or weekend.",
        category: "skirts",
        gender: "women",
        images: &[
            "https://images.unsplash.com/photo-1594633312681-425c7b97ccd1?w=400",
            "https://images.unsplash.com/photo-1583496661160-fb5886a13c8c?w=400",
        ],
        sizes: &["XS", "S", "M", "L"],
        colors: &["Black", "Navy", "Burgundy", "Camel"],
        in_stock: true,
    },
    SeedRecord {
        id: 12,
        name: "Casual Cotton Top",
        price: 39.99,
        description: "Comfortable cotton top perfect for everyday wear. Soft fabric with relaxed fit.",
        category: "tops",
        gender: "women",
        images: &[
            "https://images.unsplash.com/photo-1434389677669-e08b4cac3105?w=400",
            "https://images.unsplash.com/photo-1551698618-1dfe5d97d256?w=400",
        ],
        sizes: &["XS", "S", "M", "L", "XL"],
        colors: &["White", "Black", "Pink", "Blue", "Green"],
        in_stock: true,
    },
];

/// The 12-product sample catalog: five men's and seven women's items, in
/// catalog order. The first image of each record doubles as its primary image.
pub fn sample_products() -> Vec<Product> {
    SEED.iter()
        .map(|r| Product {
            id: r.id,
            name: r.name.to_string(),
            price: r.price,
            description: r.description.to_string(),
            category: r.category.to_string(),
            gender: r.gender.to_string(),
            image: r.images.first().copied().unwrap_or_default().to_string(),
            images: r.images.iter().map(|s| s.to_string()).collect(),
            sizes: r.sizes.iter().map(|s| s.to_string()).collect(),
            colors: r.colors.iter().map(|s| s.to_string()).collect(),
            in_stock: r.in_stock,
        })
        .collect()
}
