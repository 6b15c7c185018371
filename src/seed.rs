use chrono::NaiveDate;
use rust_decimal_macros::dec;

use crate::models::{LineItem, Order, OrderStatus, Product};

/// Built-in sample catalog used to seed an empty store and as the
/// side-effect-free fallback for reads when no collection is present.
pub fn default_products() -> Vec<Product> {
    vec![
        Product {
            id: "1".into(),
            name: "Flagship Smartphone".into(),
            description: "High-end smartphone with an AMOLED display, pro-grade camera and all-day battery.".into(),
            price: dec!(1299.99),
            images: vec![
                "https://images.unsplash.com/photo-1598327105666?w=1200".into(),
                "https://images.unsplash.com/photo-1621330396173?w=1200".into(),
                "https://images.unsplash.com/photo-1565849904461?w=1200".into(),
            ],
            category: "Electronics".into(),
            videos: Some(vec![
                "https://cdn.example.com/videos/flagship-smartphone-720p.mp4".into(),
            ]),
        },
        Product {
            id: "2".into(),
            name: "Luxury Smartwatch".into(),
            description: "Water-resistant smartwatch with activity tracking and a seven-day battery.".into(),
            price: dec!(299.99),
            images: vec![
                "https://images.unsplash.com/photo-1579586337278?w=1200".into(),
                "https://images.unsplash.com/photo-1508685096489?w=1200".into(),
                "https://images.unsplash.com/photo-1523275335684?w=1200".into(),
            ],
            category: "Electronics".into(),
            videos: None,
        },
        Product {
            id: "3".into(),
            name: "Wireless Earbuds".into(),
            description: "Noise-cancelling wireless earbuds with high-fidelity sound and long playtime.".into(),
            price: dec!(159.99),
            images: vec![
                "https://images.unsplash.com/photo-1505740420928?w=1200".into(),
                "https://images.unsplash.com/photo-1606768666853?w=1200".into(),
                "https://images.unsplash.com/photo-1481207801830?w=1200".into(),
            ],
            category: "Electronics".into(),
            videos: Some(vec![
                "https://cdn.example.com/videos/earbuds-demo-720p.mp4".into(),
            ]),
        },
        Product {
            id: "4".into(),
            name: "Leather Messenger Bag".into(),
            description: "Handmade full-grain leather bag, suited for daily use or the office.".into(),
            price: dec!(199.99),
            images: vec![
                "https://images.unsplash.com/photo-1590874103328?w=1200".into(),
                "https://images.unsplash.com/photo-1605733160314?w=1200".into(),
                "https://images.unsplash.com/photo-1566150905458?w=1200".into(),
            ],
            category: "Fashion".into(),
            videos: None,
        },
        Product {
            id: "5".into(),
            name: "Classic Sunglasses".into(),
            description: "Classic frame with UV-protective lenses and a durable hinge.".into(),
            price: dec!(129.99),
            images: vec![
                "https://images.unsplash.com/photo-1577803645773?w=1200".into(),
                "https://images.unsplash.com/photo-1556306535?w=1200".into(),
                "https://images.unsplash.com/photo-1615812214208?w=1200".into(),
            ],
            category: "Fashion".into(),
            videos: None,
        },
        Product {
            id: "6".into(),
            name: "Woody Eau de Parfum".into(),
            description: "Long-lasting woody fragrance for special occasions and everyday wear.".into(),
            price: dec!(89.99),
            images: vec![
                "https://images.unsplash.com/photo-1590736969596?w=1200".into(),
                "https://images.unsplash.com/photo-1594035910387?w=1200".into(),
                "https://images.unsplash.com/photo-1559056199?w=1200".into(),
            ],
            category: "Fragrance".into(),
            videos: None,
        },
    ]
}

pub fn default_orders() -> Vec<Order> {
    vec![
        Order {
            id: "1".into(),
            customer_name: "Adam Mansour".into(),
            city: "Tripoli".into(),
            address: "Victory Street, Andalus district".into(),
            phone: "0912345678".into(),
            products: vec![
                LineItem {
                    product_id: "1".into(),
                    quantity: 1,
                },
                LineItem {
                    product_id: "3".into(),
                    quantity: 2,
                },
            ],
            total_price: dec!(1619.97),
            status: OrderStatus::Delivered,
            date: seed_date(2023, 5, 15),
            notes: None,
        },
        Order {
            id: "2".into(),
            customer_name: "Fatima Ali".into(),
            city: "Benghazi".into(),
            address: "Omar Mukhtar Street, city centre".into(),
            phone: "0923456789".into(),
            products: vec![LineItem {
                product_id: "2".into(),
                quantity: 1,
            }],
            total_price: dec!(299.99),
            status: OrderStatus::Processing,
            date: seed_date(2023, 5, 20),
            notes: None,
        },
    ]
}

fn seed_date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid seed date")
}
