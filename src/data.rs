//! Sample listings served by the in-memory room repository.

use crate::models::Room;

fn cover(slug: &str) -> String {
    format!("/images/rooms/{slug}.jpg")
}

fn gallery(slug: &str) -> Vec<String> {
    (1..=4)
        .map(|n| format!("/images/rooms/{slug}-{n}.jpg"))
        .collect()
}

fn labels(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn sample_rooms() -> Vec<Room> {
    vec![
        Room {
            id: 1,
            name: "Phòng Deluxe Với Tầm Nhìn Ra Biển".to_string(),
            description: "Phòng sang trọng với không gian rộng rãi, tầm nhìn tuyệt đẹp ra biển và đầy đủ tiện nghi cao cấp.".to_string(),
            price: 1_200_000.0,
            price_discount: Some(1_000_000.0),
            max_guests: 2,
            bedrooms: 1,
            beds: 1,
            bathrooms: 1,
            area: 30,
            image_url: cover("deluxe-ocean-view"),
            images: gallery("deluxe-ocean-view"),
            location: "Nha Trang".to_string(),
            rating: 4.8,
            review_count: 124,
            amenities: labels(&["Wifi", "Điều hòa", "TV", "Tủ lạnh", "Máy giặt", "Hồ bơi", "Bãi đỗ xe"]),
            is_popular: true,
            is_new: false,
        },
        Room {
            id: 2,
            name: "Biệt thự ven biển với hồ bơi riêng".to_string(),
            description: "Biệt thự sang trọng với hồ bơi riêng, 3 phòng ngủ rộng rãi, phù hợp cho gia đình hoặc nhóm bạn.".to_string(),
            price: 5_000_000.0,
            price_discount: None,
            max_guests: 8,
            bedrooms: 3,
            beds: 4,
            bathrooms: 3,
            area: 200,
            image_url: cover("beach-villa"),
            images: gallery("beach-villa"),
            location: "Đà Nẵng".to_string(),
            rating: 4.9,
            review_count: 87,
            amenities: labels(&["Wifi", "Điều hòa", "TV", "Tủ lạnh", "Máy giặt", "Hồ bơi riêng", "BBQ", "Bãi đỗ xe"]),
            is_popular: true,
            is_new: false,
        },
        Room {
            id: 3,
            name: "Căn hộ hiện đại trung tâm thành phố".to_string(),
            description: "Căn hộ 2 phòng ngủ hiện đại, nằm ở trung tâm thành phố, gần các điểm tham quan và mua sắm.".to_string(),
            price: 1_800_000.0,
            price_discount: Some(1_500_000.0),
            max_guests: 4,
            bedrooms: 2,
            beds: 2,
            bathrooms: 2,
            area: 80,
            image_url: cover("city-apartment"),
            images: gallery("city-apartment"),
            location: "Hồ Chí Minh".to_string(),
            rating: 4.7,
            review_count: 215,
            amenities: labels(&["Wifi", "Điều hòa", "TV", "Tủ lạnh", "Máy giặt", "Bếp", "Bãi đỗ xe"]),
            is_popular: true,
            is_new: false,
        },
        Room {
            id: 4,
            name: "Homestay view núi Đà Lạt".to_string(),
            description: "Homestay xinh xắn với view núi tuyệt đẹp, không gian yên tĩnh phù hợp cho các cặp đôi.".to_string(),
            price: 800_000.0,
            price_discount: None,
            max_guests: 2,
            bedrooms: 1,
            beds: 1,
            bathrooms: 1,
            area: 35,
            image_url: cover("dalat-homestay"),
            images: gallery("dalat-homestay"),
            location: "Đà Lạt".to_string(),
            rating: 4.6,
            review_count: 142,
            amenities: labels(&["Wifi", "Điều hòa", "TV", "Bếp nhỏ", "Ban công"]),
            is_popular: false,
            is_new: true,
        },
        Room {
            id: 5,
            name: "Phòng Studio gần phố cổ".to_string(),
            description: "Phòng studio tiện nghi gần phố cổ, dễ dàng di chuyển đến các điểm tham quan nổi tiếng.".to_string(),
            price: 900_000.0,
            price_discount: Some(750_000.0),
            max_guests: 2,
            bedrooms: 1,
            beds: 1,
            bathrooms: 1,
            area: 28,
            image_url: cover("hanoi-studio"),
            images: gallery("hanoi-studio"),
            location: "Hà Nội".to_string(),
            rating: 4.5,
            review_count: 98,
            amenities: labels(&["Wifi", "Điều hòa", "TV", "Tủ lạnh", "Máy giặt"]),
            is_popular: false,
            is_new: true,
        },
        Room {
            id: 6,
            name: "Bungalow bên bờ biển".to_string(),
            description: "Bungalow xinh xắn nằm ngay bên bờ biển, tận hưởng không khí trong lành và tiếng sóng biển.".to_string(),
            price: 1_500_000.0,
            price_discount: None,
            max_guests: 3,
            bedrooms: 1,
            beds: 1,
            bathrooms: 1,
            area: 40,
            image_url: cover("beach-bungalow"),
            images: gallery("beach-bungalow"),
            location: "Phú Quốc".to_string(),
            rating: 4.8,
            review_count: 76,
            amenities: labels(&["Wifi", "Điều hòa", "TV", "Tủ lạnh", "Ban công", "Tầm nhìn ra biển"]),
            is_popular: true,
            is_new: false,
        },
        Room {
            id: 7,
            name: "Penthouse cao cấp Landmark 81".to_string(),
            description: "Penthouse sang trọng tại tòa nhà cao nhất Việt Nam, tầm nhìn panorama toàn thành phố.".to_string(),
            price: 8_000_000.0,
            price_discount: Some(7_000_000.0),
            max_guests: 6,
            bedrooms: 3,
            beds: 3,
            bathrooms: 3,
            area: 150,
            image_url: cover("penthouse-landmark"),
            images: gallery("penthouse-landmark"),
            location: "Hồ Chí Minh".to_string(),
            rating: 4.9,
            review_count: 32,
            amenities: labels(&["Wifi", "Điều hòa", "TV", "Tủ lạnh", "Máy giặt", "Bếp", "Hồ bơi", "Gym", "Sauna"]),
            is_popular: true,
            is_new: false,
        },
        Room {
            id: 8,
            name: "Nhà gỗ truyền thống Mai Châu".to_string(),
            description: "Nhà gỗ truyền thống của người Thái, không gian yên bình giữa thung lũng Mai Châu.".to_string(),
            price: 600_000.0,
            price_discount: None,
            max_guests: 4,
            bedrooms: 1,
            beds: 2,
            bathrooms: 1,
            area: 45,
            image_url: cover("maichau-wooden-house"),
            images: gallery("maichau-wooden-house"),
            location: "Mai Châu".to_string(),
            rating: 4.7,
            review_count: 108,
            amenities: labels(&["Wifi", "Quạt trần", "Bữa sáng", "Sân vườn"]),
            is_popular: false,
            is_new: true,
        },
    ]
}
