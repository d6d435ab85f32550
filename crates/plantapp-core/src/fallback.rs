//! # Fallback Data
//!
//! Fixed snapshots substituted when a remote fetch fails for any reason.
//!
//! Both functions are pure and total: they build the same values on every
//! call and have no error path. The content mirrors what the live API
//! returned when the snapshot was taken (January 2023 CMS export).

use chrono::{DateTime, NaiveDate, Utc};

use crate::types::{Category, CategoryImage, Question};

const CMS_CDN: &str = "https://cms-cdn.plantapp.app";
const CMS_PROVIDER: &str = "@strapi-community/strapi-provider-upload-google-cloud-storage";
const CARD_STORAGE: &str =
    "https://firebasestorage.googleapis.com/v0/b/flora---plant-identifier.appspot.com/o/public%2F";

/// Timestamp on 2023-01-11, the day the CMS content was published.
///
/// Arguments are compile-time literals, so the `None` arm is unreachable in
/// practice; it maps to the epoch to keep this function total.
fn jan_11(hour: u32, min: u32, sec: u32, milli: u32) -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(2023, 1, 11)
        .and_then(|date| date.and_hms_milli_opt(hour, min, sec, milli))
        .map(|naive| naive.and_utc())
        .unwrap_or_default()
}

/// Builds one CMS image record. `stem` is the upload name without extension,
/// `hash` its CDN hash.
fn cms_image(
    id: i64,
    stem: &str,
    hash: &str,
    (width, height): (u32, u32),
    size: f64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
) -> CategoryImage {
    CategoryImage {
        id,
        name: format!("{stem}.png"),
        alternative_text: None,
        caption: None,
        width,
        height,
        formats: serde_json::Value::Null,
        hash: hash.to_string(),
        ext: ".png".to_string(),
        mime: "image/png".to_string(),
        size,
        url: format!("{CMS_CDN}/{hash}/{hash}.png"),
        preview_url: None,
        provider: CMS_PROVIDER.to_string(),
        provider_metadata: serde_json::Value::Null,
        created_at,
        updated_at,
    }
}

fn succulent_image() -> CategoryImage {
    cms_image(
        25,
        "5",
        "5_d2384a3938",
        (158, 152),
        10.01,
        jan_11(10, 50, 17, 828),
        jan_11(10, 51, 5, 935),
    )
}

/// The four categories shown when `/getCategories` is unreachable.
pub fn fallback_categories() -> Vec<Category> {
    vec![
        Category {
            id: 1,
            name: "fern".to_string(),
            title: "Ferns".to_string(),
            rank: 0,
            image: cms_image(
                23,
                "6",
                "6_edbcc6988a",
                (116, 126),
                8.24,
                jan_11(10, 44, 46, 151),
                jan_11(10, 44, 46, 151),
            ),
            created_at: jan_11(10, 53, 5, 801),
            updated_at: jan_11(10, 54, 30, 59),
            published_at: jan_11(10, 53, 7, 416),
        },
        Category {
            id: 2,
            name: "cacti-and-succulent".to_string(),
            title: "Cacti and Succulents".to_string(),
            rank: 1,
            image: succulent_image(),
            created_at: jan_11(10, 52, 28, 521),
            updated_at: jan_11(10, 54, 39, 391),
            published_at: jan_11(10, 52, 36, 428),
        },
        Category {
            id: 3,
            name: "flowering".to_string(),
            title: "Flowering Plants".to_string(),
            rank: 2,
            image: cms_image(
                22,
                "2",
                "2_4a226c9ae7",
                (116, 126),
                5.28,
                jan_11(10, 44, 13, 779),
                jan_11(10, 44, 13, 779),
            ),
            created_at: jan_11(10, 44, 18, 862),
            updated_at: jan_11(10, 54, 54, 326),
            published_at: jan_11(10, 44, 20, 185),
        },
        Category {
            id: 4,
            name: "edible".to_string(),
            title: "Edible Plants".to_string(),
            rank: 8,
            image: succulent_image(),
            created_at: jan_11(11, 4, 5, 527),
            updated_at: jan_11(11, 5, 56, 542),
            published_at: jan_11(11, 4, 6, 784),
        },
    ]
}

fn question(id: i64, title: &str, subtitle: &str, card: &str, slug: &str) -> Question {
    Question {
        id,
        title: title.to_string(),
        subtitle: subtitle.to_string(),
        image_uri: format!("{CARD_STORAGE}{card}?alt=media"),
        uri: format!("https://plantapp.app/blog/{slug}/"),
        order: id as i32,
    }
}

/// The three "get started" questions shown when `/getQuestions` is unreachable.
pub fn fallback_questions() -> Vec<Question> {
    vec![
        question(
            1,
            "How to identify plants?",
            "Life Style",
            "Card.png",
            "identifying-plant-in-10-steps",
        ),
        question(
            2,
            "Differences Between Species and Varieties?",
            "Plant Identify",
            "card2.png",
            "differences-between-species-and-varieties",
        ),
        question(
            3,
            "The reasons why the same plant can look different?",
            "Life Style",
            "Card3.png",
            "same-seeds-but-different-looking-plants",
        ),
    ]
}
