//! One-time bootstrap of reference data and demo accounts.
//!
//! Runs at startup after migrations. Each block only fires when its table is
//! empty, so re-running against a populated database is a no-op.

use sqlx::SqlitePool;

use crate::core::error::Result;
use crate::features::auth::services::password;

const CATEGORIES: &[(&str, &str, &str)] = &[
    ("Hôtels & Hébergement", "hotels-hebergement", "Hotel"),
    ("Restaurants & Cafés", "restaurants-cafes", "Utensils"),
    ("Santé & Médical", "sante-medical", "Stethoscope"),
    ("Automobile & Transport", "automobile-transport", "Car"),
    ("Services Professionnels", "services-professionnels", "Briefcase"),
    ("Shopping & Commerces", "shopping-commerces", "ShoppingBag"),
    ("Art & Culture", "art-culture", "Palette"),
    ("Technologie & Informatique", "technologie-informatique", "Laptop"),
];

const REGIONS: &[&str] = &[
    "Analamanga",
    "Vakinankaratra",
    "Atsinanana",
    "Diana",
    "Boeny",
    "Sava",
    "Anosy",
    "Menabe",
];

const CITIES: &[(&str, i64)] = &[
    ("Antananarivo", 1),
    ("Antsirabe", 2),
    ("Toamasina", 3),
    ("Antsiranana", 4),
    ("Mahajanga", 5),
    ("Sambava", 6),
    ("Fort-Dauphin", 7),
    ("Morondava", 8),
];

/// Demo accounts; all share the same development password.
const DEMO_USERS: &[(&str, &str, &str)] = &[
    ("Admin Mada", "admin@mada.mg", "admin"),
    ("Jean Pro", "pro@mada.mg", "pro"),
    ("Client Lambda", "user@mada.mg", "user"),
];

const DEMO_PASSWORD: &str = "password123";

#[allow(clippy::type_complexity)]
const DEMO_LISTINGS: &[(
    i64,
    i64,
    i64,
    &str,
    &str,
    &str,
    &str,
    Option<&str>,
    Option<&str>,
    Option<&str>,
    Option<&str>,
    bool,
    bool,
)] = &[
    (
        2,
        1,
        1,
        "Hôtel Carlton",
        "hotel-carlton",
        "Hôtel 5 étoiles au coeur d'Antananarivo avec vue panoramique.",
        "Anosy, Antananarivo",
        Some("+261 20 22 260 60"),
        Some("+261 34 00 000 01"),
        Some("contact@carlton.mg"),
        Some("https://carlton.mg"),
        true,
        true,
    ),
    (
        2,
        2,
        1,
        "Le Jardin d'Antanimena",
        "le-jardin-antanimena",
        "Cuisine raffinée dans un cadre verdoyant et calme.",
        "Antanimena, Antananarivo",
        Some("+261 20 22 333 44"),
        None,
        Some("info@lejardin.mg"),
        None,
        false,
        true,
    ),
    (
        2,
        3,
        1,
        "Clinique et Maternité d'Ankadifotsy",
        "clinique-ankadifotsy",
        "Soins médicaux de qualité et urgences 24h/24.",
        "Ankadifotsy, Antananarivo",
        Some("+261 20 22 235 55"),
        None,
        None,
        None,
        false,
        true,
    ),
    (
        2,
        1,
        3,
        "Hôtel de l'Avenue Toamasina",
        "hotel-avenue-toamasina",
        "Confort et proximité du port pour vos séjours d'affaires.",
        "Boulevard Joffre, Toamasina",
        Some("+261 20 53 321 00"),
        None,
        Some("resa@hotelavenue.mg"),
        None,
        true,
        false,
    ),
    (
        2,
        6,
        5,
        "Baobab Mall Mahajanga",
        "baobab-mall",
        "Le plus grand centre commercial de la ville avec boutiques et food court.",
        "Bord de mer, Mahajanga",
        None,
        None,
        None,
        None,
        false,
        false,
    ),
];

const DEMO_REVIEWS: &[(i64, i64, i64, &str)] = &[
    (1, 3, 5, "Excellent service et vue imprenable !"),
    (1, 2, 4, "Très bon séjour, personnel accueillant."),
    (2, 3, 5, "Le meilleur canard laqué de Tana."),
];

pub async fn run(pool: &SqlitePool) -> Result<()> {
    let category_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM categories")
        .fetch_one(pool)
        .await?;

    if category_count == 0 {
        seed_reference_data(pool).await?;
        tracing::info!("Seeded reference data (categories, regions, cities)");
    }

    let user_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
        .fetch_one(pool)
        .await?;

    if user_count == 0 {
        seed_demo_accounts(pool).await?;
        tracing::info!("Seeded demo accounts, listings and reviews");
    }

    Ok(())
}

async fn seed_reference_data(pool: &SqlitePool) -> Result<()> {
    for (name, slug, icon) in CATEGORIES {
        sqlx::query("INSERT INTO categories (name, slug, icon) VALUES (?, ?, ?)")
            .bind(name)
            .bind(slug)
            .bind(icon)
            .execute(pool)
            .await?;
    }

    for name in REGIONS {
        sqlx::query("INSERT INTO regions (name) VALUES (?)")
            .bind(name)
            .execute(pool)
            .await?;
    }

    for (name, region_id) in CITIES {
        sqlx::query("INSERT INTO cities (name, region_id) VALUES (?, ?)")
            .bind(name)
            .bind(region_id)
            .execute(pool)
            .await?;
    }

    Ok(())
}

async fn seed_demo_accounts(pool: &SqlitePool) -> Result<()> {
    let password_hash = password::hash(DEMO_PASSWORD.to_string()).await?;

    for (name, email, role) in DEMO_USERS {
        sqlx::query("INSERT INTO users (name, email, password, role) VALUES (?, ?, ?, ?)")
            .bind(name)
            .bind(email)
            .bind(&password_hash)
            .bind(role)
            .execute(pool)
            .await?;
    }

    for (
        user_id,
        category_id,
        city_id,
        title,
        slug,
        description,
        address,
        phone,
        whatsapp,
        email,
        website,
        is_featured,
        is_verified,
    ) in DEMO_LISTINGS
    {
        sqlx::query(
            r#"
            INSERT INTO listings (user_id, category_id, city_id, title, slug, description,
                                  address, phone, whatsapp, email, website,
                                  is_featured, is_verified, status)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, 'published')
            "#,
        )
        .bind(user_id)
        .bind(category_id)
        .bind(city_id)
        .bind(title)
        .bind(slug)
        .bind(description)
        .bind(address)
        .bind(phone)
        .bind(whatsapp)
        .bind(email)
        .bind(website)
        .bind(is_featured)
        .bind(is_verified)
        .execute(pool)
        .await?;
    }

    for (listing_id, user_id, rating, comment) in DEMO_REVIEWS {
        sqlx::query("INSERT INTO reviews (listing_id, user_id, rating, comment) VALUES (?, ?, ?, ?)")
            .bind(listing_id)
            .bind(user_id)
            .bind(rating)
            .bind(comment)
            .execute(pool)
            .await?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::test_pool;

    #[tokio::test]
    async fn seeds_empty_database() {
        let pool = test_pool().await;
        run(&pool).await.unwrap();

        let users: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(&pool)
            .await
            .unwrap();
        let categories: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM categories")
            .fetch_one(&pool)
            .await
            .unwrap();
        let listings: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM listings")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(users, 3);
        assert_eq!(categories, 8);
        assert_eq!(listings, 5);
    }

    #[tokio::test]
    async fn rerun_is_idempotent() {
        let pool = test_pool().await;
        run(&pool).await.unwrap();
        run(&pool).await.unwrap();

        let users: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(&pool)
            .await
            .unwrap();
        let reviews: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM reviews")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(users, 3);
        assert_eq!(reviews, 3);
    }
}
