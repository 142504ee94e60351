use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Category {
    pub id: i64,
    pub name: String,
}

pub async fn get_all_categories(pool: &SqlitePool) -> sqlx::Result<Vec<Category>> {
    sqlx::query_as::<_, Category>(
        r#"
        SELECT id, type AS name FROM categories ORDER BY id
        "#,
    )
    .fetch_all(pool)
    .await
}

pub async fn get_category(pool: &SqlitePool, id: i64) -> sqlx::Result<Option<Category>> {
    sqlx::query_as::<_, Category>(
        r#"
        SELECT id, type AS name FROM categories WHERE categories.id = ?1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub async fn count_categories(pool: &SqlitePool) -> sqlx::Result<i64> {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM categories")
        .fetch_one(pool)
        .await
}

pub async fn import_categories(pool: &SqlitePool, categories: Vec<Category>) -> sqlx::Result<()> {
    let mut tx = pool.begin().await?;
    for category in categories {
        sqlx::query(
            r#"
            INSERT INTO categories (id, type) VALUES (?1, ?2)
            ON CONFLICT (id) DO UPDATE SET type = excluded.type
            "#,
        )
        .bind(category.id)
        .bind(category.name)
        .execute(&mut *tx)
        .await?;
    }
    tx.commit().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::tests::test_pool;

    #[tokio::test]
    async fn get_category_by_id() {
        let (pool, _dir) = test_pool().await;
        let category = get_category(&pool, 3).await.unwrap().unwrap();
        assert_eq!(category.name, "Geography");
        assert!(get_category(&pool, 100_100).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn import_renames_and_adds() {
        let (pool, _dir) = test_pool().await;
        import_categories(
            &pool,
            vec![
                Category {
                    id: 2,
                    name: "Fine Art".to_owned(),
                },
                Category {
                    id: 7,
                    name: "Music".to_owned(),
                },
            ],
        )
        .await
        .unwrap();

        assert_eq!(count_categories(&pool).await.unwrap(), 7);
        assert_eq!(get_category(&pool, 2).await.unwrap().unwrap().name, "Fine Art");
        assert_eq!(get_category(&pool, 7).await.unwrap().unwrap().name, "Music");
    }
}
