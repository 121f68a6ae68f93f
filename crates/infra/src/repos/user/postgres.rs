use super::IUserRepo;
use agendo_domain::{Role, User, ID};
use sqlx::{types::Uuid, FromRow, PgPool};

pub struct PostgresUserRepo {
    pool: PgPool,
}

impl PostgresUserRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct UserRaw {
    user_uid: Uuid,
    name: String,
    email: String,
    role: String,
    slug: Option<String>,
}

impl From<UserRaw> for User {
    fn from(raw: UserRaw) -> Self {
        Self {
            id: raw.user_uid.into(),
            name: raw.name,
            email: raw.email,
            // The role column carries a CHECK constraint, so this parse
            // only fails on a manually corrupted row.
            role: raw.role.parse().unwrap_or(Role::Client),
            slug: raw.slug,
        }
    }
}

#[async_trait::async_trait]
impl IUserRepo for PostgresUserRepo {
    async fn insert(&self, user: &User) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO users(user_uid, name, email, role, slug)
            VALUES($1, $2, $3, $4, $5)
            "#,
        )
        .bind(*user.id.inner_ref())
        .bind(&user.name)
        .bind(&user.email)
        .bind(user.role.as_str())
        .bind(&user.slug)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn save(&self, user: &User) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            UPDATE users
            SET name = $2,
            email = $3,
            role = $4,
            slug = $5
            WHERE user_uid = $1
            "#,
        )
        .bind(*user.id.inner_ref())
        .bind(&user.name)
        .bind(&user.email)
        .bind(user.role.as_str())
        .bind(&user.slug)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find(&self, user_id: &ID) -> Option<User> {
        let user: UserRaw = match sqlx::query_as(
            r#"
            SELECT * FROM users
            WHERE user_uid = $1
            "#,
        )
        .bind(*user_id.inner_ref())
        .fetch_one(&self.pool)
        .await
        {
            Ok(user) => user,
            Err(_) => return None,
        };
        Some(user.into())
    }

    async fn find_by_slug(&self, slug: &str) -> Option<User> {
        let user: UserRaw = match sqlx::query_as(
            r#"
            SELECT * FROM users
            WHERE slug = $1
            "#,
        )
        .bind(slug)
        .fetch_one(&self.pool)
        .await
        {
            Ok(user) => user,
            Err(_) => return None,
        };
        Some(user.into())
    }
}
