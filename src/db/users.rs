use sqlx::PgPool;
use uuid::Uuid;

use crate::common::UserError;
use crate::models::{Role, User, UserCreate, UserIden};

pub async fn create_user(pool: &PgPool, data: &UserCreate) -> Result<User, UserError> {
    let user = sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (name, username, email, phone, password_hash, role_id)
        VALUES ($1, $2, $3, $4, $5, $6)
        ON CONFLICT (email) DO NOTHING
        RETURNING *
        "#,
    )
    .bind(&data.name)
    .bind(&data.username)
    .bind(&data.email)
    .bind(data.phone.as_deref())
    .bind(&data.password_hash)
    .bind(data.role_id)
    .fetch_optional(pool)
    .await?;

    match user {
        Some(u) => Ok(u),
        None => Err(UserError::AlreadyExists(data.email.clone().into())),
    }
}

pub async fn get_user(pool: &PgPool, iden: &UserIden) -> Result<User, UserError> {
    let (id, email, username): (Option<Uuid>, Option<&str>, Option<&str>) = match iden {
        UserIden::Id(id) => (Some(*id), None, None),
        UserIden::Email(email) => (None, Some(email), None),
        UserIden::Username(username) => (None, None, Some(username)),
    };

    let result = sqlx::query_as::<_, User>(
        r#"
        SELECT * FROM users
        WHERE deleted_at IS NULL
          AND (id = $1 OR email = $2 OR username = $3)
        "#,
    )
    .bind(id)
    .bind(email)
    .bind(username)
    .fetch_optional(pool)
    .await?;

    result.ok_or_else(|| UserError::NotFound(iden.clone()))
}

pub async fn list_users(pool: &PgPool) -> Result<Vec<User>, UserError> {
    let users = sqlx::query_as::<_, User>(
        r#"
        SELECT * FROM users
        WHERE deleted_at IS NULL
        ORDER BY created_at ASC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(users)
}

/// Soft delete; the row stays for audit but vanishes from lookups.
pub async fn delete_user(pool: &PgPool, id: Uuid) -> Result<(), UserError> {
    let result = sqlx::query(
        r#"UPDATE users SET deleted_at = now() WHERE id = $1 AND deleted_at IS NULL"#,
    )
    .bind(id)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(UserError::NotFound(id.into()));
    }
    Ok(())
}

/// Roles the panel may assign. Hidden roles exist in the table but
/// never come back from this query.
pub async fn list_assignable_roles(pool: &PgPool) -> Result<Vec<Role>, UserError> {
    let roles = sqlx::query_as::<_, Role>(
        r#"SELECT * FROM roles WHERE NOT hidden ORDER BY name"#,
    )
    .fetch_all(pool)
    .await?;

    Ok(roles)
}

pub async fn get_assignable_role(pool: &PgPool, id: Uuid) -> Result<Role, UserError> {
    let role = sqlx::query_as::<_, Role>(
        r#"SELECT * FROM roles WHERE id = $1 AND NOT hidden"#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    role.ok_or(UserError::RoleNotAssignable)
}

pub async fn get_role_by_name(pool: &PgPool, name: &str) -> Result<Option<Role>, UserError> {
    let role = sqlx::query_as::<_, Role>(r#"SELECT * FROM roles WHERE name = $1"#)
        .bind(name)
        .fetch_optional(pool)
        .await?;

    Ok(role)
}
