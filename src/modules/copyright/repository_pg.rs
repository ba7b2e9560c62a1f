use crate::{
    api::error,
    modules::{copyright::repository::CopyrightRepository, upload::schema::ItemTreeBounds},
};

#[derive(Clone)]
pub struct CopyrightRepositoryPg {
    pool: sqlx::PgPool,
}

impl CopyrightRepositoryPg {
    pub fn new(pool: sqlx::PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl CopyrightRepository for CopyrightRepositoryPg {
    async fn update_statement(
        &self,
        bounds: &ItemTreeBounds,
        hash: &str,
        content: &str,
        user_id: i64,
    ) -> Result<u64, error::SystemError> {
        let result = sqlx::query(
            r#"
            UPDATE copyright c
            SET content = $5, user_fk = $6
            FROM uploadtree ut
            WHERE c.pfile_fk = ut.pfile_fk
              AND c.hash = $4
              AND ut.upload_fk = $1
              AND ut.lft >= $2
              AND ut.rgt <= $3
            "#,
        )
        .bind(bounds.upload_id)
        .bind(bounds.lft)
        .bind(bounds.rgt)
        .bind(hash)
        .bind(content)
        .bind(user_id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }
}
