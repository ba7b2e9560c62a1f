use crate::{
    api::error,
    modules::{
        clearing::{repository::ClearingRepository, schema::ClearingDecisionEntity},
        upload::schema::ItemTreeBounds,
    },
};

#[derive(Clone)]
pub struct ClearingRepositoryPg {
    pool: sqlx::PgPool,
}

impl ClearingRepositoryPg {
    pub fn new(pool: sqlx::PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl ClearingRepository for ClearingRepositoryPg {
    async fn decisions_in_scope(
        &self,
        bounds: &ItemTreeBounds,
    ) -> Result<Vec<ClearingDecisionEntity>, error::SystemError> {
        let decisions = sqlx::query_as::<_, ClearingDecisionEntity>(
            r#"
            SELECT
                cd.clearing_decision_pk,
                cd.uploadtree_fk,
                cd.decision_type,
                cd.user_fk,
                cd.date_added
            FROM clearing_decision cd
            JOIN uploadtree ut
                ON ut.uploadtree_pk = cd.uploadtree_fk
            WHERE ut.upload_fk = $1
              AND ut.lft >= $2
              AND ut.rgt <= $3
            ORDER BY cd.clearing_decision_pk
            "#,
        )
        .bind(bounds.upload_id)
        .bind(bounds.lft)
        .bind(bounds.rgt)
        .fetch_all(&self.pool)
        .await?;

        Ok(decisions)
    }
}
