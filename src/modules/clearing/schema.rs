use sqlx::prelude::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct ClearingDecisionEntity {
    pub clearing_decision_pk: i64,
    pub uploadtree_fk: i64,
    pub decision_type: i32,
    pub user_fk: i64,
    pub date_added: chrono::DateTime<chrono::Utc>,
}
