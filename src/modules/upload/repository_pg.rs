use crate::{
    api::error,
    modules::upload::{
        repository::UploadRepository,
        schema::{FolderEntity, ItemTreeBounds, UploadEntity},
    },
};

#[derive(Clone)]
pub struct UploadRepositoryPg {
    pool: sqlx::PgPool,
}

impl UploadRepositoryPg {
    pub fn new(pool: sqlx::PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl UploadRepository for UploadRepositoryPg {
    async fn find_upload(
        &self,
        upload_id: i64,
    ) -> Result<Option<UploadEntity>, error::SystemError> {
        let upload =
            sqlx::query_as::<_, UploadEntity>("SELECT * FROM upload WHERE upload_pk = $1")
                .bind(upload_id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(upload)
    }

    async fn list_folders(&self) -> Result<Vec<FolderEntity>, error::SystemError> {
        let folders = sqlx::query_as::<_, FolderEntity>(
            "SELECT folder_pk, folder_name, folder_desc FROM folder ORDER BY folder_name",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(folders)
    }

    async fn list_uploads(
        &self,
        folder_id: i64,
    ) -> Result<Vec<UploadEntity>, error::SystemError> {
        let uploads = sqlx::query_as::<_, UploadEntity>(
            "SELECT * FROM upload WHERE folder_fk = $1 ORDER BY upload_pk",
        )
        .bind(folder_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(uploads)
    }

    async fn item_tree_bounds(
        &self,
        item_id: i64,
    ) -> Result<Option<ItemTreeBounds>, error::SystemError> {
        let bounds = sqlx::query_as::<_, ItemTreeBounds>(
            r#"
            SELECT
                uploadtree_pk AS item_id,
                upload_fk AS upload_id,
                lft,
                rgt
            FROM uploadtree
            WHERE uploadtree_pk = $1
            "#,
        )
        .bind(item_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(bounds)
    }
}
