use crate::api::error;
use crate::modules::upload::schema::{FolderEntity, ItemTreeBounds, UploadEntity};

#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait UploadRepository {
    async fn find_upload(
        &self,
        upload_id: i64,
    ) -> Result<Option<UploadEntity>, error::SystemError>;

    async fn list_folders(&self) -> Result<Vec<FolderEntity>, error::SystemError>;

    async fn list_uploads(
        &self,
        folder_id: i64,
    ) -> Result<Vec<UploadEntity>, error::SystemError>;

    async fn item_tree_bounds(
        &self,
        item_id: i64,
    ) -> Result<Option<ItemTreeBounds>, error::SystemError>;
}
