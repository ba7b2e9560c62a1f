use std::sync::Arc;

use crate::{
    api::error,
    modules::upload::{
        model::{FolderResponse, UploadOption},
        repository::UploadRepository,
        schema::UploadEntity,
    },
};

#[derive(Clone)]
pub struct UploadService<R>
where
    R: UploadRepository + Send + Sync,
{
    upload_repo: Arc<R>,
}

impl<R> UploadService<R>
where
    R: UploadRepository + Send + Sync,
{
    pub fn with_dependencies(upload_repo: Arc<R>) -> Self {
        UploadService { upload_repo }
    }

    pub async fn get_upload(&self, upload_id: i64) -> Result<UploadEntity, error::SystemError> {
        self.upload_repo
            .find_upload(upload_id)
            .await?
            .ok_or_else(|| error::SystemError::not_found("Upload does not exist"))
    }

    pub async fn get_folders(&self) -> Result<Vec<FolderResponse>, error::SystemError> {
        let folders = self.upload_repo.list_folders().await?;
        Ok(folders.into_iter().map(FolderResponse::from).collect())
    }

    pub async fn get_folder_uploads(
        &self,
        folder_id: i64,
    ) -> Result<Vec<UploadOption>, error::SystemError> {
        let uploads = self.upload_repo.list_uploads(folder_id).await?;
        Ok(uploads.into_iter().map(UploadOption::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::upload::repository::MockUploadRepository;

    fn upload(id: i64, name: &str) -> UploadEntity {
        UploadEntity {
            upload_pk: id,
            upload_filename: name.to_string(),
            upload_desc: None,
            upload_ts: chrono::Utc::now(),
            folder_fk: 1,
        }
    }

    #[actix_web::test]
    async fn test_get_upload_returns_not_found_for_unknown_id() {
        let mut repo = MockUploadRepository::new();
        repo.expect_find_upload().returning(|_| Ok(None));

        let service = UploadService::with_dependencies(Arc::new(repo));
        let err = service.get_upload(99).await.unwrap_err();

        assert!(
            matches!(err, error::SystemError::NotFound(msg) if msg == "Upload does not exist")
        );
    }

    #[actix_web::test]
    async fn test_get_folder_uploads_preserves_order() {
        let mut repo = MockUploadRepository::new();
        repo.expect_list_uploads()
            .returning(|_| Ok(vec![upload(3, "zlib.tar.gz"), upload(1, "acl.tar.gz")]));

        let service = UploadService::with_dependencies(Arc::new(repo));
        let options = service.get_folder_uploads(1).await.unwrap();

        assert_eq!(options.len(), 2);
        assert_eq!(options[0].id, 3);
        assert_eq!(options[1].id, 1);
        assert_eq!(options[1].name, "acl.tar.gz");
    }
}
