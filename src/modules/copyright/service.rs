use std::sync::Arc;

use crate::{
    api::error,
    modules::{copyright::repository::CopyrightRepository, upload::repository::UploadRepository},
};

#[derive(Clone)]
pub struct CopyrightService<C, U>
where
    C: CopyrightRepository + Send + Sync,
    U: UploadRepository + Send + Sync,
{
    copyright_repo: Arc<C>,
    upload_repo: Arc<U>,
}

impl<C, U> CopyrightService<C, U>
where
    C: CopyrightRepository + Send + Sync,
    U: UploadRepository + Send + Sync,
{
    pub fn with_dependencies(copyright_repo: Arc<C>, upload_repo: Arc<U>) -> Self {
        CopyrightService { copyright_repo, upload_repo }
    }

    pub async fn update_file_copyright(
        &self,
        item_id: i64,
        hash: &str,
        content: &str,
        user_id: i64,
    ) -> Result<(), error::SystemError> {
        let bounds = self
            .upload_repo
            .item_tree_bounds(item_id)
            .await?
            .ok_or_else(|| error::SystemError::not_found("Item does not exist"))?;

        let updated =
            self.copyright_repo.update_statement(&bounds, hash, content, user_id).await?;
        if updated == 0 {
            log::info!("No copyright statements matched hash {hash} under item {item_id}");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::copyright::repository::MockCopyrightRepository;
    use crate::modules::upload::repository::MockUploadRepository;
    use crate::modules::upload::schema::ItemTreeBounds;
    use mockall::predicate::eq;

    const HASH: &str = "a35595408e32c9c7cd405b2a0530a39e";

    fn bounds(item_id: i64) -> ItemTreeBounds {
        ItemTreeBounds { item_id, upload_id: 4, lft: 112, rgt: 113 }
    }

    #[actix_web::test]
    async fn test_update_persists_content_under_hash() {
        let mut upload_repo = MockUploadRepository::new();
        upload_repo.expect_item_tree_bounds().with(eq(98)).returning(|id| Ok(Some(bounds(id))));

        let mut copyright_repo = MockCopyrightRepository::new();
        copyright_repo
            .expect_update_statement()
            .withf(|bounds, hash, content, user_id| {
                bounds.upload_id == 4 && hash == HASH && content == "text" && *user_id == 2
            })
            .times(1)
            .returning(|_, _, _, _| Ok(1));

        let service =
            CopyrightService::with_dependencies(Arc::new(copyright_repo), Arc::new(upload_repo));
        service.update_file_copyright(98, HASH, "text", 2).await.unwrap();
    }

    #[actix_web::test]
    async fn test_missing_item_skips_the_update() {
        let mut upload_repo = MockUploadRepository::new();
        upload_repo.expect_item_tree_bounds().returning(|_| Ok(None));

        let mut copyright_repo = MockCopyrightRepository::new();
        copyright_repo.expect_update_statement().never();

        let service =
            CopyrightService::with_dependencies(Arc::new(copyright_repo), Arc::new(upload_repo));
        let err = service.update_file_copyright(98, HASH, "text", 2).await.unwrap_err();

        assert!(
            matches!(err, error::SystemError::NotFound(msg) if msg == "Item does not exist")
        );
    }
}
