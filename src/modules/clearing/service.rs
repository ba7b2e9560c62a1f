use std::sync::Arc;

use crate::{
    api::error,
    modules::{
        clearing::{
            model::{FileDecision, NO_ASSERTION, decision_label},
            repository::ClearingRepository,
        },
        upload::repository::UploadRepository,
    },
};

#[derive(Clone)]
pub struct ClearingService<C, U>
where
    C: ClearingRepository + Send + Sync,
    U: UploadRepository + Send + Sync,
{
    clearing_repo: Arc<C>,
    upload_repo: Arc<U>,
}

impl<C, U> ClearingService<C, U>
where
    C: ClearingRepository + Send + Sync,
    U: UploadRepository + Send + Sync,
{
    pub fn with_dependencies(clearing_repo: Arc<C>, upload_repo: Arc<U>) -> Self {
        ClearingService { clearing_repo, upload_repo }
    }

    /// Decision labels for every file under the item, in decision order.
    /// A file set with no decisions at all reports the single `NOASSERTION`
    /// sentinel instead of an empty list.
    pub async fn get_file_decisions(
        &self,
        item_id: i64,
    ) -> Result<Vec<FileDecision>, error::SystemError> {
        let bounds = self
            .upload_repo
            .item_tree_bounds(item_id)
            .await?
            .ok_or_else(|| error::SystemError::not_found("Item does not exist"))?;

        let decisions = self.clearing_repo.decisions_in_scope(&bounds).await?;
        if decisions.is_empty() {
            return Ok(vec![FileDecision {
                clearing_status: NO_ASSERTION.to_string(),
                file_id: item_id,
            }]);
        }

        Ok(decisions
            .into_iter()
            .map(|decision| FileDecision {
                clearing_status: decision_label(decision.decision_type),
                file_id: decision.uploadtree_fk,
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::clearing::repository::MockClearingRepository;
    use crate::modules::clearing::schema::ClearingDecisionEntity;
    use crate::modules::upload::repository::MockUploadRepository;
    use crate::modules::upload::schema::ItemTreeBounds;

    fn bounds(item_id: i64) -> ItemTreeBounds {
        ItemTreeBounds { item_id, upload_id: 4, lft: 1, rgt: 20 }
    }

    fn decision(id: i64, file_id: i64, decision_type: i32) -> ClearingDecisionEntity {
        ClearingDecisionEntity {
            clearing_decision_pk: id,
            uploadtree_fk: file_id,
            decision_type,
            user_fk: 2,
            date_added: chrono::Utc::now(),
        }
    }

    #[actix_web::test]
    async fn test_no_decisions_returns_no_assertion_sentinel() {
        let mut upload_repo = MockUploadRepository::new();
        upload_repo.expect_item_tree_bounds().returning(|id| Ok(Some(bounds(id))));
        let mut clearing_repo = MockClearingRepository::new();
        clearing_repo.expect_decisions_in_scope().returning(|_| Ok(Vec::new()));

        let service =
            ClearingService::with_dependencies(Arc::new(clearing_repo), Arc::new(upload_repo));
        let decisions = service.get_file_decisions(98).await.unwrap();

        assert_eq!(
            decisions,
            vec![FileDecision { clearing_status: NO_ASSERTION.to_string(), file_id: 98 }]
        );
    }

    #[actix_web::test]
    async fn test_every_decision_is_returned_in_input_order() {
        let mut upload_repo = MockUploadRepository::new();
        upload_repo.expect_item_tree_bounds().returning(|id| Ok(Some(bounds(id))));
        let mut clearing_repo = MockClearingRepository::new();
        clearing_repo.expect_decisions_in_scope().returning(|_| {
            Ok(vec![decision(10, 101, 4), decision(11, 102, 3), decision(12, 103, 5)])
        });

        let service =
            ClearingService::with_dependencies(Arc::new(clearing_repo), Arc::new(upload_repo));
        let decisions = service.get_file_decisions(98).await.unwrap();

        assert_eq!(decisions.len(), 3);
        assert_eq!(
            decisions,
            vec![
                FileDecision { clearing_status: "Identified".to_string(), file_id: 101 },
                FileDecision { clearing_status: "Irrelevant".to_string(), file_id: 102 },
                FileDecision { clearing_status: "Do not use".to_string(), file_id: 103 },
            ]
        );
    }

    #[actix_web::test]
    async fn test_missing_item_is_reported_not_found() {
        let mut upload_repo = MockUploadRepository::new();
        upload_repo.expect_item_tree_bounds().returning(|_| Ok(None));
        let mut clearing_repo = MockClearingRepository::new();
        clearing_repo.expect_decisions_in_scope().never();

        let service =
            ClearingService::with_dependencies(Arc::new(clearing_repo), Arc::new(upload_repo));
        let err = service.get_file_decisions(98).await.unwrap_err();

        assert!(
            matches!(err, error::SystemError::NotFound(msg) if msg == "Item does not exist")
        );
    }
}
