use serde::Serialize;
use sqlx::prelude::FromRow;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct FolderEntity {
    pub folder_pk: i64,
    pub folder_name: String,
    pub folder_desc: Option<String>,
}

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct UploadEntity {
    pub upload_pk: i64,
    pub upload_filename: String,
    pub upload_desc: Option<String>,
    pub upload_ts: chrono::DateTime<chrono::Utc>,
    pub folder_fk: i64,
}

/// Nested-set bounds of one uploadtree item. Every row with
/// `lft >= lft && rgt <= rgt` inside the same upload belongs to the
/// item's subtree.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct ItemTreeBounds {
    pub item_id: i64,
    pub upload_id: i64,
    pub lft: i64,
    pub rgt: i64,
}
