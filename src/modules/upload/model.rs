use serde::{Deserialize, Serialize};

use crate::modules::upload::schema::{FolderEntity, UploadEntity};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FolderResponse {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
}

impl From<FolderEntity> for FolderResponse {
    fn from(folder: FolderEntity) -> Self {
        FolderResponse {
            id: folder.folder_pk,
            name: folder.folder_name,
            description: folder.folder_desc,
        }
    }
}

/// One entry of the upload selection list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadOption {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

impl From<UploadEntity> for UploadOption {
    fn from(upload: UploadEntity) -> Self {
        UploadOption {
            id: upload.upload_pk,
            name: upload.upload_filename,
            description: upload.upload_desc,
            timestamp: upload.upload_ts,
        }
    }
}
