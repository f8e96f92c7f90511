//! Folder handlers.

use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;

use crate::folder::{FileRepository, FolderRepository, NewFolder};
use crate::web::dto::{
    CreateFolderRequest, DeleteFolderResponse, FileInfo, FolderContentsResponse,
    FolderCreateResponse, FolderInfo, ValidatedJson,
};
use crate::web::error::ApiError;
use crate::web::handlers::AppState;
use crate::web::middleware::AuthUser;
use crate::CabinetError;

/// POST /api/folders/:parent_id - Create a folder under a parent.
pub async fn create_folder(
    State(state): State<Arc<AppState>>,
    AuthUser(claims): AuthUser,
    Path(parent_id): Path<i64>,
    ValidatedJson(req): ValidatedJson<CreateFolderRequest>,
) -> Result<Json<FolderCreateResponse>, ApiError> {
    let repo = FolderRepository::new(state.db.pool());

    let new_folder = NewFolder::new(&req.folder_name, claims.sub).with_parent(parent_id);
    let folder = repo.create(&new_folder).await.map_err(|e| match e {
        CabinetError::Duplicate(_) => {
            ApiError::conflict("A folder with that name already exists")
        }
        CabinetError::NotFound(_) => ApiError::not_found("Parent folder does not exist"),
        e => {
            tracing::error!("Failed to create folder: {}", e);
            ApiError::internal("Failed to create folder")
        }
    })?;

    tracing::info!(folder_id = folder.id, parent_id, "Folder created");

    let response = FolderCreateResponse {
        folder_id: folder.id,
        folder_name: folder.name,
        folder_owner: folder.owner_id,
    };

    Ok(Json(response))
}

/// GET /api/folders/:folder_id - List a folder's direct children and files.
pub async fn get_folder(
    State(state): State<Arc<AppState>>,
    AuthUser(_claims): AuthUser,
    Path(folder_id): Path<i64>,
) -> Result<Json<FolderContentsResponse>, ApiError> {
    let folder_repo = FolderRepository::new(state.db.pool());

    let folder = folder_repo
        .get_by_id(folder_id)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get folder: {}", e);
            ApiError::internal("Failed to get folder")
        })?
        .ok_or_else(|| ApiError::not_found("Folder does not exist"))?;

    let children = folder_repo.list_children(folder.id).await.map_err(|e| {
        tracing::error!("Failed to list child folders: {}", e);
        ApiError::internal("Failed to list folder contents")
    })?;

    let file_repo = FileRepository::new(state.db.pool());
    let files = file_repo.list_by_folder(folder.id).await.map_err(|e| {
        tracing::error!("Failed to list files: {}", e);
        ApiError::internal("Failed to list folder contents")
    })?;

    let response = FolderContentsResponse {
        folders: children.into_iter().map(FolderInfo::from).collect(),
        files: files.into_iter().map(FileInfo::from).collect(),
    };

    Ok(Json(response))
}

/// DELETE /api/folders/:folder_id - Delete a folder and its subtree.
pub async fn delete_folder(
    State(state): State<Arc<AppState>>,
    AuthUser(_claims): AuthUser,
    Path(folder_id): Path<i64>,
) -> Result<Json<DeleteFolderResponse>, ApiError> {
    let repo = FolderRepository::new(state.db.pool());

    let folder = repo
        .get_by_id(folder_id)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get folder: {}", e);
            ApiError::internal("Failed to delete folder")
        })?
        .ok_or_else(|| ApiError::not_found("Folder does not exist"))?;

    repo.delete(folder.id).await.map_err(|e| {
        tracing::error!("Failed to delete folder: {}", e);
        ApiError::internal("Failed to delete folder")
    })?;

    tracing::info!(folder_id = folder.id, name = %folder.name, "Folder deleted");

    let response = DeleteFolderResponse {
        response: format!("Folder {} removed", folder.name),
    };

    Ok(Json(response))
}
