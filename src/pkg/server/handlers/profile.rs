use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError, ValidationErrors};

use crate::{
    pkg::{
        internal::adaptors::profiles::{
            mutators::ProfileMutator, selectors::ProfileSelector, spec::ImageWrite,
        },
        server::state::AppState,
    },
    prelude::{Error, Result},
};

#[derive(Deserialize, Validate)]
pub struct UploadImageInput {
    #[serde(rename = "userId", default)]
    #[validate(length(min = 1, message = "userId is required"))]
    pub user_id: String,
    #[serde(rename = "imageData", default)]
    #[validate(
        length(min = 1, message = "imageData is required"),
        custom(function = "validate_image_data")
    )]
    pub image_data: String,
}

#[derive(Deserialize, Validate)]
pub struct DeleteImageInput {
    #[serde(rename = "userId", default)]
    #[validate(length(min = 1, message = "userId is required"))]
    pub user_id: String,
}

#[derive(Serialize, Debug)]
pub struct Ack {
    pub success: bool,
    pub message: String,
}

#[derive(Serialize, Debug)]
pub struct ProfileImage {
    pub success: bool,
    #[serde(rename = "profileImage")]
    pub profile_image: String,
}

/// Accepts `data:image/<subtype>;base64,<payload>`.
pub fn is_image_data_uri(data: &str) -> bool {
    let Some(rest) = data.strip_prefix("data:image/") else {
        return false;
    };
    let Some((subtype, payload)) = rest.split_once(";base64,") else {
        return false;
    };
    !subtype.is_empty()
        && subtype
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '.' | '-'))
        && !payload.is_empty()
}

fn validate_image_data(data: &str) -> std::result::Result<(), ValidationError> {
    if data.is_empty() || is_image_data_uri(data) {
        return Ok(());
    }
    let mut err = ValidationError::new("image_data");
    err.message = Some("imageData must be a base64 encoded image data uri".into());
    Err(err)
}

fn invalid(errors: ValidationErrors) -> Error {
    let mut messages: Vec<String> = errors
        .field_errors()
        .values()
        .flat_map(|errs| errs.iter())
        .map(|e| match &e.message {
            Some(m) => m.to_string(),
            None => e.code.to_string(),
        })
        .collect();
    messages.sort();
    Error::BadRequest(messages.join(", "))
}

fn malformed(rejection: JsonRejection) -> Error {
    Error::BadRequest(rejection.body_text())
}

pub async fn upload(
    State(state): State<AppState>,
    payload: std::result::Result<Json<UploadImageInput>, JsonRejection>,
) -> Result<Json<Ack>> {
    let Json(input) = payload.map_err(malformed)?;
    input.validate().map_err(invalid)?;
    let written = state
        .store
        .set_image(&input.user_id, &input.image_data)
        .await?;
    tracing::info!("profile image {:?} for user {}", written, &input.user_id);
    let message = match written {
        ImageWrite::Created => "Profile image uploaded successfully",
        ImageWrite::Updated => "Profile image updated successfully",
    };
    Ok(Json(Ack {
        success: true,
        message: message.to_string(),
    }))
}

pub async fn fetch(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<ProfileImage>> {
    let image = state
        .store
        .get_by_user_id(&user_id)
        .await?
        .and_then(|profile| profile.profile_image);
    match image {
        Some(profile_image) => Ok(Json(ProfileImage {
            success: true,
            profile_image,
        })),
        None => Err(Error::NotFound("Profile image not found".into())),
    }
}

pub async fn remove(
    State(state): State<AppState>,
    payload: std::result::Result<Json<DeleteImageInput>, JsonRejection>,
) -> Result<Json<Ack>> {
    let Json(input) = payload.map_err(malformed)?;
    input.validate().map_err(invalid)?;
    let message = if state.store.remove_image(&input.user_id).await? {
        tracing::info!("removed profile image for user {}", &input.user_id);
        "Profile image deleted successfully"
    } else {
        "No profile found for user"
    };
    Ok(Json(Ack {
        success: true,
        message: message.to_string(),
    }))
}
