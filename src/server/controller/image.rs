use axum::{
    extract::{Multipart, Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ApiResponse, ErrorDto, MessageDto},
        kos::{GambarDto, ImageTypeQuery},
    },
    server::{
        controller::util::get_user::get_user,
        error::{validation::ValidationError, Error},
        model::app::AppState,
        service::image::ImageService,
    },
};

pub static IMAGE_TAG: &str = "image";

/// Fields read from an image upload form
#[derive(Default)]
struct ImageUpload {
    tipe_gambar_id: Option<i32>,
    file: Option<(String, Vec<u8>)>,
}

async fn read_upload(mut multipart: Multipart) -> Result<ImageUpload, Error> {
    let mut upload = ImageUpload::default();

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().map(str::to_string);

        match name.as_deref() {
            Some("file") => {
                let file_name = field.file_name().unwrap_or_default().to_string();
                let bytes = field.bytes().await?;

                upload.file = Some((file_name, bytes.to_vec()));
            }
            Some("tipe_gambar_id") => {
                let value = field.text().await?;
                let tipe_gambar_id = value.trim().parse::<i32>().map_err(|_| {
                    ValidationError::Invalid("Image type must be a number".to_string())
                })?;

                upload.tipe_gambar_id = Some(tipe_gambar_id);
            }
            _ => {}
        }
    }

    Ok(upload)
}

/// Upload a listing photo
///
/// Multipart form with a `file` field and a `tipe_gambar_id` field. The image type may also be
/// given as a query parameter, which the form field overrides.
#[utoipa::path(
    post,
    path = "/api/kos/{id}/images",
    tag = IMAGE_TAG,
    params(("id" = i32, Path, description = "Kos ID"), ImageTypeQuery),
    responses(
        (status = 201, description = "Image stored", body = ApiResponse<GambarDto>),
        (status = 400, description = "Missing file, unknown image type or unsupported extension", body = ErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Caller does not own the listing", body = ErrorDto),
        (status = 404, description = "Kos not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn upload_image(
    State(state): State<AppState>,
    headers: HeaderMap,
    session: Session,
    Path(kos_id): Path<i32>,
    Query(query): Query<ImageTypeQuery>,
    multipart: Multipart,
) -> Result<impl IntoResponse, Error> {
    let user = get_user(&state, &headers, &session).await?;

    let upload = read_upload(multipart).await?;

    let Some(tipe_gambar_id) = upload.tipe_gambar_id.or(query.tipe_gambar_id) else {
        return Err(ValidationError::Missing("Image type").into());
    };
    let Some((file_name, bytes)) = upload.file else {
        return Err(ValidationError::Missing("Image file").into());
    };

    let image = ImageService::new(&state.db, &state.storage)
        .upload(user.id, kos_id, tipe_gambar_id, &file_name, &bytes)
        .await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::ok(image))))
}

/// Delete a listing photo
#[utoipa::path(
    delete,
    path = "/api/images/{id}",
    tag = IMAGE_TAG,
    params(("id" = i32, Path, description = "Image ID")),
    responses(
        (status = 200, description = "Image deleted", body = MessageDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Caller does not own the listing", body = ErrorDto),
        (status = 404, description = "Image not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_image(
    State(state): State<AppState>,
    headers: HeaderMap,
    session: Session,
    Path(image_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user(&state, &headers, &session).await?;

    ImageService::new(&state.db, &state.storage)
        .delete(user.id, image_id)
        .await?;

    Ok(Json(MessageDto::new("Image deleted")))
}
