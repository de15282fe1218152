use actix_multipart::Multipart;
use actix_web::{post, web, HttpRequest, HttpResponse};
use futures_util::StreamExt as _;
use uuid::Uuid;

use kennedia_cms::common::{enveloped, MediaError};
use kennedia_cms::db;
use kennedia_cms::models::{MediaItemCreate, MediaKind};
use kennedia_cms::services::banner;

use super::super::error::ApiResult;
use super::super::helpers::require_admin;
use super::super::state::AppState;

/// Hard ceiling while streaming, before the purpose field is known.
const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// What the client says the file is for; each purpose carries its own
/// byte ceiling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum UploadPurpose {
    Logo,
    Image,
    Video,
}

impl UploadPurpose {
    fn parse(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "logo" => Self::Logo,
            "video" => Self::Video,
            _ => Self::Image,
        }
    }

    fn max_bytes(&self) -> usize {
        match self {
            Self::Logo => 2 * 1024 * 1024,
            Self::Image => 5 * 1024 * 1024,
            Self::Video => 10 * 1024 * 1024,
        }
    }

    /// Images are accepted everywhere; video MIME types only for the
    /// video purpose.
    fn allows(&self, mime: &str) -> bool {
        const IMAGES: &[&str] = &["image/png", "image/jpeg", "image/webp", "image/gif"];
        const VIDEOS: &[&str] = &["video/mp4", "video/webm"];

        IMAGES.contains(&mime) || (*self == Self::Video && VIDEOS.contains(&mime))
    }
}

fn extension_for(mime: &str) -> &'static str {
    match mime {
        "image/png" => "png",
        "image/jpeg" => "jpg",
        "image/webp" => "webp",
        "image/gif" => "gif",
        "video/mp4" => "mp4",
        "video/webm" => "webm",
        _ => "bin",
    }
}

struct UploadFields {
    mime: String,
    bytes: Vec<u8>,
    kind: Option<MediaKind>,
    alt: Option<String>,
    purpose: UploadPurpose,
}

/// Multipart fields arrive in client order, so everything is collected
/// first and the purpose-dependent checks run afterwards.
async fn read_upload(payload: &mut Multipart) -> Result<UploadFields, MediaError> {
    let mut file: Option<(String, Vec<u8>)> = None;
    let mut kind: Option<MediaKind> = None;
    let mut alt: Option<String> = None;
    let mut purpose = UploadPurpose::Image;

    while let Some(item) = payload.next().await {
        let mut field =
            item.map_err(|e| MediaError::Multipart(e.to_string()))?;
        let name = field
            .content_disposition()
            .get_name()
            .unwrap_or_default()
            .to_string();

        let mut buf: Vec<u8> = Vec::new();
        while let Some(chunk) = field.next().await {
            let data =
                chunk.map_err(|e| MediaError::Multipart(e.to_string()))?;
            if buf.len().saturating_add(data.len()) > MAX_UPLOAD_BYTES {
                return Err(MediaError::TooLarge {
                    got: buf.len() + data.len(),
                    max: MAX_UPLOAD_BYTES,
                });
            }
            buf.extend_from_slice(&data);
        }

        match name.as_str() {
            "file" => {
                let mime = field
                    .content_type()
                    .map(|m| m.essence_str().to_string())
                    .unwrap_or_default();
                file = Some((mime, buf));
            }
            "type" => {
                let text = String::from_utf8_lossy(&buf);
                kind = text.trim().parse().ok();
            }
            "alt" => {
                let text = String::from_utf8_lossy(&buf).trim().to_string();
                if !text.is_empty() {
                    alt = Some(text);
                }
            }
            "purpose" => {
                purpose = UploadPurpose::parse(&String::from_utf8_lossy(&buf));
            }
            _ => {}
        }
    }

    let (mime, bytes) = file.ok_or(MediaError::MissingFile)?;
    if bytes.is_empty() {
        return Err(MediaError::EmptyFile);
    }

    Ok(UploadFields {
        mime,
        bytes,
        kind,
        alt,
        purpose,
    })
}

#[post("/api/media")]
pub async fn upload_media(
    state: web::Data<AppState>,
    req: HttpRequest,
    mut payload: Multipart,
) -> ApiResult<HttpResponse> {
    require_admin(&state.pool, &req).await?;

    let upload = read_upload(&mut payload).await?;

    if upload.bytes.len() > upload.purpose.max_bytes() {
        return Err(MediaError::TooLarge {
            got: upload.bytes.len(),
            max: upload.purpose.max_bytes(),
        }
        .into());
    }
    if !upload.purpose.allows(&upload.mime) {
        return Err(MediaError::UnsupportedType(upload.mime).into());
    }

    let kind = upload.kind.unwrap_or(if upload.mime.starts_with("video/") {
        MediaKind::Video
    } else {
        MediaKind::Image
    });

    // Images are decoded so the stored row carries its real dimensions
    // and the banner flag news items depend on.
    let (width, height, is_banner) = if upload.mime.starts_with("image/") {
        let img = image::load_from_memory(&upload.bytes)
            .map_err(|e| MediaError::InvalidImage(e.to_string()))?;
        let (w, h) = (img.width(), img.height());
        (Some(w as i32), Some(h as i32), banner::is_banner(w, h))
    } else {
        (None, None, false)
    };

    let filename = format!("{}.{}", Uuid::new_v4(), extension_for(&upload.mime));
    let path = state.upload_dir.join(&filename);
    tokio::fs::write(&path, &upload.bytes)
        .await
        .map_err(MediaError::Io)?;

    let data = MediaItemCreate {
        url: format!("/uploads/{filename}"),
        kind,
        alt: upload.alt,
        width,
        height,
        is_banner,
    };

    let media = match db::create_media(&state.pool, &data).await {
        Ok(m) => m,
        Err(e) => {
            // No orphan files when the row never landed.
            let _ = tokio::fs::remove_file(&path).await;
            return Err(MediaError::Database(e).into());
        }
    };

    tracing::info!(id = media.id, url = %media.url, banner = media.is_banner, "media uploaded");

    Ok(HttpResponse::Created().json(enveloped(media)))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(upload_media);
}
