//! Asset Fallback Layer
//!
//! Best-effort static responses for the asset paths of a mirrored site.
//! Script, font, and image requests degrade to empty or placeholder bodies
//! with a guessed content type when the underlying file is absent, so a
//! browser loading the mirrored page never sees a hard error for a missing
//! asset. Two static mounts additionally serve the mirror directory under
//! its literal-space and percent-encoded-space URL prefixes.
//!
//! Every handler here is stateless request-to-response; the only IO is
//! bounded local-disk reads through `tokio::fs`.

use std::path::{Component, Path as FsPath, PathBuf};

use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;

use crate::http_router::AppState;

/// Directory under the assets root holding the mirrored site's files.
///
/// The name carries a literal space; requests arrive with the space
/// percent-encoded or double-encoded, which is why the router mounts the
/// directory under both spellings.
pub const MIRROR_DIR: &str = "Site Mirror_files";

/// Locations of the served documents and the mirrored files on disk.
#[derive(Debug, Clone)]
pub struct AssetConfig {
    root: PathBuf,
}

impl AssetConfig {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Path of a served HTML document under the assets root.
    pub fn page(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }

    /// Path of the mirrored-site directory.
    pub fn mirror_dir(&self) -> PathBuf {
        self.root.join(MIRROR_DIR)
    }
}

/// Routes for the asset fallback layer.
///
/// The `boot` shim is registered before the wildcard mounts; static matches
/// win over the wildcard, so both spellings of the prefix resolve it first.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/scripts/{script}", get(script_fallback))
        .route("/fonts/{font}", get(font_fallback))
        .route("/track/assets/resources/images/{image}", get(image_fallback))
        .route("/akam-sw.js", get(service_worker))
        .route("/Site Mirror_files/boot", get(boot_script).post(boot_post))
        .route("/Site%20Mirror_files/boot", get(boot_script).post(boot_post))
        .route("/Site Mirror_files/{*path}", get(mirror_file))
        .route("/Site%20Mirror_files/{*path}", get(mirror_file))
}

/// `GET /scripts/{name}.js`
///
/// Tries the mirror directory's filename variants in order — saved-page
/// `.download` suffix first, then the plain `.js`, then the bare name — and
/// serves the first hit. A miss is answered with a placeholder comment
/// rather than an error.
async fn script_fallback(State(state): State<AppState>, Path(script): Path<String>) -> Response {
    let Some(name) = script.strip_suffix(".js") else {
        return StatusCode::NOT_FOUND.into_response();
    };

    let candidates = [
        format!("{name}.js.download"),
        format!("{name}.js"),
        name.to_string(),
    ];

    for candidate in &candidates {
        let Some(path) = safe_join(&state.assets.mirror_dir(), candidate) else {
            continue;
        };
        if let Ok(bytes) = tokio::fs::read(&path).await {
            return ([(header::CONTENT_TYPE, "application/javascript")], bytes).into_response();
        }
    }

    (
        [(header::CONTENT_TYPE, "application/javascript")],
        "// Script not found",
    )
        .into_response()
}

/// `GET /fonts/{name}`
///
/// Serves the font from the mirror directory when present; a missing font
/// becomes an empty `application/octet-stream` body.
async fn font_fallback(State(state): State<AppState>, Path(font): Path<String>) -> Response {
    if let Some(path) = safe_join(&state.assets.mirror_dir(), &font) {
        if let Ok(bytes) = tokio::fs::read(&path).await {
            return ([(header::CONTENT_TYPE, font_content_type(&font))], bytes).into_response();
        }
    }

    ([(header::CONTENT_TYPE, "application/octet-stream")], "").into_response()
}

/// `GET /track/assets/resources/images/{name}`
///
/// The mirrored page references tracker imagery that is never on disk; the
/// response is always an empty body with an extension-guessed image type.
async fn image_fallback(Path(image): Path<String>) -> Response {
    ([(header::CONTENT_TYPE, image_content_type(&image))], "").into_response()
}

/// `GET /akam-sw.js` — service-worker registration shim.
async fn service_worker() -> Response {
    (
        [(header::CONTENT_TYPE, "application/javascript")],
        "// Service worker stub",
    )
        .into_response()
}

/// `GET <mirror>/boot` — the mirrored site's internal bootstrap script.
async fn boot_script() -> Response {
    (
        [(header::CONTENT_TYPE, "application/javascript")],
        "// Bootstrap script stub",
    )
        .into_response()
}

/// `POST <mirror>/boot` — the bootstrap endpoint expects a JSON object back.
async fn boot_post() -> Response {
    ([(header::CONTENT_TYPE, "application/json")], "{}").into_response()
}

/// `GET /Site Mirror_files/{*path}` (and the `%20` spelling)
///
/// Plain static serving of the mirror directory with the fixed
/// extension-to-content-type mapping. This is the one place in the layer
/// that answers 404 for a missing file.
async fn mirror_file(State(state): State<AppState>, Path(path): Path<String>) -> Response {
    let Some(full) = safe_join(&state.assets.mirror_dir(), &path) else {
        return StatusCode::NOT_FOUND.into_response();
    };

    match tokio::fs::read(&full).await {
        Ok(bytes) => ([(header::CONTENT_TYPE, mirror_content_type(&path))], bytes).into_response(),
        Err(_) => StatusCode::NOT_FOUND.into_response(),
    }
}

/// Joins a request-supplied relative path onto `base`, refusing anything
/// that is not a plain chain of normal components. The wildcard segment is
/// percent-decoded by the extractor, so `..` and absolute components must be
/// rejected before touching the filesystem.
fn safe_join(base: &FsPath, relative: &str) -> Option<PathBuf> {
    let relative = FsPath::new(relative);
    if relative
        .components()
        .all(|c| matches!(c, Component::Normal(_)))
    {
        Some(base.join(relative))
    } else {
        None
    }
}

/// Extension-based content types for the static mounts.
///
/// The `.js.download` suffix is how saved pages name downloaded scripts; it
/// is served as JavaScript like the plain `.js`.
pub fn mirror_content_type(path: &str) -> &'static str {
    let path = path.to_ascii_lowercase();
    if path.ends_with(".js") || path.ends_with(".js.download") {
        "application/javascript"
    } else if path.ends_with(".css") {
        "text/css"
    } else if path.ends_with(".svg") {
        "image/svg+xml"
    } else if path.ends_with(".woff") || path.ends_with(".woff2") {
        "font/woff2"
    } else if path.ends_with(".ttf") {
        "font/ttf"
    } else if path.ends_with(".gif") {
        "image/gif"
    } else if path.ends_with(".png") {
        "image/png"
    } else if path.ends_with(".jpg") || path.ends_with(".jpeg") {
        "image/jpeg"
    } else {
        "application/octet-stream"
    }
}

/// Content types for the font fallback. `.woff` is served as `font/woff2`
/// as well; the mirrored stylesheets only distinguish woff-family from ttf.
fn font_content_type(name: &str) -> &'static str {
    let name = name.to_ascii_lowercase();
    if name.ends_with(".woff") || name.ends_with(".woff2") {
        "font/woff2"
    } else if name.ends_with(".ttf") {
        "font/ttf"
    } else {
        "application/octet-stream"
    }
}

/// Content types for the image fallback; unknown extensions degrade to gif.
fn image_content_type(name: &str) -> &'static str {
    let name = name.to_ascii_lowercase();
    if name.ends_with(".png") {
        "image/png"
    } else if name.ends_with(".jpg") || name.ends_with(".jpeg") {
        "image/jpeg"
    } else {
        "image/gif"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mirror_content_type_mapping() {
        assert_eq!(mirror_content_type("app.js"), "application/javascript");
        assert_eq!(mirror_content_type("app.js.download"), "application/javascript");
        assert_eq!(mirror_content_type("style.css"), "text/css");
        assert_eq!(mirror_content_type("logo.svg"), "image/svg+xml");
        assert_eq!(mirror_content_type("font.woff"), "font/woff2");
        assert_eq!(mirror_content_type("font.woff2"), "font/woff2");
        assert_eq!(mirror_content_type("font.ttf"), "font/ttf");
        assert_eq!(mirror_content_type("spinner.gif"), "image/gif");
        assert_eq!(mirror_content_type("photo.PNG"), "image/png");
        assert_eq!(mirror_content_type("photo.jpeg"), "image/jpeg");
        assert_eq!(mirror_content_type("data.bin"), "application/octet-stream");
    }

    #[test]
    fn test_font_content_type_mapping() {
        assert_eq!(font_content_type("body.woff"), "font/woff2");
        assert_eq!(font_content_type("body.woff2"), "font/woff2");
        assert_eq!(font_content_type("body.TTF"), "font/ttf");
        assert_eq!(font_content_type("body.eot"), "application/octet-stream");
    }

    #[test]
    fn test_image_content_type_defaults_to_gif() {
        assert_eq!(image_content_type("pixel.gif"), "image/gif");
        assert_eq!(image_content_type("logo.png"), "image/png");
        assert_eq!(image_content_type("photo.jpg"), "image/jpeg");
        assert_eq!(image_content_type("unknown.webp"), "image/gif");
        assert_eq!(image_content_type("no-extension"), "image/gif");
    }

    #[test]
    fn test_safe_join_accepts_nested_names() {
        let base = FsPath::new("/srv/assets");
        assert_eq!(
            safe_join(base, "css/app.css"),
            Some(PathBuf::from("/srv/assets/css/app.css"))
        );
    }

    #[test]
    fn test_safe_join_rejects_traversal() {
        let base = FsPath::new("/srv/assets");
        assert_eq!(safe_join(base, "../secrets.txt"), None);
        assert_eq!(safe_join(base, "css/../../secrets.txt"), None);
        assert_eq!(safe_join(base, "/etc/passwd"), None);
    }
}
