//! Attachment classification by filename extension.
//!
//! Every stored upload is mapped to exactly one [`AttachmentKind`], which the
//! renderer matches on to pick a media element. Classification looks only at
//! the extension after the final `.` and compares it case-sensitively against
//! small fixed allow-lists; this is not content sniffing.

/// Image extensions rendered inline as `<img>`.
const IMAGE_EXTENSIONS: &[&str] = &["jpg", "png", "gif", "webp"];

/// Video extensions rendered inline as `<video>`.
const VIDEO_EXTENSIONS: &[&str] = &["mp4", "webm"];

/// Audio extensions rendered inline as `<audio>`.
const AUDIO_EXTENSIONS: &[&str] = &["mp3"];

/// Value for the `accept` attribute of the upload input.
pub const ACCEPTED_EXTENSIONS: &str = ".jpg,.gif,.png,.mp3,.mp4,.webm,.webp";

/// Default URL prefix under which uploads are served.
pub const DEFAULT_UPLOAD_URL_PREFIX: &str = "/static/uploads";

/// How a post's attachment is rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttachmentKind {
    /// The post has no attachment.
    None,
    /// Inline image.
    Image,
    /// Inline video player. Carries the raw extension for the MIME subtype.
    Video {
        /// Extension as stored, e.g. `"mp4"`.
        extension: String,
    },
    /// Inline audio player.
    Audio,
    /// Anything else: rendered as a download link.
    Generic,
}

impl AttachmentKind {
    /// MIME type for the `<source>` element of media players.
    ///
    /// Audio is always reported as `audio/mpeg`, whatever the extension.
    pub fn mime_type(&self) -> Option<String> {
        match self {
            Self::Video { extension } => Some(format!("video/{extension}")),
            Self::Audio => Some("audio/mpeg".to_string()),
            Self::None | Self::Image | Self::Generic => None,
        }
    }

    /// Whether a media section is rendered at all.
    pub fn is_present(&self) -> bool {
        !matches!(self, Self::None)
    }
}

/// Classify a stored attachment path.
///
/// Total: an absent path is [`AttachmentKind::None`], any present path is
/// one of the four renderable kinds. Unknown or missing extensions fall
/// through to [`AttachmentKind::Generic`].
pub fn classify(path: Option<&str>) -> AttachmentKind {
    let Some(path) = path else {
        return AttachmentKind::None;
    };

    let extension = extension(path);

    if IMAGE_EXTENSIONS.contains(&extension) {
        AttachmentKind::Image
    } else if VIDEO_EXTENSIONS.contains(&extension) {
        AttachmentKind::Video {
            extension: extension.to_string(),
        }
    } else if AUDIO_EXTENSIONS.contains(&extension) {
        AttachmentKind::Audio
    } else {
        AttachmentKind::Generic
    }
}

/// Substring after the final `.`, or `""` when there is none.
pub fn extension(path: &str) -> &str {
    path.rsplit_once('.').map(|(_, ext)| ext).unwrap_or("")
}

/// Resolve a stored filename to the URL it is served from.
pub fn upload_url(prefix: &str, name: &str) -> String {
    format!("{}/{name}", prefix.trim_end_matches('/'))
}
