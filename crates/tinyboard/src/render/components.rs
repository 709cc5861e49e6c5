//! Shared HTML components used by the board and thread pages.
//!
//! These are maud functions that return `Markup` fragments for composition
//! into full pages.

use maud::{DOCTYPE, Markup, PreEscaped, html};

use crate::attachment::{ACCEPTED_EXTENSIONS, AttachmentKind};
use crate::post::{MESSAGE_MAX_CHARS, TITLE_MAX_CHARS};
use crate::view::PostView;

/// Inline CSS for all board pages.
pub const PAGE_CSS: &str = r#"
*{box-sizing:border-box}
:root{--bg:#eef2ff;--fg:#111;--fg2:#555;--accent:#34345c;--border:#b7c5d9}
body{font-family:arial,helvetica,sans-serif;font-size:14px;color:var(--fg);background:var(--bg);margin:0;padding:1rem}
main{max-width:860px;margin:0 auto}
a{color:var(--accent)}
hr{border:none;border-top:1px solid var(--border);margin:1rem 0}
.post-form,.reply-form{display:inline-block;padding:.5rem;background:#d6daf0;border:1px solid var(--border)}
.post-form input[type=text],.reply-form input[type=text]{width:16rem}
.post-form textarea,.reply-form textarea{width:24rem;height:6rem}
.back-link{display:inline-block;margin-bottom:.75rem}
.reply-link{float:right;font-size:.85rem}
.post h3,.original-post h3{color:#0f0c5d;margin:.5rem 0 .25rem}
.reply h4{margin:.5rem 0 .25rem;color:var(--fg2)}
.message{white-space:pre-wrap;word-break:break-word;margin:.25rem 0}
.media{display:block;margin:.25rem 0}
img.media,video.media{object-fit:contain;background:#000}
.pagination-links{display:flex;gap:1rem}
.footer{text-align:center;margin-top:2rem;font-size:.8rem;color:var(--fg2)}
"#;

/// Inline CSS for error pages.
pub const ERROR_CSS: &str = r#"
*{margin:0;padding:0;box-sizing:border-box}
body{font-family:arial,helvetica,sans-serif;display:flex;justify-content:center;align-items:center;min-height:100vh;background:#eef2ff;color:#111;padding:1rem}
.error-page{text-align:center;max-width:400px}
.error-page h1{font-size:1.5rem;margin-bottom:.75rem}
.error-page p{color:#555;margin-bottom:1rem;line-height:1.5}
.error-page a{color:#34345c}
"#;

/// Fallback text inside `<video>` for clients without video support.
pub const VIDEO_FALLBACK: &str = "Your browser does not support the video tag.";

/// Fallback text inside `<audio>` for clients without audio support.
pub const AUDIO_FALLBACK: &str = "Your browser does not support the audio element.";

/// Edge length of the fixed box images and videos are displayed in.
const MEDIA_BOX_PX: u32 = 200;

/// Render the full HTML page shell.
pub fn page_shell(title: &str, site_name: &str, body_content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) " - " (site_name) }
                style { (PreEscaped(PAGE_CSS)) }
            }
            body {
                main { (body_content) }
                footer class="footer" { (site_name) }
            }
        }
    }
}

/// Render the submission form.
///
/// With a `parent_id` the form posts a reply to that thread, otherwise it
/// starts a new thread.
pub fn post_form(parent_id: Option<&str>) -> Markup {
    let class = if parent_id.is_some() {
        "reply-form"
    } else {
        "post-form"
    };

    html! {
        form action="/submit" method="post" enctype="multipart/form-data" class=(class) {
            @if let Some(id) = parent_id {
                input type="hidden" name="parent_id" value=(id);
            }
            input type="text" name="title" placeholder="Title" maxlength=(TITLE_MAX_CHARS) required;
            br;
            textarea name="message" placeholder="Message" maxlength=(MESSAGE_MAX_CHARS) required {}
            br;
            input type="file" name="file" accept=(ACCEPTED_EXTENSIONS);
            br;
            button type="submit" { "Submit" }
        }
    }
}

/// Render the media element for a post's attachment.
///
/// Dispatches once on the cached [`AttachmentKind`]; posts without an
/// attachment render nothing.
pub fn attachment_media(view: &PostView, upload_prefix: &str) -> Markup {
    if !view.attachment.is_present() {
        return html! {};
    }
    let url = view.attachment_url(upload_prefix).unwrap_or_default();
    let mime = view.attachment.mime_type();

    html! {
        @match &view.attachment {
            AttachmentKind::None => {}
            AttachmentKind::Image => {
                img class="media" src=(url) width=(MEDIA_BOX_PX) height=(MEDIA_BOX_PX) alt="Image";
            }
            AttachmentKind::Video { .. } => {
                video class="media" width=(MEDIA_BOX_PX) height=(MEDIA_BOX_PX) controls="" {
                    source src=(url) type=[mime];
                    (VIDEO_FALLBACK)
                }
            }
            AttachmentKind::Audio => {
                audio class="media" controls="" {
                    source src=(url) type=[mime];
                    (AUDIO_FALLBACK)
                }
            }
            AttachmentKind::Generic => {
                a class="media" href=(url) { "Download file" }
            }
        }
    }
}

/// Render the message body of a post.
pub fn message(text: &str) -> Markup {
    html! {
        p class="message" { (text) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::post::Post;

    fn view_with_file(file: Option<&str>) -> PostView {
        PostView::root(Post {
            id: "1".to_string(),
            parent_id: None,
            title: Some("t".to_string()),
            message: "m".to_string(),
            file: file.map(str::to_string),
            timestamp: 0,
        })
    }

    fn media(file: Option<&str>) -> String {
        attachment_media(&view_with_file(file), "/static/uploads").into_string()
    }

    #[test]
    fn media_none_is_empty() {
        assert_eq!(media(None), "");
    }

    #[test]
    fn media_image() {
        let html = media(Some("pic.png"));
        assert!(html.starts_with("<img"));
        assert!(html.contains(r#"src="/static/uploads/pic.png""#));
        assert!(html.contains(r#"width="200""#));
        assert!(html.contains(r#"height="200""#));
    }

    #[test]
    fn media_video_uses_extension_subtype() {
        let html = media(Some("clip.webm"));
        assert!(html.contains("<video"));
        assert!(html.contains(r#"type="video/webm""#));
        assert!(html.contains(VIDEO_FALLBACK));
    }

    #[test]
    fn media_audio_is_mpeg() {
        let html = media(Some("song.mp3"));
        assert!(html.contains("<audio"));
        assert!(html.contains(r#"type="audio/mpeg""#));
        assert!(html.contains(AUDIO_FALLBACK));
    }

    #[test]
    fn media_generic_is_download_link() {
        let html = media(Some("archive.zip"));
        assert!(html.contains(r#"href="/static/uploads/archive.zip""#));
        assert!(html.contains("Download file"));
        assert!(!html.contains("<img"));
        assert!(!html.contains("<video"));
    }

    #[test]
    fn media_escapes_filename() {
        let html = media(Some("x\"onerror=\"alert(1).png"));
        assert!(!html.contains(r#""onerror=""#));
        assert!(html.contains("&quot;"));
    }

    #[test]
    fn reply_form_carries_parent_id() {
        let html = post_form(Some("abc")).into_string();
        assert!(html.contains(r#"name="parent_id" value="abc""#));
        assert!(html.contains(r#"class="reply-form""#));
        assert!(html.contains(r#"maxlength="15""#));
        assert!(html.contains(r#"maxlength="100000""#));
        assert!(html.contains(r#"accept=".jpg,.gif,.png,.mp3,.mp4,.webm,.webp""#));
    }

    #[test]
    fn thread_form_has_no_parent_id() {
        let html = post_form(None).into_string();
        assert!(!html.contains("parent_id"));
        assert!(html.contains(r#"class="post-form""#));
    }

    #[test]
    fn message_is_escaped() {
        let html = message("<script>alert(1)</script>").into_string();
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<script>"));
    }
}
