//! Thread page renderer.
//!
//! Layout: back link, reply form, separator, root post, separator, then each
//! reply closed by its own separator. Every post uses the same media dispatch;
//! only the heading differs (title vs. reply label).

use maud::{Markup, html};

use super::RenderContext;
use super::components::{attachment_media, message, page_shell, post_form};
use crate::view::PostView;

/// Render a complete thread page.
///
/// `replies` is consumed once, in order.
pub fn render_thread<I>(root: &PostView, replies: I, ctx: &RenderContext<'_>) -> Markup
where
    I: IntoIterator<Item = PostView>,
{
    let title = if root.display_title.is_empty() {
        "View Post"
    } else {
        root.display_title.as_str()
    };

    let body = html! {
        a href="/" class="back-link" { "Back to Main Board" }
        (post_form(Some(&root.id)))
        hr;
        div class="original-post" {
            (attachment_media(root, ctx.upload_prefix))
            h3 { (root.display_title) }
            (message(&root.message))
        }
        hr;
        div class="replies" {
            @for reply in replies {
                (reply_block(&reply, ctx))
            }
        }
    };

    page_shell(title, ctx.site_name, body)
}

fn reply_block(reply: &PostView, ctx: &RenderContext<'_>) -> Markup {
    html! {
        div class="reply" id=(reply.id) {
            (attachment_media(reply, ctx.upload_prefix))
            h4 { (reply.display_title) }
            (message(&reply.message))
            hr;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::post::Post;
    use crate::view::reply_views;

    const CTX: RenderContext<'static> = RenderContext {
        site_name: "tinyboard",
        upload_prefix: "/static/uploads",
    };

    fn root(file: Option<&str>) -> PostView {
        PostView::root(Post {
            id: "42".to_string(),
            parent_id: None,
            title: Some("Hello".to_string()),
            message: "World".to_string(),
            file: file.map(str::to_string),
            timestamp: 1,
        })
    }

    fn reply(id: &str, message: &str, file: Option<&str>) -> Post {
        Post {
            id: id.to_string(),
            parent_id: Some("42".to_string()),
            title: None,
            message: message.to_string(),
            file: file.map(str::to_string),
            timestamp: 2,
        }
    }

    fn sample_replies() -> Vec<Post> {
        vec![reply("r1", "nice", None), reply("r2", "cool", Some("clip.mp4"))]
    }

    #[test]
    fn renders_end_to_end_thread() {
        let html =
            render_thread(&root(Some("pic.png")), reply_views(sample_replies()), &CTX).into_string();

        let root_start = html.find(r#"class="original-post""#).unwrap();
        let replies_start = html.find(r#"class="replies""#).unwrap();
        let root_block = &html[root_start..replies_start];
        assert!(root_block.contains(r#"<img class="media" src="/static/uploads/pic.png""#));
        assert!(root_block.contains("<h3>Hello</h3>"));
        assert!(root_block.contains("World"));

        let reply1 = html.find(r#"id="r1""#).unwrap();
        let reply2 = html.find(r#"id="r2""#).unwrap();
        assert!(reply1 < reply2);

        let first = &html[reply1..reply2];
        assert!(first.contains("<h4>Reply 1</h4>"));
        assert!(!first.contains("<img"));
        assert!(!first.contains("<video"));
        assert!(!first.contains("<audio"));

        let second = &html[reply2..];
        assert!(second.contains("<h4>Reply 2</h4>"));
        assert!(second.contains(r#"type="video/mp4""#));
    }

    #[test]
    fn media_precedes_heading() {
        let html = render_thread(&root(Some("pic.png")), Vec::new(), &CTX).into_string();
        let img = html.find("<img").unwrap();
        let heading = html.find("<h3>").unwrap();
        assert!(img < heading);
    }

    #[test]
    fn layout_order() {
        let html = render_thread(&root(None), reply_views(sample_replies()), &CTX).into_string();
        let form = html.find(r#"name="parent_id" value="42""#).unwrap();
        let root_block = html.find(r#"class="original-post""#).unwrap();
        let replies = html.find(r#"class="replies""#).unwrap();
        assert!(form < root_block);
        assert!(root_block < replies);

        // Form separator, root separator, then one per reply.
        assert_eq!(html.matches("<hr>").count(), 4);
    }

    #[test]
    fn audio_root_uses_mpeg() {
        let html = render_thread(&root(Some("song.mp3")), Vec::new(), &CTX).into_string();
        assert!(html.contains("<audio"));
        assert!(html.contains(r#"type="audio/mpeg""#));
    }

    #[test]
    fn generic_root_is_download_link() {
        let html = render_thread(&root(Some("archive.zip")), Vec::new(), &CTX).into_string();
        assert!(html.contains(r#"<a class="media" href="/static/uploads/archive.zip">Download file</a>"#));
        assert!(!html.contains("<img"));
        assert!(!html.contains("<video"));
        assert!(!html.contains("<audio"));
    }

    #[test]
    fn rendering_is_idempotent() {
        let root = root(Some("pic.png"));
        let replies: Vec<_> = reply_views(sample_replies()).collect();
        let first = render_thread(&root, replies.clone(), &CTX).into_string();
        let second = render_thread(&root, replies, &CTX).into_string();
        assert_eq!(first, second);
    }

    #[test]
    fn user_content_is_escaped() {
        let mut post = Post {
            id: "1".to_string(),
            parent_id: None,
            title: Some("<b>x</b>".to_string()),
            message: "<script>alert(1)</script>".to_string(),
            file: None,
            timestamp: 0,
        };
        let html = render_thread(&PostView::root(post.clone()), Vec::new(), &CTX).into_string();
        assert!(!html.contains("<script>"));
        assert!(!html.contains("<b>x</b>"));

        post.title = None;
        let html = render_thread(&PostView::root(post), Vec::new(), &CTX).into_string();
        assert!(html.contains("<title>View Post - tinyboard</title>"));
    }
}
