//! Board index renderer: new-thread form, one page of threads, pagination.

use maud::{Markup, html};

use super::RenderContext;
use super::components::{attachment_media, message, page_shell, post_form};
use crate::view::PostView;

/// Neighbouring pages of the board index.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageLinks {
    pub prev: Option<usize>,
    pub next: Option<usize>,
}

/// Render a page of the board index.
pub fn render_board<I>(threads: I, links: PageLinks, ctx: &RenderContext<'_>) -> Markup
where
    I: IntoIterator<Item = PostView>,
{
    let body = html! {
        (post_form(None))
        hr;
        @for thread in threads {
            div class="post" {
                div class="reply-link" {
                    a href={ "/post/" (thread.id) } { "Reply" }
                }
                (attachment_media(&thread, ctx.upload_prefix))
                h3 { (thread.display_title) }
                (message(&thread.message))
                hr;
            }
        }
        div class="pagination-links" {
            @if let Some(prev) = links.prev {
                a href={ "/?page=" (prev) } class="pagination" { "Previous" }
            }
            @if let Some(next) = links.next {
                a href={ "/?page=" (next) } class="pagination" { "Next" }
            }
        }
    };

    page_shell("Board", ctx.site_name, body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::post::Post;

    const CTX: RenderContext<'static> = RenderContext {
        site_name: "tinyboard",
        upload_prefix: "/static/uploads",
    };

    fn thread(id: &str, title: &str, file: Option<&str>) -> PostView {
        PostView::root(Post {
            id: id.to_string(),
            parent_id: None,
            title: Some(title.to_string()),
            message: format!("body of {id}"),
            file: file.map(str::to_string),
            timestamp: 0,
        })
    }

    #[test]
    fn lists_threads_with_reply_links() {
        let threads = vec![thread("a", "First", Some("x.gif")), thread("b", "Second", None)];
        let html = render_board(threads, PageLinks::default(), &CTX).into_string();

        assert!(html.contains(r#"<a href="/post/a">Reply</a>"#));
        assert!(html.contains(r#"<a href="/post/b">Reply</a>"#));
        assert!(html.contains("<h3>First</h3>"));
        assert!(html.contains(r#"src="/static/uploads/x.gif""#));
        assert!(html.find("First").unwrap() < html.find("Second").unwrap());
        assert!(!html.contains("parent_id"));
    }

    #[test]
    fn pagination_links() {
        let links = PageLinks {
            prev: Some(0),
            next: Some(2),
        };
        let html = render_board(Vec::new(), links, &CTX).into_string();
        assert!(html.contains(r#"href="/?page=0""#));
        assert!(html.contains("Previous"));
        assert!(html.contains(r#"href="/?page=2""#));
        assert!(html.contains("Next"));
    }

    #[test]
    fn no_pagination_on_single_page() {
        let html = render_board(Vec::new(), PageLinks::default(), &CTX).into_string();
        assert!(!html.contains("Previous"));
        assert!(!html.contains("Next"));
    }
}
