//! Server-rendered HTML for every page the blog serves.
//!
//! Each `Page` variant corresponds to one template: the listing, a single
//! post, the create and edit forms, and the delete confirmation. Every piece
//! of user text goes through [`escape`] before it reaches the output.

use axum::response::Html;
use std::fmt::Write;

use crate::db::Post;

#[derive(Debug, Clone, Copy)]
pub enum Page<'a> {
    Index(&'a [Post]),
    Post(&'a Post),
    CreatePost,
    EditPost(&'a Post),
    ConfirmDelete(&'a Post),
}

impl Page<'_> {
    pub fn template_name(&self) -> &'static str {
        match self {
            Page::Index(_) => "index",
            Page::Post(_) => "post",
            Page::CreatePost => "create_post",
            Page::EditPost(_) => "edit_post",
            Page::ConfirmDelete(_) => "confirm_delete",
        }
    }

    pub fn render(&self, site_title: &str) -> Html<String> {
        let (heading, body) = match self {
            Page::Index(posts) => (site_title.to_string(), index_body(posts)),
            Page::Post(post) => (post.title.clone(), post_body(post)),
            Page::CreatePost => (
                "New post".to_string(),
                post_form("/create_post", "", "", "Create"),
            ),
            Page::EditPost(post) => (
                format!("Edit: {}", post.title),
                post_form(
                    &format!("/edit_post/{}", post.id),
                    &post.title,
                    &post.content,
                    "Save",
                ),
            ),
            Page::ConfirmDelete(post) => (
                format!("Delete: {}", post.title),
                confirm_delete_body(post),
            ),
        };
        Html(layout(site_title, &heading, &body))
    }
}

fn layout(site_title: &str, heading: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<style>
body {{ font-family: sans-serif; max-width: 48rem; margin: 2rem auto; padding: 0 1rem; }}
.content {{ white-space: pre-wrap; }}
textarea {{ width: 100%; min-height: 12rem; }}
input[type=text] {{ width: 100%; }}
</style>
</head>
<body>
<header><a href="/">{site}</a></header>
<h1>{heading}</h1>
{body}
</body>
</html>
"#,
        title = escape(heading),
        site = escape(site_title),
        heading = escape(heading),
        body = body,
    )
}

fn index_body(posts: &[Post]) -> String {
    let mut out = String::from("<p><a href=\"/create_post\">New post</a></p>\n");
    if posts.is_empty() {
        out.push_str("<p>No posts yet.</p>\n");
        return out;
    }
    out.push_str("<ul class=\"posts\">\n");
    for post in posts {
        let _ = writeln!(
            out,
            "<li><a href=\"/post/{id}\">{title}</a> \
             <a href=\"/edit_post/{id}\">edit</a> \
             <a href=\"/delete_post/{id}\">delete</a></li>",
            id = post.id,
            title = escape(&post.title),
        );
    }
    out.push_str("</ul>\n");
    out
}

fn post_body(post: &Post) -> String {
    format!(
        "<div class=\"content\">{content}</div>\n\
         <p><a href=\"/edit_post/{id}\">Edit</a> \
         <a href=\"/delete_post/{id}\">Delete</a> \
         <a href=\"/\">Back</a></p>\n",
        id = post.id,
        content = escape(&post.content),
    )
}

fn post_form(action: &str, title: &str, content: &str, submit: &str) -> String {
    format!(
        "<form method=\"post\" action=\"{action}\">\n\
         <p><label>Title<br><input type=\"text\" name=\"title\" value=\"{title}\" required></label></p>\n\
         <p><label>Content<br><textarea name=\"content\" required>{content}</textarea></label></p>\n\
         <p><button type=\"submit\">{submit}</button> <a href=\"/\">Cancel</a></p>\n\
         </form>\n",
        action = escape(action),
        title = escape(title),
        content = escape(content),
        submit = escape(submit),
    )
}

fn confirm_delete_body(post: &Post) -> String {
    format!(
        "<p>Delete \u{201c}{title}\u{201d}? This cannot be undone.</p>\n\
         <form method=\"post\" action=\"/delete_post/{id}\">\n\
         <p><button type=\"submit\">Delete</button> <a href=\"/post/{id}\">Cancel</a></p>\n\
         </form>\n",
        id = post.id,
        title = escape(&post.title),
    )
}

/// Escape text for use in HTML element content and double-quoted attributes.
pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
