//! Inline Page Rendering
//!
//! A deliberately thin seam: plain HTML strings, no templating engine.
//! Every user-provided value passes through [`escape_html`].

use crate::presentation::middleware::CurrentSession;

/// Escape a value for interpolation into HTML text or attributes
pub fn escape_html(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
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

fn layout(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html><head><meta charset=\"utf-8\"><title>{}</title></head>\n<body>{}</body></html>",
        escape_html(title),
        body
    )
}

fn error_fragment(error: Option<&str>) -> String {
    match error {
        Some(msg) => format!("<p class=\"error\">{}</p>", escape_html(msg)),
        None => String::new(),
    }
}

pub fn index_page(session: Option<&CurrentSession>) -> String {
    let body = match session {
        Some(s) => format!(
            "<h1>Welcome back, {}</h1>\
             <p><a href=\"/dashboard\">Dashboard</a> | <a href=\"/notes\">Notes</a> | <a href=\"/logout\">Log out</a></p>",
            escape_html(&s.username)
        ),
        None => "<h1>Welcome</h1>\
                 <p><a href=\"/login\">Log in</a> or <a href=\"/register\">Register</a></p>"
            .to_string(),
    };
    layout("Home", &body)
}

pub fn register_page(error: Option<&str>) -> String {
    let body = format!(
        "{}<h1>Register</h1>\
         <form method=\"post\" action=\"/register\" enctype=\"multipart/form-data\">\
         <input name=\"username\" placeholder=\"Username\">\
         <input name=\"email\" type=\"email\" placeholder=\"Email\">\
         <input name=\"password\" type=\"password\" placeholder=\"Password\">\
         <input name=\"confirm_password\" type=\"password\" placeholder=\"Confirm password\">\
         <input name=\"profile_pic\" type=\"file\">\
         <button type=\"submit\">Register</button>\
         </form>",
        error_fragment(error)
    );
    layout("Register", &body)
}

pub fn login_page(error: Option<&str>) -> String {
    let body = format!(
        "{}<h1>Login</h1>\
         <form method=\"post\" action=\"/login\">\
         <input name=\"email\" type=\"email\" placeholder=\"Email\">\
         <input name=\"password\" type=\"password\" placeholder=\"Password\">\
         <button type=\"submit\">Login</button>\
         </form>",
        error_fragment(error)
    );
    layout("Login", &body)
}

pub fn dashboard_page(session: &CurrentSession) -> String {
    let picture = session
        .profile_picture_path
        .as_deref()
        .map(|p| format!("<img src=\"{}\" alt=\"profile picture\" width=\"96\">", escape_html(p)))
        .unwrap_or_default();

    let body = format!(
        "<h1>Dashboard</h1>{}\
         <p>{} &lt;{}&gt; ({})</p>\
         <p><a href=\"/edit-profile\">Edit profile</a> | <a href=\"/notes\">Notes</a> | <a href=\"/logout\">Log out</a></p>",
        picture,
        escape_html(&session.username),
        escape_html(&session.email),
        escape_html(session.role.code()),
    );
    layout("Dashboard", &body)
}

pub fn edit_profile_page(session: &CurrentSession, error: Option<&str>) -> String {
    let body = format!(
        "{}<h1>Edit profile</h1>\
         <form method=\"post\" action=\"/edit-profile\" enctype=\"multipart/form-data\">\
         <input name=\"username\" value=\"{}\">\
         <input name=\"email\" type=\"email\" value=\"{}\">\
         <input name=\"profile_pic\" type=\"file\">\
         <button type=\"submit\">Save</button>\
         </form>\
         <p><a href=\"/dashboard\">Back</a></p>",
        error_fragment(error),
        escape_html(&session.username),
        escape_html(&session.email),
    );
    layout("Edit profile", &body)
}
