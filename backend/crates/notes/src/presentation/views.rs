//! Inline Page Rendering for notes
//!
//! Same thin seam as the auth views: plain HTML strings, values escaped.

use auth::presentation::views::escape_html;

use crate::domain::entities::Note;

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

pub fn notes_index_page(username: &str, notes: &[Note]) -> String {
    let items: String = notes
        .iter()
        .map(|note| {
            format!(
                "<li><strong>{}</strong><p>{}</p>\
                 <a href=\"/notes/{}/edit\">Edit</a>\
                 <form method=\"post\" action=\"/notes/{}/delete\"><button type=\"submit\">Delete</button></form>\
                 </li>",
                escape_html(&note.title),
                escape_html(&note.content),
                note.note_id,
                note.note_id,
            )
        })
        .collect();

    let list = if notes.is_empty() {
        "<p>No notes yet.</p>".to_string()
    } else {
        format!("<ul>{}</ul>", items)
    };

    let body = format!(
        "<h1>{}'s notes</h1>{}\
         <p><a href=\"/notes/new\">New note</a> | <a href=\"/dashboard\">Dashboard</a></p>",
        escape_html(username),
        list
    );
    layout("Notes", &body)
}

/// Inline error text for a failed list load
pub fn notes_error_page() -> String {
    layout(
        "Notes",
        "<p class=\"error\">Could not load your notes. Please try again.</p>",
    )
}

pub fn note_new_page(error: Option<&str>, title: &str, content: &str) -> String {
    let body = format!(
        "{}<h1>New note</h1>\
         <form method=\"post\" action=\"/notes\">\
         <input name=\"title\" value=\"{}\" placeholder=\"Title\">\
         <textarea name=\"content\" placeholder=\"Content\">{}</textarea>\
         <button type=\"submit\">Create</button>\
         </form>\
         <p><a href=\"/notes\">Back</a></p>",
        error_fragment(error),
        escape_html(title),
        escape_html(content),
    );
    layout("New note", &body)
}

pub fn note_edit_page(
    error: Option<&str>,
    note_id: &crate::domain::entities::NoteId,
    title: &str,
    content: &str,
) -> String {
    let body = format!(
        "{}<h1>Edit note</h1>\
         <form method=\"post\" action=\"/notes/{}/edit\">\
         <input name=\"title\" value=\"{}\">\
         <textarea name=\"content\">{}</textarea>\
         <button type=\"submit\">Save</button>\
         </form>\
         <p><a href=\"/notes\">Back</a></p>",
        error_fragment(error),
        note_id,
        escape_html(title),
        escape_html(content),
    );
    layout("Edit note", &body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use auth::models::UserId;

    #[test]
    fn test_note_values_are_escaped() {
        let note = Note::new(
            UserId::new(),
            "<script>alert(1)</script>".to_string(),
            "a & b".to_string(),
        );
        let html = notes_index_page("alice", std::slice::from_ref(&note));

        assert!(!html.contains("<script>alert"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("a &amp; b"));
    }

    #[test]
    fn test_empty_list_message() {
        let html = notes_index_page("alice", &[]);
        assert!(html.contains("No notes yet."));
    }
}
