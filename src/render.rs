//! HTML rendering of user cards and the page shell around them.

use std::borrow::Cow;

use crate::types::User;

/// Written into the list container when there is nothing to show.
pub const EMPTY_PLACEHOLDER: &str = r#"<p class="error">No users found.</p>"#;

pub const LOADING_TEXT: &str = "Loading users...";

const PAGE_TITLE: &str = "User Directory";

const PAGE_STYLE: &str = r#"
        body { font-family: system-ui, Arial, sans-serif; max-width: 960px; margin: 0 auto; padding: 2rem; }
        .hidden { display: none; }
        .error { color: #b00020; }
        #userList { display: grid; grid-template-columns: repeat(auto-fill, minmax(240px, 1fr)); gap: 1rem; }
        .user-card { border: 1px solid #ddd; border-radius: 8px; padding: 1rem; }
        .user-card h3 { margin-top: 0; }
"#;

/// Replace `target` with one card per user, or the placeholder when there
/// are no users.
pub fn render(users: &[User], target: &mut String) {
    *target = if users.is_empty() {
        EMPTY_PLACEHOLDER.to_string()
    } else {
        users.iter().map(render_card).collect()
    };
}

fn render_card(user: &User) -> String {
    format!(
        r#"
            <div class="user-card">
                <h3>{}</h3>
                <p><strong>Email:</strong> {}</p>
                <p><strong>City:</strong> {}</p>
            </div>
        "#,
        escape(user.display_name()),
        escape(user.display_email()),
        escape(user.display_city()),
    )
}

/// Escape text for use in element content and double-quoted attributes.
pub fn escape(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len() + 8);
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}

/// Contents of the three page regions. Only one indicator is ever visible.
pub struct Regions<'a> {
    pub loading_visible: bool,
    pub error_message: Option<&'a str>,
    pub list_html: &'a str,
}

/// Full HTML document with the loading, error and list regions.
pub fn document(regions: &Regions<'_>) -> String {
    let loading_class = if regions.loading_visible { "loading" } else { "loading hidden" };
    let (error_class, error_text) = match regions.error_message {
        Some(message) => ("error", escape(message)),
        None => ("error hidden", Cow::Borrowed("")),
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{PAGE_TITLE}</title>
    <style>{PAGE_STYLE}    </style>
</head>
<body>
    <h1>{PAGE_TITLE}</h1>
    <div id="loading" class="{loading_class}">{LOADING_TEXT}</div>
    <div id="error" class="{error_class}">{error_text}</div>
    <div id="userList">{list}</div>
</body>
</html>
"#,
        list = regions.list_html,
    )
}
