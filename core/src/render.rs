//! # HTML Renderer
//!
//! Turns a roster into a standalone page: one card per employee, in roster order,
//! wrapped in a page template. Every interpolated value is escaped.

use teamgen_common::team::{Employee, Role, Roster};

use crate::ports::Renderer;

const PAGE_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1.0" />
    <title>My Team</title>
    <link rel="stylesheet" href="https://stackpath.bootstrapcdn.com/bootstrap/4.3.1/css/bootstrap.min.css" />
    <script src="https://kit.fontawesome.com/c502137733.js"></script>
</head>
<body>
    <div class="container-fluid">
        <div class="row">
            <div class="col-12 jumbotron mb-3 bg-danger text-white">
                <h1 class="text-center">My Team</h1>
            </div>
        </div>
    </div>
    <div class="container">
        <div class="row">
            <div class="team-area col-12 d-flex flex-wrap justify-content-center">
{{ team }}
            </div>
        </div>
    </div>
</body>
</html>
"#;

const CARD_TEMPLATE: &str = r#"                <div class="card employee-card m-2 shadow">
                    <div class="card-header bg-primary text-white">
                        <h2 class="card-title">{{ name }}</h2>
                        <h3 class="card-title"><i class="fas {{ icon }} mr-2"></i>{{ role }}</h3>
                    </div>
                    <div class="card-body bg-light">
                        <ul class="list-group">
                            <li class="list-group-item">ID: {{ id }}</li>
                            <li class="list-group-item">Email: <a href="mailto:{{ email }}">{{ email }}</a></li>
                            <li class="list-group-item">{{ detail }}</li>
                        </ul>
                    </div>
                </div>
"#;

pub struct HtmlRenderer;

impl Renderer for HtmlRenderer {
    fn render(&self, roster: &Roster) -> String {
        let cards: String = roster.iter().map(render_card).collect();
        fill(PAGE_TEMPLATE, &[("team", cards.trim_end())])
    }
}

fn render_card(employee: &Employee) -> String {
    let (icon, detail) = match employee.role_data() {
        Role::Manager { office_number } => (
            "fa-mug-hot",
            format!("Office number: {}", escape(office_number)),
        ),
        Role::Engineer { github } => {
            let handle = escape(github);
            (
                "fa-glasses",
                format!(
                    "GitHub: <a href=\"https://github.com/{handle}\" target=\"_blank\" rel=\"noopener noreferrer\">{handle}</a>"
                ),
            )
        }
        Role::Intern { school } => ("fa-user-graduate", format!("School: {}", escape(school))),
    };

    let name = escape(employee.name());
    let id = escape(employee.id().as_str());
    let email = escape(employee.email());

    fill(
        CARD_TEMPLATE,
        &[
            ("name", name.as_str()),
            ("icon", icon),
            ("role", employee.role()),
            ("id", id.as_str()),
            ("email", email.as_str()),
            ("detail", detail.as_str()),
        ],
    )
}

/// Replaces every `{{ key }}` placeholder in a single pass, so inserted values are
/// never scanned for placeholders themselves. Unknown keys are left untouched.
fn fill(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("{{ ") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 3..];
        let Some(end) = after.find(" }}") else {
            out.push_str(&rest[start..]);
            rest = "";
            break;
        };

        let key = &after[..end];
        match values.iter().find(|(k, _)| *k == key) {
            Some((_, value)) => out.push_str(value),
            None => out.push_str(&rest[start..start + end + 6]),
        }
        rest = &after[end + 3..];
    }

    out.push_str(rest);
    out
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
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
    out
}
