//! Freedesktop `.desktop` entry rendering

use std::path::Path;

use crate::config::AppConfig;

/// Render the menu entry for an installed binary
#[must_use]
pub fn render(app: &AppConfig, exec: &Path, icon: &str) -> String {
    let mut categories = app.categories.join(";");
    if !categories.is_empty() {
        categories.push(';');
    }

    format!(
        "[Desktop Entry]\n\
         Type=Application\n\
         Name={}\n\
         Comment={}\n\
         Exec={}\n\
         Icon={icon}\n\
         Terminal=true\n\
         Categories={categories}\n",
        app.display_name,
        app.comment,
        quote_exec(exec),
    )
}

/// Quote an `Exec` path when it contains characters the desktop entry format reserves
fn quote_exec(exec: &Path) -> String {
    let raw = exec.to_string_lossy();
    if raw.chars().any(|c| c.is_whitespace() || "\"'\\$`".contains(c)) {
        let escaped: String = raw
            .chars()
            .flat_map(|c| {
                let escape = matches!(c, '"' | '`' | '$' | '\\');
                escape.then_some('\\').into_iter().chain(std::iter::once(c))
            })
            .collect();
        format!("\"{escaped}\"")
    } else {
        raw.into_owned()
    }
}
