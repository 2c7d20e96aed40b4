//! Rendering of the deployment configuration page.
use crate::constants::deployment;

/// The ambient configuration values shown on the smoke-test page.
pub struct ConfigDisplay {
    /// The deployment environment name, when configured.
    environment_name: Option<String>,
    /// The backend API base URL, when configured.
    api_base_url: Option<String>,
}

impl ConfigDisplay {
    /// Construct a display from explicit values.
    pub const fn new(environment_name: Option<String>, api_base_url: Option<String>) -> Self {
        Self {
            environment_name,
            api_base_url,
        }
    }

    /// Construct a display from the ambient environment configuration.
    pub fn from_ambient() -> Self {
        Self::new(
            deployment::ENVIRONMENT_NAME.clone(),
            deployment::API_BASE_URL.clone(),
        )
    }

    /// The deployment environment name, when configured.
    pub fn environment_name(&self) -> Option<&str> {
        self.environment_name.as_deref()
    }

    /// The backend API base URL, when configured.
    pub fn api_base_url(&self) -> Option<&str> {
        self.api_base_url.as_deref()
    }

    /// Render the page markup. Unset values render as empty text rather
    /// than an error.
    pub fn render(&self) -> String {
        format!(
            "<!DOCTYPE html>\n\
             <html lang=\"en\">\n\
             <head>\n\
             <meta charset=\"utf-8\">\n\
             <title>RECSDI UI</title>\n\
             </head>\n\
             <body>\n\
             <main style=\"text-align: center; margin-top: 48px\">\n\
             <h1>🚀 RECSDI-UI</h1>\n\
             <p>Environment: {}</p>\n\
             <p>API URL: {}</p>\n\
             </main>\n\
             </body>\n\
             </html>\n",
            escape_html(self.environment_name().unwrap_or("")),
            escape_html(self.api_base_url().unwrap_or(""))
        )
    }
}

/// Escape a configured value for interpolation into element content.
fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for character in value.chars() {
        match character {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(character),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_contains_configured_values() {
        let display = ConfigDisplay::new(
            Some(String::from("production")),
            Some(String::from("https://api.example.com")),
        );
        let markup = display.render();
        assert!(markup.contains("<p>Environment: production</p>"));
        assert!(markup.contains("<p>API URL: https://api.example.com</p>"));
    }

    #[test]
    fn render_with_unset_values_leaves_slots_empty() {
        let display = ConfigDisplay::new(None, None);
        let markup = display.render();
        assert!(markup.contains("<p>Environment: </p>"));
        assert!(markup.contains("<p>API URL: </p>"));
    }

    #[test]
    fn render_is_idempotent() {
        let display = ConfigDisplay::new(
            Some(String::from("staging")),
            Some(String::from("https://staging-api.example.com")),
        );
        assert_eq!(display.render(), display.render());
    }

    #[test]
    fn render_always_includes_the_title() {
        let configured = ConfigDisplay::new(Some(String::from("production")), None);
        let unconfigured = ConfigDisplay::new(None, None);
        assert!(configured.render().contains("<h1>🚀 RECSDI-UI</h1>"));
        assert!(unconfigured.render().contains("<h1>🚀 RECSDI-UI</h1>"));
    }

    #[test]
    fn render_escapes_markup_in_values() {
        let display = ConfigDisplay::new(
            Some(String::from("<script>alert(1)</script>")),
            Some(String::from("https://api.example.com/?a=1&b=2")),
        );
        let markup = display.render();
        assert!(markup.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(markup.contains("https://api.example.com/?a=1&amp;b=2"));
        assert!(!markup.contains("<script>"));
    }

    #[test]
    fn from_ambient_reads_stable_values() {
        // The ambient statics are read once, so repeated constructions
        // must agree with each other.
        let first = ConfigDisplay::from_ambient();
        let second = ConfigDisplay::from_ambient();
        assert_eq!(first.environment_name(), second.environment_name());
        assert_eq!(first.api_base_url(), second.api_base_url());
    }

    #[test]
    fn escape_html_passes_plain_text_through() {
        assert_eq!(escape_html("production"), "production");
        assert_eq!(escape_html(""), "");
    }

    #[test]
    fn escape_html_replaces_all_significant_characters() {
        assert_eq!(
            escape_html("<a href=\"x\">&'</a>"),
            "&lt;a href=&quot;x&quot;&gt;&amp;&#39;&lt;/a&gt;"
        );
    }
}
