use super::json::records_to_json;
use crate::errors::AppError;
use crate::record::Record;
use minijinja::{Environment, UndefinedBehavior, context};
use std::path::Path;

pub const EXPORT_TEMPLATE: &str = "export.html";

/// Template environment loading files from one directory on demand.
pub struct Templates {
    env: Environment<'static>,
}

impl Templates {
    #[must_use]
    pub fn from_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        if !dir.join(EXPORT_TEMPLATE).is_file() {
            log::warn!("templates: {} not found in {}", EXPORT_TEMPLATE, dir.display());
        }
        let mut env = Environment::new();
        // Records are schema-less; `item.missing.field` must render empty.
        env.set_undefined_behavior(UndefinedBehavior::Chainable);
        env.set_loader(minijinja::path_loader(dir));
        Self { env }
    }

    /// Render the export page with the records bound to `items`.
    ///
    /// # Errors
    /// Returns `Template` if the template is missing or fails to render.
    pub fn render_export(&self, records: &[Record]) -> Result<String, AppError> {
        let tmpl = self.env.get_template(EXPORT_TEMPLATE)?;
        Ok(tmpl.render(context! { items => records_to_json(records) })?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bson::doc;

    #[test]
    fn binds_items_into_template() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(EXPORT_TEMPLATE),
            "{% for item in items %}<li>{{ item.user_id }}:{{ item.score }}</li>{% endfor %}",
        )
        .unwrap();
        let t = Templates::from_dir(dir.path());
        let html = t
            .render_export(&[Record::new(doc! {"user_id": "<u1>", "score": 87})])
            .unwrap();
        assert_eq!(html, "<li>&lt;u1&gt;:87</li>");
    }

    #[test]
    fn missing_template_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let t = Templates::from_dir(dir.path());
        assert!(matches!(t.render_export(&[]), Err(AppError::Template(_))));
    }
}
