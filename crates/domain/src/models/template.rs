//! Razor view templates.

use crate::change_tracking::{set_property, DeepClone, RememberBeingDirty};
use crate::entity::{impl_entity, EntityBase};
use serde::{Deserialize, Serialize};
use shared::validation::require_not_blank;
use shared::ArgumentError;

/// Folder that holds template views.
pub const VIEWS_FOLDER: &str = "/Views";

/// File extension of template views.
pub const VIEW_EXTENSION: &str = "cshtml";

/// A view template rendering content of one or more document types.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    #[serde(flatten)]
    entity: EntityBase,
    name: String,
    alias: String,
    content: String,
    is_master_template: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    master_template_alias: Option<String>,
}

impl_entity!(Template);

impl Template {
    /// Creates a template; a missing alias is derived from the name.
    pub fn new(name: &str, alias: Option<&str>) -> Result<Self, ArgumentError> {
        let name = require_not_blank("name", name)?.trim().to_string();
        let alias = match alias {
            Some(alias) => safe_alias(require_not_blank("alias", alias)?),
            None => safe_alias(&name),
        };
        if alias.is_empty() {
            return Err(ArgumentError::Invalid {
                param: "alias",
                message: "alias must contain letters or digits".to_string(),
            });
        }

        Ok(Self {
            entity: EntityBase::new(),
            name,
            alias,
            content: String::new(),
            is_master_template: false,
            master_template_alias: None,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn alias(&self) -> &str {
        &self.alias
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn is_master_template(&self) -> bool {
        self.is_master_template
    }

    pub fn master_template_alias(&self) -> Option<&str> {
        self.master_template_alias.as_deref()
    }

    /// Relative file path, `{alias}.cshtml`.
    pub fn path(&self) -> String {
        format!("{}.{}", self.alias, VIEW_EXTENSION)
    }

    /// Virtual path under the views folder, `/Views/{alias}.cshtml`.
    pub fn virtual_path(&self) -> String {
        format!("{}/{}", VIEWS_FOLDER, self.path())
    }

    pub fn set_name(&mut self, name: &str) -> Result<(), ArgumentError> {
        let name = require_not_blank("name", name)?.trim().to_string();
        set_property(&mut self.entity.tracker, &mut self.name, name, "name");
        Ok(())
    }

    pub fn set_content(&mut self, content: impl Into<String>) {
        set_property(&mut self.entity.tracker, &mut self.content, content.into(), "content");
    }

    pub fn set_is_master_template(&mut self, is_master: bool) {
        set_property(
            &mut self.entity.tracker,
            &mut self.is_master_template,
            is_master,
            "isMasterTemplate",
        );
    }

    /// Sets the layout this template renders inside; a template cannot be its own master.
    pub fn set_master_template_alias(&mut self, alias: Option<&str>) -> Result<(), ArgumentError> {
        let alias = alias.map(safe_alias).filter(|a| !a.is_empty());
        if alias.as_deref() == Some(self.alias.as_str()) {
            return Err(ArgumentError::Invalid {
                param: "master_template_alias",
                message: "a template cannot be its own master".to_string(),
            });
        }
        set_property(
            &mut self.entity.tracker,
            &mut self.master_template_alias,
            alias,
            "masterTemplateAlias",
        );
        Ok(())
    }
}

impl DeepClone for Template {
    fn deep_clone(&self) -> Self {
        let mut clone = self.clone();
        clone.reset_dirty_properties(false);
        clone
    }
}

/// Camel-cases a name into an alias: `"Home Page"` becomes `"homePage"`.
pub fn safe_alias(name: &str) -> String {
    let mut alias = String::with_capacity(name.len());
    for (i, word) in name
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|w| !w.is_empty())
        .enumerate()
    {
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            if i == 0 {
                alias.push(first.to_ascii_lowercase());
            } else {
                alias.push(first.to_ascii_uppercase());
            }
            alias.extend(chars);
        }
    }
    alias
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_safe_alias() {
        assert_eq!(safe_alias("Home Page"), "homePage");
        assert_eq!(safe_alias("news-item"), "newsItem");
        assert_eq!(safe_alias("Master"), "master");
        assert_eq!(safe_alias("  "), "");
    }

    #[test]
    fn test_template_alias_from_name() {
        let template = Template::new("Home Page", None).unwrap();
        assert_eq!(template.alias(), "homePage");
        assert_eq!(template.path(), "homePage.cshtml");
        assert_eq!(template.virtual_path(), "/Views/homePage.cshtml");
    }

    #[test]
    fn test_template_explicit_alias() {
        let template = Template::new("Home Page", Some("start")).unwrap();
        assert_eq!(template.alias(), "start");
    }

    #[test]
    fn test_template_requires_name() {
        assert_eq!(
            Template::new(" ", None).unwrap_err(),
            ArgumentError::NullOrWhiteSpace { param: "name" }
        );
        assert!(matches!(
            Template::new("!!!", None),
            Err(ArgumentError::Invalid { param: "alias", .. })
        ));
    }

    #[test]
    fn test_master_template() {
        let mut template = Template::new("Home Page", None).unwrap();
        template.set_master_template_alias(Some("Master")).unwrap();

        assert_eq!(template.master_template_alias(), Some("master"));
        assert!(template.is_property_dirty("masterTemplateAlias"));
        assert!(template.set_master_template_alias(Some("homePage")).is_err());

        template.set_master_template_alias(None).unwrap();
        assert!(template.master_template_alias().is_none());
    }

    #[test]
    fn test_content_changes_are_tracked() {
        let mut template = Template::new("Home Page", None).unwrap();
        template.set_content("@inherits UmbracoViewPage");
        template.set_is_master_template(false);

        assert!(template.is_property_dirty("content"));
        assert!(!template.is_property_dirty("isMasterTemplate"));

        let clone = template.deep_clone();
        assert!(!clone.is_dirty());
        assert_eq!(clone.content(), "@inherits UmbracoViewPage");
    }
}
