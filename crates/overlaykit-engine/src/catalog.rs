//! # Template Catalog
//!
//! Registry mapping tool names to [`OverlayTemplate`]s. A catalog is an
//! ordinary value owned by whoever embeds the engine; there is no global
//! "already registered" flag.
//!
//! Lookup has three outcomes, kept distinct:
//! - the name is registered: the template is returned
//! - the name is a fallback alias: the alias target is returned, or
//!   [`OverlayError::UnresolvedAlias`] if the target is not registered
//! - otherwise: [`OverlayError::UnknownTemplate`]

use std::collections::HashMap;

use overlaykit_core::{OverlayError, Result};
use tracing::{debug, info, warn};

use crate::builtins;
use crate::template::OverlayTemplate;

#[derive(Debug, Clone, Default)]
pub struct TemplateCatalog {
    templates: HashMap<String, OverlayTemplate>,
    /// Registration order, for stable menus
    order: Vec<String>,
    aliases: HashMap<String, String>,
}

impl TemplateCatalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a catalog holding every built-in template and the default
    /// fallback aliases.
    pub fn with_builtins() -> Self {
        let mut catalog = Self::new();
        // built-in names are unique, so an empty catalog accepts every one
        builtins::register_builtins(&mut catalog).ok();
        for (alias, target) in builtins::DEFAULT_ALIASES {
            catalog.add_alias(*alias, *target);
        }
        catalog
    }

    /// Registers a template.
    ///
    /// A name that is already registered is rejected with
    /// [`OverlayError::DuplicateName`] and the existing template is kept.
    pub fn register(&mut self, template: OverlayTemplate) -> Result<()> {
        let name = template.name().to_string();
        if self.templates.contains_key(&name) {
            warn!("Rejected duplicate template registration '{}'", name);
            return Err(OverlayError::DuplicateName { name });
        }
        info!(
            "Registered template '{}' ({} points)",
            name,
            template.required_points()
        );
        self.order.push(name.clone());
        self.templates.insert(name, template);
        Ok(())
    }

    /// Maps a requested name to a registered one. Used only when the
    /// requested name is not itself registered.
    pub fn add_alias(&mut self, alias: impl Into<String>, target: impl Into<String>) {
        let alias = alias.into();
        let target = target.into();
        debug!("Alias '{}' -> '{}'", alias, target);
        self.aliases.insert(alias, target);
    }

    pub fn remove_alias(&mut self, alias: &str) -> Option<String> {
        self.aliases.remove(alias)
    }

    /// Exact lookup, no alias fallback.
    pub fn get(&self, name: &str) -> Result<&OverlayTemplate> {
        self.templates
            .get(name)
            .ok_or_else(|| OverlayError::unknown_template(name))
    }

    /// Lookup with alias fallback.
    pub fn resolve(&self, name: &str) -> Result<&OverlayTemplate> {
        if let Some(template) = self.templates.get(name) {
            return Ok(template);
        }
        match self.aliases.get(name) {
            Some(target) => {
                let template =
                    self.templates
                        .get(target)
                        .ok_or_else(|| OverlayError::UnresolvedAlias {
                            alias: name.to_string(),
                            target: target.clone(),
                        })?;
                debug!("Resolved '{}' via alias to '{}'", name, target);
                Ok(template)
            }
            None => Err(OverlayError::unknown_template(name)),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.templates.contains_key(name)
    }

    /// Registered names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// Configured aliases, sorted by alias name.
    pub fn aliases(&self) -> Vec<(&str, &str)> {
        let mut out: Vec<(&str, &str)> = self
            .aliases
            .iter()
            .map(|(a, t)| (a.as_str(), t.as_str()))
            .collect();
        out.sort();
        out
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}
