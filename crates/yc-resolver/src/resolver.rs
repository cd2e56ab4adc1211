//! Component resolution
//!
//! Turns a template identifier such as `YcMenuItem` into import metadata:
//! where to import it from, under which export name, and which stylesheets
//! must be loaded alongside it.

use crate::closure::{builtin_engine, ClosureEngine};
use crate::exclude::is_excluded;
use crate::options::ResolverOptions;
use serde::{Serialize, Serializer};

/// Prefix of public component identifiers
pub const PREFIX: &str = "Yc";

/// Package the components are imported from
pub const PACKAGE_NAME: &str = "yc-design-vue";

/// Stylesheet every component needs
const SHARED_STYLESHEET: &str = "yc-design-vue/es/shared.css";

/// What a resolver resolves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResolverKind {
    Component,
}

/// Export to import from the component module
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ExportName {
    /// The module's default export
    Default,

    /// A named export (sub-components)
    Named(String),
}

impl ExportName {
    pub fn as_str(&self) -> &str {
        match self {
            ExportName::Default => "default",
            ExportName::Named(name) => name,
        }
    }
}

impl Serialize for ExportName {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Import metadata for one component
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentInfo {
    /// Export name in the component module
    pub name: ExportName,

    /// Local binding (the short identifier)
    #[serde(rename = "as")]
    pub alias: String,

    /// Module path, e.g. `yc-design-vue/es/Menu`
    pub from: String,

    /// Stylesheets to import for their side effects
    pub side_effects: Vec<String>,
}

/// A resolver the build tool consults for every identifier it finds
pub trait ComponentResolver {
    fn kind(&self) -> ResolverKind {
        ResolverKind::Component
    }

    /// Resolve a raw identifier, or `None` to let other resolvers handle it
    fn resolve(&self, name: &str) -> Option<ComponentInfo>;

    /// Resolve a batch, dropping identifiers this resolver does not handle
    fn resolve_all<I, S>(&self, names: I) -> Vec<ComponentInfo>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        Self: Sized,
    {
        names
            .into_iter()
            .filter_map(|name| self.resolve(name.as_ref()))
            .collect()
    }
}

/// Resolver for yc-design-vue components
pub struct YcDesignResolver<'c> {
    options: ResolverOptions,
    engine: &'c ClosureEngine<'c>,
}

impl YcDesignResolver<'static> {
    /// Create a resolver over the built-in catalog and process-wide cache
    pub fn new(options: ResolverOptions) -> Self {
        Self::with_engine(options, builtin_engine())
    }
}

impl Default for YcDesignResolver<'static> {
    fn default() -> Self {
        Self::new(ResolverOptions::default())
    }
}

impl<'c> YcDesignResolver<'c> {
    /// Create a resolver over a specific closure engine
    pub fn with_engine(options: ResolverOptions, engine: &'c ClosureEngine<'c>) -> Self {
        Self { options, engine }
    }

    /// Collect stylesheets for `name`, defined in `dir`, and its closure
    fn side_effects(&self, name: &str, dir: &str) -> Vec<String> {
        let catalog = self.engine.catalog();
        let mut paths = vec![SHARED_STYLESHEET.to_string()];
        push_unique(&mut paths, stylesheet(dir));

        for member in self.engine.closure_of(name).iter() {
            push_unique(&mut paths, stylesheet(catalog.module_dir(member)));
        }
        paths
    }
}

impl ComponentResolver for YcDesignResolver<'_> {
    fn resolve(&self, name: &str) -> Option<ComponentInfo> {
        let short = short_name(name)?;
        if is_excluded(short, self.options.exclude.as_ref()) {
            tracing::debug!(component = name, "excluded");
            return None;
        }

        let (dir, export) = match self.engine.catalog().parent_of(short) {
            Some(parent) => (parent, ExportName::Named(short.to_string())),
            None => (short, ExportName::Default),
        };

        let side_effects = if self.options.side_effect {
            self.side_effects(short, dir)
        } else {
            Vec::new()
        };

        let info = ComponentInfo {
            name: export,
            alias: short.to_string(),
            from: module_path(dir),
            side_effects,
        };
        tracing::debug!(
            component = name,
            from = %info.from,
            stylesheets = info.side_effects.len(),
            "resolved"
        );
        Some(info)
    }
}

/// Strip the public prefix, requiring an uppercase letter right after it
fn short_name(name: &str) -> Option<&str> {
    let short = name.strip_prefix(PREFIX)?;
    short.chars().next().filter(char::is_ascii_uppercase)?;
    Some(short)
}

fn module_path(dir: &str) -> String {
    format!("{}/es/{}", PACKAGE_NAME, dir)
}

fn stylesheet(dir: &str) -> String {
    format!("{}/es/{}/index.css", PACKAGE_NAME, dir)
}

fn push_unique(paths: &mut Vec<String>, path: String) {
    if !paths.contains(&path) {
        paths.push(path);
    }
}
