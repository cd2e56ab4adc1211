//! yc-design-vue Component Resolver
//!
//! This crate resolves `Yc`-prefixed component identifiers used in templates to
//! the metadata a build tool needs to import them:
//! - The module path the component is exported from
//! - The export name and the alias to bind it to (sub-components are named
//!   exports of their parent's module)
//! - Every stylesheet the component and its transitive dependencies need
//!
//! Dependency closures are memoized process-wide, so resolving hundreds of
//! components during a build walks each part of the graph once.

pub mod catalog;
pub mod closure;
pub mod error;
pub mod exclude;
pub mod options;
pub mod resolver;

pub use catalog::Catalog;
pub use closure::{closure_of, Closure, ClosureEngine};
pub use error::ConfigError;
pub use exclude::{is_excluded, Exclude};
pub use options::ResolverOptions;
pub use resolver::{
    ComponentInfo, ComponentResolver, ExportName, ResolverKind, YcDesignResolver, PACKAGE_NAME,
    PREFIX,
};
