//! Component catalog
//!
//! The fixed tables describing the component library: which sub-components
//! are exported from a parent component's module, and which components render
//! other components internally (and therefore need their styles too).

use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;

/// Sub-component → component module that exports it
const PARENTS: &[(&str, &str)] = &[
    ("AnchorLink", "Anchor"),
    ("AvatarGroup", "Avatar"),
    ("ButtonGroup", "Button"),
    ("BreadcrumbItem", "Breadcrumb"),
    ("CardMeta", "Card"),
    ("CardGrid", "Card"),
    ("CarouselItem", "Carousel"),
    ("CheckboxGroup", "Checkbox"),
    ("CollapseItem", "Collapse"),
    ("Countdown", "Statistic"),
    ("DescriptionsItem", "Descriptions"),
    ("DropdownButton", "Dropdown"),
    ("Doption", "Dropdown"),
    ("Dgroup", "Dropdown"),
    ("Dsubmenu", "Dropdown"),
    ("GridCol", "Grid"),
    ("GridItem", "Grid"),
    ("GridRow", "Grid"),
    ("ImagePreview", "Image"),
    ("ImagePreviewAction", "Image"),
    ("ImagePreviewGroup", "Image"),
    ("LayoutContent", "Layout"),
    ("LayoutFooter", "Layout"),
    ("LayoutHeader", "Layout"),
    ("LayoutSider", "Layout"),
    ("ListItem", "List"),
    ("ListItemMeta", "List"),
    ("MenuItem", "Menu"),
    ("MenuItemGroup", "Menu"),
    ("Option", "Select"),
    ("Optgroup", "Select"),
    ("RadioGroup", "Radio"),
    ("SkeletonLine", "Skeleton"),
    ("SkeletonShape", "Skeleton"),
    ("Step", "Steps"),
    ("SubMenu", "Menu"),
    ("TabPane", "Tabs"),
    ("TimelineItem", "Timeline"),
    ("TypographyText", "Typography"),
    ("TypographyTitle", "Typography"),
    ("TypographyParagraph", "Typography"),
];

/// Component → components it renders internally
const DEPENDENCIES: &[(&str, &[&str])] = &[
    ("VerificationCode", &["Input"]),
    ("TypographyBase", &["Input", "Tooltip"]),
    ("Transfer", &["Checkbox", "Button", "Scrollbar", "Input", "Empty"]),
    ("Tooltip", &["Trigger"]),
    ("TimePicker", &["Trigger", "Button", "Scrollbar"]),
    ("Timeline", &["Spin"]),
    ("Tag", &["Spin"]),
    ("Switch", &["Spin"]),
    ("Slider", &["InputNumber", "Tooltip"]),
    (
        "Select",
        &["Spin", "Scrollbar", "Input", "InputTag", "Trigger", "Empty", "Checkbox"],
    ),
    ("Popover", &["Trigger"]),
    ("Popconfirm", &["Button", "Trigger"]),
    ("Pagination", &["InputNumber", "Select"]),
    ("PageHeader", &["Divider"]),
    ("OverflowList", &["Tag"]),
    ("Modal", &["Button"]),
    ("Menu", &["Dropdown", "Tooltip"]),
    ("Mention", &["AutoComplete"]),
    ("List", &["Spin", "Scrollbar", "Pagination", "Empty"]),
    ("Link", &["Spin"]),
    ("Layout", &["ResizeBox"]),
    ("InputTag", &["Tag"]),
    ("InputNumber", &["Button", "Input"]),
    ("ImagePreviewAction", &["Tooltip"]),
    ("Image", &["Spin"]),
    (
        "Dropdown",
        &["Scrollbar", "Trigger", "Button", "ButtonGroup", "Trigger", "Scrollbar"],
    ),
    ("Drawer", &["Button"]),
    ("Comment", &["Avatar"]),
    ("ColorPicker", &["Trigger", "Select", "Input", "InputNumber"]),
    (
        "Cascader",
        &["Scrollbar", "Spin", "Checkbox", "Input", "InputTag", "Trigger", "Empty"],
    ),
    ("Card", &["Spin"]),
    ("Calendar", &["Button", "Radio"]),
    ("Button", &["Spin"]),
    ("Breadcrumb", &["Dropdown"]),
    ("BackTop", &["Button"]),
    ("Avatar", &["Popover"]),
    ("AutoComplete", &["Select"]),
];

static BUILTIN: Lazy<Catalog> = Lazy::new(|| {
    let mut catalog = Catalog::new();
    for (child, parent) in PARENTS {
        catalog = catalog.with_parent(child, parent);
    }
    for (name, deps) in DEPENDENCIES {
        catalog = catalog.with_dependencies(name, deps);
    }
    catalog
});

/// Parent map and dependency graph of a component library
///
/// Both tables are keyed by short identifiers (no `Yc` prefix). Names missing
/// from a table carry no information: a component without a parent defines its
/// own module, and a component without dependencies closes over itself.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    /// Sub-component → defining component
    parents: FxHashMap<String, String>,

    /// Component → direct dependencies, in declaration order
    dependencies: FxHashMap<String, Vec<String>>,
}

impl Catalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// The yc-design-vue tables, built on first use
    pub fn builtin() -> &'static Catalog {
        &BUILTIN
    }

    /// Declare `child` as a named export of `parent`'s module
    pub fn with_parent(mut self, child: &str, parent: &str) -> Self {
        self.parents.insert(child.to_string(), parent.to_string());
        self
    }

    /// Declare the direct dependencies of `name`
    ///
    /// Replaces any earlier declaration for the same component.
    pub fn with_dependencies(mut self, name: &str, deps: &[&str]) -> Self {
        self.dependencies.insert(
            name.to_string(),
            deps.iter().map(|dep| dep.to_string()).collect(),
        );
        self
    }

    /// The component whose module exports `name`, if it is a sub-component
    pub fn parent_of(&self, name: &str) -> Option<&str> {
        self.parents.get(name).map(String::as_str)
    }

    /// Directory of the module that defines `name`
    pub fn module_dir<'a>(&'a self, name: &'a str) -> &'a str {
        self.parent_of(name).unwrap_or(name)
    }

    /// Direct dependencies of `name` (empty if undeclared)
    pub fn dependencies(&self, name: &str) -> &[String] {
        self.dependencies
            .get(name)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_tables_loaded() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.parents.len(), PARENTS.len());
        assert_eq!(catalog.dependencies.len(), DEPENDENCIES.len());
    }

    #[test]
    fn test_module_dir() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.module_dir("MenuItem"), "Menu");
        assert_eq!(catalog.module_dir("Option"), "Select");
        assert_eq!(catalog.module_dir("Button"), "Button");
        assert_eq!(catalog.module_dir("NotAComponent"), "NotAComponent");
    }

    #[test]
    fn test_parents_resolve_in_one_hop() {
        // Every parent is a self-defining component
        for (_, parent) in PARENTS {
            assert_eq!(Catalog::builtin().parent_of(parent), None, "{parent}");
        }
    }

    #[test]
    fn test_dependencies_keep_declaration_order() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.dependencies("Pagination"), ["InputNumber", "Select"]);
        assert!(catalog.dependencies("Spin").is_empty());
    }

    #[test]
    fn test_custom_catalog() {
        let catalog = Catalog::new()
            .with_parent("Leaf", "Tree")
            .with_dependencies("Tree", &["Leaf"])
            .with_dependencies("Tree", &["Spin"]);
        assert_eq!(catalog.parent_of("Leaf"), Some("Tree"));
        assert_eq!(catalog.dependencies("Tree"), ["Spin"]);
    }
}
