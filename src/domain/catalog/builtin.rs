//! The design system's component table.
//!
//! One row per component. Stubs are generated from the name alone; rows with
//! a non-Stub status carry their props in `name` / `name?` notation.

use super::descriptor::{
    ComponentDescriptor, ComponentKind, ComponentName, ComponentStatus, PropsContract,
};
use super::descriptor::ComponentKind::{Advanced, Core};
use super::stub::make_stub;

pub struct CatalogEntry {
    pub name: &'static str,
    pub kind: ComponentKind,
    pub status: ComponentStatus,
    pub props: &'static [&'static str],
}

const fn stub(name: &'static str) -> CatalogEntry {
    CatalogEntry {
        name,
        kind: ComponentKind::Core,
        status: ComponentStatus::Stub,
        props: &[],
    }
}

const fn advanced_stub(name: &'static str) -> CatalogEntry {
    CatalogEntry {
        name,
        kind: ComponentKind::Advanced,
        status: ComponentStatus::Stub,
        props: &[],
    }
}

const fn implemented(
    name: &'static str,
    kind: ComponentKind,
    props: &'static [&'static str],
) -> CatalogEntry {
    CatalogEntry {
        name,
        kind,
        status: ComponentStatus::Implemented,
        props,
    }
}

const fn heavy(name: &'static str, props: &'static [&'static str]) -> CatalogEntry {
    CatalogEntry {
        name,
        kind: ComponentKind::Advanced,
        status: ComponentStatus::LazyHeavy,
        props,
    }
}

pub const BUILTIN_CATALOG: &[CatalogEntry] = &[
    // Core
    stub("accordion"),
    stub("alert"),
    stub("alert-dialog"),
    stub("avatar"),
    stub("badge"),
    stub("breadcrumb"),
    implemented(
        "button",
        Core,
        &["variant?", "size?", "disabled?", "onClick?", "children?", "className?"],
    ),
    stub("calendar"),
    stub("card"),
    implemented("carousel", Core, &["items", "autoPlay?", "interval?", "className?"]),
    stub("chart"),
    stub("checkbox"),
    stub("collapsible"),
    implemented("color-picker", Core, &["value", "onChange", "presets?", "className?"]),
    stub("command-palette"),
    stub("context-menu"),
    stub("data-grid"),
    implemented(
        "data-grid-advanced",
        Core,
        &["columns", "rows", "pageSize?", "onSort?", "className?"],
    ),
    stub("date-picker"),
    stub("date-range-picker"),
    implemented("dialog", Core, &["open?", "onOpenChange?", "title?", "children?", "className?"]),
    stub("dropdown-menu"),
    stub("error-boundary"),
    implemented(
        "file-upload",
        Core,
        &["onUpload", "accept?", "multiple?", "maxSize?", "className?"],
    ),
    stub("form"),
    stub("hover-card"),
    stub("icon"),
    stub("input"),
    stub("label"),
    stub("menubar"),
    stub("navigation-menu"),
    implemented("pagination", Core, &["page", "pageCount", "onPageChange", "className?"]),
    stub("popover"),
    stub("progress"),
    stub("radio-group"),
    stub("rating"),
    stub("resizable"),
    stub("scroll-area"),
    stub("select"),
    stub("separator"),
    stub("sheet"),
    stub("skeleton"),
    stub("slider"),
    stub("sonner"),
    stub("stepper"),
    stub("switch"),
    stub("table"),
    stub("tabs"),
    stub("text-animations"),
    stub("textarea"),
    stub("timeline"),
    stub("toast"),
    stub("toggle"),
    stub("toggle-group"),
    stub("tooltip"),
    stub("ui-provider"),
    // Advanced
    implemented(
        "advanced-filter",
        Advanced,
        &["fields", "onApply", "defaultFilters?", "className?"],
    ),
    advanced_stub("app-shell"),
    heavy("audio-recorder", &["onRecordingComplete", "maxDuration?", "className?"]),
    heavy("code-editor", &["value", "language?", "onChange?", "readOnly?", "className?"]),
    implemented(
        "dashboard-grid",
        Advanced,
        &["widgets", "columns?", "onLayoutChange?", "className?"],
    ),
    advanced_stub("drawer"),
    implemented("drag-drop-grid", Advanced, &["items", "onReorder", "className?"]),
    heavy("image-cropper", &["src", "aspectRatio?", "onCrop", "className?"]),
    implemented("infinite-scroll", Advanced, &["loadMore", "hasMore", "children?", "className?"]),
    implemented("kanban", Advanced, &["columns", "onCardMove?", "className?"]),
    advanced_stub("mentions"),
    implemented("notification-center", Advanced, &["notifications", "onDismiss?", "className?"]),
    heavy("pdf-viewer", &["src", "initialPage?", "zoom?", "className?"]),
    heavy("rich-text-editor", &["value", "onChange", "toolbar?", "className?"]),
    implemented(
        "search-bar",
        Advanced,
        &["onSearch", "placeholder?", "suggestions?", "className?"],
    ),
    advanced_stub("tag-input"),
    implemented(
        "theme-builder",
        Advanced,
        &["initialTheme?", "onThemeChange?", "onExport?", "className?"],
    ),
    advanced_stub("theme-toggle"),
    advanced_stub("tree-view"),
    heavy("video-player", &["src", "poster?", "autoPlay?", "controls?", "className?"]),
    advanced_stub("virtual-list"),
    advanced_stub("virtualized-table"),
];

impl CatalogEntry {
    pub fn descriptor(&self) -> ComponentDescriptor {
        let name = ComponentName::from_kebab(self.name);
        match self.status {
            ComponentStatus::Stub => make_stub(name).with_kind(self.kind),
            status => ComponentDescriptor::new(
                name,
                status,
                self.kind,
                PropsContract::from_specs(self.props.iter().copied()),
            ),
        }
    }
}

pub fn builtin_descriptors() -> impl Iterator<Item = ComponentDescriptor> {
    BUILTIN_CATALOG.iter().map(CatalogEntry::descriptor)
}
