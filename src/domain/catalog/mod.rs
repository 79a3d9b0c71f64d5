//! Component catalog: descriptors, stub generation and the frozen registry.

pub mod builtin;
pub mod descriptor;
pub mod registry;
pub mod stub;

pub use descriptor::{
    ComponentDescriptor, ComponentKind, ComponentName, ComponentStatus, PropSpec, PropsContract,
};
pub use registry::{CatalogHealth, Registry, RegistryBuilder};
pub use stub::{RenderBody, Rendered, make_stub};
