pub mod builder;
pub mod catalog;
pub mod document;
pub mod driver;
pub mod error;
pub mod factory;
pub mod locator;

pub use driver::{DriverOptions, XmlDriver};
pub use error::LoadError;
pub use factory::{DescriptorFactory, IdentityMapper, RdfMapper, StandardFactory};
