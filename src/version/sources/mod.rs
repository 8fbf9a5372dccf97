pub mod binding;
pub mod fixed;
pub mod manifest;

pub use binding::BindingSource;
pub use fixed::FixedSource;
pub use manifest::ManifestSource;
