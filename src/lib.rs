pub mod manifest;
pub mod paths;
pub mod publish;
pub mod variant;

pub use manifest::ManifestGenerator;
pub use variant::BuildVariant;
