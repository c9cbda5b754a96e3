// irt/src/processors/mod.rs
mod batch;
mod encoder;
mod loader;
mod resizer;

pub use batch::BatchProcessor;
pub use encoder::Encoder;
pub use loader::{sniff, ImageKind, Loader};
pub use resizer::Resizer;

pub mod prelude {
    pub use super::{Encoder, Loader, Resizer};
}
