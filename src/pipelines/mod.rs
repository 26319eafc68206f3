/*! Pipelines.

The module provides a light [pipeline::Pipeline] trait that enables easy and
flexible pipeline creation, and the corpus-to-XLIFF conversion pipeline itself.
!*/
#[allow(clippy::module_inception)]
pub mod pipeline;
pub mod xliff_export;

pub use pipeline::Pipeline;
pub use xliff_export::XliffExport;
