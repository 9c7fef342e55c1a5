//! Frame rendering: scenes compile into draw ops, backends rasterize them.

/// Backend trait, frame type and render settings.
pub mod backend;
/// CPU backend powered by `vello_cpu`.
pub mod cpu;
/// Scene description and draw-op compilation.
pub mod plan;
