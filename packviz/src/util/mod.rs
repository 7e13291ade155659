mod config;
mod tolerance;

#[doc(inline)]
pub use config::ArcSampling;
#[doc(inline)]
pub use config::TessellationConfig;
#[doc(inline)]
pub use tolerance::Tolerance;
