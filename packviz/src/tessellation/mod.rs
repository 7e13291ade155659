mod arc_sampler;
mod path;
mod tessellator;

#[doc(inline)]
pub use arc_sampler::sample_arc;
#[doc(inline)]
pub use path::Path;
#[doc(inline)]
pub use tessellator::Tessellator;
