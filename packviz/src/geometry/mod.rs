/// Set of geometric primitives - atomic building blocks of every boundary
pub mod primitives;

mod shape;

#[doc(inline)]
pub use shape::CompoundShape;
#[doc(inline)]
pub use shape::Shape;
