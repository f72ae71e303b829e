//! Bounds tree, sizing resolver and the geometry derived from it.

pub(crate) mod align;
pub(crate) mod builders;
pub(crate) mod derive;
pub(crate) mod frame;
pub(crate) mod model;
pub(crate) mod node;
pub(crate) mod resolve;
pub(crate) mod snapshot;
pub(crate) mod tree;
