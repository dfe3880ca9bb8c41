pub(crate) mod block;
pub(crate) mod model;
pub(crate) mod wire;
