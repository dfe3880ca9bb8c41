pub(crate) mod extract;
pub(crate) mod sample;
pub(crate) mod summary;
pub(crate) mod timing;
