pub(crate) mod alliance;
pub(crate) mod frame;
pub(crate) mod poses;
