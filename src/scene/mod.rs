pub(crate) mod figure;
pub(crate) mod graphic;
pub(crate) mod model;
