pub(crate) mod cpu;
pub(crate) mod pipeline;
pub(crate) mod surface;
