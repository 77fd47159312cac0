//! Band generation: planner -> partitioner -> coverage -> blur allocation -> assembly.

pub(crate) mod allocate;
pub(crate) mod assemble;
pub(crate) mod coverage;
pub(crate) mod partition;
pub(crate) mod plan;
