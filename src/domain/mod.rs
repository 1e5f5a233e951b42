// Domain layer: typed model and the ContentStore port. No policy lives here.

pub mod model;
pub mod ports;
