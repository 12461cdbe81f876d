// Domain layer: wire records, the request description and the ports the
// facade talks through. No HTTP library types leak in here.

pub mod model;
pub mod ports;
