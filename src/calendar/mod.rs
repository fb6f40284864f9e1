//! Calendar grid geometry: date-to-cell mapping and month outlines.

pub(crate) mod index;
pub(crate) mod outline;
