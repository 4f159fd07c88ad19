// Page-level components (one per route).

pub mod docker;
pub mod not_found;
