//! Schedules only carry the common collection operations. The service guards
//! referential integrity: a schedule still named by a schedule event cannot
//! be removed or renamed.
