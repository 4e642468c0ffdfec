//! Repository implementations.
//!
//! One repository per aggregate; each owns every SQL statement that touches
//! its table. The shared convention: "row absent" is `None`/`false`, storage
//! faults are `DbError`, and ordering is always stated in the query itself.

pub mod sweet;
pub mod user;
