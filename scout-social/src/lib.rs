//! Social network clients and discovery pipelines used by Scout.
//!
//! Only Medium is implemented. Its module walks the undocumented JSON API two
//! hops out from a starting account and surfaces the authors of recent,
//! well-recommended responses.
pub mod medium;
