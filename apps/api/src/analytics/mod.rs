//! The analytics core: pure, synchronous transforms from a job collection to
//! chart-ready series. Every function here is total over its input — bad or
//! missing text degrades to zero, and no output is ever NaN.

pub mod buckets;
pub mod color;
pub mod comparison;
pub mod handlers;
pub mod locations;
pub mod metrics;
pub mod skills;
