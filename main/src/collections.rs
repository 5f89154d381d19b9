//! Contracts for collections mapping keys to several values.

pub use self::{
    multimap::Multimap,
    set_multimap::{SetMultimap, ValueSet},
};

mod multimap;
mod set_multimap;
