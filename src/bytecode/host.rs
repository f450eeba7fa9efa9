//! Host function table used by the `call_back` instruction.

use std::collections::HashMap;
use std::hash::{Hash, BuildHasher};
use std::borrow::Borrow;
use crate::Integer;

/// A table of named, zero-argument host functions returning an integer.
///
/// The VM only borrows the table and never mutates it. Use the [`host_functions!`](crate::host_functions) macro to
/// generate a type implementing `HostFunctions`, or pass a `HashMap` from names to closures.
pub trait HostFunctions {
    /// Invokes the function registered under the given name. Returns None if no such function exists.
    fn invoke(self: &Self, name: &str) -> Option<Integer>;
}

/// A host function table that maps no functions.
#[derive(Copy, Clone, Debug, Default)]
pub struct Standalone;

impl HostFunctions for Standalone {
    fn invoke(self: &Self, _name: &str) -> Option<Integer> {
        None
    }
}

impl<K, F, S> HostFunctions for HashMap<K, F, S> where K: Borrow<str> + Hash + Eq, F: Fn() -> Integer, S: BuildHasher {
    fn invoke(self: &Self, name: &str) -> Option<Integer> {
        self.get(name).map(|function| function())
    }
}
