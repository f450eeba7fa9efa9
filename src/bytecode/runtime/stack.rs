use std::ops::Index;

/// A last-in-first-out value stack. The VM keeps one for integers and one for text values.
#[derive(Clone, Debug, PartialEq)]
pub struct Stack<T> {
    data: Vec<T>,
}

impl<T> Stack<T> {
    /// Creates a new, empty value stack.
    pub fn new() -> Self {
        Stack {
            data: Vec::new(),
        }
    }
    /// Push given value onto the stack.
    pub fn push(self: &mut Self, value: T) {
        self.data.push(value);
    }
    /// Pop the top value off the stack.
    pub fn pop(self: &mut Self) -> Option<T> {
        self.data.pop()
    }
    /// Returns the top stack value without removing it.
    pub fn top(self: &Self) -> Option<&T> {
        self.data.last()
    }
    /// Returns the number of values on the stack.
    pub fn len(self: &Self) -> usize {
        self.data.len()
    }
    /// Returns whether the stack holds no values.
    pub fn is_empty(self: &Self) -> bool {
        self.data.is_empty()
    }
    /// Returns the stack contents, bottom first.
    pub fn data(self: &Self) -> &[T] {
        &self.data[..]
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Stack::new()
    }
}

impl<T> Index<usize> for Stack<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.data[index]
    }
}
