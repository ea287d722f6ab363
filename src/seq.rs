use crate::node::{Generator, Node};
use alloc::boxed::Box;
use alloc::rc::Rc;

/// A persistent, singly linked and lazily evaluated sequence.
///
/// A `Seq` is a cursor to a node, or the empty sequence.
/// The tail of each node is computed only when first inspected, computed at most once,
/// and then shared by every sequence referring to that node.
///
/// Cloning a `Seq` is cheap: it creates another cursor to the same node.
///
/// # Examples
///
/// ```rust
/// use orx_lazy_seq::*;
///
/// let naturals = series(0, 1);
/// let evens = naturals.filter(|x| x % 2 == 0);
///
/// assert_eq!(evens.take(4).to_vec(), [0, 2, 4, 6]);
/// assert_eq!(naturals.get(10), Some(&10));
/// ```
pub struct Seq<'a, T>(Option<Rc<Node<'a, T>>>);

impl<'a, T> Seq<'a, T> {
    /// Creates the empty sequence.
    pub const fn empty() -> Self {
        Self(None)
    }

    /// Creates a sequence with the given `value` at the front, whose tail is computed by
    /// `generator` when it is first accessed.
    ///
    /// The generator is invoked at most once; the result is memoized and shared.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use orx_lazy_seq::*;
    ///
    /// let seq = Seq::new(1, || Seq::new(2, Seq::empty));
    /// assert_eq!(seq.to_vec(), [1, 2]);
    /// ```
    pub fn new<G>(value: T, generator: G) -> Self
    where
        G: FnOnce() -> Seq<'a, T> + 'a,
    {
        let generator: Generator<'a, T> = Box::new(generator);
        Self(Some(Rc::new(Node::deferred(value, generator))))
    }

    /// Creates a sequence with the given `value` at the front followed by the already known `tail`.
    pub fn from_parts(value: T, tail: Seq<'a, T>) -> Self {
        Self(Some(Rc::new(Node::resolved(value, tail))))
    }

    /// Returns a new sequence with `value` at the front followed by this sequence.
    ///
    /// This sequence is shared, not copied.
    pub fn cons(&self, value: T) -> Self {
        Self::from_parts(value, self.clone())
    }

    /// Returns true if this is the empty sequence.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.0.is_none()
    }

    /// Returns a reference to the first element; None if the sequence is empty.
    #[inline(always)]
    pub fn head(&self) -> Option<&T> {
        self.0.as_deref().map(Node::value)
    }

    /// Returns the sequence following the first element.
    ///
    /// On the first call on a node, its pending generator is invoked and the result is stored;
    /// every later call returns the identical sequence without invoking anything.
    ///
    /// The tail of the empty sequence is the empty sequence.
    pub fn tail(&self) -> &Self {
        match self.0.as_deref() {
            Some(node) => node.tail(),
            None => self,
        }
    }

    /// Returns the first element and the tail at once; None if the sequence is empty.
    pub fn split(&self) -> Option<(&T, &Self)> {
        self.0.as_deref().map(|node| (node.value(), node.tail()))
    }

    /// Returns true if both sequences denote the very same node, or if both are empty.
    ///
    /// This is identity, not equality of elements.
    #[inline(always)]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        match (&self.0, &other.0) {
            (Some(a), Some(b)) => Rc::ptr_eq(a, b),
            (None, None) => true,
            _ => false,
        }
    }

    /// Returns true if the tail of the front node has already been computed.
    ///
    /// The empty sequence is considered resolved.
    pub fn is_resolved(&self) -> bool {
        match self.0.as_deref() {
            Some(node) => node.resolved_tail().is_some(),
            None => true,
        }
    }

    pub(crate) fn node(&self) -> Option<&Node<'a, T>> {
        self.0.as_deref()
    }

    pub(crate) fn into_node(self) -> Option<Rc<Node<'a, T>>> {
        self.0
    }
}

impl<T> Clone for Seq<'_, T> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}
