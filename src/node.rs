use crate::Seq;
use alloc::boxed::Box;
use alloc::rc::Rc;
use core::cell::Cell;
use once_cell::unsync::OnceCell;

/// Deferred computation producing the tail of a node.
pub(crate) type Generator<'a, T> = Box<dyn FnOnce() -> Seq<'a, T> + 'a>;

/// Node of a lazy sequence: one element and the remainder of the sequence after it.
///
/// The tail is either known at construction, or computed by a generator on first access.
/// Once resolved, the tail never changes and the generator is gone for good.
pub(crate) struct Node<'a, T> {
    value: T,
    tail: OnceCell<Seq<'a, T>>,
    generator: Cell<Option<Generator<'a, T>>>,
}

impl<'a, T> Node<'a, T> {
    /// Creates a node whose tail is already known.
    pub(crate) fn resolved(value: T, tail: Seq<'a, T>) -> Self {
        Self {
            value,
            tail: OnceCell::with_value(tail),
            generator: Cell::new(None),
        }
    }

    /// Creates a node whose tail will be computed by `generator` on first access.
    pub(crate) fn deferred(value: T, generator: Generator<'a, T>) -> Self {
        Self {
            value,
            tail: OnceCell::new(),
            generator: Cell::new(Some(generator)),
        }
    }

    #[inline(always)]
    pub(crate) fn value(&self) -> &T {
        &self.value
    }

    /// Returns the tail, invoking the pending generator if this is the first access.
    pub(crate) fn tail(&self) -> &Seq<'a, T> {
        self.tail.get_or_init(|| match self.generator.take() {
            Some(generator) => generator(),
            None => Seq::empty(),
        })
    }

    /// Returns the tail if it is already resolved; never invokes the generator.
    pub(crate) fn resolved_tail(&self) -> Option<&Seq<'a, T>> {
        self.tail.get()
    }
}

impl<T> Drop for Node<'_, T> {
    fn drop(&mut self) {
        // unlink uniquely owned successors one by one, a long resolved chain
        // would otherwise be dropped recursively
        let mut next = self.tail.take().and_then(Seq::into_node);
        while let Some(rc) = next {
            next = match Rc::try_unwrap(rc) {
                Ok(mut node) => node.tail.take().and_then(Seq::into_node),
                Err(_) => None,
            };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::boxed::Box;

    #[test]
    fn resolved_node() {
        let node = Node::resolved('x', Seq::empty());
        assert_eq!(node.value(), &'x');
        assert!(node.resolved_tail().is_some());
        assert!(node.tail().is_empty());
    }

    #[test]
    fn deferred_node_resolves_once() {
        let calls = Cell::new(0);
        let node = Node::deferred(
            1,
            Box::new(|| {
                calls.set(calls.get() + 1);
                Seq::from_parts(2, Seq::empty())
            }),
        );

        assert!(node.resolved_tail().is_none());
        assert_eq!(calls.get(), 0);

        let first = node.tail().clone();
        let second = node.tail().clone();

        assert_eq!(calls.get(), 1);
        assert!(first.ptr_eq(&second));
        assert_eq!(first.head(), Some(&2));
        assert!(node.resolved_tail().is_some());
    }

    #[test]
    fn drop_long_resolved_chain() {
        let mut seq = Seq::empty();
        for i in 0..200_000 {
            seq = Seq::from_parts(i, seq);
        }
        assert_eq!(seq.head(), Some(&199_999));
        drop(seq);
    }
}
