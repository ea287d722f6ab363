use crate::Seq;
use core::fmt::Debug;

/// Formats the already resolved prefix of the sequence; never resolves a tail.
///
/// A pending tail is shown as `..`.
impl<T: Debug> Debug for Seq<'_, T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let mut list = f.debug_list();
        let mut current = self;
        while let Some(node) = current.node() {
            list.entry(node.value());
            match node.resolved_tail() {
                Some(tail) => current = tail,
                None => return list.finish_non_exhaustive(),
            }
        }
        list.finish()
    }
}
