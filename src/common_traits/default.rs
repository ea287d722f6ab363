use crate::Seq;

impl<T> Default for Seq<'_, T> {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_empty() {
        let seq = Seq::<char>::default();
        assert!(seq.is_empty());
        assert!(seq.ptr_eq(&Seq::empty()));
    }
}
