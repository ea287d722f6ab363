use crate::Seq;
use alloc::vec::Vec;

impl<T> From<Vec<T>> for Seq<'_, T> {
    fn from(values: Vec<T>) -> Self {
        values.into_iter().collect()
    }
}

impl<T, const N: usize> From<[T; N]> for Seq<'_, T> {
    fn from(values: [T; N]) -> Self {
        values.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn from_vec() {
        let seq: Seq<_> = vec![4, 5, 6].into();
        assert_eq!(seq.to_vec(), [4, 5, 6]);
    }

    #[test]
    fn from_array() {
        let seq = Seq::from(['p', 'q']);
        assert_eq!(seq.to_vec(), ['p', 'q']);

        let seq = Seq::from([0u8; 0]);
        assert!(seq.is_empty());
    }
}
