use quickcheck::{Arbitrary, Gen};

/// An enum for the various kinds of "things" to do to
/// a binary search tree in a quicktest.
#[derive(Copy, Clone, Debug)]
pub(crate) enum Op<T> {
    /// Insert the value into the data structure
    Insert(T),
    /// Remove the value from the data structure
    Remove(T),
    /// Compare in-order walks
    Iter,
}

impl<T> Arbitrary for Op<T>
where
    T: Arbitrary,
{
    /// Tells quickcheck how to randomly choose an operation. Inserts are
    /// weighted up so trees grow deep enough to hit every removal case.
    fn arbitrary(g: &mut Gen) -> Self {
        match g.choose(&[0, 0, 1, 2]).copied() {
            Some(0) => Op::Insert(T::arbitrary(g)),
            Some(1) => Op::Remove(T::arbitrary(g)),
            Some(2) => Op::Iter,
            _ => unreachable!(),
        }
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        match self {
            Op::Insert(v) => Box::new(v.shrink().map(Op::Insert)),
            Op::Remove(v) => Box::new(v.shrink().map(Op::Remove)),
            Op::Iter => quickcheck::empty_shrinker(),
        }
    }
}
