use quickcheck::{Arbitrary, Gen};

mod bst;
mod stack;

/// An enum for the various kinds of "things" to do to
/// a structure in a quicktest.
#[derive(Copy, Clone, Debug)]
pub enum Op<K> {
    /// Insert the key into the data structure
    Insert(K),
    /// Find the first node with this key and delete it
    Remove(K),
}

impl<K> Arbitrary for Op<K>
where
    K: Arbitrary,
{
    fn arbitrary(g: &mut Gen) -> Self {
        match g.choose(&[0, 1]).unwrap() {
            0 => Op::Insert(K::arbitrary(g)),
            1 => Op::Remove(K::arbitrary(g)),
            _ => unreachable!(),
        }
    }
}
