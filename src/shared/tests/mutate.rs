use crate::sequence::prelude::*;

#[test]
fn append() -> anyhow::Result<()> {
    let shared = SharedSequence::new();
    for i in 0..5 {
        shared.append(i);
    }

    assert_eq!(shared.len(), 5);
    assert_eq!(shared.snapshot().as_slice(), &[0, 1, 2, 3, 4]);

    Ok(())
}

#[test]
fn set() -> anyhow::Result<()> {
    let shared = SharedSequence::from_vec(vec![10, 20, 30]);

    let previous = shared.set(1, 25)?;
    assert_eq!(previous, 20);
    assert_eq!(shared.snapshot().as_slice(), &[10, 25, 30]);

    assert!(matches!(
        shared.set(3, 0),
        Err(Error::OutOfBounds {
            index: 3,
            length: 3
        })
    ));
    assert_eq!(shared.len(), 3);

    Ok(())
}

#[test]
fn insert_clamps_to_append() -> anyhow::Result<()> {
    let shared = SharedSequence::from_vec(vec![1, 3]);

    shared.insert(1, 2);
    assert_eq!(shared.snapshot().as_slice(), &[1, 2, 3]);

    // an index past the end appends instead of failing
    shared.insert(100, 4);
    assert_eq!(shared.snapshot().as_slice(), &[1, 2, 3, 4]);

    Ok(())
}

#[test]
fn remove() -> anyhow::Result<()> {
    let shared = SharedSequence::from_vec(vec![1, 2, 3]);

    assert_eq!(shared.remove(1)?, 2);
    assert_eq!(shared.snapshot().as_slice(), &[1, 3]);

    assert!(matches!(shared.remove(9), Err(Error::OutOfBounds { .. })));

    Ok(())
}

#[test]
fn extend() -> anyhow::Result<()> {
    let shared = SharedSequence::from_vec(vec![1]);
    shared.extend(vec![2, 3, 4]);

    assert_eq!(shared.snapshot().as_slice(), &[1, 2, 3, 4]);

    Ok(())
}

#[test]
fn clear() -> anyhow::Result<()> {
    let shared = SharedSequence::from_vec(vec![1, 2, 3]);
    shared.clear();

    assert!(shared.is_empty());
    assert!(shared.snapshot().is_empty());

    Ok(())
}

#[test]
fn clones_share_storage() -> anyhow::Result<()> {
    let shared = SharedSequence::from_vec(vec![1]);
    let alias = shared.clone();

    alias.append(2);

    // a clone is a handle onto the same storage, not a copy
    assert_eq!(shared.len(), 2);
    assert!(shared.snapshot_eq(&alias));

    Ok(())
}

#[test]
fn construction_from_iterators() -> anyhow::Result<()> {
    let collected: SharedSequence<i32> = (1..=3).collect();
    let converted: SharedSequence<i32> = vec![1, 2, 3].into();

    assert!(collected.snapshot_eq(&converted));
    assert_eq!(collected.length(), 3);

    Ok(())
}
