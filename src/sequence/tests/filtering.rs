use crate::seq;
use crate::sequence::prelude::*;

#[test]
fn filter() -> anyhow::Result<()> {
    let sequence = seq![1, 2, 3, 4, 5, 6];
    let evens = sequence.filter(|value| value % 2 == 0);

    assert_eq!(evens.as_slice(), &[2, 4, 6]);
    // the receiver is untouched
    assert_eq!(sequence.len(), 6);

    // whatever passes the filter satisfies the predicate everywhere
    assert!(sequence.filter(|value| value % 2 == 0).all(|value| value % 2 == 0));
    assert!(sequence.filter(|_| false).is_empty());
    assert_eq!(sequence.filter(|_| true).len(), 6);

    Ok(())
}

#[test]
fn filter_visits_each_element_once_in_order() -> anyhow::Result<()> {
    let sequence = seq![10, 20, 30];
    let mut visited = Vec::new();
    let kept = sequence.filter(|value| {
        visited.push(*value);
        *value >= 20
    });

    assert_eq!(visited, vec![10, 20, 30]);
    assert_eq!(kept.as_slice(), &[20, 30]);

    Ok(())
}

#[test]
fn take() -> anyhow::Result<()> {
    let sequence = seq![1, 2, 3, 4, 5];

    assert_eq!(sequence.take(2).as_slice(), &[1, 2]);
    assert!(sequence.take(0).is_empty());
    // over-taking caps at the full sequence
    assert_eq!(sequence.take(50).len(), 5);

    for n in 0..8 {
        assert_eq!(sequence.take(n).len(), n.min(sequence.len()), "take({})", n);
    }

    Ok(())
}

#[test]
fn skip() -> anyhow::Result<()> {
    let sequence = seq![1, 2, 3, 4, 5];

    assert_eq!(sequence.skip(3).as_slice(), &[4, 5]);
    // skipping nothing is a full copy
    assert_eq!(sequence.skip(0).as_slice(), &[1, 2, 3, 4, 5]);
    // over-skipping empties
    assert!(sequence.skip(50).is_empty());

    for n in 0..8 {
        assert_eq!(
            sequence.skip(n).len(),
            sequence.len().saturating_sub(n),
            "skip({})",
            n
        );
    }

    Ok(())
}

#[test]
fn take_while() -> anyhow::Result<()> {
    let sequence = seq![1, 2, 6, 3, 2];

    // stops permanently at the first failure; later small values stay out
    assert_eq!(sequence.take_while(|value| *value < 5).as_slice(), &[1, 2]);
    assert_eq!(sequence.take_while(|_| true).len(), 5);
    assert!(sequence.take_while(|_| false).is_empty());

    Ok(())
}

#[test]
fn skip_while() -> anyhow::Result<()> {
    let sequence = seq![1, 2, 6, 3, 2];

    // once 6 fails the test, everything after it is kept unconditionally
    assert_eq!(sequence.skip_while(|value| *value < 5).as_slice(), &[6, 3, 2]);
    assert!(sequence.skip_while(|_| true).is_empty());
    assert_eq!(sequence.skip_while(|_| false).len(), 5);

    Ok(())
}

#[test]
fn skip_while_stops_testing_after_boundary() -> anyhow::Result<()> {
    let sequence = seq![1, 2, 6, 3, 2];
    let mut calls = 0;
    let kept = sequence.skip_while(|value| {
        calls += 1;
        *value < 5
    });

    assert_eq!(kept.as_slice(), &[6, 3, 2]);
    // 1 and 2 pass, 6 fails the boundary test, 3 and 2 are never tested
    assert_eq!(calls, 3);

    Ok(())
}
