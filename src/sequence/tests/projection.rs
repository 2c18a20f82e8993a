use crate::seq;
use crate::sequence::prelude::*;

#[test]
fn select() -> anyhow::Result<()> {
    let words = seq!["alpha", "beta", "gamma"];
    let lengths = words.select(|word| word.len());

    assert_eq!(lengths.as_slice(), &[5, 4, 5]);
    // projection never changes the length
    assert_eq!(lengths.len(), words.len());

    let empty: Sequence<&str> = seq![];
    assert!(empty.select(|word| word.len()).is_empty());

    Ok(())
}

#[test]
fn select_changes_type() -> anyhow::Result<()> {
    let numbers = seq![1, 2, 3];
    let labels = numbers.select(|value| format!("#{value}"));
    assert_eq!(labels.as_slice(), &["#1", "#2", "#3"]);

    Ok(())
}

#[test]
fn select_visits_in_order() -> anyhow::Result<()> {
    let sequence = seq![10, 20, 30];
    let mut visited = Vec::new();
    let doubled = sequence.select(|value| {
        visited.push(*value);
        value * 2
    });

    assert_eq!(visited, vec![10, 20, 30]);
    assert_eq!(doubled.as_slice(), &[20, 40, 60]);

    Ok(())
}

#[test]
fn select_many() -> anyhow::Result<()> {
    let groups = seq![vec![1, 2], vec![], vec![3, 4, 5]];
    let flattened = groups.select_many(|group| group.clone());

    // one level of flattening, concatenated in input order
    assert_eq!(flattened.as_slice(), &[1, 2, 3, 4, 5]);

    let empty: Sequence<Vec<i32>> = seq![];
    assert!(empty.select_many(|group| group.clone()).is_empty());

    Ok(())
}

#[test]
fn select_many_from_derived_collections() -> anyhow::Result<()> {
    let words = seq!["ab", "c"];
    let letters = words.select_many(|word| word.chars().collect::<Vec<_>>());
    assert_eq!(letters.as_slice(), &['a', 'b', 'c']);

    // each element may expand to a different number of outputs
    let counts = seq![0usize, 2, 1];
    let repeated = counts.select_many(|count| vec!['x'; *count]);
    assert_eq!(repeated.as_slice(), &['x', 'x', 'x']);

    Ok(())
}
