use crate::seq;
use crate::sequence::prelude::*;

#[test]
fn roundtrip() -> anyhow::Result<()> {
    let sequence = seq![1i32, -5, 100_000];
    let configuration = BincodeConfiguration::new();

    let bytes = sequence.bincode(&configuration)?;
    let decoded = Sequence::<i32>::from_bincode(&bytes, &configuration)?;
    assert_eq!(decoded, sequence);

    Ok(())
}

#[test]
fn roundtrip_strings() -> anyhow::Result<()> {
    let sequence = seq!["alpha".to_string(), String::new(), "Ω".to_string()];
    let configuration = BincodeConfiguration::default();

    let bytes = sequence.bincode(&configuration)?;
    let decoded = Sequence::<String>::from_bincode(&bytes, &configuration)?;
    assert_eq!(decoded, sequence);

    Ok(())
}

#[test]
fn empty_roundtrip() -> anyhow::Result<()> {
    let empty: Sequence<u8> = seq![];
    let configuration = BincodeConfiguration::new();

    let bytes = empty.bincode(&configuration)?;
    let decoded = Sequence::<u8>::from_bincode(&bytes, &configuration)?;
    assert!(decoded.is_empty());

    Ok(())
}

#[test]
fn byte_limit_bounds_encoding() -> anyhow::Result<()> {
    let sequence = seq![0u64; 100];

    // 8 bytes cannot hold a hundred integers
    let strict = BincodeConfiguration::with_byte_limit(8);
    assert!(matches!(sequence.bincode(&strict), Err(Error::Codec(_))));

    // a permissive limit passes and the data survives
    let permissive = BincodeConfiguration::with_byte_limit(10_000);
    let bytes = sequence.bincode(&permissive)?;
    let decoded = Sequence::<u64>::from_bincode(&bytes, &permissive)?;
    assert_eq!(decoded.len(), 100);

    Ok(())
}

#[test]
fn byte_limit_bounds_decoding() -> anyhow::Result<()> {
    let sequence = seq![1u32, 2, 3, 4, 5, 6, 7, 8];
    let unlimited = BincodeConfiguration::new();
    let bytes = sequence.bincode(&unlimited)?;

    // an undersized limit refuses the payload on the way in
    let strict = BincodeConfiguration::with_byte_limit(2);
    assert!(matches!(
        Sequence::<u32>::from_bincode(&bytes, &strict),
        Err(Error::Codec(_))
    ));

    // the bytes themselves are fine; only the limit made it fail
    let decoded = Sequence::<u32>::from_bincode(&bytes, &unlimited)?;
    assert_eq!(decoded, sequence);

    Ok(())
}

#[test]
fn snapshot_bincode_matches_owned() -> anyhow::Result<()> {
    let shared = SharedSequence::from_vec(vec![1u16, 2, 3]);
    let configuration = BincodeConfiguration::new();

    let from_snapshot = shared.snapshot().bincode(&configuration)?;
    let from_owned = seq![1u16, 2, 3].bincode(&configuration)?;
    assert_eq!(from_snapshot, from_owned);

    Ok(())
}
