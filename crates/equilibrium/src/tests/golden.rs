use {
    crate::{
        Asset,
        Error,
        PRECISION,
        checked::UINT112,
        find_equilibrium_point,
        vectors::{Expectation, Vector},
    },
    num::{BigInt, One},
};

const GOLDEN: &str = include_str!("../../vectors/golden.json");

fn golden() -> Vec<Vector> {
    serde_json::from_str(GOLDEN).unwrap()
}

#[test]
fn golden_vectors() {
    let vectors = golden();
    assert!(!vectors.is_empty());
    let mismatches = vectors
        .iter()
        .filter_map(|vector| vector.verify().err())
        .map(|mismatch| mismatch.to_string())
        .collect::<Vec<_>>();
    assert!(mismatches.is_empty(), "{mismatches:#?}");
}

#[test]
fn golden_vector_names_are_unique() {
    let vectors = golden();
    let mut names = vectors.iter().map(|v| v.name.as_str()).collect::<Vec<_>>();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), vectors.len());
}

#[test]
fn golden_covers_every_outcome() {
    let vectors = golden();
    for expected in ["invalidUint", "insufficientReserve", "zeroDivision"] {
        assert!(
            vectors.iter().any(|v| matches!(
                &v.expected,
                Expectation::Error(kind) if kind.to_string() == expected
            )),
            "{expected}"
        );
    }
    assert!(
        vectors
            .iter()
            .any(|v| v.curve.equilibrium_reserve0.is_some())
    );
}

#[test]
fn insufficient_reserve_names_the_drained_asset() {
    let one = &*PRECISION;
    let thousand = one * 1000;
    assert_eq!(
        find_equilibrium_point(&thousand, false, false, &thousand, &thousand, one, one, one, one),
        Err(Error::InsufficientReserve {
            asset: Asset::Asset0
        })
    );
}

#[test]
fn oversized_reserve_is_rejected_first() {
    let one = &*PRECISION;
    let reserve = BigInt::one() << 112;
    assert_eq!(
        find_equilibrium_point(&BigInt::one(), true, true, &reserve, one, one, one, one, one),
        Err(Error::InvalidUint {
            value: reserve.clone(),
            bits: UINT112
        })
    );
}

#[test]
fn large_trades_against_a_deep_pool() {
    // Both reserves at the uint112 limit still quote, since only the sum
    // needs to fit 256 bits.
    let reserve = (BigInt::one() << 112) - 1;
    let half = &*PRECISION / 2;
    let output = find_equilibrium_point(
        &BigInt::from(10).pow(30),
        true,
        true,
        &reserve,
        &reserve,
        &PRECISION,
        &PRECISION,
        &half,
        &half,
    )
    .unwrap();
    assert_eq!(
        output,
        "999903703503673597090225635605".parse::<BigInt>().unwrap()
    );
}
