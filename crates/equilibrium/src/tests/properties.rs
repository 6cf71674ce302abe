//! Randomized checks of the properties every quote satisfies.

use {
    crate::{Asset, CurveParams, PRECISION_U64, Reserves, Swap, SwapKind, checked::UINT256, quote},
    itertools::iproduct,
    num::{BigInt, Signed, Zero},
    rand::{Rng, SeedableRng, rngs::StdRng},
    strum::IntoEnumIterator,
};

const SAMPLES: usize = 500;

struct Pool {
    reserves: Reserves,
    curve: CurveParams,
}

impl Pool {
    fn random(rng: &mut StdRng) -> Self {
        let mut uint = |low: u128, high: u128| BigInt::from(rng.gen_range(low..=high));
        let reserves = Reserves {
            reserve0: uint(1_000_000, 10_u128.pow(27)),
            reserve1: uint(1_000_000, 10_u128.pow(27)),
        };
        let curve = CurveParams::centered(
            &reserves,
            uint(10_u128.pow(15), 10_u128.pow(21)),
            uint(10_u128.pow(15), 10_u128.pow(21)),
            uint(0, u128::from(PRECISION_U64)),
            uint(0, u128::from(PRECISION_U64)),
        );
        Self { reserves, curve }
    }

    /// The same pool with the asset labels exchanged.
    fn mirrored(&self) -> Self {
        Self {
            reserves: Reserves {
                reserve0: self.reserves.reserve1.clone(),
                reserve1: self.reserves.reserve0.clone(),
            },
            curve: CurveParams {
                equilibrium_reserve0: self.curve.equilibrium_reserve1.clone(),
                equilibrium_reserve1: self.curve.equilibrium_reserve0.clone(),
                price0: self.curve.price1.clone(),
                price1: self.curve.price0.clone(),
                concentration0: self.curve.concentration1.clone(),
                concentration1: self.curve.concentration0.clone(),
            },
        }
    }

    fn reserve(&self, asset: Asset) -> &BigInt {
        match asset {
            Asset::Asset0 => &self.reserves.reserve0,
            Asset::Asset1 => &self.reserves.reserve1,
        }
    }

    fn quote(&self, amount: &BigInt, kind: SwapKind, input: Asset) -> Result<BigInt, crate::Error> {
        let swap = Swap {
            amount: amount.clone(),
            kind,
            input,
        };
        quote(&self.curve, &self.reserves, &swap)
    }
}

fn random_below(rng: &mut StdRng, low: &BigInt, high: &BigInt) -> BigInt {
    // Reserves stay below 2^90, well within `u128`.
    let low = u128::try_from(low).unwrap();
    let high = u128::try_from(high).unwrap();
    BigInt::from(rng.gen_range(low..=high))
}

#[test]
fn zero_amount_quotes_zero() {
    let mut rng = StdRng::seed_from_u64(1);
    for _ in 0..SAMPLES {
        let pool = Pool::random(&mut rng);
        for (kind, input) in iproduct!(SwapKind::iter(), Asset::iter()) {
            assert_eq!(
                pool.quote(&BigInt::zero(), kind, input).unwrap(),
                BigInt::zero(),
                "{kind} {input}"
            );
        }
    }
}

#[test]
fn mirrored_pools_quote_identically() {
    let mut rng = StdRng::seed_from_u64(2);
    for _ in 0..SAMPLES {
        let pool = Pool::random(&mut rng);
        let mirrored = pool.mirrored();
        for (kind, input) in iproduct!(SwapKind::iter(), Asset::iter()) {
            let limit = pool.reserve(input.other());
            let amount = random_below(&mut rng, &BigInt::from(1), &(limit / 2));
            assert_eq!(
                pool.quote(&amount, kind, input),
                mirrored.quote(&amount, kind, input.other()),
                "{kind} {input} {amount}"
            );
        }
    }
}

#[test]
fn quotes_are_monotonic_in_the_amount() {
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..SAMPLES {
        let pool = Pool::random(&mut rng);
        let input = if rng.gen_bool(0.5) {
            Asset::Asset0
        } else {
            Asset::Asset1
        };
        let limit = pool.reserve(input.other());

        let amount = random_below(&mut rng, &BigInt::from(1), &(limit / 2));
        let larger = &amount + random_below(&mut rng, &BigInt::zero(), &(limit / 4));
        let output = pool.quote(&amount, SwapKind::ExactIn, input).unwrap();
        let larger_output = pool.quote(&larger, SwapKind::ExactIn, input).unwrap();
        assert!(output <= larger_output, "{amount} -> {output}, {larger} -> {larger_output}");

        let amount = random_below(&mut rng, &BigInt::from(1), &(limit - 2));
        let larger = random_below(&mut rng, &amount, &(limit - 1));
        // Draining almost the whole reserve can demand more than fits.
        if let (Ok(input_amount), Ok(larger_input)) = (
            pool.quote(&amount, SwapKind::ExactOut, input),
            pool.quote(&larger, SwapKind::ExactOut, input),
        ) {
            assert!(
                input_amount <= larger_input,
                "{amount} <- {input_amount}, {larger} <- {larger_input}"
            );
        }
    }
}

#[test]
fn buying_back_the_output_never_costs_more_than_was_paid() {
    let mut rng = StdRng::seed_from_u64(4);
    for _ in 0..SAMPLES {
        let pool = Pool::random(&mut rng);
        let input = if rng.gen_bool(0.5) {
            Asset::Asset0
        } else {
            Asset::Asset1
        };
        let limit = pool.reserve(input.other());
        let amount = random_below(&mut rng, &BigInt::from(1), &(limit / 2));

        let output = pool.quote(&amount, SwapKind::ExactIn, input).unwrap();
        assert!(output.bits() <= u64::from(UINT256));
        if output.is_zero() {
            continue;
        }
        let cost = pool.quote(&output, SwapKind::ExactOut, input).unwrap();
        assert!(cost <= amount, "paid {amount} for {output}, buying it costs {cost}");
        assert!(
            &amount - &cost <= rounding_tolerance(&amount),
            "paid {amount} for {output}, buying it costs only {cost}"
        );
    }
}

#[test]
fn exact_in_on_the_mirrored_pool_undoes_exact_out() {
    let mut rng = StdRng::seed_from_u64(5);
    for _ in 0..SAMPLES {
        let pool = Pool::random(&mut rng);
        let mirrored = pool.mirrored();
        let input = if rng.gen_bool(0.5) {
            Asset::Asset0
        } else {
            Asset::Asset1
        };
        let limit = pool.reserve(input.other());
        let wanted = random_below(&mut rng, &BigInt::from(1), &(limit / 2));

        let needed = pool.quote(&wanted, SwapKind::ExactOut, input).unwrap();
        let received = mirrored
            .quote(&needed, SwapKind::ExactIn, input.other())
            .unwrap();
        let difference = (&received - &wanted).abs();
        assert!(
            difference <= rounding_tolerance(&wanted),
            "wanted {wanted}, paying {needed} yields {received}"
        );
    }
}

/// Quotes in opposite directions differ by rounding only: at most one part
/// in 10^15 plus a couple of wei.
fn rounding_tolerance(amount: &BigInt) -> BigInt {
    amount / BigInt::from(10_u64.pow(15)) + 2_u32
}
