//! Swap quoting against the equilibrium curve.

use {
    crate::{
        Error,
        checked::{UINT112, UINT256, checked_add, validate_width},
        curve,
    },
    num::{BigInt, Signed, Zero},
    number::serialization::DecimalBigInt,
    serde::{Deserialize, Serialize},
    serde_with::serde_as,
};

/// One of the two assets of a pool.
#[derive(
    Clone, Copy, Debug, Eq, PartialEq, Hash, Deserialize, Serialize, strum::Display, strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Asset {
    Asset0,
    Asset1,
}

impl Asset {
    pub fn other(self) -> Self {
        match self {
            Self::Asset0 => Self::Asset1,
            Self::Asset1 => Self::Asset0,
        }
    }
}

/// Whether the swap amount is the quantity paid in or the quantity taken out.
#[derive(
    Clone, Copy, Debug, Eq, PartialEq, Hash, Deserialize, Serialize, strum::Display, strum::EnumIter,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum SwapKind {
    ExactIn,
    ExactOut,
}

/// A swap request. `input` is always the asset the trader pays with, for both
/// kinds of swaps.
#[serde_as]
#[derive(Clone, Debug, Eq, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Swap {
    #[serde_as(as = "DecimalBigInt")]
    pub amount: BigInt,
    pub kind: SwapKind,
    pub input: Asset,
}

/// Current pool holdings.
#[serde_as]
#[derive(Clone, Debug, Eq, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Reserves {
    #[serde_as(as = "DecimalBigInt")]
    pub reserve0: BigInt,
    #[serde_as(as = "DecimalBigInt")]
    pub reserve1: BigInt,
}

impl Reserves {
    fn get(&self, asset: Asset) -> &BigInt {
        match asset {
            Asset::Asset0 => &self.reserve0,
            Asset::Asset1 => &self.reserve1,
        }
    }
}

/// Static curve parameters of a pool, as stored by the contract.
#[serde_as]
#[derive(Clone, Debug, Eq, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CurveParams {
    #[serde_as(as = "DecimalBigInt")]
    pub equilibrium_reserve0: BigInt,
    #[serde_as(as = "DecimalBigInt")]
    pub equilibrium_reserve1: BigInt,
    #[serde_as(as = "DecimalBigInt")]
    pub price0: BigInt,
    #[serde_as(as = "DecimalBigInt")]
    pub price1: BigInt,
    #[serde_as(as = "DecimalBigInt")]
    pub concentration0: BigInt,
    #[serde_as(as = "DecimalBigInt")]
    pub concentration1: BigInt,
}

impl CurveParams {
    /// A curve centred on the current reserves.
    pub fn centered(
        reserves: &Reserves,
        price0: BigInt,
        price1: BigInt,
        concentration0: BigInt,
        concentration1: BigInt,
    ) -> Self {
        Self {
            equilibrium_reserve0: reserves.reserve0.clone(),
            equilibrium_reserve1: reserves.reserve1.clone(),
            price0,
            price1,
            concentration0,
            concentration1,
        }
    }

    fn side(&self, asset: Asset) -> Side<'_> {
        match asset {
            Asset::Asset0 => Side {
                price: &self.price0,
                equilibrium: &self.equilibrium_reserve0,
                concentration: &self.concentration0,
            },
            Asset::Asset1 => Side {
                price: &self.price1,
                equilibrium: &self.equilibrium_reserve1,
                concentration: &self.concentration1,
            },
        }
    }
}

/// The curve parameters belonging to one asset.
struct Side<'a> {
    price: &'a BigInt,
    equilibrium: &'a BigInt,
    concentration: &'a BigInt,
}

/// Computes the amount of a swap against a curve centred on the current
/// reserves: the output amount for exact in swaps and the input amount for
/// exact out swaps.
#[allow(clippy::too_many_arguments)]
pub fn find_equilibrium_point(
    amount: &BigInt,
    exact_in: bool,
    asset0_is_input: bool,
    reserve0: &BigInt,
    reserve1: &BigInt,
    price0: &BigInt,
    price1: &BigInt,
    concentration0: &BigInt,
    concentration1: &BigInt,
) -> Result<BigInt, Error> {
    let reserves = Reserves {
        reserve0: reserve0.clone(),
        reserve1: reserve1.clone(),
    };
    let curve = CurveParams::centered(
        &reserves,
        price0.clone(),
        price1.clone(),
        concentration0.clone(),
        concentration1.clone(),
    );
    let swap = Swap {
        amount: amount.clone(),
        kind: if exact_in {
            SwapKind::ExactIn
        } else {
            SwapKind::ExactOut
        },
        input: if asset0_is_input {
            Asset::Asset0
        } else {
            Asset::Asset1
        },
    };
    quote(&curve, &reserves, &swap)
}

/// Computes the amount of a swap against an arbitrary curve: the output
/// amount for exact in swaps and the input amount for exact out swaps.
pub fn quote(curve: &CurveParams, reserves: &Reserves, swap: &Swap) -> Result<BigInt, Error> {
    validate(curve, reserves, swap)?;

    // The asset whose new reserve follows directly from the swap amount. The
    // curve then determines the new reserve of the counter asset.
    let traded = match swap.kind {
        SwapKind::ExactIn => swap.input,
        SwapKind::ExactOut => swap.input.other(),
    };
    let counter = traded.other();
    let traded_reserve = reserves.get(traded);
    let counter_reserve = reserves.get(counter);

    let new_traded_reserve = match swap.kind {
        SwapKind::ExactIn => checked_add(traded_reserve, &swap.amount, UINT256)?,
        SwapKind::ExactOut => {
            if traded_reserve <= &swap.amount {
                return Err(Error::InsufficientReserve { asset: traded });
            }
            traded_reserve - &swap.amount
        }
    };

    let new_counter_reserve = counter_reserve_on_curve(
        &new_traded_reserve,
        curve.side(traded),
        curve.side(counter),
    )?;

    let difference = match swap.kind {
        SwapKind::ExactIn => counter_reserve - &new_counter_reserve,
        SwapKind::ExactOut => &new_counter_reserve - counter_reserve,
    };
    let amount = if difference.is_negative() {
        BigInt::zero()
    } else {
        difference
    };
    validate_width(&amount, UINT256)?;

    tracing::trace!(
        kind = %swap.kind,
        input = %swap.input,
        amount = %swap.amount,
        %new_traded_reserve,
        %new_counter_reserve,
        result = %amount,
        "quoted swap"
    );
    Ok(amount)
}

/// Checks the parameters against the widths of the contract's storage
/// types, in the order the contract checks them.
fn validate(curve: &CurveParams, reserves: &Reserves, swap: &Swap) -> Result<(), Error> {
    for value in [
        &swap.amount,
        &curve.price0,
        &curve.price1,
        &curve.concentration0,
        &curve.concentration1,
    ] {
        validate_width(value, UINT256)?;
    }
    for value in [
        &reserves.reserve0,
        &reserves.reserve1,
        &curve.equilibrium_reserve0,
        &curve.equilibrium_reserve1,
    ] {
        validate_width(value, UINT112)?;
    }
    Ok(())
}

/// Evaluates the branch of the curve that applies to the new reserve of the
/// traded asset and returns the matching reserve of the counter asset.
fn counter_reserve_on_curve(
    new_traded_reserve: &BigInt,
    traded: Side<'_>,
    counter: Side<'_>,
) -> Result<BigInt, Error> {
    if new_traded_reserve <= traded.equilibrium {
        tracing::trace!(branch = "f", "traded reserve at or below equilibrium");
        curve::f(
            new_traded_reserve,
            traded.price,
            counter.price,
            traded.equilibrium,
            counter.equilibrium,
            traded.concentration,
        )
    } else {
        tracing::trace!(branch = "f_inverse", "traded reserve above equilibrium");
        curve::f_inverse(
            new_traded_reserve,
            counter.price,
            traded.price,
            counter.equilibrium,
            traded.equilibrium,
            counter.concentration,
        )
    }
}
