use {
    crate::arguments::{Arguments, Command, QuoteArguments},
    anyhow::{Context, Result, ensure},
    bigdecimal::BigDecimal,
    clap::{CommandFactory, Parser, error::ErrorKind},
    equilibrium::{
        CurveParams,
        Reserves,
        Swap,
        SwapKind,
        vectors::{Mismatch, Vector},
    },
    num::BigInt,
    number::units::{decimal_to_units, units_to_decimal},
    std::{io::Write, path::Path},
};

/// Token amounts passed with `--decimal` are scaled by this many decimals.
const TOKEN_DECIMALS: u32 = 18;

pub fn start(args: impl IntoIterator<Item = String>) {
    let args = Arguments::parse_from(args);
    if let Err(err) = initialize_logging(&args) {
        err.exit();
    }
    observe::panic_hook::install();
    tracing::info!("running quoter with validated arguments:\n{}", args);

    if let Err(err) = run(args.command, &mut std::io::stdout().lock()) {
        tracing::error!(?err, "quoter failed");
        std::process::exit(1);
    }
}

/// An unparsable log filter is reported like any other invalid argument.
fn initialize_logging(args: &Arguments) -> Result<(), clap::Error> {
    observe::tracing::initialize(&args.log_filter, args.use_json_logs).map_err(|err| {
        Arguments::command().error(
            ErrorKind::InvalidValue,
            format!("invalid log filter {:?}: {err}", args.log_filter),
        )
    })
}

/// Executes a command, writing its result to `out`.
pub fn run(command: Command, out: &mut impl Write) -> Result<()> {
    match command {
        Command::Quote(args) => {
            let decimal = args.decimal;
            let amount = quote(&args)?;
            if decimal {
                writeln!(out, "{}", units_to_decimal(&amount, TOKEN_DECIMALS))?;
            } else {
                writeln!(out, "{amount}")?;
            }
        }
        Command::Verify { vectors } => {
            let count = verify(&vectors)?;
            writeln!(out, "{count} vectors passed")?;
        }
    }
    Ok(())
}

fn quote(args: &QuoteArguments) -> Result<BigInt> {
    let units = |name: &str, value: &BigDecimal| -> Result<BigInt> {
        let decimals = if args.decimal { TOKEN_DECIMALS } else { 0 };
        decimal_to_units(value, decimals)
            .with_context(|| format!("{name} {value} is not a whole number of base units"))
    };

    let reserves = Reserves {
        reserve0: units("reserve0", &args.reserve0)?,
        reserve1: units("reserve1", &args.reserve1)?,
    };
    let curve = CurveParams {
        equilibrium_reserve0: match &args.equilibrium_reserve0 {
            Some(value) => units("equilibrium reserve0", value)?,
            None => reserves.reserve0.clone(),
        },
        equilibrium_reserve1: match &args.equilibrium_reserve1 {
            Some(value) => units("equilibrium reserve1", value)?,
            None => reserves.reserve1.clone(),
        },
        price0: units("price0", &args.price0)?,
        price1: units("price1", &args.price1)?,
        concentration0: units("concentration0", &args.concentration0)?,
        concentration1: units("concentration1", &args.concentration1)?,
    };
    let swap = Swap {
        amount: units("amount", &args.amount)?,
        kind: if args.exact_out {
            SwapKind::ExactOut
        } else {
            SwapKind::ExactIn
        },
        input: args.input.into(),
    };
    tracing::debug!(?swap, ?reserves, ?curve, "quoting");

    let amount = equilibrium::quote(&curve, &reserves, &swap).context("the swap reverts")?;
    tracing::debug!(%amount, "quoted");
    Ok(amount)
}

/// Checks all vectors of a file and returns how many there are.
fn verify(path: &Path) -> Result<usize> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read vectors from {}", path.display()))?;
    let vectors: Vec<Vector> = serde_json::from_str(&content)
        .with_context(|| format!("failed to parse vectors in {}", path.display()))?;

    let mismatches = vectors
        .iter()
        .filter_map(|vector| vector.verify().err())
        .inspect(|mismatch: &Mismatch| tracing::warn!(%mismatch, "vector failed"))
        .count();
    tracing::info!(
        total = vectors.len(),
        failed = mismatches,
        "verified vectors"
    );
    ensure!(
        mismatches == 0,
        "{mismatches} of {} vectors failed",
        vectors.len()
    );
    Ok(vectors.len())
}
