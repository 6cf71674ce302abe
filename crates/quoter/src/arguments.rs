use {
    bigdecimal::BigDecimal,
    equilibrium::Asset,
    std::{
        fmt::{self, Display, Formatter},
        path::PathBuf,
    },
};

#[derive(clap::Parser, Debug)]
#[clap(name = "quoter", about = "Quotes swaps against an equilibrium curve")]
pub struct Arguments {
    #[clap(long, env, default_value = "warn,quoter=info,equilibrium=info")]
    pub log_filter: String,

    /// Emit logs as JSON lines.
    #[clap(long, env, action = clap::ArgAction::Set, default_value = "false")]
    pub use_json_logs: bool,

    #[clap(subcommand)]
    pub command: Command,
}

#[derive(clap::Subcommand, Debug)]
pub enum Command {
    /// Prints the output amount of an exact in swap or the input amount of
    /// an exact out swap.
    Quote(QuoteArguments),
    /// Checks every vector of a JSON vector file against the model.
    Verify {
        #[clap(long, env)]
        vectors: PathBuf,
    },
}

#[derive(clap::Args, Debug)]
pub struct QuoteArguments {
    /// The amount paid in, or taken out with `--exact-out`.
    #[clap(long, allow_hyphen_values = true)]
    pub amount: BigDecimal,

    #[clap(long)]
    pub exact_out: bool,

    /// The asset the trader pays with.
    #[clap(long, value_enum, default_value = "asset0")]
    pub input: InputAsset,

    #[clap(long)]
    pub reserve0: BigDecimal,

    #[clap(long)]
    pub reserve1: BigDecimal,

    #[clap(long)]
    pub price0: BigDecimal,

    #[clap(long)]
    pub price1: BigDecimal,

    #[clap(long)]
    pub concentration0: BigDecimal,

    #[clap(long)]
    pub concentration1: BigDecimal,

    /// Defaults to `--reserve0`.
    #[clap(long)]
    pub equilibrium_reserve0: Option<BigDecimal>,

    /// Defaults to `--reserve1`.
    #[clap(long)]
    pub equilibrium_reserve1: Option<BigDecimal>,

    /// Read all amounts, prices and concentrations in token units scaled by
    /// 10^18 and print the result the same way.
    #[clap(long)]
    pub decimal: bool,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, clap::ValueEnum)]
pub enum InputAsset {
    Asset0,
    Asset1,
}

impl From<InputAsset> for Asset {
    fn from(value: InputAsset) -> Self {
        match value {
            InputAsset::Asset0 => Self::Asset0,
            InputAsset::Asset1 => Self::Asset1,
        }
    }
}

impl Display for Arguments {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let Self {
            log_filter,
            use_json_logs,
            command,
        } = self;

        writeln!(f, "log_filter: {log_filter}")?;
        writeln!(f, "use_json_logs: {use_json_logs}")?;
        match command {
            Command::Quote(quote) => write!(f, "{quote}"),
            Command::Verify { vectors } => writeln!(f, "vectors: {}", vectors.display()),
        }
    }
}

impl Display for QuoteArguments {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let Self {
            amount,
            exact_out,
            input,
            reserve0,
            reserve1,
            price0,
            price1,
            concentration0,
            concentration1,
            equilibrium_reserve0,
            equilibrium_reserve1,
            decimal,
        } = self;

        writeln!(f, "amount: {amount}")?;
        writeln!(f, "exact_out: {exact_out}")?;
        writeln!(f, "input: {input:?}")?;
        writeln!(f, "reserve0: {reserve0}")?;
        writeln!(f, "reserve1: {reserve1}")?;
        writeln!(f, "price0: {price0}")?;
        writeln!(f, "price1: {price1}")?;
        writeln!(f, "concentration0: {concentration0}")?;
        writeln!(f, "concentration1: {concentration1}")?;
        display_option(f, "equilibrium_reserve0", equilibrium_reserve0)?;
        display_option(f, "equilibrium_reserve1", equilibrium_reserve1)?;
        writeln!(f, "decimal: {decimal}")
    }
}

fn display_option(f: &mut Formatter, name: &str, value: &Option<impl Display>) -> fmt::Result {
    match value {
        Some(value) => writeln!(f, "{name}: {value}"),
        None => writeln!(f, "{name}: None"),
    }
}
