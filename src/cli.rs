use anyhow::{Context, Result, ensure};
use clap::{Parser, ValueEnum};
use exprdiff::utils::validate_variable_name;
use exprdiff::{DEFAULT_VARIABLE, Expression};
use log::info;

/// Log level for the application
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_log_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// exprdiff - Differentiate and simplify `v^n + c` symbolically
#[derive(Parser, Debug)]
#[command(name = "exprdiff")]
#[command(
    about = "Build a polynomial term plus a constant, then print its simplification and derivative"
)]
#[command(version)]
pub struct CliArgs {
    /// Degree of the leading term (at least 1)
    pub degree: u32,

    /// Constant added to the leading term
    #[arg(short, long, default_value_t = 1.0, allow_negative_numbers = true)]
    pub constant: f64,

    /// Variable to build the term from and differentiate with respect to
    #[arg(short, long, default_value = DEFAULT_VARIABLE)]
    pub variable: String,

    /// Build the leading term as a power instead of repeated multiplication
    #[arg(short, long)]
    pub power: bool,

    /// Simplify until the tree stops changing instead of a single pass
    #[arg(short, long)]
    pub settle: bool,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,
}

/// Configuration for the CLI application
pub struct CliConfig {
    pub degree: u32,
    pub constant: f64,
    pub variable: String,
    pub power: bool,
    pub settle: bool,
    pub log_level: LogLevel,
}

/// The four renderings printed by the tool
#[derive(Debug, PartialEq)]
pub struct Report {
    pub expression: String,
    pub simplified: String,
    pub derivative: String,
    pub simplified_derivative: String,
}

/// Validate parsed arguments and turn them into configuration
pub fn into_config(args: CliArgs) -> Result<CliConfig> {
    ensure!(args.degree >= 1, "Degree must be at least 1");
    validate_variable_name(&args.variable).context("Invalid variable name")?;

    Ok(CliConfig {
        degree: args.degree,
        constant: args.constant,
        variable: args.variable,
        power: args.power,
        settle: args.settle,
        log_level: args.log_level,
    })
}

/// Parse command line arguments and return configuration
pub fn parse_args() -> Result<CliConfig> {
    into_config(CliArgs::parse())
}

/// Initialize logging based on the provided log level
pub fn init_logging(log_level: &LogLevel) -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.to_log_level_filter())
        .init();
    Ok(())
}

/// `v^n + c`, with the leading term either as a power or as `v * v * ... * v`
pub fn build_expression(config: &CliConfig) -> Expression {
    let variable = Expression::variable(config.variable.as_str());

    let leading = if config.power {
        variable.pow(f64::from(config.degree))
    } else {
        (1..config.degree).fold(variable.clone(), |acc, _| acc * variable.clone())
    };

    leading + config.constant
}

fn simplify_with(config: &CliConfig, expr: &Expression) -> Expression {
    if config.settle {
        expr.simplify_fully()
    } else {
        expr.simplify()
    }
}

/// Build the expression and run it through both engines
pub fn evaluate(config: &CliConfig) -> Result<Report> {
    let expr = build_expression(config);
    info!("Built expression {}", expr);

    let derivative = expr
        .differentiate_wrt(&config.variable)
        .with_context(|| format!("Failed to differentiate {}", expr))?;

    let simplified_derivative = simplify_with(config, &derivative);

    Ok(Report {
        expression: expr.to_string(),
        simplified: simplify_with(config, &expr).to_string(),
        derivative: derivative.to_string(),
        simplified_derivative: simplified_derivative.to_string(),
    })
}

/// Run the main application logic
pub fn run() -> Result<()> {
    let config = parse_args()?;

    // Initialize logging
    init_logging(&config.log_level)?;

    info!(
        "Differentiating degree {} term in '{}' with respect to itself",
        config.degree, config.variable
    );

    let report = evaluate(&config)?;
    println!("expression:            {}", report.expression);
    println!("simplified:            {}", report.simplified);
    println!("derivative:            {}", report.derivative);
    println!("simplified derivative: {}", report.simplified_derivative);
    Ok(())
}
