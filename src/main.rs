use anyhow::Result;
use impactmap::cli::{Cli, Commands};
use impactmap::commands::portfolio::PortfolioConfig;
use impactmap::commands::{self, CommandContext};
use impactmap::formatting::ColorMode;
use impactmap::portfolio::ProcessFilter;

fn main() -> Result<()> {
    let cli = impactmap::cli::parse_args();
    impactmap::observability::init_logging(cli.verbosity);
    apply_color_mode(cli.plain);

    if let Commands::Init { force } = cli.command {
        return commands::init::init_config(force);
    }

    let ctx = CommandContext::from_cli(&cli)?;
    run(&ctx, cli)
}

fn apply_color_mode(plain: bool) {
    let mode = if plain {
        ColorMode::Never
    } else {
        ColorMode::from_env()
    };
    mode.apply();
}

fn run(ctx: &CommandContext, cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Metric {
            baseline,
            target,
            metric_type,
        } => commands::metric::handle_metric(ctx, &baseline, &target, metric_type.into()),
        Commands::Totals { file, recompute } => {
            commands::totals::handle_totals(ctx, &file, recompute)
        }
        Commands::Estimate {
            hours,
            errors,
            frequency,
            preset,
        } => commands::estimate::handle_estimate(ctx, &hours, &errors, &frequency, preset),
        Commands::Portfolio {
            file,
            company,
            industry,
            value_score,
            feasibility_score,
            action_signal,
            status,
            search,
            matrix,
            recompute,
            top,
        } => {
            let filter = ProcessFilter {
                company,
                industry,
                value_score,
                feasibility_score,
                action_signal,
                status,
                search,
            };
            commands::portfolio::handle_portfolio(
                ctx,
                PortfolioConfig {
                    file,
                    filter,
                    matrix,
                    recompute,
                    top,
                },
            )
        }
        Commands::Init { force } => commands::init::init_config(force),
    }
}
