use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use proposal_sentinel::logging::init_tracing;
use proposal_sentinel::runner::{DEFAULT_JSON_OUTPUT, DEFAULT_TEXT_OUTPUT};
use proposal_sentinel::{flag_specs, run, AnalyzerConfig, RunOptions};

#[derive(Parser)]
#[command(name = "proposal-sentinel")]
#[command(about = "Analyze a proposal text for red-flags and strengths.")]
struct Args {
    /// Path to proposal text file
    #[arg(required_unless_present = "show_rules")]
    input: Option<PathBuf>,

    /// Output JSON path
    #[arg(short, long, default_value = DEFAULT_JSON_OUTPUT)]
    out: PathBuf,

    /// Also write human-readable report to this file
    #[arg(long, default_value = DEFAULT_TEXT_OUTPUT)]
    txt: PathBuf,

    /// Path to custom config file (YAML format)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// List the built-in rules and the effective config, then exit
    #[arg(long)]
    show_rules: bool,

    /// Enable debug logging on stderr (RUST_LOG overrides)
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    if args.show_rules {
        return show_rules(args.config.as_deref());
    }

    // clap enforces the input unless --show-rules was given
    let Some(input) = args.input else {
        return Ok(());
    };

    let options = RunOptions {
        input,
        json_output: args.out,
        text_output: args.txt,
        config: args.config,
    };
    run(&options)?;

    println!(
        "Report written to {} and {}",
        options.json_output.display(),
        options.text_output.display()
    );
    Ok(())
}

fn show_rules(config_path: Option<&std::path::Path>) -> Result<()> {
    let config = AnalyzerConfig::load_with_fallback(config_path);

    println!("\n📋 Built-in rules:");
    for spec in flag_specs() {
        let state = if config.is_rule_enabled(spec.id) {
            "on"
        } else {
            "off"
        };
        println!(
            "  {:<22} {:<7} {:<4} {}",
            spec.id,
            spec.severity,
            state,
            spec.title
        );
        if !spec.patterns.is_empty() {
            let patterns: Vec<&str> = spec.patterns.iter().map(|p| p.as_str()).collect();
            println!("  {:<22} triggers: {}", "", patterns.join(", "));
        }
    }

    println!("\n⚙️  Effective config:");
    print!("{}", config.to_yaml_string()?);

    println!("\n📝 Usage Examples:");
    println!("  proposal-sentinel proposal.txt");
    println!("  proposal-sentinel proposal.txt -o out.json --txt out.txt");
    println!("  proposal-sentinel proposal.txt -c sentinel.yaml -v");
    Ok(())
}
