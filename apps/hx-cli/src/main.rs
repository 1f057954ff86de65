use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::debug;

use hx_app::{
    AppResult, RunOptions, delete_calculation, get_calculation, list_calculations, load_request,
    parse_calculation_id, run_calculation, save_request, summarize,
};
use hx_engine::{CalculationRequest, CalculationResult, SolverKind};
use hx_results::{CalculationStore, CsvOptions, csv_file_name, to_csv, to_json};

#[derive(Parser)]
#[command(name = "hx-cli")]
#[command(about = "heatbed CLI - counter-current heat exchange in packed beds", long_about = None)]
struct Cli {
    /// Directory holding saved calculations
    #[arg(long, global = true, default_value = ".heatbed/calculations")]
    store: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a request file filled with default values
    Init {
        /// Target file (.yaml, .yml or .json)
        #[arg(default_value = "request.yaml")]
        path: PathBuf,
    },
    /// Run a calculation
    Run {
        /// Request file; the default request is used when omitted
        request: Option<PathBuf>,
        /// Solution method
        #[arg(long, default_value_t = SolverKind::Analytical)]
        solver: SolverKind,
        /// Override the calculation name
        #[arg(long)]
        name: Option<String>,
        /// Do not save the result
        #[arg(long)]
        no_save: bool,
    },
    /// List saved calculations, newest first
    List,
    /// Show a saved calculation
    Show {
        /// Calculation ID
        id: String,
    },
    /// Delete a saved calculation
    Delete {
        /// Calculation ID
        id: String,
    },
    /// Export a calculation profile as CSV
    ExportCsv {
        /// Calculation ID
        id: String,
        /// Output file (defaults to calculation_<name>.csv)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Comma-separated without byte order mark
        #[arg(long)]
        comma: bool,
    },
    /// Export every saved calculation as one JSON document
    ExportAll {
        /// Output file (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> AppResult<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    debug!(store = %cli.store.display(), "using calculation store");

    match cli.command {
        Commands::Init { path } => cmd_init(&path),
        Commands::Run {
            request,
            solver,
            name,
            no_save,
        } => cmd_run(&cli.store, request.as_deref(), solver, name, !no_save),
        Commands::List => cmd_list(&cli.store),
        Commands::Show { id } => cmd_show(&cli.store, &id),
        Commands::Delete { id } => cmd_delete(&cli.store, &id),
        Commands::ExportCsv { id, output, comma } => {
            cmd_export_csv(&cli.store, &id, output.as_deref(), comma)
        }
        Commands::ExportAll { output } => cmd_export_all(&cli.store, output.as_deref()),
    }
}

fn open_store(path: &Path) -> AppResult<CalculationStore> {
    Ok(CalculationStore::new(path.to_path_buf())?)
}

fn cmd_init(path: &Path) -> AppResult<()> {
    save_request(path, &CalculationRequest::default())?;
    println!("✓ Wrote default request to {}", path.display());
    Ok(())
}

fn cmd_run(
    store_path: &Path,
    request_path: Option<&Path>,
    solver: SolverKind,
    name: Option<String>,
    save: bool,
) -> AppResult<()> {
    let mut request = match request_path {
        Some(path) => load_request(path)?,
        None => CalculationRequest::default(),
    };
    if let Some(name) = name {
        request.name = name;
    }

    println!("Running {} calculation: {}", solver, request.name);

    let store = open_store(store_path)?;
    let response = run_calculation(&store, &request, &RunOptions { solver, save })?;

    match response.id {
        Some(id) => println!("✓ Calculation saved: {}", id),
        None => println!("✓ Calculation completed"),
    }
    print_result(&response.result);
    Ok(())
}

fn cmd_list(store_path: &Path) -> AppResult<()> {
    let store = open_store(store_path)?;
    let calculations = list_calculations(&store)?;

    if calculations.is_empty() {
        println!("No saved calculations");
    } else {
        println!("Saved calculations:");
        for calc in calculations {
            println!(
                "  {} - {} ({}, {}, efficiency {:.1} %)",
                calc.id,
                calc.name(),
                calc.solver,
                calc.created_at.format("%Y-%m-%d %H:%M:%S"),
                calc.result.efficiency
            );
        }
    }
    Ok(())
}

fn cmd_show(store_path: &Path, id: &str) -> AppResult<()> {
    let store = open_store(store_path)?;
    let calc = get_calculation(&store, &parse_calculation_id(id)?)?;

    println!("Calculation: {}", calc.name());
    if !calc.request.description.is_empty() {
        println!("  {}", calc.request.description);
    }
    println!(
        "  Material: {}, gas: {}",
        calc.request.material.name, calc.request.gas.name
    );
    let layer = &calc.request.parameters;
    println!(
        "  Bed: H0 = {:.3} m, S = {:.3} m², {} steps",
        layer.height, layer.cross_section, layer.steps
    );
    println!(
        "  Flows: material {:.1} kg/h at {:.1} °C, gas {:.1} kg/h at {:.1} °C",
        layer.material_flow_rate,
        layer.material_inlet_temp,
        layer.gas_flow_rate,
        layer.gas_inlet_temp
    );
    print_result(&calc.result);
    Ok(())
}

fn cmd_delete(store_path: &Path, id: &str) -> AppResult<()> {
    let store = open_store(store_path)?;
    let id = parse_calculation_id(id)?;
    if delete_calculation(&store, &id)? {
        println!("✓ Deleted calculation {}", id);
    } else {
        println!("No calculation {} to delete", id);
    }
    Ok(())
}

fn cmd_export_csv(
    store_path: &Path,
    id: &str,
    output: Option<&Path>,
    comma: bool,
) -> AppResult<()> {
    let store = open_store(store_path)?;
    let calc = get_calculation(&store, &parse_calculation_id(id)?)?;

    let options = if comma {
        CsvOptions::comma()
    } else {
        CsvOptions::default()
    };
    let csv = to_csv(&calc.result, &options);

    let path = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(csv_file_name(calc.name())));
    std::fs::write(&path, csv)?;
    println!(
        "✓ Exported {} samples to {}",
        calc.result.len(),
        path.display()
    );
    Ok(())
}

fn cmd_export_all(store_path: &Path, output: Option<&Path>) -> AppResult<()> {
    let store = open_store(store_path)?;
    let calculations = list_calculations(&store)?;
    let json = to_json(&calculations)?;

    if let Some(path) = output {
        std::fs::write(path, json)?;
        println!(
            "✓ Exported {} calculations to {}",
            calculations.len(),
            path.display()
        );
    } else {
        println!("{}", json);
    }
    Ok(())
}

fn print_result(result: &CalculationResult) {
    let summary = summarize(result);
    println!("  {}", result.summary);
    println!("  Samples: {}", summary.sample_count);
    println!(
        "  Gas outlet: {:.1} °C, material outlet: {:.1} °C",
        summary.gas_outlet_temperature, summary.material_outlet_temperature
    );
    println!(
        "  Heat transferred: {:.1} W, efficiency: {:.1} %",
        summary.total_heat_transfer, summary.efficiency
    );
    println!(
        "  Largest temperature difference: {:.1} °C",
        summary.max_temperature_difference
    );
}
