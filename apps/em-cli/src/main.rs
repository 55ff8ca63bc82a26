use clap::Parser;
use em_app::{AppResult, RunSummary, SamplingLoop, SignalTicker};
use em_controls::Controller;
use em_core::constants::LOG_FILE_NAME;
use em_io::{Actuator, ChannelReader, GpioRelay, Mcp3008, SimulatedAdc, SimulatedRelay};
use em_results::CsvLogWriter;
use tracing::info;

#[derive(Parser)]
#[command(name = "energy-meter", version)]
#[command(
    about = "Smart energy meter - samples current/voltage, switches a relay with hysteresis, logs to CSV",
    long_about = None
)]
struct Cli {
    /// Use simulated bench hardware instead of the MCP3008 and relay GPIO
    #[arg(long)]
    simulate: bool,
}

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result = if cli.simulate {
        info!("using simulated hardware");
        run(SimulatedAdc::bench(), SimulatedRelay::new())
    } else {
        bring_up().and_then(|(adc, relay)| run(adc, relay))
    };

    match result {
        Ok(summary) => {
            if summary.reason.is_fault() {
                eprintln!("\n{}", summary.status_line());
            } else {
                println!("\n{}", summary.status_line());
            }
            println!("{}", summary.energy_line());
            std::process::exit(summary.exit_code());
        }
        Err(e) => {
            eprintln!("Startup failed: {e}");
            std::process::exit(1);
        }
    }
}

fn bring_up() -> AppResult<(Mcp3008, GpioRelay)> {
    let adc = Mcp3008::open()?;
    let relay = GpioRelay::open()?;
    Ok((adc, relay))
}

fn run<R: ChannelReader, A: Actuator>(reader: R, actuator: A) -> AppResult<RunSummary> {
    let controller = Controller::default();
    let mut ticker = SignalTicker::new(controller.sample.period())?;
    let sink = CsvLogWriter::create(LOG_FILE_NAME)?;
    info!(path = LOG_FILE_NAME, "logging to CSV");

    let mut sampling = SamplingLoop::new(reader, actuator, sink, controller);
    Ok(sampling.run(&mut ticker))
}
