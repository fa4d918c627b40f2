use clap::{Parser, Subcommand};
use delay_lib::{
    arrival_delays_from_capture, sequence_delays_from_capture, DelaySeries, SequenceConfig,
};
use std::error::Error;
use std::net::SocketAddr;
use std::path::PathBuf;

mod probe;

#[derive(Parser)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/**
 * Available CLI commands
 */
#[derive(Subcommand)]
enum Commands {
    /// Print per-packet inter-arrival delays in capture order
    Arrival {
        /// pcap input file
        #[arg(short = 'f', long, value_name = "FILE")]
        pcap_file: PathBuf,

        /// parquet output file
        #[arg(short, long, value_name = "OUTFILE")]
        out_file: Option<PathBuf>,
    },

    /// Print inter-arrival delays walked in sequence-number order
    Sequence {
        /// pcap input file
        #[arg(short = 'f', long, value_name = "FILE")]
        pcap_file: PathBuf,

        /// parquet output file
        #[arg(short, long, value_name = "OUTFILE")]
        out_file: Option<PathBuf>,

        /// payload bytes to skip before the sequence field
        #[arg(short = 'p', long, value_name = "BYTES", default_value_t = 0)]
        payload_offset: usize,
    },

    /// Send sequence-numbered UDP probe datagrams
    Probe {
        /// probe destination
        #[arg(short = 't', long, value_name = "ADDR:PORT")]
        target: SocketAddr,

        /// number of datagrams to send
        #[arg(short, long, value_name = "COUNT", default_value_t = 100)]
        count: u32,

        /// pause between datagrams, in milliseconds
        #[arg(short, long, value_name = "MS", default_value_t = 20)]
        interval_ms: u64,

        /// datagram payload size (floored at the 4-byte sequence field)
        #[arg(short = 's', long, value_name = "BYTES", default_value_t = 32)]
        payload_size: usize,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Arrival {
            pcap_file,
            out_file,
        } => run_arrival(pcap_file, out_file),

        Commands::Sequence {
            pcap_file,
            out_file,
            payload_offset,
        } => run_sequence(pcap_file, out_file, payload_offset),

        Commands::Probe {
            target,
            count,
            interval_ms,
            payload_size,
        } => run_probe(target, count, interval_ms, payload_size),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run_arrival(pcap_file: PathBuf, out_file: Option<PathBuf>) -> Result<(), Box<dyn Error>> {
    let series = arrival_delays_from_capture(pcap_file)?;

    print_series(&series);
    write_parquet(&series, out_file)
}

fn run_sequence(
    pcap_file: PathBuf,
    out_file: Option<PathBuf>,
    payload_offset: usize,
) -> Result<(), Box<dyn Error>> {
    let config = SequenceConfig { payload_offset };
    let series = sequence_delays_from_capture(pcap_file, config)?;

    print_series(&series);
    write_parquet(&series, out_file)
}

fn run_probe(
    target: SocketAddr,
    count: u32,
    interval_ms: u64,
    payload_size: usize,
) -> Result<(), Box<dyn Error>> {
    let sent = probe::send_probes(target, count, interval_ms, payload_size)?;
    eprintln!("Sent {} probe datagrams to {}", sent, target);

    Ok(())
}

/**
 * Print the two-column listing: number, four spaces, delay
 *
 * Stdout carries nothing else; status and errors go to stderr.
 */
fn print_series(series: &DelaySeries) {
    for (number, delay) in series.numbers.iter().zip(&series.delays) {
        println!("{}    {}", number, delay);
    }
}

fn write_parquet(series: &DelaySeries, out_file: Option<PathBuf>) -> Result<(), Box<dyn Error>> {
    if let Some(out_file) = out_file {
        series.to_parquet(out_file)?;
    }

    Ok(())
}
