//! SquadRcon CLI
//!
//! Command-line RCON console for Squad servers.

use std::io::{BufRead, Write};

use clap::{Parser, Subcommand};
use squadrcon::{Config, RconClient, TcpTransport};
use tracing_subscriber::{fmt, EnvFilter};

/// SquadRcon CLI
#[derive(Parser, Debug)]
#[command(name = "squadrcon-cli")]
#[command(about = "RCON console for Squad game servers")]
#[command(version)]
struct Args {
    /// Server hostname or IP address
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// RCON port
    #[arg(short, long, default_value = "21114")]
    port: u16,

    /// RCON password
    #[arg(short = 'P', long)]
    password: String,

    /// Read/write timeout in milliseconds
    #[arg(long, default_value = "5000")]
    timeout_ms: u64,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Execute a single command and print the response
    Exec {
        /// The command line to send
        command: String,
    },

    /// Interactive console (one command per line, Ctrl-D or "exit" to quit)
    Shell,
}

fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt().with_env_filter(filter).with_target(false).init();

    let args = Args::parse();

    let config = Config::builder()
        .host(&args.host)
        .port(args.port)
        .read_timeout_ms(args.timeout_ms)
        .write_timeout_ms(args.timeout_ms)
        .build();

    let mut client = match RconClient::connect(config) {
        Ok(client) => client,
        Err(e) => {
            tracing::error!("Failed to connect: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = client.authorize(&args.password) {
        tracing::error!("Authorization failed: {}", e);
        std::process::exit(1);
    }

    match args.command {
        Commands::Exec { command } => match client.command(&command) {
            Ok(output) => println!("{output}"),
            Err(e) => {
                tracing::error!("Command failed: {}", e);
                std::process::exit(1);
            }
        },
        Commands::Shell => shell(&mut client),
    }

    client.close();
}

/// Interactive read-send-print loop
fn shell(client: &mut RconClient<TcpTransport>) {
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();

    loop {
        print!("rcon> ");
        let _ = stdout.flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break, // EOF
            Ok(_) => {}
            Err(e) => {
                tracing::error!("Failed to read input: {}", e);
                break;
            }
        }

        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line.eq_ignore_ascii_case("exit") || line.eq_ignore_ascii_case("quit") {
            break;
        }

        match client.command(line) {
            Ok(output) => println!("{output}"),
            Err(e) => {
                tracing::error!("Command failed: {}", e);
                break;
            }
        }
    }
}
