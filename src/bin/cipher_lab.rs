// src/bin/cipher_lab.rs
//! Command-line front end: run a cipher, optionally log it, browse the log

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use cipher_lab::config::{self, Config};
use cipher_lab::{
    export_to_json, CipherLab, CipherMethod, CipherRequest, Direction, HistoryStore, Identity,
    Outcome, ShiftVariant,
};

const ENV_USER: &str = "CIPHER_LAB_USER";

#[derive(Parser, Debug)]
#[command(name = "cipher-lab", version, about = "Classical cipher lab")]
struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    json: bool,
    #[arg(
        long,
        global = true,
        help = "Identity to file history under (falls back to CIPHER_LAB_USER)"
    )]
    user: Option<String>,
    #[arg(long, global = true, help = "History database path")]
    db: Option<PathBuf>,
    #[arg(long, global = true, help = "Config file (defaults to cipher-lab.toml)")]
    config: Option<PathBuf>,
    #[arg(long, global = true, help = "Prompt for the history database passphrase")]
    prompt_key: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    Encrypt(CipherArgs),
    Decrypt(CipherArgs),
    History {
        #[command(subcommand)]
        command: HistoryCommands,
    },
}

#[derive(Args, Debug)]
struct CipherArgs {
    #[arg(long, value_enum, default_value_t = MethodArg::Shift)]
    method: MethodArg,
    #[arg(long, value_enum, help = "Shift arithmetic (defaults to config)")]
    variant: Option<VariantArg>,
    #[arg(long, short, allow_hyphen_values = true)]
    key: String,
    #[arg(long, help = "Record the operation in history")]
    save: bool,
    text: String,
}

#[derive(Subcommand, Debug)]
enum HistoryCommands {
    List {
        #[arg(long, help = "Only entries whose input or method contains this text")]
        filter: Option<String>,
    },
    Stats,
    Delete {
        id: i64,
    },
    Clear,
    Export {
        path: PathBuf,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum MethodArg {
    Shift,
    Vigenere,
    Transposition,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum VariantArg {
    Mod26,
    Ascii,
}

impl From<VariantArg> for ShiftVariant {
    fn from(v: VariantArg) -> Self {
        match v {
            VariantArg::Mod26 => ShiftVariant::Modulo26,
            VariantArg::Ascii => ShiftVariant::AsciiRange,
        }
    }
}

#[derive(Serialize)]
struct JsonOut<T: Serialize> {
    ok: bool,
    data: T,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let conf = resolve_config(&cli)?;

    match &cli.command {
        Commands::Encrypt(args) => run_cipher(&cli, &conf, Direction::Encrypt, args),
        Commands::Decrypt(args) => run_cipher(&cli, &conf, Direction::Decrypt, args),
        Commands::History { command } => run_history(&cli, &conf, command),
    }
}

fn resolve_config(cli: &Cli) -> Result<Config> {
    let mut conf = match &cli.config {
        Some(path) => {
            let mut conf = config::from_path(path)
                .with_context(|| format!("failed to read config {}", path.display()))?;
            conf.apply_env_overrides();
            conf
        }
        None => config::load().clone(),
    };

    if let Some(db) = &cli.db {
        conf.paths.history_db = db.clone();
    }
    if cli.prompt_key {
        conf.history.passphrase = rpassword::prompt_password("History database passphrase: ")
            .context("failed to read passphrase")?;
    }
    Ok(conf)
}

fn identity(cli: &Cli) -> Result<Identity> {
    let raw = match &cli.user {
        Some(user) => user.clone(),
        None => std::env::var(ENV_USER)
            .with_context(|| format!("--user or {ENV_USER} is required for history"))?,
    };
    Ok(Identity::new(raw)?)
}

fn open_store(conf: &Config) -> Result<HistoryStore> {
    HistoryStore::open_from_config(conf).with_context(|| {
        format!(
            "failed to open history database {}",
            conf.paths.history_db.display()
        )
    })
}

fn run_cipher(cli: &Cli, conf: &Config, direction: Direction, args: &CipherArgs) -> Result<()> {
    let method = match args.method {
        MethodArg::Shift => CipherMethod::Shift(
            args.variant
                .map(ShiftVariant::from)
                .unwrap_or(conf.defaults.shift_variant),
        ),
        MethodArg::Vigenere => CipherMethod::Vigenere,
        MethodArg::Transposition => CipherMethod::Transposition,
    };
    let request = CipherRequest::new(method, direction, args.text.clone(), args.key.clone());

    let outcome = if args.save && conf.history.enabled {
        let identity = identity(cli)?;
        let mut store = open_store(conf)?;
        CipherLab::with_history(&mut store).run_and_record(&identity, &request)?
    } else {
        if args.save {
            warn!("history is disabled in config; operation not saved");
        }
        Outcome {
            output: CipherLab::new().run(&request),
            record: None,
        }
    };

    print_one(cli.json, &outcome, |o| o.output.clone())
}

fn run_history(cli: &Cli, conf: &Config, command: &HistoryCommands) -> Result<()> {
    let identity = identity(cli)?;
    let mut store = open_store(conf)?;

    match command {
        HistoryCommands::List { filter } => {
            let records = match filter {
                Some(f) => store.search(&identity, f)?,
                None => store.list(&identity)?,
            };
            if cli.json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&JsonOut {
                        ok: true,
                        data: &records
                    })?
                );
            } else {
                for r in &records {
                    println!(
                        "{}\t{}\t{}\t{}\t{}\t{}",
                        r.id,
                        r.created_at.to_rfc3339(),
                        r.direction,
                        r.method,
                        r.input,
                        r.output
                    );
                }
            }
        }
        HistoryCommands::Stats => {
            let stats = store.stats(&identity)?;
            print_one(cli.json, &stats, |s| {
                format!("total {}\tencrypt {}\tdecrypt {}", s.total, s.encrypt, s.decrypt)
            })?;
        }
        HistoryCommands::Delete { id } => {
            store.delete(&identity, *id)?;
            print_one(cli.json, id, |id| format!("deleted {id}"))?;
        }
        HistoryCommands::Clear => {
            let removed = store.clear(&identity)?;
            print_one(cli.json, &removed, |n| format!("removed {n} entries"))?;
        }
        HistoryCommands::Export { path } => {
            if path.is_dir() {
                bail!("{} is a directory", path.display());
            }
            let count = export_to_json(&store, &identity, path)?;
            print_one(cli.json, &count, |n| {
                format!("exported {n} record(s) to {}", path.display())
            })?;
        }
    }
    Ok(())
}

fn print_one<T: Serialize>(json: bool, data: &T, row: impl Fn(&T) -> String) -> Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut { ok: true, data })?
        );
    } else {
        println!("{}", row(data));
    }
    Ok(())
}
