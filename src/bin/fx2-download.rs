//! fx2-download - FX2LP firmware programmer
//!
//! Programs firmware into the RAM of an FX2LP, or an IIC image into the serial EEPROM it boots
//! from.

use clap::{Parser, ValueEnum};
use fx2_download::{
    Context, DownloadRequest, Downloader, ErrorKind, FirmwareSource, Progress, Stage, Target,
};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::process::exit;

/// Parse a string as a hex u16, with or without 0x prefix
fn parse_hex_u16(s: &str) -> Result<u16, String> {
    let digits = s
        .strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s);
    u16::from_str_radix(digits, 16).map_err(|e| format!("Invalid hex value: {}", e))
}

#[derive(Clone, Copy, ValueEnum)]
enum TargetArg {
    /// Program to internal or external RAM
    Ram,
    /// Program to small I2C EEPROM, IIC file to be provided
    Si2c,
    /// Program to large I2C EEPROM, IIC file to be provided
    Li2c,
}

impl From<TargetArg> for Target {
    fn from(arg: TargetArg) -> Self {
        match arg {
            TargetArg::Ram => Target::Ram,
            TargetArg::Si2c => Target::SmallEeprom,
            TargetArg::Li2c => Target::LargeEeprom,
        }
    }
}

#[derive(Parser)]
#[command(name = "fx2-download")]
#[command(author, version, about = "FX2LP firmware programmer", long_about = None)]
struct Cli {
    /// Firmware file (HEX, binary or IIC for RAM; IIC for EEPROM targets)
    #[arg(short, long)]
    image: PathBuf,

    /// Where to program the firmware
    #[arg(short, long, value_enum)]
    target: TargetArg,

    /// USB vendor ID of the device (hex); defaults to an unprogrammed FX2LP
    #[arg(short, long, value_parser = parse_hex_u16, requires = "pid")]
    vid: Option<u16>,

    /// USB product ID of the device (hex)
    #[arg(short, long, value_parser = parse_hex_u16, requires = "vid")]
    pid: Option<u16>,

    /// Refuse RAM images that do not fit into internal RAM instead of loading external RAM
    #[arg(long)]
    internal_only: bool,

    /// Verbosity level (--verbose, --verbose --verbose)
    #[arg(long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn exit_code(kind: ErrorKind) -> i32 {
    match kind {
        ErrorKind::Format => 2,
        ErrorKind::Capacity => 3,
        ErrorKind::Transport => 4,
        ErrorKind::Io => 5,
        ErrorKind::Device => 6,
    }
}

fn progress_bar(total: usize) -> ProgressBar {
    let pb = ProgressBar::new(total as u64);
    let style = ProgressStyle::default_bar()
        .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {bytes}/{total_bytes} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("#>-");
    pb.set_style(style);
    pb
}

fn run(cli: Cli) -> fx2_download::Result<()> {
    let target = Target::from(cli.target);
    let request = DownloadRequest::new(target, FirmwareSource::File(cli.image))
        .extended(!cli.internal_only);

    // Catch oversized files before touching any device
    request.validate()?;

    let context = Context::new()?;
    let id = cli.vid.zip(cli.pid);
    let mut handle = context.pick_target(id)?.open(&context)?;

    let mut bar: Option<(Stage, ProgressBar)> = None;
    Downloader::new(&mut handle)
        .on_progress(|event| match event {
            Progress::Stage(_) => {
                if let Some((_, pb)) = bar.take() {
                    pb.finish();
                }
            }
            Progress::Transferred { stage, done, total } => {
                if !matches!(&bar, Some((current, _)) if *current == stage) {
                    let pb = progress_bar(total);
                    pb.set_message(stage.to_string());
                    bar = Some((stage, pb));
                }
                if let Some((_, pb)) = &bar {
                    pb.set_position(done as u64);
                }
            }
        })
        .download(&request)?;

    log::info!("FX2LP firmware programming to {} completed", target);
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    let default_filter = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    if let Err(e) = run(cli) {
        log::error!("FX2LP firmware programming failed: {}", e);
        exit(exit_code(e.kind()));
    }
}
