use std::path::PathBuf;

use clap::Parser;
use log::error;

use emu8_core::constants::DEFAULT_CPU_FREQUENCY;
use emu8_core::Quirks;

mod clock;
mod keymap;
mod run;
mod sound;

use run::{run, Config};

/// Run a Chip-8 ROM in an SDL2 window.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the ROM to run
    rom: PathBuf,

    /// Instructions executed per second
    #[arg(short, long, default_value_t = DEFAULT_CPU_FREQUENCY, value_parser = clap::value_parser!(u32).range(1..))]
    frequency: u32,

    /// Screen pixels per Chip-8 pixel
    #[arg(short, long, default_value_t = 10, value_parser = clap::value_parser!(u32).range(1..=40))]
    scale: u32,

    /// Disable the beeper
    #[arg(long)]
    mute: bool,

    /// 8x0E copies the whole of Vx into VF before shifting, rather than its high bit
    #[arg(long)]
    legacy_shift: bool,

    /// Fx33 writes every BCD digit to I
    #[arg(long)]
    legacy_bcd: bool,
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Config {
            rom: args.rom,
            frequency: args.frequency,
            scale: args.scale,
            mute: args.mute,
            quirks: Quirks {
                legacy_shift_flag: args.legacy_shift,
                legacy_bcd: args.legacy_bcd,
            },
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    if let Err(err) = run(args.into()) {
        error!("{:#}", err);
        std::process::exit(1);
    }
}
