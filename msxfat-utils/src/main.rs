mod create;
mod format;
mod info;
pub(crate) mod sizes;

use clap::Parser;
use msxfat::BootType;

#[derive(Debug, clap::Args)]
struct Create {
    /// Partition sizes, as sector counts or byte sizes like 720k or
    /// 16m; a single size formats the image as one plain filesystem
    #[clap(required = true)]
    sizes: Vec<String>,
    /// Write MSX-DOS 1 boot sectors
    #[clap(long)]
    dos1: bool,
}

#[derive(Debug, clap::Args)]
struct Format {
    /// Format this partition instead of the whole image
    #[clap(short, long)]
    partition: Option<u32>,
    /// Write an MSX-DOS 1 boot sector
    #[clap(long)]
    dos1: bool,
}

#[derive(Debug, clap::Args)]
struct Info {
    /// Hex dump sector 0 as well
    #[clap(short = 'x', long)]
    dump: bool,
}

#[derive(Debug, clap::Subcommand)]
enum Action {
    /// Create a disk image and format (or partition) it
    Create(Create),
    /// Re-format an existing image or one of its partitions
    Format(Format),
    /// Describe an image: boot parameters or partition table
    Info(Info),
}

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    #[clap(short, long)]
    quiet: bool,
    #[clap(short, action = clap::ArgAction::Count)]
    verbosity: u8,
    /// Disk image file
    #[clap(short, long)]
    image: String,
    #[clap(subcommand)]
    action: Action,
}

pub(crate) fn boot_type(dos1: bool) -> BootType {
    match dos1 {
        true => BootType::Dos1,
        false => BootType::Dos2,
    }
}

fn main() {
    let args = Args::parse();
    let level = match (args.quiet, args.verbosity) {
        (true, _) => log::LevelFilter::Off,
        (_, 0) => log::LevelFilter::Info,
        (_, 1) => log::LevelFilter::Debug,
        (_, _) => log::LevelFilter::Trace,
    };
    log::set_max_level(level);
    env_logger::builder().filter(None, level).target(env_logger::Target::Stdout).init();

    let result = match args.action {
        Action::Create(action) => create::create(&args.image, &action),
        Action::Format(action) => format::format(&args.image, &action),
        Action::Info(action) => info::info(&args.image, &action),
    };
    if let Some(error) = result.err() {
        eprintln!("{:?}", error);
        std::process::exit(1);
    }
}
