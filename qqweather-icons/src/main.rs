use std::path::PathBuf;

use clap::Parser;

/// Pack a directory of SVG icons into a Rust lookup table.
#[derive(Debug, Parser)]
#[command(name = "qqweather-icons", version, about)]
struct Args {
    /// Directory containing `*.svg` icons.
    src_dir: PathBuf,

    /// Rust source file to write.
    out_file: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let bundle = qqweather_icons::bundle(&args.src_dir, &args.out_file)?;

    for (path, reason) in &bundle.skipped {
        eprintln!("skipped {} ({reason})", path.display());
    }
    println!(
        "wrote {} icons to {}",
        bundle.icons.len(),
        args.out_file.display()
    );

    Ok(())
}
