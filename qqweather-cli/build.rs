use std::{env, path::PathBuf};

fn main() -> anyhow::Result<()> {
    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR")?);
    let out_dir = PathBuf::from(env::var("OUT_DIR")?);
    let src = manifest_dir.join("assets").join("icons");

    println!("cargo:rerun-if-changed={}", src.display());

    let bundle = qqweather_icons::bundle(&src, &out_dir.join("icons.rs"))?;
    for (path, reason) in &bundle.skipped {
        println!("cargo:warning=skipped icon {} ({reason})", path.display());
    }

    Ok(())
}
