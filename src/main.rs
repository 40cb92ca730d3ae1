use feedbackflow_icon::iconset;
use std::path::Path;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let out_dir = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("assets")
        .join(iconset::ICONSET_DIR_NAME);

    let report = iconset::generate_iconset(&out_dir)?;
    log::debug!(
        "{} files from {} renders",
        report.files.len(),
        report.renders
    );

    println!("Iconset created at {}", report.dir.display());
    println!("Run: {}", iconset::ICONUTIL_HINT);
    Ok(())
}
