use anyhow::bail;
use chainspect::inspector::snapshot::{demo_image, Snapshot};
use chainspect::ui::config;
use chainspect::ui::config::UIConfig;
use chainspect::ui::console::AppBuilder;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to a TOML snapshot of the inspected process image
    #[arg(long, env = "CHAINSPECT_SNAPSHOT")]
    snapshot: Option<PathBuf>,

    /// Generate a demo image with N randomly-filled records instead of
    /// loading a snapshot
    #[arg(long, value_name = "N", conflicts_with = "snapshot")]
    demo: Option<usize>,

    /// Root list symbol of the generated demo image
    #[arg(long, default_value_t = String::from("s_list_head"))]
    demo_root: String,

    /// Do not keep command history between sessions
    #[arg(long)]
    no_history: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    config::set(UIConfig {
        save_history: !args.no_history,
    });

    let image = match (&args.snapshot, args.demo) {
        (Some(path), _) => Snapshot::load(path)?.into_image()?,
        (None, Some(n)) => demo_image(&args.demo_root, n),
        (None, None) => bail!("either --snapshot or --demo expected"),
    };

    let app = AppBuilder::new().build(Box::new(image))?;
    app.run()
}
