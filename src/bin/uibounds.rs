use std::{
    fs::File,
    io::{BufReader, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "uibounds", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Resolve a layout document and write the resulting geometry snapshot as JSON.
    Resolve(ResolveArgs),
    /// List the nodes whose outer box contains a point, outermost first.
    Hit(HitArgs),
}

#[derive(Parser, Debug)]
struct ResolveArgs {
    /// Input layout JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// UI scale; overrides the document's `scale`.
    #[arg(long)]
    scale: Option<f64>,

    /// Output snapshot path. Prints to stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct HitArgs {
    /// Input layout JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    #[arg(long, allow_hyphen_values = true)]
    x: f64,

    #[arg(long, allow_hyphen_values = true)]
    y: f64,

    /// UI scale; overrides the document's `scale`.
    #[arg(long)]
    scale: Option<f64>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Resolve(args) => cmd_resolve(args),
        Command::Hit(args) => cmd_hit(args),
    }
}

fn read_layout_json(path: &Path) -> anyhow::Result<uibounds::LayoutDocument> {
    let f = File::open(path).with_context(|| format!("open layout '{}'", path.display()))?;
    let doc = uibounds::LayoutDocument::from_json_reader(BufReader::new(f))
        .with_context(|| "parse layout JSON")?;
    Ok(doc)
}

fn cmd_resolve(args: ResolveArgs) -> anyhow::Result<()> {
    let doc = read_layout_json(&args.in_path)?;
    let (tree, root) = doc.resolve(args.scale)?;
    let snapshot = tree.snapshot(root)?;
    let json = serde_json::to_string_pretty(&snapshot).with_context(|| "serialize snapshot")?;

    match args.out {
        Some(out) => {
            if let Some(parent) = out.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            std::fs::write(&out, json)
                .with_context(|| format!("write snapshot '{}'", out.display()))?;
            eprintln!("wrote {}", out.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}

fn cmd_hit(args: HitArgs) -> anyhow::Result<()> {
    let doc = read_layout_json(&args.in_path)?;
    let (tree, root) = doc.resolve(args.scale)?;

    let mut stdout = std::io::stdout().lock();
    for id in tree.hit_test(root, args.x, args.y)? {
        let node = tree.node(id)?;
        if node.name().is_empty() {
            writeln!(stdout, "{id}")?;
        } else {
            writeln!(stdout, "{}", node.name())?;
        }
    }
    Ok(())
}
