use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "assetpress", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate the full favicon/icon asset set from one source image.
    Gen(GenArgs),
    /// Render a social card (OG image) from a style config.
    Card(CardArgs),
    /// Print the built-in target catalog as JSON.
    Targets,
}

#[derive(Parser, Debug)]
struct GenArgs {
    /// Source image (any decodable raster format).
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output directory for the generated files.
    #[arg(long, default_value = "assets")]
    out: PathBuf,

    /// Only generate targets in this category.
    #[arg(long, value_enum)]
    category: Option<CategoryChoice>,
}

#[derive(Parser, Debug)]
struct CardArgs {
    /// Card style config JSON. Missing fields take their defaults.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Background image, used when the config's bgType is "image".
    #[arg(long)]
    bg: Option<PathBuf>,

    /// Logo image, used when the config shows a logo.
    #[arg(long)]
    logo: Option<PathBuf>,

    /// Output file path.
    #[arg(long, default_value = "og-image.png")]
    out: PathBuf,

    /// Output encoding.
    #[arg(long, value_enum, default_value_t = FormatChoice::Png)]
    format: FormatChoice,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum CategoryChoice {
    Favicon,
    Apple,
    Android,
    Social,
    Ms,
    Webp,
    Svg,
}

impl From<CategoryChoice> for assetpress::Category {
    fn from(c: CategoryChoice) -> Self {
        match c {
            CategoryChoice::Favicon => assetpress::Category::Favicon,
            CategoryChoice::Apple => assetpress::Category::Apple,
            CategoryChoice::Android => assetpress::Category::Android,
            CategoryChoice::Social => assetpress::Category::Social,
            CategoryChoice::Ms => assetpress::Category::Ms,
            CategoryChoice::Webp => assetpress::Category::Webp,
            CategoryChoice::Svg => assetpress::Category::Svg,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FormatChoice {
    Png,
    Ico,
    Webp,
    Svg,
}

impl From<FormatChoice> for assetpress::AssetFormat {
    fn from(f: FormatChoice) -> Self {
        match f {
            FormatChoice::Png => assetpress::AssetFormat::Png,
            FormatChoice::Ico => assetpress::AssetFormat::Ico,
            FormatChoice::Webp => assetpress::AssetFormat::Webp,
            FormatChoice::Svg => assetpress::AssetFormat::Svg,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Gen(args) => cmd_gen(args),
        Command::Card(args) => cmd_card(args),
        Command::Targets => cmd_targets(),
    }
}

fn cmd_gen(args: GenArgs) -> anyhow::Result<()> {
    let source = std::fs::read(&args.in_path)
        .with_context(|| format!("read source image '{}'", args.in_path.display()))?;

    let mut targets = assetpress::catalog::default_targets();
    if let Some(category) = args.category {
        let category: assetpress::Category = category.into();
        targets.retain(|t| t.category == category);
    }

    let total = targets.len();
    let mut progress = |done: usize, _total: usize| {
        eprintln!("[{done}/{total}]");
    };
    let assets = assetpress::generate_assets(&source, &targets, Some(&mut progress))?;

    std::fs::create_dir_all(&args.out)
        .with_context(|| format!("create output dir '{}'", args.out.display()))?;
    for asset in &assets {
        let path = args.out.join(&asset.target.name);
        std::fs::write(&path, &asset.blob.bytes)
            .with_context(|| format!("write '{}'", path.display()))?;
    }

    eprintln!("wrote {} assets to {}", assets.len(), args.out.display());
    Ok(())
}

fn cmd_card(args: CardArgs) -> anyhow::Result<()> {
    let config = match &args.config {
        Some(path) => read_config_json(path)?,
        None => assetpress::OgConfig::default(),
    };

    let bg = args.bg.as_deref().map(read_raster).transpose()?;
    let logo = args.logo.as_deref().map(read_raster).transpose()?;

    let mut renderer = assetpress::CardRenderer::new();
    let blob = assetpress::export_card(
        &mut renderer,
        &config,
        bg.as_ref(),
        logo.as_ref(),
        args.format.into(),
    )?;

    if let Some(parent) = args.out.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(&args.out, &blob.bytes)
        .with_context(|| format!("write '{}'", args.out.display()))?;

    eprintln!("wrote {} ({} bytes)", args.out.display(), blob.bytes.len());
    Ok(())
}

fn cmd_targets() -> anyhow::Result<()> {
    let targets = assetpress::catalog::default_targets();
    println!("{}", serde_json::to_string_pretty(&targets)?);
    Ok(())
}

fn read_config_json(path: &Path) -> anyhow::Result<assetpress::OgConfig> {
    let f = File::open(path).with_context(|| format!("open config '{}'", path.display()))?;
    let r = BufReader::new(f);
    let config: assetpress::OgConfig =
        serde_json::from_reader(r).with_context(|| "parse card config JSON")?;
    Ok(config)
}

fn read_raster(path: &Path) -> anyhow::Result<assetpress::Raster> {
    let bytes =
        std::fs::read(path).with_context(|| format!("read image '{}'", path.display()))?;
    Ok(assetpress::Raster::decode(&bytes)?)
}
