mod settings;

use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;

use fishcrop_core::cropping::domain::bbox_cropper::BBoxCropper;
use fishcrop_core::imaging::infrastructure::image_file_reader::ImageFileReader;
use fishcrop_core::imaging::infrastructure::image_file_writer::ImageFileWriter;
use fishcrop_core::metadata::infrastructure::adapter_factory::{create_adapter, MetadataSchema};
use fishcrop_core::metadata::infrastructure::json_file_metadata_reader::JsonFileMetadataReader;
use fishcrop_core::pipeline::crop_image_use_case::{CropImageUseCase, CropOutcome};
use fishcrop_core::shared::constants::IMAGE_EXTENSIONS;

use settings::CropSettings;

/// Crop the detected fish out of an image using the bounding box from its metadata.
#[derive(Parser)]
#[command(name = "fishcrop")]
struct Cli {
    /// Input image file (e.g. JPG).
    input_image: PathBuf,

    /// Metadata JSON file holding the bounding box.
    input_metadata: PathBuf,

    /// Output image file for the crop.
    output: PathBuf,

    /// Size increase applied to the bounding box in width and height [default: 0.05].
    #[arg(long, allow_negative_numbers = true)]
    increase: Option<f64>,

    /// Metadata schema: fish-count or has-fish [default: fish-count].
    #[arg(long)]
    schema: Option<String>,

    /// Fail on truncated images instead of decoding what is available.
    #[arg(long)]
    reject_truncated: bool,

    /// Settings file (JSON) providing defaults for the options above.
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let schema = cli
        .schema
        .as_deref()
        .map(str::parse::<MetadataSchema>)
        .transpose()?;
    let settings = CropSettings::load(cli.config.as_deref())?.with_overrides(
        cli.increase,
        schema,
        cli.reject_truncated,
    );
    validate(&cli, &settings)?;

    let use_case = CropImageUseCase::new(
        Box::new(ImageFileReader::new(settings.allow_truncated)),
        Box::new(ImageFileWriter::new()),
        Box::new(JsonFileMetadataReader::new()),
        create_adapter(settings.schema),
        BBoxCropper::new(settings.increase)?,
    );

    match use_case.execute(&cli.input_image, &cli.input_metadata, &cli.output)? {
        CropOutcome::Cropped(rect) => log::info!(
            "Cropped {}x{} region at ({}, {})",
            rect.width(),
            rect.height(),
            rect.left,
            rect.top
        ),
        CropOutcome::Placeholder(dims) => {
            log::info!("Wrote {}x{} placeholder", dims.width, dims.height)
        }
    }
    log::info!("Output written to {}", cli.output.display());
    Ok(())
}

fn validate(cli: &Cli, settings: &CropSettings) -> Result<(), Box<dyn std::error::Error>> {
    if !cli.input_image.exists() {
        return Err(format!("Input image not found: {}", cli.input_image.display()).into());
    }
    if !cli.input_metadata.exists() {
        return Err(format!(
            "Metadata file not found: {}",
            cli.input_metadata.display()
        )
        .into());
    }
    if !settings.increase.is_finite() || settings.increase < 0.0 {
        return Err(format!(
            "Increase must be a non-negative number, got {}",
            settings.increase
        )
        .into());
    }
    if !is_image(&cli.output) {
        return Err(format!(
            "Output must have an image extension ({}), got {}",
            IMAGE_EXTENSIONS.join(", "),
            cli.output.display()
        )
        .into());
    }
    Ok(())
}

fn is_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| IMAGE_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}
