use blobs::{Connectivity, FloodFillExtractor, Pipeline};
use clap::{Parser, Subcommand};
use cli::DetectJob;
use color_eyre::eyre::Result;
use image::Rgb;
use imageproc::drawing::draw_hollow_rect_mut;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{self, EnvFilter};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Detect blob bounding boxes in a mask image
    Detect {
        /// Path to the input image
        #[arg(short, long)]
        input: PathBuf,
        /// Path to save an annotated copy of the input
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Path to save the JSON report
        #[arg(short, long)]
        json: Option<PathBuf>,
        /// Binarization threshold (pixels above it are foreground)
        #[arg(short, long, default_value = "127")]
        threshold: u8,
        /// Gaussian blur sigma applied before thresholding
        #[arg(long)]
        blur: Option<f32>,
        /// Drop rectangles narrower or shorter than this many pixels
        #[arg(long)]
        min_size: Option<u32>,
        /// Use 4-connectivity instead of the default 8-connectivity
        #[arg(long)]
        four_connected: bool,
    },
    /// Run a detection job from a JSON configuration file
    Process {
        /// Path to the JSON configuration file
        #[arg(short, long)]
        config: PathBuf,
    },
}

fn main() -> Result<()> {
    color_eyre::install()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Detect {
            input,
            output,
            json,
            threshold,
            blur,
            min_size,
            four_connected,
        } => {
            let job = DetectJob {
                input: input.display().to_string(),
                output_image: output.map(|p| p.display().to_string()),
                output_json: json.map(|p| p.display().to_string()),
                threshold,
                blur_sigma: blur,
                min_width: min_size,
                min_height: min_size,
            };
            run_job(&job, four_connected)?;
        }
        Commands::Process { config } => {
            let job = DetectJob::from_file(&config)?;
            info!("Detection job: {:?}", job);
            run_job(&job, false)?;
        }
    }

    Ok(())
}

fn run_job(job: &DetectJob, four_connected: bool) -> Result<()> {
    let connectivity = if four_connected {
        Connectivity::C4
    } else {
        Connectivity::C8
    };

    let mut builder = Pipeline::builder().set_extractor(FloodFillExtractor::new(connectivity));
    if let Some(sigma) = job.blur_sigma {
        builder = builder.add_preprocessor(blobs::GaussianBlurPreprocessor { sigma });
    }
    builder = builder.add_preprocessor(blobs::ThresholdPreprocessor {
        threshold: job.threshold,
    });
    if let (Some(min_width), Some(min_height)) = (job.min_width, job.min_height) {
        builder = builder.with_min_size(min_width, min_height);
    }
    let pipeline = builder.build();

    info!("Processing '{}' ({})", job.input, pipeline.info());
    let report = pipeline.process_path(&job.input)?;
    info!("Found {} blobs", report.rects.len());

    if let Some(output_image) = &job.output_image {
        let mut canvas = image::open(&job.input)?.to_rgb8();
        for rect in &report.rects {
            draw_hollow_rect_mut(&mut canvas, rect.to_imageproc(), Rgb([255u8, 0, 0]));
        }
        canvas.save(output_image)?;
        info!("Annotated image saved to '{}'", output_image);
    }

    if let Some(output_json) = &job.output_json {
        report.save_json(output_json)?;
        info!("Report saved to '{}'", output_json);
    }

    Ok(())
}
