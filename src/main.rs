use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};

use clap::Parser;
use log::info;

use heartcheck::{
    chest_pain_description, ArtifactStore, HeartClassifier, Page, PredictionPipeline,
    PredictionRequest,
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Page to open: "Heart Disease Prediction", "About This App" or "About Me"
    #[arg(short, long, default_value = "Heart Disease Prediction")]
    page: String,

    /// Chest pain type
    #[arg(long, default_value_t = 2, value_parser = clap::value_parser!(i64).range(1..=4))]
    cp: i64,

    /// Maximum heart rate achieved
    #[arg(long, default_value_t = 80, value_parser = clap::value_parser!(i64).range(71..=202))]
    thalach: i64,

    /// ST segment slope on the electrocardiogram
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(i64).range(0..=2))]
    slope: i64,

    /// ST segment depression magnitude, 0.0 to 6.2
    #[arg(long, default_value_t = 1.0)]
    oldpeak: f32,

    /// Exercise induced angina
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(i64).range(0..=1))]
    exang: i64,

    /// Number of major vessels
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(i64).range(0..=3))]
    ca: i64,

    /// Thalium stress test result
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(i64).range(1..=3))]
    thal: i64,

    /// Jenis kelamin: "Perempuan" or "Pria"
    #[arg(long, default_value = "Perempuan")]
    sex: String,

    /// Age in years
    #[arg(long, default_value_t = 30, value_parser = clap::value_parser!(i64).range(29..=77))]
    age: i64,

    /// Directory containing the classifier artifact (defaults to the
    /// heartcheck cache directory)
    #[arg(long)]
    model_dir: Option<PathBuf>,

    /// Seconds to pause before revealing the verdict
    #[arg(long, default_value_t = 3)]
    delay_secs: u64,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let page = Page::from_label(&args.page).ok_or_else(|| {
        anyhow::anyhow!(
            "Unknown page '{}' (expected one of: {})",
            args.page,
            heartcheck::pages::NAV_LABELS.join(", ")
        )
    })?;

    match page {
        Page::HeartDiseasePrediction => run_prediction(&args),
        Page::AboutThisApp | Page::AboutMe => {
            println!("{}", page.body());
            Ok(())
        }
    }
}

fn run_prediction(args: &Args) -> anyhow::Result<()> {
    println!("{}", Page::HeartDiseasePrediction.body());

    let store = match &args.model_dir {
        Some(dir) => ArtifactStore::new(dir)?,
        None => ArtifactStore::new_default()?,
    };
    let model_path = store.ensure_model_available()?;

    let start_time = Instant::now();
    info!("Building classifier from {:?}...", model_path);
    let classifier = HeartClassifier::builder()
        .with_model_file(model_path)?
        .build()?;
    let model_info = classifier.info();
    info!(
        "Classifier ready (took {:.2?}): model {}, input '{}', {} features, labels {:?}",
        start_time.elapsed(),
        model_info.model_path,
        model_info.input_name,
        model_info.num_features,
        model_info.output_labels
    );

    let pipeline = PredictionPipeline::new(Arc::new(classifier))
        .with_delay(Duration::from_secs(args.delay_secs));

    let request = PredictionRequest {
        cp: args.cp,
        thalach: args.thalach,
        slope: args.slope,
        oldpeak: args.oldpeak,
        exang: args.exang,
        ca: args.ca,
        thal: args.thal,
        sex_label: args.sex.clone(),
        age: args.age,
    };

    println!("Jenis nyeri dada yang dirasakan oleh pasien: {}", chest_pain_description(args.cp));
    println!("\nProcessing...");
    let prediction = pipeline.handle(&request)?;
    println!("\nJenis kelamin: {}", prediction.record.sex.label());

    println!("\nUser input parameters:");
    println!("{}", serde_json::to_string_pretty(&prediction.record)?);
    println!("\n{}", prediction.verdict.message());

    Ok(())
}
