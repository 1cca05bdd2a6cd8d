use csv::ReaderBuilder;
use infogain_tree::data::dataset::Dataset;
use infogain_tree::error::{Result, TreeError};
use infogain_tree::metrics::confusion::ClassificationMetrics;
use infogain_tree::trees::classifier::DecisionTreeClassifier;
use infogain_tree::trees::render::{feature_gain_report, render_tree};

/// Reads a CSV with a header row. Every column but the last is a binary
/// feature, the last one is the binary label.
fn read_file_classification(file_path: &str) -> Result<(Dataset<u8, u8>, Vec<String>)> {
    let mut reader = ReaderBuilder::new().has_headers(true).from_path(file_path)?;
    let headers = reader.headers()?.clone();
    let dimension = headers.len().saturating_sub(1);
    let feature_names = headers
        .iter()
        .take(dimension)
        .map(str::to_string)
        .collect::<Vec<_>>();

    let mut features = Vec::new();
    let mut labels = Vec::new();

    for result in reader.records() {
        let record = result?;
        let mut feature_row = Vec::new();

        for feature in record.iter().take(dimension) {
            feature_row.push(parse_bit(feature)?);
        }

        let label = record
            .get(dimension)
            .ok_or_else(|| TreeError::Parse("Missing label".into()))?;

        features.push(feature_row);
        labels.push(parse_bit(label)?);
    }

    Ok((Dataset::from_rows(&features, &labels)?, feature_names))
}

fn parse_bit(value: &str) -> Result<u8> {
    value
        .trim()
        .parse::<u8>()
        .map_err(|err| TreeError::Parse(format!("{:?}: {}", value, err)))
}

/// Ear Shape (pointy = 1), Face Shape (round = 1), Whiskers (present = 1); label is cat = 1.
fn cat_dataset() -> Result<(Dataset<u8, u8>, Vec<String>)> {
    let dataset = Dataset::from_rows(
        &[
            vec![1, 1, 1],
            vec![0, 0, 1],
            vec![0, 1, 0],
            vec![1, 0, 1],
            vec![1, 1, 1],
            vec![1, 1, 0],
            vec![0, 0, 0],
            vec![1, 1, 0],
            vec![0, 1, 0],
            vec![0, 1, 0],
        ],
        &[1, 1, 0, 0, 1, 1, 0, 1, 0, 0],
    )?;
    let names = ["Ear Shape", "Face Shape", "Whiskers"]
        .iter()
        .map(|name| name.to_string())
        .collect();
    Ok((dataset, names))
}

fn run() -> Result<()> {
    let (dataset, feature_names) = match std::env::args().nth(1) {
        Some(path) => read_file_classification(&path)?,
        None => cat_dataset()?,
    };
    log::info!("{:<32}{} examples", "loaded dataset", dataset.nrows());

    for max_depth in [1, 2] {
        let mut classifier = DecisionTreeClassifier::<u8, u8>::with_params(
            Some(max_depth),
            None,
            Some(feature_names.clone()),
        )?;

        if max_depth == 1 {
            println!(
                "{}\n",
                feature_gain_report(&dataset, &dataset.all_indices(), classifier.params())?
            );
        }

        classifier.fit(&dataset)?;
        let (x, y) = dataset.into_parts();
        let predictions = classifier.predict(x)?;

        println!("max_depth = {}", max_depth);
        println!("{}", render_tree(&classifier.records()?, y, classifier.params()));
        println!(
            "Training accuracy: {:.1}%\n",
            classifier.accuracy(y, &predictions)? * 100.0
        );
    }
    Ok(())
}

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("{}", err);
        std::process::exit(1);
    }
}
