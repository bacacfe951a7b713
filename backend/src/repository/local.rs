//! Local file forecast repository
//!
//! Artifacts live at `<storage_root>/<car park name>.<ext>`, one per car park.

use std::fmt;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::Deserialize;
use shared::{
    parse_forecast_timestamp, validate_car_park_name, CarParkError, CarParkResult, ForecastPoint,
    ForecastSeries,
};

use super::ForecastRepository;

/// Timestamp column written by the training process
const TIMESTAMP_COLUMN: &str = "ds_forecast";

/// On-disk encoding of forecast artifacts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactFormat {
    /// `ds_forecast` plus `yhat_<car park>` columns
    Csv,
    /// `{"car_park": ..., "points": [{"ds_forecast": ..., "yhat": ...}]}`
    Json,
}

impl ArtifactFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ArtifactFormat::Csv => "csv",
            ArtifactFormat::Json => "json",
        }
    }
}

impl fmt::Display for ArtifactFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// JSON artifact layout
#[derive(Debug, Deserialize)]
struct JsonArtifact {
    #[serde(default)]
    car_park: Option<String>,
    points: Vec<JsonPoint>,
}

#[derive(Debug, Deserialize)]
struct JsonPoint {
    ds_forecast: String,
    yhat: f64,
}

/// Reads forecast artifacts from a directory
#[derive(Debug, Clone)]
pub struct LocalFileForecastRepository {
    root: PathBuf,
    format: ArtifactFormat,
}

impl LocalFileForecastRepository {
    pub fn new(root: impl Into<PathBuf>, format: ArtifactFormat) -> Self {
        Self {
            root: root.into(),
            format,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn format(&self) -> ArtifactFormat {
        self.format
    }

    /// Conventional artifact location for a car park
    pub fn artifact_path(&self, car_park: &str) -> CarParkResult<PathBuf> {
        validate_car_park_name(car_park)
            .map_err(|reason| CarParkError::artifact_not_found(car_park, reason))?;
        Ok(self
            .root
            .join(format!("{}.{}", car_park, self.format.extension())))
    }

    fn read_artifact(&self, car_park: &str, path: &Path) -> CarParkResult<Vec<u8>> {
        std::fs::read(path).map_err(|e| {
            let reason = match e.kind() {
                ErrorKind::NotFound => format!("no artifact at {}", path.display()),
                _ => format!("could not read {}: {}", path.display(), e),
            };
            CarParkError::artifact_not_found(car_park, reason)
        })
    }
}

impl ForecastRepository for LocalFileForecastRepository {
    fn load_forecast(&self, car_park: &str) -> CarParkResult<Arc<ForecastSeries>> {
        let path = self.artifact_path(car_park)?;
        tracing::debug!(car_park, path = %path.display(), "Loading forecast artifact");

        let bytes = self.read_artifact(car_park, &path)?;
        let series = match self.format {
            ArtifactFormat::Csv => decode_csv(car_park, &bytes)?,
            ArtifactFormat::Json => decode_json(car_park, &bytes)?,
        };

        tracing::debug!(car_park, points = series.len(), "Forecast artifact loaded");
        Ok(Arc::new(series))
    }
}

/// Decode a CSV artifact. Columns other than the timestamp and this car
/// park's value column are ignored.
pub fn decode_csv(car_park: &str, bytes: &[u8]) -> CarParkResult<ForecastSeries> {
    let corrupt = |reason: String| CarParkError::corrupt_artifact(car_park, reason);
    let value_column = format!("yhat_{}", car_park);

    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(bytes);

    let headers = reader
        .headers()
        .map_err(|e| corrupt(format!("unreadable header: {}", e)))?
        .clone();
    let timestamp_idx = headers
        .iter()
        .position(|h| h == TIMESTAMP_COLUMN)
        .ok_or_else(|| corrupt(format!("missing column {}", TIMESTAMP_COLUMN)))?;
    let value_idx = headers
        .iter()
        .position(|h| h == value_column)
        .ok_or_else(|| corrupt(format!("missing column {}", value_column)))?;

    let mut points = Vec::new();
    for (row, record) in reader.records().enumerate() {
        let record = record.map_err(|e| corrupt(format!("row {}: {}", row + 1, e)))?;
        let raw_timestamp = record.get(timestamp_idx).unwrap_or_default();
        let raw_value = record.get(value_idx).unwrap_or_default();

        let timestamp = parse_forecast_timestamp(raw_timestamp)
            .ok_or_else(|| corrupt(format!("row {}: bad timestamp {:?}", row + 1, raw_timestamp)))?;
        let predicted_available = raw_value
            .parse::<f64>()
            .map_err(|_| corrupt(format!("row {}: bad value {:?}", row + 1, raw_value)))?;

        points.push(ForecastPoint {
            timestamp,
            predicted_available,
        });
    }

    ForecastSeries::from_points(car_park, points)
}

/// Decode a JSON artifact
pub fn decode_json(car_park: &str, bytes: &[u8]) -> CarParkResult<ForecastSeries> {
    let corrupt = |reason: String| CarParkError::corrupt_artifact(car_park, reason);

    let artifact: JsonArtifact =
        serde_json::from_slice(bytes).map_err(|e| corrupt(e.to_string()))?;

    if let Some(owner) = artifact.car_park.as_deref() {
        if owner != car_park {
            return Err(corrupt(format!("artifact belongs to {}", owner)));
        }
    }

    let points = artifact
        .points
        .into_iter()
        .map(|point| {
            parse_forecast_timestamp(&point.ds_forecast)
                .map(|timestamp| ForecastPoint {
                    timestamp,
                    predicted_available: point.yhat,
                })
                .ok_or_else(|| corrupt(format!("bad timestamp {:?}", point.ds_forecast)))
        })
        .collect::<CarParkResult<Vec<_>>>()?;

    ForecastSeries::from_points(car_park, points)
}
