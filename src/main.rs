use std::sync::Arc;
use std::time::Duration;

use farmkit::classify::{self, RandomStub, ScanKind, ScanRequest};
use farmkit::store::{FileStorage, ListOrder, Storage};
use farmkit::tools::{irrigation, mandi, moisture, weather, Crop};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    tracing::info!("farmkit demo session starting");

    let data_dir = std::env::temp_dir().join("farmkit-demo");
    let storage: Arc<dyn Storage> = Arc::new(FileStorage::new(&data_dir));
    tracing::info!(dir = %data_dir.display(), "stream storage ready");

    // Soil moisture probe: log a few readings, show the derived view.
    let mut readings = moisture::open_log(storage.clone());
    for percent in [34, 48, 61] {
        let record = readings.append(moisture::MoistureReading::new(percent))?;
        tracing::info!(id = record.id, percent, "moisture reading logged");
    }
    if let Some(stats) = readings.stats() {
        println!(
            "Moisture: {} readings, avg {}%, min {}%, max {}%",
            stats.count, stats.mean, stats.min, stats.max
        );
    }
    if let Some(latest) = readings.latest() {
        println!(
            "Latest reading: {}% ({})",
            latest.payload.percent,
            latest.payload.band().label()
        );
    }

    // Irrigation tracker.
    let mut water = irrigation::open_log(storage.clone());
    water.append(irrigation::IrrigationLog::new(
        "north field",
        irrigation::WaterSource::Tubewell,
        2.0,
    ))?;
    water.append(irrigation::IrrigationLog::new(
        "north field",
        irrigation::WaterSource::Canal,
        1.5,
    ))?;
    let usage = irrigation::summarize(&water);
    println!(
        "Irrigation: {} L total, Rs {} spent, {} L/day",
        usage.total_water_liters, usage.total_cost_rupees, usage.avg_daily_liters
    );

    // Mandi board with a price alert.
    let mut rng = StdRng::from_os_rng();
    let mut alerts = mandi::open_alerts(storage.clone());
    if alerts.is_empty() {
        alerts.append(mandi::PriceAlert::new("wheat", 2100))?;
    }
    let board = mandi::quote_board(mandi::District::Lucknow, &mut rng);
    for (alert, quote) in mandi::triggered(&alerts, &board) {
        println!(
            "Price alert: {} at Rs {} (watching for Rs {}+)",
            quote.commodity.name, quote.price, alert.payload.threshold_rupees
        );
    }

    // Weather advice.
    let now = weather::simulate(&mut rng);
    println!(
        "Weather: {} {}C, irrigation advice {:?}",
        now.condition.label(),
        now.temp_c,
        weather::irrigation_advice(&now)
    );

    // One disease scan through the stub classifier.
    let mut classifier = RandomStub::new().with_latency(Duration::from_millis(250));
    let request = ScanRequest {
        crop: Crop::Wheat,
        kind: ScanKind::Disease,
    };
    let diagnosis = classify::analyze(&mut classifier, &request).await;
    println!(
        "Scan result: {} ({}%, {:?} risk)",
        diagnosis.label, diagnosis.confidence_pct, diagnosis.severity
    );

    let mut history = classify::open_history(storage);
    history.append(classify::DiagnosisRecord::new(&request, &diagnosis))?;
    for record in history.list(Some(classify::HISTORY_DISPLAY_LIMIT), ListOrder::NewestFirst) {
        println!(
            "History: {} on {} ({}%)",
            record.payload.label,
            record.timestamp.format("%d %b %H:%M"),
            record.payload.confidence_pct
        );
    }

    tracing::info!("farmkit demo session complete");
    Ok(())
}
