//! Run the station and reading pipeline against a data set.

use crate::source::DataSet;
use log::warn;
use tide_data::query::NO_DATA_MESSAGE;
use tide_data::{
    load_catalog, query_readings, QueryOutcome, ReadingQuery, ReadingSeries, StationCatalog,
};

/// One line per station: id, then display name.
pub fn catalog_lines(catalog: &StationCatalog) -> Vec<String> {
    catalog
        .iter()
        .map(|s| format!("{}\t{}", s.id, s.display_name()))
        .collect()
}

/// Title line, then one `dateTime<TAB>value` line per point.
pub fn format_series(series: &ReadingSeries) -> String {
    let mut out = series.chart_config().title;
    for point in &series.points {
        out.push_str(&format!("\n{}\t{:.3}", point.date_time, point.value));
    }
    out
}

/// Print the catalog of a data set.
pub async fn run_stations(data_dir: &str) -> anyhow::Result<()> {
    let catalog = load_catalog(&DataSet::open(data_dir)?).await?;
    for line in catalog_lines(&catalog) {
        println!("{}", line);
    }
    Ok(())
}

/// Validate the query, load the catalog for the label, and fetch the readings.
///
/// A catalog that fails to load only costs the label; the query still runs.
pub async fn query_data_set(
    data_dir: &str,
    station: &str,
    start: &str,
    end: &str,
) -> anyhow::Result<QueryOutcome> {
    let query = ReadingQuery::new(station, start, end)?;
    let source = DataSet::open(data_dir)?;
    let catalog = match load_catalog(&source).await {
        Ok(catalog) => catalog,
        Err(e) => {
            warn!("Continuing without station names: {}", e);
            StationCatalog::default()
        }
    };
    Ok(query_readings(&source, &catalog, &query).await?)
}

pub async fn run_reading_query(
    data_dir: &str,
    station: &str,
    start: &str,
    end: &str,
    json: bool,
) -> anyhow::Result<()> {
    match query_data_set(data_dir, station, start, end).await? {
        QueryOutcome::Empty => println!("{}", NO_DATA_MESSAGE),
        QueryOutcome::Series(series) if json => {
            let doc = serde_json::json!({
                "chart": series.chart_config(),
                "series": series,
            });
            println!("{}", serde_json::to_string_pretty(&doc)?);
        }
        QueryOutcome::Series(series) => println!("{}", format_series(&series)),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_server::{serve, Route};
    use tide_data::source::DirSource;
    use tide_data::{Reading, TideError};

    const FIXTURES: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../fixtures/data");

    #[tokio::test]
    async fn test_fixture_catalog() {
        let catalog = load_catalog(&DirSource::new(FIXTURES)).await.unwrap();
        assert_eq!(
            catalog_lines(&catalog),
            vec![
                "0018\taberdeen",
                "E70039\tAvonmouth Portbury",
                "E71539\tSheerness",
            ]
        );
    }

    #[tokio::test]
    async fn test_fixture_query_range() {
        let outcome = query_data_set(FIXTURES, "E70039", "2025-08-01", "2025-08-02")
            .await
            .unwrap();
        let QueryOutcome::Series(series) = outcome else {
            panic!("expected a series");
        };
        assert_eq!(series.station_label, "Avonmouth Portbury");
        assert_eq!(series.len(), 3);
    }

    #[tokio::test]
    async fn test_fixture_query_empty() {
        let outcome = query_data_set(FIXTURES, "0018", "2025-09-01", "")
            .await
            .unwrap();
        assert_eq!(outcome, QueryOutcome::Empty);
    }

    #[tokio::test]
    async fn test_missing_station_file() {
        let err = query_data_set(FIXTURES, "E71539", "2025-08-01", "")
            .await
            .unwrap_err();
        let err = err.downcast::<TideError>().unwrap();
        assert!(matches!(err, TideError::ReadingFetch(_)));
    }

    #[tokio::test]
    async fn test_missing_catalog_falls_back_to_id() {
        let dir = std::env::temp_dir().join(format!("tide-cmd-no-catalog-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(
            dir.join("0018.json"),
            r#"{"items": [{"dateTime": "2025-08-01T06:00:00Z", "value": 1.2}]}"#,
        )
        .unwrap();

        let outcome = query_data_set(dir.to_str().unwrap(), "0018", "2025-08-01", "")
            .await
            .unwrap();
        std::fs::remove_dir_all(&dir).unwrap();

        let QueryOutcome::Series(series) = outcome else {
            panic!("expected a series");
        };
        assert_eq!(series.station_label, "0018");
    }

    #[tokio::test]
    async fn test_invalid_query() {
        let err = query_data_set(FIXTURES, "", "2025-08-01", "")
            .await
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<TideError>(),
            Some(TideError::InvalidQuery(_))
        ));
    }

    #[tokio::test]
    async fn test_query_over_http() {
        let base = serve(vec![
            Route::ok(
                "/stations.json",
                r#"[{"id": "E70039", "label": "Avonmouth Portbury"}]"#,
            ),
            Route::ok(
                "/E70039.json",
                r#"{"items": [
                    {"dateTime": "2025-08-01T00:00:00Z", "value": 4.1},
                    {"dateTime": "2025-08-03T00:00:00Z", "value": 4.3}
                ]}"#,
            ),
            Route::status("/E72639.json", 500),
        ])
        .await;

        let outcome = query_data_set(&base, "E70039", "2025-08-01", "")
            .await
            .unwrap();
        let QueryOutcome::Series(series) = outcome else {
            panic!("expected a series");
        };
        assert_eq!(series.station_label, "Avonmouth Portbury");
        assert_eq!(series.len(), 1);

        let err = query_data_set(&base, "E72639", "2025-08-01", "")
            .await
            .unwrap_err();
        assert_eq!(
            err.downcast_ref::<TideError>()
                .and_then(TideError::user_message)
                .as_deref(),
            Some("Error fetching data.")
        );
    }

    #[test]
    fn test_format_series() {
        let series = ReadingSeries::new(
            "Whitby",
            vec![Reading::new("2025-08-01T00:00:00Z", 1.5)],
        );
        assert_eq!(
            format_series(&series),
            "Tide Level (m) at Whitby\n2025-08-01T00:00:00Z\t1.500"
        );
    }
}
