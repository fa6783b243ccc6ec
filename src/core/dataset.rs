use crate::core::{ConfigProvider, DailyRecord, MonthlyRecord, Storage};
use crate::utils::error::{ApiError, Result};

pub const MONTHLY_COLUMNS: [&str; 2] = ["title", "month"];
pub const DAILY_COLUMNS: [&str; 2] = ["title", "day_of_week"];

/// Cell values treated as a missing value, matching the usual CSV tooling defaults.
pub const NA_VALUES: [&str; 19] = [
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

fn present(value: String) -> Option<String> {
    if NA_VALUES.contains(&value.as_str()) {
        None
    } else {
        Some(value)
    }
}

/// Both release tables, loaded once at startup and read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    monthly: Vec<MonthlyRecord>,
    daily: Vec<DailyRecord>,
}

impl Dataset {
    pub fn new(monthly: Vec<MonthlyRecord>, daily: Vec<DailyRecord>) -> Self {
        Self { monthly, daily }
    }

    /// Reads both configured files through `storage`. Any failure is fatal to startup.
    pub async fn load<S: Storage, C: ConfigProvider>(storage: &S, config: &C) -> Result<Self> {
        let monthly_file = config.monthly_file();
        let daily_file = config.daily_file();

        tracing::debug!("Reading monthly dataset from: {}", monthly_file);
        let monthly_data = storage.read_file(monthly_file).await?;
        let monthly = parse_monthly(monthly_file, &monthly_data)?;

        tracing::debug!("Reading daily dataset from: {}", daily_file);
        let daily_data = storage.read_file(daily_file).await?;
        let daily = parse_daily(daily_file, &daily_data)?;

        tracing::info!(
            monthly_rows = monthly.len(),
            daily_rows = daily.len(),
            "Loaded release datasets"
        );

        Ok(Self::new(monthly, daily))
    }

    pub fn monthly(&self) -> &[MonthlyRecord] {
        &self.monthly
    }

    pub fn daily(&self) -> &[DailyRecord] {
        &self.daily
    }
}

pub fn parse_monthly(file: &str, data: &[u8]) -> Result<Vec<MonthlyRecord>> {
    Ok(read_columns(file, data, &MONTHLY_COLUMNS)?
        .into_iter()
        .map(|mut row| {
            let month = row.pop().unwrap_or_default();
            let title = row.pop().and_then(present);
            MonthlyRecord { title, month }
        })
        .collect())
}

pub fn parse_daily(file: &str, data: &[u8]) -> Result<Vec<DailyRecord>> {
    Ok(read_columns(file, data, &DAILY_COLUMNS)?
        .into_iter()
        .map(|mut row| {
            let day_of_week = row.pop().unwrap_or_default();
            let title = row.pop().and_then(present);
            DailyRecord { title, day_of_week }
        })
        .collect())
}

/// Returns, for every data row, the values of `required` in that order.
///
/// Header names are lowercased before matching, so `Title` and `TITLE` both
/// satisfy `title`. Cell values are kept verbatim.
fn read_columns(file: &str, data: &[u8], required: &[&str]) -> Result<Vec<Vec<String>>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(data);

    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(|h| h.to_lowercase())
        .collect();

    let mut indices = Vec::with_capacity(required.len());
    let mut missing = Vec::new();
    for column in required {
        match headers.iter().position(|h| h == column) {
            Some(idx) => indices.push(idx),
            None => missing.push(column.to_string()),
        }
    }

    if !missing.is_empty() {
        return Err(ApiError::MissingColumnsError {
            file: file.to_string(),
            missing,
        });
    }

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let row = indices
            .iter()
            .map(|&idx| record.get(idx).unwrap_or_default().to_string())
            .collect();
        rows.push(row);
    }

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_monthly_with_extra_columns() {
        let csv = "id,title,release_date,month\n1,Heat,1995-12-15,December\n2,Up,2009-05-29,May\n";
        let records = parse_monthly("mes.csv", csv.as_bytes()).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].title.as_deref(), Some("Heat"));
        assert_eq!(records[0].month, "December");
        assert_eq!(records[1].month, "May");
    }

    #[test]
    fn test_headers_are_case_insensitive() {
        let csv = "Title,Day_Of_Week\nAlien,Friday\n";
        let records = parse_daily("dia.csv", csv.as_bytes()).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].day_of_week, "Friday");
    }

    #[test]
    fn test_column_order_does_not_matter() {
        let csv = "month,title\nJanuary,Brazil\n";
        let records = parse_monthly("mes.csv", csv.as_bytes()).unwrap();

        assert_eq!(records[0].title.as_deref(), Some("Brazil"));
        assert_eq!(records[0].month, "January");
    }

    #[test]
    fn test_empty_title_is_none() {
        let csv = "title,month\n,March\nSolaris,March\n";
        let records = parse_monthly("mes.csv", csv.as_bytes()).unwrap();

        assert_eq!(records[0].title, None);
        assert_eq!(records[1].title.as_deref(), Some("Solaris"));
    }

    #[test]
    fn test_na_markers_are_missing_titles() {
        let csv = "title,month\nNA,March\nnull,March\nN/A,March\nNaN,March\nNone,March\nNan,March\n";
        let records = parse_monthly("mes.csv", csv.as_bytes()).unwrap();

        let titles: Vec<Option<&str>> = records.iter().map(|r| r.title.as_deref()).collect();
        assert_eq!(titles, vec![None, None, None, None, None, Some("Nan")]);
    }

    #[test]
    fn test_values_are_not_trimmed() {
        let csv = "title,month\nBrazil, January\n";
        let records = parse_monthly("mes.csv", csv.as_bytes()).unwrap();

        assert_eq!(records[0].month, " January");
    }

    #[test]
    fn test_missing_columns_are_reported() {
        let csv = "name,day\nAlien,Friday\n";
        let err = parse_daily("dia.csv", csv.as_bytes()).unwrap_err();

        match err {
            ApiError::MissingColumnsError { file, missing } => {
                assert_eq!(file, "dia.csv");
                assert_eq!(missing, vec!["title".to_string(), "day_of_week".to_string()]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_ragged_row_is_csv_error() {
        let csv = "title,month\nBrazil,January,extra\n";
        let err = parse_monthly("mes.csv", csv.as_bytes()).unwrap_err();

        assert!(matches!(err, ApiError::CsvError(_)));
    }

    #[test]
    fn test_header_only_file_is_empty_table() {
        let records = parse_monthly("mes.csv", b"title,month\n").unwrap();
        assert!(records.is_empty());
    }
}
