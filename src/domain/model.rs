use serde::{Deserialize, Serialize};

/// One row of the per-month release file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyRecord {
    pub title: Option<String>,
    pub month: String,
}

/// One row of the per-weekday release file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyRecord {
    pub title: Option<String>,
    pub day_of_week: String,
}

/// Body returned by both counting endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub mensaje: String,
}

impl MessageResponse {
    pub fn for_month(month: &str, count: usize) -> Self {
        Self {
            mensaje: format!(
                "Cantidad de películas que fueron estrenadas en el mes de {}: {}",
                month, count
            ),
        }
    }

    pub fn for_weekday(day: &str, count: usize) -> Self {
        Self {
            mensaje: format!(
                "Cantidad de películas que fueron estrenadas en el día {}: {}",
                day, count
            ),
        }
    }
}
