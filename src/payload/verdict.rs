use crate::error::PayloadError;
use serde_json::Value;

/// Closed set of review states the API is documented to report. Anything
/// else is a contract violation surfaced as [`PayloadError::UnknownVerdict`]
/// rather than silently skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeworkStatus {
    Approved,
    Reviewing,
    Rejected,
}

impl HomeworkStatus {
    pub fn verdict_text(self) -> &'static str {
        match self {
            HomeworkStatus::Approved => {
                "Work reviewed: the reviewer liked everything. Hooray!"
            }
            HomeworkStatus::Reviewing => "Work has been taken up for review.",
            HomeworkStatus::Rejected => "Work reviewed: the reviewer has comments.",
        }
    }
}

impl std::str::FromStr for HomeworkStatus {
    type Err = PayloadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "approved" => Ok(HomeworkStatus::Approved),
            "reviewing" => Ok(HomeworkStatus::Reviewing),
            "rejected" => Ok(HomeworkStatus::Rejected),
            _ => Err(PayloadError::UnknownVerdict(s.to_string())),
        }
    }
}

/// Build the notification text for a single homework item. Pure; only ever
/// called on the first item of a non-empty list.
pub fn parse_status(item: &Value) -> Result<String, PayloadError> {
    let status = item.get("status").ok_or(PayloadError::MissingKey("status"))?;
    let name = item
        .get("homework_name")
        .ok_or(PayloadError::MissingKey("homework_name"))?;

    let status = status
        .as_str()
        .ok_or_else(|| PayloadError::Shape("'status' is not a string".into()))?;
    let name = name
        .as_str()
        .ok_or_else(|| PayloadError::Shape("'homework_name' is not a string".into()))?;

    let status: HomeworkStatus = status.parse()?;

    Ok(format!(
        "Changed review status for \"{name}\". {}",
        status.verdict_text()
    ))
}
