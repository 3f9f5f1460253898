//! Branch model and leave calculation standard.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The policy that anchors leave accrual for a branch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaveStandard {
    /// Accrual anchored to the employee's personal hire anniversary.
    #[default]
    HireDate,
    /// Accrual anchored to the calendar (fiscal) year.
    FiscalYear,
}

impl LeaveStandard {
    /// Parses a standard, returning `None` for unrecognized values.
    ///
    /// Matching ignores case and surrounding whitespace.
    ///
    /// # Examples
    ///
    /// ```
    /// use leave_accrual::models::LeaveStandard;
    ///
    /// assert_eq!(LeaveStandard::parse_known("fiscal_year"), Some(LeaveStandard::FiscalYear));
    /// assert_eq!(LeaveStandard::parse_known(" Hire_Date "), Some(LeaveStandard::HireDate));
    /// assert_eq!(LeaveStandard::parse_known("quarterly"), None);
    /// ```
    pub fn parse_known(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "hire_date" => Some(Self::HireDate),
            "fiscal_year" => Some(Self::FiscalYear),
            _ => None,
        }
    }

    /// Returns the wire form of this standard.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::HireDate => "hire_date",
            Self::FiscalYear => "fiscal_year",
        }
    }
}

impl fmt::Display for LeaveStandard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An organizational unit that decides which leave standard applies.
///
/// The standard is kept as written in the branch directory. It is resolved
/// at calculation time, where an unrecognized value falls back to hire-date
/// and is reported as an `UNKNOWN_STANDARD` warning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Branch {
    /// The branch name, used by employees to reference it.
    pub name: String,
    /// The leave calculation standard as configured; `None` means hire-date.
    #[serde(default)]
    pub leave_calculation_standard: Option<String>,
}

impl Branch {
    /// Returns the configured standard when it is present but not recognized.
    ///
    /// # Examples
    ///
    /// ```
    /// use leave_accrual::models::Branch;
    ///
    /// let branch = Branch {
    ///     name: "Incheon".to_string(),
    ///     leave_calculation_standard: Some("fiscal-yaer".to_string()),
    /// };
    /// assert_eq!(branch.unrecognized_standard(), Some("fiscal-yaer"));
    /// ```
    pub fn unrecognized_standard(&self) -> Option<&str> {
        self.leave_calculation_standard
            .as_deref()
            .filter(|raw| !raw.trim().is_empty() && LeaveStandard::parse_known(raw).is_none())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_serialization() {
        assert_eq!(
            serde_json::to_string(&LeaveStandard::HireDate).unwrap(),
            "\"hire_date\""
        );
        assert_eq!(
            serde_json::to_string(&LeaveStandard::FiscalYear).unwrap(),
            "\"fiscal_year\""
        );
    }

    #[test]
    fn test_standard_deserialization() {
        let standard: LeaveStandard = serde_json::from_str("\"fiscal_year\"").unwrap();
        assert_eq!(standard, LeaveStandard::FiscalYear);
        assert!(serde_json::from_str::<LeaveStandard>("\"calendar\"").is_err());
    }

    #[test]
    fn test_parse_known_is_case_insensitive() {
        assert_eq!(
            LeaveStandard::parse_known(" Fiscal_Year "),
            Some(LeaveStandard::FiscalYear)
        );
        assert_eq!(LeaveStandard::parse_known("unknown"), None);
    }

    #[test]
    fn test_branch_without_standard() {
        let branch: Branch = serde_json::from_str(r#"{ "name": "Busan" }"#).unwrap();
        assert!(branch.leave_calculation_standard.is_none());
        assert!(branch.unrecognized_standard().is_none());
    }

    #[test]
    fn test_branch_keeps_misspelled_standard() {
        let branch: Branch = serde_json::from_str(
            r#"{ "name": "Incheon", "leave_calculation_standard": "fiscal-yaer" }"#,
        )
        .unwrap();
        assert_eq!(branch.leave_calculation_standard.as_deref(), Some("fiscal-yaer"));
        assert_eq!(branch.unrecognized_standard(), Some("fiscal-yaer"));
    }

    #[test]
    fn test_branch_with_known_standard_is_recognized() {
        let branch: Branch = serde_json::from_str(
            r#"{ "name": "Seoul", "leave_calculation_standard": "Fiscal_Year" }"#,
        )
        .unwrap();
        assert!(branch.unrecognized_standard().is_none());
    }
}
