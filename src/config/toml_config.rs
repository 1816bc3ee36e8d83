use crate::core::filter::EligibilityCriteria;
use crate::utils::error::{Result, TrackerError};
use crate::utils::validation::{validate_non_empty_list, validate_non_negative_amount, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// 篩選條件設定檔；未填寫的欄位沿用預設值
///
/// ```toml
/// [criteria]
/// min_funding = 250000000
/// target_regions = ["usa", "canada"]
/// excluded_ipo_statuses = ["ipo", "public", "listed", "acquired"]
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    pub criteria: Option<CriteriaSection>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CriteriaSection {
    pub min_funding: Option<f64>,
    pub target_regions: Option<Vec<String>>,
    pub excluded_ipo_statuses: Option<Vec<String>>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(TrackerError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| TrackerError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 合併預設條件與設定檔內容
    pub fn criteria(&self) -> EligibilityCriteria {
        let defaults = EligibilityCriteria::default();
        let Some(section) = &self.criteria else {
            return defaults;
        };

        EligibilityCriteria::new(
            section.min_funding.unwrap_or(defaults.min_funding),
            section
                .target_regions
                .clone()
                .unwrap_or(defaults.target_regions),
            section
                .excluded_ipo_statuses
                .clone()
                .unwrap_or(defaults.excluded_ipo_statuses),
        )
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        let criteria = self.criteria();
        validate_non_negative_amount("criteria.min_funding", criteria.min_funding)?;
        validate_non_empty_list("criteria.target_regions", &criteria.target_regions)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::filter::{DEFAULT_MIN_FUNDING, DEFAULT_TARGET_REGIONS};
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = TomlConfig::from_toml_str("").unwrap();
        assert_eq!(config.criteria(), EligibilityCriteria::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_override() {
        let toml_content = r#"
[criteria]
min_funding = 250000000
target_regions = ["USA", "Canada"]
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        let criteria = config.criteria();

        assert_eq!(criteria.min_funding, 250_000_000.0);
        assert_eq!(criteria.target_regions, vec!["usa", "canada"]);
        assert_eq!(criteria.excluded_ipo_statuses, vec!["ipo", "public", "listed"]);
    }

    #[test]
    fn test_defaults_when_section_missing_fields() {
        let config = TomlConfig::from_toml_str("[criteria]\n").unwrap();
        let criteria = config.criteria();

        assert_eq!(criteria.min_funding, DEFAULT_MIN_FUNDING);
        assert_eq!(criteria.target_regions.len(), DEFAULT_TARGET_REGIONS.len());
    }

    #[test]
    fn test_invalid_values_fail_validation() {
        let negative = TomlConfig::from_toml_str("[criteria]\nmin_funding = -5.0\n").unwrap();
        assert!(negative.validate().is_err());

        let no_regions = TomlConfig::from_toml_str("[criteria]\ntarget_regions = []\n").unwrap();
        assert!(no_regions.validate().is_err());
    }

    #[test]
    fn test_unknown_keys_rejected() {
        let result = TomlConfig::from_toml_str("[criteria]\nmin_fundign = 5\n");
        assert!(matches!(
            result,
            Err(TrackerError::ConfigValidationError { .. })
        ));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[criteria]\nexcluded_ipo_statuses = [\"ipo\", \"acquired\"]\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(
            config.criteria().excluded_ipo_statuses,
            vec!["ipo", "acquired"]
        );
    }
}
