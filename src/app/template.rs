use crate::core::codec::encode_raw_records;
use crate::domain::model::{
    RawRecord, COMPANY_NAME, DESCRIPTION, FOUNDED_YEAR, FUNDING_AMOUNT, FUNDING_ROUND, IPO_STATUS,
    LOCATION, STATUS, WEBSITE,
};
use crate::utils::error::Result;

/// 範本中的兩筆示範資料
pub fn template_records() -> Vec<RawRecord> {
    vec![
        [
            (COMPANY_NAME, "Example Startup Inc"),
            (FUNDING_AMOUNT, "150000000"),
            (LOCATION, "San Francisco, USA"),
            (STATUS, "active"),
            (IPO_STATUS, "private"),
            (FUNDING_ROUND, "Series C"),
            (DESCRIPTION, "AI-powered analytics platform"),
            (WEBSITE, "https://example.com"),
            (FOUNDED_YEAR, "2018"),
        ]
        .into_iter()
        .collect(),
        [
            (COMPANY_NAME, "Euro Tech GmbH"),
            (FUNDING_AMOUNT, "200M"),
            (LOCATION, "Berlin, Germany"),
            (STATUS, "active"),
            (IPO_STATUS, "private"),
            (FUNDING_ROUND, "Series D"),
            (DESCRIPTION, "Enterprise SaaS solution"),
            (WEBSITE, "https://eurotech.example"),
            (FOUNDED_YEAR, "2016"),
        ]
        .into_iter()
        .collect(),
    ]
}

pub fn render_template() -> Result<Vec<u8>> {
    encode_raw_records(&template_records())
}
