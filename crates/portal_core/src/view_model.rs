use crate::payload::{AnalysisResponse, JobListing};

pub const EXPERIENCE_PLACEHOLDER: &str = "N/A";
pub const LEVEL_PLACEHOLDER: &str = "N/A";
pub const EDUCATION_PLACEHOLDER: &str = "Unknown";
pub const COMPANY_PLACEHOLDER: &str = "Unknown Co";
pub const CAREER_ADVICE_PLACEHOLDER: &str = "Keep pushing forward!";
pub const SCORE_PLACEHOLDER: &str = "N/A";
pub const UNSPECIFIED_PLACEHOLDER: &str = "Not specified";
pub const MAX_ADVICE_ITEMS: usize = 3;
pub const MAX_REQUIREMENT_TAGS: usize = 3;
/// Scores strictly above this are shown in the high tier.
pub const HIGH_MATCH_THRESHOLD: i64 = 80;

const TITLE_SEPARATOR: &str = " at ";
const LIVE_SOURCE_MARKER: &str = "Live";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub file_name: Option<String>,
    pub loading: bool,
    pub results_visible: bool,
    pub results: Option<ResultsView>,
    /// Bumped each time new results are stored; renderers compare it to skip
    /// rebuilding unchanged containers.
    pub results_revision: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ResultsView {
    pub stats: StatsView,
    pub skills: Vec<String>,
    pub advice: AdviceView,
    pub jobs: Vec<JobCardView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StatsView {
    /// Already suffixed, e.g. `"5 Yrs"` or `"N/A Yrs"`.
    pub experience: String,
    pub level: String,
    pub education_field: String,
    pub provider: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AdviceView {
    pub strengths: Vec<String>,
    pub improvement_areas: Vec<String>,
    pub actionable_tips: Vec<String>,
    pub career_advice: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobCardView {
    pub role: String,
    pub company: String,
    pub score_label: String,
    pub tier: MatchTier,
    pub source: SourceKind,
    pub location: String,
    pub salary_range: String,
    pub requirements: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchTier {
    High,
    Medium,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    Live,
    Database,
}

impl ResultsView {
    pub fn from_response(response: &AnalysisResponse) -> Self {
        let profile = &response.profile;
        let advice = &response.advice;

        let stats = StatsView {
            experience: format!(
                "{} Yrs",
                profile
                    .years_of_experience
                    .as_deref()
                    .unwrap_or(EXPERIENCE_PLACEHOLDER)
            ),
            level: profile
                .experience_level
                .clone()
                .unwrap_or_else(|| LEVEL_PLACEHOLDER.to_string()),
            education_field: profile
                .education
                .field
                .clone()
                .unwrap_or_else(|| EDUCATION_PLACEHOLDER.to_string()),
            provider: response.provider_used.clone(),
        };

        let advice = AdviceView {
            strengths: first_n(&advice.strengths, MAX_ADVICE_ITEMS),
            improvement_areas: first_n(&advice.improvement_areas, MAX_ADVICE_ITEMS),
            actionable_tips: first_n(&advice.actionable_tips, MAX_ADVICE_ITEMS),
            career_advice: advice
                .career_advice
                .clone()
                .unwrap_or_else(|| CAREER_ADVICE_PLACEHOLDER.to_string()),
        };

        Self {
            stats,
            skills: profile.technical_skills.clone(),
            advice,
            jobs: response.jobs.iter().map(JobCardView::from_listing).collect(),
        }
    }
}

impl JobCardView {
    pub fn from_listing(job: &JobListing) -> Self {
        let (role, company) = split_title(job.title.as_deref().unwrap_or_default());
        let score = job.match_score.as_deref();
        Self {
            role,
            company: company.unwrap_or_else(|| COMPANY_PLACEHOLDER.to_string()),
            score_label: score.unwrap_or(SCORE_PLACEHOLDER).to_string(),
            tier: match_tier(score),
            source: source_kind(job.source.as_deref()),
            location: or_unspecified(job.location.as_deref()),
            salary_range: or_unspecified(job.salary_range.as_deref()),
            requirements: first_n(&job.requirements, MAX_REQUIREMENT_TAGS),
        }
    }
}

/// Splits `"Role at Company"` on the literal separator.
///
/// The company is the segment between the first and second separator, so
/// `"A at B at C"` yields `("A", Some("B"))`. An empty company reads as absent.
pub fn split_title(title: &str) -> (String, Option<String>) {
    let mut segments = title.split(TITLE_SEPARATOR);
    let role = segments.next().unwrap_or_default().to_string();
    let company = segments
        .next()
        .filter(|segment| !segment.is_empty())
        .map(str::to_string);
    (role, company)
}

/// Leading-integer parse: optional leading whitespace, optional sign, then
/// decimal digits; anything after the digits is ignored. `None` when no digit
/// follows the sign. Overlong numbers saturate.
pub fn parse_leading_int(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let mut value: i64 = 0;
    let mut seen_digit = false;
    for byte in digits.bytes() {
        if !byte.is_ascii_digit() {
            break;
        }
        seen_digit = true;
        value = value
            .saturating_mul(10)
            .saturating_add(i64::from(byte - b'0'));
    }

    if !seen_digit {
        return None;
    }
    Some(if negative { -value } else { value })
}

/// Unparseable or missing scores fall into the medium tier.
pub fn match_tier(score: Option<&str>) -> MatchTier {
    match score.and_then(parse_leading_int) {
        Some(value) if value > HIGH_MATCH_THRESHOLD => MatchTier::High,
        _ => MatchTier::Medium,
    }
}

pub fn source_kind(source: Option<&str>) -> SourceKind {
    match source {
        Some(source) if source.contains(LIVE_SOURCE_MARKER) => SourceKind::Live,
        _ => SourceKind::Database,
    }
}

fn first_n(items: &[String], limit: usize) -> Vec<String> {
    items.iter().take(limit).cloned().collect()
}

fn or_unspecified(value: Option<&str>) -> String {
    value.unwrap_or(UNSPECIFIED_PLACEHOLDER).to_string()
}

#[cfg(test)]
mod tests {
    use super::{parse_leading_int, split_title};

    #[test]
    fn leading_int_follows_prefix_rules() {
        assert_eq!(parse_leading_int("85%"), Some(85));
        assert_eq!(parse_leading_int("  42 percent"), Some(42));
        assert_eq!(parse_leading_int("-7"), Some(-7));
        assert_eq!(parse_leading_int("+90%"), Some(90));
        assert_eq!(parse_leading_int("91.9"), Some(91));
        assert_eq!(parse_leading_int("NaN%"), None);
        assert_eq!(parse_leading_int("%85"), None);
        assert_eq!(parse_leading_int("-"), None);
        assert_eq!(parse_leading_int(""), None);
        assert_eq!(parse_leading_int("99999999999999999999999"), Some(i64::MAX));
    }

    #[test]
    fn title_split_uses_second_segment_as_company() {
        assert_eq!(
            split_title("Engineer at Acme"),
            ("Engineer".to_string(), Some("Acme".to_string()))
        );
        assert_eq!(
            split_title("Lead at Acme at Berlin"),
            ("Lead".to_string(), Some("Acme".to_string()))
        );
        assert_eq!(split_title("Solo Title"), ("Solo Title".to_string(), None));
        assert_eq!(split_title("Engineer at "), ("Engineer".to_string(), None));
        assert_eq!(split_title("Data Analyst"), ("Data Analyst".to_string(), None));
    }
}
