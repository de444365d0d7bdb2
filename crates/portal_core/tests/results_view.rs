use portal_core::{AnalysisResponse, MatchTier, ResultsView, SourceKind};
use pretty_assertions::assert_eq;
use serde_json::json;

fn results(body: serde_json::Value) -> ResultsView {
    ResultsView::from_response(&AnalysisResponse::from_json(body).unwrap())
}

#[test]
fn empty_sections_use_placeholders() {
    let view = results(json!({"status": "success", "profile": {}, "advice": {}, "jobs": []}));

    assert_eq!(view.stats.experience, "N/A Yrs");
    assert_eq!(view.stats.level, "N/A");
    assert_eq!(view.stats.education_field, "Unknown");
    assert_eq!(view.stats.provider, None);
    assert!(view.skills.is_empty());
    assert!(view.advice.strengths.is_empty());
    assert!(view.advice.actionable_tips.is_empty());
    assert_eq!(view.advice.career_advice, "Keep pushing forward!");
    assert!(view.jobs.is_empty());
}

#[test]
fn profile_values_are_shown() {
    let view = results(json!({
        "status": "success",
        "provider_used": "ollama",
        "profile": {
            "years_of_experience": 7,
            "experience_level": "Senior",
            "education": {"field": "Computer Science"},
            "technical_skills": ["Rust", "SQL", "Rust"]
        }
    }));

    assert_eq!(view.stats.experience, "7 Yrs");
    assert_eq!(view.stats.level, "Senior");
    assert_eq!(view.stats.education_field, "Computer Science");
    assert_eq!(view.stats.provider.as_deref(), Some("ollama"));
    assert_eq!(view.skills, vec!["Rust", "SQL", "Rust"]);
}

#[test]
fn whole_number_floats_and_falsy_values_display_like_the_page() {
    let view = results(json!({
        "status": "success",
        "profile": {
            "years_of_experience": 5.0,
            "experience_level": false,
            "education": {"field": 0}
        },
        "advice": {"career_advice": false},
        "jobs": [{"title": "Engineer at Acme", "match_score": 92.0}]
    }));

    assert_eq!(view.stats.experience, "5 Yrs");
    assert_eq!(view.stats.level, "N/A");
    assert_eq!(view.stats.education_field, "Unknown");
    assert_eq!(view.advice.career_advice, "Keep pushing forward!");
    assert_eq!(view.jobs[0].score_label, "92");
    assert_eq!(view.jobs[0].tier, MatchTier::High);

    let view = results(json!({
        "status": "success",
        "profile": {"years_of_experience": 0.0, "experience_level": 0}
    }));
    assert_eq!(view.stats.experience, "N/A Yrs");
    assert_eq!(view.stats.level, "N/A");
}

#[test]
fn advice_lists_are_truncated_to_three() {
    let view = results(json!({
        "status": "success",
        "advice": {
            "strengths": ["a", "b", "c", "d", "e"],
            "improvement_areas": ["gap"],
            "actionable_tips": ["t1", "t2", "t3", "t4"],
            "career_advice": "Aim for staff roles."
        }
    }));

    assert_eq!(view.advice.strengths, vec!["a", "b", "c"]);
    assert_eq!(view.advice.improvement_areas, vec!["gap"]);
    assert_eq!(view.advice.actionable_tips, vec!["t1", "t2", "t3"]);
    assert_eq!(view.advice.career_advice, "Aim for staff roles.");
}

#[test]
fn high_score_job_card() {
    let view = results(json!({
        "status": "success",
        "jobs": [{
            "title": "Engineer at Acme",
            "match_score": "85%",
            "location": "Remote",
            "salary_range": "$100k-$120k",
            "source": "Live Search",
            "requirements": ["Rust", "Tokio", "SQL", "Kafka"]
        }]
    }));

    let card = &view.jobs[0];
    assert_eq!(card.role, "Engineer");
    assert_eq!(card.company, "Acme");
    assert_eq!(card.tier, MatchTier::High);
    assert_eq!(card.score_label, "85%");
    assert_eq!(card.source, SourceKind::Live);
    assert_eq!(card.location, "Remote");
    assert_eq!(card.salary_range, "$100k-$120k");
    assert_eq!(card.requirements, vec!["Rust", "Tokio", "SQL"]);
}

#[test]
fn medium_score_job_card() {
    let view = results(json!({
        "status": "success",
        "jobs": [{"title": "Engineer at Acme", "match_score": "40%", "source": "Database"}]
    }));

    assert_eq!(view.jobs[0].tier, MatchTier::Medium);
    assert_eq!(view.jobs[0].source, SourceKind::Database);
}

#[test]
fn malformed_job_degrades_to_placeholders() {
    let view = results(json!({
        "status": "success",
        "jobs": [{"title": "Solo Title", "match_score": "NaN%"}]
    }));

    let card = &view.jobs[0];
    assert_eq!(card.role, "Solo Title");
    assert_eq!(card.company, "Unknown Co");
    assert_eq!(card.tier, MatchTier::Medium);
    assert_eq!(card.location, "Not specified");
    assert_eq!(card.salary_range, "Not specified");
    assert!(card.requirements.is_empty());
}

#[test]
fn exactly_eighty_is_medium_tier() {
    let view = results(json!({
        "status": "success",
        "jobs": [
            {"title": "A at B", "match_score": "80%"},
            {"title": "A at B", "match_score": "81%"},
            {"title": "A at B"}
        ]
    }));

    let tiers: Vec<_> = view.jobs.iter().map(|job| job.tier).collect();
    assert_eq!(tiers, vec![MatchTier::Medium, MatchTier::High, MatchTier::Medium]);
    assert_eq!(view.jobs[2].score_label, "N/A");
}

#[test]
fn jobs_preserve_order() {
    let view = results(json!({
        "status": "success",
        "jobs": [
            {"title": "First at One"},
            {"title": "Second at Two"},
            {"title": "Third at Three"}
        ]
    }));

    let roles: Vec<_> = view.jobs.iter().map(|job| job.role.as_str()).collect();
    assert_eq!(roles, vec!["First", "Second", "Third"]);
}
