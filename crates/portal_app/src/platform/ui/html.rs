//! HTML fragments for the four result containers.
//!
//! Every value that comes from the analysis payload goes through
//! [`v_htmlescape::escape`] before it is interpolated.

use portal_core::{AdviceView, JobCardView, MatchTier, SourceKind, StatsView};
use v_htmlescape::escape;

pub const NO_JOBS_MESSAGE: &str = "No suitable jobs found matching your profile.";

pub fn profile_stats(stats: &StatsView) -> String {
    let provider = stats
        .provider
        .as_deref()
        .map(|provider| {
            format!(
                r#"
<div class="col-span-2 text-slate-500 text-xs">Analyzed with {}</div>"#,
                escape(provider)
            )
        })
        .unwrap_or_default();

    format!(
        r#"<div class="bg-slate-900/50 p-4 rounded-xl border border-slate-700">
    <div class="text-slate-400 text-xs uppercase">Experience</div>
    <div class="text-xl font-bold text-white">{experience}</div>
</div>
<div class="bg-slate-900/50 p-4 rounded-xl border border-slate-700">
    <div class="text-slate-400 text-xs uppercase">Level</div>
    <div class="text-xl font-bold text-white">{level}</div>
</div>
<div class="bg-slate-900/50 p-4 rounded-xl border border-slate-700 col-span-2">
    <div class="text-slate-400 text-xs uppercase">Field of Study</div>
    <div class="text-lg font-bold text-white truncate">{field}</div>
</div>{provider}"#,
        experience = escape(&stats.experience),
        level = escape(&stats.level),
        field = escape(&stats.education_field),
        provider = provider,
    )
}

pub fn skill_tags(skills: &[String]) -> String {
    skills
        .iter()
        .map(|skill| {
            format!(
                r#"<span class="px-3 py-1 bg-blue-500/10 text-blue-400 border border-blue-500/20 rounded-full text-sm font-medium">{}</span>"#,
                escape(skill)
            )
        })
        .collect()
}

pub fn advice_content(advice: &AdviceView) -> String {
    let mut html = String::new();
    html.push_str(&advice_section(
        "fa-check-circle text-green-500",
        "Strengths",
        &advice.strengths,
    ));
    if !advice.improvement_areas.is_empty() {
        html.push_str(&advice_section(
            "fa-triangle-exclamation text-orange-400",
            "Areas to Improve",
            &advice.improvement_areas,
        ));
    }
    html.push_str(&advice_section(
        "fa-arrow-trend-up text-blue-500",
        "Actionable Tips",
        &advice.actionable_tips,
    ));
    html.push_str(&format!(
        r#"<div class="mt-4 p-4 bg-yellow-500/10 border border-yellow-500/20 rounded-xl">
    <p class="text-sm italic text-yellow-200">&quot;{}&quot;</p>
</div>"#,
        escape(&advice.career_advice)
    ));
    html
}

fn advice_section(icon: &str, heading: &str, items: &[String]) -> String {
    let list: String = items
        .iter()
        .map(|item| format!("<li>{}</li>", escape(item)))
        .collect();
    format!(
        r#"<div class="mb-4">
    <div class="flex items-center gap-2 mb-2">
        <i class="fa-solid {icon}"></i>
        <span class="font-bold text-white">{heading}</span>
    </div>
    <ul class="list-disc list-inside text-sm pl-2 space-y-1">{list}</ul>
</div>
"#
    )
}

pub fn jobs_list(jobs: &[JobCardView]) -> String {
    if jobs.is_empty() {
        return format!(
            r#"<div class="col-span-full text-center py-12 text-slate-500">
    <i class="fa-solid fa-magnifying-glass text-4xl mb-4 opacity-50"></i>
    <p>{NO_JOBS_MESSAGE}</p>
</div>"#
        );
    }
    jobs.iter().map(job_card).collect()
}

fn job_card(job: &JobCardView) -> String {
    let tier = tier_color(job.tier);
    let requirements: String = job
        .requirements
        .iter()
        .map(|requirement| {
            format!(
                r#"<span class="text-xs px-2 py-1 bg-slate-900 rounded text-slate-400">{}</span>"#,
                escape(requirement)
            )
        })
        .collect();

    format!(
        r#"<div class="job-card bg-slate-800 rounded-xl p-6 border border-slate-700 relative overflow-hidden group" data-tier="{tier_name}">
    <div class="absolute top-0 right-0 p-4 opacity-50">
        <i class="fa-solid {source_icon} text-6xl transform rotate-12 translate-x-4 -translate-y-4"></i>
    </div>
    <div class="relative z-10">
        <div class="flex justify-between items-start mb-4">
            <div>
                <h3 class="font-bold text-lg text-white mb-1">{role}</h3>
                <p class="text-slate-400 text-sm">{company}</p>
            </div>
            <span class="px-2 py-1 bg-{tier}-500/20 text-{tier}-400 text-xs font-bold rounded-lg border border-{tier}-500/30">{score} Match</span>
        </div>
        <div class="flex gap-4 mb-4 text-sm text-slate-500">
            <span class="flex items-center gap-1"><i class="fa-solid fa-location-dot"></i> {location}</span>
            <span class="flex items-center gap-1"><i class="fa-solid fa-money-bill"></i> {salary}</span>
        </div>
        <div class="pt-4 border-t border-slate-700/50">
            <div class="flex flex-wrap gap-2">{requirements}</div>
        </div>
    </div>
</div>
"#,
        tier_name = tier_name(job.tier),
        source_icon = source_icon(job.source),
        role = escape(&job.role),
        company = escape(&job.company),
        tier = tier,
        score = escape(&job.score_label),
        location = escape(&job.location),
        salary = escape(&job.salary_range),
        requirements = requirements,
    )
}

fn tier_color(tier: MatchTier) -> &'static str {
    match tier {
        MatchTier::High => "green",
        MatchTier::Medium => "yellow",
    }
}

fn tier_name(tier: MatchTier) -> &'static str {
    match tier {
        MatchTier::High => "high",
        MatchTier::Medium => "medium",
    }
}

fn source_icon(source: SourceKind) -> &'static str {
    match source {
        SourceKind::Live => "fa-globe text-blue-400",
        SourceKind::Database => "fa-database text-slate-600",
    }
}
