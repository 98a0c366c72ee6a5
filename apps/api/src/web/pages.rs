//! Server-rendered HTML for the analysis page.
//!
//! One page serves the whole flow: role dropdown, per-skill proficiency
//! inputs, and the results view with recommendations and inline charts.

use crate::catalog::SkillRequirement;
use crate::scoring::interactive::ScoredSkill;
use crate::scoring::recommend::Recommendation;

/// Minimal HTML escaping for user- and dataset-sourced strings.
pub fn escape(raw: &str) -> String {
    raw.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

fn shell(body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<title>Skill Gap Analysis</title>\n\
         <style>\n\
         body {{ font-family: sans-serif; margin: 2rem auto; max-width: 60rem; }}\n\
         table {{ border-collapse: collapse; }}\n\
         td, th {{ border: 1px solid #ccc; padding: 0.4rem 0.8rem; text-align: left; }}\n\
         .error {{ color: #b00020; }}\n\
         </style>\n</head>\n<body>\n<h1>Skill Gap Analysis</h1>\n{body}\n</body>\n</html>"
    )
}

fn role_picker(roles: &[&str]) -> String {
    let options: String = roles
        .iter()
        .map(|r| format!("<option value=\"{0}\">{0}</option>", escape(r)))
        .collect();
    format!(
        "<form method=\"post\" action=\"/\">\n\
         <label for=\"role\">Select a target role:</label>\n\
         <select id=\"role\" name=\"role\">{options}</select>\n\
         <button type=\"submit\">Show required skills</button>\n\
         </form>"
    )
}

/// Landing page: role dropdown, optionally with an error banner. The role
/// list is always preserved so a failed submission never dead-ends.
pub fn home(roles: &[&str], error: Option<&str>) -> String {
    let banner = match error {
        Some(msg) => format!("<p class=\"error\">{}</p>\n", escape(msg)),
        None => String::new(),
    };
    shell(&format!("{banner}{}", role_picker(roles)))
}

/// Second step: one numeric proficiency input per required skill. Blank
/// inputs are allowed and score as 0 on submission.
pub fn skill_form(role: &str, requirements: &[&SkillRequirement], roles: &[&str]) -> String {
    let rows: String = requirements
        .iter()
        .map(|req| {
            format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td>\
                 <td><input type=\"text\" name=\"proficiencies\" size=\"3\"></td></tr>\n",
                escape(&req.skill),
                req.required,
                req.importance
            )
        })
        .collect();
    let body = format!(
        "<h2>Required skills for {role_esc}</h2>\n\
         <form method=\"post\" action=\"/\">\n\
         <input type=\"hidden\" name=\"role\" value=\"{role_esc}\">\n\
         <table>\n\
         <tr><th>Skill</th><th>Required Level</th><th>Future Importance</th>\
         <th>Your Level (1=Beginner, 2=Intermediate, 3=Expert)</th></tr>\n\
         {rows}</table>\n\
         <button type=\"submit\">Analyze gaps</button>\n\
         </form>\n<hr>\n{picker}",
        role_esc = escape(role),
        picker = role_picker(roles),
    );
    shell(&body)
}

/// Results view: per-skill recommendation rows plus the two inline charts.
pub fn results(
    role: &str,
    scored: &[ScoredSkill],
    recommendations: &[Recommendation],
    bar_png_base64: &str,
    radar_png_base64: &str,
    roles: &[&str],
) -> String {
    let rows: String = scored
        .iter()
        .zip(recommendations.iter())
        .map(|(s, rec)| {
            format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
                escape(&s.skill),
                s.gap,
                s.priority_score,
                s.priority,
                escape(&rec.importance),
                escape(&rec.text)
            )
        })
        .collect();
    let legend: String = scored
        .iter()
        .map(|s| format!("<li>{}</li>", escape(&s.skill)))
        .collect();
    let body = format!(
        "<h2>Gap analysis for {role_esc}</h2>\n\
         <table>\n\
         <tr><th>Skill</th><th>Gap</th><th>Priority Score</th><th>Priority</th>\
         <th>Future Importance</th><th>Recommendation</th></tr>\n\
         {rows}</table>\n\
         <h3>Proficiency comparison (sky blue = you, orange = required)</h3>\n\
         <img alt=\"Proficiency bar chart\" src=\"data:image/png;base64,{bar_png_base64}\">\n\
         <img alt=\"Proficiency radar chart\" src=\"data:image/png;base64,{radar_png_base64}\">\n\
         <p>Radar spokes, clockwise from the top:</p>\n<ol>{legend}</ol>\n\
         <hr>\n{picker}",
        role_esc = escape(role),
        picker = role_picker(roles),
    );
    shell(&body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_covers_html_metacharacters() {
        assert_eq!(escape("a<b>&\"c\""), "a&lt;b&gt;&amp;&quot;c&quot;");
    }

    #[test]
    fn test_home_lists_roles_in_order() {
        let html = home(&["Data Analyst", "Web Developer"], None);
        let analyst = html.find("Data Analyst").unwrap();
        let developer = html.find("Web Developer").unwrap();
        assert!(analyst < developer);
    }

    #[test]
    fn test_home_error_banner_is_escaped() {
        let html = home(&["Data Analyst"], Some("The role '<x>' does not exist"));
        assert!(html.contains("&lt;x&gt;"));
        assert!(html.contains("class=\"error\""));
        // Role list preserved alongside the error.
        assert!(html.contains("Data Analyst"));
    }
}
