use crate::types::{DreamPlan, PlannedTask};

/// Output format for a rendered plan
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Markdown,
    Html,
}

impl OutputFormat {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "json" => Some(OutputFormat::Json),
            "md" => Some(OutputFormat::Markdown),
            "html" => Some(OutputFormat::Html),
            _ => None,
        }
    }
}

/// Render a plan in the requested format
pub fn render_plan(plan: &DreamPlan, format: OutputFormat) -> serde_json::Result<String> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(plan),
        OutputFormat::Markdown => Ok(render_markdown(plan)),
        OutputFormat::Html => Ok(render_html(plan)),
    }
}

/// Render a plan as Markdown
pub fn render_markdown(plan: &DreamPlan) -> String {
    let mut output = format!("# {}\n\n", plan.title);

    if let Some(ref description) = plan.description {
        output.push_str(&format!("{description}\n\n"));
    }
    output.push_str(&format!("**Start:** {}\n", plan.start_date));
    if let Some(end) = plan.end_date {
        output.push_str(&format!("**End:** {end}\n"));
    }
    output.push_str(&format!("**Recurrence:** {}\n\n", plan.recurrence));

    if plan.tasks.is_empty() {
        output.push_str("_No tasks scheduled._\n");
        return output;
    }

    output.push_str("## Tasks\n\n");
    for task in &plan.tasks {
        render_task_md(&mut output, task);
    }
    output
}

fn render_task_md(output: &mut String, task: &PlannedTask) {
    output.push_str(&format!(
        "{}. {} ({})\n",
        task.order + 1,
        task.title,
        task.date.format("%Y-%m-%d %a")
    ));
}

/// Render a plan as HTML
pub fn render_html(plan: &DreamPlan) -> String {
    let mut output = format!("<html><body><h1>{}</h1>\n", html_escape(&plan.title));

    if let Some(ref description) = plan.description {
        output.push_str(&format!("<p>{}</p>\n", html_escape(description)));
    }
    output.push_str(&format!("<p><strong>Start:</strong> {}</p>\n", plan.start_date));
    if let Some(end) = plan.end_date {
        output.push_str(&format!("<p><strong>End:</strong> {end}</p>\n"));
    }
    output.push_str(&format!(
        "<p><strong>Recurrence:</strong> {}</p>\n",
        plan.recurrence
    ));

    if !plan.tasks.is_empty() {
        output.push_str("<h2>Tasks</h2>\n<ol>\n");
        for task in &plan.tasks {
            output.push_str(&format!(
                "<li><time datetime=\"{}\">{}</time> {}</li>\n",
                task.date,
                task.date.format("%a %d %b"),
                html_escape(&task.title)
            ));
        }
        output.push_str("</ol>\n");
    }

    output.push_str("</body></html>");
    output
}

/// Escape HTML special characters
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
