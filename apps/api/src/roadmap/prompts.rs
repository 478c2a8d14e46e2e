// All LLM prompt constants for roadmap generation.

/// System prompt for roadmap generation — enforces JSON-only output.
pub const ROADMAP_SYSTEM: &str = "You are an experienced career mentor who designs \
    multi-week learning roadmaps. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences.";

/// Roadmap generation prompt template.
/// Replace: {goal}, {skills}, {hours_per_day}, {duration_months}, {include_weekends}
pub const ROADMAP_PROMPT_TEMPLATE: &str = r#"Design a personalized learning roadmap.

Career goal: {goal}
Current skills: {skills}
Available hours per weekday: {hours_per_day}
Target duration in months: {duration_months}
Include weekends: {include_weekends}

Return a JSON object with this EXACT schema (no extra fields):
{
  "goal": "the career goal",
  "milestones": [
    {
      "title": "Milestone title",
      "description": "what this milestone achieves",
      "duration_weeks": 4,
      "resources": ["recommended course or book"],
      "tasks": [
        {"title": "a concrete, checkable task", "done": false}
      ]
    }
  ]
}

Rules:
1. Order milestones from fundamentals to the goal; sizes should fit the stated duration.
2. Skip material already covered by the current skills.
3. Every task must be small enough to finish within the daily hours budget.
4. All tasks start with "done": false."#;
