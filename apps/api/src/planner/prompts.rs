// LLM prompt constants for the daily planner.

/// System prompt for day-wise planning — enforces JSON-only output.
pub const DAILY_PLAN_SYSTEM: &str = "You are a study planner. Given a structured \
    learning roadmap, map its milestones and tasks into a day-wise plan \
    covering at least 7 days. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences.";

/// Daily plan prompt template.
/// Replace: {start_date}, {hours_per_day}, {roadmap_json}
pub const DAILY_PLAN_PROMPT_TEMPLATE: &str = r#"Build a day-wise study plan.

Start date: {start_date}
Hours available per day: {hours_per_day}

Roadmap:
{roadmap_json}

Return a JSON object:
{
  "days": [
    {
      "date": "YYYY-MM-DD",
      "focus": "which milestone this day advances",
      "activities": ["a concrete activity sized to the daily hours"]
    }
  ]
}

Cover at least 7 days, walking the roadmap in order."#;
