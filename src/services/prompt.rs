use chrono::NaiveDate;

use crate::models::SearchCriteria;

/// Builds the search instruction for the completion provider, anchored on
/// today's date so the web search targets current events.
pub fn build_search_prompt(criteria: &SearchCriteria) -> String {
    prompt_for_date(criteria, chrono::Local::now().date_naive())
}

/// Date-parameterized prompt construction.
///
/// Pure over its inputs. The instruction pins the model to exactly five
/// scheduled events (no always-open venues) and to a JSON-only reply shaped
/// as a `recommendations` array.
pub fn prompt_for_date(criteria: &SearchCriteria, today: NaiveDate) -> String {
    let date = today.format("%A, %B %-d, %Y");
    let preferences = if criteria.preferences.trim().is_empty() {
        "None"
    } else {
        criteria.preferences.as_str()
    };

    format!(
        r#"Today is {date}. Search the web for exactly 5 time-specific family events in {city}.

**Criteria:**
- Kids ages: {ages}
- When: {when}
- Max distance: {distance} miles from city center
- Preferences: {preferences}

**CRITICAL - Only recommend EVENTS with specific dates/times:**
- Search: "{city} events this weekend", event calendars, Eventbrite
- Each must have exact day/time (e.g., "Saturday 2-5pm", "Oct 5 10am")
- NO generic venues (not "visit museum" - only "Museum Night - Saturday 6pm")
- Focus: festivals, concerts, markets, special programs happening during "{when}"

**Return JSON only:**
{{
  "recommendations": [
    {{
      "rank": 1,
      "title": "[Event Name] - [Exact Day/Time]",
      "emoji": "🎪",
      "description": "2-4 sentences about what makes this event special and fun for families.",
      "location": "Venue name",
      "distance": "X miles"
    }}
  ]
}}

Requirements:
- All 5 must be scheduled events with exact times during "{when}"
- Variety of event types
- Age-appropriate for {ages} year olds
- Return only JSON, no extra text"#,
        date = date,
        city = criteria.city,
        ages = criteria.kids_ages,
        when = criteria.availability,
        distance = criteria.max_distance,
        preferences = preferences,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn austin_criteria() -> SearchCriteria {
        SearchCriteria {
            city: "Austin".to_string(),
            kids_ages: "5-8".to_string(),
            availability: "Saturday afternoon".to_string(),
            max_distance: 15,
            preferences: String::new(),
        }
    }

    fn fixed_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 10, 4).unwrap()
    }

    #[test]
    fn test_prompt_contains_criteria_values() {
        let prompt = prompt_for_date(&austin_criteria(), fixed_date());

        assert!(prompt.contains("family events in Austin"));
        assert!(prompt.contains("Kids ages: 5-8"));
        assert!(prompt.contains("When: Saturday afternoon"));
        assert!(prompt.contains("Max distance: 15 miles from city center"));
    }

    #[test]
    fn test_prompt_anchors_on_human_readable_date() {
        let prompt = prompt_for_date(&austin_criteria(), fixed_date());
        assert!(prompt.starts_with("Today is Saturday, October 4, 2025."));
    }

    #[test]
    fn test_blank_preferences_render_as_none() {
        let prompt = prompt_for_date(&austin_criteria(), fixed_date());
        assert!(prompt.contains("- Preferences: None"));
    }

    #[test]
    fn test_preferences_pass_through_when_present() {
        let mut criteria = austin_criteria();
        criteria.preferences = "outdoor, free entry".to_string();

        let prompt = prompt_for_date(&criteria, fixed_date());
        assert!(prompt.contains("- Preferences: outdoor, free entry"));
    }

    #[test]
    fn test_prompt_requests_json_only_reply() {
        let prompt = prompt_for_date(&austin_criteria(), fixed_date());

        assert!(prompt.contains("\"recommendations\": ["));
        assert!(prompt.contains("Return only JSON, no extra text"));
    }
}
