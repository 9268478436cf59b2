use rusqlite::{Connection, Row, params};

use super::types::StoredResponse;
use crate::survey::draft::SurveyDraft;

/// Insert one response. `created_at` comes from the column default;
/// the caller supplies the building label from configuration.
pub fn insert(conn: &Connection, draft: &SurveyDraft, building: &str) -> rusqlite::Result<i64> {
    conn.execute(
        "INSERT INTO survey_responses ( \
             building, \
             resident_duration, resident_status, \
             amenities_satisfaction, amenities_usage, amenities_improvements, \
             security_satisfaction, concierge_rating, security_concerns, concierge_improvements, \
             maintenance_satisfaction, maintenance_response_satisfaction, \
             maintenance_common_issues, maintenance_priority_areas, maintenance_issues, \
             financial_satisfaction, financial_transparency, financial_concerns, financial_priorities, \
             communication_satisfaction, communication_frequency, \
             communication_preferred_method, communication_suggestions, \
             projects_awareness, projects_satisfaction, projects_concerns, projects_suggestions, \
             community_importance, community_interest, community_suggestions, \
             top_priorities, contact_name, contact_unit, contact_email \
         ) VALUES ( \
             ?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16, ?17, \
             ?18, ?19, ?20, ?21, ?22, ?23, ?24, ?25, ?26, ?27, ?28, ?29, ?30, ?31, ?32, ?33, ?34 \
         )",
        params![
            building,
            draft.resident_duration,
            draft.resident_status,
            draft.amenities_satisfaction,
            tags_to_json(&draft.amenities_usage),
            draft.amenities_improvements,
            draft.security_satisfaction,
            draft.concierge_rating,
            draft.security_concerns,
            tags_to_json(&draft.concierge_improvements),
            draft.maintenance_satisfaction,
            draft.maintenance_response_satisfaction,
            tags_to_json(&draft.maintenance_common_issues),
            tags_to_json(&draft.maintenance_priority_areas),
            draft.maintenance_issues,
            draft.financial_satisfaction,
            draft.financial_transparency,
            tags_to_json(&draft.financial_concerns),
            draft.financial_priorities,
            draft.communication_satisfaction,
            draft.communication_frequency,
            draft.communication_preferred_method,
            draft.communication_suggestions,
            draft.projects_awareness,
            draft.projects_satisfaction,
            tags_to_json(&draft.projects_concerns),
            draft.projects_suggestions,
            draft.community_importance,
            draft.community_interest,
            draft.community_suggestions,
            draft.top_priorities,
            draft.contact_name,
            draft.contact_unit,
            draft.contact_email,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// All responses, newest first.
pub fn find_all(conn: &Connection) -> rusqlite::Result<Vec<StoredResponse>> {
    let mut stmt = conn.prepare(
        "SELECT * FROM survey_responses ORDER BY created_at DESC, id DESC",
    )?;
    let responses = stmt
        .query_map([], row_to_response)?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(responses)
}

pub fn count(conn: &Connection) -> rusqlite::Result<i64> {
    conn.query_row("SELECT COUNT(*) FROM survey_responses", [], |row| row.get(0))
}

fn row_to_response(row: &Row) -> rusqlite::Result<StoredResponse> {
    Ok(StoredResponse {
        id: row.get("id")?,
        created_at: row.get("created_at")?,
        building: row.get("building")?,
        survey: SurveyDraft {
            resident_duration: row.get("resident_duration")?,
            resident_status: row.get("resident_status")?,
            amenities_satisfaction: row.get("amenities_satisfaction")?,
            amenities_usage: tags_from_json(row.get::<_, String>("amenities_usage")?),
            amenities_improvements: row.get("amenities_improvements")?,
            security_satisfaction: row.get("security_satisfaction")?,
            concierge_rating: row.get("concierge_rating")?,
            security_concerns: row.get("security_concerns")?,
            concierge_improvements: tags_from_json(row.get::<_, String>("concierge_improvements")?),
            maintenance_satisfaction: row.get("maintenance_satisfaction")?,
            maintenance_response_satisfaction: row.get("maintenance_response_satisfaction")?,
            maintenance_common_issues: tags_from_json(
                row.get::<_, String>("maintenance_common_issues")?,
            ),
            maintenance_priority_areas: tags_from_json(
                row.get::<_, String>("maintenance_priority_areas")?,
            ),
            maintenance_issues: row.get("maintenance_issues")?,
            financial_satisfaction: row.get("financial_satisfaction")?,
            financial_transparency: row.get("financial_transparency")?,
            financial_concerns: tags_from_json(row.get::<_, String>("financial_concerns")?),
            financial_priorities: row.get("financial_priorities")?,
            communication_satisfaction: row.get("communication_satisfaction")?,
            communication_frequency: row.get("communication_frequency")?,
            communication_preferred_method: row.get("communication_preferred_method")?,
            communication_suggestions: row.get("communication_suggestions")?,
            projects_awareness: row.get("projects_awareness")?,
            projects_satisfaction: row.get("projects_satisfaction")?,
            projects_concerns: tags_from_json(row.get::<_, String>("projects_concerns")?),
            projects_suggestions: row.get("projects_suggestions")?,
            community_importance: row.get("community_importance")?,
            community_interest: row.get("community_interest")?,
            community_suggestions: row.get("community_suggestions")?,
            top_priorities: row.get("top_priorities")?,
            contact_name: row.get("contact_name")?,
            contact_unit: row.get("contact_unit")?,
            contact_email: row.get("contact_email")?,
        },
    })
}

fn tags_to_json(tags: &[String]) -> String {
    serde_json::to_string(tags).unwrap_or_else(|_| "[]".to_string())
}

fn tags_from_json(json: String) -> Vec<String> {
    serde_json::from_str(&json).unwrap_or_default()
}
