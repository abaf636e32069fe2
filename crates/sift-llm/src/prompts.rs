//! Prompt content for classification, SQL generation, and chat.

/// Schema of the commission fact table, inlined into SQL prompts.
pub const TABLE_SCHEMA: &str = "\
Table: fact_commissions
Columns:
 - id: int8
 - agent_id: text
 - agent_name: text
 - upline_id: text
 - upline_manager: text
 - agency_name: text
 - commission_date: date
 - commission_year: int4
 - commission_month: int4
 - commission_quarter: text
 - commission_amount: numeric";

pub const RELATIONSHIPS: &str = "Primary Key: id";

pub const IMPORTANT_POINTS: &str = "\
The fact_commissions table contains detailed information about commissions earned by agents, \
including their upline managers and agency affiliations.
The commission quarter column is in the form `Q{quarter}_{year}`, where quarter is between 1 and 4, \
and year is a four digit number from 2022 to 2024.
Generate valid PostgreSQL queries based on the fact_commissions table schema. The PostgreSQL \
queries should be correct and executable without any errors.";

/// System instruction for off-topic / greeting turns.
pub const CHAT_PERSONA: &str = "Your name is Sift. You are a PostgreSQL expert.";

/// Build the intent-classification prompt for one user message.
///
/// The model is asked for JSON matching `UserIntent`'s wire shape.
pub fn intent_prompt(user_input: &str) -> String {
    format!(
        r#"Analyze the user request: "{user_input}"

Categorize it:
- GENERATE_CHART: If they ask you to show, display, create or generate a chart, plot, graph, or visualization. Also pick "chart_type": one of "line", "bar", "pie" (default "line").
- QUERY_DATA: If they want specific numbers, lists, information or data. This has 2 sub-categories, returned as "sub_intent":
    - AGENT_COMMISSIONS: If they want information about the commission of an agent
    - GENERAL: Any other data query
- GENERAL_CHAT: Greeting or off-topic.

Return only a JSON object with fields "intent", "sub_intent" (optional), "chart_type" (optional)."#
    )
}

/// Build the NL-to-SQL prompt for one question.
pub fn sql_prompt(question: &str) -> String {
    format!(
        "You are a PostgreSQL expert.\n\nSchema:{TABLE_SCHEMA}\n\nRelationships:{RELATIONSHIPS}\n\n\
         Important points to consider while generating PostgreSQL queries:{IMPORTANT_POINTS}\n\n\
         Question:{question}\n\nReturn only the PostgreSQL query. Do not include explanations."
    )
}
