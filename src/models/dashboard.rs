use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BillItem {
    pub name: String,
    pub amount: f64,
    pub due: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyRevenuePoint {
    pub month: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsResponse {
    pub executions: u32,
    pub active_users: u32,
    pub new_users: u32,
    pub total_mentors: u32,
    pub total_revenue: f64,
    pub revenue_growth: String,
    pub community_growth: u32,
    pub screen_time: f64,
    pub crypto_fear_index: u32,
    pub bills_topup: Vec<BillItem>,
    pub monthly_revenue: Vec<MonthlyRevenuePoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkflowItem {
    pub name: String,
    pub executions: u32,
    pub success_rate: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityStatus {
    Success,
    Failed,
    Running,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecentWorkflowActivity {
    pub workflow: String,
    pub timestamp: String,
    pub status: ActivityStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkflowsResponse {
    pub total_executions: u32,
    pub workflows: Vec<WorkflowItem>,
    pub recent_activity: Vec<RecentWorkflowActivity>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    InProgress,
    Completed,
    Blocked,
    NotStarted,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectItem {
    pub name: String,
    pub status: ProjectStatus,
    pub team: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectsResponse {
    pub ongoing_projects: f64,
    pub compared_to_last_week: String,
    pub projects: Vec<ProjectItem>,
}
