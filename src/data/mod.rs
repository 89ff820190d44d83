//! Synthetic dashboard payloads.
//!
//! Every generator builds its own `Trend` from the hour of `now`, so values are
//! stable within an hour and drift across hours. No generator state is shared
//! between calls.

pub mod trend;

use chrono::{DateTime, Utc};

use self::trend::{Trend, hourly_seed};
use crate::models::dashboard::{
    ActivityStatus, AnalyticsResponse, BillItem, MonthlyRevenuePoint, ProjectItem, ProjectStatus,
    ProjectsResponse, RecentWorkflowActivity, WorkflowItem, WorkflowsResponse,
};

const MONTHLY_REVENUE_BASES: [(&str, f64); 6] = [
    ("Jan", 4000.0),
    ("Feb", 3500.0),
    ("Mar", 4800.0),
    ("Apr", 5200.0),
    ("May", 6100.0),
    ("Jun", 7200.0),
];

#[derive(Debug, Clone, Copy, Default)]
pub struct DataProvider {
    seed_offset_hours: i64,
}

impl DataProvider {
    #[must_use]
    pub fn new(seed_offset_hours: i64) -> Self {
        Self { seed_offset_hours }
    }

    fn trend(self, now: DateTime<Utc>) -> Trend {
        Trend::from_seed(hourly_seed(now, self.seed_offset_hours))
    }

    #[must_use]
    pub fn analytics(self, now: DateTime<Utc>) -> AnalyticsResponse {
        let mut trend = self.trend(now);

        let executions = trend.count(360.0, 0.12);
        let active_users = trend.count(16800.0, 0.08);
        let new_users = trend.count(1500.0, 0.18);
        let total_mentors = trend.count(2025.0, 0.03);
        let total_revenue = trend.next(24000.0, 0.2, 2);
        let community_growth = trend.count(65.0, 0.2);
        let screen_time = trend.next(5.7, 0.05, 2);
        let crypto_fear_index = trend.count(72.0, 0.25).min(100);

        let monthly_revenue = MONTHLY_REVENUE_BASES
            .iter()
            .map(|&(month, base)| MonthlyRevenuePoint {
                month: month.to_string(),
                value: trend.next(base, 0.18, 0),
            })
            .collect();

        let bills_topup = vec![
            BillItem {
                name: "Electricity".to_string(),
                amount: 97.0,
                due: "Oct 25".to_string(),
            },
            BillItem {
                name: "Cloud".to_string(),
                amount: 312.0,
                due: "Oct 26".to_string(),
            },
        ];

        AnalyticsResponse {
            executions,
            active_users,
            new_users,
            total_mentors,
            total_revenue,
            revenue_growth: "+17.3%".to_string(),
            community_growth,
            screen_time,
            crypto_fear_index,
            bills_topup,
            monthly_revenue,
        }
    }

    #[must_use]
    pub fn workflows(self, now: DateTime<Utc>) -> WorkflowsResponse {
        let mut trend = self.trend(now);

        let workflows = vec![
            WorkflowItem {
                name: "Data Processing".to_string(),
                executions: trend.count(120.0, 0.15),
                success_rate: trend.next(98.0, 0.01, 1),
            },
            WorkflowItem {
                name: "Email Automation".to_string(),
                executions: trend.count(85.0, 0.18),
                success_rate: 100.0,
            },
            WorkflowItem {
                name: "Customer Support".to_string(),
                executions: trend.count(65.0, 0.12),
                success_rate: trend.next(96.0, 0.02, 1),
            },
        ];
        let total_executions = workflows.iter().map(|item| item.executions).sum();

        let mut recent_activity: Vec<RecentWorkflowActivity> = workflows
            .iter()
            .map(|item| activity(&item.name, "2 mins ago"))
            .collect();
        recent_activity.push(activity("Data Processing", "15 mins ago"));

        WorkflowsResponse {
            total_executions,
            workflows,
            recent_activity,
        }
    }

    #[must_use]
    pub fn projects(self, now: DateTime<Utc>) -> ProjectsResponse {
        let mut trend = self.trend(now);

        let projects = vec![
            project(
                "Design Refresh",
                ProjectStatus::InProgress,
                &["alice", "sarah", "nora"],
            ),
            project("Mobile View", ProjectStatus::Completed, &["lee"]),
            project("Workflow AI", ProjectStatus::InProgress, &["sam", "bruno"]),
        ];

        ProjectsResponse {
            ongoing_projects: trend.next(68.5, 0.04, 1),
            compared_to_last_week: "+2.3%".to_string(),
            projects,
        }
    }
}

fn activity(workflow: &str, timestamp: &str) -> RecentWorkflowActivity {
    RecentWorkflowActivity {
        workflow: workflow.to_string(),
        timestamp: timestamp.to_string(),
        status: ActivityStatus::Success,
    }
}

fn project(name: &str, status: ProjectStatus, team: &[&str]) -> ProjectItem {
    ProjectItem {
        name: name.to_string(),
        status,
        team: team.iter().map(ToString::to_string).collect(),
    }
}
