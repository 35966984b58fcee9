// src/db/seed.rs

use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::{
    db::catalog::PipelineCatalog,
    models::{
        call::{Call, CallType},
        client::{Client, FinancialData},
        opportunity::{Opportunity, OpportunityStatus, ProposalStatus},
        task::{Task, TaskStatus, TaskType},
    },
};

/// Dados de demonstração carregados quando SEED_SAMPLE_DATA=true.
#[derive(Debug, Clone, Default)]
pub struct SampleData {
    pub clients: Vec<Client>,
    pub opportunities: Vec<Opportunity>,
    pub calls: Vec<Call>,
    pub tasks: Vec<Task>,
}

fn days(n: i64) -> Duration {
    Duration::days(n)
}

struct ClientSeed {
    name: &'static str,
    email: &'static str,
    phone: &'static str,
    address: Option<&'static str>,
    // (faturamento anual, valor do contrato)
    financial: Option<(i64, i64)>,
    created: DateTime<Utc>,
}

struct OpportunitySeed {
    name: &'static str,
    client: usize,
    process: &'static str,
    stage: &'static str,
    status: OpportunityStatus,
    proposal: Option<ProposalStatus>,
    value: i64,
    collected: Option<i64>,
    close: DateTime<Utc>,
    created: DateTime<Utc>,
    last_call: Option<DateTime<Utc>>,
    phone: &'static str,
    description: &'static str,
}

struct TaskSeed {
    title: &'static str,
    due: DateTime<Utc>,
    status: TaskStatus,
    opportunity: usize,
    task_type: TaskType,
    description: Option<&'static str>,
    created: DateTime<Utc>,
    updated: DateTime<Utc>,
}

impl ClientSeed {
    fn into_client(self, now: DateTime<Utc>) -> Client {
        Client {
            id: Uuid::new_v4(),
            name: self.name.to_string(),
            email: self.email.to_string(),
            phone: Some(self.phone.to_string()),
            company: Some(self.name.to_string()),
            address: self.address.map(str::to_string),
            financial_data: self.financial.map(|(revenue, contract)| FinancialData {
                annual_revenue: Some(Decimal::from(revenue)),
                contract_value: Some(Decimal::from(contract)),
            }),
            created_at: self.created,
            updated_at: now,
        }
    }
}

impl SampleData {
    pub fn build(catalog: &PipelineCatalog, assignee: &str) -> Self {
        let now = Utc::now();

        let clients: Vec<Client> = [
            ClientSeed {
                name: "Innovate Corp",
                email: "contact@innovate.com",
                phone: "555-0101",
                address: Some("123 Tech Park"),
                financial: Some((5_000_000, 50_000)),
                created: now - days(10),
            },
            ClientSeed {
                name: "Synergy Solutions",
                email: "info@synergy.com",
                phone: "555-0102",
                address: Some("456 Business Hub"),
                financial: Some((10_000_000, 120_000)),
                created: now - days(20),
            },
            ClientSeed {
                name: "Alpha Dynamics",
                email: "alpha@dynamics.com",
                phone: "555-0103",
                address: None,
                financial: None,
                created: now - days(5),
            },
        ]
        .into_iter()
        .map(|seed| seed.into_client(now))
        .collect();

        let opportunity_seeds = [
            OpportunitySeed {
                name: "Innovate Upgrade Project",
                client: 0,
                process: "Proceso de Ventas Estándar",
                stage: "Propuesta Enviada",
                status: OpportunityStatus::Activa,
                proposal: Some(ProposalStatus::Creada),
                value: 25_000,
                collected: Some(5_000),
                close: now + days(30),
                created: now - days(15),
                last_call: Some(now - days(2)),
                phone: "555-0101 ext 12",
                description: "Upgrade Innovate Corp's existing system with new modules.",
            },
            OpportunitySeed {
                name: "Synergy Full Suite",
                client: 1,
                process: "Proceso Enterprise",
                stage: "Descubrimiento Profundo",
                status: OpportunityStatus::Activa,
                proposal: None,
                value: 75_000,
                collected: None,
                close: now + days(60),
                created: now - days(5),
                last_call: None,
                phone: "555-0102 ext 34",
                description: "Provide Synergy Solutions with the complete CRM suite.",
            },
            OpportunitySeed {
                name: "Alpha Dynamics SMB Package",
                client: 2,
                process: "Proceso SMB",
                stage: "Cierre Venta",
                status: OpportunityStatus::Ganada,
                proposal: Some(ProposalStatus::Presentada),
                value: 5_000,
                collected: Some(5_000),
                close: now - days(10),
                created: now - days(40),
                last_call: Some(now - days(12)),
                phone: "555-0103",
                description: "Standard SMB package for Alpha Dynamics.",
            },
        ];

        let opportunities: Vec<Opportunity> = opportunity_seeds
            .into_iter()
            .map(|seed| {
                let client = &clients[seed.client];
                let process = catalog.find_process_by_name(seed.process);
                let stage = process.and_then(|p| catalog.find_stage_by_name(p.id, seed.stage));
                Opportunity {
                    id: Uuid::new_v4(),
                    name: seed.name.to_string(),
                    client_id: Some(client.id),
                    client_name: Some(client.name.clone()),
                    primary_contact_phone: Some(seed.phone.to_string()),
                    last_call_date: seed.last_call,
                    billing_amount_eur: Some(Decimal::from(seed.value)),
                    collected_amount_eur: seed.collected.map(Decimal::from),
                    status: seed.status,
                    proposal_status: seed.proposal,
                    process_id: process.map(|p| p.id),
                    process_name: process.map(|p| p.name.clone()),
                    stage_id: stage.map(|s| s.id),
                    stage_name: stage.map(|s| s.name.clone()),
                    value: Decimal::from(seed.value),
                    close_date: seed.close,
                    description: Some(seed.description.to_string()),
                    assigned_to: assignee.to_string(),
                    created_at: seed.created,
                    updated_at: if seed.status == OpportunityStatus::Ganada {
                        now - days(10)
                    } else {
                        now
                    },
                }
            })
            .collect();

        let calls = vec![
            Call {
                id: Uuid::new_v4(),
                opportunity_id: opportunities[0].id,
                opportunity_name: Some(opportunities[0].name.clone()),
                date_time: now - days(2),
                summary: "Discussed upgrade requirements. Client interested in AI features.".into(),
                participants: vec!["Sales Rep".into(), "Innovate CTO".into()],
                recording_url: Some("https://example.com/recording1.mp3".into()),
                notes: Some("Needs a follow-up demo next week.".into()),
                attended: Some(true),
                duration: Some(45),
                call_type: Some(CallType::Descubrimiento1),
                created_at: now - days(2),
                updated_at: now - days(2),
            },
            Call {
                id: Uuid::new_v4(),
                opportunity_id: opportunities[1].id,
                opportunity_name: Some(opportunities[1].name.clone()),
                date_time: now - days(3),
                summary: "Initial discovery call with Synergy.".into(),
                participants: vec!["Sales Rep".into(), "Synergy VP Sales".into()],
                recording_url: None,
                notes: Some("Client has a budget of $70k, timeline is Q3.".into()),
                attended: Some(true),
                duration: Some(30),
                call_type: Some(CallType::Descubrimiento1),
                created_at: now - days(3),
                updated_at: now - days(3),
            },
        ];

        let task_seeds = [
            TaskSeed {
                title: "Prepare Innovate Proposal",
                due: now + days(5),
                status: TaskStatus::InProgress,
                opportunity: 0,
                task_type: TaskType::Task,
                description: Some("Include AI features pricing."),
                created: now,
                updated: now,
            },
            TaskSeed {
                title: "Follow up call with Synergy",
                due: now + days(2),
                status: TaskStatus::Pending,
                opportunity: 1,
                task_type: TaskType::CallReminder,
                description: Some("Confirm demo for next Monday."),
                created: now,
                updated: now,
            },
            TaskSeed {
                title: "Send contract to Alpha Dynamics",
                due: now - days(9),
                status: TaskStatus::Completed,
                opportunity: 2,
                task_type: TaskType::Task,
                description: None,
                created: now - days(10),
                updated: now - days(9),
            },
        ];

        let tasks = task_seeds
            .into_iter()
            .map(|seed| {
                let opportunity = &opportunities[seed.opportunity];
                Task {
                    id: Uuid::new_v4(),
                    title: seed.title.to_string(),
                    due_date: seed.due,
                    status: seed.status,
                    related_opportunity_id: Some(opportunity.id),
                    related_opportunity_name: Some(opportunity.name.clone()),
                    assigned_to: assignee.to_string(),
                    description: seed.description.map(str::to_string),
                    task_type: seed.task_type,
                    created_at: seed.created,
                    updated_at: seed.updated,
                }
            })
            .collect();

        Self {
            clients,
            opportunities,
            calls,
            tasks,
        }
    }
}
