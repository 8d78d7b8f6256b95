// src/docs.rs

use utoipa::OpenApi;

use crate::{common, handlers, models};

#[derive(OpenApi)]
#[openapi(
    paths(
        // --- Accounts ---
        handlers::accounts::list_accounts,
        handlers::accounts::create_account,
        handlers::accounts::get_account,
        handlers::accounts::update_account,
        handlers::accounts::delete_account,

        // --- Contacts ---
        handlers::contacts::list_contacts,
        handlers::contacts::create_contact,
        handlers::contacts::get_contact,
        handlers::contacts::update_contact,
        handlers::contacts::delete_contact,

        // --- Complaints ---
        handlers::complaints::list_complaints,
        handlers::complaints::create_complaint,
        handlers::complaints::get_complaint,
        handlers::complaints::update_complaint,
        handlers::complaints::delete_complaint,

        // --- Complaint (rota legada) ---
        handlers::complaint_route::get_complaints,
        handlers::complaint_route::post_complaint,
        handlers::complaint_route::put_complaint,
        handlers::complaint_route::delete_complaint,

        // --- Deals ---
        handlers::deals::list_deals,
        handlers::deals::create_deal,
        handlers::deals::get_deal,
        handlers::deals::update_deal,
        handlers::deals::delete_deal,

        // --- Invoices ---
        handlers::invoices::list_invoices,
        handlers::invoices::create_invoice,
        handlers::invoices::get_invoice,
        handlers::invoices::update_invoice,
        handlers::invoices::delete_invoice,

        // --- Tasks ---
        handlers::tasks::list_tasks,
        handlers::tasks::create_task,
        handlers::tasks::get_task,
        handlers::tasks::update_task,
        handlers::tasks::delete_task,

        // --- Events ---
        handlers::events::list_events,
        handlers::events::create_event,
        handlers::events::get_event,
        handlers::events::update_event,
        handlers::events::delete_event,

        // --- Certificates ---
        handlers::certificates::list_certificates,
        handlers::certificates::create_certificate,
        handlers::certificates::get_certificate,
        handlers::certificates::update_certificate,
        handlers::certificates::delete_certificate,
    ),
    components(
        schemas(
            common::list_query::Pagination,
            common::response::MessageResponse,

            // --- Enums ---
            models::shared::Priority,
            models::account::AccountType,
            models::complaint::CaseStatus,
            models::deal::DealStage,
            models::invoice::InvoiceStatus,
            models::task::TaskStatus,
            models::certificate::CertificateStatus,

            // --- Registros ---
            models::account::Account,
            models::contact::Contact,
            models::complaint::Complaint,
            models::deal::Deal,
            models::invoice::Invoice,
            models::invoice::InvoiceTotals,
            models::invoice::InvoiceView,
            models::task::Task,
            models::event::ScheduledEvent,
            models::certificate::Certificate,

            // --- Payloads ---
            models::account::AccountPayload,
            models::contact::ContactPayload,
            models::complaint::ComplaintPayload,
            models::deal::DealPayload,
            models::invoice::InvoicePayload,
            models::task::TaskPayload,
            models::event::ScheduledEventPayload,
            models::certificate::CertificatePayload,
            handlers::complaint_route::UpdateComplaintPayload,
        )
    ),
    tags(
        (name = "Accounts", description = "Contas (empresas clientes, parceiros, fornecedores)"),
        (name = "Contacts", description = "Pessoas de contato"),
        (name = "Complaints", description = "Reclamações e chamados"),
        (name = "Complaint (legado)", description = "Rota única de reclamações usada pelas telas antigas"),
        (name = "Deals", description = "Negócios / oportunidades"),
        (name = "Invoices", description = "Faturas, com totais calculados na leitura"),
        (name = "Tasks", description = "Tarefas"),
        (name = "Events", description = "Eventos agendados"),
        (name = "Certificates", description = "Certificados emitidos")
    )
)]
pub struct ApiDoc;
