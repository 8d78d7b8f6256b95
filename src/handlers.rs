pub mod accounts;
pub mod certificates;
pub mod complaint_route;
pub mod complaints;
pub mod contacts;
pub mod deals;
pub mod events;
pub mod invoices;
pub mod tasks;
