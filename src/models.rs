pub mod account;
pub mod certificate;
pub mod complaint;
pub mod contact;
pub mod deal;
pub mod event;
pub mod invoice;
pub mod shared;
pub mod task;
