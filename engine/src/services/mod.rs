// Sheet-level operations used by front ends.
pub mod sheet_service;

pub use sheet_service::{AlwaysConfirm, ConfirmGate, CounterIds, IdGenerator, SheetService, UuidIds};
