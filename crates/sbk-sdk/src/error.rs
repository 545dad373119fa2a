use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScorebookError {
    #[error("no innings in progress")]
    NoActiveInnings,

    #[error("innings {0} is still in progress")]
    InningsInProgress(u8),

    #[error("ledger error: {0}")]
    Ledger(#[from] sbk_ledger::LedgerError),

    #[error("reconcile error: {0}")]
    Reconcile(#[from] sbk_reconcile::ReconcileError),

    #[error("roster error: {0}")]
    Roster(#[from] sbk_roster::RosterError),
}

pub type ScorebookResult<T> = Result<T, ScorebookError>;
