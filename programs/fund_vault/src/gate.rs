//! Access gating consulted before every state-changing pool operation.
//!
//! Fee and conversion logic never inspects access state directly; the
//! orchestrator asks an [`AccessGate`] and aborts on refusal.

use anchor_lang::prelude::*;

use crate::{
    error::ErrorCode,
    state::{AccessPolicy, GateMode},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PoolAction {
    Deposit,
    Withdraw,
    Transfer,
}

pub trait AccessGate {
    /// Fails unless `identity` may currently perform `action`.
    fn check(&self, action: PoolAction, identity: &Pubkey) -> Result<()>;
}

impl AccessGate for AccessPolicy {
    fn check(&self, action: PoolAction, identity: &Pubkey) -> Result<()> {
        require!(!self.paused, ErrorCode::PoolPaused);

        let mode = match action {
            PoolAction::Deposit => self.deposit_mode,
            PoolAction::Withdraw => self.withdraw_mode,
            PoolAction::Transfer => self.transfer_mode,
        };
        match mode {
            GateMode::Closed => err!(ErrorCode::ActionDisabled),
            GateMode::Allowlisted => {
                require!(self.is_allowlisted(identity), ErrorCode::NotAllowlisted);
                Ok(())
            }
            GateMode::Open => Ok(()),
        }
    }
}
