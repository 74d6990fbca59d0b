use anchor_lang::prelude::*;

use crate::{constants::MAX_ALLOWLIST, error::ErrorCode, state::GateMode};

#[account]
#[derive(InitSpace, Default)]
pub struct AccessPolicy {
    pub pool: Pubkey,
    pub paused: bool,
    pub deposit_mode: GateMode,
    pub withdraw_mode: GateMode,
    pub transfer_mode: GateMode,
    #[max_len(MAX_ALLOWLIST)]
    pub allowlist: Vec<Pubkey>,
    pub bump: u8,
}

impl AccessPolicy {
    pub fn is_allowlisted(&self, identity: &Pubkey) -> bool {
        self.allowlist.contains(identity)
    }

    pub fn set_allowlisted(&mut self, identity: Pubkey, allowed: bool) -> Result<()> {
        let present = self.is_allowlisted(&identity);
        if allowed && !present {
            require!(self.allowlist.len() < MAX_ALLOWLIST, ErrorCode::AllowlistFull);
            self.allowlist.push(identity);
        } else if !allowed && present {
            self.allowlist.retain(|k| k != &identity);
        }
        Ok(())
    }
}
