//! Sequencing of the public pool operations.
//!
//! Every operation runs the same steps: gate check, lazy annual accrual,
//! conversion, withdrawal fee, carry fee, then a single commit. Work happens
//! on copies of the pool and position which are written back only once every
//! step has succeeded. Token movement is left to the caller and must happen
//! after the commit.

use anchor_lang::prelude::*;

use crate::{
    constants::BPS_DENOM,
    engine::{annual_fee, carry_fee, withdrawal_fee, CarryCharge, PoolTotals, WithdrawalFee},
    error::ErrorCode,
    gate::{AccessGate, PoolAction},
    math::{div_ceil, to_u64},
    state::{DepositorPosition, FeeSchedule, Pool},
};

/// Assets paid in and shares minted for a deposit or mint.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Entry {
    pub assets: u64,
    pub shares: u128,
}

/// Shares burned and how their value is split for a withdraw or redeem.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Exit {
    pub shares: u128,
    pub withdrawal: WithdrawalFee,
    pub carry: CarryCharge,
    /// Assets paid to the receiver.
    pub assets_out: u64,
}

impl Exit {
    pub fn total_fee(&self) -> Result<u64> {
        self.withdrawal
            .fee
            .checked_add(self.carry.fee)
            .ok_or_else(|| error!(ErrorCode::MathOverflow))
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ShareTransfer {
    pub shares: u128,
    pub basis_moved: u64,
}

/// Result of a committed operation together with the annual fee that the
/// lazy accrual pass booked before it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Receipt<T> {
    pub settlement: T,
    pub annual_fee: u64,
}

/// Books the annual fee owed since the last accrual and advances the clock.
///
/// The fee is funded out of pool value, so it is capped at what the pool
/// currently holds for shareholders.
pub fn accrue_annual_fee(pool: &mut Pool, vault_balance: u64, now: i64) -> Result<u64> {
    let owed = annual_fee::accrued_since(
        pool.total_basis,
        pool.fees.annual_fee_bps,
        pool.last_accrual_ts,
        now,
    )?;
    let fee = owed.min(pool.total_assets(vault_balance));
    pool.ledger.accrue(fee)?;
    if now > pool.last_accrual_ts {
        pool.last_accrual_ts = now;
    }
    Ok(fee)
}

/// Pool totals as they will be priced once pending annual fees are booked.
pub fn projected_totals(pool: &Pool, vault_balance: u64, now: i64) -> Result<PoolTotals> {
    let mut projected = pool.clone();
    accrue_annual_fee(&mut projected, vault_balance, now)?;
    Ok(projected.totals(vault_balance))
}

pub fn plan_deposit(totals: &PoolTotals, assets: u64) -> Result<Entry> {
    require!(assets > 0, ErrorCode::InvalidAmount);
    let shares = totals.convert_to_shares(assets)?;
    require!(shares > 0, ErrorCode::InvalidAmount);
    Ok(Entry { assets, shares })
}

pub fn plan_mint(totals: &PoolTotals, shares: u128) -> Result<Entry> {
    require!(shares > 0, ErrorCode::InvalidAmount);
    let assets = totals.assets_to_mint(shares)?;
    require!(assets > 0, ErrorCode::InvalidAmount);
    Ok(Entry { assets, shares })
}

/// Exit value of `shares` before checking that the vault can pay it.
fn quote_redeem(
    totals: &PoolTotals,
    fees: &FeeSchedule,
    position: &DepositorPosition,
    shares: u128,
) -> Result<Exit> {
    require!(shares > 0, ErrorCode::InvalidAmount);
    require!(shares <= position.shares, ErrorCode::InsufficientBalance);

    let gross = totals.convert_to_assets(shares)?;
    require!(gross > 0, ErrorCode::InvalidAmount);

    let withdrawal = withdrawal_fee::on_gross(gross, fees.withdrawal_fee_bps)?;
    let consumed = carry_fee::basis_consumed(position.cost_basis, shares, position.shares)?;
    let carry = carry_fee::assess(withdrawal.net, consumed, fees.carry_fee_bps)?;
    let assets_out = carry_fee::net_of_carry(withdrawal.net, &carry)?;

    Ok(Exit {
        shares,
        withdrawal,
        carry,
        assets_out,
    })
}

/// Payouts come from the vault itself. After an advance or a negative
/// one-time fee, `total_assets` can exceed what the vault holds.
fn require_payable(exit: &Exit, vault_balance: u64) -> Result<()> {
    require!(exit.assets_out <= vault_balance, ErrorCode::InsufficientBalance);
    Ok(())
}

pub fn plan_redeem(
    totals: &PoolTotals,
    fees: &FeeSchedule,
    position: &DepositorPosition,
    shares: u128,
    vault_balance: u64,
) -> Result<Exit> {
    let exit = quote_redeem(totals, fees, position, shares)?;
    require_payable(&exit, vault_balance)?;
    Ok(exit)
}

pub fn plan_withdraw(
    totals: &PoolTotals,
    fees: &FeeSchedule,
    position: &DepositorPosition,
    assets: u64,
    vault_balance: u64,
) -> Result<Exit> {
    require!(assets > 0, ErrorCode::InvalidAmount);
    require!(position.shares > 0, ErrorCode::InsufficientBalance);

    let quote = |proceeds: u64| -> Result<(Exit, u64)> {
        let withdrawal = withdrawal_fee::for_net(proceeds, fees.withdrawal_fee_bps)?;
        let shares = totals.shares_to_release(withdrawal.gross)?;
        let consumed = carry_fee::basis_consumed(position.cost_basis, shares, position.shares)?;
        let carry = carry_fee::assess(proceeds, consumed, fees.carry_fee_bps)?;
        let covered = carry_fee::net_of_carry(proceeds, &carry)?;
        let exit = Exit {
            shares,
            withdrawal,
            carry,
            assets_out: assets,
        };
        Ok((exit, covered))
    };

    let exit = if fees.carry_fee_bps == 0 {
        quote(assets)?.0
    } else {
        // Smallest post-withdrawal-fee amount whose carry still leaves `assets`.
        // Net of carry is monotone in the amount, and `hi` always covers since
        // carry can never exceed `ceil(amount * carry_bps / 10_000)`.
        let keep = BPS_DENOM as u128 - fees.carry_fee_bps as u128;
        let mut lo = assets;
        let mut hi = to_u64(div_ceil(
            (assets as u128 + 1) * BPS_DENOM as u128,
            keep,
        )?)?;
        while lo < hi {
            let mid = lo + (hi - lo) / 2;
            if quote(mid)?.1 >= assets {
                hi = mid;
            } else {
                lo = mid + 1;
            }
        }
        quote(lo)?.0
    };

    require!(exit.shares <= position.shares, ErrorCode::InsufficientBalance);
    require_payable(&exit, vault_balance)?;
    Ok(exit)
}

fn apply_entry(pool: &mut Pool, position: &mut DepositorPosition, entry: &Entry) -> Result<()> {
    pool.total_shares = pool
        .total_shares
        .checked_add(entry.shares)
        .ok_or_else(|| error!(ErrorCode::MathOverflow))?;
    pool.total_basis = pool
        .total_basis
        .checked_add(entry.assets as u128)
        .ok_or_else(|| error!(ErrorCode::MathOverflow))?;
    position.shares = position
        .shares
        .checked_add(entry.shares)
        .ok_or_else(|| error!(ErrorCode::MathOverflow))?;
    position.cost_basis = position
        .cost_basis
        .checked_add(entry.assets)
        .ok_or_else(|| error!(ErrorCode::MathOverflow))?;
    Ok(())
}

fn apply_exit(pool: &mut Pool, position: &mut DepositorPosition, exit: &Exit) -> Result<()> {
    position.shares = position
        .shares
        .checked_sub(exit.shares)
        .ok_or_else(|| error!(ErrorCode::InsufficientBalance))?;
    let mut basis_removed = exit.carry.basis_consumed;
    position.cost_basis = position
        .cost_basis
        .checked_sub(basis_removed)
        .ok_or_else(|| error!(ErrorCode::MathOverflow))?;
    if position.shares == 0 {
        basis_removed = basis_removed
            .checked_add(position.cost_basis)
            .ok_or_else(|| error!(ErrorCode::MathOverflow))?;
        position.cost_basis = 0;
    }

    pool.total_shares = pool
        .total_shares
        .checked_sub(exit.shares)
        .ok_or_else(|| error!(ErrorCode::MathOverflow))?;
    pool.total_basis = pool
        .total_basis
        .checked_sub(basis_removed as u128)
        .ok_or_else(|| error!(ErrorCode::MathOverflow))?;
    pool.ledger.accrue(exit.total_fee()?)?;
    Ok(())
}

/// Runs `plan` against a freshly accrued copy of the pool and commits the
/// copies only if both planning and `apply` succeed.
fn settle<T>(
    pool: &mut Pool,
    position: &mut DepositorPosition,
    vault_balance: u64,
    now: i64,
    plan: impl FnOnce(&Pool, &DepositorPosition) -> Result<T>,
    apply: impl FnOnce(&mut Pool, &mut DepositorPosition, &T) -> Result<()>,
) -> Result<Receipt<T>> {
    let mut next_pool = pool.clone();
    let mut next_position = position.clone();

    let annual_fee = accrue_annual_fee(&mut next_pool, vault_balance, now)?;
    let settlement = plan(&next_pool, &next_position)?;
    apply(&mut next_pool, &mut next_position, &settlement)?;

    *pool = next_pool;
    *position = next_position;
    Ok(Receipt {
        settlement,
        annual_fee,
    })
}

fn check_pair<G: AccessGate>(gate: &G, action: PoolAction, a: &Pubkey, b: &Pubkey) -> Result<()> {
    gate.check(action, a)?;
    if a != b {
        gate.check(action, b)?;
    }
    Ok(())
}

pub fn deposit<G: AccessGate>(
    gate: &G,
    pool: &mut Pool,
    receiver: &mut DepositorPosition,
    caller: &Pubkey,
    assets: u64,
    vault_balance: u64,
    now: i64,
) -> Result<Receipt<Entry>> {
    check_pair(gate, PoolAction::Deposit, caller, &receiver.owner)?;
    settle(
        pool,
        receiver,
        vault_balance,
        now,
        |pool, _| plan_deposit(&pool.totals(vault_balance), assets),
        apply_entry,
    )
}

pub fn mint<G: AccessGate>(
    gate: &G,
    pool: &mut Pool,
    receiver: &mut DepositorPosition,
    caller: &Pubkey,
    shares: u128,
    vault_balance: u64,
    now: i64,
) -> Result<Receipt<Entry>> {
    check_pair(gate, PoolAction::Deposit, caller, &receiver.owner)?;
    settle(
        pool,
        receiver,
        vault_balance,
        now,
        |pool, _| plan_mint(&pool.totals(vault_balance), shares),
        apply_entry,
    )
}

pub fn withdraw<G: AccessGate>(
    gate: &G,
    pool: &mut Pool,
    owner: &mut DepositorPosition,
    assets: u64,
    vault_balance: u64,
    now: i64,
) -> Result<Receipt<Exit>> {
    gate.check(PoolAction::Withdraw, &owner.owner)?;
    settle(
        pool,
        owner,
        vault_balance,
        now,
        |pool, position| {
            plan_withdraw(&pool.totals(vault_balance), &pool.fees, position, assets, vault_balance)
        },
        apply_exit,
    )
}

pub fn redeem<G: AccessGate>(
    gate: &G,
    pool: &mut Pool,
    owner: &mut DepositorPosition,
    shares: u128,
    vault_balance: u64,
    now: i64,
) -> Result<Receipt<Exit>> {
    gate.check(PoolAction::Withdraw, &owner.owner)?;
    settle(
        pool,
        owner,
        vault_balance,
        now,
        |pool, position| {
            plan_redeem(&pool.totals(vault_balance), &pool.fees, position, shares, vault_balance)
        },
        apply_exit,
    )
}

/// Moves shares between two positions of the same pool, carrying basis pro
/// rata so the recipient inherits the sender's cost for those shares.
pub fn transfer_shares<G: AccessGate>(
    gate: &G,
    pool: &mut Pool,
    from: &mut DepositorPosition,
    to: &mut DepositorPosition,
    shares: u128,
    vault_balance: u64,
    now: i64,
) -> Result<Receipt<ShareTransfer>> {
    check_pair(gate, PoolAction::Transfer, &from.owner, &to.owner)?;
    require!(shares > 0, ErrorCode::InvalidAmount);
    require!(from.owner != to.owner, ErrorCode::InvalidPosition);
    require!(shares <= from.shares, ErrorCode::InsufficientBalance);

    let mut next_pool = pool.clone();
    let mut next_from = from.clone();
    let mut next_to = to.clone();

    let annual_fee = accrue_annual_fee(&mut next_pool, vault_balance, now)?;
    let basis_moved = carry_fee::basis_consumed(from.cost_basis, shares, from.shares)?;

    next_from.shares = next_from
        .shares
        .checked_sub(shares)
        .ok_or_else(|| error!(ErrorCode::InsufficientBalance))?;
    next_from.cost_basis = next_from
        .cost_basis
        .checked_sub(basis_moved)
        .ok_or_else(|| error!(ErrorCode::MathOverflow))?;
    next_to.shares = next_to
        .shares
        .checked_add(shares)
        .ok_or_else(|| error!(ErrorCode::MathOverflow))?;
    next_to.cost_basis = next_to
        .cost_basis
        .checked_add(basis_moved)
        .ok_or_else(|| error!(ErrorCode::MathOverflow))?;

    *pool = next_pool;
    *from = next_from;
    *to = next_to;
    Ok(Receipt {
        settlement: ShareTransfer {
            shares,
            basis_moved,
        },
        annual_fee,
    })
}

/// Operator draw of accrued fees out of the vault.
pub fn draw_fee(pool: &mut Pool, amount: u64, vault_balance: u64, now: i64) -> Result<u64> {
    require!(amount <= vault_balance, ErrorCode::InsufficientBalance);
    let mut next = pool.clone();
    let annual_fee = accrue_annual_fee(&mut next, vault_balance, now)?;
    next.ledger.draw(amount)?;
    *pool = next;
    Ok(annual_fee)
}

pub fn repay_fee(pool: &mut Pool, amount: u64, vault_balance: u64, now: i64) -> Result<u64> {
    let mut next = pool.clone();
    let annual_fee = accrue_annual_fee(&mut next, vault_balance, now)?;
    next.ledger.repay(amount)?;
    *pool = next;
    Ok(annual_fee)
}

pub fn set_one_time_fee(pool: &mut Pool, amount: i64, vault_balance: u64, now: i64) -> Result<u64> {
    let mut next = pool.clone();
    let annual_fee = accrue_annual_fee(&mut next, vault_balance, now)?;
    next.ledger.apply_one_time_fee(amount)?;
    *pool = next;
    Ok(annual_fee)
}

pub fn preview_deposit(pool: &Pool, assets: u64, vault_balance: u64, now: i64) -> Result<u128> {
    let totals = projected_totals(pool, vault_balance, now)?;
    Ok(plan_deposit(&totals, assets)?.shares)
}

pub fn preview_mint(pool: &Pool, shares: u128, vault_balance: u64, now: i64) -> Result<u64> {
    let totals = projected_totals(pool, vault_balance, now)?;
    Ok(plan_mint(&totals, shares)?.assets)
}

pub fn preview_withdraw(
    pool: &Pool,
    position: &DepositorPosition,
    assets: u64,
    vault_balance: u64,
    now: i64,
) -> Result<u128> {
    let totals = projected_totals(pool, vault_balance, now)?;
    Ok(plan_withdraw(&totals, &pool.fees, position, assets, vault_balance)?.shares)
}

pub fn preview_redeem(
    pool: &Pool,
    position: &DepositorPosition,
    shares: u128,
    vault_balance: u64,
    now: i64,
) -> Result<u64> {
    let totals = projected_totals(pool, vault_balance, now)?;
    Ok(plan_redeem(&totals, &pool.fees, position, shares, vault_balance)?.assets_out)
}

pub fn max_redeem(position: &DepositorPosition) -> u128 {
    position.shares
}

/// Net assets the owner would receive by redeeming the whole position, capped
/// at what the vault can currently pay out.
pub fn max_withdraw(
    pool: &Pool,
    position: &DepositorPosition,
    vault_balance: u64,
    now: i64,
) -> Result<u64> {
    if position.shares == 0 {
        return Ok(0);
    }
    let totals = projected_totals(pool, vault_balance, now)?;
    if totals.convert_to_assets(position.shares)? == 0 {
        return Ok(0);
    }
    let exit = quote_redeem(&totals, &pool.fees, position, position.shares)?;
    Ok(exit.assets_out.min(vault_balance))
}
