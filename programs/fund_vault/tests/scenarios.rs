mod common;

use common::{assert_error, investor, Fund};
use fund_vault::{
    constants::SECONDS_PER_YEAR,
    engine::orchestrator,
    error::ErrorCode,
    state::{FeeSchedule, GateMode, PoolInitParams},
};

#[test]
fn redeem_all_pays_withdrawal_fee_to_operator() {
    let mut fund = Fund::new(500, 0, 0);
    let mut alice = investor();

    let entry = fund.deposit(&mut alice, 1_000).unwrap().settlement;
    assert_eq!(entry.shares, 1_000);

    let exit = fund.redeem(&mut alice, 1_000).unwrap().settlement;
    assert_eq!(exit.withdrawal.fee, 50);
    assert_eq!(exit.assets_out, 950);
    assert_eq!(fund.pool.ledger.accrued_fees, 50);
    assert_eq!(fund.vault, 50);
    assert_eq!(fund.total_assets(), 0);
    assert_eq!(alice.shares, 0);
    assert_eq!(alice.cost_basis, 0);
    assert_eq!(fund.pool.total_basis, 0);
}

#[test]
fn withdraw_grosses_up_the_fee() {
    let mut fund = Fund::new(500, 0, 0);
    let mut alice = investor();
    fund.deposit(&mut alice, 1_000).unwrap();

    let exit = fund.withdraw(&mut alice, 300).unwrap().settlement;
    assert_eq!(exit.withdrawal.gross, 316);
    assert_eq!(exit.withdrawal.fee, 16);
    assert_eq!(exit.shares, 316);
    assert_eq!(exit.assets_out, 300);

    assert_eq!(fund.vault, 700);
    assert_eq!(fund.pool.ledger.accrued_fees, 16);
    assert_eq!(fund.total_assets(), 684);
    assert_eq!(alice.shares, 684);
    assert_eq!(alice.cost_basis, 684);
}

#[test]
fn carry_is_charged_on_realized_gain() {
    let mut fund = Fund::new(0, 2_000, 0);
    let mut alice = investor();
    let mut bob = investor();
    fund.deposit(&mut alice, 1_000).unwrap();
    assert_eq!(fund.deposit(&mut bob, 400).unwrap().settlement.shares, 400);

    fund.set_vault(3_500);
    let exit = fund.redeem(&mut alice, 400).unwrap().settlement;
    assert_eq!(exit.withdrawal.gross, 1_000);
    assert_eq!(exit.carry.basis_consumed, 400);
    assert_eq!(exit.carry.gain, 600);
    assert_eq!(exit.carry.fee, 120);
    assert_eq!(exit.assets_out, 880);

    assert_eq!(alice.shares, 600);
    assert_eq!(alice.cost_basis, 600);
    assert_eq!(fund.pool.total_basis, 1_000);
    assert_eq!(fund.pool.ledger.accrued_fees, 120);
    // Remaining holders keep the 2.5 share price.
    assert_eq!(fund.total_assets(), 2_500);
    assert_eq!(fund.pool.total_shares, 1_000);
}

#[test]
fn carry_is_measured_after_withdrawal_fee() {
    let mut fund = Fund::new(500, 2_000, 0);
    let mut alice = investor();
    let mut bob = investor();
    fund.deposit(&mut alice, 1_000).unwrap();
    fund.deposit(&mut bob, 400).unwrap();
    fund.set_vault(3_500);

    let exit = fund.redeem(&mut alice, 400).unwrap().settlement;
    assert_eq!(exit.withdrawal.fee, 50);
    assert_eq!(exit.carry.gain, 550);
    assert_eq!(exit.carry.fee, 110);
    assert_eq!(exit.assets_out, 840);
    assert_eq!(exit.total_fee().unwrap(), 160);
    assert_eq!(fund.pool.ledger.accrued_fees, 160);
}

#[test]
fn withdraw_with_carry_burns_what_redeem_would() {
    let mut fund = Fund::new(0, 2_000, 0);
    let mut alice = investor();
    let mut bob = investor();
    fund.deposit(&mut alice, 1_000).unwrap();
    fund.deposit(&mut bob, 400).unwrap();
    fund.set_vault(3_500);

    let quoted = orchestrator::preview_withdraw(&fund.pool, &alice, 880, fund.vault, fund.now).unwrap();
    assert_eq!(quoted, 400);

    let exit = fund.withdraw(&mut alice, 880).unwrap().settlement;
    assert_eq!(exit.shares, 400);
    assert_eq!(exit.carry.fee, 120);
    assert_eq!(exit.assets_out, 880);
    assert_eq!(fund.vault, 2_620);
    assert_eq!(fund.pool.ledger.accrued_fees, 120);
}

#[test]
fn losses_are_not_charged_carry() {
    let mut fund = Fund::new(0, 2_000, 0);
    let mut alice = investor();
    fund.deposit(&mut alice, 1_000).unwrap();
    fund.set_vault(700);

    let exit = fund.redeem(&mut alice, 1_000).unwrap().settlement;
    assert_eq!(exit.carry.gain, 0);
    assert_eq!(exit.carry.fee, 0);
    assert_eq!(exit.assets_out, 700);
    assert_eq!(fund.pool.ledger.accrued_fees, 0);
}

#[test]
fn zero_fees_return_principal() {
    let mut fund = Fund::new(0, 0, 0);
    let mut alice = investor();
    fund.deposit(&mut alice, 1_000).unwrap();
    assert_eq!(fund.redeem(&mut alice, 1_000).unwrap().settlement.assets_out, 1_000);
    assert_eq!(fund.vault, 0);
}

#[test]
fn highest_withdrawal_fee_leaves_one_unit() {
    let mut fund = Fund::new(9_999, 0, 0);
    let mut alice = investor();
    fund.deposit(&mut alice, 10_000).unwrap();

    let exit = fund.redeem(&mut alice, 10_000).unwrap().settlement;
    assert_eq!(exit.withdrawal.fee, 9_999);
    assert_eq!(exit.assets_out, 1);
}

#[test]
fn full_rate_fees_are_rejected_at_creation() {
    assert_error(FeeSchedule::new(10_000, 0, 0).unwrap_err(), ErrorCode::InvalidFeeBps);
    assert_error(FeeSchedule::new(0, 10_000, 0).unwrap_err(), ErrorCode::InvalidFeeBps);
    assert_error(FeeSchedule::new(0, 0, 10_000).unwrap_err(), ErrorCode::InvalidFeeBps);

    let params = PoolInitParams {
        name: "Growth Fund".to_string(),
        symbol: "GRW".to_string(),
        withdrawal_fee_bps: 100,
        carry_fee_bps: 12_000,
        annual_fee_bps: 200,
        advance_enabled: false,
        one_time_fee_enabled: false,
    };
    assert_error(params.validate().unwrap_err(), ErrorCode::InvalidFeeBps);

    let unnamed = PoolInitParams {
        name: String::new(),
        carry_fee_bps: 2_000,
        ..params
    };
    assert_error(unnamed.validate().unwrap_err(), ErrorCode::InvalidName);
}

#[test]
fn mint_rounds_assets_up() {
    let mut fund = Fund::new(0, 0, 0);
    let mut alice = investor();
    let mut bob = investor();

    assert_eq!(fund.mint(&mut alice, 500).unwrap().settlement.assets, 500);
    fund.set_vault(1_500);
    assert_eq!(fund.mint(&mut bob, 100).unwrap().settlement.assets, 300);
    assert_eq!(bob.cost_basis, 300);

    fund.set_vault(1_801);
    // 1801 * 7 / 600 = 21.01, charged as 22.
    assert_eq!(fund.mint(&mut bob, 7).unwrap().settlement.assets, 22);
}

#[test]
fn annual_fee_accrues_lazily_on_basis() {
    let mut fund = Fund::new(0, 0, 200);
    let mut alice = investor();
    let mut bob = investor();
    fund.deposit(&mut alice, 10_000).unwrap();

    fund.now = SECONDS_PER_YEAR;
    let receipt = fund.deposit(&mut bob, 1_000).unwrap();
    assert_eq!(receipt.annual_fee, 200);
    // Priced after the fee: 1000 * 10_000 / 9_800.
    assert_eq!(receipt.settlement.shares, 1_020);
    assert_eq!(fund.pool.ledger.accrued_fees, 200);
    assert_eq!(fund.pool.last_accrual_ts, SECONDS_PER_YEAR);

    let again = fund.deposit(&mut bob, 1_000).unwrap();
    assert_eq!(again.annual_fee, 0);
}

#[test]
fn annual_fee_never_exceeds_pool_value() {
    let mut fund = Fund::new(0, 0, 9_999);
    let mut alice = investor();
    fund.deposit(&mut alice, 1_000).unwrap();
    fund.set_vault(10);

    fund.now = SECONDS_PER_YEAR * 5;
    let annual = fund.draw_fee(10).unwrap();
    assert_eq!(annual, 10);
    assert_eq!(fund.pool.ledger.accrued_fees, 0);
    assert_eq!(fund.total_assets(), 0);
}

#[test]
fn clock_running_backwards_accrues_nothing() {
    let mut fund = Fund::new(0, 0, 200);
    let mut alice = investor();
    fund.now = 1_000;
    fund.deposit(&mut alice, 10_000).unwrap();
    assert_eq!(fund.pool.last_accrual_ts, 1_000);

    fund.now = 500;
    let receipt = fund.deposit(&mut alice, 10).unwrap();
    assert_eq!(receipt.annual_fee, 0);
    assert_eq!(fund.pool.last_accrual_ts, 1_000);
}

#[test]
fn fee_draws_advances_and_repayments() {
    let mut fund = Fund::new(0, 0, 200);
    let mut alice = investor();
    fund.deposit(&mut alice, 10_000).unwrap();
    fund.now = SECONDS_PER_YEAR;

    assert_eq!(fund.draw_fee(200).unwrap(), 200);
    assert_eq!(fund.pool.ledger.accrued_fees, 0);
    assert_eq!(fund.vault, 9_800);

    assert_error(fund.draw_fee(1).unwrap_err(), ErrorCode::AdvanceDisabled);
    assert_eq!(fund.vault, 9_800);

    fund.pool.ledger.set_advance_enabled(true);
    fund.draw_fee(300).unwrap();
    assert_eq!(fund.pool.ledger.accrued_fees, -300);
    // An advance is owed back to shareholders, so their value is unchanged.
    assert_eq!(fund.total_assets(), 9_800);

    fund.repay_fee(300).unwrap();
    assert_eq!(fund.pool.ledger.accrued_fees, 0);
    assert_eq!(fund.total_assets(), 9_800);

    assert_error(fund.draw_fee(20_000).unwrap_err(), ErrorCode::InsufficientBalance);
}

#[test]
fn one_time_fee_is_disabled_for_good() {
    let mut fund = Fund::new(0, 0, 0);
    let mut alice = investor();
    fund.deposit(&mut alice, 1_000).unwrap();

    orchestrator::set_one_time_fee(&mut fund.pool, 40, fund.vault, fund.now).unwrap();
    assert_eq!(fund.total_assets(), 960);

    fund.pool.ledger.disable_one_time_fee();
    assert_error(
        orchestrator::set_one_time_fee(&mut fund.pool, 40, fund.vault, fund.now).unwrap_err(),
        ErrorCode::OneTimeFeeDisabled,
    );
    assert_eq!(fund.pool.ledger.accrued_fees, 40);
}

#[test]
fn failed_exit_rolls_back_accrual() {
    let mut fund = Fund::new(500, 2_000, 200);
    let mut alice = investor();
    fund.deposit(&mut alice, 10_000).unwrap();
    fund.now = SECONDS_PER_YEAR;

    let before = alice.clone();
    assert_error(
        fund.redeem(&mut alice, 10_001).unwrap_err(),
        ErrorCode::InsufficientBalance,
    );
    assert_error(
        fund.withdraw(&mut alice, 20_000).unwrap_err(),
        ErrorCode::InsufficientBalance,
    );

    assert_eq!(alice.shares, before.shares);
    assert_eq!(alice.cost_basis, before.cost_basis);
    assert_eq!(fund.pool.ledger.accrued_fees, 0);
    assert_eq!(fund.pool.last_accrual_ts, 0);
    assert_eq!(fund.pool.total_shares, 10_000);
    assert_eq!(fund.vault, 10_000);
}

#[test]
fn zero_amounts_are_rejected() {
    let mut fund = Fund::new(0, 0, 0);
    let mut alice = investor();
    assert_error(fund.deposit(&mut alice, 0).unwrap_err(), ErrorCode::InvalidAmount);
    assert_error(fund.mint(&mut alice, 0).unwrap_err(), ErrorCode::InvalidAmount);

    fund.deposit(&mut alice, 100).unwrap();
    assert_error(fund.redeem(&mut alice, 0).unwrap_err(), ErrorCode::InvalidAmount);
    assert_error(fund.withdraw(&mut alice, 0).unwrap_err(), ErrorCode::InvalidAmount);
}

#[test]
fn investors_exit_independently() {
    let mut fund = Fund::new(0, 2_000, 0);
    let mut alice = investor();
    let mut bob = investor();
    fund.deposit(&mut alice, 1_000).unwrap();
    fund.deposit(&mut bob, 400).unwrap();
    fund.set_vault(3_500);

    assert_eq!(orchestrator::max_redeem(&alice), 1_000);
    assert_eq!(
        orchestrator::max_withdraw(&fund.pool, &alice, fund.vault, fund.now).unwrap(),
        2_200
    );
    assert_eq!(
        orchestrator::preview_redeem(&fund.pool, &bob, 400, fund.vault, fund.now).unwrap(),
        880
    );

    let exit = fund.redeem(&mut bob, 400).unwrap().settlement;
    assert_eq!(exit.assets_out, 880);
    assert_eq!(bob.shares, 0);
    assert_eq!(bob.cost_basis, 0);
    assert_eq!(fund.pool.total_basis, 1_000);

    let exit = fund.redeem(&mut alice, 1_000).unwrap().settlement;
    assert_eq!(exit.carry.gain, 1_500);
    assert_eq!(exit.carry.fee, 300);
    assert_eq!(exit.assets_out, 2_200);
    assert_eq!(fund.pool.total_shares, 0);
    assert_eq!(fund.pool.total_basis, 0);
    assert_eq!(fund.vault, 420);
    assert_eq!(fund.pool.ledger.accrued_fees, 420);
}

#[test]
fn transfers_carry_basis_pro_rata() {
    let mut fund = Fund::new(0, 2_000, 0);
    let mut alice = investor();
    let mut bob = investor();
    fund.deposit(&mut alice, 1_000).unwrap();

    let moved = fund.transfer(&mut alice, &mut bob, 250).unwrap().settlement;
    assert_eq!(moved.basis_moved, 250);
    assert_eq!(alice.shares, 750);
    assert_eq!(alice.cost_basis, 750);
    assert_eq!(bob.shares, 250);
    assert_eq!(bob.cost_basis, 250);
    assert_eq!(fund.pool.total_basis, 1_000);

    let mut alice_again = alice.clone();
    assert_error(
        fund.transfer(&mut alice, &mut alice_again, 10).unwrap_err(),
        ErrorCode::InvalidPosition,
    );
    assert_error(
        fund.transfer(&mut bob, &mut alice, 251).unwrap_err(),
        ErrorCode::InsufficientBalance,
    );
}

#[test]
fn gate_refusal_leaves_pool_untouched() {
    let mut fund = Fund::new(0, 0, 0);
    let mut alice = investor();
    let mut bob = investor();
    fund.gate.deposit_mode = GateMode::Allowlisted;
    fund.gate.set_allowlisted(alice.owner, true).unwrap();

    fund.deposit(&mut alice, 1_000).unwrap();
    assert_error(fund.deposit(&mut bob, 1_000).unwrap_err(), ErrorCode::NotAllowlisted);
    assert_eq!(bob.shares, 0);
    assert_eq!(fund.pool.total_shares, 1_000);

    // Allowlisted caller cannot deposit on behalf of someone who is not.
    let caller = alice.owner;
    assert_error(
        orchestrator::deposit(&fund.gate, &mut fund.pool, &mut bob, &caller, 10, fund.vault, fund.now)
            .unwrap_err(),
        ErrorCode::NotAllowlisted,
    );

    fund.gate.transfer_mode = GateMode::Closed;
    assert_error(
        fund.transfer(&mut alice, &mut bob, 10).unwrap_err(),
        ErrorCode::ActionDisabled,
    );

    fund.gate.paused = true;
    assert_error(fund.redeem(&mut alice, 10).unwrap_err(), ErrorCode::PoolPaused);
    assert_eq!(alice.shares, 1_000);
}

#[test]
fn exits_stop_at_the_vault_balance_after_an_advance() {
    let mut fund = Fund::new(0, 0, 0);
    let mut alice = investor();
    fund.deposit(&mut alice, 1_000).unwrap();

    fund.pool.ledger.set_advance_enabled(true);
    fund.draw_fee(300).unwrap();
    assert_eq!(fund.vault, 700);
    assert_eq!(fund.total_assets(), 1_000);

    assert_error(
        fund.redeem(&mut alice, 1_000).unwrap_err(),
        ErrorCode::InsufficientBalance,
    );
    assert_error(
        orchestrator::preview_redeem(&fund.pool, &alice, 1_000, fund.vault, fund.now).unwrap_err(),
        ErrorCode::InsufficientBalance,
    );
    assert_eq!(alice.shares, 1_000);
    assert_eq!(fund.pool.total_shares, 1_000);
    assert_eq!(fund.pool.ledger.accrued_fees, -300);

    assert_eq!(
        orchestrator::max_withdraw(&fund.pool, &alice, fund.vault, fund.now).unwrap(),
        700
    );
    assert_eq!(fund.redeem(&mut alice, 700).unwrap().settlement.assets_out, 700);
    assert_eq!(fund.vault, 0);

    fund.repay_fee(300).unwrap();
    assert_eq!(fund.total_assets(), 300);
    assert_eq!(fund.redeem(&mut alice, 300).unwrap().settlement.assets_out, 300);
}

#[test]
fn exits_stop_at_the_vault_balance_after_a_negative_one_time_fee() {
    let mut fund = Fund::new(0, 0, 0);
    let mut alice = investor();
    fund.deposit(&mut alice, 1_000).unwrap();

    orchestrator::set_one_time_fee(&mut fund.pool, -200, fund.vault, fund.now).unwrap();
    assert_eq!(fund.total_assets(), 1_200);

    assert_error(
        fund.redeem(&mut alice, 1_000).unwrap_err(),
        ErrorCode::InsufficientBalance,
    );
    assert_eq!(alice.shares, 1_000);

    let exit = fund.withdraw(&mut alice, 1_000).unwrap().settlement;
    assert_eq!(exit.shares, 834);
    assert_eq!(fund.vault, 0);
    assert_eq!(alice.shares, 166);

    assert_error(
        fund.withdraw(&mut alice, 1).unwrap_err(),
        ErrorCode::InsufficientBalance,
    );
    assert_eq!(alice.shares, 166);
}

#[test]
fn all_three_fees_settle_together() {
    let mut fund = Fund::new(500, 2_000, 200);
    let mut alice = investor();
    fund.deposit(&mut alice, 10_000).unwrap();

    fund.now = SECONDS_PER_YEAR;
    fund.set_vault(15_000);
    let receipt = fund.redeem(&mut alice, 4_000).unwrap();
    assert_eq!(receipt.annual_fee, 200);

    // Priced against 14_800 after the annual fee.
    let exit = receipt.settlement;
    assert_eq!(exit.withdrawal.gross, 5_920);
    assert_eq!(exit.withdrawal.fee, 296);
    assert_eq!(exit.carry.basis_consumed, 4_000);
    assert_eq!(exit.carry.gain, 1_624);
    assert_eq!(exit.carry.fee, 325);
    assert_eq!(exit.assets_out, 5_299);

    assert_eq!(fund.pool.ledger.accrued_fees, 821);
    assert_eq!(fund.vault, 9_701);
    assert_eq!(fund.total_assets(), 8_880);
    assert_eq!(alice.shares, 6_000);
    assert_eq!(alice.cost_basis, 6_000);
    assert_eq!(fund.pool.total_basis, 6_000);
}

#[test]
fn top_up_at_higher_price_blends_basis() {
    let mut fund = Fund::new(0, 2_000, 0);
    let mut alice = investor();
    fund.deposit(&mut alice, 1_000).unwrap();
    fund.set_vault(2_000);

    assert_eq!(fund.deposit(&mut alice, 1_000).unwrap().settlement.shares, 500);
    assert_eq!(alice.shares, 1_500);
    assert_eq!(alice.cost_basis, 2_000);

    let exit = fund.redeem(&mut alice, 750).unwrap().settlement;
    assert_eq!(exit.withdrawal.gross, 1_500);
    assert_eq!(exit.carry.basis_consumed, 1_000);
    assert_eq!(exit.carry.fee, 100);
    assert_eq!(alice.shares, 750);
    assert_eq!(alice.cost_basis, 1_000);

    let exit = fund.redeem(&mut alice, 750).unwrap().settlement;
    assert_eq!(exit.carry.basis_consumed, 1_000);
    assert_eq!(exit.carry.fee, 100);
    assert_eq!(exit.assets_out, 1_400);
    assert_eq!(alice.cost_basis, 0);
    assert_eq!(fund.pool.total_basis, 0);
}

#[test]
fn later_investors_do_not_change_earlier_carry() {
    let solo_exit = {
        let mut fund = Fund::new(0, 2_000, 0);
        let mut alice = investor();
        fund.deposit(&mut alice, 1_000).unwrap();
        fund.set_vault(2_000);
        fund.redeem(&mut alice, 1_000).unwrap().settlement
    };
    assert_eq!(solo_exit.carry.fee, 200);
    assert_eq!(solo_exit.assets_out, 1_800);

    // Bob joins at twice the entry price and stays.
    let mut fund = Fund::new(0, 2_000, 0);
    let mut alice = investor();
    let mut bob = investor();
    fund.deposit(&mut alice, 1_000).unwrap();
    fund.set_vault(2_000);
    assert_eq!(fund.deposit(&mut bob, 1_000).unwrap().settlement.shares, 500);
    assert_eq!(fund.redeem(&mut alice, 1_000).unwrap().settlement, solo_exit);

    // Bob joins and leaves again before Alice exits.
    let mut fund = Fund::new(0, 2_000, 0);
    let mut alice = investor();
    let mut bob = investor();
    fund.deposit(&mut alice, 1_000).unwrap();
    fund.set_vault(2_000);
    fund.deposit(&mut bob, 1_000).unwrap();
    let bob_exit = fund.redeem(&mut bob, 500).unwrap().settlement;
    assert_eq!(bob_exit.carry.gain, 0);
    assert_eq!(bob_exit.assets_out, 1_000);
    assert_eq!(fund.redeem(&mut alice, 1_000).unwrap().settlement, solo_exit);
}

#[test]
fn highest_withdrawal_fee_on_withdraw_grosses_up_ten_thousandfold() {
    let mut fund = Fund::new(9_999, 0, 0);
    let mut alice = investor();
    fund.deposit(&mut alice, 100_000).unwrap();

    let exit = fund.withdraw(&mut alice, 5).unwrap().settlement;
    assert_eq!(exit.withdrawal.gross, 50_000);
    assert_eq!(exit.withdrawal.fee, 49_995);
    assert_eq!(exit.shares, 50_000);
    assert_eq!(exit.assets_out, 5);

    assert_eq!(fund.vault, 99_995);
    assert_eq!(fund.pool.ledger.accrued_fees, 49_995);
    assert_eq!(fund.total_assets(), 50_000);
    assert_eq!(alice.shares, 50_000);
    assert_eq!(alice.cost_basis, 50_000);

    assert_error(
        fund.withdraw(&mut alice, 6).unwrap_err(),
        ErrorCode::InsufficientBalance,
    );
}
