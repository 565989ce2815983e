//! End-to-end transaction scenarios against a default-genesis ledger

use fix_ledger::*;

fn id(s: &str) -> AccountId {
    AccountId::from(s)
}

struct Accounts {
    deployer: AccountId,
    minter: AccountId,
    user1: AccountId,
    user2: AccountId,
}

fn setup() -> (Ledger, Accounts) {
    (
        Ledger::default(),
        Accounts {
            deployer: id("deployer"),
            minter: id("wallet_1"),
            user1: id("wallet_2"),
            user2: id("wallet_3"),
        },
    )
}

/// Apply and return the legacy code on failure
fn code_of<T>(r: LedgerResult<T>) -> Option<u32> {
    r.err().map(|e| e.code())
}

#[test]
fn test_initial_metadata() {
    let (s, _) = setup();
    assert_eq!(s.name(), "FixToken");
    assert_eq!(s.symbol(), "FIX");
    assert_eq!(s.decimals(), 6);
    assert_eq!(s.total_supply(), 0);
}

#[test]
fn test_admin_adds_minter() {
    let (mut s, a) = setup();
    add_minter(&mut s, &a.deployer, &a.minter).unwrap();
    assert!(s.is_minter(&a.minter));
}

#[test]
fn test_non_admin_cannot_add_minter() {
    let (mut s, a) = setup();
    assert_eq!(code_of(add_minter(&mut s, &a.user1, &a.user2)), Some(100));
    assert!(!s.is_minter(&a.user2));
}

#[test]
fn test_add_minter_twice_rejected() {
    let (mut s, a) = setup();
    add_minter(&mut s, &a.deployer, &a.minter).unwrap();
    assert_eq!(code_of(add_minter(&mut s, &a.deployer, &a.minter)), Some(105));
}

#[test]
fn test_remove_minter_is_unconditional() {
    let (mut s, a) = setup();
    add_minter(&mut s, &a.deployer, &a.minter).unwrap();
    remove_minter(&mut s, &a.deployer, &a.minter).unwrap();
    assert!(!s.is_minter(&a.minter));
    // Removing an account that was never a minter also succeeds
    remove_minter(&mut s, &a.deployer, &a.user1).unwrap();
    assert!(!s.is_minter(&a.user1));
    // and it can be re-added afterwards
    add_minter(&mut s, &a.deployer, &a.minter).unwrap();
    assert!(s.is_minter(&a.minter));

    assert_eq!(code_of(remove_minter(&mut s, &a.user1, &a.minter)), Some(100));
}

#[test]
fn test_mint_with_metadata() {
    let (mut s, a) = setup();
    add_minter(&mut s, &a.deployer, &a.minter).unwrap();

    let mint_id = mint(&mut s, &a.minter, 1000, &a.user1, "Reward for solution").unwrap();
    assert_eq!(mint_id, 1);
    assert_eq!(s.balance_of(&a.user1), 1000);
    assert_eq!(s.total_supply(), 1000);

    let record = s.mint_record(1).unwrap();
    assert_eq!(record.amount, 1000);
    assert_eq!(record.recipient, a.user1);
    assert_eq!(record.metadata, "Reward for solution");
    assert_eq!(record.timestamp, 100);
    assert!(s.mint_record(2).is_none());
}

#[test]
fn test_non_minter_cannot_mint() {
    let (mut s, a) = setup();
    assert_eq!(
        code_of(mint(&mut s, &a.user1, 1000, &a.user1, "Unauthorized mint")),
        Some(104)
    );
}

#[test]
fn test_revoked_minter_cannot_mint() {
    let (mut s, a) = setup();
    add_minter(&mut s, &a.deployer, &a.minter).unwrap();
    remove_minter(&mut s, &a.deployer, &a.minter).unwrap();
    assert_eq!(code_of(mint(&mut s, &a.minter, 1, &a.user1, "")), Some(104));
}

#[test]
fn test_mint_rejection_order() {
    let (mut s, a) = setup();

    // zero amount
    assert_eq!(code_of(mint(&mut s, &a.deployer, 0, &a.user1, "")), Some(102));

    // metadata limit counts UTF-16 units, not bytes
    let at_limit: String = "é".repeat(MAX_METADATA_LEN);
    mint(&mut s, &a.deployer, 1, &a.user1, &at_limit).unwrap();
    let over_limit: String = "x".repeat(MAX_METADATA_LEN + 1);
    assert_eq!(
        mint(&mut s, &a.deployer, 1, &a.user1, &over_limit),
        Err(LedgerError::MetadataTooLong)
    );
    // astral characters take two units each: 129 of them are 258 units
    let astral: String = "\u{1F600}".repeat(129);
    assert_eq!(
        mint(&mut s, &a.deployer, 1, &a.user1, &astral),
        Err(LedgerError::MetadataTooLong)
    );
    let astral_at_limit: String = "\u{1F600}".repeat(MAX_METADATA_LEN / 2);
    mint(&mut s, &a.deployer, 1, &a.user1, &astral_at_limit).unwrap();

    // an unauthorized caller is reported before the supply cap
    assert_eq!(
        code_of(mint(&mut s, &a.user2, MAX_SUPPLY, &a.user1, "")),
        Some(104)
    );

    // paused wins over everything
    pause(&mut s, &a.deployer).unwrap();
    assert_eq!(code_of(mint(&mut s, &a.user2, 0, &a.user1, "")), Some(101));
}

#[test]
fn test_mint_ids_are_sequential() {
    let (mut s, a) = setup();
    for n in 1..=5u64 {
        assert_eq!(mint(&mut s, &a.deployer, n, &a.user1, "batch").unwrap(), n);
        assert_eq!(s.mint_counter(), n);
    }
    // failed mints do not consume an id
    assert!(mint(&mut s, &a.deployer, 0, &a.user1, "").is_err());
    assert_eq!(mint(&mut s, &a.deployer, 1, &a.user1, "").unwrap(), 6);
}

#[test]
fn test_mint_beyond_max_supply() {
    let (mut s, a) = setup();
    mint(&mut s, &a.deployer, MAX_SUPPLY, &a.user1, "Max mint").unwrap();
    assert_eq!(s.total_supply(), MAX_SUPPLY);

    let before = s.clone();
    assert_eq!(code_of(mint(&mut s, &a.deployer, 1, &a.user1, "Over")), Some(109));
    assert_eq!(s, before);
}

#[test]
fn test_mint_overflowing_u64_reports_max_supply() {
    let (mut s, a) = setup();
    mint(&mut s, &a.deployer, 10, &a.user1, "").unwrap();
    assert_eq!(
        code_of(mint(&mut s, &a.deployer, u64::MAX, &a.user1, "")),
        Some(109)
    );
}

#[test]
fn test_transfer_between_users() {
    let (mut s, a) = setup();
    add_minter(&mut s, &a.deployer, &a.minter).unwrap();
    mint(&mut s, &a.minter, 1000, &a.user1, "Test mint").unwrap();

    transfer(&mut s, &a.user1, 500, &a.user1, &a.user2).unwrap();
    assert_eq!(s.balance_of(&a.user1), 500);
    assert_eq!(s.balance_of(&a.user2), 500);
    assert_eq!(s.total_supply(), 1000);
}

#[test]
fn test_transfer_insufficient_balance() {
    let (mut s, a) = setup();
    add_minter(&mut s, &a.deployer, &a.minter).unwrap();
    mint(&mut s, &a.minter, 100, &a.user1, "Test mint").unwrap();

    assert_eq!(
        transfer(&mut s, &a.user1, 200, &a.user1, &a.user2),
        Err(LedgerError::InsufficientBalance)
    );
    assert_eq!(code_of(transfer(&mut s, &a.user1, 200, &a.user1, &a.user2)), Some(102));
    assert_eq!(s.balance_of(&a.user1), 100);
    assert_eq!(s.balance_of(&a.user2), 0);
}

#[test]
fn test_transfer_rejection_order() {
    let (mut s, a) = setup();
    mint(&mut s, &a.deployer, 100, &a.user1, "").unwrap();

    // caller != sender
    assert_eq!(code_of(transfer(&mut s, &a.user2, 10, &a.user1, &a.user2)), Some(100));
    // zero amount before self-transfer
    assert_eq!(code_of(transfer(&mut s, &a.user1, 0, &a.user1, &a.user1)), Some(102));
    // self-transfer before balance check
    assert_eq!(code_of(transfer(&mut s, &a.user1, 1000, &a.user1, &a.user1)), Some(103));

    pause(&mut s, &a.deployer).unwrap();
    assert_eq!(code_of(transfer(&mut s, &a.user2, 0, &a.user1, &a.user1)), Some(101));
}

#[test]
fn test_burn() {
    let (mut s, a) = setup();
    add_minter(&mut s, &a.deployer, &a.minter).unwrap();
    mint(&mut s, &a.minter, 1000, &a.user1, "Test mint").unwrap();

    burn(&mut s, &a.user1, 300).unwrap();
    assert_eq!(s.balance_of(&a.user1), 700);
    assert_eq!(s.total_supply(), 700);

    assert_eq!(code_of(burn(&mut s, &a.user1, 0)), Some(102));
    assert_eq!(code_of(burn(&mut s, &a.user1, 701)), Some(102));
    assert_eq!(code_of(burn(&mut s, &a.user2, 1)), Some(102));
}

#[test]
fn test_burn_frees_supply_for_reminting() {
    let (mut s, a) = setup();
    mint(&mut s, &a.deployer, MAX_SUPPLY, &a.user1, "").unwrap();
    burn(&mut s, &a.user1, 10).unwrap();
    mint(&mut s, &a.deployer, 10, &a.user2, "").unwrap();
    assert_eq!(s.total_supply(), MAX_SUPPLY);
    assert!(all_invariants_hold(&s));
}

#[test]
fn test_pause_and_unpause() {
    let (mut s, a) = setup();
    pause(&mut s, &a.deployer).unwrap();
    assert!(s.is_paused());

    assert_eq!(
        code_of(mint(&mut s, &a.deployer, 1000, &a.user1, "Paused mint")),
        Some(101)
    );
    assert_eq!(code_of(burn(&mut s, &a.user1, 1)), Some(101));

    unpause(&mut s, &a.deployer).unwrap();
    assert!(!s.is_paused());
}

#[test]
fn test_pause_is_idempotent() {
    let (mut s, a) = setup();
    pause(&mut s, &a.deployer).unwrap();
    pause(&mut s, &a.deployer).unwrap();
    assert!(s.is_paused());
    unpause(&mut s, &a.deployer).unwrap();
    unpause(&mut s, &a.deployer).unwrap();
    assert!(!s.is_paused());

    assert_eq!(code_of(pause(&mut s, &a.user1)), Some(100));
    assert_eq!(code_of(unpause(&mut s, &a.user1)), Some(100));
}

#[test]
fn test_set_admin_hands_over_authority() {
    let (mut s, a) = setup();
    set_admin(&mut s, &a.deployer, &a.user1).unwrap();
    assert_eq!(s.admin(), &a.user1);

    assert_eq!(code_of(pause(&mut s, &a.deployer)), Some(100));
    pause(&mut s, &a.user1).unwrap();
    assert_eq!(code_of(set_admin(&mut s, &a.deployer, &a.deployer)), Some(100));
}

#[test]
fn test_vesting_schedule_and_claims() {
    let (mut s, a) = setup();
    mint(&mut s, &a.deployer, 10_000, &a.deployer, "Vesting pool").unwrap();

    set_vesting_schedule(&mut s, &a.deployer, &a.user1, 100, 100, 1000).unwrap();

    advance_block(&mut s, 50);
    assert_eq!(claim_vesting(&mut s, &a.user1), Ok(500));
    assert_eq!(s.balance_of(&a.user1), 500);

    advance_block(&mut s, 50);
    assert_eq!(claim_vesting(&mut s, &a.user1), Ok(500));
    assert_eq!(s.balance_of(&a.user1), 1000);

    assert_eq!(code_of(claim_vesting(&mut s, &a.user1)), Some(107));

    assert_eq!(s.balance_of(&a.deployer), 9000);
    assert_eq!(s.total_supply(), 10_000);
    assert_eq!(s.vesting_schedule_of(&a.user1).unwrap().claimed_amount, 1000);
}

#[test]
fn test_vesting_never_pays_past_total() {
    let (mut s, a) = setup();
    mint(&mut s, &a.deployer, 10_000, &a.deployer, "pool").unwrap();
    set_vesting_schedule(&mut s, &a.deployer, &a.user1, 100, 100, 1000).unwrap();

    advance_block(&mut s, 500);
    assert_eq!(claim_vesting(&mut s, &a.user1), Ok(1000));
    advance_block(&mut s, 500);
    assert_eq!(code_of(claim_vesting(&mut s, &a.user1)), Some(107));
}

#[test]
fn test_vesting_errors() {
    let (mut s, a) = setup();
    assert_eq!(code_of(claim_vesting(&mut s, &a.user1)), Some(106));

    assert_eq!(
        code_of(set_vesting_schedule(&mut s, &a.user1, &a.user1, 100, 100, 1000)),
        Some(100)
    );
    assert_eq!(
        code_of(set_vesting_schedule(&mut s, &a.deployer, &a.user1, 100, 0, 1000)),
        Some(102)
    );
    assert_eq!(
        code_of(set_vesting_schedule(&mut s, &a.deployer, &a.user1, 100, 100, 0)),
        Some(102)
    );

    // schedule exists but has not started
    set_vesting_schedule(&mut s, &a.deployer, &a.user1, 150, 100, 1000).unwrap();
    assert_eq!(code_of(claim_vesting(&mut s, &a.user1)), Some(107));

    // vested but the admin pool is empty
    advance_block(&mut s, 100);
    assert_eq!(
        claim_vesting(&mut s, &a.user1),
        Err(LedgerError::InsufficientBalance)
    );
    assert_eq!(s.vesting_schedule_of(&a.user1).unwrap().claimed_amount, 0);
}

#[test]
fn test_vesting_schedule_overwrite_resets_claimed() {
    let (mut s, a) = setup();
    mint(&mut s, &a.deployer, 10_000, &a.deployer, "pool").unwrap();
    set_vesting_schedule(&mut s, &a.deployer, &a.user1, 100, 10, 100).unwrap();
    advance_block(&mut s, 10);
    assert_eq!(claim_vesting(&mut s, &a.user1), Ok(100));

    set_vesting_schedule(&mut s, &a.deployer, &a.user1, 110, 10, 40).unwrap();
    let schedule = s.vesting_schedule_of(&a.user1).unwrap();
    assert_eq!(schedule.claimed_amount, 0);
    assert_eq!(schedule.total_amount, 40);

    advance_block(&mut s, 5);
    assert_eq!(claim_vesting(&mut s, &a.user1), Ok(20));
}

#[test]
fn test_claim_not_gated_by_pause() {
    let (mut s, a) = setup();
    mint(&mut s, &a.deployer, 1000, &a.deployer, "pool").unwrap();
    set_vesting_schedule(&mut s, &a.deployer, &a.user1, 100, 10, 100).unwrap();
    pause(&mut s, &a.deployer).unwrap();
    advance_block(&mut s, 10);
    assert_eq!(claim_vesting(&mut s, &a.user1), Ok(100));
}

#[test]
fn test_effective_balance_projection() {
    let (mut s, a) = setup();
    mint(&mut s, &a.deployer, 10_000, &a.deployer, "pool").unwrap();
    mint(&mut s, &a.deployer, 40, &a.user1, "").unwrap();
    set_vesting_schedule(&mut s, &a.deployer, &a.user1, 100, 100, 1000).unwrap();

    assert_eq!(s.effective_balance(&a.user1), 40);
    advance_block(&mut s, 30);
    assert_eq!(s.effective_balance(&a.user1), 340);

    claim_vesting(&mut s, &a.user1).unwrap();
    assert_eq!(s.balance_of(&a.user1), 340);
    assert_eq!(s.effective_balance(&a.user1), 340);

    // projection keeps growing past the end of the schedule
    advance_block(&mut s, 1000);
    assert_eq!(s.effective_balance(&a.user1), 10_340);
}

#[test]
fn test_effective_balance_uncapped_after_end() {
    let (mut s, a) = setup();
    mint(&mut s, &a.deployer, 10_000, &a.deployer, "pool").unwrap();
    set_vesting_schedule(&mut s, &a.deployer, &a.user1, 100, 100, 1000).unwrap();
    advance_block(&mut s, 200);
    assert_eq!(s.block_height(), 300);
    assert_eq!(s.effective_balance(&a.user1), 2000);

    // claims stay capped at the schedule total
    assert_eq!(claim_vesting(&mut s, &a.user1), Ok(1000));
    assert_eq!(s.balance_of(&a.user1), 1000);
    assert_eq!(s.effective_balance(&a.user1), 2000);
    assert_eq!(code_of(claim_vesting(&mut s, &a.user1)), Some(107));
}

#[test]
fn test_effective_balance_negative_before_start() {
    let (mut s, a) = setup();
    set_vesting_schedule(&mut s, &a.deployer, &a.user1, 200, 100, 1000).unwrap();
    // 100 blocks early: floor(-100 * 1000 / 100) = -1000
    assert_eq!(s.effective_balance(&a.user1), -1000);
}

#[test]
fn test_delegation_lifecycle() {
    let (mut s, a) = setup();
    delegate(&mut s, &a.user1, &a.user2, 200).unwrap();

    let d = s.delegation_of(&a.user1).unwrap();
    assert_eq!(d.delegatee, a.user2);
    assert_eq!(d.until_block, 200);

    assert_eq!(code_of(delegate(&mut s, &a.user1, &a.deployer, 300)), Some(108));

    revoke_delegation(&mut s, &a.user1).unwrap();
    assert!(s.delegation_of(&a.user1).is_none());

    assert_eq!(code_of(revoke_delegation(&mut s, &a.user1)), Some(106));
}

#[test]
fn test_delegation_expiry_must_be_future() {
    let (mut s, a) = setup();
    assert_eq!(code_of(delegate(&mut s, &a.user1, &a.user2, 100)), Some(102));
    assert_eq!(code_of(delegate(&mut s, &a.user1, &a.user2, 50)), Some(102));
    delegate(&mut s, &a.user1, &a.user2, 101).unwrap();
}

#[test]
fn test_expired_delegation_still_blocks() {
    let (mut s, a) = setup();
    delegate(&mut s, &a.user1, &a.user2, 150).unwrap();
    advance_block(&mut s, 100);
    assert!(s.delegation_of(&a.user1).unwrap().is_expired_at(s.block_height()));
    assert_eq!(
        delegate(&mut s, &a.user1, &a.user2, 500),
        Err(LedgerError::DelegationActive)
    );
}

#[test]
fn test_journal_records_successes_only() {
    let (mut s, a) = setup();
    mint(&mut s, &a.deployer, 100, &a.user1, "").unwrap();
    advance_block(&mut s, 7);
    transfer(&mut s, &a.user1, 40, &a.user1, &a.user2).unwrap();
    assert!(transfer(&mut s, &a.user1, 400, &a.user1, &a.user2).is_err());

    let events = s.events();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].block_height, 100);
    assert_eq!(
        events[0].event,
        LedgerEvent::Mint {
            id: 1,
            recipient: a.user1.clone(),
            amount: 100,
        }
    );
    assert_eq!(events[1].block_height, 107);
    assert_eq!(
        events[1].event,
        LedgerEvent::Transfer {
            from: a.user1.clone(),
            to: a.user2.clone(),
            amount: 40,
        }
    );
}

#[test]
fn test_advance_block_saturates() {
    let (mut s, _) = setup();
    advance_block(&mut s, 0);
    assert_eq!(s.block_height(), 100);
    advance_block(&mut s, u64::MAX);
    assert_eq!(s.block_height(), u64::MAX);
}

#[test]
fn test_custom_genesis() {
    let s = Ledger::new(Genesis {
        admin: id("root"),
        minters: vec![id("m1"), id("m2")],
        start_block: 0,
    });
    assert_eq!(s.admin(), &id("root"));
    assert!(s.is_minter(&id("m1")));
    assert!(s.is_minter(&id("m2")));
    assert!(!s.is_minter(&id("root")));
    assert_eq!(s.block_height(), 0);
}
