//! Property-based tests for session invariants.
//!
//! These tests use proptest to drive sessions through random sequences of
//! operations and check the money and state invariants after every step.

use cashpoint::core::{Account, Money, SessionState};
use cashpoint::session::{AtmSession, AuthError, WithdrawError};
use proptest::prelude::*;

const ACCOUNTS: [(&str, &str); 3] = [
    ("81975433120", "2311"),
    ("51253524113", "1234"),
    ("00000000001", "9999"),
];

#[derive(Clone, Debug)]
enum Op {
    Authenticate { account: usize, pin: String },
    Withdraw(u64),
    Exit,
}

prop_compose! {
    fn arbitrary_session()(
        cash in 0..100_000u64,
        balances in prop::array::uniform3(0..50_000u64),
    ) -> AtmSession {
        let accounts = ACCOUNTS
            .iter()
            .zip(balances)
            .map(|((number, pin), balance)| Account::new(*number, *pin, Money::from_minor(balance)));
        AtmSession::new(Money::from_minor(cash), accounts).unwrap()
    }
}

fn arbitrary_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0..ACCOUNTS.len(), prop::bool::ANY).prop_map(|(account, correct)| Op::Authenticate {
            account,
            pin: if correct {
                ACCOUNTS[account].1.to_string()
            } else {
                "0000".to_string()
            },
        }),
        (0..60_000u64).prop_map(Op::Withdraw),
        Just(Op::Exit),
    ]
}

fn total_money(atm: &AtmSession) -> u128 {
    atm.accounts().map(|a| a.balance().minor() as u128).sum::<u128>()
        + atm.available_cash().minor() as u128
}

proptest! {
    #[test]
    fn every_account_authenticates_from_idle(mut atm in arbitrary_session(), index in 0..ACCOUNTS.len()) {
        let (number, pin) = ACCOUNTS[index];

        prop_assert_eq!(atm.authenticate(number, pin), Ok(()));
        prop_assert_eq!(atm.state().name(), "Authenticated");
        prop_assert_eq!(atm.active_account().unwrap().account_number().as_str(), number);
        prop_assert_eq!(atm.authenticate(number, pin), Err(AuthError::AlreadyAuthenticated));
    }

    #[test]
    fn mismatched_credentials_leave_session_idle(
        mut atm in arbitrary_session(),
        number in "[0-9]{1,11}",
        pin in "[0-9]{4}",
    ) {
        let matches_account = ACCOUNTS.iter().any(|(n, p)| *n == number && *p == pin);
        prop_assume!(!matches_account);

        let result = atm.authenticate(&number, &pin);
        prop_assert!(matches!(
            result,
            Err(AuthError::AccountNotFound) | Err(AuthError::InvalidPin)
        ));
        prop_assert_eq!(atm.state(), &SessionState::Idle);
        prop_assert!(atm.active_account().is_none());
    }

    #[test]
    fn successful_withdrawal_conserves_money(
        mut atm in arbitrary_session(),
        index in 0..ACCOUNTS.len(),
        amount in 1..60_000u64,
    ) {
        let (number, pin) = ACCOUNTS[index];
        atm.authenticate(number, pin).unwrap();

        let cash_before = atm.available_cash();
        let balances_before: Vec<(String, Money)> = atm
            .accounts()
            .map(|a| (a.account_number().to_string(), a.balance()))
            .collect();

        let amount = Money::from_minor(amount);
        match atm.withdraw(amount) {
            Ok(()) => {
                prop_assert_eq!(atm.available_cash().checked_add(amount), Some(cash_before));
                for (n, before) in &balances_before {
                    let after = atm.account(n).unwrap().balance();
                    if n == number {
                        prop_assert_eq!(after.checked_add(amount), Some(*before));
                    } else {
                        prop_assert_eq!(after, *before);
                    }
                }
            }
            Err(_) => {
                prop_assert_eq!(atm.available_cash(), cash_before);
                for (n, before) in &balances_before {
                    prop_assert_eq!(atm.account(n).unwrap().balance(), *before);
                }
            }
        }
        prop_assert_eq!(atm.state().name(), "Authenticated");
    }

    #[test]
    fn withdrawal_errors_follow_check_order(
        mut atm in arbitrary_session(),
        index in 0..ACCOUNTS.len(),
        amount in 0..60_000u64,
    ) {
        let (number, pin) = ACCOUNTS[index];
        atm.authenticate(number, pin).unwrap();
        let cash = atm.available_cash();
        let balance = atm.active_account().unwrap().balance();
        let amount = Money::from_minor(amount);

        let expected = if amount.is_zero() {
            Err(WithdrawError::InvalidAmount)
        } else if balance < amount {
            Err(WithdrawError::InsufficientAccountBalance { requested: amount, balance })
        } else if cash < amount {
            Err(WithdrawError::InsufficientMachineCash { requested: amount, available: cash })
        } else {
            Ok(())
        };

        prop_assert_eq!(atm.withdraw(amount), expected);
    }

    #[test]
    fn random_operations_preserve_invariants(
        mut atm in arbitrary_session(),
        ops in prop::collection::vec(arbitrary_op(), 0..40),
    ) {
        let mut withdrawn: u128 = 0;
        let total_before = total_money(&atm);

        for op in ops {
            match op {
                Op::Authenticate { account, pin } => {
                    let _ = atm.authenticate(ACCOUNTS[account].0, &pin);
                }
                Op::Withdraw(amount) => {
                    if atm.withdraw(Money::from_minor(amount)).is_ok() {
                        withdrawn += amount as u128;
                    }
                }
                Op::Exit => {
                    let _ = atm.exit();
                }
            }

            // Operations always come to rest outside Withdrawing, and an
            // active account exists exactly when authenticated.
            prop_assert_ne!(atm.state().name(), "Withdrawing");
            prop_assert_eq!(atm.active_account().is_some(), atm.state().is_authenticated());
        }

        prop_assert_eq!(total_money(&atm) + 2 * withdrawn, total_before);
    }

    #[test]
    fn history_only_records_legal_edges(
        mut atm in arbitrary_session(),
        ops in prop::collection::vec(arbitrary_op(), 0..40),
    ) {
        for op in ops {
            match op {
                Op::Authenticate { account, pin } => {
                    let _ = atm.authenticate(ACCOUNTS[account].0, &pin);
                }
                Op::Withdraw(amount) => {
                    let _ = atm.withdraw(Money::from_minor(amount));
                }
                Op::Exit => {
                    let _ = atm.exit();
                }
            }
        }

        for transition in atm.history().transitions() {
            prop_assert!(transition.from.can_transition_to(&transition.to));
        }
        if let Some(last) = atm.history().transitions().last() {
            prop_assert_eq!(&last.to, atm.state());
        }
    }
}
