#![warn(clippy::uninlined_format_args)]

mod model;

pub use model::{CashFlow, CashFlowAction};

/// Tolerance under which a balance counts as settled.
pub const SETTLEMENT_EPSILON: f64 = 1e-9;

/// Computes the transfers that zero out `balances`.
///
/// Positive entries are creditors, negative entries are debtors. Each round
/// pairs the largest debtor with the largest creditor and settles the smaller
/// of the two magnitudes in full, so at most `balances.len() - 1` actions are
/// produced.
pub fn calculate_cash_flow(balances: &[f64]) -> Vec<CashFlowAction> {
    settle(balances).actions
}

/// Same as [`calculate_cash_flow`], also returning the balances left over.
///
/// The residual is settled (see [`is_settled`]) whenever the input sums to
/// zero. An imbalanced input keeps its imbalance on the heavier side.
pub fn settle(balances: &[f64]) -> CashFlow {
    let mut working = balances.to_vec();
    let mut actions = Vec::new();

    if working.is_empty() {
        return CashFlow {
            actions,
            residual: working,
        };
    }

    loop {
        let debtor = min_index(&working);
        let creditor = max_index(&working);
        let max_debit = working[debtor];
        let max_credit = working[creditor];

        // Fixed point: one side is exhausted.
        if !(max_debit < 0.0 && max_credit > 0.0) {
            break;
        }

        let amount = max_debit.abs().min(max_credit);
        working[debtor] += amount;
        working[creditor] -= amount;

        tracing::trace!(
            round = actions.len(),
            from = debtor,
            to = creditor,
            amount,
            "Settled largest debtor against largest creditor"
        );

        actions.push(CashFlowAction {
            amount,
            from: debtor,
            to: creditor,
        });
    }

    tracing::debug!(
        member_count = working.len(),
        action_count = actions.len(),
        "Cash flow calculated"
    );

    CashFlow {
        actions,
        residual: working,
    }
}

/// Applies `actions` in order to a copy of `balances`.
///
/// Out-of-range indices are ignored.
pub fn apply_cash_flow(balances: &[f64], actions: &[CashFlowAction]) -> Vec<f64> {
    let mut result = balances.to_vec();
    for action in actions {
        if action.from >= result.len() || action.to >= result.len() {
            continue;
        }
        result[action.from] += action.amount;
        result[action.to] -= action.amount;
    }
    result
}

pub fn is_settled(balances: &[f64], epsilon: f64) -> bool {
    balances.iter().all(|balance| balance.abs() <= epsilon)
}

// First occurrence wins on ties.
fn min_index(values: &[f64]) -> usize {
    let mut index = 0;
    for (i, value) in values.iter().enumerate() {
        if *value < values[index] {
            index = i;
        }
    }
    index
}

fn max_index(values: &[f64]) -> usize {
    let mut index = 0;
    for (i, value) in values.iter().enumerate() {
        if *value > values[index] {
            index = i;
        }
    }
    index
}

#[cfg(test)]
mod tests {
    use super::{
        CashFlowAction, SETTLEMENT_EPSILON, apply_cash_flow, calculate_cash_flow, is_settled,
        max_index, min_index, settle,
    };
    use proptest::prelude::*;
    use rstest::rstest;

    fn actions(expected: &[(f64, usize, usize)]) -> Vec<CashFlowAction> {
        expected
            .iter()
            .map(|&(amount, from, to)| CashFlowAction { amount, from, to })
            .collect()
    }

    #[rstest]
    #[case::empty(&[], &[])]
    #[case::single_zero(&[0.0], &[])]
    #[case::all_zero(&[0.0, 0.0, 0.0], &[])]
    #[case::single_pair(&[100.0, -100.0], &[(100.0, 1, 0)])]
    #[case::three_way(&[50.0, -20.0, -30.0], &[(30.0, 2, 0), (20.0, 1, 0)])]
    #[case::one_debtor_many_creditors(
        &[-90.0, 30.0, 60.0],
        &[(60.0, 0, 2), (30.0, 0, 1)]
    )]
    #[case::debtor_tie_takes_first(
        &[-10.0, -10.0, 20.0],
        &[(10.0, 0, 2), (10.0, 1, 2)]
    )]
    #[case::creditor_tie_takes_first(
        &[10.0, 10.0, -20.0],
        &[(10.0, 2, 0), (10.0, 2, 1)]
    )]
    #[case::partial_settlement_chain(
        &[40.0, 25.0, -35.0, -30.0],
        &[(35.0, 2, 0), (25.0, 3, 1), (5.0, 3, 0)]
    )]
    fn cash_flow_cases(#[case] balances: &[f64], #[case] expected: &[(f64, usize, usize)]) {
        assert_eq!(calculate_cash_flow(balances), actions(expected));
    }

    #[rstest]
    #[case::creditor_heavy(&[100.0, -30.0], &[(30.0, 1, 0)], &[70.0, 0.0])]
    #[case::debtor_heavy(&[20.0, -50.0, 10.0], &[(20.0, 1, 0), (10.0, 1, 2)], &[0.0, -20.0, 0.0])]
    #[case::only_creditors(&[5.0, 7.0], &[], &[5.0, 7.0])]
    #[case::only_debtors(&[-5.0, -7.0], &[], &[-5.0, -7.0])]
    fn imbalanced_input_keeps_residual(
        #[case] balances: &[f64],
        #[case] expected: &[(f64, usize, usize)],
        #[case] residual: &[f64],
    ) {
        let cash_flow = settle(balances);

        assert_eq!(cash_flow.actions, actions(expected));
        assert_eq!(cash_flow.residual, residual);
    }

    #[test]
    fn settled_vector_is_idempotent() {
        let cash_flow = settle(&[12.5, -7.25, -5.25]);

        assert!(is_settled(&cash_flow.residual, SETTLEMENT_EPSILON));
        assert!(calculate_cash_flow(&cash_flow.residual).is_empty());
    }

    #[test]
    fn input_is_left_untouched() {
        let balances = vec![50.0, -20.0, -30.0];
        let _ = calculate_cash_flow(&balances);

        assert_eq!(balances, vec![50.0, -20.0, -30.0]);
    }

    #[test]
    fn apply_ignores_out_of_range_actions() {
        let result = apply_cash_flow(
            &[10.0, -10.0],
            &[CashFlowAction {
                amount: 10.0,
                from: 1,
                to: 5,
            }],
        );

        assert_eq!(result, vec![10.0, -10.0]);
    }

    #[rstest]
    #[case::ascending(&[1.0, 2.0, 3.0], 0, 2)]
    #[case::descending(&[3.0, 2.0, 1.0], 2, 0)]
    #[case::ties(&[-1.0, 4.0, -1.0, 4.0], 0, 1)]
    fn index_scans(#[case] values: &[f64], #[case] min: usize, #[case] max: usize) {
        assert_eq!(min_index(values), min);
        assert_eq!(max_index(values), max);
    }

    fn zero_sum_balances(cents: Vec<i64>) -> Vec<f64> {
        let mut balances: Vec<f64> = cents.iter().map(|&c| c as f64 / 100.0).collect();
        let total: i64 = cents.iter().sum();
        balances.push(-(total as f64) / 100.0);
        balances
    }

    proptest! {
        #[test]
        fn zero_sum_input_converges(
            cents in prop::collection::vec(-100_000i64..=100_000, 0..=12),
        ) {
            let balances = zero_sum_balances(cents);
            let cash_flow = settle(&balances);

            let applied = apply_cash_flow(&balances, &cash_flow.actions);
            for balance in &applied {
                prop_assert!(balance.abs() <= SETTLEMENT_EPSILON, "balance {balance} not settled");
            }
            prop_assert!(is_settled(&cash_flow.residual, SETTLEMENT_EPSILON));
        }

        #[test]
        fn actions_are_positive_and_bounded(
            balances in prop::collection::vec(-10_000.0f64..=10_000.0, 0..=16),
        ) {
            let result = calculate_cash_flow(&balances);

            prop_assert!(result.len() <= balances.len().saturating_sub(1));
            for action in &result {
                prop_assert!(action.amount > 0.0);
                prop_assert_ne!(action.from, action.to);
                prop_assert!(balances[action.from] < 0.0);
                prop_assert!(balances[action.to] > 0.0);
            }
        }

        #[test]
        fn residual_needs_no_further_actions(
            balances in prop::collection::vec(-10_000.0f64..=10_000.0, 0..=16),
        ) {
            let cash_flow = settle(&balances);
            prop_assert!(calculate_cash_flow(&cash_flow.residual).is_empty());
        }
    }
}
