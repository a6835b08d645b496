use crate::{
    model::{Group, GroupSettlement, Transfer},
    services::BalanceCalculator,
};

/// Settles a whole group
pub struct SettlementCalculator;

impl SettlementCalculator {
    /// Computes the transfers that bring every member of `group` to zero.
    ///
    /// Balances are taken from [`BalanceCalculator::net_balances`], so the
    /// vector handed to the core is always creditor-positive. A group whose
    /// balances do not sum to zero still settles as far as possible; the
    /// leftover stays in `residual`.
    pub fn settle<'a>(&self, group: &'a Group) -> GroupSettlement<'a> {
        let balances = BalanceCalculator.net_balances(group);
        let vector: Vec<f64> = balances.iter().map(|person| person.balance).collect();
        let cash_flow = tally_calc::settle(&vector);

        let transfers = cash_flow
            .actions
            .iter()
            .map(|action| Transfer {
                from: balances[action.from].member,
                to: balances[action.to].member,
                amount: action.amount,
            })
            .collect();

        let settlement = GroupSettlement {
            balances,
            transfers,
            residual: cash_flow.residual,
        };

        if !settlement.is_settled() {
            tracing::warn!(
                group_id = group.id(),
                member_count = group.members().len(),
                residual_total = settlement.residual_total(),
                "Group balances do not sum to zero; settlement left a residual"
            );
        }

        settlement
    }
}
