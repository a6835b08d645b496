use crate::model::{AmountLimits, ExpenseLine, Group, MemberAmounts, PersonBalance, Transaction};

/// Derives member balances from a group's transaction history
pub struct BalanceCalculator;

impl BalanceCalculator {
    /// Paid and share totals for the member with `email`.
    ///
    /// A positive entry counts as paid, and the payer then also carries the
    /// part of the transaction nobody else was charged for (the negated sum
    /// of all entries). A negative entry is the member's share.
    pub fn member_amounts(&self, group: &Group, email: &str) -> MemberAmounts {
        let mut amounts = MemberAmounts::default();
        for transaction in group.transactions() {
            let Some(&amount) = transaction.expenses.get(email) else {
                continue;
            };
            if amount > 0.0 {
                amounts.paid += amount;
                amounts.share -= transaction.total();
            } else {
                amounts.share += amount;
            }
        }
        amounts
    }

    /// Net position of every member, in group member order.
    ///
    /// Positive means the member is owed money, negative means they owe.
    /// This is the sign convention the settlement core expects.
    pub fn net_balances<'a>(&self, group: &'a Group) -> Vec<PersonBalance<'a>> {
        group
            .members()
            .iter()
            .map(|member| PersonBalance {
                member,
                balance: self.member_amounts(group, &member.email).net(),
            })
            .collect()
    }

    pub fn amount_limits(&self, group: &Group) -> AmountLimits {
        let mut max_paid = 0.0_f64;
        let mut min_share = 0.0_f64;
        for member in group.members() {
            let amounts = self.member_amounts(group, &member.email);
            max_paid = max_paid.max(amounts.paid);
            min_share = min_share.min(amounts.share);
        }
        AmountLimits {
            max_paid,
            min_share,
            scale: max_paid.max(min_share.abs()),
        }
    }

    pub fn total_spent(&self, group: &Group) -> f64 {
        group
            .members()
            .iter()
            .map(|member| self.member_amounts(group, &member.email).paid)
            .sum()
    }

    /// Non-zero entries of `transaction`, largest magnitude first.
    ///
    /// Names fall back to the email for addresses that are not members.
    pub fn transaction_expenses<'a>(
        &self,
        group: &'a Group,
        transaction: &'a Transaction,
    ) -> Vec<ExpenseLine<'a>> {
        let mut lines: Vec<ExpenseLine<'a>> = transaction
            .expenses
            .iter()
            .filter(|(_, amount)| **amount != 0.0)
            .map(|(email, &amount)| ExpenseLine {
                email,
                name: group
                    .member(email)
                    .map_or(email.as_str(), |member| member.name.as_str()),
                amount,
            })
            .collect();
        lines.sort_by(|lhs, rhs| rhs.amount.abs().total_cmp(&lhs.amount.abs()));
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Member, Transaction};
    use indexmap::IndexMap;
    use rstest::{fixture, rstest};

    fn expenses(entries: &[(&str, f64)]) -> IndexMap<String, f64> {
        entries
            .iter()
            .map(|&(email, amount)| (email.to_string(), amount))
            .collect()
    }

    #[fixture]
    fn calculator() -> BalanceCalculator {
        BalanceCalculator
    }

    #[fixture]
    fn trip() -> Group {
        Group::try_new(
            "trip",
            "Trip",
            vec![
                Member::new("Alice", "alice@example.com"),
                Member::new("Bob", "bob@example.com"),
                Member::new("Carol", "carol@example.com"),
            ],
            vec![
                Transaction::new(
                    "hotel",
                    expenses(&[
                        ("alice@example.com", 90.0),
                        ("bob@example.com", -30.0),
                        ("carol@example.com", -30.0),
                    ]),
                ),
                Transaction::new(
                    "dinner",
                    expenses(&[
                        ("bob@example.com", 40.0),
                        ("alice@example.com", -20.0),
                        ("carol@example.com", 0.0),
                    ]),
                ),
            ],
        )
        .expect("valid group")
    }

    #[rstest]
    #[case::payer_of_largest("alice@example.com", 90.0, -50.0)]
    #[case::payer_and_debtor("bob@example.com", 40.0, -50.0)]
    #[case::debtor_only("carol@example.com", 0.0, -30.0)]
    #[case::not_a_member("dave@example.com", 0.0, 0.0)]
    fn member_amounts_cases(
        calculator: BalanceCalculator,
        trip: Group,
        #[case] email: &str,
        #[case] paid: f64,
        #[case] share: f64,
    ) {
        assert_eq!(
            calculator.member_amounts(&trip, email),
            MemberAmounts { paid, share }
        );
    }

    #[rstest]
    fn net_balances_follow_member_order(calculator: BalanceCalculator, trip: Group) {
        let balances: Vec<(&str, f64)> = calculator
            .net_balances(&trip)
            .iter()
            .map(|person| (person.member.name.as_str(), person.balance))
            .collect();

        assert_eq!(
            balances,
            vec![("Alice", 40.0), ("Bob", -10.0), ("Carol", -30.0)]
        );
    }

    #[rstest]
    fn limits_and_total(calculator: BalanceCalculator, trip: Group) {
        assert_eq!(
            calculator.amount_limits(&trip),
            AmountLimits {
                max_paid: 90.0,
                min_share: -50.0,
                scale: 90.0,
            }
        );
        assert_eq!(calculator.total_spent(&trip), 130.0);
    }

    #[rstest]
    fn expenses_skip_zero_and_sort_by_magnitude(calculator: BalanceCalculator, trip: Group) {
        let dinner = &trip.transactions()[1];
        let lines: Vec<(&str, f64)> = calculator
            .transaction_expenses(&trip, dinner)
            .iter()
            .map(|line| (line.name, line.amount))
            .collect();

        assert_eq!(lines, vec![("Bob", 40.0), ("Alice", -20.0)]);
    }

    #[rstest]
    fn empty_group_has_no_limits(calculator: BalanceCalculator) {
        let group = Group::try_new("empty", "Empty", Vec::new(), Vec::new()).expect("valid group");

        assert_eq!(calculator.amount_limits(&group), AmountLimits::default());
        assert!(calculator.net_balances(&group).is_empty());
    }
}
