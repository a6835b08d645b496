use std::{borrow::Cow, fmt::Write as _};

use tally_domain::{BalanceCalculator, Group};
use tally_i18n as i18n;

use crate::{
    format_signed_amount,
    text_table::{Alignment, TextTable},
};

pub struct TransactionsPresenter;

impl TransactionsPresenter {
    /// Lists every transaction, largest payment first, with its expense lines.
    pub fn render(group: &Group) -> String {
        let transactions = group.transactions_by_largest_payment();
        if transactions.is_empty() {
            return format!("{}\n", i18n::NO_TRANSACTIONS);
        }

        let mut out = String::new();
        for (idx, transaction) in transactions.into_iter().enumerate() {
            if idx > 0 {
                out.push('\n');
            }
            let description = transaction
                .description
                .as_deref()
                .unwrap_or(i18n::NO_DESCRIPTION);
            let _ = writeln!(out, "{description} [{}]", transaction.id);

            let mut table =
                TextTable::new([(i18n::MEMBER, Alignment::Left), (i18n::AMOUNT, Alignment::Right)]);
            for line in BalanceCalculator.transaction_expenses(group, transaction) {
                table.push_row([
                    Cow::Borrowed(line.name),
                    Cow::Owned(format_signed_amount(line.amount)),
                ]);
            }
            out.push_str(&table.render());
        }
        out
    }
}
