use std::{borrow::Cow, fmt::Write as _};

use tally_domain::{BalanceCalculator, Group, GroupSettlement, Member};
use tally_i18n as i18n;

use crate::{
    format_amount, format_signed_amount,
    text_table::{Alignment, TextTable},
};

pub struct ReportPresenter;

impl ReportPresenter {
    /// Renders the settlement report of `group`.
    ///
    /// `settlement` must have been computed from the same group.
    pub fn render(group: &Group, settlement: &GroupSettlement<'_>) -> String {
        let mut out = String::new();

        match group.currency_code() {
            Some(code) => {
                let _ = writeln!(out, "{} ({code})", group.title());
            }
            None => {
                let _ = writeln!(out, "{}", group.title());
            }
        }
        let spent = format_amount(BalanceCalculator.total_spent(group));
        let _ = writeln!(
            out,
            "{}",
            i18n::group_summary(
                group.members().len(),
                &spent,
                group.transactions().len()
            )
        );
        out.push('\n');

        out.push_str(&Self::build_balance_table(group, settlement));
        out.push('\n');
        out.push_str(&Self::build_transfer_lines(settlement));

        if !settlement.is_settled() {
            let _ = writeln!(
                out,
                "{}",
                i18n::unsettled_residual(settlement.residual_total())
            );
        }

        out
    }

    pub fn build_balance_table(group: &Group, settlement: &GroupSettlement<'_>) -> String {
        let mut table = TextTable::new([
            (i18n::MEMBER, Alignment::Left),
            (i18n::PAID, Alignment::Right),
            (i18n::SHARE, Alignment::Right),
            (i18n::BALANCE, Alignment::Right),
        ]);

        for person in &settlement.balances {
            let amounts = BalanceCalculator.member_amounts(group, &person.member.email);
            table.push_row([
                Cow::Borrowed(person.member.name.as_str()),
                Cow::Owned(format_amount(amounts.paid)),
                Cow::Owned(format_amount(amounts.share)),
                Cow::Owned(format_signed_amount(person.balance)),
            ]);
        }

        table.render()
    }

    pub fn build_transfer_lines(settlement: &GroupSettlement<'_>) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}", i18n::TRANSFERS_HEADER);

        if settlement.transfers.is_empty() {
            let _ = writeln!(out, "  {}", i18n::NONE_NEEDED);
            return out;
        }

        for transfer in &settlement.transfers {
            let from = member_label(transfer.from);
            let to = member_label(transfer.to);
            let amount = format_amount(transfer.amount);
            let _ = writeln!(out, "  {}", i18n::should_transfer(&from, &amount, &to));
        }

        out
    }
}

fn member_label(member: &Member) -> String {
    if member.name == member.email {
        member.email.clone()
    } else {
        format!("{} ({})", member.name, member.email)
    }
}
