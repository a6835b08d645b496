#[cfg(feature = "ja")]
pub mod strings {
    pub const MEMBER: &str = "メンバー";
    pub const PAID: &str = "支払額";
    pub const SHARE: &str = "負担額";
    pub const BALANCE: &str = "収支";
    pub const AMOUNT: &str = "金額";
    pub const TRANSFERS_HEADER: &str = "全員を清算するための送金:";
    pub const NONE_NEEDED: &str = "送金は不要です。";
    pub const NO_DESCRIPTION: &str = "(説明なし)";
    pub const NO_TRANSACTIONS: &str = "取引はありません。";
}

// English unless `ja` is enabled.
#[cfg(not(feature = "ja"))]
pub mod strings {
    pub const MEMBER: &str = "Member";
    pub const PAID: &str = "Paid";
    pub const SHARE: &str = "Share";
    pub const BALANCE: &str = "Balance";
    pub const AMOUNT: &str = "Amount";
    pub const TRANSFERS_HEADER: &str = "Money transfers to settle all users:";
    pub const NONE_NEEDED: &str = "None needed.";
    pub const NO_DESCRIPTION: &str = "(no description)";
    pub const NO_TRANSACTIONS: &str = "No transactions.";
}

pub use strings::*;

pub struct ShouldTransferMessage<'a> {
    from: &'a str,
    amount: &'a str,
    to: &'a str,
}

pub struct GroupSummaryMessage<'a> {
    member_count: usize,
    spent: &'a str,
    transaction_count: usize,
}

pub struct UnsettledResidualMessage {
    total: f64,
}

pub fn should_transfer<'a>(from: &'a str, amount: &'a str, to: &'a str) -> ShouldTransferMessage<'a> {
    ShouldTransferMessage { from, amount, to }
}

pub fn group_summary(
    member_count: usize,
    spent: &str,
    transaction_count: usize,
) -> GroupSummaryMessage<'_> {
    GroupSummaryMessage {
        member_count,
        spent,
        transaction_count,
    }
}

pub fn unsettled_residual(total: f64) -> UnsettledResidualMessage {
    UnsettledResidualMessage { total }
}

#[cfg(feature = "ja")]
impl std::fmt::Display for ShouldTransferMessage<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} は {} に {} を送金してください", self.from, self.to, self.amount)
    }
}

#[cfg(feature = "ja")]
impl std::fmt::Display for GroupSummaryMessage<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}人のグループが{}件の取引で{}を支出しました。",
            self.member_count, self.transaction_count, self.spent
        )
    }
}

#[cfg(feature = "ja")]
impl std::fmt::Display for UnsettledResidualMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "収支の合計がゼロではないため、{:.2} が清算されずに残っています。",
            self.total
        )
    }
}

#[cfg(not(feature = "ja"))]
impl std::fmt::Display for ShouldTransferMessage<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} should transfer {} to {}", self.from, self.amount, self.to)
    }
}

#[cfg(not(feature = "ja"))]
impl std::fmt::Display for GroupSummaryMessage<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Group of {} users spent {} over {} transactions.",
            self.member_count, self.spent, self.transaction_count
        )
    }
}

#[cfg(not(feature = "ja"))]
impl std::fmt::Display for UnsettledResidualMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Balances do not sum to zero; {:.2} remains unsettled.",
            self.total
        )
    }
}
